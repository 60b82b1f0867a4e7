use crate::kbcore::config::{CorpusConfig, FileType};
use crate::kbcore::doc::{json, jsonlines, Document};
use crate::kbcore::error::Result;
use encoding_rs::WINDOWS_1251;
use encoding_rs_io::DecodeReaderBytesBuilder;
use std::fs;
use std::io::Read;
use std::path::Path;

pub type FnParseString = fn(&str, &str, &CorpusConfig) -> Result<Vec<Document>>;

fn handler(file_type: FileType) -> FnParseString {
    match file_type {
        FileType::Json => json::parse_json,
        FileType::JsonLines => jsonlines::parse_jsonlines,
    }
}

/// Load a knowledge-base export into an ordered document snapshot.
pub fn load_documents(path: &Path, cfg: &CorpusConfig) -> Result<Vec<Document>> {
    let source = path.to_string_lossy().to_string();
    let text = read_text(path)?;
    let docs = handler(cfg.file_type)(&source, &text, cfg)?;
    log::info!("{}: {} documents loaded", source, docs.len());
    Ok(docs)
}

/// UTF-8 (BOM tolerated), falling back to Windows-1251 for legacy exports.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            log::debug!("{} is not UTF-8, decoding as windows-1251", path.display());
            decode_legacy(e.as_bytes())?
        }
    };
    Ok(text.trim_start_matches('\u{feff}').to_string())
}

fn decode_legacy(bytes: &[u8]) -> Result<String> {
    let mut decoder = DecodeReaderBytesBuilder::new()
        .encoding(Some(WINDOWS_1251))
        .build(bytes);
    let mut dest = String::new();
    decoder.read_to_string(&mut dest)?;
    Ok(dest)
}
