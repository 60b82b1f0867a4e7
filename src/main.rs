use clap::{Parser, Subcommand};
use kbsearch::kbcore::config::{Config, CFG_NAME};
use kbsearch::kbcore::doc::load_documents;
use kbsearch::kbcore::engine::{Engine, SearchHit, SearchRequest};
use kbsearch::kbcore::error::Result;
use kbsearch::kbcore::query;
use kbsearch::kbcore::SearchMode;
use std::path::Path;
use std::process;

#[derive(Parser)]
#[derive(Debug)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
/// Boolean and TF-IDF search over a knowledge-base export
struct Cli {
    #[clap(short, long, value_parser, default_value_t = String::from(CFG_NAME))]
    /// Configuration file
    config: String,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[derive(Debug)]
enum Commands {
    /// Search the documents of a knowledge-base export
    Search {
        #[clap(value_parser)]
        /// Query, e.g. '"lazy dog" AND fox'
        query: String,
        #[clap(short = 'f', long, value_parser)]
        /// Knowledge-base export (JSON array or JSON lines)
        corpus: String,
        #[clap(short, long, value_parser)]
        /// boolean, vector or auto
        mode: Option<String>,
        #[clap(short = 'k', long, value_parser)]
        /// Maximum number of ranked results
        top_k: Option<usize>,
        #[clap(short, long, value_parser)]
        /// Only search documents of this topic
        topic: Option<String>,
        #[clap(long, action)]
        /// Print hits as JSON
        json: bool,
    },
    /// Evaluate a boolean query against a piece of text
    Match {
        #[clap(value_parser)]
        query: String,
        #[clap(value_parser)]
        text: String,
    },
    /// Show corpus and vocabulary statistics
    Info {
        #[clap(short = 'f', long, value_parser)]
        /// Knowledge-base export (JSON array or JSON lines)
        corpus: String,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::load(Path::new(&cli.config))?;
    match &cli.command {
        Commands::Search { query, corpus, mode, top_k, topic, json } => {
            if query.trim().is_empty() {
                eprintln!("error: empty query");
                process::exit(2);
            }
            let mode = match mode {
                Some(m) => m.parse::<SearchMode>()?,
                None => config.search.mode,
            };
            let request = SearchRequest::new(query.as_str())
                .mode(mode)
                .top_k(top_k.unwrap_or(config.search.top_k))
                .topic(topic.clone());
            let engine = load_engine(corpus, &config)?;
            let hits = engine.execute(&request)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&hits)?);
            } else {
                print_hits(&hits);
            }
        }
        Commands::Match { query, text } => {
            println!("{}", query::matches(text, query));
        }
        Commands::Info { corpus } => {
            let engine = load_engine(corpus, &config)?;
            let stats = engine.stats()?;
            println!("{} documents", stats.document_count);
            println!("{} terms", stats.index.vocabulary_size);
            println!("{:.1} tokens per document", stats.index.average_document_length);
            for (term, df) in stats.index.top_terms {
                println!("  {}: {}", term, df);
            }
        }
    }
    Ok(())
}

fn load_engine(corpus: &str, config: &Config) -> Result<Engine> {
    let documents = load_documents(Path::new(corpus), &config.corpus)?;
    let mut engine = Engine::from_config(&config.search);
    engine.reindex(documents);
    Ok(engine)
}

fn print_hits(hits: &[SearchHit]) {
    if hits.is_empty() {
        println!("no results");
        return;
    }
    println!("{} results", hits.len());
    for (i, hit) in hits.iter().enumerate() {
        let doc = &hit.document;
        match hit.score {
            Some(score) => println!("{}: [{:.3}] {} ({})", i + 1, score, doc.get_title(), doc.get_id()),
            None => println!("{}: {} ({})", i + 1, doc.get_title(), doc.get_id()),
        }
    }
}
