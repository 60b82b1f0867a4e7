pub mod kbcore;
