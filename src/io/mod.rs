//! File I/O: assessment JSON export/import.

pub mod export;
