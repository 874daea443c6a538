//! Stats module - Fetch, parse and evaluate server statistics

pub mod evaluator;
pub mod fetcher;
pub mod parser;

pub use evaluator::{evaluate, report};
pub use fetcher::StatsFetcher;
pub use parser::parse_stats;
