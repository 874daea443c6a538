//! Common module - Shared types, errors and traits

pub mod errors;
pub mod traits;
pub mod types;
