pub mod api;
pub mod error;
pub mod resolver;
pub mod schema;
pub mod serialization;
pub mod utils;
pub mod variants;

pub use api::{analyze, AnalysisResult, SUPPORTED_SCHEMA};
