pub mod config;
pub mod extraction;
pub mod llm;
pub mod parsers;
pub mod pipeline;
pub mod report;
pub mod synthesis;
pub mod utils;
pub mod web;

pub use config::{Config, ConfigError};
pub use extraction::extract_functions;
pub use pipeline::{AnalysisError, analyze};
pub use report::{AnalysisReport, Extraction, FunctionRecord, Requirement, SourceDocument};
pub use synthesis::Synthesizer;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
