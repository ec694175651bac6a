pub mod common;
pub mod heuristic;
pub mod treesitter;

pub use common::{Language, detect_language};
