use crate::extraction::{LanguageExtractor, common};
use crate::parsers::Language;
use crate::parsers::heuristic::javascript;
use crate::report::Extraction;

pub struct JavaScriptExtractor;

impl JavaScriptExtractor {
    pub fn new() -> Self {
        JavaScriptExtractor
    }
}

impl LanguageExtractor for JavaScriptExtractor {
    fn extract_functions(&self, content: &str) -> Extraction {
        common::heuristic_extraction(content, javascript::scanner(), Language::JavaScript)
    }
}
