use crate::parsers::Language;
use log::warn;
use std::collections::HashMap;
use tree_sitter::{Parser, Tree};

pub mod bindings;
pub mod languages;
pub mod queries;

pub struct TreeSitterParser {
    parser: Parser,
    language_parsers: HashMap<Language, tree_sitter::Language>,
}

impl TreeSitterParser {
    pub fn new() -> Self {
        let parser = Parser::new();
        let language_parsers = languages::get_language_parsers();

        Self {
            parser,
            language_parsers,
        }
    }

    pub fn parse(&mut self, language: Language, content: &str) -> Option<Tree> {
        let grammar = self.language_parsers.get(&language)?;

        if let Err(e) = self.parser.set_language(grammar) {
            warn!("Failed to load {} grammar: {}", language, e);
            return None;
        }

        self.parser.parse(content.as_bytes(), None)
    }
}

impl Default for TreeSitterParser {
    fn default() -> Self {
        Self::new()
    }
}
