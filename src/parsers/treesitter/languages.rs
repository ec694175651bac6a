use crate::parsers::Language;
use std::collections::HashMap;

use super::bindings;

/// Grammars bundled with the crate. Languages missing here fall back to the
/// heuristic scanner.
pub fn get_language_parsers() -> HashMap<Language, tree_sitter::Language> {
    let mut parsers = HashMap::new();

    parsers.insert(Language::Python, bindings::python_language());

    parsers
}
