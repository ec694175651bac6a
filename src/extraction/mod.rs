mod common;
mod cpp;
mod javascript;
mod python;

use crate::parsers::{Language, detect_language};
use crate::report::{Diagnostic, Extraction};
use log::{debug, trace, warn};

// Trait implemented by every language-specific extractor
pub trait LanguageExtractor {
    /// Finds function definitions in file order. Failures are reported as
    /// diagnostics on the returned extraction, never as errors.
    fn extract_functions(&self, content: &str) -> Extraction;
}

// Factory function to get the appropriate extractor for a language
pub fn get_extractor_for_language(language: Language) -> Box<dyn LanguageExtractor> {
    match language {
        Language::Python => Box::new(python::PythonExtractor::new()),
        Language::C | Language::Cpp => Box::new(cpp::CppExtractor::new(language)),
        Language::JavaScript => Box::new(javascript::JavaScriptExtractor::new()),
    }
}

/// Extracts the function definitions of `source`, written in the language
/// named by `language_tag`.
///
/// An unknown tag yields no functions and a warning.
pub fn extract_functions(source: &str, language_tag: &str) -> Extraction {
    trace!("Extracting functions ({} bytes, tag {:?})", source.len(), language_tag);

    let Some(language) = detect_language(language_tag) else {
        warn!("Unsupported language: {}", language_tag);
        return Extraction::failed(Diagnostic::warning(format!(
            "Unsupported language: {}",
            language_tag
        )));
    };

    let extraction = get_extractor_for_language(language).extract_functions(source);
    debug!(
        "Extracted {} functions from {} source ({} diagnostics)",
        extraction.functions.len(),
        language,
        extraction.diagnostics.len()
    );

    extraction
}
