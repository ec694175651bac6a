use crate::extraction::{LanguageExtractor, common};
use crate::parsers::Language;
use crate::parsers::heuristic::c_family;
use crate::report::Extraction;

/// Header/brace scanner for C and C++ sources.
pub struct CppExtractor {
    language: Language,
}

impl CppExtractor {
    pub fn new(language: Language) -> Self {
        CppExtractor { language }
    }
}

impl LanguageExtractor for CppExtractor {
    fn extract_functions(&self, content: &str) -> Extraction {
        common::heuristic_extraction(content, c_family::scanner(), self.language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_blocks_end_at_the_closing_brace() {
        let source = "\
int clamp(int v) {
    if (v > 10) {
        for (;;) { break; }
        return 10;
    }
    return v;
}
int after(void) { return 0; }
";
        let extraction = CppExtractor::new(Language::Cpp).extract_functions(source);
        assert_eq!(extraction.names(), vec!["clamp", "after"]);

        let clamp = &extraction.functions[0];
        assert!(clamp.snippet.starts_with("int clamp(int v) {"));
        assert!(clamp.snippet.ends_with("    return v;\n}"));
        assert_eq!(clamp.line_range, (1, 7));
    }

    #[test]
    fn unbalanced_body_is_reported() {
        let extraction = CppExtractor::new(Language::Cpp).extract_functions("void f() {\n    if (x) {\n");
        assert_eq!(extraction.names(), vec!["f"]);
        assert_eq!(extraction.diagnostics.len(), 1);
        assert!(extraction.diagnostics[0].message.contains("`f`"));
    }
}
