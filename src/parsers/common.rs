use serde::{Deserialize, Serialize};
use std::fmt;

/// Languages the extractor knows how to find functions in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Python,
    C,
    Cpp,
    JavaScript,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::Python,
        Language::C,
        Language::Cpp,
        Language::JavaScript,
    ];

    /// Canonical tag used in forms and reports.
    pub fn tag(self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::JavaScript => "javascript",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::C => "C",
            Language::Cpp => "C++",
            Language::JavaScript => "JavaScript",
        }
    }

    /// Whether functions are found with a bundled grammar rather than the
    /// header/brace heuristic.
    pub fn has_parser(self) -> bool {
        matches!(self, Language::Python)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

pub fn detect_language(tag: &str) -> Option<Language> {
    match tag.trim().to_ascii_lowercase().as_str() {
        "python" | "py" => Some(Language::Python),
        "c" => Some(Language::C),
        "cpp" | "c++" => Some(Language::Cpp),
        "javascript" | "js" => Some(Language::JavaScript),
        _ => None,
    }
}
