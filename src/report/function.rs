use serde::{Deserialize, Serialize};
use std::fmt;

/// One function definition found in a source document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FunctionRecord {
    pub name: String,
    /// Exact source text of the definition.
    pub snippet: String,
    /// 1-based, inclusive.
    pub line_range: (usize, usize),
}

impl FunctionRecord {
    pub fn new(name: String, snippet: String, line_range: (usize, usize)) -> Self {
        FunctionRecord {
            name,
            snippet,
            line_range,
        }
    }

    /// Builds a record from a byte span of `source`.
    pub fn from_span(name: String, source: &str, start: usize, end: usize) -> Self {
        let snippet = source.get(start..end).unwrap_or_default().to_string();
        FunctionRecord::new(name, snippet, line_range(source, start, end))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Severity {
    Warning,
    Error,
}

/// A user-visible note about something that went wrong but was recovered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Warning => write!(f, "warning: {}", self.message),
            Severity::Error => write!(f, "error: {}", self.message),
        }
    }
}

/// Result of running an extractor over one document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Extraction {
    pub functions: Vec<FunctionRecord>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Extraction {
    pub fn new(functions: Vec<FunctionRecord>) -> Self {
        Extraction {
            functions,
            diagnostics: Vec::new(),
        }
    }

    pub fn failed(diagnostic: Diagnostic) -> Self {
        Extraction {
            functions: Vec::new(),
            diagnostics: vec![diagnostic],
        }
    }

    pub fn names(&self) -> Vec<&str> {
        self.functions.iter().map(|f| f.name.as_str()).collect()
    }
}

fn line_range(source: &str, start: usize, end: usize) -> (usize, usize) {
    let line_at = |offset: usize| {
        source
            .get(..offset)
            .map_or(1, |prefix| prefix.matches('\n').count() + 1)
    };
    let last = if end > start { end - 1 } else { start };
    (line_at(start), line_at(last))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_records_carry_lines() {
        let source = "a\nfn x {\n  y\n}\nz";
        let start = source.find("fn").unwrap();
        let end = source.find('}').unwrap() + 1;
        let record = FunctionRecord::from_span("x".into(), source, start, end);
        assert_eq!(record.snippet, "fn x {\n  y\n}");
        assert_eq!(record.line_range, (2, 4));
    }

    #[test]
    fn diagnostics_display_their_severity() {
        assert_eq!(
            Diagnostic::warning("Unsupported language: cobol").to_string(),
            "warning: Unsupported language: cobol"
        );
        assert_eq!(Diagnostic::error("boom").to_string(), "error: boom");
    }
}
