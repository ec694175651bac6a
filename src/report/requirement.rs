use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    System,
    Functional,
}

impl Category {
    /// Label used in the CSV export.
    pub fn label(self) -> &'static str {
        match self {
            Category::System => "System Requirement",
            Category::Functional => "Functional Requirement",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Requirement {
    /// 1-based, dense across both categories.
    pub index: usize,
    pub text: String,
    pub category: Category,
    pub function_name: Option<String>,
    pub source_snippet: Option<String>,
    /// The text is an error placeholder rather than a synthesized sentence.
    pub failed: bool,
}

impl Requirement {
    pub fn system(index: usize, text: String) -> Self {
        Requirement {
            index,
            text,
            category: Category::System,
            function_name: None,
            source_snippet: None,
            failed: false,
        }
    }

    pub fn functional(index: usize, name: String, text: String, snippet: String) -> Self {
        Requirement {
            index,
            text,
            category: Category::Functional,
            function_name: Some(name),
            source_snippet: Some(snippet),
            failed: false,
        }
    }

    pub fn mark_failed(mut self) -> Self {
        self.failed = true;
        self
    }
}
