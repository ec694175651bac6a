mod function;
mod requirement;

pub use function::{Diagnostic, Extraction, FunctionRecord, Severity};
pub use requirement::{Category, Requirement};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Source text as submitted, with the language tag the user picked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceDocument {
    pub language_tag: String,
    pub text: String,
}

impl SourceDocument {
    pub fn new(language_tag: impl Into<String>, text: impl Into<String>) -> Self {
        SourceDocument {
            language_tag: language_tag.into(),
            text: text.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Everything one analysis run produced. Built once, never mutated after the
/// pipeline hands it out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub id: Uuid,
    /// Local time the run started, `%Y%m%d%H%M%S`.
    pub timestamp: String,
    pub document: SourceDocument,
    requirements: Vec<Requirement>,
    pub diagnostics: Vec<Diagnostic>,
}

impl AnalysisReport {
    pub fn new(document: SourceDocument, timestamp: String) -> Self {
        AnalysisReport {
            id: Uuid::new_v4(),
            timestamp,
            document,
            requirements: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn add_system_requirement(&mut self, text: String, failed: bool) {
        let requirement = Requirement::system(self.next_index(), text);
        self.push(requirement, failed);
    }

    pub fn add_functional_requirement(&mut self, function: &FunctionRecord, text: String, failed: bool) {
        let requirement = Requirement::functional(
            self.next_index(),
            function.name.clone(),
            text,
            function.snippet.clone(),
        );
        self.push(requirement, failed);
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    pub fn system_requirements(&self) -> impl Iterator<Item = &Requirement> {
        self.by_category(Category::System)
    }

    pub fn functional_requirements(&self) -> impl Iterator<Item = &Requirement> {
        self.by_category(Category::Functional)
    }

    pub fn requirement_count(&self) -> usize {
        self.requirements.len()
    }

    pub fn csv_file_name(&self) -> String {
        format!("requirements_{}.csv", self.timestamp)
    }

    fn by_category(&self, category: Category) -> impl Iterator<Item = &Requirement> {
        self.requirements
            .iter()
            .filter(move |req| req.category == category)
    }

    fn next_index(&self) -> usize {
        self.requirements.len() + 1
    }

    /// System rows stay ahead of functional rows whatever order they are
    /// added in, and indices stay dense from 1.
    fn push(&mut self, requirement: Requirement, failed: bool) {
        let requirement = if failed {
            requirement.mark_failed()
        } else {
            requirement
        };

        match requirement.category {
            Category::System => {
                let at = self
                    .requirements
                    .iter()
                    .position(|req| req.category == Category::Functional)
                    .unwrap_or(self.requirements.len());
                self.requirements.insert(at, requirement);
            }
            Category::Functional => self.requirements.push(requirement),
        }

        for (position, req) in self.requirements.iter_mut().enumerate() {
            req.index = position + 1;
        }
    }
}
