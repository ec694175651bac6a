use crate::extraction::extract_functions;
use crate::parsers::detect_language;
use crate::report::{AnalysisReport, Diagnostic, SourceDocument};
use crate::synthesis::{self, Synthesizer};
use chrono::Local;
use log::{debug, info, trace, warn};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Please paste some code first.")]
    EmptySource,
}

/// Runs one analysis: system-level synthesis, function extraction, then one
/// functional synthesis per function, strictly in that order and one call at
/// a time.
///
/// Only blank input is an error. Every other failure ends up in the report,
/// either as a diagnostic or as a failed requirement whose text explains what
/// went wrong.
pub async fn analyze(
    document: SourceDocument,
    synthesizer: &Synthesizer,
) -> Result<AnalysisReport, AnalysisError> {
    if document.is_blank() {
        warn!("Rejecting blank source document");
        return Err(AnalysisError::EmptySource);
    }

    let timestamp = Local::now().format("%Y%m%d%H%M%S").to_string();
    let mut report = AnalysisReport::new(document, timestamp);
    info!(
        "Starting analysis {} ({} bytes, language {:?})",
        report.id,
        report.document.text.len(),
        report.document.language_tag
    );

    let Some(language) = detect_language(&report.document.language_tag) else {
        let extraction = extract_functions(&report.document.text, &report.document.language_tag);
        for diagnostic in extraction.diagnostics {
            report.add_diagnostic(diagnostic);
        }
        return Ok(report);
    };

    info!("Generating system-level requirements with {}", synthesizer.model());
    match synthesizer
        .try_system_requirements(language, &report.document.text)
        .await
    {
        Ok(lines) if lines.is_empty() => {
            warn!("Model answer held no lines starting with {:?}", synthesis::LINE_MARKER);
            report.add_diagnostic(Diagnostic::warning(format!(
                "The model returned no system-level requirements (no lines starting with \"{}\")",
                synthesis::LINE_MARKER
            )));
        }
        Ok(lines) => {
            for line in lines {
                report.add_system_requirement(line, false);
            }
        }
        Err(e) => {
            warn!("System-level synthesis failed: {}", e);
            report.add_system_requirement(synthesis::system_error_text(&e), true);
        }
    }

    let extraction = extract_functions(&report.document.text, language.tag());
    for diagnostic in extraction.diagnostics {
        report.add_diagnostic(diagnostic);
    }
    info!(
        "Generating functional requirements for {} functions",
        extraction.functions.len()
    );

    for function in &extraction.functions {
        trace!("Synthesizing requirement for {}", function.name);
        match synthesizer
            .try_function_requirement(&function.name, &function.snippet)
            .await
        {
            Ok(text) => report.add_functional_requirement(function, text, false),
            Err(e) => {
                warn!("Functional synthesis for {} failed: {}", function.name, e);
                report.add_functional_requirement(function, synthesis::function_error_text(&e), true);
            }
        }
    }

    debug!(
        "Analysis {} produced {} requirements and {} diagnostics",
        report.id,
        report.requirement_count(),
        report.diagnostics.len()
    );

    Ok(report)
}
