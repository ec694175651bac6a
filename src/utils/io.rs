use crate::report::AnalysisReport;
use log::{debug, error};
use serde::Serialize;
use std::io::Write;
use thiserror::Error;

pub const STATUS_NEW: &str = "New";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to flush CSV: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "S.No.")]
    serial: usize,
    #[serde(rename = "Requirement")]
    requirement: &'a str,
    #[serde(rename = "Category")]
    category: &'static str,
    #[serde(rename = "Status")]
    status: &'static str,
}

/// Writes every requirement of `report` as one CSV row, system rows first.
pub fn write_requirements_csv<W: Write>(report: &AnalysisReport, writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    if report.requirements().is_empty() {
        // serde-driven writers only emit headers with the first record
        csv_writer.write_record(["S.No.", "Requirement", "Category", "Status"])?;
    }

    for requirement in report.requirements() {
        csv_writer.serialize(CsvRow {
            serial: requirement.index,
            requirement: &requirement.text,
            category: requirement.category.label(),
            status: STATUS_NEW,
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}

pub fn requirements_csv(report: &AnalysisReport) -> Result<Vec<u8>, ExportError> {
    let mut buffer = Vec::new();

    match write_requirements_csv(report, &mut buffer) {
        Ok(()) => {
            debug!(
                "Exported {} requirements ({} bytes) for analysis {}",
                report.requirement_count(),
                buffer.len(),
                report.id
            );
            Ok(buffer)
        }
        Err(e) => {
            error!("Failed to export analysis {} to CSV: {}", report.id, e);
            Err(e)
        }
    }
}
