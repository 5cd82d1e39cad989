//! Summary export
//!
//! Writes a household summary to a file or stream:
//! - JSON: machine-readable, wrapped with export metadata
//! - YAML: the same document, human-readable, with a comment header
//! - CSV: one row per balance and one per transfer (spreadsheet-compatible)

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_summary_csv;
pub use json::{export_summary_json, SummaryExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_summary_yaml;

use std::io::Write;

use crate::error::HousesplitResult;
use crate::services::HouseholdSummary;

/// File format for `export summary`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    #[default]
    Json,
    Yaml,
    Csv,
}

impl ExportFormat {
    /// Guess the format from a file extension
    pub fn from_extension(path: &std::path::Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

/// Write `summary` in the requested format
pub fn export_summary<W: Write>(
    summary: &HouseholdSummary,
    format: ExportFormat,
    writer: &mut W,
) -> HousesplitResult<()> {
    match format {
        ExportFormat::Json => export_summary_json(summary, writer),
        ExportFormat::Yaml => export_summary_yaml(summary, writer),
        ExportFormat::Csv => export_summary_csv(summary, writer),
    }
}
