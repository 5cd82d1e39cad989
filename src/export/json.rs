//! JSON export of a household summary

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{HousesplitError, HousesplitResult};
use crate::services::HouseholdSummary;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: u32 = 1;

/// Exported document: metadata plus the summary itself
#[derive(Debug, Serialize)]
pub struct SummaryExport<'a> {
    pub schema_version: u32,
    pub exported_at: DateTime<Utc>,
    pub app_version: &'static str,
    #[serde(flatten)]
    pub summary: &'a HouseholdSummary,
}

impl<'a> SummaryExport<'a> {
    pub fn new(summary: &'a HouseholdSummary) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            summary,
        }
    }
}

/// Write the summary as pretty-printed JSON
pub fn export_summary_json<W: Write>(
    summary: &HouseholdSummary,
    writer: &mut W,
) -> HousesplitResult<()> {
    serde_json::to_writer_pretty(&mut *writer, &SummaryExport::new(summary))
        .map_err(|e| HousesplitError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| HousesplitError::Export(e.to_string()))
}
