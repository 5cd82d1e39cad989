//! YAML export of a household summary

use std::io::Write;

use crate::error::{HousesplitError, HousesplitResult};
use crate::services::HouseholdSummary;

use super::json::SummaryExport;

/// Write the summary as YAML with a short comment header
pub fn export_summary_yaml<W: Write>(
    summary: &HouseholdSummary,
    writer: &mut W,
) -> HousesplitResult<()> {
    let export = SummaryExport::new(summary);

    writeln!(writer, "# housesplit summary for {}", summary.household.name)
        .map_err(|e| HousesplitError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| HousesplitError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| HousesplitError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| HousesplitError::Export(e.to_string()))
}
