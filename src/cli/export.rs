//! CLI commands for exporting summaries

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Subcommand;

use crate::error::{HousesplitError, HousesplitResult};
use crate::export::{export_summary, ExportFormat};
use crate::services::SummaryService;

use super::{CliContext, PeriodArgs};

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export a household summary to a file
    Summary {
        /// Household name or ID
        household: String,
        /// Output file path
        output: PathBuf,
        /// Export format (defaults to the file extension, else JSON)
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,
        #[command(flatten)]
        period: PeriodArgs,
    },
}

/// Handle export commands
pub fn handle_export_command(ctx: &CliContext<'_>, cmd: ExportCommands) -> HousesplitResult<()> {
    match cmd {
        ExportCommands::Summary {
            household,
            output,
            format,
            period,
        } => {
            let (household, _) = ctx.member_household(&household)?;
            let summary =
                SummaryService::new(ctx.storage).summarize(household.id, period.filter()?)?;

            let format = format
                .or_else(|| ExportFormat::from_extension(&output))
                .unwrap_or_default();

            let file = File::create(&output).map_err(|e| {
                HousesplitError::Export(format!(
                    "Failed to create file {}: {}",
                    output.display(),
                    e
                ))
            })?;
            let mut writer = BufWriter::new(file);
            export_summary(&summary, format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| HousesplitError::Export(e.to_string()))?;

            println!(
                "Exported summary of '{}' to: {}",
                household.name,
                output.display()
            );
        }
    }

    Ok(())
}
