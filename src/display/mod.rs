//! Display formatting for terminal output
//!
//! Tables are rendered with `tabled`; every listing can also be emitted as
//! JSON or YAML for scripting.

pub mod expense;
pub mod household;
pub mod summary;

pub use expense::format_expense_list;
pub use household::{format_household_list, format_member_list};
pub use summary::format_summary;

use serde::Serialize;

use crate::error::{HousesplitError, HousesplitResult};

/// Output format for read-only commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}

/// Serialize `data` as JSON or YAML
///
/// Callers handle [`OutputFormat::Table`] themselves; asking for it here
/// falls back to JSON.
pub fn render_structured<T: Serialize>(data: &T, format: OutputFormat) -> HousesplitResult<String> {
    match format {
        OutputFormat::Yaml => serde_yaml::to_string(data)
            .map_err(|e| HousesplitError::Export(format!("Failed to render YAML: {}", e))),
        OutputFormat::Table | OutputFormat::Json => serde_json::to_string_pretty(data)
            .map_err(|e| HousesplitError::Json(format!("Failed to render JSON: {}", e))),
    }
}
