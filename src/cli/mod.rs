//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer. Each command group
//! has a `*Commands` enum and a `handle_*_command` function.

pub mod expense;
pub mod export;
pub mod household;
pub mod member;
pub mod summary;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportCommands};
pub use household::{handle_household_command, HouseholdCommands};
pub use member::{handle_member_command, MemberCommands};
pub use summary::{handle_summary_command, SummaryArgs};

use clap::Args;

use crate::config::settings::Settings;
use crate::error::{HousesplitError, HousesplitResult};
use crate::models::{Household, Member, MonthFilter};
use crate::services::{resolve_acting_member, HouseholdService};
use crate::storage::Storage;

/// Everything a command handler needs besides its own arguments
pub struct CliContext<'a> {
    pub storage: &'a Storage,
    pub settings: &'a Settings,
    /// Value of `--as` / `HOUSESPLIT_MEMBER`
    pub acting_as: Option<&'a str>,
}

impl<'a> CliContext<'a> {
    pub fn acting_member(&self) -> HousesplitResult<Member> {
        resolve_acting_member(self.storage, self.acting_as, self.settings)
    }

    /// Look up a household the acting member belongs to
    pub fn member_household(&self, identifier: &str) -> HousesplitResult<(Household, Member)> {
        let member = self.acting_member()?;
        let households = HouseholdService::new(self.storage);
        let household = households.require(identifier)?;
        households.ensure_member(&household, &member)?;
        Ok((household, member))
    }
}

/// Restricts a command to one calendar month, either as `--period YYYY-MM`
/// or as a `--month` / `--year` pair
#[derive(Args, Debug, Clone, Default)]
pub struct PeriodArgs {
    /// Month as YYYY-MM
    #[arg(long, value_name = "YYYY-MM", conflicts_with_all = ["month", "year"])]
    pub period: Option<String>,

    /// Month number (1-12); requires --year
    #[arg(long, requires = "year")]
    pub month: Option<u32>,

    /// Four-digit year; requires --month
    #[arg(long, requires = "month")]
    pub year: Option<i32>,
}

impl PeriodArgs {
    pub fn filter(&self) -> HousesplitResult<Option<MonthFilter>> {
        let filter = match &self.period {
            Some(period) => MonthFilter::parse(period).map(Some),
            None => MonthFilter::from_parts(self.month, self.year),
        };
        filter.map_err(|e| HousesplitError::Validation(e.to_string()))
    }
}
