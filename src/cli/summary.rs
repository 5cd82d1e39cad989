//! `summary` command: balances and who pays whom

use clap::Args;

use crate::display::{format_summary, render_structured, OutputFormat};
use crate::error::HousesplitResult;
use crate::services::SummaryService;

use super::{CliContext, PeriodArgs};

/// Arguments for `housesplit summary`
#[derive(Args)]
pub struct SummaryArgs {
    /// Household name or ID
    pub household: String,
    #[command(flatten)]
    pub period: PeriodArgs,
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

/// Handle the summary command
pub fn handle_summary_command(ctx: &CliContext<'_>, args: SummaryArgs) -> HousesplitResult<()> {
    let (household, _) = ctx.member_household(&args.household)?;
    let summary = SummaryService::new(ctx.storage).summarize(household.id, args.period.filter()?)?;

    match args.format {
        OutputFormat::Table => print!("{}", format_summary(&summary, &ctx.settings.currency_symbol)),
        format => println!("{}", render_structured(&summary, format)?),
    }

    Ok(())
}
