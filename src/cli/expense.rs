//! Expense CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use crate::display::{format_expense_list, render_structured, OutputFormat};
use crate::error::{HousesplitError, HousesplitResult};
use crate::models::Money;
use crate::services::{CreateExpenseInput, ExpenseService, MemberService};

use super::{CliContext, PeriodArgs};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense paid for the whole household
    Add {
        /// Household name or ID
        household: String,
        /// Amount paid (e.g., "42.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Who paid (defaults to you)
        #[arg(long)]
        payer: Option<String>,
        /// What it was for
        #[arg(short, long)]
        description: Option<String>,
        /// Free-form category
        #[arg(short, long)]
        category: Option<String>,
        /// Date of the expense (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// List a household's expenses, newest first
    List {
        /// Household name or ID
        household: String,
        #[command(flatten)]
        period: PeriodArgs,
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },
}

/// Handle an expense command
pub fn handle_expense_command(ctx: &CliContext<'_>, cmd: ExpenseCommands) -> HousesplitResult<()> {
    let service = ExpenseService::new(ctx.storage);

    match cmd {
        ExpenseCommands::Add {
            household,
            amount,
            payer,
            description,
            category,
            date,
        } => {
            let (household, acting) = ctx.member_household(&household)?;

            let payer = match payer {
                Some(identifier) => MemberService::new(ctx.storage).require(&identifier)?,
                None => acting,
            };

            let amount = Money::parse(&amount).map_err(|e| {
                HousesplitError::Validation(format!("Invalid amount '{}': {}", amount, e))
            })?;

            let date = date
                .map(|d| {
                    NaiveDate::parse_from_str(&d, "%Y-%m-%d").map_err(|_| {
                        HousesplitError::Validation(format!(
                            "Invalid date '{}': expected YYYY-MM-DD",
                            d
                        ))
                    })
                })
                .transpose()?;

            let expense = service.add(CreateExpenseInput {
                household_id: household.id,
                payer_id: payer.id,
                amount,
                description,
                category,
                date,
            })?;

            println!(
                "Recorded {} paid by {} in '{}' on {}",
                expense.amount.format_with_symbol(&ctx.settings.currency_symbol),
                payer.name,
                household.name,
                expense.date.format(&ctx.settings.date_format)
            );
            println!("  ID: {}", expense.id);
        }

        ExpenseCommands::List {
            household,
            period,
            format,
        } => {
            let (household, _) = ctx.member_household(&household)?;
            let rows = service.list(household.id, period.filter()?)?;

            match format {
                OutputFormat::Table => println!(
                    "{}",
                    format_expense_list(
                        &rows,
                        &ctx.settings.currency_symbol,
                        &ctx.settings.date_format
                    )
                ),
                _ => println!("{}", render_structured(&rows, format)?),
            }
        }
    }

    Ok(())
}
