//! Household CLI commands

use clap::Subcommand;

use crate::display::{format_household_list, format_member_list};
use crate::error::HousesplitResult;
use crate::services::HouseholdService;

use super::CliContext;

/// Household subcommands
#[derive(Subcommand)]
pub enum HouseholdCommands {
    /// Create a household; you become its first member
    Create {
        /// Household name
        name: String,
    },
    /// Join an existing household
    Join {
        /// Household name or ID
        household: String,
    },
    /// List your households
    List {
        /// List every household, not just yours
        #[arg(short, long)]
        all: bool,
    },
    /// Show a household's members in join order
    Members {
        /// Household name or ID
        household: String,
    },
}

/// Handle a household command
pub fn handle_household_command(
    ctx: &CliContext<'_>,
    cmd: HouseholdCommands,
) -> HousesplitResult<()> {
    let service = HouseholdService::new(ctx.storage);

    match cmd {
        HouseholdCommands::Create { name } => {
            let creator = ctx.acting_member()?;
            let household = service.create(&name, &creator)?;
            println!("Created household: {}", household.name);
            println!("  ID:      {}", household.id);
            println!("  Members: {}", creator.name);
        }

        HouseholdCommands::Join { household } => {
            let member = ctx.acting_member()?;
            let household = service.require(&household)?;
            if service.join(household.id, &member)? {
                println!("{} joined '{}'.", member.name, household.name);
            } else {
                println!("{} is already a member of '{}'.", member.name, household.name);
            }
        }

        HouseholdCommands::List { all } => {
            let households = if all {
                service.list()?
            } else {
                service.list_for_member(ctx.acting_member()?.id)?
            };
            println!(
                "{}",
                format_household_list(&households, &ctx.settings.date_format)
            );
        }

        HouseholdCommands::Members { household } => {
            let (household, _) = ctx.member_household(&household)?;
            let members = service.members(&household)?;
            println!("Members of '{}':", household.name);
            println!("{}", format_member_list(&members));
        }
    }

    Ok(())
}
