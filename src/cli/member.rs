//! Member CLI commands

use clap::Subcommand;

use crate::display::{format_member_list, render_structured, OutputFormat};
use crate::error::HousesplitResult;
use crate::services::MemberService;

use super::CliContext;

/// Member subcommands
#[derive(Subcommand)]
pub enum MemberCommands {
    /// Register a new member
    Register {
        /// Display name
        name: String,
        /// Email address (must be unique)
        email: String,
    },
    /// List all members
    List {
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Act as this member by default
    Use {
        /// Member email, name or ID
        member: String,
    },
}

/// Handle a member command
pub fn handle_member_command(ctx: &CliContext<'_>, cmd: MemberCommands) -> HousesplitResult<()> {
    let service = MemberService::new(ctx.storage);

    match cmd {
        MemberCommands::Register { name, email } => {
            let member = service.register(&name, &email)?;
            println!("Registered member: {}", member);
            println!("  ID: {}", member.id);

            if ctx.settings.default_member.is_none() {
                let mut settings = ctx.settings.clone();
                settings.default_member = Some(member.id);
                settings.save(ctx.storage.paths())?;
                println!("Now acting as {} by default.", member.name);
            }
        }

        MemberCommands::List { format } => {
            let members = service.list()?;
            match format {
                OutputFormat::Table => println!("{}", format_member_list(&members)),
                _ => println!("{}", render_structured(&members, format)?),
            }
        }

        MemberCommands::Use { member } => {
            let member = service.require(&member)?;
            let mut settings = ctx.settings.clone();
            settings.default_member = Some(member.id);
            settings.save(ctx.storage.paths())?;
            println!("Now acting as {}.", member);
        }
    }

    Ok(())
}
