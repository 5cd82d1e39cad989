use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use housesplit::cli::{
    handle_expense_command, handle_export_command, handle_household_command,
    handle_member_command, handle_summary_command, CliContext, ExpenseCommands, ExportCommands,
    HouseholdCommands, MemberCommands, SummaryArgs,
};
use housesplit::config::{paths::HousesplitPaths, settings::Settings};
use housesplit::storage::Storage;

#[derive(Parser)]
#[command(
    name = "housesplit",
    version,
    about = "Split shared household expenses and settle up",
    long_about = "housesplit tracks who paid for what in a shared household, \
                  splits every expense equally between members, and tells you \
                  the fewest simple transfers that settle everyone up."
)]
struct Cli {
    /// Act as this member (email, name or ID)
    #[arg(long = "as", global = true, env = "HOUSESPLIT_MEMBER", value_name = "MEMBER")]
    acting_as: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Member management commands
    #[command(subcommand)]
    Member(MemberCommands),

    /// Household management commands
    #[command(subcommand, alias = "hh")]
    Household(HouseholdCommands),

    /// Expense commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Show balances and who should pay whom
    Summary(SummaryArgs),

    /// Export commands
    #[command(subcommand)]
    Export(ExportCommands),

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = HousesplitPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    let ctx = CliContext {
        storage: &storage,
        settings: &settings,
        acting_as: cli.acting_as.as_deref(),
    };

    match cli.command {
        Some(Commands::Member(cmd)) => handle_member_command(&ctx, cmd)?,
        Some(Commands::Household(cmd)) => handle_household_command(&ctx, cmd)?,
        Some(Commands::Expense(cmd)) => handle_expense_command(&ctx, cmd)?,
        Some(Commands::Summary(args)) => handle_summary_command(&ctx, args)?,
        Some(Commands::Export(cmd)) => handle_export_command(&ctx, cmd)?,
        Some(Commands::Init) => {
            println!("Initializing housesplit at: {}", paths.base_dir().display());
            housesplit::storage::initialize_storage(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Next steps:");
            println!("  housesplit member register <name> <email>");
            println!("  housesplit household create <name>");
        }
        Some(Commands::Config) => {
            println!("housesplit Configuration");
            println!("========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            match settings.default_member {
                Some(id) => match storage.members.get(id)? {
                    Some(member) => println!("  Default member:  {}", member),
                    None => println!("  Default member:  {} (not found)", id),
                },
                None => println!("  Default member:  (none)"),
            }
        }
        None => {
            println!("housesplit - shared household expenses");
            println!();
            println!("Run 'housesplit --help' for usage information.");
        }
    }

    Ok(())
}
