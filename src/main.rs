use anyhow::Result;
use clap::{Parser, Subcommand};

use libris::cli::{
    handle_book_command, handle_loan_command, handle_member_command, BookCommands, LoanCommands,
    MemberCommands,
};
use libris::config::{paths::LibrisPaths, settings::Settings};
use libris::shell;
use libris::storage::Storage;

#[derive(Parser)]
#[command(
    name = "libris",
    version,
    about = "Terminal-based library catalog manager",
    long_about = "libris is a terminal-based catalog manager for a one-person \
                  library desk. It tracks books, members, and loans in plain \
                  CSV files and offers both an interactive menu and one-shot \
                  commands."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive librarian menu
    #[command(alias = "menu")]
    Shell,

    /// Book catalog commands
    #[command(subcommand)]
    Book(BookCommands),

    /// Member management commands
    #[command(subcommand)]
    Member(MemberCommands),

    /// Loan lifecycle commands
    #[command(subcommand)]
    Loan(LoanCommands),

    /// Create the data directory and empty catalog files
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = LibrisPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Shell) | None => {
            shell::run(&storage, &settings)?;
        }
        Some(Commands::Book(cmd)) => {
            handle_book_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Member(cmd)) => {
            handle_member_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Loan(cmd)) => {
            handle_loan_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing libris at: {}", paths.data_dir().display());
            libris::storage::init::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'libris shell' to open the librarian menu.");
        }
        Some(Commands::Config) => {
            println!("libris Configuration");
            println!("====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Loan period (days): {}", settings.loan_period_days);
            println!("  Strict identifiers: {}", settings.strict_identifiers);
        }
    }

    Ok(())
}
