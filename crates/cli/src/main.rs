use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
use commands::{check::CheckGapArgs, inheritance::InheritanceArgs};

#[derive(Parser)]
#[command(name = "keisho")]
#[command(about = "Inheritance and upgradeability checks for Solidity projects")]
#[command(version = "0.2.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print all inheritance chains between two contracts
    Inheritance(InheritanceArgs),

    /// Check `__gap` reservations on upgradeable contract hierarchies
    CheckGap(CheckGapArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Inheritance(args) => commands::inheritance::execute(args),
        Commands::CheckGap(args) => commands::check::execute(args),
    }
}
