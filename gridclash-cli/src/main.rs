//! GRIDCLASH CLI - Command-line interface
//!
//! Commands:
//! - serve: Start the match server

use clap::{Parser, Subcommand};

mod serve;

#[derive(Parser)]
#[command(name = "gridclash")]
#[command(about = "GRIDCLASH match server")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the match server
    Serve(serve::ServeArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => serve::run(args),
    }
}
