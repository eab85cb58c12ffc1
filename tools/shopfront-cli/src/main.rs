//! Shopfront CLI - storefront front end for the shopfront-commerce domain.
//!
//! Commands:
//! - `shopfront browse` - Show a brand family's product line
//! - `shopfront rig` - Assemble and price a built-to-order rig
//! - `shopfront demo` - Run the interactive storefront session

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{BrowseArgs, RigArgs};

/// Shopfront CLI - browse the catalog and run the storefront demo
#[derive(Parser)]
#[command(name = "shopfront")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the matched product line for a brand family
    Browse(BrowseArgs),

    /// Assemble and price a built-to-order rig
    Rig(RigArgs),

    /// Run the interactive storefront session
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Domain events double as the session log panel
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_target(false)
        .without_time()
        .init();

    let output = output::Output::new(cli.verbose);

    match cli.command {
        Commands::Browse(args) => commands::browse::run(args, &output),
        Commands::Rig(args) => commands::rig::run(args, &output),
        Commands::Demo => commands::demo::run(&output),
    }
}
