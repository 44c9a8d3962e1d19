// SPDX-FileCopyrightText: 2026 Implist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! implist - inspect and deliver implementor listings.
//!
//! This is the binary entry point.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use implist_core::ImplistError;

/// implist - inspect and deliver implementor listings.
#[derive(Parser, Debug)]
#[command(name = "implist", version, about, long_about = None)]
struct Cli {
    /// Listing file to use instead of the built-in implementor data.
    #[arg(long, global = true, value_name = "PATH")]
    listing: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List library units with their entry counts.
    Units,
    /// Print the implementors of one library unit in render order.
    Show {
        /// Library unit identifier.
        unit: String,
    },
    /// Search trait and implementor names.
    Search {
        /// Case-insensitive substring; empty matches everything.
        query: String,
    },
    /// Hand the map to a consumer through the process-wide cell.
    Deliver {
        /// Install the consumer before publishing the data.
        #[arg(long)]
        consumer_first: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match implist_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            implist_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.logging.level);
    implist_registry::init_global(config.registry.republish);

    let listing = cli
        .listing
        .or_else(|| config.registry.listing_path.as_ref().map(PathBuf::from));

    if let Err(e) = run(cli.command, listing) {
        tracing::debug!(error = %e, "command failed");
        eprintln!("implist: {e}");
        std::process::exit(1);
    }
}

fn run(command: Commands, listing: Option<PathBuf>) -> Result<(), ImplistError> {
    let map = commands::resolve_map(listing.as_deref())?;

    let output = match command {
        Commands::Units => commands::to_json(&commands::units(&map))?,
        Commands::Show { unit } => commands::to_json(commands::show(&map, &unit)?)?,
        Commands::Search { query } => {
            commands::to_json(&implist_registry::search_implementors(&map, &query))?
        }
        Commands::Deliver { consumer_first } => {
            let report = commands::deliver(implist_registry::global(), map, consumer_first)?;
            commands::to_json(&report)?
        }
    };
    println!("{output}");
    Ok(())
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "implist={log_level},implist_registry={log_level},warn"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
