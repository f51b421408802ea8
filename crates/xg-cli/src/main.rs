//! CLI frontend for the Xenogate encounter generator.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "xg",
    about = "Xenogate — deterministic social-engineering encounter generator",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate encounters and print or save them
    Generate {
        /// Number of encounters to generate (capped at 1000)
        #[arg(short, long, default_value = "1")]
        count: usize,

        /// Base RNG seed (default: wall clock, non-reproducible)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Lowest tier to roll
        #[arg(long, default_value = "1")]
        tier_min: u32,

        /// Highest tier to roll
        #[arg(long, default_value = "10")]
        tier_max: u32,

        /// Tier distribution: flat, ramp, bell
        #[arg(short, long, default_value = "ramp")]
        distribution: String,

        /// Restrict biomes (comma-separated, e.g. archive_vault,neon_bazaar)
        #[arg(short, long)]
        biomes: Option<String>,

        /// Pretty-print JSON instead of JSONL
        #[arg(long)]
        pretty: bool,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the built-in alien roster
    Roster,

    /// Show generator version, tier bounds, and catalog vocabulary
    Info,

    /// Validate the built-in catalog tables
    Validate,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            count,
            seed,
            tier_min,
            tier_max,
            distribution,
            biomes,
            pretty,
            output,
        } => commands::generate::run(
            count,
            seed,
            tier_min,
            tier_max,
            &distribution,
            biomes.as_deref(),
            pretty,
            output.as_deref(),
        ),
        Commands::Roster => commands::roster::run(),
        Commands::Info => commands::info::run(),
        Commands::Validate => commands::validate::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
