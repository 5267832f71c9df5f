mod commands;
mod report;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "vitrine", about = "Storefront media viewer and carousel tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print or save the default configuration as TOML
    Config(commands::config::ConfigArgs),
    /// Show the carousel layout for a viewport width
    Layout(commands::layout::LayoutArgs),
    /// Replay a scripted viewer/carousel session
    Replay(commands::replay::ReplayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Config(args) => commands::config::run(args),
        Commands::Layout(args) => commands::layout::run(args),
        Commands::Replay(args) => commands::replay::run(args),
    }
}
