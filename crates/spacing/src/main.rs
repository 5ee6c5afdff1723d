mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use spacing_core::config;

#[derive(Parser)]
#[command(
    name = "spacing",
    version,
    about = "Measure the pixel spacing between elements on a page"
)]
struct Cli {
    /// Config file to use instead of ~/.config/spacing/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// Measure two boxes against each other
    Measure(commands::measure::MeasureArgs),
    /// Replay a recorded pointer/keyboard trace against a scripted page
    Replay(commands::replay::ReplayArgs),
}

fn main() {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => config::load_from(path),
        None => config::load(),
    };
    if cli.verbose {
        config.logging.enabled = true;
        config.logging.level = "debug".into();
    }
    spacing_core::log::init(&config.logging);
    tracing::debug!("config: {config:?}");

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Measure(args) => commands::measure::execute(&args),
        Commands::Replay(args) => commands::replay::execute(&args, config),
    }
}
