mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sensctl",
    about = "Randomize or pin your CS2 sensitivity — patches autoexec.cfg and keeps an audit trail",
    version,
    propagate_version = true
)]
struct Cli {
    /// Tool root (default: auto-detect from example_autoexec.cfg)
    #[arg(long, global = true, env = "SENS_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a random sensitivity within the configured range (the default)
    Random,

    /// Apply the pinned main sensitivity
    Main,

    /// Pin a favorite sensitivity for `sensctl main`
    SetMain { value: f64 },

    /// Show the random sensitivity range
    ShowRange,

    /// Set the lower bound for random sensitivity
    SetLower { value: f64 },

    /// Set the upper bound for random sensitivity
    SetUpper { value: f64 },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let root_path = cli.root.as_deref();
    let root = root::resolve_root(root_path);

    let result = match cli.command.unwrap_or(Commands::Random) {
        Commands::Random => cmd::apply::run_random(&root, cli.json),
        Commands::Main => cmd::apply::run_main(&root, cli.json),
        Commands::SetMain { value } => cmd::settings::set_main(&root, value),
        Commands::ShowRange => cmd::settings::show_range(&root, cli.json),
        Commands::SetLower { value } => cmd::settings::set_lower(&root, value),
        Commands::SetUpper { value } => cmd::settings::set_upper(&root, value),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
