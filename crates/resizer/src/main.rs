//! Resizer CLI - batch image resizing for files and directory trees.
//!
//! Walks a file or directory, resizes every matching image to the requested
//! geometry, and writes each result under a prefixed name. Per-file decode
//! failures are logged and skipped; unreadable inputs and unwritable outputs
//! stop the run with a non-zero exit status.
//!
//! # Usage
//!
//! ```bash
//! # Resize one image to 800px wide, keeping aspect ratio
//! resizer resize photo.jpg --width 800
//!
//! # Resize a whole tree to 480px high, mirroring it under ./thumbs
//! resizer resize ./photos -H 480 --naming mirror -o ./thumbs
//!
//! # View configuration
//! resizer config show
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;
mod logging;

/// Resizer - batch image resizing for files and directory trees.
#[derive(Parser, Debug)]
#[command(name = "resizer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    /// Config file to use instead of the platform default
    #[arg(long, global = true, env = "RESIZER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Resize an image or every image under a directory
    Resize(cli::resize::ResizeArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref().map(cli::expand_path);

    // Logging isn't initialized yet, so config warnings go straight to stderr.
    let config = match cli::load_config(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default logging settings. Check your config file with `resizer config path`."
            );
            resizer_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Resizer v{}", resizer_core::VERSION);

    match cli.command {
        Commands::Resize(args) => cli::resize::execute(args, config_path.as_deref()).await,
        Commands::Config(args) => cli::config::execute(args, config_path.as_deref()).await,
    }
}
