//! The `resizer resize` command.

mod batch;
mod setup;
pub mod types;

pub use types::{Filter, Naming, OutputFormat};

use clap::Args;
use resizer_core::BatchRunner;
use std::path::{Path, PathBuf};

/// Arguments for the `resize` command.
///
/// Every geometry and processing flag is optional so that values from the
/// config file apply unless the flag is given.
#[derive(Args, Debug)]
pub struct ResizeArgs {
    /// Image file or directory to resize
    #[arg(required = true)]
    pub input: PathBuf,

    /// Target width in pixels (0 keeps aspect ratio from height)
    #[arg(short, long)]
    pub width: Option<u32>,

    /// Target height in pixels (0 keeps aspect ratio from width)
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Output filename prefix (defaults to the non-zero dimension)
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Resize every file regardless of extension
    #[arg(short, long)]
    pub force: bool,

    /// Only print fatal errors
    #[arg(short, long, visible_alias = "silent")]
    pub quiet: bool,

    /// Number of files resized concurrently
    #[arg(short = 'j', long)]
    pub parallel: Option<usize>,

    /// Directory to write resized files into
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Output naming scheme
    #[arg(long, value_enum)]
    pub naming: Option<Naming>,

    /// Resampling filter
    #[arg(long, value_enum)]
    pub filter: Option<Filter>,

    /// JPEG quality (1-100)
    #[arg(long)]
    pub quality: Option<u8>,

    /// Per-file report format on stdout
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl Default for ResizeArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            width: None,
            height: None,
            prefix: None,
            force: false,
            quiet: false,
            parallel: None,
            output_dir: None,
            naming: None,
            filter: None,
            quality: None,
            format: OutputFormat::Text,
        }
    }
}

/// Execute the resize command.
pub async fn execute(args: ResizeArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = setup::build_config(&args, config_path)?;
    tracing::debug!(
        "Target {}x{} with prefix {:?}",
        config.resize.width,
        config.resize.height,
        config.resize.resolved_prefix()
    );

    let runner = BatchRunner::new(&config);
    let summary =
        batch::run_batch(&runner, &args.input, args.format.into(), std::io::stdout()).await?;

    if !config.logging.quiet {
        match args.format {
            OutputFormat::Text => batch::print_summary(&summary),
            OutputFormat::Jsonl => batch::print_summary_json(&summary)?,
        }
    }
    Ok(())
}
