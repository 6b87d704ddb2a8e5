//! Resize setup: merge config file values with command-line overrides.

use anyhow::Context;
use resizer_core::Config;
use std::path::Path;

use super::ResizeArgs;

/// Load the config file, apply CLI overrides, and validate the result once.
pub fn build_config(args: &ResizeArgs, config_path: Option<&Path>) -> anyhow::Result<Config> {
    let base = crate::cli::load_config(config_path).context("Failed to load config file")?;
    let config = apply_overrides(base, args);
    config.validated().context("Invalid resize options")
}

/// Overlay every flag the user actually passed onto `config`.
pub fn apply_overrides(mut config: Config, args: &ResizeArgs) -> Config {
    if let Some(width) = args.width {
        config.resize.width = width;
    }
    if let Some(height) = args.height {
        config.resize.height = height;
    }
    if let Some(prefix) = &args.prefix {
        config.resize.prefix = Some(prefix.clone());
    }
    if let Some(filter) = args.filter {
        config.resize.filter = filter.into();
    }
    if let Some(quality) = args.quality {
        config.resize.jpeg_quality = quality;
    }
    if args.force {
        config.processing.force = true;
    }
    if let Some(parallel) = args.parallel {
        config.processing.parallel_workers = parallel;
    }
    if let Some(naming) = args.naming {
        config.output.naming = naming.into();
    }
    if let Some(dir) = &args.output_dir {
        config.output.dir = Some(dir.clone());
    }
    if args.quiet {
        config.logging.quiet = true;
    }
    config
}
