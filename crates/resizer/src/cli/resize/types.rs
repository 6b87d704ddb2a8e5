//! CLI enum types for the resize command: report format, naming scheme, filter.

use clap::ValueEnum;
use resizer_core::config::{FilterKind, NamingScheme};
use resizer_core::ReportFormat;

/// Per-file report formats written to stdout.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// One "Resizing ..." line per written file
    #[default]
    Text,
    /// One JSON object per processed file (newline-delimited)
    Jsonl,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Jsonl => ReportFormat::JsonLines,
        }
    }
}

/// Where output files are placed.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Naming {
    /// Prefix the whole input path string
    Flat,
    /// Recreate the input tree under the output directory
    Mirror,
}

impl From<Naming> for NamingScheme {
    fn from(naming: Naming) -> Self {
        match naming {
            Naming::Flat => NamingScheme::Flat,
            Naming::Mirror => NamingScheme::Mirror,
        }
    }
}

/// Resampling filters.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Filter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    /// Highest quality, slowest (default)
    Lanczos3,
}

impl From<Filter> for FilterKind {
    fn from(filter: Filter) -> Self {
        match filter {
            Filter::Nearest => FilterKind::Nearest,
            Filter::Triangle => FilterKind::Triangle,
            Filter::CatmullRom => FilterKind::CatmullRom,
            Filter::Gaussian => FilterKind::Gaussian,
            Filter::Lanczos3 => FilterKind::Lanczos3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jsonl_maps_to_json_lines() {
        assert_eq!(ReportFormat::from(OutputFormat::Jsonl), ReportFormat::JsonLines);
        assert_eq!(ReportFormat::from(OutputFormat::Text), ReportFormat::Text);
    }

    #[test]
    fn filter_value_names() {
        let names: Vec<String> = Filter::value_variants()
            .iter()
            .filter_map(|f| f.to_possible_value())
            .map(|v| v.get_name().to_string())
            .collect();
        assert_eq!(
            names,
            ["nearest", "triangle", "catmull-rom", "gaussian", "lanczos3"]
        );
    }
}
