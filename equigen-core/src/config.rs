use std::fmt;
use std::str::FromStr;

use crate::types::EquigenError;

/// Output format for cross reports.
///
/// # Examples
///
/// ```rust
/// use equigen_core::config::{EquigenConfig, OutputFormat};
///
/// let config = EquigenConfig {
///     output_format: "tsv".parse()?,
///     ..Default::default()
/// };
/// assert_eq!(config.output_format, OutputFormat::Tsv);
/// # Ok::<(), equigen_core::types::EquigenError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable report: one `label - pct%` line per phenotype followed
    /// by its indented genotypes, then a summary line.
    #[default]
    Text,

    /// Text report without the genotype lines.
    Summary,

    /// Tab-separated, one row per phenotype with a header row.
    Tsv,

    /// Pretty-printed JSON document with the summary and every phenotype.
    Json,
}

impl OutputFormat {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Summary => "summary",
            Self::Tsv => "tsv",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = EquigenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "summary" => Ok(Self::Summary),
            "tsv" => Ok(Self::Tsv),
            "json" => Ok(Self::Json),
            other => Err(EquigenError::InvalidInput(format!(
                "Unknown output format: {other}"
            ))),
        }
    }
}

/// Configuration for cross analysis.
///
/// # Examples
///
/// ```rust
/// use equigen_core::config::EquigenConfig;
///
/// let config = EquigenConfig {
///     parallel: false,
///     quiet: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquigenConfig {
    /// Report format used by [`crate::output::write_results`] callers.
    ///
    /// **Default**: [`OutputFormat::Text`]
    pub output_format: OutputFormat,

    /// Suppress informational output on stderr.
    ///
    /// **Default**: `false`
    pub quiet: bool,

    /// Split large crosses across the rayon pool.
    ///
    /// Ignored when the crate is built without the `parallel` feature. The
    /// distribution is identical either way.
    ///
    /// **Default**: `true`
    pub parallel: bool,

    /// Worker threads for a pool owned by the analyzer; only
    /// [`CrossAnalyzer::with_config`](crate::engine::CrossAnalyzer::with_config) reads it.
    ///
    /// **Default**: `None` (the global rayon pool, all available cores)
    pub num_threads: Option<usize>,
}

impl Default for EquigenConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Text,
            quiet: false,
            parallel: true,
            num_threads: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("TXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!(" summary ".parse::<OutputFormat>().unwrap(), OutputFormat::Summary);
        assert_eq!("tsv".parse::<OutputFormat>().unwrap(), OutputFormat::Tsv);
        assert_eq!("Json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!(matches!(
            "gff".parse::<OutputFormat>(),
            Err(EquigenError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_output_format_display_round_trips() {
        for format in [
            OutputFormat::Text,
            OutputFormat::Summary,
            OutputFormat::Tsv,
            OutputFormat::Json,
        ] {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_default_config() {
        let config = EquigenConfig::default();
        assert_eq!(config.output_format, OutputFormat::Text);
        assert!(!config.quiet);
        assert!(config.parallel);
        assert!(config.num_threads.is_none());
    }
}
