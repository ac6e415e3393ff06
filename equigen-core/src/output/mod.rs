//! Report writers for cross results.
//!
//! ## Supported Formats
//!
//! - **Text**: `label - pct%` per phenotype with indented genotypes
//! - **Summary**: the text report without genotype lines
//! - **TSV**: one tab-separated row per phenotype
//! - **JSON**: the full [`CrossResults`] document
//!
//! Text, summary and TSV list phenotypes sorted for display (most frequent
//! first); JSON keeps enumeration order.
//!
//! ## Examples
//!
//! ```rust
//! use equigen_core::{CrossAnalyzer, config::{EquigenConfig, OutputFormat}};
//! use equigen_core::output::write_results;
//! use equigen_core::types::{Cross, ParentalGenotypes};
//!
//! let parent = ParentalGenotypes::from_strings([("extension", "E/e"), ("agouti", "a/a")])?;
//! let analyzer = CrossAnalyzer::new(EquigenConfig::default());
//! let results = analyzer.analyze(&Cross::new(parent.clone(), parent))?;
//!
//! let mut buffer = Vec::new();
//! write_results(&mut buffer, &results, OutputFormat::Summary)?;
//! let report = String::from_utf8(buffer)?;
//! assert!(report.starts_with("Black - 75.0%\n"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::io::Write;

use crate::config::OutputFormat;
use crate::results::{AggregatedResult, CrossResults, sort_for_display};
use crate::types::EquigenError;

mod formats {
    pub mod json;
    pub mod text;
    pub mod tsv;
}

use formats::{json::write_json_format, text::write_text_format, tsv::write_tsv_format};

/// Writes cross results in the specified format.
///
/// # Errors
///
/// Returns [`EquigenError`] if writing or JSON serialization fails.
pub fn write_results<W: Write>(
    writer: &mut W,
    results: &CrossResults,
    format: OutputFormat,
) -> Result<(), EquigenError> {
    match format {
        OutputFormat::Text => write_text_format(writer, results, true),
        OutputFormat::Summary => write_text_format(writer, results, false),
        OutputFormat::Tsv => write_tsv_format(writer, results),
        OutputFormat::Json => write_json_format(writer, results),
    }
}

fn display_order(results: &CrossResults) -> Vec<AggregatedResult> {
    let mut phenotypes = results.phenotypes.clone();
    sort_for_display(&mut phenotypes);
    phenotypes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::{CrossSummary, GeneBranching};
    use crate::types::Gene;
    use std::io::Cursor;

    fn create_test_results() -> CrossResults {
        CrossResults {
            summary: CrossSummary {
                total_combinations: 16,
                viable_combinations: 16,
                rejected_combinations: 0,
                branching: vec![
                    GeneBranching::new(Gene::Extension, 4),
                    GeneBranching::new(Gene::Agouti, 4),
                ],
            },
            phenotypes: vec![
                AggregatedResult {
                    phenotype: "Red".to_string(),
                    genotypes: vec!["e/e".to_string(), "a/a".to_string()],
                    count: 4,
                    percentage: 25.0,
                },
                AggregatedResult {
                    phenotype: "Black".to_string(),
                    genotypes: vec!["E/E".to_string(), "a/a".to_string(), "E/e".to_string()],
                    count: 12,
                    percentage: 75.0,
                },
            ],
        }
    }

    #[test]
    fn test_write_results_text_format() {
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);
        let results = create_test_results();

        let result = write_results(&mut cursor, &results, OutputFormat::Text);
        assert!(result.is_ok());

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.starts_with("Black - 75.0%\n  E/E\n"));
        assert!(output.contains("Red - 25.0%\n  e/e\n  a/a\n"));
    }

    #[test]
    fn test_write_results_summary_format() {
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);
        let results = create_test_results();

        write_results(&mut cursor, &results, OutputFormat::Summary).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.starts_with("Black - 75.0%\nRed - 25.0%\n"));
        assert!(!output.contains("E/E"));
    }

    #[test]
    fn test_write_results_tsv_format() {
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);
        let results = create_test_results();

        write_results(&mut cursor, &results, OutputFormat::Tsv).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.starts_with("phenotype\tcount\tpercentage\tgenotypes\n"));
        assert!(output.contains("Black\t12\t75.0\tE/E,a/a,E/e\n"));
    }

    #[test]
    fn test_write_results_json_format() {
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);
        let results = create_test_results();

        write_results(&mut cursor, &results, OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["summary"]["total_combinations"], 16);
        assert_eq!(value["phenotypes"][0]["phenotype"], "Red");
    }

    #[test]
    fn test_display_order_leaves_results_untouched() {
        let results = create_test_results();
        let sorted = display_order(&results);
        assert_eq!(sorted[0].phenotype, "Black");
        assert_eq!(results.phenotypes[0].phenotype, "Red");
    }
}
