use std::io::Write;

use crate::output::display_order;
use crate::{results::CrossResults, types::EquigenError};

const HEADER: &str = "phenotype\tcount\tpercentage\tgenotypes";

/// Write results as tab-separated rows, genotypes joined by `,`
pub fn write_tsv_format<W: Write>(
    writer: &mut W,
    results: &CrossResults,
) -> Result<(), EquigenError> {
    writeln!(writer, "{HEADER}")?;
    for phenotype in display_order(results) {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}",
            phenotype.phenotype,
            phenotype.count,
            phenotype.percentage_label(),
            phenotype.genotypes.join(",")
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crate::results::{AggregatedResult, CrossSummary};

    use super::*;

    #[test]
    fn test_write_tsv_format_no_phenotypes() {
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);

        let results = CrossResults {
            summary: CrossSummary {
                total_combinations: 1,
                viable_combinations: 0,
                rejected_combinations: 1,
                branching: vec![],
            },
            phenotypes: vec![],
        };

        write_tsv_format(&mut cursor, &results).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert_eq!(output, "phenotype\tcount\tpercentage\tgenotypes\n");
    }

    #[test]
    fn test_write_tsv_format_rows() {
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);

        let results = CrossResults {
            summary: CrossSummary {
                total_combinations: 3,
                viable_combinations: 3,
                rejected_combinations: 0,
                branching: vec![],
            },
            phenotypes: vec![
                AggregatedResult {
                    phenotype: "Bay".to_string(),
                    genotypes: vec!["E/e".to_string(), "A/a".to_string()],
                    count: 1,
                    percentage: 33.3,
                },
                AggregatedResult {
                    phenotype: "Tobiano Bay".to_string(),
                    genotypes: vec!["E/e".to_string(), "A/a".to_string(), "TO/n".to_string()],
                    count: 2,
                    percentage: 66.7,
                },
            ],
        };

        write_tsv_format(&mut cursor, &results).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert_eq!(
            output,
            "phenotype\tcount\tpercentage\tgenotypes\nTobiano Bay\t2\t66.7\tE/e,A/a,TO/n\nBay\t1\t33.3\tE/e,A/a\n"
        );
    }
}
