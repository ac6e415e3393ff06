use std::io::Write;

use crate::output::display_order;
use crate::{results::CrossResults, types::EquigenError};

const GENOTYPE_INDENT: &str = "  ";

/// Write results as a human-readable report
pub fn write_text_format<W: Write>(
    writer: &mut W,
    results: &CrossResults,
    show_genotypes: bool,
) -> Result<(), EquigenError> {
    let summary = &results.summary;
    if summary.is_empty() {
        writeln!(
            writer,
            "No phenotype could be computed: extension and agouti are required for both parents"
        )?;
        return Ok(());
    }

    for phenotype in display_order(results) {
        writeln!(
            writer,
            "{} - {}%",
            phenotype.phenotype,
            phenotype.percentage_label()
        )?;
        if show_genotypes {
            for genotype in &phenotype.genotypes {
                writeln!(writer, "{GENOTYPE_INDENT}{genotype}")?;
            }
        }
    }

    writeln!(
        writer,
        "# {} phenotypes from {} combinations ({} rejected)",
        results.phenotypes.len(),
        summary.total_combinations,
        summary.rejected_combinations
    )?;
    Ok(())
}
