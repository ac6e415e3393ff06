use std::io::Write;

use crate::{results::CrossResults, types::EquigenError};

/// Write results as a pretty-printed JSON document
pub fn write_json_format<W: Write>(
    writer: &mut W,
    results: &CrossResults,
) -> Result<(), EquigenError> {
    serde_json::to_writer_pretty(&mut *writer, results)?;
    writeln!(writer)?;
    Ok(())
}
