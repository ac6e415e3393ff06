#![allow(dead_code)]

use std::io::Write;

use assert_cmd::Command;
use tempfile::NamedTempFile;

/// Bay dam heterozygous for cream, black sire carrying dun and tobiano
pub const BAY_BY_BLACK_JSON: &str = r#"{
    "dam": {
        "extension": "E/e", "agouti": "A/a", "cream": "CR/n", "dun": "n/n", "tobiano": "n/n"
    },
    "sire": {
        "extension": "E/e", "agouti": "a/a", "cream": "n/n", "dun": "D/n", "tobiano": "TO/n"
    }
}"#;

/// Both parents carry lethal white overo
pub const OVERO_BY_OVERO_JSON: &str = r#"{
    "dam": { "extension": "E/E", "agouti": "A/A", "overo": "Olw/n" },
    "sire": { "extension": "E/E", "agouti": "A/A", "overo": "n/Olw" }
}"#;

/// Writes `contents` to a fresh temporary `.json` file
pub fn write_cross_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

/// The equigen binary with logging silenced
pub fn equigen() -> Command {
    let mut cmd = Command::cargo_bin("equigen").expect("equigen binary");
    cmd.env("RUST_LOG", "off");
    cmd
}

/// Runs equigen on a cross file and returns stdout
pub fn run_equigen(input_file: &str, format: &str) -> Result<String, Box<dyn std::error::Error>> {
    let output = equigen()
        .arg("-i")
        .arg(input_file)
        .arg("-f")
        .arg(format)
        .arg("-q")
        .output()?;

    if !output.status.success() {
        return Err(format!(
            "equigen failed: {}",
            String::from_utf8_lossy(&output.stderr)
        )
        .into());
    }
    Ok(String::from_utf8(output.stdout)?)
}

/// Parses `label - pct%` header lines of a text report
pub fn text_percentages(report: &str) -> Vec<(String, f64)> {
    report
        .lines()
        .filter(|line| !line.starts_with(' ') && !line.starts_with('#'))
        .filter_map(|line| {
            let (label, pct) = line.rsplit_once(" - ")?;
            let pct = pct.strip_suffix('%')?.parse().ok()?;
            Some((label.to_string(), pct))
        })
        .collect()
}
