//! # Equigen CLI - Coat Color Cross Calculator
//!
//! A command-line interface for predicting offspring coat colors of a horse
//! cross.
//!
//! ## Usage
//!
//! ```bash
//! # Parents from a JSON file
//! equigen -i cross.json
//!
//! # Parents on the command line
//! equigen --dam extension=E/e,agouti=A/a --sire extension=e/e,agouti=a/a,cream=CR/n
//!
//! # File plus per-gene overrides, written as TSV
//! equigen -i cross.json --sire dun=D/n -f tsv -o offspring.tsv
//! ```
//!
//! ## Options
//!
//! - `-i, --input <FILE>`: JSON file `{ "dam": {...}, "sire": {...} }`
//! - `--dam <GENES>`: Dam genotypes as `gene=a/b,...` (overrides the file)
//! - `--sire <GENES>`: Sire genotypes as `gene=a/b,...` (overrides the file)
//! - `-o, --output <FILE>`: Output file (default: stdout)
//! - `-f, --format <FORMAT>`: Output format: text, summary, tsv, json (default: text)
//! - `-q, --quiet`: Suppress progress messages
//! - `-t, --threads <N>`: Worker threads (default: all cores)
//! - `--sequential`: Never split the cross across threads
//!
//! Log verbosity follows `RUST_LOG` (default `warn`).

use clap::{Arg, ArgAction, ArgMatches, Command};
use equigen_core::CrossAnalyzer;
use equigen_core::config::{EquigenConfig, OutputFormat};
use equigen_core::genotype::io::{parse_gene_assignments, read_cross_json};
use equigen_core::output::write_results;
use equigen_core::types::Cross;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("equigen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Horse coat color cross calculator")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("JSON file with dam and sire genotypes"),
        )
        .arg(
            Arg::new("dam")
                .long("dam")
                .value_name("GENES")
                .help("Dam genotypes, e.g. extension=E/e,agouti=A/a"),
        )
        .arg(
            Arg::new("sire")
                .long("sire")
                .value_name("GENES")
                .help("Sire genotypes, e.g. extension=e/e,cream=CR/n"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Output file (default: stdout)"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Output format: text, summary, tsv, json")
                .default_value("text"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Quiet mode"),
        )
        .arg(
            Arg::new("threads")
                .short('t')
                .long("threads")
                .value_name("N")
                .value_parser(clap::value_parser!(usize))
                .help("Number of worker threads"),
        )
        .arg(
            Arg::new("sequential")
                .long("sequential")
                .action(ArgAction::SetTrue)
                .help("Disable parallel enumeration"),
        )
}

fn init_logging(quiet: bool) {
    let default_level = if quiet { "error" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Parents from `--input`, then `--dam`/`--sire` laid over them
fn load_cross(matches: &ArgMatches) -> Result<Cross, Box<dyn std::error::Error>> {
    let input = matches.get_one::<String>("input");
    let dam = matches.get_one::<String>("dam");
    let sire = matches.get_one::<String>("sire");
    if input.is_none() && dam.is_none() && sire.is_none() {
        return Err("No parents given: use --input or --dam/--sire".into());
    }

    let mut cross = match input {
        Some(path) => {
            debug!(path = %path, "reading parents");
            read_cross_json(path)?
        }
        None => Cross::default(),
    };
    if let Some(dam) = dam {
        debug!(genes = %dam, "dam overrides");
        cross.dam = cross.dam.overlay(&parse_gene_assignments(dam)?);
    }
    if let Some(sire) = sire {
        debug!(genes = %sire, "sire overrides");
        cross.sire = cross.sire.overlay(&parse_gene_assignments(sire)?);
    }
    Ok(cross)
}

/// Main entry point for the Equigen CLI application.
///
/// Parses command-line arguments, loads both parents, analyzes the cross,
/// and writes the distribution in the requested format.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = cli().get_matches();
    let quiet = matches.get_flag("quiet");
    init_logging(quiet);

    let output_format: OutputFormat = matches
        .get_one::<String>("format")
        .map_or(Ok(OutputFormat::default()), |format| format.parse())?;

    let config = EquigenConfig {
        output_format,
        quiet,
        parallel: !matches.get_flag("sequential"),
        num_threads: matches.get_one::<usize>("threads").copied(),
    };

    let cross = load_cross(&matches)?;
    let analyzer = CrossAnalyzer::with_config(config)?;
    let results = analyzer.analyze(&cross)?;

    let mut writer: Box<dyn Write> = if let Some(output_file) = matches.get_one::<String>("output")
    {
        Box::new(BufWriter::new(File::create(output_file)?))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };
    write_results(&mut writer, &results, analyzer.config.output_format)?;
    writer.flush()?;

    if !analyzer.config.quiet {
        eprintln!(
            "Analysis complete! {} phenotypes from {} combinations ({} rejected).",
            results.phenotypes.len(),
            results.summary.total_combinations,
            results.summary.rejected_combinations
        );
    }

    Ok(())
}
