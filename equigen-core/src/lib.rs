//! # Equigen - Horse Coat Color Cross Engine
//!
//! Predicts the distribution of offspring coat colors for a horse cross from
//! the dam's and sire's genotypes, by Mendelian expansion over a fixed set of
//! twelve color genes.
//!
//! ## Overview
//!
//! Each gene of the two parents is crossed into its four equally likely
//! offspring genotypes (a Punnett square read in dam/sire order). The
//! Cartesian product of those outcomes is walked lazily; every combination is
//! turned into a color label by an ordered rule chain and counted. The result
//! is one entry per distinct label with its contributing genotypes, count and
//! percentage.
//!
//! ## Features
//!
//! - **Ordered Derivation**: base color, dilutions, white patterns, modifiers
//! - **Lethal Detection**: `Olw/Olw` short-circuits to a non-viable label
//! - **Parallel Processing**: large crosses are chunked across Rayon
//! - **Multiple Output Formats**: text, summary, TSV and JSON reports
//!
//! ## Quick Start
//!
//! ```rust
//! use equigen_core::compute_phenotype_distribution;
//! use equigen_core::types::{Cross, ParentalGenotypes};
//!
//! let dam = ParentalGenotypes::from_strings([("extension", "e/e"), ("agouti", "A/A")])?;
//! let sire = ParentalGenotypes::from_strings([("extension", "e/e"), ("agouti", "a/a")])?;
//!
//! let results = compute_phenotype_distribution(&Cross::new(dam, sire));
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].phenotype, "Red");
//! assert_eq!(results[0].percentage_label(), "100.0");
//! # Ok::<(), equigen_core::types::EquigenError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Genes, genotypes, parents and the error type
//! - [`genotype`]: Genotype parsing, dominance ranking and input loading
//! - [`cross`]: Per-gene crosses and the combination space
//! - [`phenotype`]: The derivation chain from combination to label
//! - [`aggregate`]: Counting labels into a distribution
//! - [`engine`]: Entry point and the configurable [`CrossAnalyzer`]
//! - [`config`]: Configuration options
//! - [`results`]: Distribution and summary types
//! - [`output`]: Report writers
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, EquigenError>`](types::EquigenError).
//! Malformed genotype strings and unknown gene names are errors. A
//! combination missing extension or agouti data is not: it is dropped and
//! counted as rejected.

pub mod aggregate;
pub mod config;
pub mod constants;
pub mod cross;
pub mod engine;
pub mod genotype;
pub mod output;
pub mod phenotype;
pub mod results;
pub mod types;

pub use engine::{CrossAnalyzer, compute_phenotype_distribution};
