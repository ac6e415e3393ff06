use equigen_core::config::{EquigenConfig, OutputFormat};
use equigen_core::engine::{CrossAnalyzer, compute_phenotype_distribution};
use equigen_core::output::write_results;
use equigen_core::results::AggregatedResult;
use equigen_core::types::Cross;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct WasmEquigenOptions {
    pub format: String, // "text", "summary", "tsv", "json"
}

impl Default for WasmEquigenOptions {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
        }
    }
}

#[wasm_bindgen]
pub struct CrossResult {
    output: String,
    phenotype_count: usize,
    combination_count: usize,
    rejected_count: usize,
    phenotypes: Vec<AggregatedResult>,
}

#[wasm_bindgen]
impl CrossResult {
    #[wasm_bindgen(getter)]
    pub fn output(&self) -> String {
        self.output.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn phenotype_count(&self) -> usize {
        self.phenotype_count
    }

    #[wasm_bindgen(getter)]
    pub fn combination_count(&self) -> usize {
        self.combination_count
    }

    #[wasm_bindgen(getter)]
    pub fn rejected_count(&self) -> usize {
        self.rejected_count
    }

    /// Array of `{ phenotype, genotypes, count, percentage }` objects
    pub fn distribution(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.phenotypes)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}

fn run_analysis(cross: &Cross, options: &WasmEquigenOptions) -> Result<CrossResult, String> {
    let output_format: OutputFormat = options
        .format
        .parse()
        .map_err(|e| format!("Invalid output format: {}", e))?;

    // Browsers have no rayon pool
    let analyzer = CrossAnalyzer::new(EquigenConfig {
        output_format,
        quiet: true,
        parallel: false,
        num_threads: None,
    });
    let results = analyzer
        .analyze(cross)
        .map_err(|e| format!("Analysis error: {}", e))?;

    let mut output = Vec::new();
    write_results(&mut output, &results, analyzer.config.output_format)
        .map_err(|e| format!("Output error: {}", e))?;
    let output = String::from_utf8(output).map_err(|e| format!("UTF-8 error: {}", e))?;

    Ok(CrossResult {
        output,
        phenotype_count: results.phenotypes.len(),
        combination_count: results.summary.total_combinations,
        rejected_count: results.summary.rejected_combinations,
        phenotypes: results.phenotypes,
    })
}

fn parse_cross(parents_js: JsValue) -> Result<Cross, JsValue> {
    serde_wasm_bindgen::from_value(parents_js)
        .map_err(|e| JsValue::from_str(&format!("Invalid parents: {}", e)))
}

/// Analyze `{ dam: { extension: "E/e", ... }, sire: { ... } }` and render a report
#[wasm_bindgen]
pub fn analyze_cross(parents_js: JsValue, options_js: JsValue) -> Result<CrossResult, JsValue> {
    let cross = parse_cross(parents_js)?;
    let options: WasmEquigenOptions = serde_wasm_bindgen::from_value(options_js).unwrap_or_default();

    run_analysis(&cross, &options).map_err(|e| JsValue::from_str(&e))
}

/// The bare distribution, unsorted, as an array of plain objects
#[wasm_bindgen(js_name = computePhenotypeDistribution)]
pub fn compute_distribution(parents_js: JsValue) -> Result<JsValue, JsValue> {
    let cross = parse_cross(parents_js)?;
    serde_wasm_bindgen::to_value(&compute_phenotype_distribution(&cross))
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
