use serde::{Deserialize, Serialize};

use letoto_db::models::Draw;

use crate::config::{EngineConfig, Method, Range, SystemType};
use crate::error::EngineError;
use crate::predict;

/// Nombre maximal de points de test par méthode (limité par un stride).
pub const DEFAULT_MAX_TESTS: usize = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodReport {
    pub method: Method,
    pub window: usize,
    pub n_tests: usize,
    /// hit_histogram[k] = nombre de tirages test avec k numéros principaux trouvés.
    pub hit_histogram: Vec<u32>,
    pub additional_hits: u32,
    pub avg_hits: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktestReport {
    pub window: usize,
    pub max_tests: usize,
    pub methods: Vec<MethodReport>,
}

/// Walk-forward : pour chaque tirage test t, on prédit sur
/// draws[t+1 .. t+1+window] et on compte les numéros retrouvés dans le
/// tirage t. CRITIQUE : pas de fuite du futur — l'entraînement est
/// strictement postérieur au tirage test.
pub fn evaluate_method(
    draws: &[Draw],
    window: usize,
    max_tests: usize,
    method: Method,
) -> Result<MethodReport, EngineError> {
    let config = EngineConfig {
        range: Range::Last(window),
        system_type: SystemType::Six,
        base_numbers: Vec::new(),
        include_additional: false,
        method,
    };

    let max_t = draws.len().saturating_sub(window + 1);
    let stride = if max_tests > 0 { (max_t / max_tests).max(1) } else { 1 };

    let pick_count = config.system_type.pick_count();
    let mut hit_histogram = vec![0u32; pick_count + 1];
    let mut additional_hits = 0u32;
    let mut total_hits = 0u64;
    let mut n_tests = 0usize;

    for t in (0..max_t).step_by(stride) {
        let train = &draws[t + 1..t + 1 + window];
        let prediction = predict(train, &config)?;

        let test_draw = &draws[t];
        let hits = prediction
            .numbers
            .iter()
            .filter(|n| test_draw.numbers.contains(n))
            .count();

        hit_histogram[hits.min(pick_count)] += 1;
        total_hits += hits as u64;
        if prediction.numbers.contains(&test_draw.additional) {
            additional_hits += 1;
        }
        n_tests += 1;
    }

    let avg_hits = if n_tests > 0 {
        total_hits as f64 / n_tests as f64
    } else {
        0.0
    };

    Ok(MethodReport {
        method,
        window,
        n_tests,
        hit_histogram,
        additional_hits,
        avg_hits,
    })
}

pub fn save_report(report: &BacktestReport, path: &std::path::Path) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)?;
    Ok(())
}

pub fn load_report(path: &std::path::Path) -> anyhow::Result<BacktestReport> {
    let json = std::fs::read_to_string(path)?;
    let report: BacktestReport = serde_json::from_str(&json)?;
    Ok(report)
}
