pub mod backtest;
pub mod config;
pub mod ensemble;
pub mod error;
pub mod scores;
pub mod selector;

use std::collections::BTreeMap;

use serde::Serialize;

use letoto_db::models::{Draw, POOL_SIZE};

use crate::config::EngineConfig;
use crate::ensemble::CandidateScore;
use crate::error::EngineError;
use crate::scores::ScoreWindow;

/// Résultat d'une passe de scoring : les numéros retenus (triés croissants,
/// longueur = system type) et les scores de chaque numéro de l'univers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub numbers: Vec<u8>,
    pub scores: BTreeMap<u8, CandidateScore>,
}

/// Pipeline complet : validation, fenêtre, sous-scores, combinaison,
/// sélection. Fonction pure — deux appels sur les mêmes entrées produisent
/// exactement la même sortie.
pub fn predict(draws: &[Draw], config: &EngineConfig) -> Result<Prediction, EngineError> {
    config.validate(draws.len())?;
    for draw in draws {
        check_draw(draw)?;
    }

    let window = ScoreWindow::new(draws, config.range, config.include_additional);
    let scored = ensemble::score_all(&window, config);
    let ranked = ensemble::rank_candidates(&scored, &config.base_numbers);
    let numbers = selector::select(&ranked, config)?;

    let scores = scored.iter().map(|c| (c.number, *c)).collect();
    Ok(Prediction { numbers, scores })
}

/// Rejet défensif d'un tirage mal formé. L'ingestion a déjà validé, mais le
/// moteur ne doit jamais scorer des données corrompues.
fn check_draw(draw: &Draw) -> Result<(), EngineError> {
    for &n in &draw.numbers {
        if n < 1 || n > POOL_SIZE as u8 {
            return Err(EngineError::InvalidDrawRecord(format!(
                "numéro {} hors limites (1-{})",
                n, POOL_SIZE
            )));
        }
    }
    if draw.additional < 1 || draw.additional > POOL_SIZE as u8 {
        return Err(EngineError::InvalidDrawRecord(format!(
            "numéro additionnel {} hors limites (1-{})",
            draw.additional, POOL_SIZE
        )));
    }
    for i in 0..draw.numbers.len() {
        for j in (i + 1)..draw.numbers.len() {
            if draw.numbers[i] == draw.numbers[j] {
                return Err(EngineError::InvalidDrawRecord(format!(
                    "numéro en double : {}",
                    draw.numbers[i]
                )));
            }
        }
    }
    Ok(())
}

/// Tirages synthétiques déterministes pour les tests : blocs de 6 numéros
/// consécutifs à départ décalé, pour des profils de fréquence variés d'une
/// fenêtre à l'autre.
pub fn make_test_draws(n: usize) -> Vec<Draw> {
    (0..n)
        .map(|i| {
            let start = (i * 5) % 44;
            let mut numbers = [0u8; 6];
            for (j, slot) in numbers.iter_mut().enumerate() {
                *slot = (start + j + 1) as u8;
            }
            Draw {
                date: format!("2025-{:02}-{:02}", (i / 28) % 12 + 1, i % 28 + 1),
                numbers,
                additional: ((i * 13) % 49 + 1) as u8,
            }
        })
        .collect()
}
