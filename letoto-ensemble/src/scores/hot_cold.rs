use letoto_db::models::POOL_SIZE;

use super::frequency::frequency_counts;
use super::ScoreWindow;

/// Taille maximale de la sous-fenêtre chaud/froid.
pub const SUB_WINDOW: usize = 20;

/// Apparitions minimales dans la sous-fenêtre pour être "chaud".
pub const HOT_THRESHOLD: u32 = 3;

pub const HOT_BONUS: f64 = 0.3;
pub const COLD_BONUS: f64 = 0.7;
pub const NEUTRAL_BONUS: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Temperature {
    Hot,
    Cold,
    Neutral,
}

impl std::fmt::Display for Temperature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Temperature::Hot => write!(f, "HOT"),
            Temperature::Cold => write!(f, "COLD"),
            Temperature::Neutral => write!(f, "-"),
        }
    }
}

/// Classe chaque numéro sur la sous-fenêtre des min(20, range) tirages les
/// plus récents.
pub fn classify(window: &ScoreWindow) -> Vec<Temperature> {
    let sub = window.prefix(SUB_WINDOW);
    frequency_counts(&sub)
        .iter()
        .map(|&c| {
            if c >= HOT_THRESHOLD {
                Temperature::Hot
            } else if c == 0 {
                Temperature::Cold
            } else {
                Temperature::Neutral
            }
        })
        .collect()
}

/// Bonus chaud/froid par numéro. Le bonus "froid" domine : un numéro absent
/// est traité comme "en retard". Biais heuristique assumé, pas une garantie
/// statistique. Fenêtre vide : aucun signal, tout à zéro.
pub fn hot_cold_scores(window: &ScoreWindow) -> Vec<f64> {
    if window.is_empty() {
        return vec![0.0; POOL_SIZE];
    }
    classify(window)
        .iter()
        .map(|t| match t {
            Temperature::Hot => HOT_BONUS,
            Temperature::Cold => COLD_BONUS,
            Temperature::Neutral => NEUTRAL_BONUS,
        })
        .collect()
}
