use serde::{Deserialize, Serialize};

use letoto_db::models::POOL_SIZE;

use crate::error::EngineError;

/// Fenêtre d'analyse : un préfixe des tirages les plus récents, ou tout l'historique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Range {
    Last(usize),
    All,
}

impl Range {
    pub fn resolve(&self, store_len: usize) -> usize {
        match self {
            Range::Last(n) => (*n).min(store_len),
            Range::All => store_len,
        }
    }
}

/// System 6 ou System 7 (variante de pari TOTO à 7 numéros).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemType {
    Six,
    Seven,
}

impl SystemType {
    pub fn pick_count(&self) -> usize {
        match self {
            SystemType::Six => 6,
            SystemType::Seven => 7,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    EnhancedEnsemble,
    FrequencyCompatibility,
    WeightedRecent,
    HotCold,
}

#[derive(Debug, Clone, Copy)]
pub struct ScoreWeights {
    pub frequency: f64,
    pub recency: f64,
    pub compatibility: f64,
    pub hot_cold: f64,
}

impl Method {
    pub fn name(&self) -> &'static str {
        match self {
            Method::EnhancedEnsemble => "Enhanced Ensemble",
            Method::FrequencyCompatibility => "Frequency+Compatibility",
            Method::WeightedRecent => "Weighted Recent",
            Method::HotCold => "Hot/Cold",
        }
    }

    /// Chaque méthode est la même combinaison linéaire avec un vecteur de
    /// poids différent. Constantes de référence, réglables, non calibrées.
    pub fn weights(&self) -> ScoreWeights {
        match self {
            Method::EnhancedEnsemble => ScoreWeights {
                frequency: 0.40,
                recency: 0.35,
                compatibility: 0.0,
                hot_cold: 0.25,
            },
            Method::FrequencyCompatibility => ScoreWeights {
                frequency: 0.40,
                recency: 0.25,
                compatibility: 0.35,
                hot_cold: 0.0,
            },
            Method::WeightedRecent => ScoreWeights {
                frequency: 0.0,
                recency: 0.65,
                compatibility: 0.35,
                hot_cold: 0.0,
            },
            Method::HotCold => ScoreWeights {
                frequency: 0.20,
                recency: 0.10,
                compatibility: 0.0,
                hot_cold: 0.70,
            },
        }
    }

    pub fn all() -> [Method; 4] {
        [
            Method::EnhancedEnsemble,
            Method::FrequencyCompatibility,
            Method::WeightedRecent,
            Method::HotCold,
        ]
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub range: Range,
    pub system_type: SystemType,
    pub base_numbers: Vec<u8>,
    pub include_additional: bool,
    pub method: Method,
}

impl EngineConfig {
    pub fn validate(&self, store_len: usize) -> Result<(), EngineError> {
        if let Range::Last(n) = self.range {
            if n == 0 || n > store_len {
                return Err(EngineError::InvalidConfiguration(format!(
                    "fenêtre {} hors limites (1-{})",
                    n, store_len
                )));
            }
        }
        validate_base_numbers(&self.base_numbers, self.system_type.pick_count())
    }
}

pub fn validate_base_numbers(bases: &[u8], pick_count: usize) -> Result<(), EngineError> {
    if bases.len() > pick_count {
        return Err(EngineError::InvalidConfiguration(format!(
            "{} numéros de base pour {} positions",
            bases.len(),
            pick_count
        )));
    }
    for &b in bases {
        if b < 1 || b > POOL_SIZE as u8 {
            return Err(EngineError::InvalidConfiguration(format!(
                "numéro de base {} hors limites (1-{})",
                b, POOL_SIZE
            )));
        }
    }
    for i in 0..bases.len() {
        for j in (i + 1)..bases.len() {
            if bases[i] == bases[j] {
                return Err(EngineError::InvalidConfiguration(format!(
                    "numéro de base en double : {}",
                    bases[i]
                )));
            }
        }
    }
    Ok(())
}
