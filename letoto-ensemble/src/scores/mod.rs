pub mod compatibility;
pub mod frequency;
pub mod hot_cold;
pub mod recency;

use letoto_db::models::Draw;

use crate::config::Range;

/// Fenêtre de scoring : draws[0] = tirage le plus récent. Immuable pendant
/// toute la durée d'un calcul.
pub struct ScoreWindow<'a> {
    draws: &'a [Draw],
    include_additional: bool,
}

impl<'a> ScoreWindow<'a> {
    pub fn new(draws: &'a [Draw], range: Range, include_additional: bool) -> Self {
        let len = range.resolve(draws.len());
        Self {
            draws: &draws[..len],
            include_additional,
        }
    }

    pub fn len(&self) -> usize {
        self.draws.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draws.is_empty()
    }

    pub fn draws(&self) -> &'a [Draw] {
        self.draws
    }

    /// Sous-fenêtre des `len` tirages les plus récents.
    pub fn prefix(&self, len: usize) -> ScoreWindow<'a> {
        let draws = self.draws;
        ScoreWindow {
            draws: &draws[..len.min(draws.len())],
            include_additional: self.include_additional,
        }
    }

    pub fn pool_of(&self, draw: &'a Draw) -> impl Iterator<Item = u8> + 'a {
        let extra = if self.include_additional {
            Some(draw.additional)
        } else {
            None
        };
        draw.numbers.iter().copied().chain(extra)
    }
}

/// Ramène un vecteur de scores à une somme de 1. Un vecteur entièrement nul
/// reste nul : pas de signal, pas de repli uniforme.
pub fn normalize(scores: &mut [f64]) {
    let total: f64 = scores.iter().sum();
    if total > 0.0 {
        for s in scores.iter_mut() {
            *s /= total;
        }
    }
}
