use letoto_db::models::POOL_SIZE;

use super::ScoreWindow;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayTier {
    pub decay_rate: f64,
    pub multiplier: f64,
}

/// Paliers de décroissance selon la taille de fenêtre. Politique réglable,
/// pas une loi : une petite fenêtre suit la tendance courte et pèse fort sur
/// les tout derniers tirages, une grande fenêtre aplatit la décroissance vers
/// la fréquence de long terme.
pub fn decay_tier(range: usize) -> DecayTier {
    if range <= 20 {
        DecayTier { decay_rate: 0.2, multiplier: 1.5 }
    } else if range <= 50 {
        DecayTier { decay_rate: 0.1, multiplier: 1.2 }
    } else {
        DecayTier { decay_rate: 0.05, multiplier: 1.0 }
    }
}

/// Poids du tirage d'indice `index` (0 = le plus récent).
pub fn draw_weight(index: usize, tier: DecayTier) -> f64 {
    (-(index as f64) * tier.decay_rate).exp() * tier.multiplier
}

/// Somme pondérée par récence : chaque apparition d'un numéro dans le tirage
/// d'indice i contribue weight(i).
pub fn recency_scores(window: &ScoreWindow) -> Vec<f64> {
    let tier = decay_tier(window.len());
    let mut scores = vec![0.0f64; POOL_SIZE];
    for (t, draw) in window.draws().iter().enumerate() {
        let weight = draw_weight(t, tier);
        for n in window.pool_of(draw) {
            let idx = (n - 1) as usize;
            if idx < scores.len() {
                scores[idx] += weight;
            }
        }
    }
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Range;
    use crate::make_test_draws;
    use letoto_db::models::Draw;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(decay_tier(1), DecayTier { decay_rate: 0.2, multiplier: 1.5 });
        assert_eq!(decay_tier(20), DecayTier { decay_rate: 0.2, multiplier: 1.5 });
        assert_eq!(decay_tier(21), DecayTier { decay_rate: 0.1, multiplier: 1.2 });
        assert_eq!(decay_tier(50), DecayTier { decay_rate: 0.1, multiplier: 1.2 });
        assert_eq!(decay_tier(51), DecayTier { decay_rate: 0.05, multiplier: 1.0 });
    }

    #[test]
    fn test_weight_decreases_with_index() {
        let tier = decay_tier(20);
        assert!(draw_weight(0, tier) > draw_weight(1, tier));
        assert!(draw_weight(1, tier) > draw_weight(10, tier));
    }

    #[test]
    fn test_weight_at_zero_is_multiplier() {
        let tier = decay_tier(100);
        assert!((draw_weight(0, tier) - tier.multiplier).abs() < 1e-12);
    }

    #[test]
    fn test_recent_number_scores_higher() {
        let draws = vec![
            Draw { date: "2026-01-08".into(), numbers: [1, 2, 3, 4, 5, 6], additional: 20 },
            Draw { date: "2026-01-05".into(), numbers: [7, 8, 9, 10, 11, 12], additional: 21 },
        ];
        let window = ScoreWindow::new(&draws, Range::All, false);
        let scores = recency_scores(&window);
        assert!(scores[0] > scores[6], "le numéro 1 (récent) doit peser plus que le 7");
    }

    #[test]
    fn test_empty_window_all_zero() {
        let draws = make_test_draws(0);
        let window = ScoreWindow::new(&draws, Range::All, false);
        assert!(recency_scores(&window).iter().all(|&s| s == 0.0));
    }
}
