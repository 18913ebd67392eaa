use letoto_db::models::POOL_SIZE;

use super::recency::{decay_tier, draw_weight};
use super::ScoreWindow;

/// Facteur appliqué au poids de récence d'un tirage contenant un numéro de base.
pub const COMPATIBILITY_FACTOR: f64 = 1.5;

/// Co-occurrence avec les numéros de base : chaque tirage contenant au moins
/// un numéro de base crédite son poids de récence (× facteur) à tous les
/// autres numéros du même tirage. Sans numéros de base, tout reste à zéro.
pub fn compatibility_scores(window: &ScoreWindow, bases: &[u8]) -> Vec<f64> {
    let mut scores = vec![0.0f64; POOL_SIZE];
    if bases.is_empty() {
        return scores;
    }

    let tier = decay_tier(window.len());
    for (t, draw) in window.draws().iter().enumerate() {
        let pool: Vec<u8> = window.pool_of(draw).collect();
        if !pool.iter().any(|n| bases.contains(n)) {
            continue;
        }
        let weight = draw_weight(t, tier) * COMPATIBILITY_FACTOR;
        for &n in &pool {
            if bases.contains(&n) {
                continue;
            }
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
    fn test_empty_bases_all_zero() {
        let draws = make_test_draws(20);
        let window = ScoreWindow::new(&draws, Range::All, false);
        let scores = compatibility_scores(&window, &[]);
        assert!(scores.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_cooccurring_number_credited() {
        let draws = vec![
            Draw { date: "2026-01-08".into(), numbers: [16, 2, 30, 41, 8, 25], additional: 10 },
            Draw { date: "2026-01-05".into(), numbers: [1, 3, 5, 7, 9, 11], additional: 13 },
        ];
        let window = ScoreWindow::new(&draws, Range::All, false);
        let scores = compatibility_scores(&window, &[16]);

        // Les co-occurrents du tirage contenant 16 sont crédités.
        assert!(scores[1] > 0.0); // numéro 2
        assert!(scores[29] > 0.0); // numéro 30
        // Le tirage sans numéro de base ne crédite rien.
        assert_eq!(scores[0], 0.0); // numéro 1
        // Le numéro de base lui-même n'est jamais crédité.
        assert_eq!(scores[15], 0.0); // numéro 16
    }

    #[test]
    fn test_draw_counted_once_with_two_bases() {
        let draws = vec![
            Draw { date: "2026-01-08".into(), numbers: [16, 22, 30, 41, 8, 25], additional: 10 },
        ];
        let window = ScoreWindow::new(&draws, Range::All, false);
        let one_base = compatibility_scores(&window, &[16]);
        let two_bases = compatibility_scores(&window, &[16, 22]);
        // Crédit par tirage, pas par numéro de base présent.
        assert!((two_bases[29] - one_base[29]).abs() < 1e-12);
    }

    #[test]
    fn test_factor_applied() {
        let draws = vec![
            Draw { date: "2026-01-08".into(), numbers: [16, 2, 30, 41, 8, 25], additional: 10 },
        ];
        let window = ScoreWindow::new(&draws, Range::All, false);
        let scores = compatibility_scores(&window, &[16]);
        let tier = decay_tier(1);
        let expected = draw_weight(0, tier) * COMPATIBILITY_FACTOR;
        assert!((scores[1] - expected).abs() < 1e-12);
    }
}
