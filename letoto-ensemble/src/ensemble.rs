use serde::Serialize;

use letoto_db::models::POOL_SIZE;

use crate::config::EngineConfig;
use crate::scores::{self, compatibility, frequency, hot_cold, recency, ScoreWindow};

/// Scores agrégés d'un candidat. `combined` est une fonction déterministe des
/// quatre sous-scores (parts normalisées) et des poids de la méthode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CandidateScore {
    pub number: u8,
    pub frequency: f64,
    pub recency: f64,
    pub compatibility: f64,
    pub hot_cold: f64,
    pub combined: f64,
}

/// Calcule les quatre sous-scores sur la fenêtre, les normalise en parts,
/// puis les combine avec le vecteur de poids de la méthode.
pub fn score_all(window: &ScoreWindow, config: &EngineConfig) -> Vec<CandidateScore> {
    let mut freq = frequency::frequency_scores(window);
    let mut rec = recency::recency_scores(window);
    let mut compat = compatibility::compatibility_scores(window, &config.base_numbers);
    let mut hot = hot_cold::hot_cold_scores(window);

    scores::normalize(&mut freq);
    scores::normalize(&mut rec);
    scores::normalize(&mut compat);
    scores::normalize(&mut hot);

    let w = config.method.weights();
    (0..POOL_SIZE)
        .map(|i| CandidateScore {
            number: (i + 1) as u8,
            frequency: freq[i],
            recency: rec[i],
            compatibility: compat[i],
            hot_cold: hot[i],
            combined: w.frequency * freq[i]
                + w.recency * rec[i]
                + w.compatibility * compat[i]
                + w.hot_cold * hot[i],
        })
        .collect()
}

/// Classement des candidats hors numéros de base : score combiné décroissant,
/// égalité exacte départagée par numéro croissant.
pub fn rank_candidates(scored: &[CandidateScore], bases: &[u8]) -> Vec<CandidateScore> {
    let mut ranked: Vec<CandidateScore> = scored
        .iter()
        .filter(|c| !bases.contains(&c.number))
        .copied()
        .collect();
    ranked.sort_by(|a, b| {
        b.combined
            .partial_cmp(&a.combined)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.number.cmp(&b.number))
    });
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Method, Range, SystemType};
    use crate::make_test_draws;

    fn config(method: Method, bases: Vec<u8>) -> EngineConfig {
        EngineConfig {
            range: Range::All,
            system_type: SystemType::Six,
            base_numbers: bases,
            include_additional: false,
            method,
        }
    }

    #[test]
    fn test_score_all_covers_pool() {
        let draws = make_test_draws(30);
        let window = ScoreWindow::new(&draws, Range::All, false);
        let scored = score_all(&window, &config(Method::EnhancedEnsemble, vec![]));
        assert_eq!(scored.len(), POOL_SIZE);
        assert_eq!(scored[0].number, 1);
        assert_eq!(scored[48].number, 49);
    }

    #[test]
    fn test_combined_matches_weights() {
        let draws = make_test_draws(30);
        let window = ScoreWindow::new(&draws, Range::All, false);
        let cfg = config(Method::EnhancedEnsemble, vec![]);
        let w = cfg.method.weights();
        for c in score_all(&window, &cfg) {
            let expected = w.frequency * c.frequency
                + w.recency * c.recency
                + w.compatibility * c.compatibility
                + w.hot_cold * c.hot_cold;
            assert!((c.combined - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_rank_excludes_bases() {
        let draws = make_test_draws(30);
        let window = ScoreWindow::new(&draws, Range::All, false);
        let bases = vec![16, 22, 10];
        let scored = score_all(&window, &config(Method::FrequencyCompatibility, bases.clone()));
        let ranked = rank_candidates(&scored, &bases);
        assert_eq!(ranked.len(), POOL_SIZE - bases.len());
        assert!(ranked.iter().all(|c| !bases.contains(&c.number)));
    }

    #[test]
    fn test_rank_descending_with_tie_break() {
        let scored = vec![
            CandidateScore { number: 3, frequency: 0.0, recency: 0.0, compatibility: 0.0, hot_cold: 0.0, combined: 0.5 },
            CandidateScore { number: 1, frequency: 0.0, recency: 0.0, compatibility: 0.0, hot_cold: 0.0, combined: 0.5 },
            CandidateScore { number: 2, frequency: 0.0, recency: 0.0, compatibility: 0.0, hot_cold: 0.0, combined: 0.9 },
        ];
        let ranked = rank_candidates(&scored, &[]);
        let order: Vec<u8> = ranked.iter().map(|c| c.number).collect();
        assert_eq!(order, vec![2, 1, 3]);
    }

    #[test]
    fn test_empty_bases_zero_compatibility() {
        let draws = make_test_draws(30);
        let window = ScoreWindow::new(&draws, Range::All, false);
        let scored = score_all(&window, &config(Method::WeightedRecent, vec![]));
        assert!(scored.iter().all(|c| c.compatibility == 0.0));
    }
}
