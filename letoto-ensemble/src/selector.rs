use letoto_db::models::POOL_SIZE;

use crate::config::{validate_base_numbers, EngineConfig};
use crate::ensemble::CandidateScore;
use crate::error::EngineError;

/// Au-delà de ce nombre de sélections, la contrainte de parité est levée.
const PARITY_PHASE: usize = 4;

/// Maximum de numéros d'une même parité parmi les premières sélections.
const PARITY_CAP: usize = 3;

/// Sélection gloutonne sur le classement : prend les meilleurs candidats en
/// sautant ceux qui porteraient une parité à 4 parmi les 4 premières
/// sélections. Aucun aléa ; les égalités sont déjà tranchées par le
/// classement.
pub fn select(ranked: &[CandidateScore], config: &EngineConfig) -> Result<Vec<u8>, EngineError> {
    let picks = select_picks(ranked, config)?;
    let mut numbers: Vec<u8> = config.base_numbers.iter().copied().chain(picks).collect();
    numbers.sort_unstable();
    Ok(numbers)
}

/// Les sélections seules (hors numéros de base), dans l'ordre où elles sont
/// faites.
pub fn select_picks(ranked: &[CandidateScore], config: &EngineConfig) -> Result<Vec<u8>, EngineError> {
    let pick_count = config.system_type.pick_count();
    validate_base_numbers(&config.base_numbers, pick_count)?;

    let needed = pick_count - config.base_numbers.len();
    let mut remaining: Vec<CandidateScore> = ranked.to_vec();
    let mut picks: Vec<u8> = Vec::with_capacity(needed);
    let mut evens = 0usize;
    let mut odds = 0usize;

    while picks.len() < needed {
        let pos = remaining.iter().position(|c| {
            if picks.len() >= PARITY_PHASE {
                return true;
            }
            if c.number % 2 == 0 {
                evens < PARITY_CAP
            } else {
                odds < PARITY_CAP
            }
        });
        match pos {
            Some(pos) => {
                let candidate = remaining.remove(pos);
                if picks.len() < PARITY_PHASE {
                    if candidate.number % 2 == 0 {
                        evens += 1;
                    } else {
                        odds += 1;
                    }
                }
                picks.push(candidate.number);
            }
            None => break,
        }
    }

    // Classement épuisé : complète avec les plus petits numéros libres.
    // Impossible avec 49 candidats, gardé par défense.
    if picks.len() < needed {
        for n in 1..=POOL_SIZE as u8 {
            if picks.len() >= needed {
                break;
            }
            if config.base_numbers.contains(&n) || picks.contains(&n) {
                continue;
            }
            picks.push(n);
        }
    }

    Ok(picks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Method, Range, SystemType};

    fn config(system_type: SystemType, bases: Vec<u8>) -> EngineConfig {
        EngineConfig {
            range: Range::All,
            system_type,
            base_numbers: bases,
            include_additional: false,
            method: Method::EnhancedEnsemble,
        }
    }

    fn ranked_from(numbers: &[u8]) -> Vec<CandidateScore> {
        numbers
            .iter()
            .enumerate()
            .map(|(i, &n)| CandidateScore {
                number: n,
                frequency: 0.0,
                recency: 0.0,
                compatibility: 0.0,
                hot_cold: 0.0,
                combined: 1.0 - i as f64 * 0.01,
            })
            .collect()
    }

    #[test]
    fn test_select_top_without_constraint_hit() {
        let ranked = ranked_from(&[12, 7, 30, 15, 44, 21, 9, 2]);
        let picks = select(&ranked, &config(SystemType::Six, vec![])).unwrap();
        assert_eq!(picks, vec![7, 12, 15, 21, 30, 44]);
    }

    #[test]
    fn test_parity_balance_skips_fourth_even() {
        // Les quatre meilleurs sont pairs : le quatrième pair doit être sauté
        // au profit du premier impair, puis la contrainte est levée.
        let ranked = ranked_from(&[2, 4, 6, 8, 10, 1, 3, 5]);
        let picks = select(&ranked, &config(SystemType::Six, vec![])).unwrap();
        assert_eq!(picks, vec![1, 2, 4, 6, 8, 10]);
    }

    #[test]
    fn test_parity_balance_skips_fourth_odd() {
        let ranked = ranked_from(&[1, 3, 5, 7, 9, 2, 4, 6]);
        let picks = select(&ranked, &config(SystemType::Six, vec![])).unwrap();
        assert_eq!(picks, vec![1, 2, 3, 5, 7, 9]);
    }

    #[test]
    fn test_select_picks_order_preserved() {
        // L'impair sauté en phase de parité est pris en 4e position ; les
        // pairs sautés reviennent une fois la contrainte levée.
        let ranked = ranked_from(&[2, 4, 6, 8, 10, 1]);
        let picks = select_picks(&ranked, &config(SystemType::Six, vec![])).unwrap();
        assert_eq!(picks, vec![2, 4, 6, 1, 8, 10]);
    }

    #[test]
    fn test_bases_fill_slots() {
        let ranked = ranked_from(&[12, 7, 30, 15, 44, 21]);
        let picks = select(&ranked, &config(SystemType::Six, vec![16, 22, 10])).unwrap();
        assert_eq!(picks.len(), 6);
        assert!(picks.contains(&16) && picks.contains(&22) && picks.contains(&10));
        assert_eq!(picks, vec![7, 10, 12, 16, 22, 30]);
    }

    #[test]
    fn test_system_seven_picks_seven() {
        let ranked = ranked_from(&[12, 7, 30, 15, 44, 21, 9, 2]);
        let picks = select(&ranked, &config(SystemType::Seven, vec![])).unwrap();
        assert_eq!(picks.len(), 7);
    }

    #[test]
    fn test_exhausted_ranking_fills_ascending() {
        let ranked = ranked_from(&[12, 7]);
        let picks = select(&ranked, &config(SystemType::Six, vec![])).unwrap();
        assert_eq!(picks.len(), 6);
        assert!(picks.contains(&12) && picks.contains(&7));
        // Complété avec les plus petits numéros libres.
        assert!(picks.contains(&1) && picks.contains(&2) && picks.contains(&3) && picks.contains(&4));
    }

    #[test]
    fn test_too_many_bases_rejected() {
        let ranked = ranked_from(&[12, 7, 30]);
        let err = select(&ranked, &config(SystemType::Six, vec![1, 2, 3, 4, 5, 6, 7])).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfiguration(_)));
    }
}
