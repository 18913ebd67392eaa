use letoto_db::models::POOL_SIZE;

use super::ScoreWindow;

/// Nombre d'apparitions de chaque numéro dans la fenêtre (indice 0 = numéro 1).
/// Fenêtre vide : tout à zéro.
pub fn frequency_counts(window: &ScoreWindow) -> Vec<u32> {
    let mut counts = vec![0u32; POOL_SIZE];
    for draw in window.draws() {
        for n in window.pool_of(draw) {
            let idx = (n - 1) as usize;
            if idx < counts.len() {
                counts[idx] += 1;
            }
        }
    }
    counts
}

pub fn frequency_scores(window: &ScoreWindow) -> Vec<f64> {
    frequency_counts(window).iter().map(|&c| c as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Range;
    use crate::make_test_draws;

    #[test]
    fn test_counts_empty_window() {
        let draws = make_test_draws(0);
        let window = ScoreWindow::new(&draws, Range::All, false);
        let counts = frequency_counts(&window);
        assert_eq!(counts.len(), POOL_SIZE);
        assert!(counts.iter().all(|&c| c == 0));
    }

    #[test]
    fn test_counts_single_draw() {
        let draws = make_test_draws(1);
        let window = ScoreWindow::new(&draws, Range::All, false);
        let counts = frequency_counts(&window);
        assert_eq!(counts.iter().sum::<u32>(), 6);
        for &n in &draws[0].numbers {
            assert_eq!(counts[(n - 1) as usize], 1);
        }
    }

    #[test]
    fn test_counts_include_additional() {
        let draws = make_test_draws(4);
        let without = frequency_counts(&ScoreWindow::new(&draws, Range::All, false));
        let with = frequency_counts(&ScoreWindow::new(&draws, Range::All, true));
        assert_eq!(without.iter().sum::<u32>(), 4 * 6);
        assert_eq!(with.iter().sum::<u32>(), 4 * 7);
    }
}
