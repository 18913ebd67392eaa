use letoto_db::models::{Draw, NumberStats, POOL_SIZE};

/// Fréquence et retard de chaque numéro sur la fenêtre fournie
/// (draws[0] = le plus récent). Le retard est l'indice de la dernière
/// apparition ; un numéro jamais vu a un retard égal à la taille de fenêtre.
pub fn compute_stats(draws: &[Draw]) -> Vec<NumberStats> {
    let mut stats: Vec<NumberStats> = (1..=POOL_SIZE as u8)
        .map(|n| NumberStats {
            number: n,
            frequency: 0,
            gap: 0,
        })
        .collect();

    for (i, draw) in draws.iter().enumerate() {
        for &n in &draw.numbers {
            let idx = (n - 1) as usize;
            if idx < stats.len() {
                if stats[idx].frequency == 0 {
                    stats[idx].gap = i as u32;
                }
                stats[idx].frequency += 1;
            }
        }
    }

    for stat in &mut stats {
        if stat.frequency == 0 {
            stat.gap = draws.len() as u32;
        }
    }

    stats
}
