use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use textplots::Plot;

use letoto_db::models::{Draw, NumberStats};
use letoto_ensemble::backtest::MethodReport;
use letoto_ensemble::config::EngineConfig;
use letoto_ensemble::scores::hot_cold::Temperature;
use letoto_ensemble::Prediction;

use crate::import::ImportResult;

pub fn display_draws(draws: &[Draw]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Date", "Numéros", "Additionnel"]);

    for draw in draws {
        let mut sorted = draw.numbers;
        sorted.sort_unstable();
        let numbers_str = sorted
            .iter()
            .map(|n| format!("{:2}", n))
            .collect::<Vec<_>>()
            .join(" - ");
        table.add_row(vec![
            draw.date.clone(),
            numbers_str,
            format!("{:2}", draw.additional),
        ]);
    }

    println!("{table}");
}

pub fn display_prediction(prediction: &Prediction, config: &EngineConfig) {
    println!("\n== {} ==\n", config.method);

    let numbers_str = prediction
        .numbers
        .iter()
        .map(|n| format!("{:2}", n))
        .collect::<Vec<_>>()
        .join(" - ");
    let mut grid = Table::new();
    grid.load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Sélection"]);
    grid.add_row(vec![Cell::new(&numbers_str).fg(Color::Green)]);
    println!("{grid}");

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "#", "", "Fréquence", "Récence", "Compatibilité", "Chaud/Froid", "Score",
        ]);

    for &n in &prediction.numbers {
        if let Some(score) = prediction.scores.get(&n) {
            let is_base = config.base_numbers.contains(&n);
            let tag = if is_base { "base" } else { "" };
            let number_cell = if is_base {
                Cell::new(format!("{:2}", n)).fg(Color::Yellow)
            } else {
                Cell::new(format!("{:2}", n)).fg(Color::Green)
            };
            table.add_row(vec![
                number_cell,
                Cell::new(tag),
                Cell::new(format!("{:.4}", score.frequency)),
                Cell::new(format!("{:.4}", score.recency)),
                Cell::new(format!("{:.4}", score.compatibility)),
                Cell::new(format!("{:.4}", score.hot_cold)),
                Cell::new(format!("{:.4}", score.combined)),
            ]);
        }
    }
    println!("{table}");

    display_top_candidates(prediction, config);
}

/// Les 15 meilleurs candidats du classement, numéros de base exclus.
fn display_top_candidates(prediction: &Prediction, config: &EngineConfig) {
    let mut candidates: Vec<_> = prediction
        .scores
        .values()
        .filter(|c| !config.base_numbers.contains(&c.number))
        .collect();
    candidates.sort_by(|a, b| {
        b.combined
            .partial_cmp(&a.combined)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.number.cmp(&b.number))
    });

    println!("\n── Top 15 du classement ──");
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Score", "Contribution"]);

    let max_combined = candidates
        .first()
        .map(|c| c.combined)
        .unwrap_or(0.0)
        .max(f64::MIN_POSITIVE);

    for c in candidates.iter().take(15) {
        let bar = "█".repeat((c.combined / max_combined * 30.0).round() as usize);
        table.add_row(vec![
            format!("{:2}", c.number),
            format!("{:.4}", c.combined),
            bar,
        ]);
    }
    println!("{table}");
}

pub fn display_stats(stats: &[NumberStats], temperatures: &[Temperature], window: usize) {
    println!("\n== Statistiques sur {} tirages ==\n", window);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Fréquence", "Retard", "Température"]);

    for stat in stats {
        let temp = temperatures
            .get((stat.number - 1) as usize)
            .copied()
            .unwrap_or(Temperature::Neutral);
        let temp_cell = match temp {
            Temperature::Hot => Cell::new(format!("{}", temp)).fg(Color::Green),
            Temperature::Cold => Cell::new(format!("{}", temp)).fg(Color::Cyan),
            Temperature::Neutral => Cell::new(format!("{}", temp)),
        };
        table.add_row(vec![
            Cell::new(format!("{:2}", stat.number)),
            Cell::new(format!("{}", stat.frequency)),
            Cell::new(format!("{}", stat.gap)),
            temp_cell,
        ]);
    }
    println!("{table}");
}

/// Graphique ASCII des fréquences par numéro.
pub fn display_frequency_chart(stats: &[NumberStats]) {
    println!("\n== Fréquences par numéro ==\n");

    let points: Vec<(f32, f32)> = stats
        .iter()
        .map(|s| (s.number as f32, s.frequency as f32))
        .collect();
    if points.is_empty() {
        println!("  (Pas de données à afficher)");
        return;
    }

    let y_max = stats.iter().map(|s| s.frequency).max().unwrap_or(0) as f32 + 1.0;
    let shape = textplots::Shape::Bars(&points);
    let mut chart = textplots::Chart::new_with_y_range(120, 40, 1.0, 49.0, 0.0, y_max);
    println!("{}", chart.lineplot(&shape));
}

pub fn display_backtest(reports: &[MethodReport]) {
    println!("\n== Backtest walk-forward ==\n");

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Méthode", "Fenêtre", "Tests", "Touches moy.", "Histogramme (0→6)", "Additionnel",
        ]);

    for report in reports {
        let histogram = report
            .hit_histogram
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" / ");
        table.add_row(vec![
            Cell::new(report.method.name()),
            Cell::new(format!("{}", report.window)),
            Cell::new(format!("{}", report.n_tests)),
            Cell::new(format!("{:.3}", report.avg_hits)),
            Cell::new(histogram),
            Cell::new(format!("{}", report.additional_hits)),
        ]);
    }
    println!("{table}");

    // Espérance uniforme : 6 × 6/49 ≈ 0,73 touche par tirage.
    println!("\n  (Référence aléatoire : ~0.735 touche moyenne)");
}

pub fn display_import_summary(result: &ImportResult) {
    println!("\nImport terminé :");
    println!("  Lignes lues     : {}", result.total_records);
    println!("  Insérés         : {}", result.inserted);
    println!("  Doublons ignorés: {}", result.skipped);
    println!("  Erreurs         : {}", result.errors);
}
