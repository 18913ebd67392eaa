mod analysis;
mod display;
mod import;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};

use letoto_db::db::{count_draws, db_path, fetch_last_draws, insert_draw, migrate, open_db};
use letoto_db::models::{validate_draw, Draw};
use letoto_ensemble::backtest::{evaluate_method, save_report, BacktestReport, DEFAULT_MAX_TESTS};
use letoto_ensemble::config::{EngineConfig, Method, Range, SystemType};
use letoto_ensemble::scores::{hot_cold, ScoreWindow};

use crate::display::{
    display_backtest, display_draws, display_frequency_chart, display_import_summary,
    display_prediction, display_stats,
};

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum MethodArg {
    #[default]
    Enhanced,
    Frequency,
    Weighted,
    HotCold,
}

impl From<MethodArg> for Method {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Enhanced => Method::EnhancedEnsemble,
            MethodArg::Frequency => Method::FrequencyCompatibility,
            MethodArg::Weighted => Method::WeightedRecent,
            MethodArg::HotCold => Method::HotCold,
        }
    }
}

#[derive(Parser)]
#[command(name = "letoto", about = "Analyseur de tirages TOTO Singapour")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Importer les tirages depuis un fichier CSV
    Import {
        /// Chemin vers le fichier CSV (date,n1,n2,n3,n4,n5,n6,additional)
        #[arg(short, long, default_value = "assets/toto_results.csv")]
        file: PathBuf,
    },

    /// Afficher le chemin de la base de données
    DbPath,

    /// Lister les derniers tirages
    List {
        /// Nombre de tirages à afficher
        #[arg(short, long, default_value = "10")]
        last: u32,
    },

    /// Afficher les statistiques (fréquences, retards, chaud/froid)
    Stats {
        /// Fenêtre d'analyse (nombre de tirages)
        #[arg(short, long, default_value = "50")]
        window: u32,

        /// Afficher le graphique des fréquences
        #[arg(long)]
        chart: bool,
    },

    /// Scorer les candidats et sélectionner les numéros
    Predict {
        /// Méthode de scoring
        #[arg(short, long, default_value = "enhanced")]
        method: MethodArg,

        /// Fenêtre d'analyse : un nombre de tirages, ou "all"
        #[arg(short, long, default_value = "50")]
        range: String,

        /// System type : 6 ou 7 numéros
        #[arg(short, long, default_value = "6")]
        system: u8,

        /// Numéros de base (ancres), séparés par des virgules
        #[arg(short, long, value_delimiter = ',')]
        base: Vec<u8>,

        /// Compter le numéro additionnel dans les fréquences
        #[arg(long)]
        include_additional: bool,

        /// Sortie JSON (contrat : numéros + scores par numéro)
        #[arg(long)]
        json: bool,
    },

    /// Backtest walk-forward des quatre méthodes
    Backtest {
        /// Fenêtre d'entraînement (nombre de tirages)
        #[arg(short, long, default_value = "50")]
        window: usize,

        /// Nombre maximal de points de test par méthode
        #[arg(long, default_value_t = DEFAULT_MAX_TESTS)]
        max_tests: usize,

        /// Fichier de sortie JSON pour le rapport
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Ajouter un tirage manuellement
    Add,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let path = db_path();
    let conn = open_db(&path)?;
    migrate(&conn)?;

    match cli.command {
        Command::Import { file } => cmd_import(&conn, &file),
        Command::DbPath => {
            println!("{}", path.display());
            Ok(())
        }
        Command::List { last } => cmd_list(&conn, last),
        Command::Stats { window, chart } => cmd_stats(&conn, window, chart),
        Command::Predict { method, range, system, base, include_additional, json } => {
            cmd_predict(&conn, method, &range, system, base, include_additional, json)
        }
        Command::Backtest { window, max_tests, output } => {
            cmd_backtest(&conn, window, max_tests, output.as_deref())
        }
        Command::Add => cmd_add(&conn),
    }
}

fn parse_range(raw: &str) -> Result<Range> {
    if raw.trim().eq_ignore_ascii_case("all") {
        return Ok(Range::All);
    }
    let n: usize = raw
        .trim()
        .parse()
        .with_context(|| format!("Fenêtre invalide : '{}' (nombre ou \"all\")", raw))?;
    Ok(Range::Last(n))
}

fn parse_system(raw: u8) -> Result<SystemType> {
    match raw {
        6 => Ok(SystemType::Six),
        7 => Ok(SystemType::Seven),
        other => bail!("System type invalide : {} (attendu 6 ou 7)", other),
    }
}

fn cmd_import(conn: &letoto_db::rusqlite::Connection, file: &PathBuf) -> Result<()> {
    let result = import::import_csv(conn, file)?;
    display_import_summary(&result);
    Ok(())
}

fn cmd_list(conn: &letoto_db::rusqlite::Connection, last: u32) -> Result<()> {
    let n = count_draws(conn)?;
    if n == 0 {
        println!("Base vide. Lancez d'abord : letoto import");
        return Ok(());
    }
    let draws = fetch_last_draws(conn, last)?;
    display_draws(&draws);
    Ok(())
}

fn cmd_stats(conn: &letoto_db::rusqlite::Connection, window: u32, chart: bool) -> Result<()> {
    let n = count_draws(conn)?;
    if n == 0 {
        println!("Base vide. Lancez d'abord : letoto import");
        return Ok(());
    }
    let effective_window = window.min(n);
    let draws = fetch_last_draws(conn, effective_window)?;

    let stats = analysis::compute_stats(&draws);
    let score_window = ScoreWindow::new(&draws, Range::All, false);
    let temperatures = hot_cold::classify(&score_window);

    display_stats(&stats, &temperatures, draws.len());
    if chart {
        display_frequency_chart(&stats);
    }
    Ok(())
}

fn cmd_predict(
    conn: &letoto_db::rusqlite::Connection,
    method: MethodArg,
    range: &str,
    system: u8,
    base: Vec<u8>,
    include_additional: bool,
    json: bool,
) -> Result<()> {
    let n = count_draws(conn)?;
    if n == 0 {
        bail!("Base vide. Lancez d'abord : letoto import");
    }
    let draws = fetch_last_draws(conn, n)?;

    let config = EngineConfig {
        range: parse_range(range)?,
        system_type: parse_system(system)?,
        base_numbers: base,
        include_additional,
        method: method.into(),
    };

    let prediction = letoto_ensemble::predict(&draws, &config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&prediction)?);
    } else {
        display_prediction(&prediction, &config);
    }
    Ok(())
}

fn cmd_backtest(
    conn: &letoto_db::rusqlite::Connection,
    window: usize,
    max_tests: usize,
    output: Option<&std::path::Path>,
) -> Result<()> {
    let n = count_draws(conn)?;
    if n == 0 {
        bail!("Base vide. Lancez d'abord : letoto import");
    }
    let draws = fetch_last_draws(conn, n)?;
    if draws.len() <= window + 1 {
        bail!(
            "Pas assez de tirages ({}) pour une fenêtre de {}",
            draws.len(),
            window
        );
    }

    let methods = Method::all();
    let pb = ProgressBar::new(methods.len() as u64);
    pb.set_style(ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap()
        .progress_chars("=> "));

    let mut reports = Vec::new();
    for method in methods {
        pb.set_message(method.name());
        let report = evaluate_method(&draws, window, max_tests, method)?;
        reports.push(report);
        pb.inc(1);
    }
    pb.finish_with_message("Backtest terminé");

    display_backtest(&reports);

    if let Some(path) = output {
        let report = BacktestReport {
            window,
            max_tests,
            methods: reports,
        };
        save_report(&report, path)?;
        println!("\nRapport sauvegardé dans : {}", path.display());
    }

    Ok(())
}

fn cmd_add(conn: &letoto_db::rusqlite::Connection) -> Result<()> {
    println!("Ajout d'un tirage manuellement\n");

    let raw_date = prompt("Date (AAAA-MM-JJ) : ")?;
    let date = import::normalize_date(&raw_date)?;

    let numbers = prompt_numbers()?;
    let additional = prompt_additional()?;

    validate_draw(&numbers, additional)?;

    let draw = Draw { date, numbers, additional };

    println!("\nTirage à insérer :");
    display_draws(&[draw.clone()]);

    let confirm = prompt("\nConfirmer l'insertion ? (o/n) : ")?;
    if confirm.trim().to_lowercase() == "o" {
        let inserted = insert_draw(conn, &draw)?;
        if inserted {
            println!("Tirage inséré avec succès.");
        } else {
            println!("Ce tirage existe déjà (doublon ignoré).");
        }
    } else {
        println!("Insertion annulée.");
    }

    Ok(())
}

fn prompt(msg: &str) -> Result<String> {
    print!("{}", msg);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("Erreur de lecture")?;
    Ok(input.trim().to_string())
}

fn prompt_numbers() -> Result<[u8; 6]> {
    loop {
        let input = prompt("6 numéros (séparés par des espaces, 1-49) : ")?;
        let nums: Result<Vec<u8>, _> = input.split_whitespace().map(|s| s.parse::<u8>()).collect();
        match nums {
            Ok(v) if v.len() == 6 => {
                let arr = [v[0], v[1], v[2], v[3], v[4], v[5]];
                if validate_draw(&arr, 1).is_ok() {
                    return Ok(arr);
                }
                println!("Numéros invalides (1-49, pas de doublons). Réessayez.");
            }
            _ => println!("Entrez exactement 6 numéros. Réessayez."),
        }
    }
}

fn prompt_additional() -> Result<u8> {
    loop {
        let input = prompt("Numéro additionnel (1-49) : ")?;
        match input.parse::<u8>() {
            Ok(n) if (1..=49).contains(&n) => return Ok(n),
            _ => println!("Numéro invalide (1-49). Réessayez."),
        }
    }
}
