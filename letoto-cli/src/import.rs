use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use std::path::Path;

use letoto_db::db::insert_draw;
use letoto_db::models::{validate_draw, Draw};
use letoto_db::rusqlite::Connection;

/// Formats de date rencontrés dans l'historique CSV.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%d-%b-%Y"];

pub fn normalize_date(raw: &str) -> Result<String> {
    let raw = raw.trim();
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Ok(date.format("%Y-%m-%d").to_string());
        }
    }
    bail!("Format de date invalide : '{}'", raw);
}

fn parse_record(record: &csv::StringRecord) -> Result<Draw> {
    let get = |idx: usize| -> Result<String> {
        record
            .get(idx)
            .map(|s| s.trim().to_string())
            .with_context(|| format!("Champ manquant à l'index {}", idx))
    };

    let get_u8 = |idx: usize| -> Result<u8> {
        let s = get(idx)?;
        s.parse::<u8>()
            .with_context(|| format!("Impossible de parser '{}' (index {})", s, idx))
    };

    let date = normalize_date(&get(0)?)?;

    let numbers: [u8; 6] = [
        get_u8(1)?,
        get_u8(2)?,
        get_u8(3)?,
        get_u8(4)?,
        get_u8(5)?,
        get_u8(6)?,
    ];
    let additional = get_u8(7)?;

    validate_draw(&numbers, additional)?;

    Ok(Draw { date, numbers, additional })
}

pub struct ImportResult {
    pub total_records: u32,
    pub inserted: u32,
    pub skipped: u32,
    pub errors: u32,
}

/// Import du CSV `date,n1,n2,n3,n4,n5,n6,additional`. Les lignes mal formées
/// sont comptées et signalées, jamais corrigées silencieusement.
pub fn import_csv(conn: &Connection, path: &Path) -> Result<ImportResult> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Impossible d'ouvrir {:?}", path))?;

    let tx = conn.unchecked_transaction()
        .context("Impossible de démarrer la transaction")?;

    let mut result = ImportResult {
        total_records: 0,
        inserted: 0,
        skipped: 0,
        errors: 0,
    };

    for record_result in reader.records() {
        result.total_records += 1;
        match record_result {
            Ok(record) => {
                match parse_record(&record) {
                    Ok(draw) => {
                        match insert_draw(&tx, &draw) {
                            Ok(true) => result.inserted += 1,
                            Ok(false) => result.skipped += 1,
                            Err(e) => {
                                eprintln!("Erreur insertion tirage {}: {}", result.total_records, e);
                                result.errors += 1;
                            }
                        }
                    }
                    Err(e) => {
                        eprintln!("Erreur parsing ligne {}: {}", result.total_records, e);
                        result.errors += 1;
                    }
                }
            }
            Err(e) => {
                eprintln!("Erreur lecture ligne {}: {}", result.total_records, e);
                result.errors += 1;
            }
        }
    }

    tx.commit().context("Échec du commit")?;
    Ok(result)
}
