use anyhow::{bail, Result};

/// Taille de l'univers numérique du TOTO (numéros 1 à 49).
pub const POOL_SIZE: usize = 49;

/// Nombre de numéros principaux par tirage.
pub const DRAW_SIZE: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    pub date: String,
    pub numbers: [u8; DRAW_SIZE],
    pub additional: u8,
}

#[derive(Debug, Clone)]
pub struct NumberStats {
    pub number: u8,
    pub frequency: u32,
    pub gap: u32,
}

pub fn validate_draw(numbers: &[u8; DRAW_SIZE], additional: u8) -> Result<()> {
    for &n in numbers {
        if n < 1 || n > POOL_SIZE as u8 {
            bail!("Numéro {} hors limites (1-{})", n, POOL_SIZE);
        }
    }
    if additional < 1 || additional > POOL_SIZE as u8 {
        bail!("Numéro additionnel {} hors limites (1-{})", additional, POOL_SIZE);
    }
    for i in 0..numbers.len() {
        for j in (i + 1)..numbers.len() {
            if numbers[i] == numbers[j] {
                bail!("Numéro en double : {}", numbers[i]);
            }
        }
    }
    Ok(())
}
