use anyhow::{anyhow, Context, Result};

use crate::heatmap::domain_scorer::DifficultyPolarity;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Direction of the company-difficulty multiplier (`HEATMAP_DIFFICULTY_POLARITY`).
    pub difficulty_polarity: DifficultyPolarity,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            difficulty_polarity: parse_polarity(
                std::env::var("HEATMAP_DIFFICULTY_POLARITY").ok().as_deref(),
            )?,
        })
    }
}

fn parse_polarity(value: Option<&str>) -> Result<DifficultyPolarity> {
    match value {
        None => Ok(DifficultyPolarity::default()),
        Some(raw) if raw.trim().is_empty() => Ok(DifficultyPolarity::default()),
        Some(raw) => raw
            .parse()
            .map_err(|e: String| anyhow!(e))
            .context("HEATMAP_DIFFICULTY_POLARITY is invalid"),
    }
}
