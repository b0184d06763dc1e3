use engine::Language;
use std::env;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("invalid value '{value}' for {key}")]
    Invalid { key: &'static str, value: String },
}

/// Runtime configuration read from the environment (and `.env`).
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub environment: String,
    pub data_path: PathBuf,
    pub history_path: PathBuf,
    pub cors_origins: Vec<String>,
    pub port: u16,
    pub language: Language,
    pub default_budget: f64,
    pub session_ttl_minutes: i64,
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let text = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Settings {
            environment: text("ENVIRONMENT", "development"),
            data_path: PathBuf::from(text("DATA_PATH", "data/players_21.csv")),
            history_path: PathBuf::from(text("HISTORY_PATH", "data/team_history.json")),
            cors_origins: text("CORS_ORIGINS", "http://localhost:5173")
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(String::from)
                .collect(),
            port: parse(&lookup, "PORT", 18000)?,
            language: parse(&lookup, "LANGUAGE", Language::English)?,
            default_budget: parse(&lookup, "DEFAULT_BUDGET", 100_000_000.0)?,
            session_ttl_minutes: parse(&lookup, "SESSION_TTL_MINUTES", 30)?,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }

    /// Default `RUST_LOG` filter when none is set.
    pub fn log_filter(&self) -> &'static str {
        if self.is_production() { "info" } else { "debug" }
    }
}

fn parse<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, SettingsError> {
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| SettingsError::Invalid { key, value }),
        None => Ok(default),
    }
}
