//! Runtime configuration resolved from the environment.
use crate::models::DEFAULT_UPCOMING_DAYS;
use std::env;
use std::path::PathBuf;

pub const DB_PATH_VAR: &str = "NEOLINGUA_DB";
pub const UPCOMING_DAYS_VAR: &str = "NEOLINGUA_UPCOMING_DAYS";
pub const DEFAULT_DB_PATH: &str = "neolingua.sqlite3";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    /// Look-ahead window for the upcoming-reviews listing.
    pub upcoming_days: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            upcoming_days: DEFAULT_UPCOMING_DAYS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup. Unset variables
    /// take defaults; unparsable ones are logged and take defaults too.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup(DB_PATH_VAR).filter(|path| !path.is_empty()) {
            config.db_path = PathBuf::from(path);
        }

        if let Some(raw) = lookup(UPCOMING_DAYS_VAR) {
            match raw.trim().parse::<u32>() {
                Ok(days) => config.upcoming_days = days,
                Err(_) => tracing::warn!(
                    value = %raw,
                    default = DEFAULT_UPCOMING_DAYS,
                    "invalid {UPCOMING_DAYS_VAR}, using default"
                ),
            }
        }

        config
    }
}
