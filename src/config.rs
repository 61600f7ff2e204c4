use std::path::PathBuf;

use crate::store::DEFAULT_SAVE_FILE;

pub const DEFAULT_PORT: u16 = 8080;

/// Settings read once from the environment at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `BUGHOUSE_SAVE_PATH`
    pub save_path: PathBuf,
    /// `BUGHOUSE_PORT`
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let save_path = lookup("BUGHOUSE_SAVE_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SAVE_FILE));
        let port = lookup("BUGHOUSE_PORT")
            .and_then(|p| p.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Self { save_path, port }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from(DEFAULT_SAVE_FILE),
            port: DEFAULT_PORT,
        }
    }
}
