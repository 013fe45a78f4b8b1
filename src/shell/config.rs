// Fixture configuration read from the environment.
//
// Variables
// - FIXTURE_HOST: bind address and fallback server name (default 127.0.0.1)
// - FIXTURE_PORT: listening port, also used in absolute links (default 8080)
// - FIXTURE_SEED_PAGES: number of pages the simple site starts with (default 0)

use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const MAX_SEED_PAGES: u64 = 10_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got {value:?}")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureConfig {
    pub host: String,
    pub port: u16,
    pub seed_pages: u64,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed_pages: 0,
        }
    }
}

impl FixtureConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let host = lookup("FIXTURE_HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or(defaults.host);
        let port = match lookup("FIXTURE_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: "FIXTURE_PORT",
                expected: "a port number",
                value: raw,
            })?,
            None => defaults.port,
        };
        let seed_pages = match lookup("FIXTURE_SEED_PAGES") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|count| *count <= MAX_SEED_PAGES)
                .ok_or(ConfigError::Invalid {
                    key: "FIXTURE_SEED_PAGES",
                    expected: "an integer between 0 and 10000",
                    value: raw,
                })?,
            None => defaults.seed_pages,
        };
        Ok(Self {
            host,
            port,
            seed_pages,
        })
    }
}
