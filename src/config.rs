use std::env;
use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;
use tracing::{info, warn};

use crate::documents::WORK_TEXT_FIELDS;

const DEFAULT_GENRES: &str = "poetry,fiction,non-fiction,drama,fantasy";
const DEFAULT_SEARCH_KEYS: &str = "author,title,genre,writing";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key} value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub genres: Vec<String>,
    pub search_keys: Vec<String>,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let search_keys = list(&lookup, "QUILL_SEARCH_KEYS", DEFAULT_SEARCH_KEYS);
        if let Some(bad) = search_keys
            .iter()
            .find(|k| !WORK_TEXT_FIELDS.contains(&k.as_str()))
        {
            return Err(ConfigError::Invalid {
                key: "QUILL_SEARCH_KEYS",
                value: bad.clone(),
                reason: format!("searchable fields are {}", WORK_TEXT_FIELDS.join(", ")),
            });
        }

        Ok(Self {
            host: try_load(&lookup, "QUILL_HOST", "0.0.0.0")?,
            port: try_load(&lookup, "QUILL_PORT", "3000")?,
            genres: list(&lookup, "QUILL_GENRES", DEFAULT_GENRES),
            search_keys,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn var(lookup: &impl Fn(&str) -> Option<String>, key: &'static str, default: &str) -> String {
    lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = var(lookup, key, default);
    value.trim().parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::Invalid {
            key,
            value: value.clone(),
            reason: e.to_string(),
        }
    })
}

fn list(lookup: &impl Fn(&str) -> Option<String>, key: &'static str, default: &str) -> Vec<String> {
    var(lookup, key, default)
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
