use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{NewsError, NewsResult};

/// Flat key/value secrets read from a TOML file such as:
///
/// ```toml
/// NEWS_API_KEY = "..."
/// OPENROUTER_API_KEY = "..."
/// ```
///
/// Values found here win over environment variables.
#[derive(Debug, Clone, Default)]
pub struct Secrets {
    values: HashMap<String, String>,
}

impl Secrets {
    /// Loads secrets from `path`. A missing file yields an empty store.
    pub fn load(path: impl AsRef<Path>) -> NewsResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No secrets file at {}, using environment only", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let secrets = Self::parse(&contents)
            .map_err(|e| NewsError::Secrets(format!("{}: {}", path.display(), e)))?;
        info!("Loaded {} secrets from {}", secrets.values.len(), path.display());
        Ok(secrets)
    }

    pub fn parse(contents: &str) -> NewsResult<Self> {
        let table: toml::Table = contents
            .parse()
            .map_err(|e: toml::de::Error| NewsError::Secrets(e.to_string()))?;

        // Non-string entries are ignored; keys are plain strings.
        let values = table
            .into_iter()
            .filter_map(|(key, value)| match value {
                toml::Value::String(s) => Some((key, s)),
                _ => None,
            })
            .collect();

        Ok(Self { values })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}
