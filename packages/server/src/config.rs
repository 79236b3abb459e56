use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env::{self, VarError};

use crate::helpers::LinkBuilder;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Sub-path the front-end is mounted under, e.g. `/git`. Empty for root.
    pub prefix: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key))
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// A missing or non-Unicode `URL_PREFIX` falls back to an empty prefix.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let prefix = match lookup("URL_PREFIX") {
            Ok(prefix) => prefix,
            Err(VarError::NotPresent) => String::new(),
            Err(VarError::NotUnicode(raw)) => {
                tracing::warn!(value = ?raw, "URL_PREFIX is not valid unicode, using empty prefix");
                String::new()
            }
        };

        Ok(Self {
            port: lookup("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            prefix,
        })
    }

    pub fn link_builder(&self) -> LinkBuilder {
        LinkBuilder::new(self.prefix.clone())
    }
}
