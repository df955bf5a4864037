use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown environment code: {0}")]
    UnknownEnvironment(u8),
}

/// Deployment environment, stored as a numeric code in the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Uat,
    Prod,
}

impl Environment {
    pub fn from_code(code: u8) -> Result<Self, ConfigError> {
        match code {
            1 => Ok(Environment::Uat),
            9 => Ok(Environment::Prod),
            other => Err(ConfigError::UnknownEnvironment(other)),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Environment::Uat => 1,
            Environment::Prod => 9,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Environment::Uat => "UAT",
            Environment::Prod => "PROD",
        })
    }
}

/// Well-known directories from the settings file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Paths {
    pub source_code: PathBuf,
    pub data: PathBuf,
    pub log: PathBuf,
    pub test: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
struct RawConfig {
    app_name: String,
    version: String,
    env: u8,
    paths: Paths,
}

/// Application settings, loaded once at startup and passed to whatever
/// needs them.
#[derive(Debug, Clone)]
pub struct Config {
    pub app_name: String,
    pub version: String,
    pub env: Environment,
    pub paths: Paths,
}

impl Config {
    /// Load settings from a JSON file. Any failure here is fatal to startup;
    /// the caller reports it and exits.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    fn parse(text: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(text)?;
        Ok(Self {
            app_name: raw.app_name,
            version: raw.version,
            env: Environment::from_code(raw.env)?,
            paths: raw.paths,
        })
    }
}
