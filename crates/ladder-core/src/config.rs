//! Runtime configuration: `ladder.yaml` plus environment overrides.
//!
//! Every field is defaulted so a missing file still runs against the local
//! file store. Secrets (login password, store token) are normally supplied
//! through the environment, not committed in the file.

use crate::error::{LadderError, Result};
use crate::file_store::FileSheetStore;
use crate::http_store::HttpSheetStore;
use crate::store::SheetStore;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const PASSWORD_ENV: &str = "LADDER_PASSWORD";
pub const STORE_URL_ENV: &str = "LADDER_STORE_URL";
pub const STORE_TOKEN_ENV: &str = "LADDER_STORE_TOKEN";

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_password")]
    pub password: String,
    #[serde(default = "default_users")]
    pub users: Vec<String>,
    #[serde(default = "default_worksheet")]
    pub worksheet: String,
    #[serde(default)]
    pub store: StoreConfig,
}

fn default_password() -> String {
    "hospital1234".to_string()
}

fn default_users() -> Vec<String> {
    vec!["新人A".to_string(), "新人B".to_string(), "新人C".to_string()]
}

fn default_worksheet() -> String {
    "data".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            password: default_password(),
            users: default_users(),
            worksheet: default_worksheet(),
            store: StoreConfig::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// StoreConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StoreConfig {
    /// Local YAML files under `path` — dev and small single-host deployments.
    File {
        #[serde(default = "default_data_dir")]
        path: PathBuf,
    },
    /// Remote sheet bridge over HTTP.
    Http {
        base_url: String,
        #[serde(default)]
        token: Option<String>,
    },
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("ladder-data")
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::File {
            path: default_data_dir(),
        }
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

impl Config {
    /// Load from `path` (defaults apply when the file is missing), then apply
    /// environment overrides.
    pub fn load(path: &Path) -> Result<Config> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            serde_yaml::from_str(&content)?
        } else {
            Config::default()
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply overrides from an environment lookup. Empty values are ignored.
    fn apply_env(&mut self, get: impl Fn(&str) -> Option<String>) {
        let nonempty = |v: Option<String>| v.filter(|s| !s.is_empty());

        if let Some(password) = nonempty(get(PASSWORD_ENV)) {
            self.password = password;
        }
        if let Some(base_url) = nonempty(get(STORE_URL_ENV)) {
            let token = match &self.store {
                StoreConfig::Http { token, .. } => token.clone(),
                StoreConfig::File { .. } => None,
            };
            self.store = StoreConfig::Http { base_url, token };
        }
        if let Some(new_token) = nonempty(get(STORE_TOKEN_ENV)) {
            if let StoreConfig::Http { token, .. } = &mut self.store {
                *token = Some(new_token);
            }
        }
    }

    /// Open the configured store backend.
    pub fn open_store(&self) -> Result<Box<dyn SheetStore>> {
        match &self.store {
            StoreConfig::File { path } => Ok(Box::new(FileSheetStore::new(path.clone()))),
            StoreConfig::Http { base_url, token } => Ok(Box::new(HttpSheetStore::new(
                base_url.clone(),
                token.clone(),
            )?)),
        }
    }

    /// Single login gate: plain equality against the configured password.
    pub fn check_password(&self, given: &str) -> Result<()> {
        if given == self.password {
            Ok(())
        } else {
            Err(LadderError::AuthFailed)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
