//! Credentials and settings loaded from a local JSON file.
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::coc_api::BASE_URL;
use crate::error::{CwlError, Result};
use crate::tag::Tag;

pub const DEFAULT_CONFIG_PATH: &str = "api_token.json";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Runtime configuration.
///
/// File layout:
///
/// ```json
/// { "token": "eyJ0eXAiOiJKV1Qi...", "clan_tag": "#2PP0JLY8", "timeout_secs": 10 }
/// ```
///
/// `timeout_secs` and `base_url` are optional. `clan_tag` may be left out
/// when the tag is given on the command line.
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub token: String,
    #[serde(default)]
    pub clan_tag: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_base_url() -> String {
    BASE_URL.to_string()
}

impl Config {
    /// Read the config file, then apply environment overrides.
    ///
    /// Environment variables:
    /// - `COC_API_TOKEN` - replaces `token`
    /// - `COC_CLAN_TAG` - replaces `clan_tag`
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| config_error(path, e))?;
        let mut config = Self::from_json(path, &text)?;
        config.apply_overrides(read_env);
        config.validate(path)?;
        Ok(config)
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(token) = lookup("COC_API_TOKEN") {
            self.token = token;
        }
        if let Some(clan_tag) = lookup("COC_CLAN_TAG") {
            self.clan_tag = clan_tag;
        }
    }

    /// The clan to report on: `cli_tag` if given, else the configured tag.
    pub fn target_clan(&self, cli_tag: Option<&str>, path: &Path) -> Result<Tag> {
        let raw = match cli_tag {
            Some(tag) => tag,
            None if self.clan_tag.trim().is_empty() => {
                return Err(config_error(path, "clan_tag is missing"));
            }
            None => self.clan_tag.trim(),
        };
        Tag::clan(raw)
    }

    fn from_json(path: &Path, text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| config_error(path, e))
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if self.token.trim().is_empty() {
            return Err(config_error(path, "token is empty"));
        }
        if self.timeout_secs == 0 {
            return Err(config_error(path, "timeout_secs must be positive"));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn read_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn config_error(path: &Path, reason: impl ToString) -> CwlError {
    CwlError::Config {
        path: PathBuf::from(path),
        reason: reason.to_string(),
    }
}
