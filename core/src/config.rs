// SPDX-License-Identifier: GPL-3.0-only

use std::env;
use std::time::Duration;

use dotenvy::dotenv;

use crate::error::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://picsum.photos";

const BASE_URL_KEY: &str = "PICSUM_BASE_URL";
const PAGE_LIMIT_KEY: &str = "PICSUM_PAGE_LIMIT";
const TIMEOUT_KEY: &str = "PICSUM_TIMEOUT_SECS";
const INITIAL_PAGE_KEY: &str = "PHOTOPAGER_INITIAL_PAGE";
const SHOW_CONTROLS_KEY: &str = "PHOTOPAGER_SHOW_CONTROLS";

/// Runtime settings of the photo pager
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the photo listing API
    pub base_url: String,
    /// Photos requested per page
    pub page_limit: u32,
    /// Timeout of a single HTTP request
    pub timeout: Duration,
    /// First page requested when the screen opens
    pub initial_page: u32,
    /// Whether the Previous/Next control is shown
    pub show_controls: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            page_limit: 2,
            timeout: Duration::from_secs(30),
            initial_page: 1,
            show_controls: true,
        }
    }
}

impl Config {
    /// Reads the settings from the environment, loading the `.env` file first
    /// if there is one
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenv() {
            tracing::debug!("loaded environment from {}", path.display());
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the settings from any key/value source, falling back to the
    /// defaults for missing keys
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let base_url = match lookup(BASE_URL_KEY) {
            Some(url) if url.trim().is_empty() => {
                return Err(Error::Config {
                    message: format!("{BASE_URL_KEY} is set but empty"),
                });
            }
            Some(url) => url.trim().to_string(),
            None => defaults.base_url,
        };

        Ok(Self {
            base_url,
            page_limit: positive(&lookup, PAGE_LIMIT_KEY)?.unwrap_or(defaults.page_limit),
            timeout: positive(&lookup, TIMEOUT_KEY)?
                .map(|secs| Duration::from_secs(secs.into()))
                .unwrap_or(defaults.timeout),
            initial_page: positive(&lookup, INITIAL_PAGE_KEY)?.unwrap_or(defaults.initial_page),
            show_controls: flag(&lookup, SHOW_CONTROLS_KEY)?.unwrap_or(defaults.show_controls),
        })
    }
}

fn positive(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<u32>> {
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };

    match raw.trim().parse::<u32>() {
        Ok(0) => Err(Error::InvalidConfigValue {
            key: key.to_string(),
            message: String::from("must be at least 1"),
        }),
        Ok(value) => Ok(Some(value)),
        Err(err) => Err(Error::InvalidConfigValue {
            key: key.to_string(),
            message: format!("'{raw}' is not a number: {err}"),
        }),
    }
}

fn flag(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<bool>> {
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => Err(Error::InvalidConfigValue {
            key: key.to_string(),
            message: format!("'{raw}' is not a boolean"),
        }),
    }
}
