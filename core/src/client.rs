// SPDX-License-Identifier: GPL-3.0-only

use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::Config;
use crate::error::{Error, Result};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the photo listing API
#[derive(Debug, Clone)]
pub struct PicsumClient {
    http: Client,
    base_url: Url,
    page_limit: u32,
}

impl PicsumClient {
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config {
                message: format!("'{base_url}' cannot be used as a base URL"),
            });
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            base_url,
            page_limit: config.page_limit,
        })
    }

    pub fn page_limit(&self) -> u32 {
        self.page_limit
    }

    /// URL of the listing for `page`: `<base>/v2/list?page=<page>&limit=<limit>`
    pub fn list_url(&self, page: u32) -> Url {
        let mut url = self.base_url.clone();

        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["v2", "list"]);
        }
        url.query_pairs_mut()
            .clear()
            .append_pair("page", &page.to_string())
            .append_pair("limit", &self.page_limit.to_string());

        url
    }

    /// GETs `url` and decodes the JSON body.
    ///
    /// Non-success statuses become [`Error::HttpStatus`] carrying the body text.
    pub async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!(%url, "GET");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "request failed");
            return Err(status_error(status.as_u16(), response.text().await));
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Builds the error for a non-success response out of whatever body could be read
fn status_error<E: std::fmt::Display>(status: u16, body: std::result::Result<String, E>) -> Error {
    let body = body.unwrap_or_else(|err| {
        tracing::debug!(status, "could not read error body: {err}");
        String::from("<unreadable body>")
    });

    Error::HttpStatus { status, body }
}
