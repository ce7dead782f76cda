//! SVG Repo HTTP client.

use std::time::Duration;

use reqwest::Client;

use crate::api::types::FetchedResponse;
use crate::config::HttpConfig;
use crate::error::{Error, Result};

/// Thin wrapper over a reqwest client. Every call is a single GET, never retried.
#[derive(Debug, Clone)]
pub struct SvgRepoClient {
    client: Client,
}

impl SvgRepoClient {
    /// Build a client from the HTTP configuration.
    pub fn new(http: &HttpConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(&http.user_agent);
        if let Some(secs) = http.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder.build()?;

        Ok(Self { client })
    }

    /// GET a URL and buffer the whole response.
    ///
    /// Transport failures and non-success statuses both become [`Error::Fetch`].
    pub async fn fetch(&self, url: &str) -> Result<FetchedResponse> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(|e| Error::Fetch {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(Error::Fetch {
                url: url.to_string(),
                message: format!("HTTP {}", status),
            });
        }

        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(|e| Error::Fetch {
            url: url.to_string(),
            message: format!("Failed to read body: {}", e),
        })?;

        Ok(FetchedResponse {
            url: url.to_string(),
            headers,
            body: body.to_vec(),
        })
    }

    /// GET an HTML page and return its body as text.
    pub async fn fetch_page(&self, url: &str) -> Result<String> {
        let response = self.fetch(url).await?;
        tracing::debug!("Page response length: {} bytes", response.body.len());
        Ok(response.text())
    }
}
