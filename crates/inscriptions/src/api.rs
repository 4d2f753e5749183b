//! REST client for the remote inscriptions index.
//!
//! Wraps `GET /inscriptions?address&limit&offset` (paginated, retried with
//! exponential backoff, cached per address) and
//! `GET /inscriptions/{id}/content` (single attempt, uncached) using
//! [`reqwest`].

use std::time::Duration;

use reqwest::Url;

use ordinal_frame_core::inscription::Inscription;

use crate::cache::DiskCache;
use crate::config::ApiClientConfig;
use crate::records::{self, InscriptionPage};
use crate::retry::RetryPolicy;

/// Records requested per page.
pub const PAGE_SIZE: u64 = 60;

/// Pagination stops once the offset passes this value.
pub const MAX_OFFSET: u64 = 1000;

/// How long a fetched inscription list stays cached.
pub const CACHE_TTL: Duration = Duration::from_secs(3600);

/// Content type forwarded when upstream sends none.
const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Errors from the inscriptions API layer.
#[derive(Debug, thiserror::Error)]
pub enum InscriptionApiError {
    /// Every attempt timed out.
    #[error("API request timed out after {attempts} attempts")]
    Timeout { attempts: u32 },

    /// The HTTP request itself failed (network, DNS, TLS, body decode).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream returned a non-2xx status code.
    #[error("Inscriptions API returned HTTP {0}")]
    HttpStatus(u16),

    /// The configured base URL cannot have path segments appended.
    #[error("Invalid inscriptions API base URL: {0}")]
    InvalidBaseUrl(String),
}

impl InscriptionApiError {
    fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
            || matches!(self, Self::Request(e) if e.is_timeout())
    }
}

/// Binary inscription content fetched for the browser.
#[derive(Debug)]
pub struct InscriptionContent {
    pub status: u16,
    pub content_type: String,
    pub body: Vec<u8>,
}

/// HTTP client for the inscriptions index.
pub struct InscriptionApi {
    client: reqwest::Client,
    base_url: Url,
    retry: RetryPolicy,
    cache: DiskCache,
}

impl InscriptionApi {
    /// Build a client with the configured per-request timeout.
    ///
    /// Fails when `config.base_url` does not parse as a URL that can carry a
    /// path (for example `mailto:` or `data:` URLs).
    pub fn new(config: &ApiClientConfig, cache: DiskCache) -> Result<Self, InscriptionApiError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| InscriptionApiError::InvalidBaseUrl(format!("{}: {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(InscriptionApiError::InvalidBaseUrl(config.base_url.clone()));
        }

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            client,
            base_url,
            retry: config.retry,
            cache,
        })
    }

    /// Cache key for an address's inscription list.
    pub fn cache_key(address: &str) -> String {
        format!("inscriptions_{address}")
    }

    /// Fetch every inscription owned by `address`.
    ///
    /// Consults the disk cache first; on a miss, walks the paginated endpoint,
    /// normalizes the records, and caches the result for [`CACHE_TTL`]. The
    /// list is NOT filtered by content type. Cache failures are logged and
    /// otherwise ignored.
    pub async fn fetch_address_inscriptions(
        &self,
        address: &str,
    ) -> Result<Vec<Inscription>, InscriptionApiError> {
        let key = Self::cache_key(address);

        match self.cache.get::<Vec<Inscription>>(&key).await {
            Ok(Some(cached)) => {
                tracing::info!(address, count = cached.len(), "Using cached inscriptions");
                return Ok(cached);
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(address, error = %e, "Inscription cache read failed, refetching");
            }
        }

        tracing::info!(address, "Fetching inscriptions");

        let raw = self.fetch_all_pages(address).await?;
        let inscriptions = records::normalize_records(raw, &self.base_url);

        if let Err(e) = self.cache.set(&key, &inscriptions, CACHE_TTL).await {
            tracing::error!(address, error = %e, "Failed to cache inscriptions");
        }

        tracing::info!(address, count = inscriptions.len(), "Fetched inscriptions");
        Ok(inscriptions)
    }

    /// Fetch the raw content of an inscription in a single attempt.
    pub async fn fetch_content(
        &self,
        inscription_id: &str,
    ) -> Result<InscriptionContent, InscriptionApiError> {
        let url = records::content_url(&self.base_url, inscription_id);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(InscriptionApiError::HttpStatus(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(FALLBACK_CONTENT_TYPE)
            .to_string();
        let body = response.bytes().await?.to_vec();

        Ok(InscriptionContent {
            status: status.as_u16(),
            content_type,
            body,
        })
    }

    // ---- private helpers ----

    /// Walk the paginated listing and concatenate every page.
    ///
    /// Stops on a missing or empty `results`, on a short page, or once the
    /// offset passes [`MAX_OFFSET`].
    async fn fetch_all_pages(
        &self,
        address: &str,
    ) -> Result<Vec<serde_json::Value>, InscriptionApiError> {
        let mut all = Vec::new();
        let mut offset = 0u64;

        loop {
            let page = self.request_page(address, offset).await?;
            let results = match page.results {
                Some(results) if !results.is_empty() => results,
                _ => break,
            };

            let page_len = results.len() as u64;
            all.extend(results);

            if page_len < PAGE_SIZE {
                break;
            }

            offset += PAGE_SIZE;
            if offset > MAX_OFFSET {
                tracing::warn!(
                    address,
                    offset,
                    upstream_total = page.total,
                    "Stopping pagination after {MAX_OFFSET} inscriptions"
                );
                break;
            }
        }

        Ok(all)
    }

    /// Request one page with retry and exponential backoff.
    async fn request_page(
        &self,
        address: &str,
        offset: u64,
    ) -> Result<InscriptionPage, InscriptionApiError> {
        let attempts = self.retry.attempts();
        let mut attempt = 0u32;

        loop {
            attempt += 1;
            tracing::info!(address, offset, attempt, "Requesting inscriptions page");

            let err = match self.try_request_page(address, offset).await {
                Ok(page) => return Ok(page),
                Err(e) => e,
            };

            let timed_out = err.is_timeout();
            if timed_out {
                tracing::warn!(address, offset, attempt, "Inscriptions request timed out");
            } else {
                tracing::error!(address, offset, attempt, error = %err, "Inscriptions request failed");
            }

            if attempt >= attempts {
                return Err(if timed_out {
                    InscriptionApiError::Timeout { attempts }
                } else {
                    err
                });
            }

            tokio::time::sleep(self.retry.delay_for(attempt - 1)).await;
        }
    }

    /// Execute a single page request and check the response status.
    async fn try_request_page(
        &self,
        address: &str,
        offset: u64,
    ) -> Result<InscriptionPage, InscriptionApiError> {
        let response = self
            .client
            .get(records::endpoint_url(&self.base_url, ["inscriptions"]))
            .query(&[
                ("address", address.to_string()),
                ("limit", PAGE_SIZE.to_string()),
                ("offset", offset.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(InscriptionApiError::HttpStatus(status.as_u16()));
        }

        Ok(response.json::<InscriptionPage>().await?)
    }
}
