//! HTTP client for the Billboard Hot 100 chart page.
//!
//! Wraps `reqwest` with a bounded request timeout and typed status handling.
//! The whole fetch is one GET; there are no retries here — a failed or
//! timed-out fetch aborts the invocation that asked for it.

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::{Client, Url};

use crate::error::ChartError;
use crate::parse::parse_chart_entries;
use crate::types::ChartEntry;

/// Client for the Billboard chart pages.
///
/// Holds the HTTP client and base URL. Point `base_url` at a mock server
/// in tests; the production base is configured by the caller.
pub struct BillboardClient {
    client: Client,
    base_url: Url,
}

impl BillboardClient {
    /// Creates a client with the configured timeout and `User-Agent`.
    ///
    /// `timeout_secs` bounds the whole request; the connect timeout is a
    /// fixed 10 seconds beneath it.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ChartError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ChartError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // join() appends the chart path instead of replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| ChartError::InvalidBaseUrl {
            base_url: normalised.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Fetches the ordered Hot 100 entries for `date`.
    ///
    /// # Errors
    ///
    /// - [`ChartError::NotFound`] — HTTP 404 for the chart date.
    /// - [`ChartError::UnexpectedStatus`] — any other non-2xx status.
    /// - [`ChartError::Http`] — network failure or timeout.
    /// - [`ChartError::Parse`] — the page yielded no chart rows.
    pub async fn fetch_chart(&self, date: NaiveDate) -> Result<Vec<ChartEntry>, ChartError> {
        let url = self.chart_url(date)?;

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ChartError::NotFound {
                url: url.to_string(),
            });
        }

        if !status.is_success() {
            return Err(ChartError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let html = response.text().await?;
        let entries = parse_chart_entries(&html);
        if entries.is_empty() {
            return Err(ChartError::Parse {
                url: url.to_string(),
                reason: "no chart rows found".to_string(),
            });
        }

        tracing::debug!(%date, count = entries.len(), "parsed chart rows");
        Ok(entries)
    }

    fn chart_url(&self, date: NaiveDate) -> Result<Url, ChartError> {
        let path = format!("hot-100/{}/", date.format("%Y-%m-%d"));
        self.base_url
            .join(&path)
            .map_err(|e| ChartError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }
}
