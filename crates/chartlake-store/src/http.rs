//! HTTP object-store sink.
//!
//! Writes each snapshot with a single `PUT {endpoint}/{bucket}/{key}`. The
//! client carries a connect timeout but no total request timeout — the
//! write is bounded only by the store's own behaviour.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::StoreError;
use crate::sink::ObjectSink;

/// Sink for any object store that accepts plain `PUT` uploads, with an
/// optional bearer token. Point `endpoint` at a mock server in tests.
pub struct HttpObjectSink {
    client: Client,
    endpoint: Url,
    token: Option<String>,
}

impl HttpObjectSink {
    /// Creates a sink for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`StoreError::InvalidEndpoint`] if
    /// `endpoint` is not a valid URL.
    pub fn new(endpoint: &str, token: Option<&str>) -> Result<Self, StoreError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        // Normalise: ensure the endpoint ends with exactly one slash so that
        // join() appends the object path instead of replacing the last segment.
        let normalised = format!("{}/", endpoint.trim_end_matches('/'));
        let endpoint = Url::parse(&normalised).map_err(|e| StoreError::InvalidEndpoint {
            endpoint: normalised.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            endpoint,
            token: token.map(str::to_owned),
        })
    }

    fn object_url(&self, bucket: &str, key: &str) -> Result<Url, StoreError> {
        self.endpoint
            .join(&format!("{bucket}/{key}"))
            .map_err(|e| StoreError::InvalidEndpoint {
                endpoint: self.endpoint.to_string(),
                reason: e.to_string(),
            })
    }
}

impl ObjectSink for HttpObjectSink {
    async fn put_object(&self, bucket: &str, key: &str, body: &[u8]) -> Result<(), StoreError> {
        let url = self.object_url(bucket, key)?;

        let mut request = self
            .client
            .put(url.clone())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body.to_vec());

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        tracing::debug!(bucket, key, bytes = body.len(), "object stored");
        Ok(())
    }
}
