//! Record sources and the HTTP fetcher.
//!
//! [`RecordSource`] is the seam between fetching and validation; the
//! production implementation is [`HttpFetcher`], which issues one GET and
//! decodes the body as a JSON array of objects. Any failure here is a
//! transport error: nothing is retried and no partial list is returned.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::FetchConfig;
use crate::constants::{CONNECT_TIMEOUT_SECS, USER_AGENT};
use crate::models::RawRecord;

/// Errors from fetching the record list.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("request to {url} timed out after {secs}s")]
    Timeout { url: String, secs: u64 },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },
}

/// Anything that can produce the list of raw records for one run.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Human-readable origin of the records (URL, fixture name, ...).
    fn origin(&self) -> &str;

    /// Fetch the full record list, in source order.
    async fn fetch_all(&self) -> Result<Vec<RawRecord>, FetchError>;
}

/// Fetches records with a single HTTP GET.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    endpoint: String,
    timeout_secs: u64,
}

impl HttpFetcher {
    /// Build a fetcher for the configured endpoint and timeout.
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(
                CONNECT_TIMEOUT_SECS.min(config.timeout_secs),
            ))
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            timeout_secs: config.timeout_secs,
        })
    }

    fn request_error(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout {
                url: self.endpoint.clone(),
                secs: self.timeout_secs,
            }
        } else {
            FetchError::Request {
                url: self.endpoint.clone(),
                message: err.to_string(),
            }
        }
    }
}

#[async_trait]
impl RecordSource for HttpFetcher {
    fn origin(&self) -> &str {
        &self.endpoint
    }

    async fn fetch_all(&self) -> Result<Vec<RawRecord>, FetchError> {
        debug!(url = %self.endpoint, timeout_secs = self.timeout_secs, "fetching records");

        let resp = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let body = resp.bytes().await.map_err(|e| self.request_error(e))?;
        let records = decode_records(&body).map_err(|message| FetchError::Decode {
            url: self.endpoint.clone(),
            message,
        })?;

        info!(url = %self.endpoint, status = status.as_u16(), count = records.len(), "fetched records");
        Ok(records)
    }
}

/// Decode a response body as a JSON array of objects.
pub fn decode_records(body: &[u8]) -> Result<Vec<RawRecord>, String> {
    serde_json::from_slice(body).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_array_of_objects() {
        let records =
            decode_records(br#"[{"id": 1, "name": "A"}, {"id": 2, "extra": [1, 2]}]"#).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["id"], 2);
    }

    #[test]
    fn decode_empty_array() {
        assert!(decode_records(b"[]").unwrap().is_empty());
    }

    #[test]
    fn decode_rejects_non_array() {
        assert!(decode_records(br#"{"users": []}"#).is_err());
    }

    #[test]
    fn decode_rejects_non_object_elements() {
        assert!(decode_records(b"[1, 2, 3]").is_err());
    }

    #[test]
    fn decode_rejects_html() {
        let err = decode_records(b"<html>Service Unavailable</html>").unwrap_err();
        assert!(!err.is_empty());
    }

    #[test]
    fn fetcher_reports_configured_origin() {
        let config = FetchConfig {
            endpoint: "http://127.0.0.1:9/users".to_string(),
            timeout_secs: 3,
        };
        let fetcher = HttpFetcher::new(&config).unwrap();
        assert_eq!(fetcher.origin(), "http://127.0.0.1:9/users");
    }

    #[test]
    fn error_messages_include_url() {
        let err = FetchError::Status {
            url: "https://example.test/users".into(),
            status: 500,
        };
        assert_eq!(err.to_string(), "https://example.test/users returned HTTP 500");
    }
}
