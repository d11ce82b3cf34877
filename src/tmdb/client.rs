//! Upstream HTTP client for the metadata API.

use serde_json::{Map, Value};
use thiserror::Error;
use url::Url;

use crate::config::schema::UpstreamConfig;

/// Errors that can occur while talking to the metadata API.
#[derive(Debug, Error)]
pub enum TmdbError {
    /// The configured base URL does not parse.
    #[error("Invalid upstream base URL: {0}")]
    InvalidBaseUrl(String),

    /// The outbound request never produced an HTTP response.
    #[error("Upstream request failed: {0}")]
    Transport(String),

    /// Upstream answered with a non-success status.
    #[error("Upstream returned status {status}")]
    Status { status: u16, message: String },

    /// Upstream answered 2xx but the body was not JSON.
    #[error("Invalid JSON from upstream: {0}")]
    Decode(String),
}

/// Client for the upstream metadata API.
///
/// Holds the one credential this service shields. The key travels only in
/// outbound query strings; nothing here logs or returns a full URL.
#[derive(Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    base: Url,
    api_key: String,
    default_language: String,
}

impl TmdbClient {
    /// Create a new client from upstream configuration.
    pub fn new(config: &UpstreamConfig) -> Result<Self, TmdbError> {
        let base: Url = config
            .base_url
            .parse()
            .map_err(|e| TmdbError::InvalidBaseUrl(format!("{}: {}", config.base_url, e)))?;

        Ok(Self {
            http: reqwest::Client::new(),
            base,
            api_key: config.api_key.clone(),
            default_language: config.default_language.clone(),
        })
    }

    /// Forward a caller-described query upstream and return the JSON body.
    ///
    /// The endpoint is appended to the base path verbatim; this service
    /// does not restrict which upstream resources are reachable, it only
    /// keeps the credential out of the client.
    pub async fn fetch(
        &self,
        endpoint: &str,
        params: Option<&Map<String, Value>>,
    ) -> Result<Value, TmdbError> {
        let url = self.request_url(endpoint, params);

        tracing::debug!(endpoint = %endpoint, "Forwarding metadata request");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| TmdbError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(
                endpoint = %endpoint,
                status = status.as_u16(),
                "Upstream returned an error"
            );
            return Err(TmdbError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| TmdbError::Decode(e.without_url().to_string()))
    }

    /// Build the outbound URL: `<base>/<endpoint>?<query>`.
    ///
    /// The query always carries the API key. Every parameter whose value is
    /// not null is forwarded as `key=String(value)`; when the caller sends
    /// no `language`, the configured default locale is appended so upstream
    /// always receives an explicit one.
    fn request_url(&self, endpoint: &str, params: Option<&Map<String, Value>>) -> Url {
        let mut url = self.base.clone();

        let path = format!(
            "{}/{}",
            url.path().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        );
        url.set_path(&path);

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("api_key", &self.api_key);

            let mut language_supplied = false;
            if let Some(params) = params {
                for (key, value) in params {
                    let text = match value {
                        Value::Null => continue,
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    if key == "language" {
                        language_supplied = true;
                    }
                    query.append_pair(key, &text);
                }
            }

            if !language_supplied {
                query.append_pair("language", &self.default_language);
            }
        }

        url
    }
}
