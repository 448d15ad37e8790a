//! HTTP client for the places web service.
//!
//! Wraps `reqwest` with API key and language handling. Each call issues
//! exactly one GET request; retries are left to the caller.

use std::time::Duration;

use placesearch_core::AppConfig;
use reqwest::{Client, Url};

use crate::error::{OperationOutcome, TransportError};
use crate::icon::fetch_icon;
use crate::parse::{parse_detail, parse_predictions};
use crate::query::{DetailQuery, PredictionQuery};
use crate::types::{PlaceDetail, PredictionRecord};

const AUTOCOMPLETE_PATH: &str = "autocomplete/json";
const DETAILS_PATH: &str = "details/json";

/// Client for the autocomplete and details endpoints.
///
/// Use [`PlacesClient::from_config`] in production or
/// [`PlacesClient::with_base_url`] to point at a mock server in tests.
#[derive(Clone)]
pub struct PlacesClient {
    client: Client,
    api_key: String,
    language: String,
    base_url: Url,
}

impl std::fmt::Debug for PlacesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacesClient")
            .field("api_key", &"[redacted]")
            .field("language", &self.language)
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl PlacesClient {
    /// Creates a client from the loaded application config.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`TransportError::InvalidUrl`] if the
    /// configured base URL does not parse.
    pub fn from_config(config: &AppConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;
        Self::build(client, &config.api_key, &config.language, &config.base_url)
    }

    /// Creates a client with default timeouts and a custom base URL (for
    /// testing with wiremock).
    ///
    /// # Errors
    ///
    /// Same as [`PlacesClient::from_config`].
    pub fn with_base_url(
        api_key: &str,
        language: &str,
        base_url: &str,
    ) -> Result<Self, TransportError> {
        let mut config = AppConfig::with_api_key(api_key);
        config.language = language.to_string();
        config.base_url = base_url.to_string();
        Self::from_config(&config)
    }

    fn build(
        client: Client,
        api_key: &str,
        language: &str,
        base_url: &str,
    ) -> Result<Self, TransportError> {
        // Exactly one trailing slash, so endpoint paths join below the base
        // instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| TransportError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            language: language.to_owned(),
            base_url,
        })
    }

    /// Runs the prediction pipeline: request, status check, decode.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Transport`](crate::PlacesError::Transport) on network
    ///   failure or non-2xx HTTP status.
    /// - [`PlacesError::RemoteStatus`](crate::PlacesError::RemoteStatus) if the
    ///   service status is not `OK`.
    /// - [`PlacesError::MalformedResponse`](crate::PlacesError::MalformedResponse)
    ///   if the body does not have the expected shape.
    pub async fn predictions(
        &self,
        query: &PredictionQuery,
    ) -> OperationOutcome<Vec<PredictionRecord>> {
        let url = self.autocomplete_url(query)?;
        let body = self.execute(&url).await?;
        let records = parse_predictions(&body)?;
        tracing::debug!(count = records.len(), "decoded predictions");
        Ok(records)
    }

    /// Runs the detail pipeline: request, status check, decode, then the
    /// icon download when the record names one.
    ///
    /// A failed icon download fails the whole lookup.
    ///
    /// # Errors
    ///
    /// Same as [`PlacesClient::predictions`]; icon download and decode
    /// failures are reported as `Transport`.
    pub async fn place_detail(&self, query: &DetailQuery) -> OperationOutcome<PlaceDetail> {
        let url = self.details_url(query)?;
        let body = self.execute(&url).await?;
        let parsed = parse_detail(&body)?;

        let icon = match parsed.icon_url.as_deref() {
            Some(icon_url) => Some(fetch_icon(&self.client, icon_url).await?),
            None => None,
        };
        Ok(parsed.resolve(icon))
    }

    /// Builds the autocomplete URL. `types` and `components` are only sent
    /// when the corresponding filter is set.
    pub(crate) fn autocomplete_url(&self, query: &PredictionQuery) -> Result<Url, TransportError> {
        let mut params = vec![("input", query.input())];
        if let Some(place_type) = query.place_type() {
            params.push(("types", place_type));
        }
        if let Some(region) = query.region() {
            params.push(("components", region));
        }
        self.build_url(AUTOCOMPLETE_PATH, &params)
    }

    pub(crate) fn details_url(&self, query: &DetailQuery) -> Result<Url, TransportError> {
        self.build_url(DETAILS_PATH, &[("placeid", query.place_id())])
    }

    /// Joins `path` onto the base URL and appends `extra`, `language` and
    /// `key` as percent-encoded query parameters.
    fn build_url(&self, path: &str, extra: &[(&str, &str)]) -> Result<Url, TransportError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| TransportError::InvalidUrl {
                url: format!("{}{path}", self.base_url),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("language", &self.language);
            pairs.append_pair("key", &self.api_key);
        }
        tracing::debug!(
            endpoint = path,
            params = ?extra.iter().map(|(k, _)| *k).collect::<Vec<_>>(),
            "places request"
        );
        Ok(url)
    }

    /// Sends one GET request, asserts a 2xx HTTP status, and returns the
    /// raw body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Http`] on network failure or a non-2xx status.
    async fn execute(&self, url: &Url) -> Result<String, TransportError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        Ok(response.text().await?)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
