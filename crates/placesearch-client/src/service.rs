//! Caller-facing entry points: one background query per call.

use std::sync::Arc;

use placesearch_core::AppConfig;

use crate::client::PlacesClient;
use crate::delivery::{spawn_query, QueryTask, TaskState};
use crate::error::{OperationOutcome, TransportError};
use crate::query::{DetailQuery, PredictionQuery};
use crate::types::{PlaceDetail, PredictionRecord};

/// Shares one [`PlacesClient`] across any number of background queries.
#[derive(Debug, Clone)]
pub struct PlacesService {
    client: Arc<PlacesClient>,
}

impl PlacesService {
    #[must_use]
    pub fn new(client: PlacesClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// # Errors
    ///
    /// Returns [`TransportError`] if the HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, TransportError> {
        Ok(Self::new(PlacesClient::from_config(config)?))
    }

    /// Starts an autocomplete query in the background.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    #[must_use]
    pub fn spawn_predictions(&self, query: PredictionQuery) -> QueryTask<Vec<PredictionRecord>> {
        let client = Arc::clone(&self.client);
        spawn_query("predictions", async move { client.predictions(&query).await })
    }

    /// Starts a detail lookup, including its icon download, in the background.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    #[must_use]
    pub fn spawn_detail(&self, query: DetailQuery) -> QueryTask<PlaceDetail> {
        let client = Arc::clone(&self.client);
        spawn_query("detail", async move { client.place_detail(&query).await })
    }

    /// Searches for predictions and reports through the two callbacks.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub async fn search_predictions<B, C>(
        &self,
        query: PredictionQuery,
        on_begin: B,
        on_complete: C,
    ) -> TaskState
    where
        B: FnOnce(),
        C: FnOnce(OperationOutcome<Vec<PredictionRecord>>),
    {
        self.spawn_predictions(query)
            .deliver(on_begin, on_complete)
            .await
    }

    /// Fetches one place's details and reports through the two callbacks.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub async fn fetch_detail<B, C>(
        &self,
        query: DetailQuery,
        on_begin: B,
        on_complete: C,
    ) -> TaskState
    where
        B: FnOnce(),
        C: FnOnce(OperationOutcome<PlaceDetail>),
    {
        self.spawn_detail(query).deliver(on_begin, on_complete).await
    }
}
