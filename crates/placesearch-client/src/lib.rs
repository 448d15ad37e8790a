//! Asynchronous client for a places search web service.
//!
//! Two pipelines share one shape: build a GET request, check the service
//! status, decode the payload, and hand the outcome back from a background
//! task. Autocomplete yields [`PredictionRecord`]s; a detail lookup yields a
//! [`PlaceDetail`] with its icon already downloaded.

pub mod client;
pub mod delivery;
pub mod display;
pub mod error;
pub mod icon;
pub mod parse;
pub mod query;
pub mod service;
pub mod status;
pub mod translate;
pub mod types;

pub use client::PlacesClient;
pub use delivery::{QueryTask, TaskState};
pub use error::{ErrorKind, OperationOutcome, PlacesError, TransportError};
pub use query::{DetailQuery, PredictionQuery, QueryError};
pub use service::PlacesService;
pub use status::ServiceStatus;
pub use types::{PlaceDetail, PlaceIcon, PredictionRecord};
