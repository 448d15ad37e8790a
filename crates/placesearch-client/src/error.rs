use thiserror::Error;

use crate::status::ServiceStatus;

/// Failure of the transport layer: the request never produced a usable body.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network failure, timeout, TLS failure or a non-2xx HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The icon body was downloaded but is not a decodable image.
    #[error("could not decode image from {url}: {source}")]
    ImageDecode {
        url: String,
        #[source]
        source: image::ImageError,
    },

    /// The background task ended without handing back an outcome.
    #[error("background task aborted: {0}")]
    TaskAborted(String),
}

/// Classified failure of a single places query.
///
/// This is the error half of [`OperationOutcome`]; it carries enough for the
/// caller to pick a user-facing message without inspecting the cause chain.
#[derive(Debug, Error)]
pub enum PlacesError {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The body was not JSON or did not have the expected shape.
    #[error("malformed response for {context}: {source}")]
    MalformedResponse {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The service answered with a status other than `OK`.
    #[error("{status}: {message}")]
    RemoteStatus {
        status: ServiceStatus,
        message: String,
    },
}

/// Fieldless discriminant of [`PlacesError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    MalformedResponse,
    RemoteStatus,
}

impl ErrorKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Transport => "TransportError",
            ErrorKind::MalformedResponse => "MalformedResponse",
            ErrorKind::RemoteStatus => "RemoteStatus",
        }
    }
}

impl PlacesError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlacesError::Transport(_) => ErrorKind::Transport,
            PlacesError::MalformedResponse { .. } => ErrorKind::MalformedResponse,
            PlacesError::RemoteStatus { .. } => ErrorKind::RemoteStatus,
        }
    }

    pub(crate) fn remote(status: ServiceStatus) -> Self {
        let message = status.message().to_string();
        PlacesError::RemoteStatus { status, message }
    }
}

/// Result of one pipeline run: the decoded value or its classified failure.
pub type OperationOutcome<T> = Result<T, PlacesError>;
