//! The service's status taxonomy.
//!
//! Both endpoints wrap their payload in `{"status": "...", ...}`. Anything
//! other than `OK` is terminal for the query and carries a fixed message.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceStatus {
    Ok,
    ZeroResults,
    OverQueryLimit,
    RequestDenied,
    InvalidRequest,
    /// A status string this client does not know.
    Other(String),
}

impl ServiceStatus {
    #[must_use]
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "OK" => ServiceStatus::Ok,
            "ZERO_RESULTS" => ServiceStatus::ZeroResults,
            "OVER_QUERY_LIMIT" => ServiceStatus::OverQueryLimit,
            "REQUEST_DENIED" => ServiceStatus::RequestDenied,
            "INVALID_REQUEST" => ServiceStatus::InvalidRequest,
            other => ServiceStatus::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            ServiceStatus::Ok => "OK",
            ServiceStatus::ZeroResults => "ZERO_RESULTS",
            ServiceStatus::OverQueryLimit => "OVER_QUERY_LIMIT",
            ServiceStatus::RequestDenied => "REQUEST_DENIED",
            ServiceStatus::InvalidRequest => "INVALID_REQUEST",
            ServiceStatus::Other(raw) => raw,
        }
    }

    /// Human-readable message for a non-OK status. Empty for `OK` and for
    /// unclassified statuses.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            ServiceStatus::ZeroResults => "No results, try again.",
            ServiceStatus::OverQueryLimit => {
                "You have exceeded your daily quota for the given API key."
            }
            ServiceStatus::RequestDenied => "Your API key is invalid.",
            ServiceStatus::InvalidRequest => "The input parameter is missing.",
            ServiceStatus::Ok | ServiceStatus::Other(_) => "",
        }
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, ServiceStatus::Ok)
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
