//! Response parsing: structural decode, status check, payload decode.
//!
//! The status is validated before the payload is looked at, so a
//! `ZERO_RESULTS` body without a `predictions` array is still a
//! [`PlacesError::RemoteStatus`], not a malformed response.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{OperationOutcome, PlacesError};
use crate::status::ServiceStatus;
use crate::translate::translate_type_tag;
use crate::types::{
    AutocompleteResponse, DetailsResponse, PlaceDetail, PredictionRecord, StatusEnvelope,
    UnresolvedDetail, WireDetail, WirePrediction,
};

/// Parses an autocomplete response body into prediction records, in the
/// order the service returned them.
///
/// # Errors
///
/// - [`PlacesError::MalformedResponse`] if the body is not JSON or lacks a
///   required field.
/// - [`PlacesError::RemoteStatus`] if the status is not `OK`.
pub fn parse_predictions(body: &str) -> OperationOutcome<Vec<PredictionRecord>> {
    let value = decode_checked(body, "autocomplete")?;
    let response: AutocompleteResponse = from_value(value, "autocomplete")?;
    Ok(response
        .predictions
        .into_iter()
        .map(PredictionRecord::from)
        .collect())
}

/// Parses a details response body. The icon, if any, is left for the
/// caller to fetch.
///
/// # Errors
///
/// - [`PlacesError::MalformedResponse`] if the body is not JSON, has no
///   `result` object, or a present field has the wrong type.
/// - [`PlacesError::RemoteStatus`] if the status is not `OK`.
pub fn parse_detail(body: &str) -> OperationOutcome<UnresolvedDetail> {
    let value = decode_checked(body, "details")?;
    let response: DetailsResponse = from_value(value, "details")?;
    Ok(UnresolvedDetail::from(response.result))
}

/// Decodes the body as JSON and rejects any status other than `OK`.
fn decode_checked(body: &str, context: &str) -> OperationOutcome<serde_json::Value> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| PlacesError::MalformedResponse {
            context: context.to_string(),
            source: e,
        })?;
    let envelope =
        StatusEnvelope::deserialize(&value).map_err(|e| PlacesError::MalformedResponse {
            context: format!("{context} status"),
            source: e,
        })?;
    check_status(&envelope.status)?;
    Ok(value)
}

/// Maps a wire status onto the taxonomy; only `OK` passes.
///
/// # Errors
///
/// Returns [`PlacesError::RemoteStatus`] carrying the status and its message.
pub fn check_status(raw: &str) -> Result<(), PlacesError> {
    let status = ServiceStatus::from_wire(raw);
    if status.is_ok() {
        return Ok(());
    }
    tracing::warn!(status = %status, "places service returned non-OK status");
    Err(PlacesError::remote(status))
}

fn from_value<T: DeserializeOwned>(value: serde_json::Value, context: &str) -> OperationOutcome<T> {
    serde_json::from_value(value).map_err(|e| PlacesError::MalformedResponse {
        context: context.to_string(),
        source: e,
    })
}

impl From<WirePrediction> for PredictionRecord {
    fn from(wire: WirePrediction) -> Self {
        Self {
            description: wire.description,
            id: wire.id,
            place_id: wire.place_id,
            reference: wire.reference,
            types: wire
                .types
                .iter()
                .map(|tag| translate_type_tag(tag).to_string())
                .collect(),
        }
    }
}

impl From<WireDetail> for UnresolvedDetail {
    fn from(wire: WireDetail) -> Self {
        let location = wire.geometry.and_then(|g| g.location);
        let (lat, lng) = location.map_or((None, None), |l| (l.lat, l.lng));
        Self {
            detail: PlaceDetail {
                name: wire.name,
                url: wire.url,
                website: wire.website,
                address: wire.formatted_address,
                phone_number: wire.formatted_phone_number,
                icon: None,
                lat,
                lng,
            },
            icon_url: wire.icon,
        }
    }
}
