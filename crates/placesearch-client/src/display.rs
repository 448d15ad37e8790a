//! Plain projections of query results for list and detail views.

use crate::error::PlacesError;
use crate::types::{PlaceDetail, PredictionRecord};

/// Shown for any malformed response instead of the decoder's message.
pub const MALFORMED_MESSAGE: &str = "Error parsing the json response.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListIcon {
    Pin,
}

/// One row of a prediction list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub caption: String,
    pub subheader: String,
    pub icon: ListIcon,
}

impl From<&PredictionRecord> for ListEntry {
    fn from(record: &PredictionRecord) -> Self {
        Self {
            caption: record.description.clone(),
            subheader: format!("[{}]", record.types.join(", ")),
            icon: ListIcon::Pin,
        }
    }
}

/// User-facing text for a failed query.
///
/// Service statuses are shown with their fixed message; everything else as
/// `"<kind>: <message>"`.
#[must_use]
pub fn failure_message(err: &PlacesError) -> String {
    match err {
        PlacesError::RemoteStatus { message, .. } => message.clone(),
        PlacesError::MalformedResponse { .. } => MALFORMED_MESSAGE.to_string(),
        PlacesError::Transport(inner) => format!("{}: {inner}", err.kind().as_str()),
    }
}

/// Lines of the detail view, skipping whatever the service left out.
///
/// Coordinates are only shown when both are known.
#[must_use]
pub fn detail_lines(detail: &PlaceDetail) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(name) = &detail.name {
        lines.push(name.clone());
    }
    if let Some(address) = &detail.address {
        lines.push(address.clone());
    }
    if let (Some(lat), Some(lng)) = (detail.lat, detail.lng) {
        lines.push(format!("Lat/Lng: {lat}, {lng}"));
    }
    if let Some(phone) = &detail.phone_number {
        lines.push(format!("Phone: {phone}"));
    }
    if let Some(website) = &detail.website {
        lines.push(format!("Website: {website}"));
    }
    if let Some(url) = &detail.url {
        lines.push(format!("Map: {url}"));
    }
    if let Some(icon) = &detail.icon {
        lines.push(format!(
            "Icon: {} ({}x{})",
            icon.url,
            icon.image.width(),
            icon.image.height()
        ));
    }
    lines
}
