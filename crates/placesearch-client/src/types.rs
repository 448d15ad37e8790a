//! Places API response types and the domain records decoded from them.
//!
//! Wire types mirror the JSON of the autocomplete and details endpoints.
//! Every detail field is optional: the service omits whatever it does not
//! know about a place, and absence is never an error.

use image::DynamicImage;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// The status half of every response envelope, read before anything else.
#[derive(Debug, Deserialize)]
pub struct StatusEnvelope {
    pub status: String,
}

/// `autocomplete/json` payload: `{ "predictions": [ ... ] }`.
#[derive(Debug, Deserialize)]
pub struct AutocompleteResponse {
    pub predictions: Vec<WirePrediction>,
}

#[derive(Debug, Deserialize)]
pub struct WirePrediction {
    pub description: String,
    pub id: String,
    pub place_id: String,
    pub reference: String,
    pub types: Vec<String>,
}

/// `details/json` payload: `{ "result": { ... } }`.
#[derive(Debug, Deserialize)]
pub struct DetailsResponse {
    pub result: WireDetail,
}

#[derive(Debug, Default, Deserialize)]
pub struct WireDetail {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub formatted_phone_number: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    #[serde(default)]
    pub location: Option<Location>,
}

/// `lat` and `lng` are read independently; either may be missing.
#[derive(Debug, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

// ---------------------------------------------------------------------------
// Domain records
// ---------------------------------------------------------------------------

/// One autocomplete suggestion. Type tags are already translated.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRecord {
    pub description: String,
    /// Legacy identifier, deprecated by the service but still returned.
    pub id: String,
    /// Identifier used to request details for this place.
    pub place_id: String,
    pub reference: String,
    pub types: Vec<String>,
}

/// Downloaded and decoded place icon.
#[derive(Debug, Clone)]
pub struct PlaceIcon {
    pub url: String,
    pub image: DynamicImage,
}

/// Full detail record for one place.
#[derive(Debug, Clone, Default)]
pub struct PlaceDetail {
    pub name: Option<String>,
    /// Link to the place on the map service.
    pub url: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub icon: Option<PlaceIcon>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// A decoded detail whose icon has not been fetched yet.
#[derive(Debug, Clone, Default)]
pub struct UnresolvedDetail {
    pub detail: PlaceDetail,
    pub icon_url: Option<String>,
}

impl UnresolvedDetail {
    #[must_use]
    pub fn resolve(self, icon: Option<PlaceIcon>) -> PlaceDetail {
        PlaceDetail {
            icon,
            ..self.detail
        }
    }
}
