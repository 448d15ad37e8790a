//! Display translations for place type tags.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Known tags and their German display names.
pub const TYPE_TRANSLATIONS: &[(&str, &str)] = &[
    ("locality", "Gegend"),
    ("sublocality", "Raum"),
    ("postal_code", "Postleitzahl"),
    ("country", "Land"),
    ("establishment", "Unternehmen"),
    ("address", "Adresse"),
    ("geocode", "Geografischer Punkt"),
];

static TYPE_LOOKUP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| TYPE_TRANSLATIONS.iter().copied().collect());

/// Returns the display name for `tag`, or `tag` itself when it has none.
#[must_use]
pub fn translate_type_tag(tag: &str) -> &str {
    TYPE_LOOKUP.get(tag).copied().unwrap_or(tag)
}
