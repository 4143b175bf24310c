use serde::{Deserialize, Serialize};

/// Canonical normalized record describing one rental unit for display.
///
/// Absent fields are `None`, never an empty string; `normalize` enforces
/// this. `id` is always non-empty: either taken from the source record or
/// derived deterministically (see `hashing::hash_id`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub amenities: Vec<String>,
    pub host_name: Option<String>,
    pub host_picture_url: Option<String>,
    pub thumbnail_url: Option<String>,
    /// Parsed numeric nightly price. May disagree with `price_text`, which
    /// preserves source formatting.
    pub price_value: Option<f64>,
    pub price_text: Option<String>,
}
