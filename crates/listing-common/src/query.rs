use crate::types::Listing;

const NAME_WEIGHT: i32 = 10;
const HOST_WEIGHT: i32 = 6;
const DESCRIPTION_WEIGHT: i32 = 4;
const AMENITY_WEIGHT: i32 = 3;

/// Parse a free-form numeric input (the max-price box). Empty or
/// non-numeric text means "no threshold".
pub fn parse_number_or_null(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Filter the working set by free-text query and max-price threshold, then
/// order by relevance.
///
/// The query matches case-insensitively against the concatenation of name,
/// description, host name, amenities, and price text. A listing with no
/// parsed price always passes the price filter (unknown compares as
/// negative infinity). Without a query, load order is preserved; with one,
/// listings sort by descending score and ties keep their original order
/// (the sort is stable).
pub fn apply_filters(listings: &[Listing], query: &str, max_price: Option<f64>) -> Vec<Listing> {
    let query = query.trim().to_lowercase();

    let mut items: Vec<Listing> = listings
        .iter()
        .filter(|l| query.is_empty() || haystack(l).contains(&query))
        .filter(|l| match max_price {
            Some(max) => l.price_value.unwrap_or(f64::NEG_INFINITY) <= max,
            None => true,
        })
        .cloned()
        .collect();

    if !query.is_empty() {
        items.sort_by(|a, b| relevance_score(b, &query).cmp(&relevance_score(a, &query)));
    }

    items
}

/// Weighted relevance of a listing against a lowercased query: name matches
/// dominate, then host, description, amenities. Used only for ordering.
pub fn relevance_score(listing: &Listing, query: &str) -> i32 {
    let contains = |field: &Option<String>| {
        field
            .as_deref()
            .map(|s| s.to_lowercase().contains(query))
            .unwrap_or(false)
    };

    let mut score = 0;
    if contains(&listing.name) {
        score += NAME_WEIGHT;
    }
    if contains(&listing.host_name) {
        score += HOST_WEIGHT;
    }
    if contains(&listing.description) {
        score += DESCRIPTION_WEIGHT;
    }
    if listing
        .amenities
        .iter()
        .any(|a| a.to_lowercase().contains(query))
    {
        score += AMENITY_WEIGHT;
    }
    score
}

fn haystack(listing: &Listing) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(4 + listing.amenities.len());
    if let Some(name) = listing.name.as_deref() {
        parts.push(name);
    }
    if let Some(description) = listing.description.as_deref() {
        parts.push(description);
    }
    if let Some(host) = listing.host_name.as_deref() {
        parts.push(host);
    }
    for amenity in &listing.amenities {
        parts.push(amenity);
    }
    if let Some(price) = listing.price_text.as_deref() {
        parts.push(price);
    }
    parts.join(" ").to_lowercase()
}
