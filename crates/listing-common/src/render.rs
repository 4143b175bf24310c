use crate::types::Listing;

/// Cap on amenities shown per card before collapsing to "+N more".
pub const MAX_AMENITIES_SHOWN: usize = 5;

/// Character budget for a card's description text.
pub const DESCRIPTION_CLAMP_CHARS: usize = 160;

/// Everything a view needs to draw one listing card, with fallbacks already
/// applied. Plain data: the actual view binding is a separate concern.
#[derive(Clone, Debug, PartialEq)]
pub struct ListingCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail_url: Option<String>,
    pub host_name: String,
    pub host_picture_url: Option<String>,
    /// Empty string when the listing has no price to show.
    pub price_text: String,
    pub amenities_shown: Vec<String>,
    pub amenities_overflow: usize,
}

/// Project a normalized listing into its display form.
pub fn card_for(listing: &Listing) -> ListingCard {
    let description = listing
        .description
        .as_deref()
        .unwrap_or("No description provided.");

    let shown = listing.amenities.len().min(MAX_AMENITIES_SHOWN);

    ListingCard {
        id: listing.id.clone(),
        title: listing
            .name
            .clone()
            .unwrap_or_else(|| "Untitled listing".to_string()),
        description: clamp_text(description, DESCRIPTION_CLAMP_CHARS),
        thumbnail_url: listing.thumbnail_url.clone(),
        host_name: listing
            .host_name
            .clone()
            .unwrap_or_else(|| "Unknown host".to_string()),
        host_picture_url: listing.host_picture_url.clone(),
        price_text: listing.price_text.clone().unwrap_or_default(),
        amenities_shown: listing.amenities[..shown].to_vec(),
        amenities_overflow: listing.amenities.len() - shown,
    }
}

/// One-line amenity summary: up to the shown cap joined with a separator,
/// plus an overflow marker.
pub fn amenity_line(card: &ListingCard) -> String {
    if card.amenities_shown.is_empty() {
        return "No amenities listed".to_string();
    }
    let mut line = card.amenities_shown.join(" \u{00b7} ");
    if card.amenities_overflow > 0 {
        line.push_str(&format!(" \u{00b7} +{} more", card.amenities_overflow));
    }
    line
}

/// Status line reflecting the current filtered count.
pub fn status_line(count: usize) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("Showing {count} listing{suffix}.")
}

/// Truncate to a character budget, marking the cut with an ellipsis. The
/// budget counts characters, so the cut always lands on a char boundary.
pub fn clamp_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}\u{2026}", kept.trim_end())
}
