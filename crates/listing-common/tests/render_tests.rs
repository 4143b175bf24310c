use listing_common::render::{
    amenity_line, card_for, clamp_text, status_line, DESCRIPTION_CLAMP_CHARS, MAX_AMENITIES_SHOWN,
};
use listing_common::types::Listing;

fn listing(id: &str) -> Listing {
    Listing {
        id: id.to_string(),
        name: None,
        description: None,
        amenities: Vec::new(),
        host_name: None,
        host_picture_url: None,
        thumbnail_url: None,
        price_value: None,
        price_text: None,
    }
}

// ============================================================================
// Card projection
// ============================================================================

#[test]
fn sparse_listing_gets_fallback_text() {
    let card = card_for(&listing("a"));
    assert_eq!(card.title, "Untitled listing");
    assert_eq!(card.description, "No description provided.");
    assert_eq!(card.host_name, "Unknown host");
    assert_eq!(card.price_text, "");
    assert_eq!(card.thumbnail_url, None);
    assert_eq!(card.host_picture_url, None);
}

#[test]
fn populated_listing_passes_through() {
    let mut l = listing("a");
    l.name = Some("Sunny Loft".to_string());
    l.description = Some("Bright and airy.".to_string());
    l.host_name = Some("Ana".to_string());
    l.price_text = Some("$120/night".to_string());
    l.thumbnail_url = Some("http://x/t.jpg".to_string());

    let card = card_for(&l);
    assert_eq!(card.title, "Sunny Loft");
    assert_eq!(card.description, "Bright and airy.");
    assert_eq!(card.host_name, "Ana");
    assert_eq!(card.price_text, "$120/night");
    assert_eq!(card.thumbnail_url.as_deref(), Some("http://x/t.jpg"));
}

#[test]
fn long_description_is_clamped() {
    let mut l = listing("a");
    l.description = Some("x".repeat(400));
    let card = card_for(&l);
    assert!(card.description.chars().count() <= DESCRIPTION_CLAMP_CHARS);
    assert!(card.description.ends_with('\u{2026}'));
}

#[test]
fn amenities_split_into_shown_and_overflow() {
    let mut l = listing("a");
    l.amenities = (1..=7).map(|i| format!("A{i}")).collect();
    let card = card_for(&l);
    assert_eq!(card.amenities_shown.len(), MAX_AMENITIES_SHOWN);
    assert_eq!(card.amenities_overflow, 2);
}

// ============================================================================
// Amenity line
// ============================================================================

#[test]
fn amenity_line_empty() {
    let card = card_for(&listing("a"));
    assert_eq!(amenity_line(&card), "No amenities listed");
}

#[test]
fn amenity_line_joins() {
    let mut l = listing("a");
    l.amenities = vec!["TV".to_string(), "Wifi".to_string()];
    let card = card_for(&l);
    assert_eq!(amenity_line(&card), "TV \u{00b7} Wifi");
}

#[test]
fn amenity_line_overflow_suffix() {
    let mut l = listing("a");
    l.amenities = (1..=7).map(|i| format!("A{i}")).collect();
    let card = card_for(&l);
    assert_eq!(
        amenity_line(&card),
        "A1 \u{00b7} A2 \u{00b7} A3 \u{00b7} A4 \u{00b7} A5 \u{00b7} +2 more"
    );
}

// ============================================================================
// Status line and clamping
// ============================================================================

#[test]
fn status_line_pluralizes() {
    assert_eq!(status_line(0), "Showing 0 listings.");
    assert_eq!(status_line(1), "Showing 1 listing.");
    assert_eq!(status_line(12), "Showing 12 listings.");
}

#[test]
fn clamp_text_short_input_untouched() {
    assert_eq!(clamp_text("short", 160), "short");
}

#[test]
fn clamp_text_budget_includes_ellipsis() {
    let clamped = clamp_text(&"a".repeat(200), 160);
    assert_eq!(clamped.chars().count(), 160);
    assert!(clamped.ends_with('\u{2026}'));
}

#[test]
fn clamp_text_trims_before_ellipsis() {
    // A space right at the cut point should not leave "word …".
    let text = format!("{} tail", "a".repeat(158));
    let clamped = clamp_text(&text, 160);
    assert!(!clamped.contains(" \u{2026}"));
}

#[test]
fn clamp_text_multibyte_safe() {
    let clamped = clamp_text(&"\u{e9}".repeat(300), 160);
    assert!(clamped.chars().count() <= 160);
}
