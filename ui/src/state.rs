#![allow(non_snake_case)]

use dioxus::prelude::*;
use listing_common::debounce::Debouncer;
use listing_common::render::ListingCard;
use listing_common::types::Listing;

/// Quiescence window for search/price input, in milliseconds.
pub const DEBOUNCE_WINDOW_MS: f64 = 80.0;

// --- Global signals ---
//
// Each signal has exactly one writer per transition: a completed load
// rebuilds LISTINGS wholesale, and a synchronous refresh rebuilds VISIBLE.
// Overlapping loads are last-resolved-wins.

/// The working set: all normalized listings from the last successful load.
pub static LISTINGS: GlobalSignal<Vec<Listing>> = Global::new(Vec::new);

/// Display records for the currently filtered/sorted view.
pub static VISIBLE: GlobalSignal<Vec<ListingCard>> = Global::new(Vec::new);

/// Raw text of the search input.
pub static SEARCH_INPUT: GlobalSignal<String> = Global::new(String::new);

/// Raw text of the max-price input.
pub static MAX_PRICE_INPUT: GlobalSignal<String> = Global::new(String::new);

/// One-line status message (load progress, filtered count, or error state).
pub static STATUS_TEXT: GlobalSignal<String> = Global::new(String::new);

/// Multi-line diagnostic shown only when a load fails.
pub static LOAD_ERROR: GlobalSignal<Option<String>> = Global::new(|| None);

/// Whether a load is in flight.
pub static LOADING: GlobalSignal<bool> = Global::new(|| false);

/// Pending-deadline state for debounced input handling.
pub static DEBOUNCER: GlobalSignal<Debouncer> =
    Global::new(|| Debouncer::new(DEBOUNCE_WINDOW_MS));
