use dioxus::prelude::ReadableExt;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use listing_common::render::{card_for, status_line, ListingCard};
use listing_common::types::Listing;
use listing_common::{extract, normalize, query};

use crate::loader;
use crate::state::{
    DEBOUNCER, DEBOUNCE_WINDOW_MS, LISTINGS, LOADING, LOAD_ERROR, MAX_PRICE_INPUT, SEARCH_INPUT,
    STATUS_TEXT, VISIBLE,
};

/// Where the listing document lives, relative to the served page.
pub const JSON_URL: &str = "./data/listings.json";

/// Cap on the working set per load.
const MAX_LISTINGS: usize = 50;

/// Slack added to the debounce timer so the callback lands at or after the
/// deadline rather than a hair before it.
const TIMER_SLACK_MS: i32 = 10;

/// Kick off a load. Runs in the background; all outcomes land in signals.
pub fn load_and_render(force_reload: bool) {
    wasm_bindgen_futures::spawn_local(async move {
        *LOAD_ERROR.write() = None;
        *LOADING.write() = true;
        *STATUS_TEXT.write() = format!("Fetching {JSON_URL}\u{2026}");

        let outcome = load(force_reload).await;
        *LOADING.write() = false;

        match outcome {
            Ok(count) => {
                tracing::info!("loaded {count} listings");
                *STATUS_TEXT.write() =
                    format!("Loaded {count} listings. Use the search and max price filters.");
                refresh();
            }
            Err(msg) => {
                tracing::warn!("load failed: {msg}");
                *LOAD_ERROR.write() = Some(format!(
                    "Couldn't load listings.\n\n{msg}\n\nMake sure:\n\
                     - You have a JSON file at {JSON_URL}\n\
                     - You're running a local server (not file://)\n\
                     - The JSON contains an array of listings"
                ));
                *STATUS_TEXT.write() = "Error loading JSON.".to_string();
                LISTINGS.write().clear();
                VISIBLE.write().clear();
            }
        }
    });
}

async fn load(force_reload: bool) -> Result<usize, String> {
    let doc = loader::fetch_json(JSON_URL, force_reload)
        .await
        .map_err(|e| e.to_string())?;

    let normalized: Vec<Listing> = extract::extract_listings(&doc)
        .iter()
        .filter_map(normalize::normalize_listing)
        .take(MAX_LISTINGS)
        .collect();

    if normalized.is_empty() {
        return Err(
            "Loaded JSON but couldn't find listings.\nExpected either an array, or an object \
             containing an array like \"listings\" / \"results\"."
                .to_string(),
        );
    }

    let count = normalized.len();
    *LISTINGS.write() = normalized;
    Ok(count)
}

/// Re-filter, re-sort, and re-project the working set into display records.
/// Synchronous; replaces the visible set wholesale.
pub fn refresh() {
    *LOAD_ERROR.write() = None;

    let search = SEARCH_INPUT.read().clone();
    let max_price = query::parse_number_or_null(&MAX_PRICE_INPUT.read());

    let filtered = query::apply_filters(&LISTINGS.read(), &search, max_price);
    let cards: Vec<ListingCard> = filtered.iter().map(card_for).collect();

    *STATUS_TEXT.write() = status_line(cards.len());
    *VISIBLE.write() = cards;
}

/// Debounced refresh: each input event pushes the single pending deadline
/// out by one window and schedules a check just past it. Checks that arrive
/// before the (since pushed-out) deadline do nothing, so a burst of input
/// collapses into one `refresh`.
pub fn schedule_refresh() {
    DEBOUNCER.write().input(js_sys::Date::now());

    let Some(window) = web_sys::window() else {
        return;
    };

    let callback = Closure::once_into_js(|| {
        if DEBOUNCER.write().fire(js_sys::Date::now()) {
            refresh();
        }
    });

    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        DEBOUNCE_WINDOW_MS as i32 + TIMER_SLACK_MS,
    ) {
        tracing::debug!("setTimeout failed: {e:?}");
        // Fall back to an immediate refresh rather than dropping the input.
        DEBOUNCER.write().cancel();
        refresh();
    }
}

/// Clear both filter inputs and re-render immediately.
pub fn reset_filters() {
    *SEARCH_INPUT.write() = String::new();
    *MAX_PRICE_INPUT.write() = String::new();
    DEBOUNCER.write().cancel();
    refresh();
}
