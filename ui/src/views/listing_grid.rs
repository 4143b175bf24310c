#![allow(non_snake_case)]

use dioxus::prelude::*;

use super::listing_card::ListingCardView;
use crate::state::{LOADING, LOAD_ERROR, VISIBLE};

#[component]
pub fn ListingGrid() -> Element {
    let cards = VISIBLE.read().clone();
    let error = LOAD_ERROR.read().clone();
    let loading = *LOADING.read();

    rsx! {
        div { class: "listing-directory",
            if let Some(message) = error {
                div { class: "error-box", "{message}" }
            }

            if loading {
                div { class: "loading-box", "Loading listings\u{2026}" }
            }

            if cards.is_empty() && !loading {
                div { class: "directory-empty",
                    p { "No listings to show." }
                    p { class: "text-secondary",
                        "Adjust the search or max price filters, or reload the data."
                    }
                }
            }

            if !cards.is_empty() {
                div { class: "listing-grid",
                    for card in cards.iter() {
                        ListingCardView {
                            key: "{card.id}",
                            card: card.clone(),
                        }
                    }
                }
            }
        }
    }
}
