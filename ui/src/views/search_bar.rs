#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::pipeline;
use crate::state::{MAX_PRICE_INPUT, SEARCH_INPUT, STATUS_TEXT};

#[component]
pub fn SearchBar() -> Element {
    let search = SEARCH_INPUT.read().clone();
    let max_price = MAX_PRICE_INPUT.read().clone();
    let status = STATUS_TEXT.read().clone();

    rsx! {
        div { class: "search-section",
            div { class: "search-bar",
                input {
                    class: "search-input",
                    r#type: "text",
                    placeholder: "Search name, host, amenities\u{2026}",
                    value: "{search}",
                    oninput: move |e| {
                        *SEARCH_INPUT.write() = e.value();
                        pipeline::schedule_refresh();
                    },
                }
                input {
                    class: "price-input",
                    r#type: "number",
                    min: "0",
                    placeholder: "Max price",
                    value: "{max_price}",
                    oninput: move |e| {
                        *MAX_PRICE_INPUT.write() = e.value();
                        pipeline::schedule_refresh();
                    },
                }
                button {
                    class: "reset-btn",
                    onclick: move |_| {
                        pipeline::reset_filters();
                    },
                    "Reset"
                }
            }

            div { class: "filter-row",
                span { class: "status-text", "{status}" }
            }
        }
    }
}
