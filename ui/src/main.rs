#![allow(non_snake_case)]

use dioxus::prelude::*;

mod loader;
mod pipeline;
mod state;
mod views;

use state::LOADING;
use views::listing_grid::ListingGrid;
use views::search_bar::SearchBar;

fn main() {
    dioxus::logger::initialize_default();
    launch(App);
}

#[component]
fn App() -> Element {
    use_effect(|| {
        pipeline::load_and_render(false);
    });

    let loading = *LOADING.read();

    rsx! {
        document::Stylesheet { href: asset!("/assets/main.css") }

        div { class: "app-shell",
            header { class: "app-header",
                h1 { class: "app-title", "Listing Browser" }

                div { class: "header-controls",
                    button {
                        class: "reload-btn",
                        title: "Re-fetch the listing data, bypassing the cache",
                        disabled: loading,
                        onclick: move |_| {
                            pipeline::load_and_render(true);
                        },
                        "Reload data"
                    }
                }
            }

            SearchBar {}

            ListingGrid {}
        }
    }
}
