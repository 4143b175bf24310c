#![allow(non_snake_case)]

use dioxus::prelude::*;
use listing_common::render::{amenity_line, ListingCard};

#[component]
pub fn ListingCardView(card: ListingCard) -> Element {
    let thumbnail = card
        .thumbnail_url
        .clone()
        .unwrap_or_else(placeholder_image_data_url);
    let host_picture = card
        .host_picture_url
        .clone()
        .unwrap_or_else(placeholder_avatar_data_url);
    let amenities = amenity_line(&card);

    rsx! {
        article { class: "listing-card",
            div { class: "listing-card-media",
                img {
                    class: "listing-card-img",
                    loading: "lazy",
                    alt: "Thumbnail for {card.title}",
                    src: "{thumbnail}",
                }
            }

            div { class: "listing-card-body",
                h3 { class: "listing-card-title", "{card.title}" }
                p { class: "listing-card-description", "{card.description}" }

                div { class: "listing-card-meta",
                    div { class: "listing-card-host",
                        img {
                            class: "host-avatar",
                            loading: "lazy",
                            alt: "Host photo for {card.host_name}",
                            src: "{host_picture}",
                            width: "32",
                            height: "32",
                        }
                        span { class: "host-name", "{card.host_name}" }
                    }
                    span { class: "listing-card-price", "{card.price_text}" }
                }

                div { class: "listing-card-amenities", "{amenities}" }
            }
        }
    }
}

/// Inline SVG placeholder for listings without a thumbnail; avoids shipping
/// any image assets.
fn placeholder_image_data_url() -> String {
    let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="640" height="400">
      <defs>
        <linearGradient id="g" x1="0" x2="1">
          <stop offset="0" stop-color="#ff385c" stop-opacity="0.20"/>
          <stop offset="1" stop-color="#00d19f" stop-opacity="0.16"/>
        </linearGradient>
      </defs>
      <rect width="100%" height="100%" fill="url(#g)"/>
      <rect x="20" y="20" width="600" height="360" rx="22" fill="rgba(255,255,255,0.10)" stroke="rgba(255,255,255,0.18)"/>
      <text x="50%" y="52%" fill="rgba(255,255,255,0.75)" font-family="Inter, Arial" font-size="18" text-anchor="middle">
        No thumbnail
      </text>
    </svg>"##;
    format!(
        "data:image/svg+xml;charset=utf-8,{}",
        js_sys::encode_uri_component(svg)
    )
}

fn placeholder_avatar_data_url() -> String {
    let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="128" height="128">
      <defs>
        <linearGradient id="g" x1="0" x2="1">
          <stop offset="0" stop-color="#5865f2" stop-opacity="0.25"/>
          <stop offset="1" stop-color="#ff385c" stop-opacity="0.25"/>
        </linearGradient>
      </defs>
      <rect width="100%" height="100%" rx="64" fill="url(#g)"/>
      <circle cx="64" cy="52" r="20" fill="rgba(255,255,255,0.45)"/>
      <path d="M24 112c8-22 24-34 40-34s32 12 40 34" fill="rgba(255,255,255,0.40)"/>
    </svg>"##;
    format!(
        "data:image/svg+xml;charset=utf-8,{}",
        js_sys::encode_uri_component(svg)
    )
}
