//! Core pipeline for the listing browser: envelope extraction, record
//! normalization, price parsing, filtering/ranking, and display rendering.
//!
//! Everything here is pure and UI-agnostic. Raw input is `serde_json::Value`
//! (external schemas are too inconsistent for typed deserialization); output
//! is canonical `Listing` records and plain display structs that a view
//! layer binds however it likes.

pub mod debounce;
pub mod extract;
pub mod hashing;
pub mod normalize;
pub mod price;
pub mod query;
pub mod render;
pub mod types;
