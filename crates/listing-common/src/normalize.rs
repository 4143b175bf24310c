use serde_json::Value;

use crate::hashing;
use crate::price;
use crate::types::Listing;

/// Synonym tables: per concept, an ordered list of field paths tried until
/// one yields a usable value. Kept as data so the tolerated schemas are
/// visible (and testable) in one place.
const ID_PATHS: &[&[&str]] = &[&["id"], &["listing_id"], &["_id"]];
const NAME_PATHS: &[&[&str]] = &[&["name"], &["listing_name"], &["title"]];
const DESCRIPTION_PATHS: &[&[&str]] = &[&["description"], &["summary"], &["space"]];
const THUMBNAIL_PATHS: &[&[&str]] = &[
    &["thumbnail_url"],
    &["picture_url"],
    &["xl_picture_url"],
    &["images", "picture_url"],
    &["images", "thumbnail_url"],
];
const HOST_NAME_PATHS: &[&[&str]] = &[&["host_name"], &["host", "name"], &["host", "host_name"]];
const HOST_PICTURE_PATHS: &[&[&str]] = &[
    &["host_picture_url"],
    &["host_thumbnail_url"],
    &["host", "picture_url"],
    &["host", "thumbnail_url"],
];
const AMENITY_PATHS: &[&[&str]] = &[&["amenities"], &["amenity"], &["features"]];
const PRICE_PATHS: &[&[&str]] = &[
    &["price"],
    &["nightly_price"],
    &["price_per_night"],
    &["rate"],
];

/// Map one raw record into a canonical `Listing`.
///
/// Returns `None` iff `raw` is not a JSON object; every other record
/// survives, however sparse. All string fields go through `string_or_null`
/// so an empty or whitespace-only value never stands in for "missing".
pub fn normalize_listing(raw: &Value) -> Option<Listing> {
    if !raw.is_object() {
        return None;
    }

    let id = first_string(raw, ID_PATHS).unwrap_or_else(|| hashing::hash_id(&fallback_key(raw)));

    let amenities = first_value(raw, AMENITY_PATHS)
        .map(normalize_amenities)
        .unwrap_or_default();

    let price_raw = first_value(raw, PRICE_PATHS);
    let price_value = price_raw.and_then(price::parse_price);
    let price_text = price::format_price(price_raw, price_value);

    Some(Listing {
        id,
        name: first_string(raw, NAME_PATHS),
        description: first_string(raw, DESCRIPTION_PATHS),
        amenities,
        host_name: first_string(raw, HOST_NAME_PATHS),
        host_picture_url: first_string(raw, HOST_PICTURE_PATHS),
        thumbnail_url: first_string(raw, THUMBNAIL_PATHS),
        price_value,
        price_text,
    })
}

/// Last-resort id input: primary name, host name, and price fields joined
/// with `|`. Deliberately uses the primary field names only, so the same
/// record hashes the same way on every load.
fn fallback_key(raw: &Value) -> String {
    let part = |field: &str| {
        raw.get(field)
            .and_then(string_or_null)
            .unwrap_or_default()
    };
    format!("{}|{}|{}", part("name"), part("host_name"), part("price"))
}

/// Coerce a scalar JSON value to a trimmed, non-empty string.
///
/// Numbers and bools take their JSON text form. Empty and whitespace-only
/// strings become `None`, as do nulls, arrays, and objects.
pub fn string_or_null(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Parse an amenities value into a clean list.
///
/// Arrays take each scalar element, stringified and trimmed. Strings try a
/// strict JSON-array parse first, then fall back to treating the value as a
/// brace- or bracket-delimited comma list (the shape CSV exports produce,
/// e.g. `{TV,Wifi,Kitchen}`), stripping one layer of surrounding quotes per
/// piece. Any other type yields an empty list.
pub fn normalize_amenities(v: &Value) -> Vec<String> {
    match v {
        Value::Array(items) => stringify_items(items),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Vec::new();
            }

            if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(trimmed) {
                return stringify_items(&items);
            }

            let mut cleaned = trimmed;
            cleaned = cleaned.strip_prefix('{').unwrap_or(cleaned);
            cleaned = cleaned.strip_suffix('}').unwrap_or(cleaned);
            cleaned = cleaned.strip_prefix('[').unwrap_or(cleaned);
            cleaned = cleaned.strip_suffix(']').unwrap_or(cleaned);

            cleaned
                .split(',')
                .map(|piece| {
                    let piece = piece.strip_prefix('"').unwrap_or(piece);
                    let piece = piece.strip_suffix('"').unwrap_or(piece);
                    piece.trim()
                })
                .filter(|piece| !piece.is_empty())
                .map(str::to_string)
                .collect()
        }
        _ => Vec::new(),
    }
}

fn stringify_items(items: &[Value]) -> Vec<String> {
    items.iter().filter_map(string_or_null).collect()
}

/// First value reachable through any of the candidate paths, skipping nulls.
fn first_value<'a>(raw: &'a Value, paths: &[&[&str]]) -> Option<&'a Value> {
    paths.iter().find_map(|path| lookup(raw, path))
}

/// First path whose value coerces to a non-empty string.
fn first_string(raw: &Value, paths: &[&[&str]]) -> Option<String> {
    paths
        .iter()
        .find_map(|path| lookup(raw, path).and_then(string_or_null))
}

fn lookup<'a>(raw: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = raw;
    for segment in path {
        current = current.get(*segment)?;
    }
    if current.is_null() {
        None
    } else {
        Some(current)
    }
}
