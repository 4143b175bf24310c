use serde_json::Value;

/// Top-level field names that commonly wrap the listing array.
const ENVELOPE_FIELDS: &[&str] = &["listings", "results", "data"];

/// Field names checked one level under `payload`.
const PAYLOAD_FIELDS: &[&str] = &["listings", "results"];

/// Locate the raw listing array inside a fetched document.
///
/// Priority: the document itself if it is an array; else the first
/// array-valued field among `listings` / `results` / `data`; else
/// `payload.listings` / `payload.results`. A field that exists but is not
/// an array falls through to the next candidate. No match yields an empty
/// slice — "zero extracted records" is the caller's error to surface.
pub fn extract_listings(doc: &Value) -> &[Value] {
    if let Some(arr) = doc.as_array() {
        return arr;
    }

    for field in ENVELOPE_FIELDS {
        if let Some(arr) = doc.get(field).and_then(Value::as_array) {
            return arr;
        }
    }

    if let Some(payload) = doc.get("payload") {
        for field in PAYLOAD_FIELDS {
            if let Some(arr) = payload.get(field).and_then(Value::as_array) {
                return arr;
            }
        }
    }

    &[]
}
