const FNV_OFFSET_BASIS: u32 = 2166136261;
const FNV_PRIME: u32 = 16777619;

/// Derive a stable fallback id for records that carry none of the id
/// synonyms: 32-bit FNV-1a over the UTF-16 code units of `key`, rendered
/// as `h_<lowercase hex>`.
///
/// Not cryptographic. The only job is a cheap, deterministic, non-null id
/// so identical data re-renders stably across reloads; a collision between
/// two distinct records is accepted degradation.
pub fn hash_id(key: &str) -> String {
    let mut h = FNV_OFFSET_BASIS;
    for unit in key.encode_utf16() {
        h ^= unit as u32;
        h = h.wrapping_mul(FNV_PRIME);
    }
    format!("h_{h:x}")
}
