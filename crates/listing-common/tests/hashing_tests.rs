use listing_common::hashing::hash_id;

#[test]
fn empty_key_is_offset_basis() {
    // FNV-1a over zero units leaves the offset basis (0x811c9dc5).
    assert_eq!(hash_id(""), "h_811c9dc5");
}

#[test]
fn known_vector() {
    // FNV-1a 32-bit of "a" is the published reference value.
    assert_eq!(hash_id("a"), "h_e40c292c");
}

#[test]
fn deterministic() {
    let key = "Loft|Ana|$80";
    assert_eq!(hash_id(key), hash_id(key));
}

#[test]
fn distinct_keys_differ() {
    assert_ne!(hash_id("Loft|Ana|$80"), hash_id("Cabin|Bo|$120"));
}

#[test]
fn prefix_and_lowercase_hex() {
    let id = hash_id("anything");
    assert!(id.starts_with("h_"));
    assert!(id[2..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

#[test]
fn non_ascii_keys_hash() {
    // Hashing runs over UTF-16 code units, so multibyte input still works
    // and stays deterministic.
    let id = hash_id("caf\u{e9} \u{1f3e0}");
    assert_eq!(id, hash_id("caf\u{e9} \u{1f3e0}"));
    assert!(id.starts_with("h_"));
}
