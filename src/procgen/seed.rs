use super::rng::Mulberry32;

/// Text hashed in place of an empty query.
pub const DEFAULT_SEED_TEXT: &str = "default";

/// Lowercase and trim a raw query.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Java-style string hash over UTF-16 code units: `h = h * 31 + unit` in wrapping
/// `i32` arithmetic, then the magnitude. `i32::MIN` maps to `2^31`, hence `u32`.
pub fn hash_text(text: &str) -> u32 {
    text.encode_utf16()
        .fold(0i32, |hash, unit| {
            hash.wrapping_mul(31).wrapping_add(i32::from(unit))
        })
        .unsigned_abs()
}

/// Deterministic seed for a query. Empty (or blank) queries hash as `"default"`.
pub fn seed_from_query(query: &str) -> u32 {
    let normalized = normalize_query(query);
    if normalized.is_empty() {
        hash_text(DEFAULT_SEED_TEXT)
    } else {
        hash_text(&normalized)
    }
}

/// Create the per-request generator for a query.
pub fn make_rng(query: &str) -> Mulberry32 {
    Mulberry32::new(seed_from_query(query))
}
