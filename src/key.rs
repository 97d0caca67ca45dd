//! Key canonicalization
//!
//! Every container that indexes by name treats names case-insensitively:
//! the canonical form of a key is its ASCII uppercase spelling, and all
//! storage and comparison happens on that form. Non-ASCII characters pass
//! through untouched.

/// Canonical (uppercase) form of a key
pub fn canonical(key: &str) -> String {
    key.to_ascii_uppercase()
}

/// Canonical form of user-typed input: surrounding whitespace trimmed, then
/// uppercased
pub fn normalize_input(input: &str) -> String {
    canonical(input.trim())
}

/// Whether two keys denote the same canonical key
#[inline]
pub fn same_key(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}
