//! Comparison keys for service identifiers.
//!
//! A key is the identifier lowercased (ASCII only) with every character
//! outside `[a-z0-9.]` removed. Keys are lossy on purpose: `"Example-Com"`
//! and `"examplecom"` compare equal. They are only ever used for comparison,
//! never to name output files.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_KEY_CHARS: Regex = Regex::new(r"[^a-z0-9.]").unwrap();
}

/// Normalizes a service id or file base name into its comparison key.
///
/// The transformation is idempotent and ignores ASCII case.
///
/// ```
/// use servicecheck::utils::normalize::normalize_key;
///
/// assert_eq!(normalize_key("Example.com"), "example.com");
/// assert_eq!(normalize_key("A-B_c d"), "abcd");
/// ```
pub fn normalize_key(name: &str) -> String {
    let lowered = name.to_ascii_lowercase();
    NON_KEY_CHARS.replace_all(&lowered, "").into_owned()
}

/// Normalizes every name and sorts the keys by byte order.
pub fn sorted_keys<'a, I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut keys: Vec<String> = names.into_iter().map(normalize_key).collect();
    keys.sort();
    keys
}
