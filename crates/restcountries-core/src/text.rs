// crates/restcountries-core/src/text.rs

//! String normalization shared by queries and the index.
//!
//! Names and codes follow different rules: names are compared on a folded
//! form where case and the blank/hyphen distinction are erased, codes are
//! compared after ASCII upper-casing only.

/// Fold a country name into its comparison key.
///
/// Every whitespace character becomes `-`, then the whole string is
/// lower-cased. Queries and stored names go through the same function, so
/// `"United States"`, `"united-states"` and `"UNITED STATES"` all compare
/// equal.
///
/// ```rust
/// use restcountries_core::text::normalize_name;
///
/// assert_eq!(normalize_name("United States"), "united-states");
/// assert_eq!(normalize_name("Côte d'Ivoire"), "côte-d'ivoire");
/// ```
pub fn normalize_name(s: &str) -> String {
    s.chars()
        .map(|ch| if ch.is_whitespace() { '-' } else { ch })
        .collect::<String>()
        .to_lowercase()
}

/// Case-insensitive equality for attribute values such as regions or
/// language names.
#[inline]
pub fn equals_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        a.eq_ignore_ascii_case(b)
    } else {
        a.to_lowercase() == b.to_lowercase()
    }
}

/// Upper-case an identifier code. Nothing is trimmed.
#[inline]
pub fn normalize_code(s: &str) -> String {
    s.to_ascii_uppercase()
}

/// True if the code consists of ASCII digits only (ISO numeric form).
#[inline]
pub fn is_numeric_code(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Split a `,`/`;` separated code list into normalized tokens.
///
/// Whitespace is removed everywhere (not just around separators), tokens are
/// upper-cased, and anything that is not 2 or 3 characters long is dropped.
///
/// ```rust
/// use restcountries_core::text::split_codes;
///
/// assert_eq!(split_codes(" us, FRA ;840;;x;toolong"), vec!["US", "FRA", "840"]);
/// ```
pub fn split_codes(s: &str) -> Vec<String> {
    let compact: String = s.chars().filter(|ch| !ch.is_whitespace()).collect();
    compact
        .split(&[',', ';'][..])
        .map(normalize_code)
        .filter(|token| matches!(token.chars().count(), 2 | 3))
        .collect()
}
