//! Case-insensitive, length-trimmed string matching.
//!
//! ANCS truncates application identifiers and titles to a fixed length before
//! forwarding them. A configured value is therefore trimmed to the length of
//! the received value before comparing, so a truncated identifier still finds
//! its configuration. A received value longer than the configured one never
//! matches it.
//!
//! Both sides are brought to Unicode Normalization Form C first, so a
//! precomposed title matches a contact name stored in decomposed form.

use unicode_normalization::UnicodeNormalization;

/// Return at most the first `length` characters of `value`.
pub fn trimmed_to(value: &str, length: usize) -> &str {
    match value.char_indices().nth(length) {
        Some((end, _)) => &value[..end],
        None => value,
    }
}

/// Check whether `received` matches `configured` after trimming `configured`
/// to the character length of `received`, ignoring case.
///
/// Lengths are counted after NFC normalization.
pub fn matches_trimmed(received: &str, configured: &str) -> bool {
    let received: String = received.nfc().collect();
    let configured: String = configured.nfc().collect();
    let trimmed = trimmed_to(&configured, received.chars().count());
    eq_ignore_case(&received, trimmed)
}

/// Check whether any of `values` matches `received` under [`matches_trimmed`].
pub fn contains_trimmed<I, S>(values: I, received: &str) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .any(|value| matches_trimmed(received, value.as_ref()))
}

/// Unicode-aware case-insensitive equality.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
