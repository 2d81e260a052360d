//! Content predicates.
//! Both functions are pure over the text they are given; callers read the file.

use once_cell::sync::Lazy;
use regex::Regex;

static NAKED_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://\S+$").expect("naked URL pattern is valid"));

/// True when the only non-blank line of `content` is an http(s) URL.
///
/// Lines are trimmed before counting, so surrounding blank lines and
/// indentation do not matter. Trailing punctuation stays part of the URL.
pub fn is_naked_url(content: &str) -> bool {
    let mut lines = content.split('\n').map(str::trim).filter(|l| !l.is_empty());
    match (lines.next(), lines.next()) {
        (Some(only), None) => NAKED_URL.is_match(only),
        _ => false,
    }
}

/// Case-sensitive literal containment.
#[inline]
pub fn contains_literal(content: &str, needle: &str) -> bool {
    content.contains(needle)
}
