//! Locale-aware string collation.
//!
//! Names compare the way a reader expects rather than by code point:
//!
//! 1. base letters, ignoring accents and case (`"Ángel"` sorts with `"angel"`)
//! 2. accents (`"e"` before `"é"`)
//! 3. case, lowercase first (`"de"` before `"De"`)
//! 4. raw code points, so distinct strings never compare equal
//!
//! The first level transliterates to ASCII with `deunicode`, which also
//! places non-Latin scripts by their romanization.

use std::cmp::Ordering;

use deunicode::deunicode;

/// Compares two strings by collation order.
///
/// This is a total order: `compare(a, b) == compare(b, a).reverse()` and only
/// identical strings compare `Equal`.
pub fn compare(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| case_pattern(a).cmp(case_pattern(b)))
        .then_with(|| a.cmp(b))
}

/// Sort key for the first collation level.
pub fn primary_key(s: &str) -> String {
    deunicode(s).to_lowercase()
}

fn case_pattern(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(char::is_uppercase)
}
