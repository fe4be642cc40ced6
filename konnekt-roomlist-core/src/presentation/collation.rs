//! Locale-aware text ordering for display columns.
//!
//! Letters are compared case-insensitively first so that case never
//! dominates alphabetical order ("apple" < "Banana" < "cherry"). Case only
//! breaks ties, lowercase first, and a final code point comparison keeps the
//! order total.

use std::cmp::Ordering;

/// Compare two display strings the way a user expects a list to be sorted
pub fn locale_aware_cmp(a: &str, b: &str) -> Ordering {
    folded(a)
        .cmp(folded(b))
        .then_with(|| case_flags(a).cmp(case_flags(b)))
        .then_with(|| a.cmp(b))
}

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

fn case_flags(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(char::is_uppercase)
}
