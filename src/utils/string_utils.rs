//! Character-aware string helpers
//!
//! Wiki text is full of multi-byte characters (full-width colons, bullets,
//! non-breaking spaces), so lengths are counted in characters, never bytes.

/// Number of Unicode characters in `s`.
#[inline]
#[must_use]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Strip an ASCII case-insensitive suffix, returning the remainder.
#[must_use]
pub fn strip_suffix_ci<'a>(s: &'a str, suffix: &str) -> Option<&'a str> {
    let split = s.len().checked_sub(suffix.len())?;
    if !s.is_char_boundary(split) {
        return None;
    }
    let (head, tail) = s.split_at(split);
    tail.eq_ignore_ascii_case(suffix).then_some(head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_len_counts_characters() {
        assert_eq!(char_len("Cost：50"), 7);
        assert_eq!(char_len(""), 0);
    }

    #[test]
    fn strip_suffix_ci_matches_any_case() {
        assert_eq!(strip_suffix_ci("Legendary Items", "items"), Some("Legendary "));
        assert_eq!(strip_suffix_ci("Boots", "items"), None);
        assert_eq!(strip_suffix_ci("ms", "items"), None);
    }
}
