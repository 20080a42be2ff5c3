//! Locale-aware text ordering.
//!
//! Text is compared on a collation key first (decomposed, combining marks removed,
//! lowercased) so that `"São Paulo"` sorts next to `"Sao Paulo"` and before `"Sergipe"`.
//! Ties are broken with lowercase before uppercase and finally on the raw text, which
//! keeps the ordering total.

use std::cmp::Ordering;

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Primary collation key for a piece of text.
#[must_use]
pub fn collation_key(value: &str) -> String {
    value
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Compare two strings the way a user reading the table expects.
#[must_use]
pub fn compare(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| case_order(a, b))
        .then_with(|| a.cmp(b))
}

fn case_order(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(char::is_uppercase)
        .cmp(b.chars().map(char::is_uppercase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_case_at_primary_level() {
        assert_eq!(compare("acme", "Beta"), Ordering::Less);
        assert_eq!(compare("Zeta", "alpha"), Ordering::Greater);
    }

    #[test]
    fn lowercase_sorts_before_uppercase_on_ties() {
        assert_eq!(compare("recife", "Recife"), Ordering::Less);
        assert_eq!(compare("Recife", "recife"), Ordering::Greater);
    }

    #[test]
    fn accents_sort_with_their_base_letter() {
        assert_eq!(compare("São Paulo", "Sergipe"), Ordering::Less);
        assert_eq!(compare("Sao Paulo", "São Paulo"), Ordering::Less);
    }

    #[test]
    fn status_names_order_lexicographically() {
        assert_eq!(compare("AtDock", "InTransit"), Ordering::Less);
    }

    #[test]
    fn equal_text_is_equal() {
        assert_eq!(compare("Natal", "Natal"), Ordering::Equal);
    }
}
