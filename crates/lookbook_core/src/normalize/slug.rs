//! URL slug derivation.
//!
//! # Invariants
//! - Output only contains `[a-z0-9-]`, never starts or ends with `-`, and
//!   never contains `--`.
//! - `slugify(slugify(x)) == slugify(x)` for every input.
//! - Distinct names may map to the same slug; callers must not assume
//!   uniqueness.

use once_cell::sync::Lazy;
use regex::Regex;

static DISALLOWED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9\s-]+").expect("valid slug charset regex"));
static SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s-]+").expect("valid slug separator regex"));

/// Derives a URL slug from a display name.
///
/// Lowercases, strips punctuation, and collapses whitespace runs into a
/// single hyphen. Existing hyphens survive so the function is idempotent.
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let stripped = DISALLOWED_RE.replace_all(&lowered, "");
    let joined = SEPARATOR_RE.replace_all(stripped.trim(), "-");
    joined.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn lowercases_and_hyphenates_whitespace() {
        assert_eq!(slugify("Jane Doe"), "jane-doe");
        assert_eq!(slugify("  Jane \t  Doe  "), "jane-doe");
    }

    #[test]
    fn strips_punctuation() {
        assert_eq!(slugify("O'Brien & Co."), "obrien-co");
        assert_eq!(slugify("snake_case name!"), "snakecase-name");
    }

    #[test]
    fn is_idempotent() {
        for name in ["Jane Doe", "Jean-Luc  Picard", "A -- B", "  --x--  ", "Ünïcode Näme"] {
            let once = slugify(name);
            assert_eq!(slugify(&once), once, "input `{name}`");
        }
    }

    #[test]
    fn output_charset_is_restricted() {
        for name in ["Hello, World!", "-lead", "trail-", "tab\tsep", "émile zola", "", "!!!"] {
            let slug = slugify(name);
            assert!(slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
            assert!(!slug.starts_with('-'));
            assert!(!slug.ends_with('-'));
            assert!(!slug.contains("--"));
        }
    }
}
