//! Natural ordering for file and directory names
//!
//! "1) Intro", "2. Scope" and "10-Appendix" sort by their numeric prefix;
//! names without one follow in alphabetical order.

/// Leading number assumed for names without a numeric prefix.
///
/// A name that genuinely starts with "999" sorts among the unnumbered names.
pub const UNNUMBERED: u64 = 999;

/// Ordering key: number, then lower-cased remainder, then the raw name
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortKey {
    pub number: u64,
    pub remainder: String,
    pub original: String,
}

fn is_separator(c: char) -> bool {
    matches!(c, ')' | '.' | '-' | '_') || c.is_whitespace()
}

/// Derive the natural sort key of a name
pub fn sort_key(name: &str) -> SortKey {
    let digits_len = name
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(name.len(), |(i, _)| i);

    let followed_by_separator = name[digits_len..].chars().next().is_some_and(is_separator);

    let number = if digits_len > 0 && followed_by_separator {
        name[..digits_len].parse::<u64>().unwrap_or(u64::MAX)
    } else {
        UNNUMBERED
    };

    let remainder = name
        .trim_start_matches(|c: char| c.is_ascii_digit() || is_separator(c))
        .to_lowercase();

    SortKey {
        number,
        remainder,
        original: name.to_string(),
    }
}

/// Sort names in place by natural key
pub fn sort_naturally<T>(items: &mut [T], name: impl Fn(&T) -> String) {
    items.sort_by_cached_key(|item| sort_key(&name(item)));
}
