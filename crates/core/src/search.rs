//! Title search helpers.
//!
//! Lives in `core` so both the HTTP layer and the store implementations agree
//! on how a raw keyword turns into a query.

use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Empty keyword policy
// ---------------------------------------------------------------------------

/// What an empty (or absent) search keyword should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyKeywordPolicy {
    /// Every record matches, as an empty substring would.
    #[default]
    All,
    /// Nothing matches.
    None,
}

impl FromStr for EmptyKeywordPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "none" => Ok(Self::None),
            other => Err(format!(
                "unknown empty keyword policy '{other}' (expected 'all' or 'none')"
            )),
        }
    }
}

impl fmt::Display for EmptyKeywordPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::None => f.write_str("none"),
        }
    }
}

// ---------------------------------------------------------------------------
// Keyword resolution
// ---------------------------------------------------------------------------

/// A search request after the empty keyword policy has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleQuery {
    /// Return every record.
    All,
    /// Return nothing; the store need not be queried.
    Nothing,
    /// Case-insensitive substring match on the title.
    Substring(String),
}

/// Turn the raw keyword from a search request into a [`TitleQuery`].
///
/// Only the empty string counts as empty. Whitespace is a legitimate part of
/// a title, so `" "` is searched for literally.
///
/// # Examples
///
/// ```
/// use gamevault_core::search::{resolve_keyword, EmptyKeywordPolicy, TitleQuery};
/// assert_eq!(
///     resolve_keyword(Some("zel"), EmptyKeywordPolicy::None),
///     TitleQuery::Substring("zel".to_string())
/// );
/// assert_eq!(resolve_keyword(None, EmptyKeywordPolicy::All), TitleQuery::All);
/// assert_eq!(resolve_keyword(Some(""), EmptyKeywordPolicy::None), TitleQuery::Nothing);
/// ```
pub fn resolve_keyword(keyword: Option<&str>, policy: EmptyKeywordPolicy) -> TitleQuery {
    match keyword {
        Some(k) if !k.is_empty() => TitleQuery::Substring(k.to_string()),
        _ => match policy {
            EmptyKeywordPolicy::All => TitleQuery::All,
            EmptyKeywordPolicy::None => TitleQuery::Nothing,
        },
    }
}

/// Case-insensitive substring test used by in-process stores.
///
/// An empty needle matches everything.
pub fn title_contains(title: &str, needle: &str) -> bool {
    title.to_lowercase().contains(&needle.to_lowercase())
}
