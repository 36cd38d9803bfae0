//! Query result entries

use serde::{Deserialize, Serialize};

use super::{Category, IndexItem};

/// A matched index item tagged with its category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchItem {
    pub category: Category,
    pub item: IndexItem,
}

/// One entry of a query result list
///
/// A non-empty result list holds only matches; an empty result set is
/// reported as the single sentinel entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ResultEntry {
    /// A categorized match
    Match(MatchItem),
    /// The "No results found" sentinel
    NoResults,
}

impl ResultEntry {
    /// Label shown for the sentinel entry
    pub const NO_RESULTS_LABEL: &'static str = "No results found";

    /// True for the sentinel
    pub fn is_sentinel(&self) -> bool {
        matches!(self, ResultEntry::NoResults)
    }

    /// The contained match, unless this is the sentinel
    pub fn as_match(&self) -> Option<&MatchItem> {
        match self {
            ResultEntry::Match(m) => Some(m),
            ResultEntry::NoResults => None,
        }
    }
}
