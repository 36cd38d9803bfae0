//! Query pipeline: partition, order, cap
//!
//! For each supplied index, in fixed category order, items split into an
//! exact run and a secondary run, both preserving original index order,
//! exact first. The display cap is the maximum exact count across
//! categories floored at 500, applied per category during final emission.

use rayon::prelude::*;

use crate::types::{Category, IndexItem, MatchItem, ResultEntry, SearchIndexes};

use super::matcher::QueryMatcher;
use super::tally::{CategoryTally, DISPLAY_FLOOR};

/// Index size above which classification runs in parallel
const PARALLEL_SCAN_THRESHOLD: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchKind {
    Exact,
    Secondary,
    Miss,
}

/// Run the full filter/rank/cap pipeline for one query
pub(crate) fn run(indexes: &SearchIndexes, matcher: &QueryMatcher) -> Vec<ResultEntry> {
    let mut combined: Vec<MatchItem> = Vec::new();
    let mut tally = CategoryTally::new();

    for category in Category::ALL {
        let items = match indexes.category(category) {
            Some(items) => items,
            None => continue,
        };

        let kinds = classify(items, category, matcher);

        for (item, kind) in items.iter().zip(&kinds) {
            if *kind == MatchKind::Exact {
                tally.record_exact(category);
                combined.push(MatchItem {
                    category,
                    item: item.clone(),
                });
            }
        }
        for (item, kind) in items.iter().zip(&kinds) {
            if *kind == MatchKind::Secondary {
                combined.push(MatchItem {
                    category,
                    item: item.clone(),
                });
            }
        }
    }

    let cap = tally.display_cap(DISPLAY_FLOOR);
    let mut entries: Vec<ResultEntry> = combined
        .into_iter()
        .filter(|m| tally.admit(m.category, cap))
        .map(ResultEntry::Match)
        .collect();

    if entries.is_empty() {
        entries.push(ResultEntry::NoResults);
    }
    entries
}

/// Classify every item of one index, preserving order
fn classify(items: &[IndexItem], category: Category, matcher: &QueryMatcher) -> Vec<MatchKind> {
    if items.len() > PARALLEL_SCAN_THRESHOLD {
        items
            .par_iter()
            .map(|item| classify_item(item, category, matcher))
            .collect()
    } else {
        items
            .iter()
            .map(|item| classify_item(item, category, matcher))
            .collect()
    }
}

fn classify_item(item: &IndexItem, category: Category, matcher: &QueryMatcher) -> MatchKind {
    let key = item.search_key(category);

    if matcher.is_exact(&item.label) {
        return MatchKind::Exact;
    }
    // Packages, types and members also match exactly on the qualified name
    if qualified_exact(category) && key != item.label && matcher.is_exact(&key) {
        return MatchKind::Exact;
    }
    if matcher.is_substring(&key) {
        return MatchKind::Secondary;
    }
    MatchKind::Miss
}

fn qualified_exact(category: Category) -> bool {
    matches!(
        category,
        Category::Packages | Category::Types | Category::Members
    )
}
