//! Search component and query pipeline
//!
//! The component owns the configuration and the five indexes and exposes
//! the per-keystroke operations:
//! - `query`: filter/rank/cap all indexes against a term
//! - `render`: walk a result list through a rendering strategy
//! - `resolve`: turn a selected entry into a navigation URL and target

mod matcher;
mod pipeline;
mod tally;

use std::path::Path;

use log::debug;

use crate::link::{self, Navigation};
use crate::loader;
use crate::render::{self, RenderStrategy};
use crate::types::{Category, ResultEntry, SearchConfig, SearchIndexes, SearchResult};

pub use matcher::QueryMatcher;
pub use tally::CategoryTally;

/// Searchable item counts per supplied index
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexStats {
    pub modules: usize,
    pub packages: usize,
    pub types: usize,
    pub members: usize,
    pub tags: usize,
}

impl IndexStats {
    /// Total items across all supplied indexes
    pub fn total(&self) -> usize {
        self.modules + self.packages + self.types + self.members + self.tags
    }
}

/// In-memory search over the five documentation indexes
pub struct SearchComponent {
    config: SearchConfig,
    indexes: SearchIndexes,
}

impl SearchComponent {
    /// Create a component over already-loaded indexes
    pub fn new(config: SearchConfig, indexes: SearchIndexes) -> Self {
        Self { config, indexes }
    }

    /// Create a component by loading generated index files from a directory
    pub fn from_directory(config: SearchConfig, dir: &Path) -> SearchResult<Self> {
        let indexes = loader::load_directory(dir)?;
        Ok(Self::new(config, indexes))
    }

    /// The configuration this component was constructed with
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The indexes this component searches
    pub fn indexes(&self) -> &SearchIndexes {
        &self.indexes
    }

    /// Filter and rank all indexes against a query term
    ///
    /// Queries shorter than the configured minimum yield an empty list.
    /// An empty result set yields the single "No results found" sentinel.
    pub fn query(&self, term: &str) -> SearchResult<Vec<ResultEntry>> {
        if term.chars().count() < self.config.min_length {
            return Ok(Vec::new());
        }

        let matcher = QueryMatcher::new(term)?;
        let entries = pipeline::run(&self.indexes, &matcher);
        debug!("query '{}': {} result entries", term, entries.len());
        Ok(entries)
    }

    /// Render query results through a strategy, grouped under category headers
    pub fn render(
        &self,
        term: &str,
        entries: &[ResultEntry],
        strategy: &mut dyn RenderStrategy,
    ) -> SearchResult<()> {
        render::render_entries(term, entries, strategy)
    }

    /// Resolve a selected entry to its navigation URL and target
    ///
    /// The sentinel resolves to `None`.
    pub fn resolve(&self, entry: &ResultEntry) -> Option<Navigation> {
        link::resolve(entry, &self.config)
    }

    /// Item counts for the supplied indexes
    pub fn stats(&self) -> IndexStats {
        let count = |category| self.indexes.category(category).map_or(0, <[_]>::len);
        IndexStats {
            modules: count(Category::Modules),
            packages: count(Category::Packages),
            types: count(Category::Types),
            members: count(Category::Members),
            tags: count(Category::SearchTags),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IndexItem;

    fn component_with_types(labels: &[&str]) -> SearchComponent {
        let mut indexes = SearchIndexes::new();
        indexes.types = Some(
            labels
                .iter()
                .map(|l| {
                    let mut item = IndexItem::new((*l).to_string());
                    item.package = Some("demo".to_string());
                    item
                })
                .collect(),
        );
        SearchComponent::new(SearchConfig::new(), indexes)
    }

    #[test]
    fn query_below_min_length_is_silent() {
        let component = component_with_types(&["Map"]);
        assert!(component.query("").unwrap().is_empty());
    }

    #[test]
    fn query_runs_the_pipeline() {
        let component = component_with_types(&["Map", "HashMap"]);
        let entries = component.query("map").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].as_match().unwrap().item.label, "Map");
    }

    #[test]
    fn stats_count_supplied_indexes() {
        let component = component_with_types(&["Map", "HashMap"]);
        let stats = component.stats();
        assert_eq!(stats.types, 2);
        assert_eq!(stats.modules, 0);
        assert_eq!(stats.total(), 2);
    }
}
