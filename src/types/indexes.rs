//! Index set container

use super::{Category, IndexItem};

/// The five externally supplied search indexes
///
/// Each index is absent-or-present; absent indexes are skipped by the
/// query pipeline.
#[derive(Debug, Clone, Default)]
pub struct SearchIndexes {
    pub modules: Option<Vec<IndexItem>>,
    pub packages: Option<Vec<IndexItem>>,
    pub types: Option<Vec<IndexItem>>,
    pub members: Option<Vec<IndexItem>>,
    pub tags: Option<Vec<IndexItem>>,
}

impl SearchIndexes {
    /// Create an empty index set (all five absent)
    pub fn new() -> Self {
        Self::default()
    }

    /// Items of one category, if that index was supplied
    pub fn category(&self, category: Category) -> Option<&[IndexItem]> {
        let items = match category {
            Category::Modules => &self.modules,
            Category::Packages => &self.packages,
            Category::Types => &self.types,
            Category::Members => &self.members,
            Category::SearchTags => &self.tags,
        };
        items.as_deref()
    }

    /// Total searchable items across supplied indexes
    pub fn len(&self) -> usize {
        Category::ALL
            .iter()
            .filter_map(|c| self.category(*c))
            .map(<[IndexItem]>::len)
            .sum()
    }

    /// True when no index holds any item
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_indexes_yield_none() {
        let mut indexes = SearchIndexes::new();
        indexes.types = Some(vec![IndexItem::new("String".to_string())]);

        assert!(indexes.category(Category::Modules).is_none());
        assert_eq!(indexes.category(Category::Types).map(<[_]>::len), Some(1));
        assert_eq!(indexes.len(), 1);
        assert!(!indexes.is_empty());
    }

    #[test]
    fn empty_set_counts_zero() {
        assert!(SearchIndexes::new().is_empty());
    }
}
