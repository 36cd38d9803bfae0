//! Data types for the doc-search crate
//!
//! This module contains the core data structures shared across the
//! component: the index item model, the category enum, the index set,
//! configuration, and query result entries.

mod category;
mod config;
mod entry;
mod indexes;
mod item;

pub use category::Category;
pub use config::SearchConfig;
pub use entry::{MatchItem, ResultEntry};
pub use indexes::SearchIndexes;
pub use item::IndexItem;

/// Result type for search operations
pub type SearchResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;
