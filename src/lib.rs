//! Doc Search
//!
//! In-memory search and autocomplete over the pre-built indexes emitted
//! by an API documentation generator.
//!
//! # Features
//!
//! - **Two-Tier Ranking**: Exact matches first, substring matches second,
//!   both preserving original index order
//! - **Fixed Category Grouping**: Modules, Packages, Types, Members,
//!   SearchTags, always in that order
//! - **Pluggable Rendering**: Category headers and highlight spans through
//!   a strategy trait, with plain-text and HTML strategies built in
//! - **Selection Navigation**: Relative documentation URLs plus a
//!   window/frame target
//! - **Index Loading**: Reads the generator's `*-search-index` files
//!
//! # Modules
//!
//! - `types`: Core data structures (IndexItem, Category, SearchIndexes)
//! - `search`: Search component and query pipeline
//! - `render`: Rendering strategies and highlight spans
//! - `link`: Anchor encoding and selection navigation
//! - `field`: Search input watermark/focus state
//! - `loader`: Generated index file loading
//!
//! # Example
//!
//! ```
//! use doc_search::{IndexItem, SearchComponent, SearchConfig, SearchIndexes};
//!
//! let mut string_type = IndexItem::new("String".to_string());
//! string_type.package = Some("java.lang".to_string());
//!
//! let mut indexes = SearchIndexes::new();
//! indexes.types = Some(vec![string_type]);
//!
//! let component = SearchComponent::new(SearchConfig::new(), indexes);
//! let entries = component.query("string").unwrap();
//! assert_eq!(entries.len(), 1);
//! ```

pub mod field;
pub mod link;
pub mod loader;
pub mod render;
pub mod search;
pub mod types;

// Re-export commonly used items at crate root
pub use field::{SearchField, WATERMARK};
pub use link::{member_anchor, Navigation, NavigationTarget, UNNAMED_PACKAGE};
pub use render::{HtmlRenderer, LabelSpan, PlainRenderer, RenderStrategy, ResultRow};
pub use search::{CategoryTally, IndexStats, QueryMatcher, SearchComponent};
pub use types::{
    Category, IndexItem, MatchItem, ResultEntry, SearchConfig, SearchIndexes, SearchResult,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
