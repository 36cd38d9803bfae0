//! Rendering strategies for query results
//!
//! The host UI supplies a [`RenderStrategy`]; the walk inserts a category
//! header whenever the category changes. Results arrive already grouped
//! from the pipeline, so one header per category group is emitted.

mod html;
mod label;
mod plain;

pub use html::HtmlRenderer;
pub use label::{Highlighter, LabelSpan, ResultRow};
pub use plain::PlainRenderer;

use crate::types::{Category, ResultEntry, SearchResult};

/// Hooks a host UI implements to display a result list
pub trait RenderStrategy {
    /// A category group starts
    fn category_header(&mut self, category: Category);

    /// One result row
    fn item(&mut self, row: &ResultRow);

    /// The "No results found" sentinel row
    fn no_results(&mut self);
}

/// Walk a result list in order, invoking the strategy
///
/// `term` is the literal query used for highlighting.
pub fn render_entries(
    term: &str,
    entries: &[ResultEntry],
    strategy: &mut dyn RenderStrategy,
) -> SearchResult<()> {
    let highlighter = Highlighter::new(term)?;
    let mut current: Option<Category> = None;

    for entry in entries {
        match entry {
            ResultEntry::Match(m) => {
                if current != Some(m.category) {
                    strategy.category_header(m.category);
                    current = Some(m.category);
                }
                strategy.item(&label::build_row(m, &highlighter));
            }
            ResultEntry::NoResults => strategy.no_results(),
        }
    }
    Ok(())
}
