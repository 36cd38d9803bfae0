//! Plain-text rendering for terminal hosts

use crate::types::{Category, ResultEntry};

use super::{RenderStrategy, ResultRow};

/// Numbered plain-text lines, one result per line
///
/// Row numbers run across the whole list so a host can select by number.
#[derive(Debug, Default)]
pub struct PlainRenderer {
    lines: Vec<String>,
    item_count: usize,
}

impl PlainRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered lines in display order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Result rows rendered so far (headers and descriptions excluded)
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl RenderStrategy for PlainRenderer {
    fn category_header(&mut self, category: Category) {
        self.lines.push(format!("{}:", category.label()));
    }

    fn item(&mut self, row: &ResultRow) {
        self.item_count += 1;
        let mut line = format!("  {:>3}. {}", self.item_count, row.plain_label());
        if let Some(holder) = &row.holder {
            line.push_str(&format!(" ({})", holder));
        }
        self.lines.push(line);
        if let Some(description) = &row.description {
            self.lines.push(format!("       {}", description));
        }
    }

    fn no_results(&mut self) {
        self.lines.push(ResultEntry::NO_RESULTS_LABEL.to_string());
    }
}
