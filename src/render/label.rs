//! Result rows and highlight spans
//!
//! A row's label is split into spans; the span covering the first
//! case-insensitive occurrence of the literal query is marked highlighted.

use regex::{Regex, RegexBuilder};

use crate::types::{Category, MatchItem, SearchResult};

/// A run of label text, highlighted when it matched the query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSpan {
    pub text: String,
    pub highlight: bool,
}

impl LabelSpan {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            highlight: false,
        }
    }

    fn highlighted(text: &str) -> Self {
        Self {
            text: text.to_string(),
            highlight: true,
        }
    }
}

/// One renderable result row
#[derive(Debug, Clone)]
pub struct ResultRow {
    pub category: Category,
    pub spans: Vec<LabelSpan>,
    /// Holder shown for search tags
    pub holder: Option<String>,
    /// Description line shown for search tags
    pub description: Option<String>,
}

impl ResultRow {
    /// The label with highlight markers dropped
    pub fn plain_label(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Locates the first case-insensitive occurrence of the literal query
#[derive(Debug)]
pub struct Highlighter {
    pattern: Regex,
}

impl Highlighter {
    /// Build a highlighter for the literal query term
    pub fn new(term: &str) -> SearchResult<Self> {
        let pattern = RegexBuilder::new(&regex::escape(term))
            .case_insensitive(true)
            .build()?;
        Ok(Self { pattern })
    }

    /// Split `text` into spans, marking the first match
    pub fn spans(&self, text: &str) -> Vec<LabelSpan> {
        match self.pattern.find(text) {
            Some(found) if !found.as_str().is_empty() => {
                let mut spans = Vec::with_capacity(3);
                if found.start() > 0 {
                    spans.push(LabelSpan::plain(&text[..found.start()]));
                }
                spans.push(LabelSpan::highlighted(found.as_str()));
                if found.end() < text.len() {
                    spans.push(LabelSpan::plain(&text[found.end()..]));
                }
                spans
            }
            _ => vec![LabelSpan::plain(text)],
        }
    }
}

/// Build the display row for one match
///
/// Display labels vary by category: plain label (modules, search tags),
/// module-qualified (packages), package-qualified (types); members render
/// the package as an unhighlighted prefix ahead of the highlighted
/// `class "." label`.
pub(crate) fn build_row(m: &MatchItem, highlighter: &Highlighter) -> ResultRow {
    let item = &m.item;

    let spans = match m.category {
        Category::Modules | Category::SearchTags => highlighter.spans(&item.label),
        Category::Packages | Category::Types => highlighter.spans(&item.search_key(m.category)),
        Category::Members => {
            let mut spans = Vec::new();
            if let Some(package) = &item.package {
                spans.push(LabelSpan::plain(&format!("{}.", package)));
            }
            spans.extend(highlighter.spans(&item.search_key(Category::Members)));
            spans
        }
    };

    let (holder, description) = if m.category == Category::SearchTags {
        (item.holder.clone(), item.description.clone())
    } else {
        (None, None)
    };

    ResultRow {
        category: m.category,
        spans,
        holder,
        description,
    }
}
