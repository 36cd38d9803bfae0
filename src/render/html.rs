//! HTML rendering
//!
//! Produces the categorized dropdown markup a web host embeds: category
//! rows, result anchors, a highlight span around the matched substring,
//! and holder/description spans for search tags.

use crate::types::{Category, ResultEntry};

use super::{LabelSpan, RenderStrategy, ResultRow};

/// Categorized `<ul>` dropdown markup
#[derive(Debug, Default)]
pub struct HtmlRenderer {
    body: String,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The assembled list markup
    pub fn into_html(self) -> String {
        format!("<ul class=\"search-results\">{}</ul>", self.body)
    }

    fn push_spans(&mut self, spans: &[LabelSpan]) {
        for span in spans {
            if span.highlight {
                self.body.push_str("<span class=\"result-highlight\">");
                self.body.push_str(&escape(&span.text));
                self.body.push_str("</span>");
            } else {
                self.body.push_str(&escape(&span.text));
            }
        }
    }
}

impl RenderStrategy for HtmlRenderer {
    fn category_header(&mut self, category: Category) {
        self.body.push_str("<li class=\"result-category\">");
        self.body.push_str(category.label());
        self.body.push_str("</li>");
    }

    fn item(&mut self, row: &ResultRow) {
        self.body.push_str("<li class=\"result-item\"><a href=\"#\">");
        self.push_spans(&row.spans);
        if let Some(holder) = &row.holder {
            self.body
                .push_str("<span class=\"search-tag-holder-result\"> (");
            self.body.push_str(&escape(holder));
            self.body.push_str(")</span>");
        }
        if let Some(description) = &row.description {
            self.body
                .push_str("<br><span class=\"search-tag-desc-result\">");
            self.body.push_str(&escape(description));
            self.body.push_str("</span>");
        }
        self.body.push_str("</a></li>");
    }

    fn no_results(&mut self) {
        self.body.push_str("<li class=\"result-item\">");
        self.body.push_str(ResultEntry::NO_RESULTS_LABEL);
        self.body.push_str("</li>");
    }
}

/// Minimal HTML escaping for text content
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
