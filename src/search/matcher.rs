//! Literal query matching
//!
//! Builds the matcher pair the pipeline tests items against: an exact
//! matcher (full-string) and a secondary matcher (substring), both
//! case-insensitive compilations of the regex-escaped literal term.

use regex::{Regex, RegexBuilder};

use crate::types::SearchResult;

/// Case-insensitive exact/substring matcher pair for one query term
#[derive(Debug)]
pub struct QueryMatcher {
    exact: Regex,
    secondary: Regex,
}

impl QueryMatcher {
    /// Build matchers from the literal query term
    pub fn new(term: &str) -> SearchResult<Self> {
        let escaped = regex::escape(term);
        let exact = RegexBuilder::new(&format!("^{}$", escaped))
            .case_insensitive(true)
            .build()?;
        let secondary = RegexBuilder::new(&escaped)
            .case_insensitive(true)
            .build()?;
        Ok(Self { exact, secondary })
    }

    /// Case-insensitive full-string match
    pub fn is_exact(&self, text: &str) -> bool {
        self.exact.is_match(text)
    }

    /// Case-insensitive substring match
    pub fn is_substring(&self, text: &str) -> bool {
        self.secondary.is_match(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_is_full_string_and_case_insensitive() {
        let matcher = QueryMatcher::new("map").unwrap();
        assert!(matcher.is_exact("Map"));
        assert!(matcher.is_exact("MAP"));
        assert!(!matcher.is_exact("HashMap"));
        assert!(!matcher.is_exact("map "));
    }

    #[test]
    fn secondary_is_substring() {
        let matcher = QueryMatcher::new("map").unwrap();
        assert!(matcher.is_substring("HashMap"));
        assert!(matcher.is_substring("java.util.Map"));
        assert!(!matcher.is_substring("List"));
    }

    #[test]
    fn term_is_matched_literally() {
        // Regex metacharacters in member signatures must not be interpreted
        let matcher = QueryMatcher::new("get(int)").unwrap();
        assert!(matcher.is_exact("get(int)"));
        assert!(matcher.is_substring("List.get(int)"));
        assert!(!matcher.is_substring("getXint?"));
    }

    #[test]
    fn same_term_always_builds_the_same_matcher() {
        let a = QueryMatcher::new("foo.bar").unwrap();
        let b = QueryMatcher::new("foo.bar").unwrap();
        for text in ["foo.bar", "fooxbar", "Foo.Bar", "prefix foo.bar suffix"] {
            assert_eq!(a.is_exact(text), b.is_exact(text));
            assert_eq!(a.is_substring(text), b.is_substring(text));
        }
    }
}
