//! Generated index file loading
//!
//! The documentation generator emits one file per index, either a plain
//! JSON array (`member-search-index.json`) or a script assignment wrapper
//! (`memberSearchIndex = [{"p":"java.lang",...}];`). A missing file means
//! that index is absent; malformed entries are skipped.

use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde_json::Value;

use crate::types::{IndexItem, SearchIndexes, SearchResult};

/// Well-known index file stems, one per category
pub const MODULE_INDEX: &str = "module-search-index";
pub const PACKAGE_INDEX: &str = "package-search-index";
pub const TYPE_INDEX: &str = "type-search-index";
pub const MEMBER_INDEX: &str = "member-search-index";
pub const TAG_INDEX: &str = "tag-search-index";

/// Load all five indexes from a documentation output directory
pub fn load_directory(dir: &Path) -> SearchResult<SearchIndexes> {
    let indexes = SearchIndexes {
        modules: load_index(dir, MODULE_INDEX)?,
        packages: load_index(dir, PACKAGE_INDEX)?,
        types: load_index(dir, TYPE_INDEX)?,
        members: load_index(dir, MEMBER_INDEX)?,
        tags: load_index(dir, TAG_INDEX)?,
    };
    debug!(
        "loaded {} searchable items from {}",
        indexes.len(),
        dir.display()
    );
    Ok(indexes)
}

/// Load one index by file stem, trying `.json` then `.js`
fn load_index(dir: &Path, stem: &str) -> SearchResult<Option<Vec<IndexItem>>> {
    for ext in ["json", "js"] {
        let path = dir.join(format!("{}.{}", stem, ext));
        if !path.exists() {
            continue;
        }

        let content = fs::read_to_string(&path)?;
        let json = array_slice(&content)
            .ok_or_else(|| format!("no JSON array found in {}", path.display()))?;
        let values: Vec<Value> = serde_json::from_str(json)?;

        let mut items = Vec::with_capacity(values.len());
        for value in values {
            match serde_json::from_value::<IndexItem>(value) {
                Ok(item) => items.push(item),
                Err(e) => warn!("skipping malformed entry in {}: {}", path.display(), e),
            }
        }
        return Ok(Some(items));
    }
    Ok(None)
}

/// The bracketed array inside a script assignment, or the bare array itself
fn array_slice(content: &str) -> Option<&str> {
    let start = content.find('[')?;
    let end = content.rfind(']')?;
    if end < start {
        return None;
    }
    Some(&content[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_slice_strips_the_assignment_wrapper() {
        let content = r#"typeSearchIndex = [{"p":"java.lang","l":"String"}];"#;
        assert_eq!(
            array_slice(content),
            Some(r#"[{"p":"java.lang","l":"String"}]"#)
        );
    }

    #[test]
    fn array_slice_accepts_a_bare_array() {
        assert_eq!(array_slice(r#"[{"l":"x"}]"#), Some(r#"[{"l":"x"}]"#));
        assert_eq!(array_slice("no array here"), None);
    }

    #[test]
    fn missing_files_mean_absent_indexes() {
        let dir = std::env::temp_dir().join("doc-search-absent-index-test");
        let _ = fs::create_dir_all(&dir);
        assert!(load_index(&dir, MODULE_INDEX).unwrap().is_none());
    }
}
