//! Selection navigation
//!
//! Builds the relative documentation URL for a selected result and pairs
//! it with the configured navigation target.

mod anchor;

pub use anchor::member_anchor;

use log::warn;

use crate::types::{Category, IndexItem, MatchItem, ResultEntry, SearchConfig};

/// Package label the generator uses for the unnamed (default) package
pub const UNNAMED_PACKAGE: &str = "<Unnamed>";

/// Where the host should apply a navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    /// The top-level window
    TopWindow,
    /// A named sibling frame
    Frame(String),
}

/// A resolved navigation: href plus target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub href: String,
    pub target: NavigationTarget,
}

/// Resolve a selected entry; the sentinel yields no navigation
pub(crate) fn resolve(entry: &ResultEntry, config: &SearchConfig) -> Option<Navigation> {
    let m = entry.as_match()?;

    let target = match &config.frame_target {
        Some(name) => NavigationTarget::Frame(name.clone()),
        None => NavigationTarget::TopWindow,
    };
    Some(Navigation {
        href: format!("{}{}", config.root_path, category_url(m)),
        target,
    })
}

/// Relative URL for one match, by category
fn category_url(m: &MatchItem) -> String {
    let item = &m.item;
    match m.category {
        Category::Modules => format!("{}-summary.html", item.label),
        Category::Packages => format!("{}/package-summary.html", package_path(&item.label)),
        Category::Types => match named_package(item) {
            Some(package) => format!("{}/{}.html", package_path(package), item.label),
            None => format!("{}.html", item.label),
        },
        Category::Members => {
            let class = item.class.as_deref().unwrap_or("");
            let page = match named_package(item) {
                Some(package) => format!("{}/{}.html", package_path(package), class),
                None => format!("{}.html", class),
            };
            let fragment = match &item.anchor {
                Some(anchor) => anchor.clone(),
                None => member_anchor(&item.label),
            };
            format!("{}#{}", page, fragment)
        }
        Category::SearchTags => match &item.tag_url {
            Some(url) => url.clone(),
            None => {
                warn!("search tag '{}' has no stored url", item.label);
                String::new()
            }
        },
    }
}

/// Dotted package label as a directory path
fn package_path(label: &str) -> String {
    label.replace('.', "/")
}

/// The package context, unless absent or the unnamed package
fn named_package(item: &IndexItem) -> Option<&str> {
    match item.package.as_deref() {
        Some(UNNAMED_PACKAGE) | None => None,
        Some(package) => Some(package),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn match_item(category: Category, item: IndexItem) -> ResultEntry {
        ResultEntry::Match(MatchItem { category, item })
    }

    #[test]
    fn module_url() {
        let entry = match_item(Category::Modules, IndexItem::new("java.base".to_string()));
        let nav = resolve(&entry, &SearchConfig::new()).unwrap();
        assert_eq!(nav.href, "java.base-summary.html");
        assert_eq!(nav.target, NavigationTarget::TopWindow);
    }

    #[test]
    fn package_url_replaces_dots() {
        let entry = match_item(Category::Packages, IndexItem::new("java.util.zip".to_string()));
        let nav = resolve(&entry, &SearchConfig::new()).unwrap();
        assert_eq!(nav.href, "java/util/zip/package-summary.html");
    }

    #[test]
    fn type_url_with_and_without_package() {
        let mut item = IndexItem::new("String".to_string());
        item.package = Some("java.lang".to_string());
        let entry = match_item(Category::Types, item);
        let nav = resolve(&entry, &SearchConfig::new()).unwrap();
        assert_eq!(nav.href, "java/lang/String.html");

        let mut unnamed = IndexItem::new("Scratch".to_string());
        unnamed.package = Some(UNNAMED_PACKAGE.to_string());
        let entry = match_item(Category::Types, unnamed);
        let nav = resolve(&entry, &SearchConfig::new()).unwrap();
        assert_eq!(nav.href, "Scratch.html");
    }

    #[test]
    fn member_url_uses_stored_or_derived_anchor() {
        let mut item = IndexItem::new("length()".to_string());
        item.package = Some("java.lang".to_string());
        item.class = Some("String".to_string());
        let entry = match_item(Category::Members, item);
        let nav = resolve(&entry, &SearchConfig::new()).unwrap();
        assert_eq!(nav.href, "java/lang/String.html#length--");

        let mut stored = IndexItem::new("length()".to_string());
        stored.package = Some("java.lang".to_string());
        stored.class = Some("String".to_string());
        stored.anchor = Some("length()".to_string());
        let entry = match_item(Category::Members, stored);
        let nav = resolve(&entry, &SearchConfig::new()).unwrap();
        assert_eq!(nav.href, "java/lang/String.html#length()");
    }

    #[test]
    fn tag_url_is_stored_verbatim() {
        let mut item = IndexItem::new("serialized form".to_string());
        item.tag_url = Some("serialized-form.html#java.awt.Component".to_string());
        let entry = match_item(Category::SearchTags, item);
        let nav = resolve(&entry, &SearchConfig::new()).unwrap();
        assert_eq!(nav.href, "serialized-form.html#java.awt.Component");
    }

    #[test]
    fn root_path_prefixes_and_frame_targets() {
        let mut config = SearchConfig::new();
        config.root_path = "../../".to_string();
        config.frame_target = Some("classFrame".to_string());

        let entry = match_item(Category::Modules, IndexItem::new("java.base".to_string()));
        let nav = resolve(&entry, &config).unwrap();
        assert_eq!(nav.href, "../../java.base-summary.html");
        assert_eq!(nav.target, NavigationTarget::Frame("classFrame".to_string()));
    }

    #[test]
    fn sentinel_navigates_nowhere() {
        assert!(resolve(&ResultEntry::NoResults, &SearchConfig::new()).is_none());
    }
}
