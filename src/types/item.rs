//! Index item model

use serde::{Deserialize, Serialize};

use super::Category;

/// One entry of a pre-built documentation search index
///
/// Deserialized from the compact field names the documentation generator
/// emits (`l`, `m`, `p`, `c`, `url`, `u`, `h`, `d`). Items are read-only
/// after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexItem {
    /// Display label: module/package/type name, member signature, or tag text
    #[serde(rename = "l")]
    pub label: String,
    /// Module context (packages in a modular documentation set)
    #[serde(rename = "m", default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    /// Package context (types and members)
    #[serde(rename = "p", default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    /// Class context (members)
    #[serde(rename = "c", default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// Pre-built member anchor; when absent the anchor is derived from the label
    #[serde(rename = "url", default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
    /// Stored link of a search tag
    #[serde(rename = "u", default, skip_serializing_if = "Option::is_none")]
    pub tag_url: Option<String>,
    /// Holder of a search tag (the element that declared it)
    #[serde(rename = "h", default, skip_serializing_if = "Option::is_none")]
    pub holder: Option<String>,
    /// Description line of a search tag
    #[serde(rename = "d", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl IndexItem {
    /// Create an item with only a label
    pub fn new(label: String) -> Self {
        Self {
            label,
            module: None,
            package: None,
            class: None,
            anchor: None,
            tag_url: None,
            holder: None,
            description: None,
        }
    }

    /// The string a substring match is tested against in the given category
    ///
    /// Modules and search tags match on the label alone; packages on
    /// `module "/" label`, types on `package "." label`, members on
    /// `class "." label` (falling back to the label when the context is
    /// absent).
    pub fn search_key(&self, category: Category) -> String {
        match category {
            Category::Modules | Category::SearchTags => self.label.clone(),
            Category::Packages => match &self.module {
                Some(module) => format!("{}/{}", module, self.label),
                None => self.label.clone(),
            },
            Category::Types => match &self.package {
                Some(package) => format!("{}.{}", package, self.label),
                None => self.label.clone(),
            },
            Category::Members => match &self.class {
                Some(class) => format!("{}.{}", class, self.label),
                None => self.label.clone(),
            },
        }
    }
}
