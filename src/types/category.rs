//! Search categories

use std::fmt;

use serde::{Deserialize, Serialize};

/// Index category, in fixed display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Modules,
    Packages,
    Types,
    Members,
    SearchTags,
}

impl Category {
    /// All categories in combined-result order
    pub const ALL: [Category; 5] = [
        Category::Modules,
        Category::Packages,
        Category::Types,
        Category::Members,
        Category::SearchTags,
    ];

    /// Number of categories
    pub const COUNT: usize = 5;

    /// Display label used for result group headers
    pub fn label(self) -> &'static str {
        match self {
            Category::Modules => "Modules",
            Category::Packages => "Packages",
            Category::Types => "Types",
            Category::Members => "Members",
            Category::SearchTags => "SearchTags",
        }
    }

    /// Position in the fixed category order
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_is_modules_packages_types_members_tags() {
        let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec!["Modules", "Packages", "Types", "Members", "SearchTags"]
        );
    }

    #[test]
    fn index_matches_fixed_order() {
        for (i, category) in Category::ALL.into_iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }
}
