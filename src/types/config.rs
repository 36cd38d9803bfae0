//! Search component configuration
//!
//! Everything a hosting page supplies ambiently (a root path prefix, a
//! named target frame) is an explicit option passed to the component at
//! construction.

/// Configuration for a [`SearchComponent`](crate::SearchComponent)
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Path prefix applied to every generated link
    pub root_path: String,
    /// Named sibling frame to navigate; `None` targets the top-level window
    pub frame_target: Option<String>,
    /// Minimum query length before the pipeline runs
    pub min_length: usize,
}

impl SearchConfig {
    /// Default configuration: empty root path, top-level window, length 1
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            root_path: String::new(),
            frame_target: None,
            min_length: 1,
        }
    }
}
