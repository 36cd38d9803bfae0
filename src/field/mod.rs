//! Search input field behavior
//!
//! Watermark, focus and caret state of the search box, kept as an explicit
//! state machine the host UI drives from its own events.

/// Placeholder text shown while the field is untouched
pub const WATERMARK: &str = "Search";

/// Search input state: value, watermark, focus, caret
#[derive(Debug, Clone)]
pub struct SearchField {
    value: String,
    watermark_active: bool,
    enabled: bool,
    focused: bool,
    caret: usize,
}

impl SearchField {
    /// A disabled, empty field (the page before ready)
    pub fn new() -> Self {
        Self {
            value: String::new(),
            watermark_active: false,
            enabled: false,
            focused: false,
            caret: 0,
        }
    }

    /// Ready: enable the field, show the watermark, focus, caret to 0
    pub fn activate(&mut self) {
        self.enabled = true;
        self.watermark_active = true;
        self.focused = true;
        self.caret = 0;
    }

    /// Focus gained
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Focus lost: the watermark returns when the value is empty
    pub fn blur(&mut self) {
        self.focused = false;
        if self.value.is_empty() {
            self.watermark_active = true;
        }
    }

    /// First keystroke: clears the watermark
    pub fn begin_input(&mut self) {
        if self.watermark_active {
            self.watermark_active = false;
            self.caret = 0;
        }
    }

    /// Replace the field value (clears the watermark)
    pub fn set_value(&mut self, value: &str) {
        self.watermark_active = false;
        self.value = value.to_string();
        self.caret = self.value.chars().count();
    }

    /// Reset control: clear the value and refocus
    pub fn reset(&mut self) {
        self.value.clear();
        self.watermark_active = false;
        self.focused = true;
        self.caret = 0;
    }

    /// The typed value; empty while the watermark is shown
    pub fn value(&self) -> &str {
        &self.value
    }

    /// What the field displays: the watermark, or the value
    pub fn display_text(&self) -> &str {
        if self.watermark_active {
            WATERMARK
        } else {
            &self.value
        }
    }

    pub fn shows_watermark(&self) -> bool {
        self.watermark_active
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Caret position in characters
    pub fn caret(&self) -> usize {
        self.caret
    }
}

impl Default for SearchField {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activation_enables_and_shows_the_watermark() {
        let mut field = SearchField::new();
        assert!(!field.is_enabled());

        field.activate();
        assert!(field.is_enabled());
        assert!(field.is_focused());
        assert!(field.shows_watermark());
        assert_eq!(field.display_text(), "Search");
        assert_eq!(field.value(), "");
        assert_eq!(field.caret(), 0);
    }

    #[test]
    fn first_keystroke_clears_the_watermark() {
        let mut field = SearchField::new();
        field.activate();

        field.begin_input();
        assert!(!field.shows_watermark());
        assert_eq!(field.display_text(), "");

        field.set_value("map");
        assert_eq!(field.display_text(), "map");
        assert_eq!(field.caret(), 3);
    }

    #[test]
    fn blur_restores_the_watermark_only_when_empty() {
        let mut field = SearchField::new();
        field.activate();
        field.set_value("map");

        field.blur();
        assert!(!field.shows_watermark());

        field.set_value("");
        field.blur();
        assert!(field.shows_watermark());
        assert_eq!(field.display_text(), "Search");
    }

    #[test]
    fn reset_clears_and_refocuses() {
        let mut field = SearchField::new();
        field.activate();
        field.set_value("map");
        field.blur();

        field.reset();
        assert_eq!(field.value(), "");
        assert!(field.is_focused());
        assert!(!field.shows_watermark());
        assert_eq!(field.caret(), 0);
    }
}
