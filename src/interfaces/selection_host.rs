// ============================================================================
// Selection Host Interface
// The text input a currency field renders into
// ============================================================================

use crate::domain::SelectionRange;
use unicode_segmentation::UnicodeSegmentation;

/// A host text input: holds the displayed string, a selection and focus.
///
/// Offsets are char offsets. Implementations for real toolkits translate to
/// their own units.
pub trait SelectionHost {
    /// Current contents of the input
    fn value(&self) -> &str;

    /// Replace the contents of the input
    fn render(&mut self, value: &str);

    /// Whether the input currently holds focus
    fn has_focus(&self) -> bool;

    /// Give the input focus
    fn focus(&mut self);

    /// Current selection as reported by the input
    fn selection(&self) -> SelectionRange;

    /// Move the selection
    ///
    /// Callers only do this while the input has focus.
    fn set_selection_range(&mut self, range: SelectionRange);
}

/// An in-memory text input.
///
/// Behaves like a native single-line input: rendering a new value puts the
/// caret at the end, typing replaces the selection, and the caret never
/// rests inside a grapheme cluster. Useful for tests, demos and headless
/// callers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlessInput {
    value: String,
    selection: SelectionRange,
    focused: bool,
}

impl HeadlessInput {
    /// Create an empty, unfocused input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop focus.
    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Replace the selection with `text`, leaving the caret after it.
    pub fn insert(&mut self, text: &str) {
        let (start, end) = self.byte_range();
        self.value.replace_range(start..end, text);
        let caret = self.selection.start + text.chars().count();
        self.selection = SelectionRange::collapsed(caret);
    }

    /// Delete the selection, or the grapheme before a collapsed caret.
    pub fn backspace(&mut self) {
        if self.selection.is_collapsed() {
            if self.selection.start == 0 {
                return;
            }
            self.selection.start = self.prev_grapheme_boundary(self.selection.start);
        }
        self.insert("");
    }

    /// Move the selection as a user would, regardless of focus.
    ///
    /// Both ends snap to the nearest grapheme boundary.
    pub fn select(&mut self, range: SelectionRange) {
        let len = self.value.chars().count();
        let range = range.clamped(0, len);
        self.selection = SelectionRange::new(
            self.snap_to_grapheme_boundary(range.start),
            self.snap_to_grapheme_boundary(range.end),
        );
    }

    // ========================================================================
    // Grapheme Boundaries (char offsets)
    // ========================================================================

    fn prev_grapheme_boundary(&self, pos: usize) -> usize {
        let mut offset = 0;
        let mut prev_offset = 0;
        for grapheme in self.value.graphemes(true) {
            if offset >= pos {
                return prev_offset;
            }
            prev_offset = offset;
            offset += grapheme.chars().count();
        }
        prev_offset
    }

    fn snap_to_grapheme_boundary(&self, pos: usize) -> usize {
        let mut offset = 0;
        for grapheme in self.value.graphemes(true) {
            let next_offset = offset + grapheme.chars().count();
            if pos <= offset {
                return offset;
            }
            if pos < next_offset {
                return if pos - offset <= next_offset - pos {
                    offset
                } else {
                    next_offset
                };
            }
            offset = next_offset;
        }
        offset
    }

    fn byte_range(&self) -> (usize, usize) {
        let byte_at = |offset: usize| {
            self.value
                .char_indices()
                .nth(offset)
                .map_or(self.value.len(), |(i, _)| i)
        };
        (byte_at(self.selection.start), byte_at(self.selection.end))
    }
}

impl SelectionHost for HeadlessInput {
    fn value(&self) -> &str {
        &self.value
    }

    fn render(&mut self, value: &str) {
        self.value = value.to_string();
        self.selection = SelectionRange::collapsed(self.value.chars().count());
    }

    fn has_focus(&self) -> bool {
        self.focused
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn selection(&self) -> SelectionRange {
        self.selection
    }

    fn set_selection_range(&mut self, range: SelectionRange) {
        self.select(range);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_moves_caret_to_end() {
        let mut input = HeadlessInput::new();
        input.render("1,234.56");
        assert_eq!(input.value(), "1,234.56");
        assert_eq!(input.selection(), SelectionRange::collapsed(8));
    }

    #[test]
    fn test_insert_replaces_selection() {
        let mut input = HeadlessInput::new();
        input.render("1,234.56");
        input.select(SelectionRange::new(2, 5));
        input.insert("9");
        assert_eq!(input.value(), "1,9.56");
        assert_eq!(input.selection(), SelectionRange::collapsed(3));
    }

    #[test]
    fn test_insert_handles_multibyte_chars() {
        let mut input = HeadlessInput::new();
        input.render("€1.00 kr");
        input.select(SelectionRange::collapsed(1));
        input.insert("5");
        assert_eq!(input.value(), "€51.00 kr");
        assert_eq!(input.selection(), SelectionRange::collapsed(2));
    }

    #[test]
    fn test_backspace() {
        let mut input = HeadlessInput::new();
        input.render("12.34");
        input.backspace();
        assert_eq!(input.value(), "12.3");

        input.select(SelectionRange::collapsed(0));
        input.backspace();
        assert_eq!(input.value(), "12.3");

        input.select(SelectionRange::new(0, 2));
        input.backspace();
        assert_eq!(input.value(), ".3");
    }

    #[test]
    fn test_backspace_removes_whole_grapheme() {
        let mut input = HeadlessInput::new();
        input.render("5 e\u{301}");
        input.backspace();
        assert_eq!(input.value(), "5 ");
        assert_eq!(input.selection(), SelectionRange::collapsed(2));

        input.render("1\u{1F44D}\u{1F3FD}");
        input.backspace();
        assert_eq!(input.value(), "1");
    }

    #[test]
    fn test_select_snaps_to_grapheme_boundary() {
        let mut input = HeadlessInput::new();
        // "a" + "e" with a combining accent + "b"
        input.render("ae\u{301}b");

        input.select(SelectionRange::collapsed(2));
        assert_eq!(input.selection(), SelectionRange::collapsed(1));

        input.select(SelectionRange::new(0, 9));
        assert_eq!(input.selection(), SelectionRange::new(0, 4));
    }

    #[test]
    fn test_focus() {
        let mut input = HeadlessInput::new();
        assert!(!input.has_focus());
        input.focus();
        assert!(input.has_focus());
        input.blur();
        assert!(!input.has_focus());
    }
}
