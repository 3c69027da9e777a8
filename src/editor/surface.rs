//! Text editing surface capability.

/// Editable text with a selection, as exposed by a UI toolkit.
///
/// Offsets are byte offsets into the value. Implementations may receive
/// arbitrary offsets; callers in this crate clamp them with
/// [`clamp_selection`] before slicing.
pub trait TextSurface {
    /// Current document text.
    fn value(&self) -> &str;

    /// Replaces the document text.
    fn set_value(&mut self, text: &str);

    /// Current selection as `(start, end)`; collapsed when equal.
    fn selection(&self) -> (usize, usize);

    /// Moves the selection.
    fn set_selection(&mut self, start: usize, end: usize);
}

/// Clamps an offset to `[0, text.len()]` and snaps it back to a char boundary.
pub fn clamp_offset(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while offset > 0 && !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Clamps both ends of a selection and orders them.
pub fn clamp_selection(text: &str, (start, end): (usize, usize)) -> (usize, usize) {
    let start = clamp_offset(text, start);
    let end = clamp_offset(text, end);
    if start > end { (end, start) } else { (start, end) }
}

/// In-memory [`TextSurface`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    selection: (usize, usize),
}

impl TextBuffer {
    /// Creates buffer with the cursor at the start of `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            selection: (0, 0),
        }
    }

    /// Creates buffer with an initial selection, clamped to the text.
    pub fn with_selection(text: impl Into<String>, start: usize, end: usize) -> Self {
        let mut buffer = Self::new(text);
        buffer.set_selection(start, end);
        buffer
    }

    /// Currently selected text.
    pub fn selected_text(&self) -> &str {
        let (start, end) = self.selection;
        &self.text[start..end]
    }
}

impl TextSurface for TextBuffer {
    fn value(&self) -> &str {
        &self.text
    }

    fn set_value(&mut self, text: &str) {
        self.text = text.to_string();
        self.selection = clamp_selection(&self.text, self.selection);
    }

    fn selection(&self) -> (usize, usize) {
        self.selection
    }

    fn set_selection(&mut self, start: usize, end: usize) {
        self.selection = clamp_selection(&self.text, (start, end));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_offset_bounds() {
        assert_eq!(clamp_offset("abc", 0), 0);
        assert_eq!(clamp_offset("abc", 2), 2);
        assert_eq!(clamp_offset("abc", 99), 3);
        assert_eq!(clamp_offset("", 5), 0);
    }

    #[test]
    fn test_clamp_offset_snaps_to_char_boundary() {
        // "é" is two bytes
        assert_eq!(clamp_offset("é!", 1), 0);
        assert_eq!(clamp_offset("é!", 2), 2);
    }

    #[test]
    fn test_clamp_selection_orders_range() {
        assert_eq!(clamp_selection("hello", (4, 1)), (1, 4));
        assert_eq!(clamp_selection("hello", (3, 100)), (3, 5));
    }

    #[test]
    fn test_buffer_selection_clamped() {
        // Arrange
        let mut buffer = TextBuffer::new("brain");

        // Act
        buffer.set_selection(10, 2);

        // Assert
        assert_eq!(buffer.selection(), (2, 5));
        assert_eq!(buffer.selected_text(), "ain");
    }

    #[test]
    fn test_buffer_set_value_shrinks_selection() {
        // Arrange
        let mut buffer = TextBuffer::with_selection("neuroscience", 5, 12);

        // Act
        buffer.set_value("neuro");

        // Assert
        assert_eq!(buffer.value(), "neuro");
        assert_eq!(buffer.selection(), (5, 5));
    }
}
