//! Editing session tests driving the editor through its public API.

use neuropress::editor::{EditorView, KeyChord, MAX_HISTORY, TextBuffer};
use neuropress::{MarkdownEditor, MarkdownRenderer, RenderMode, ToolbarCommand};
use std::cell::RefCell;
use std::rc::Rc;

fn editor(text: &str, start: usize, end: usize) -> MarkdownEditor<TextBuffer> {
    MarkdownEditor::new(TextBuffer::with_selection(text, start, end))
}

/// Tests wrapping keeps length and selected text for every selection.
#[test]
fn test_wrap_preserves_length_and_selection_for_all_ranges() {
    let value = "héllo wörld";
    let boundaries: Vec<usize> = (0..=value.len())
        .filter(|&i| value.is_char_boundary(i))
        .collect();

    for &start in &boundaries {
        for &end in boundaries.iter().filter(|&&e| e >= start) {
            // Arrange
            let mut editor = editor(value, start, end);

            // Act
            editor.insert_around_selection("<<", ">>>", false);

            // Assert
            let result = editor.value();
            assert_eq!(result.len(), value.len() + 2 + 3);
            assert_eq!(&result[start + 2..end + 2], &value[start..end]);
        }
    }
}

/// Tests the bold example from the authoring guide.
#[test]
fn test_bold_hello() {
    // Arrange
    let mut editor = editor("hello world", 0, 5);

    // Act
    editor.apply(ToolbarCommand::Bold);

    // Assert
    assert_eq!(editor.value(), "**hello** world");
    assert_eq!(editor.selection().1, 9);
}

/// Tests prefix toggling round trips on every line of a document.
#[test]
fn test_toggle_prefix_round_trip_each_line() {
    let value = "first\n- second\n\n> third";

    for cursor in [0, 3, 6, 10, 15, 16, 20] {
        for prefix in ["- ", "> ", "1. ", "- [ ] "] {
            // Arrange
            let mut editor = editor(value, cursor, cursor);

            // Act
            editor.toggle_line_prefix(prefix);
            editor.toggle_line_prefix(prefix);

            // Assert
            assert_eq!(editor.value(), value, "cursor {} prefix {:?}", cursor, prefix);
        }
    }
}

/// Tests undo and redo are exact inverses across one step.
#[test]
fn test_undo_redo_exact_inverse() {
    // Arrange
    let mut editor = editor("E = mc2", 4, 7);
    let before = (editor.value().to_string(), editor.selection());

    // Act
    editor.apply(ToolbarCommand::InlineMath);
    let after = (editor.value().to_string(), editor.selection());
    editor.undo();
    let undone = (editor.value().to_string(), editor.selection());
    editor.redo();
    let redone = (editor.value().to_string(), editor.selection());

    // Assert
    assert_eq!(after.0, "E = $mc2$");
    assert_eq!(undone.0, before.0);
    assert_eq!(undone.1, (before.1.1, before.1.1));
    assert_eq!(redone, after);
}

/// Tests history stays bounded over a long editing session.
#[test]
fn test_history_bounded_after_many_edits() {
    // Arrange
    let mut editor = editor("", 0, 0);

    // Act
    for _ in 0..51 {
        editor.insert_text("a");
    }
    let mut undos = 0;
    while editor.undo() {
        undos += 1;
    }

    // Assert
    assert_eq!(editor.history().len(), MAX_HISTORY);
    assert_eq!(undos, MAX_HISTORY - 1);
    assert_ne!(editor.value(), "", "Original empty document is gone");
    assert_eq!(editor.value(), "aa");
}

/// Tests redo tail is discarded by a new edit after undo.
#[test]
fn test_edit_after_undo_discards_redo() {
    // Arrange
    let mut editor = editor("", 0, 0);
    editor.insert_text("one");
    editor.insert_text(" two");
    editor.undo();

    // Act
    editor.insert_text(" three");

    // Assert
    assert_eq!(editor.value(), "one three");
    assert!(!editor.can_redo());
    assert!(editor.undo());
    assert_eq!(editor.value(), "one");
}

/// Tests every edit reaches the change callback.
#[test]
fn test_change_callback_tracks_draft() {
    // Arrange
    let draft = Rc::new(RefCell::new(String::new()));
    let sink = Rc::clone(&draft);
    let mut editor = MarkdownEditor::new(TextBuffer::new(""))
        .on_change(move |value| *sink.borrow_mut() = value.to_string());

    // Act
    editor.set_source("# Sleep");
    editor.set_selection(7, 7);
    editor.apply(ToolbarCommand::HorizontalRule);

    // Assert
    assert_eq!(*draft.borrow(), "# Sleep\n\n---\n\n");
    editor.undo();
    assert_eq!(*draft.borrow(), "# Sleep");
}

/// Tests out of range selections are clamped instead of rejected.
#[test]
fn test_out_of_range_selection_clamped() {
    // Arrange
    let mut editor = editor("abc", 0, 0);

    // Act
    editor.set_selection(10, 2);
    editor.apply(ToolbarCommand::Italic);

    // Assert
    assert_eq!(editor.value(), "ab*c*");
}

/// Tests the write and preview cycle of a typical session.
#[test]
fn test_write_then_preview_session() {
    // Arrange
    let renderer = MarkdownRenderer::new();
    let mut editor = MarkdownEditor::new(TextBuffer::new("")).with_placeholder("Start writing...");
    editor.attach();

    // Act
    let empty = editor.view(&renderer);
    editor.insert_text("$E=mc^2$");
    editor.handle_key(KeyChord::ctrl('z'));
    editor.handle_key(KeyChord::ctrl('y'));
    editor.set_mode(RenderMode::Preview);
    let preview = editor.view(&renderer);
    editor.detach();

    // Assert
    assert_eq!(
        empty,
        EditorView::Write {
            text: String::new(),
            placeholder: Some("Start writing...".to_string()),
        }
    );
    let EditorView::Preview { html } = preview else {
        panic!("Expected preview");
    };
    assert!(html.contains("<math"));
    assert!(!html.contains("$E=mc^2$"));
    assert!(!editor.handle_key(KeyChord::ctrl('z')));
}

/// Tests the empty document preview shows the placeholder.
#[test]
fn test_empty_preview_placeholder() {
    // Arrange
    let renderer = MarkdownRenderer::new();
    let mut editor = MarkdownEditor::new(TextBuffer::new(""));

    // Act
    editor.toggle_mode();
    let view = editor.view(&renderer);

    // Assert
    assert_eq!(
        view,
        EditorView::Preview {
            html: "<p><em>Nothing to preview</em></p>\n".to_string(),
        }
    );
}
