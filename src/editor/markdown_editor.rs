//! Markdown editor with toolbar formatting, undo history, and preview.

use std::fmt;

use crate::markdown::MarkdownRenderer;

use super::history::EditHistory;
use super::shortcuts::{KeyChord, Shortcut};
use super::surface::{TextSurface, clamp_selection};
use super::toolbar::{EditRule, ToolbarCommand};

type ChangeCallback = Box<dyn FnMut(&str)>;

/// Whether the editor shows the raw source or the rendered preview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
    #[default]
    Write,
    Preview,
}

/// What the editor displays for its current mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorView {
    /// Editable source; `placeholder` is set only while the source is empty
    Write {
        text: String,
        placeholder: Option<String>,
    },
    /// Rendered HTML of the source
    Preview { html: String },
}

/// Markdown editing session over a [`TextSurface`].
///
/// Owns the undo history for one surface. Every content change is pushed to
/// the history and reported to the change callback, so the parent form always
/// holds the latest draft. The editor never persists anything itself.
///
/// Keyboard shortcuts only act between [`attach`](Self::attach) and
/// [`detach`](Self::detach), mirroring the lifetime of the editing surface on
/// screen, and only in write mode.
pub struct MarkdownEditor<S: TextSurface> {
    surface: S,
    history: EditHistory,
    mode: RenderMode,
    placeholder: String,
    on_change: Option<ChangeCallback>,
    attached: bool,
}

impl<S: TextSurface> MarkdownEditor<S> {
    /// Creates editor over `surface`; its current value is the first history entry.
    pub fn new(surface: S) -> Self {
        let (_, cursor) = surface.selection();
        let history = EditHistory::new(surface.value(), cursor);

        Self {
            surface,
            history,
            mode: RenderMode::Write,
            placeholder: String::new(),
            on_change: None,
            attached: false,
        }
    }

    /// Text shown in write mode while the document is empty.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Registers the callback invoked with the new value after every edit.
    pub fn on_change(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn value(&self) -> &str {
        self.surface.value()
    }

    pub fn selection(&self) -> (usize, usize) {
        self.surface.selection()
    }

    /// Moves the selection, clamped to the document.
    pub fn set_selection(&mut self, start: usize, end: usize) {
        let (start, end) = clamp_selection(self.surface.value(), (start, end));
        self.surface.set_selection(start, end);
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access for edits made directly on the surface.
    ///
    /// Call [`sync`](Self::sync) afterwards so the change is recorded.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    /// Replaces the whole document. Any string is accepted.
    pub fn set_source(&mut self, text: &str) {
        let (start, end) = self.surface.selection();
        self.commit(text.to_string(), start, end);
    }

    /// Records edits made directly on the surface, such as typed keystrokes.
    ///
    /// Does nothing when the value equals the current history entry.
    pub fn sync(&mut self) {
        let value = self.surface.value().to_string();
        let (_, cursor) = clamp_selection(&value, self.surface.selection());
        if self.history.record(&value, cursor) {
            self.notify();
        }
    }

    /// Types text over the current selection.
    pub fn insert_text(&mut self, text: &str) {
        self.insert_around_selection(text, "", true);
    }

    /// Surrounds the selection with `before` and `after`.
    ///
    /// With `replace_selection` the selected text is dropped. The cursor
    /// lands right after the inserted content, `after` included.
    pub fn insert_around_selection(&mut self, before: &str, after: &str, replace_selection: bool) {
        let value = self.surface.value();
        let (start, end) = clamp_selection(value, self.surface.selection());
        let selected = if replace_selection { "" } else { &value[start..end] };

        let next = format!(
            "{}{}{}{}{}",
            &value[..start],
            before,
            selected,
            after,
            &value[end..]
        );
        let cursor = start + before.len() + selected.len() + after.len();

        self.commit(next, cursor, cursor);
    }

    /// Inserts `prefix` at the start of the line holding the cursor.
    pub fn insert_line_prefix(&mut self, prefix: &str) {
        let value = self.surface.value();
        let (start, end) = clamp_selection(value, self.surface.selection());
        let line_start = line_start(value, start);

        let next = format!("{}{}{}", &value[..line_start], prefix, &value[line_start..]);
        self.commit(next, start + prefix.len(), end + prefix.len());
    }

    /// Inserts `prefix` at the cursor line start, or removes it if present.
    ///
    /// Applying the same prefix twice restores the original line.
    pub fn toggle_line_prefix(&mut self, prefix: &str) {
        let value = self.surface.value();
        let (start, end) = clamp_selection(value, self.surface.selection());
        let line_start = line_start(value, start);

        if prefix.is_empty() || !value[line_start..].starts_with(prefix) {
            self.insert_line_prefix(prefix);
            return;
        }

        let next = format!(
            "{}{}",
            &value[..line_start],
            &value[line_start + prefix.len()..]
        );
        let shift = |offset: usize| offset.saturating_sub(prefix.len()).max(line_start);
        self.commit(next, shift(start), shift(end));
    }

    /// Applies a toolbar command at the current selection.
    pub fn apply(&mut self, command: ToolbarCommand) {
        match command.rule() {
            EditRule::Wrap { before, after } => self.insert_around_selection(before, after, false),
            EditRule::InsertPrefix(prefix) => self.insert_line_prefix(&prefix),
            EditRule::TogglePrefix(prefix) => self.toggle_line_prefix(prefix),
            EditRule::Insert(text) => self.insert_around_selection("", text, false),
        }
    }

    /// Restores the previous history entry. Returns false at the oldest entry.
    pub fn undo(&mut self) -> bool {
        match self.history.undo().cloned() {
            Some(entry) => {
                self.restore(&entry.value, entry.cursor);
                true
            }
            None => false,
        }
    }

    /// Restores the next history entry. Returns false at the newest entry.
    pub fn redo(&mut self) -> bool {
        match self.history.redo().cloned() {
            Some(entry) => {
                self.restore(&entry.value, entry.cursor);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: RenderMode) {
        self.mode = mode;
    }

    /// Switches between write and preview.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            RenderMode::Write => RenderMode::Preview,
            RenderMode::Preview => RenderMode::Write,
        };
    }

    /// Computes what the editor displays in its current mode.
    ///
    /// Preview goes through the same renderer used for published pages.
    pub fn view(&self, renderer: &MarkdownRenderer<'_>) -> EditorView {
        match self.mode {
            RenderMode::Write => {
                let text = self.surface.value().to_string();
                let placeholder = (text.is_empty() && !self.placeholder.is_empty())
                    .then(|| self.placeholder.clone());
                EditorView::Write { text, placeholder }
            }
            RenderMode::Preview => EditorView::Preview {
                html: renderer.render(self.surface.value()),
            },
        }
    }

    /// Starts listening for keyboard shortcuts.
    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Stops listening for keyboard shortcuts.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Handles a key press.
    ///
    /// # Returns
    ///
    /// `true` if the chord was bound and the editor was attached in write
    /// mode, meaning the caller should suppress the default key action
    pub fn handle_key(&mut self, chord: KeyChord) -> bool {
        if !self.attached || self.mode != RenderMode::Write {
            return false;
        }

        match Shortcut::from_chord(chord) {
            Some(Shortcut::Undo) => {
                self.undo();
                true
            }
            Some(Shortcut::Redo) => {
                self.redo();
                true
            }
            Some(Shortcut::Format(command)) => {
                self.apply(command);
                true
            }
            None => false,
        }
    }

    fn commit(&mut self, next: String, start: usize, end: usize) {
        let (start, end) = clamp_selection(&next, (start, end));
        self.surface.set_value(&next);
        self.surface.set_selection(start, end);
        if self.history.record(&next, end) {
            self.notify();
        }
    }

    fn restore(&mut self, value: &str, cursor: usize) {
        self.surface.set_value(value);
        self.surface.set_selection(cursor, cursor);
        self.notify();
    }

    fn notify(&mut self) {
        if let Some(callback) = self.on_change.as_mut() {
            callback(self.surface.value());
        }
    }
}

impl<S: TextSurface + fmt::Debug> fmt::Debug for MarkdownEditor<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarkdownEditor")
            .field("surface", &self.surface)
            .field("history", &self.history)
            .field("mode", &self.mode)
            .field("attached", &self.attached)
            .finish_non_exhaustive()
    }
}

/// Byte offset where the line containing `offset` begins.
fn line_start(text: &str, offset: usize) -> usize {
    text[..offset].rfind('\n').map(|i| i + 1).unwrap_or(0)
}
