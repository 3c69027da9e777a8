//! Markdown authoring model behind the admin editor.
//!
//! The editing logic depends only on the [`TextSurface`] capability, so any
//! UI toolkit can host it. Edits flow through [`MarkdownEditor`], which keeps
//! a bounded undo history and hands every new value to an optional change
//! callback; preview rendering is delegated to
//! [`MarkdownRenderer`](crate::markdown::MarkdownRenderer).

mod history;
mod markdown_editor;
mod shortcuts;
mod surface;
mod toolbar;

pub use history::{EditHistory, HistoryEntry, MAX_HISTORY};
pub use markdown_editor::{EditorView, MarkdownEditor, RenderMode};
pub use shortcuts::{KeyChord, Shortcut};
pub use surface::{TextBuffer, TextSurface, clamp_offset, clamp_selection};
pub use toolbar::{EditRule, ToolbarCommand};
