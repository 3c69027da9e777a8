//! Published content records: posts, events, and comments.
//!
//! Records arrive as a JSON export of the hosted database. This module keeps
//! the public rules for them: drafts never appear, listings are ordered, only
//! approved comments are shown, and listings can be searched.

mod model;
mod schedule;
mod search;

pub use model::{Comment, ContentExport, Event, Post, Searchable};
pub use schedule::{EventStatus, format_duration, format_duration_long};
pub use search::{SearchMode, SearchQuery, filter};
