//! Markdown and math authoring, rendering, and static publishing for a
//! youth neuroscience blog.

mod assets;
pub mod avatar;
pub mod components;
mod config;
pub mod content;
pub mod editor;
pub mod markdown;
pub mod pages;
mod publish;
mod util;

pub use assets::{DEFAULT_THEME, document_css, highlight_css, markdown_css, site_css, write_css_assets};
pub use config::{Command, Config, PublishArgs, RenderArgs, SearchArgs};
pub use content::{
    Comment, ContentExport, Event, EventStatus, Post, SearchMode, SearchQuery, Searchable,
    format_duration,
};
pub use editor::{KeyChord, MarkdownEditor, RenderMode, TextBuffer, TextSurface, ToolbarCommand};
pub use markdown::{MarkdownRenderer, reading_time, to_plain_text};
pub use publish::{PublishOptions, PublishReport, publish_site};
pub use util::{format_date, format_datetime, format_time};
