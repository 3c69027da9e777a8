//! Markdown and math rendering shared by the editor preview and published pages.
//!
//! This module renders author markdown using comrak with GFM extensions
//! (tables, strikethrough, autolinks, task lists) and dollar-delimited math,
//! typesets math to MathML, and applies the site's link and image policy.

mod links;
mod math;
mod renderer;
mod text;

pub use links::{IMAGE_CLASS, LINK_REL, LINK_TARGET, decorate_links};
pub use math::{MathDisplay, typeset_expression, typeset_math};
pub use renderer::{DEFAULT_PLACEHOLDER, MarkdownRenderer};
pub use text::{reading_time, to_plain_text};
pub(crate) use text::escape_html;
