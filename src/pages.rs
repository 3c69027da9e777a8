//! Page generation modules for the published site
//!
//! Each page module renders one kind of page (home, post and event
//! listings and details, standalone documents, the not found page) from
//! shared components.

use chrono::{DateTime, Utc};

pub mod document;
pub mod events;
pub mod home;
pub mod not_found;
pub mod posts;

/// Characters kept in listing card excerpts.
pub const EXCERPT_CHARS: usize = 150;

/// Site wide values every page needs.
#[derive(Debug, Clone, Copy)]
pub struct Site<'a> {
    pub name: &'a str,
    /// Reference time for event status and relative comment dates
    pub now: DateTime<Utc>,
}

/// Stylesheet links for a page `root` prefix away from the site root.
pub(crate) fn stylesheets(root: &str, names: &[&str]) -> Vec<String> {
    names
        .iter()
        .map(|name| format!("{}assets/{}", root, name))
        .collect()
}
