//! Content records as exported from the database.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fields exposed to listing search.
pub trait Searchable {
    fn title(&self) -> &str;
    fn content(&self) -> &str;
    fn tag(&self) -> Option<&str>;
}

/// Blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tag: Option<String>,
    pub published_date: DateTime<Utc>,
    #[serde(default)]
    pub is_draft: bool,
    #[serde(default)]
    pub click_count: u64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Calendar event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tag: Option<String>,
    pub start_date: DateTime<Utc>,
    /// Interval text as stored, e.g. `1:30:00`
    pub duration: String,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub is_draft: bool,
    #[serde(default)]
    pub click_count: u64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Reader comment on a post or an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    #[serde(default)]
    pub post_id: Option<String>,
    #[serde(default)]
    pub event_id: Option<String>,
    pub author_name: String,
    pub content: String,
    /// `None` for comments stored before moderation existed
    #[serde(default)]
    pub is_approved: Option<bool>,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Visible unless a moderator rejected it.
    pub fn is_visible(&self) -> bool {
        self.is_approved != Some(false)
    }
}

impl Searchable for Post {
    fn title(&self) -> &str {
        &self.title
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }
}

impl Searchable for Event {
    fn title(&self) -> &str {
        &self.title
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }
}

/// Snapshot of all site content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentExport {
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl ContentExport {
    /// Parses an export from JSON text.
    ///
    /// # Errors
    ///
    /// Returns error if the JSON is malformed or records miss required fields
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse content export")
    }

    /// Reads and parses an export file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read content export: {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid content export: {}", path.display()))
    }

    /// Non-draft posts, newest first.
    pub fn published_posts(&self) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self.posts.iter().filter(|p| !p.is_draft).collect();
        posts.sort_by(|a, b| b.published_date.cmp(&a.published_date));
        posts
    }

    /// Non-draft events, earliest start first.
    pub fn published_events(&self) -> Vec<&Event> {
        let mut events: Vec<&Event> = self.events.iter().filter(|e| !e.is_draft).collect();
        events.sort_by(|a, b| a.start_date.cmp(&b.start_date));
        events
    }

    /// Visible comments on a post, newest first.
    pub fn comments_for_post(&self, post_id: &str) -> Vec<&Comment> {
        self.visible_comments(|c| c.post_id.as_deref() == Some(post_id))
    }

    /// Visible comments on an event, newest first.
    pub fn comments_for_event(&self, event_id: &str) -> Vec<&Comment> {
        self.visible_comments(|c| c.event_id.as_deref() == Some(event_id))
    }

    fn visible_comments(&self, belongs: impl Fn(&Comment) -> bool) -> Vec<&Comment> {
        let mut comments: Vec<&Comment> = self
            .comments
            .iter()
            .filter(|c| c.is_visible() && belongs(c))
            .collect();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        comments
    }
}
