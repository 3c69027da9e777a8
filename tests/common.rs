//! Shared test utilities for integration tests.
//!
//! Provides a content export fixture covering drafts, moderation states,
//! and events on both sides of a fixed reference time.

#![allow(dead_code)]

use anyhow::Result;
use chrono::{DateTime, TimeZone, Utc};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Reference time the fixture's event statuses are computed against.
pub fn fixture_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 10, 9, 0, 0).unwrap()
}

/// Content export with two published posts, one draft post, a past event,
/// an upcoming event, a draft event, and comments in every moderation state.
pub const EXPORT_JSON: &str = r##"{
    "posts": [
        {
            "id": "teen-brain",
            "title": "The Teenage Brain",
            "content": "# Under Construction\n\nThe prefrontal cortex matures last.\n\nSignal speed is roughly $v = d / t$.\n\n$$\\frac{a}{b}$$\n\n[Read more](https://example.org/brain)\n\n![Neuron](https://example.org/neuron.png)",
            "tag": "Neuroscience",
            "published_date": "2024-04-01T10:00:00Z",
            "click_count": 42
        },
        {
            "id": "sleep-memory",
            "title": "Sleep and Memory",
            "content": "Sleep consolidates **memories**.\n\n```rust\nfn main() {}\n```",
            "tag": "Health",
            "published_date": "2024-04-20T10:00:00Z",
            "click_count": 7
        },
        {
            "id": "secret-draft",
            "title": "Unfinished Draft",
            "content": "Not ready.",
            "published_date": "2024-04-25T10:00:00Z",
            "is_draft": true
        }
    ],
    "events": [
        {
            "id": "dissection",
            "title": "Sheep Brain Dissection",
            "content": "Gloves provided.",
            "tag": "Workshop",
            "start_date": "2024-05-13T18:30:00Z",
            "duration": "1:30:00",
            "end_date": "2024-05-13T20:00:00Z",
            "location": "Biology Lab"
        },
        {
            "id": "kickoff",
            "title": "Spring Kickoff",
            "content": "Welcome!",
            "start_date": "2024-03-01T17:00:00Z",
            "duration": "2:00:00",
            "end_date": "2024-03-01T19:00:00Z"
        },
        {
            "id": "draft-event",
            "title": "Hidden Event",
            "content": "",
            "start_date": "2024-06-01T17:00:00Z",
            "duration": "0:45:00",
            "end_date": "2024-06-01T17:45:00Z",
            "is_draft": true
        }
    ],
    "comments": [
        {"id": "c1", "post_id": "teen-brain", "author_name": "Ana Lima", "content": "So interesting!", "is_approved": true, "created_at": "2024-04-02T10:00:00Z"},
        {"id": "c2", "post_id": "teen-brain", "author_name": "Spammer", "content": "Buy followers", "is_approved": false, "created_at": "2024-04-03T10:00:00Z"},
        {"id": "c3", "post_id": "teen-brain", "author_name": "Ben", "content": "Legacy comment", "created_at": "2024-04-04T10:00:00Z"},
        {"id": "c4", "event_id": "dissection", "author_name": "Cy", "content": "Can't wait", "created_at": "2024-05-01T10:00:00Z"}
    ]
}"##;

/// Temporary directory holding `export.json` with [`EXPORT_JSON`].
///
/// # Errors
///
/// Returns error if the directory or file cannot be created
pub fn export_fixture() -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let path = write_file(dir.path(), "export.json", EXPORT_JSON)?;
    Ok((dir, path))
}

/// Writes file, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(root: &Path, path: &str, content: &str) -> Result<PathBuf> {
    let file_path = root.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&file_path, content)?;
    Ok(file_path)
}
