//! Comment list components

use chrono::{DateTime, Utc};
use maud::{Markup, html};

use super::icons::{Icon, icon};
use crate::avatar;
use crate::content::Comment;
use crate::util::{format_datetime, format_relative};

const AVATAR_SIZE: u32 = 40;

/// Renders the comment section of a record page
///
/// Comments are shown in the order given. Comment bodies are plain text.
pub fn comment_section(comments: &[&Comment], now: DateTime<Utc>) -> Markup {
    html! {
        section class="comments" id="comments" {
            h2 class="comments-title" {
                (icon(Icon::Chat))
                "Comments (" (comments.len()) ")"
            }
            @if comments.is_empty() {
                p class="empty-state" { "No comments yet. Be the first to comment!" }
            } @else {
                ol class="comment-list" {
                    @for comment in comments {
                        (comment_entry(comment, now))
                    }
                }
            }
        }
    }
}

fn comment_entry(comment: &Comment, now: DateTime<Utc>) -> Markup {
    html! {
        li class="comment" {
            (avatar::render(&comment.author_name, AVATAR_SIZE))
            div class="comment-body" {
                div class="comment-header" {
                    span class="comment-author" { (comment.author_name) }
                    time class="comment-date"
                        datetime=(comment.created_at.to_rfc3339())
                        title=(format_relative(&comment.created_at, &now)) {
                        (format_datetime(&comment.created_at))
                    }
                }
                p class="comment-text" { (comment.content) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_empty_comment_section() {
        // Act
        let html = comment_section(&[], Utc::now()).into_string();

        // Assert
        assert!(html.contains("Comments (0)"));
        assert!(html.contains("No comments yet. Be the first to comment!"));
    }

    #[test]
    fn test_comment_text_is_escaped() {
        // Arrange
        let now = Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap();
        let comment = Comment {
            id: "c1".to_string(),
            post_id: Some("p1".to_string()),
            event_id: None,
            author_name: "Ana Lima".to_string(),
            content: "<script>alert(1)</script> **not markdown**".to_string(),
            is_approved: Some(true),
            created_at: Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap(),
        };

        // Act
        let html = comment_section(&[&comment], now).into_string();

        // Assert
        assert!(html.contains("Comments (1)"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt; **not markdown**"));
        assert!(html.contains("March 5, 2024 at 10:00 AM"));
        assert!(html.contains(r#"title="2 hr ago""#));
        assert!(html.contains("class=\"avatar\""));
    }
}
