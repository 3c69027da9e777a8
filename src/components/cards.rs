//! Listing card components

use chrono::{DateTime, Utc};
use maud::{Markup, html};

use super::icons::{Icon, icon};
use super::metadata::{meta_item, reading_label, status_badge, tag_badge, views_label};
use crate::content::{Event, EventStatus, Post, format_duration};
use crate::util::{format_date, format_time};

/// Wraps cards in the listing grid.
pub fn card_grid(cards: Markup) -> Markup {
    html! {
        div class="card-grid" {
            (cards)
        }
    }
}

/// Renders a post card
///
/// Shows tag, title, plain text excerpt, publish date, and reading time.
/// The whole card links to `href`.
pub fn post_card(post: &Post, excerpt: &str, reading_minutes: usize, href: &str) -> Markup {
    html! {
        a href=(href) class="card post-card" {
            @if let Some(tag) = &post.tag {
                (tag_badge(tag))
            }
            h2 class="card-title" { (post.title) }
            @if !excerpt.is_empty() {
                p class="card-excerpt" { (excerpt) }
            }
            div class="card-meta" {
                (meta_item(Icon::Calendar, &format_date(&post.published_date)))
                (meta_item(Icon::BookOpen, &reading_label(reading_minutes)))
                span class="card-more" { (icon(Icon::ArrowRight)) }
            }
        }
    }
}

/// Renders an event card
///
/// Shows a status badge relative to `now`, then tag, title, excerpt, start
/// date, start time with duration, location, and view count.
pub fn event_card(event: &Event, excerpt: &str, href: &str, now: DateTime<Utc>) -> Markup {
    let status = EventStatus::at(event.start_date, event.end_date, now);
    let when = format!(
        "{} \u{2022} {}",
        format_time(&event.start_date),
        format_duration(&event.duration)
    );

    html! {
        a href=(href) class=(format!("card event-card {}", status.class())) {
            div class="card-header" {
                (status_badge(status))
                @if let Some(tag) = &event.tag {
                    (tag_badge(tag))
                }
            }
            h2 class="card-title" { (event.title) }
            @if !excerpt.is_empty() {
                p class="card-excerpt" { (excerpt) }
            }
            div class="card-meta" {
                (meta_item(Icon::Calendar, &format_date(&event.start_date)))
                (meta_item(Icon::Clock, &when))
                @if let Some(location) = &event.location {
                    (meta_item(Icon::MapPin, location))
                }
                (meta_item(Icon::Eye, &views_label(event.click_count)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn sample_event(start: DateTime<Utc>) -> Event {
        Event {
            id: "e1".to_string(),
            title: "Brain Dissection Workshop".to_string(),
            content: "Hands on.".to_string(),
            tag: Some("Workshop".to_string()),
            start_date: start,
            duration: "1:30:00".to_string(),
            end_date: start + Duration::minutes(90),
            location: Some("Lab 2".to_string()),
            is_draft: false,
            click_count: 7,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_event_card_contents() {
        // Arrange
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 9, 0, 0).unwrap();
        let event = sample_event(Utc.with_ymd_and_hms(2024, 5, 13, 18, 30, 0).unwrap());

        // Act
        let html = event_card(&event, "Hands on.", "e1.html", now).into_string();

        // Assert
        assert!(html.contains(r#"href="e1.html""#));
        assert!(html.contains("In 4 days"));
        assert!(html.contains("May 13, 2024"));
        assert!(html.contains("6:30 PM \u{2022} 1h 30m"));
        assert!(html.contains("Lab 2"));
        assert!(html.contains("7 views"));
        assert!(html.contains("Workshop"));
    }

    #[test]
    fn test_post_card_contents() {
        // Arrange
        let post = Post {
            id: "p1".to_string(),
            title: "Why Teens Sleep Late".to_string(),
            content: "Circadian shift.".to_string(),
            tag: None,
            published_date: Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap(),
            is_draft: false,
            click_count: 0,
            created_at: None,
            updated_at: None,
        };

        // Act
        let html = post_card(&post, "Circadian shift.", 1, "posts/p1.html").into_string();

        // Assert
        assert!(html.contains("Why Teens Sleep Late"));
        assert!(html.contains("March 1, 2024"));
        assert!(html.contains("1 min read"));
        assert!(!html.contains("tag-badge"));
    }
}
