//! Record metadata components

use maud::{Markup, html};

use super::icons::{Icon, icon};
use crate::content::EventStatus;

/// Renders a topic tag badge.
pub fn tag_badge(tag: &str) -> Markup {
    html! {
        span class="tag-badge" {
            (icon(Icon::Tag))
            span { (tag) }
        }
    }
}

/// Renders one icon and text pair of a metadata line.
pub fn meta_item(item_icon: Icon, text: &str) -> Markup {
    html! {
        span class="meta-item" {
            (icon(item_icon))
            span { (text) }
        }
    }
}

/// Count with a pluralized noun, e.g. "1 post" or "3 posts".
pub fn count_label(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

/// View count text, e.g. "12 views".
pub fn views_label(count: u64) -> String {
    count_label(count as usize, "view")
}

/// Reading time text, e.g. "4 min read".
pub fn reading_label(minutes: usize) -> String {
    format!("{} min read", minutes)
}

/// Renders the event status badge.
pub fn status_badge(status: EventStatus) -> Markup {
    html! {
        span class=(format!("status-badge {}", status.class())) { (status.label()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_views_label() {
        assert_eq!(views_label(0), "0 views");
        assert_eq!(views_label(1), "1 view");
        assert_eq!(views_label(42), "42 views");
        assert_eq!(count_label(1, "post"), "1 post");
        assert_eq!(count_label(2, "event"), "2 events");
    }

    #[test]
    fn test_status_badge() {
        // Act
        let html = status_badge(EventStatus::InDays(3)).into_string();

        // Assert
        assert_eq!(
            html,
            r#"<span class="status-badge status-upcoming">In 3 days</span>"#
        );
    }

    #[test]
    fn test_tag_badge_escapes() {
        let html = tag_badge("<b>").into_string();
        assert!(html.contains("&lt;b&gt;"));
    }
}
