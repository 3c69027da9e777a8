//! Event listing and detail page generation

use maud::{Markup, PreEscaped, html};

use super::{EXCERPT_CHARS, Site, stylesheets};
use crate::components::cards::{card_grid, event_card};
use crate::components::comments::comment_section;
use crate::components::icons::Icon;
use crate::components::layout::{PageFrame, page_wrapper};
use crate::components::metadata::{count_label, meta_item, status_badge, tag_badge, views_label};
use crate::components::nav::{Section, breadcrumb};
use crate::content::{Comment, Event, EventStatus, format_duration_long};
use crate::markdown::MarkdownRenderer;
use crate::util::{format_datetime, page_file_name};

/// Generates the events listing page
///
/// Written to `events/index.html`. Every card carries a status badge
/// computed against `site.now`.
pub fn generate_list(
    site: &Site<'_>,
    events: &[&Event],
    renderer: &MarkdownRenderer<'_>,
) -> Markup {
    let root = "../";
    let css = stylesheets(root, &["site.css"]);

    page_wrapper(
        &PageFrame {
            title: "Events",
            site_name: Some(site.name),
            root,
            section: Some(Section::Events),
            stylesheets: &css,
            inline_style: None,
        },
        html! {
            div class="page-header" {
                h1 class="page-title" { "Events" }
                p class="page-subtitle" {
                    "Workshops, seminars, and hands-on activities for young neuroscientists."
                }
                span class="badge" { (count_label(events.len(), "event")) }
            }

            @if events.is_empty() {
                p class="empty-state" { "No events scheduled yet." }
            } @else {
                (card_grid(html! {
                    @for event in events {
                        (event_card(
                            event,
                            &renderer.excerpt(&event.content, EXCERPT_CHARS),
                            &page_file_name(&event.id),
                            site.now,
                        ))
                    }
                }))
            }
        },
    )
}

/// Generates an event detail page
///
/// Written to `events/<id>.html`. Shows the schedule, location, and status,
/// then the rendered description and comments.
pub fn generate_detail(
    site: &Site<'_>,
    event: &Event,
    comments: &[&Comment],
    renderer: &MarkdownRenderer<'_>,
) -> Markup {
    let root = "../";
    let css = stylesheets(root, &["site.css", "markdown.css", "highlight.css"]);
    let status = EventStatus::at(event.start_date, event.end_date, site.now);

    page_wrapper(
        &PageFrame {
            title: &event.title,
            site_name: Some(site.name),
            root,
            section: Some(Section::Events),
            stylesheets: &css,
            inline_style: None,
        },
        html! {
            (breadcrumb(&[
                ("Events", Some("index.html".to_string())),
                (event.title.as_str(), None),
            ]))

            article class="record" {
                header class="record-header" {
                    div class="record-title-row" {
                        h1 class="record-title" { (event.title) }
                        (status_badge(status))
                    }
                    div class="record-meta" {
                        @if let Some(tag) = &event.tag {
                            (tag_badge(tag))
                        }
                        (meta_item(Icon::Eye, &views_label(event.click_count)))
                    }
                    dl class="event-schedule" {
                        dt { "Starts" }
                        dd { (meta_item(Icon::Calendar, &format_datetime(&event.start_date))) }
                        dt { "Ends" }
                        dd { (meta_item(Icon::Calendar, &format_datetime(&event.end_date))) }
                        dt { "Duration" }
                        dd { (meta_item(Icon::Clock, &format_duration_long(&event.duration))) }
                        @if let Some(location) = &event.location {
                            dt { "Location" }
                            dd { (meta_item(Icon::MapPin, location)) }
                        }
                    }
                }
                div class="record-body markdown-content" {
                    (PreEscaped(renderer.render(&event.content)))
                }
            }

            (comment_section(comments, site.now))
        },
    )
}
