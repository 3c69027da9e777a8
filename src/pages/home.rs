//! Site home page generation

use maud::{Markup, html};

use super::{EXCERPT_CHARS, Site, stylesheets};
use crate::components::cards::{card_grid, event_card, post_card};
use crate::components::icons::{Icon, icon};
use crate::components::layout::{PageFrame, page_wrapper};
use crate::components::nav::Section;
use crate::content::{Event, EventStatus, Post};
use crate::markdown::{MarkdownRenderer, reading_time};
use crate::util::page_file_name;

/// Number of cards in each home page section.
const FEATURED: usize = 3;

/// Generates the home page
///
/// Shows a hero banner, the latest posts, and events that have not ended
/// yet. `posts` and `events` are expected in listing order.
pub fn generate(
    site: &Site<'_>,
    posts: &[&Post],
    events: &[&Event],
    renderer: &MarkdownRenderer<'_>,
) -> Markup {
    let root = "";
    let css = stylesheets(root, &["site.css"]);

    let upcoming: Vec<&Event> = events
        .iter()
        .copied()
        .filter(|e| EventStatus::at(e.start_date, e.end_date, site.now) != EventStatus::Past)
        .take(FEATURED)
        .collect();

    page_wrapper(
        &PageFrame {
            title: "",
            site_name: Some(site.name),
            root,
            section: Some(Section::Home),
            stylesheets: &css,
            inline_style: None,
        },
        html! {
            section class="hero" {
                h1 class="hero-title" { (site.name) }
                p class="hero-subtitle" {
                    "Exploring the brain and the mind, one question at a time."
                }
                div class="hero-actions" {
                    a href=(Section::Posts.href(root)) class="button button-primary" {
                        (icon(Icon::BookOpen)) "Read the blog"
                    }
                    a href=(Section::Events.href(root)) class="button" {
                        (icon(Icon::Calendar)) "See events"
                    }
                }
            }

            section class="home-section" {
                h2 class="section-title" { "Latest Posts" }
                @if posts.is_empty() {
                    p class="empty-state" { "No posts published yet." }
                } @else {
                    (card_grid(html! {
                        @for post in posts.iter().take(FEATURED) {
                            (post_card(
                                post,
                                &renderer.excerpt(&post.content, EXCERPT_CHARS),
                                reading_time(&post.content),
                                &format!("posts/{}", page_file_name(&post.id)),
                            ))
                        }
                    }))
                }
            }

            section class="home-section" {
                h2 class="section-title" { "Upcoming Events" }
                @if upcoming.is_empty() {
                    p class="empty-state" { "No upcoming events." }
                } @else {
                    (card_grid(html! {
                        @for event in &upcoming {
                            (event_card(
                                event,
                                &renderer.excerpt(&event.content, EXCERPT_CHARS),
                                &format!("events/{}", page_file_name(&event.id)),
                                site.now,
                            ))
                        }
                    }))
                }
            }
        },
    )
}
