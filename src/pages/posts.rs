//! Post listing and detail page generation

use maud::{Markup, PreEscaped, html};

use super::{EXCERPT_CHARS, Site, stylesheets};
use crate::components::cards::{card_grid, post_card};
use crate::components::comments::comment_section;
use crate::components::icons::Icon;
use crate::components::layout::{PageFrame, page_wrapper};
use crate::components::metadata::{
    count_label, meta_item, reading_label, tag_badge, views_label,
};
use crate::components::nav::{Section, breadcrumb};
use crate::content::{Comment, Post};
use crate::markdown::{MarkdownRenderer, reading_time};
use crate::util::{format_date, page_file_name};

/// Generates the posts listing page
///
/// Written to `posts/index.html`. Cards link to sibling detail pages.
pub fn generate_list(site: &Site<'_>, posts: &[&Post], renderer: &MarkdownRenderer<'_>) -> Markup {
    let root = "../";
    let css = stylesheets(root, &["site.css"]);

    page_wrapper(
        &PageFrame {
            title: "Posts",
            site_name: Some(site.name),
            root,
            section: Some(Section::Posts),
            stylesheets: &css,
            inline_style: None,
        },
        html! {
            div class="page-header" {
                h1 class="page-title" { "Posts" }
                p class="page-subtitle" {
                    "Articles on neuroscience and psychology, written for curious minds."
                }
                span class="badge" { (count_label(posts.len(), "post")) }
            }

            @if posts.is_empty() {
                p class="empty-state" { "No posts published yet." }
            } @else {
                (card_grid(html! {
                    @for post in posts {
                        (post_card(
                            post,
                            &renderer.excerpt(&post.content, EXCERPT_CHARS),
                            reading_time(&post.content),
                            &page_file_name(&post.id),
                        ))
                    }
                }))
            }
        },
    )
}

/// Generates a post detail page
///
/// Written to `posts/<id>.html`. Renders the post body as markdown and
/// lists `comments` in the order given.
pub fn generate_detail(
    site: &Site<'_>,
    post: &Post,
    comments: &[&Comment],
    renderer: &MarkdownRenderer<'_>,
) -> Markup {
    let root = "../";
    let css = stylesheets(root, &["site.css", "markdown.css", "highlight.css"]);

    page_wrapper(
        &PageFrame {
            title: &post.title,
            site_name: Some(site.name),
            root,
            section: Some(Section::Posts),
            stylesheets: &css,
            inline_style: None,
        },
        html! {
            (breadcrumb(&[
                ("Posts", Some("index.html".to_string())),
                (post.title.as_str(), None),
            ]))

            article class="record" {
                header class="record-header" {
                    h1 class="record-title" { (post.title) }
                    div class="record-meta" {
                        @if let Some(tag) = &post.tag {
                            (tag_badge(tag))
                        }
                        (meta_item(Icon::Calendar, &format_date(&post.published_date)))
                        (meta_item(Icon::BookOpen, &reading_label(reading_time(&post.content))))
                        (meta_item(Icon::Eye, &views_label(post.click_count)))
                    }
                }
                div class="record-body markdown-content" {
                    (PreEscaped(renderer.render(&post.content)))
                }
            }

            (comment_section(comments, site.now))
        },
    )
}
