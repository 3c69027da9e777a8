//! Not found page generation

use maud::{Markup, html};

use super::{Site, stylesheets};
use crate::components::icons::{Icon, icon};
use crate::components::layout::{PageFrame, page_wrapper};
use crate::components::nav::Section;

/// Static hosts serve this page for any missing path, so links are
/// absolute from the site root.
const ROOT: &str = "/";

/// Generates the `404.html` page
pub fn generate(site: &Site<'_>) -> Markup {
    let css = stylesheets(ROOT, &["site.css"]);

    page_wrapper(
        &PageFrame {
            title: "Page Not Found",
            site_name: Some(site.name),
            root: ROOT,
            section: None,
            stylesheets: &css,
            inline_style: None,
        },
        html! {
            section class="hero not-found" {
                div class="not-found-icon" { (icon(Icon::Brain)) }
                h1 class="hero-title" { "404" }
                h2 { "Page Not Found" }
                p class="hero-subtitle" {
                    "The page you're looking for doesn't exist or has been moved."
                }
                div class="hero-actions" {
                    a href=(Section::Home.href(ROOT)) class="button button-primary" {
                        (icon(Icon::ArrowLeft)) "Go Home"
                    }
                    a href=(Section::Posts.href(ROOT)) class="button" {
                        (icon(Icon::BookOpen)) "Browse posts"
                    }
                }
            }
        },
    )
}
