//! Page layout wrapper component

use maud::{DOCTYPE, Markup, PreEscaped, html};

use super::footer::footer;
use super::nav::{Section, site_nav};

/// Document level settings for a generated page.
#[derive(Debug, Clone)]
pub struct PageFrame<'a> {
    /// Page title text, without the site suffix
    pub title: &'a str,
    /// Site name; pages without one are standalone documents with no
    /// navigation or footer
    pub site_name: Option<&'a str>,
    /// Relative prefix back to the site root
    pub root: &'a str,
    pub section: Option<Section>,
    pub stylesheets: &'a [String],
    /// CSS embedded in the head, for pages shipped as a single file
    pub inline_style: Option<&'a str>,
}

/// Wraps page content with standard HTML structure
///
/// Provides the DOCTYPE, head, and container structure shared by every
/// page. The caller provides page-specific body content.
pub fn page_wrapper(frame: &PageFrame<'_>, body: Markup) -> Markup {
    let full_title = match frame.site_name {
        Some(site) if !frame.title.is_empty() => format!("{} - {}", frame.title, site),
        Some(site) => site.to_string(),
        None => frame.title.to_string(),
    };

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (full_title) }
                script src="https://unpkg.com/@phosphor-icons/web" {}
                @for stylesheet in frame.stylesheets {
                    link rel="stylesheet" href=(stylesheet);
                }
                @if let Some(css) = frame.inline_style {
                    style { (PreEscaped(css)) }
                }
            }
            body {
                @if let Some(site) = frame.site_name {
                    (site_nav(site, frame.root, frame.section))
                }
                div class="container" {
                    (body)
                }
                @if let Some(site) = frame.site_name {
                    (footer(site, frame.root))
                }
            }
        }
    }
}
