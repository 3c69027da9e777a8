//! Standalone document page for rendering a single markdown file

use maud::{Markup, PreEscaped, html};

use crate::components::layout::{PageFrame, page_wrapper};

/// Generates a self-contained page around rendered markdown
///
/// The stylesheet is embedded so the page can be opened on its own.
///
/// # Arguments
///
/// * `title`: Page title
/// * `body_html`: Output of [`MarkdownRenderer::render`](crate::MarkdownRenderer::render)
/// * `css`: Stylesheet text to embed
pub fn generate(title: &str, body_html: &str, css: &str) -> Markup {
    page_wrapper(
        &PageFrame {
            title,
            site_name: None,
            root: "",
            section: None,
            stylesheets: &[],
            inline_style: Some(css),
        },
        html! {
            article class="document markdown-content" {
                (PreEscaped(body_html))
            }
        },
    )
}
