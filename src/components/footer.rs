//! Site footer component

use maud::{Markup, html};

use super::nav::Section;

/// Renders the site footer with quick links.
///
/// `root` is the relative prefix from the current page back to the site root.
pub fn footer(site_name: &str, root: &str) -> Markup {
    html! {
        footer class="site-footer" {
            div class="footer-inner" {
                div class="footer-brand" {
                    span class="footer-name" { (site_name) }
                    p class="footer-tagline" {
                        "Neuroscience and psychology, explained by students for students."
                    }
                }
                nav class="footer-links" aria-label="Quick links" {
                    h2 class="footer-heading" { "Quick Links" }
                    @for section in Section::ALL {
                        a href=(section.href(root)) { (section.label()) }
                    }
                }
            }
        }
    }
}
