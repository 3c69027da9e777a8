//! Site navigation and breadcrumb components

use maud::{Markup, html};

use super::icons::{Icon, icon};

/// Top level site sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Posts,
    Events,
}

impl Section {
    pub const ALL: [Section; 3] = [Self::Home, Self::Posts, Self::Events];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Posts => "Posts",
            Self::Events => "Events",
        }
    }

    /// Link to the section index from a page at `root`.
    pub fn href(&self, root: &str) -> String {
        match self {
            Self::Home => format!("{}index.html", root),
            Self::Posts => format!("{}posts/index.html", root),
            Self::Events => format!("{}events/index.html", root),
        }
    }
}

/// Renders the site header with brand link and section links
///
/// The active section is marked with `aria-current="page"`.
pub fn site_nav(site_name: &str, root: &str, active: Option<Section>) -> Markup {
    html! {
        header class="site-header" {
            a href=(Section::Home.href(root)) class="site-brand" {
                (icon(Icon::Brain))
                span { (site_name) }
            }
            nav class="site-nav" {
                @for section in Section::ALL {
                    @if Some(section) == active {
                        a href=(section.href(root)) class="nav-link nav-active" aria-current="page" {
                            (section.label())
                        }
                    } @else {
                        a href=(section.href(root)) class="nav-link" { (section.label()) }
                    }
                }
            }
        }
    }
}

/// Renders breadcrumb navigation
///
/// Each component has an optional link target; `None` marks the current page.
pub fn breadcrumb(components: &[(&str, Option<String>)]) -> Markup {
    html! {
        div class="breadcrumb" {
            @for (i, (component, href)) in components.iter().enumerate() {
                @if i > 0 {
                    span class="breadcrumb-separator" { "/" }
                }
                @if let Some(link) = href {
                    a href=(link) class="breadcrumb-link" { (*component) }
                } @else {
                    span class="breadcrumb-current" { (*component) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_href_from_nested_page() {
        assert_eq!(Section::Home.href("../"), "../index.html");
        assert_eq!(Section::Events.href(""), "events/index.html");
    }

    #[test]
    fn test_site_nav_marks_active_section() {
        // Act
        let html = site_nav("Brainwaves", "../", Some(Section::Posts)).into_string();

        // Assert
        assert!(html.contains("Brainwaves"));
        assert!(html.contains(r#"href="../posts/index.html" class="nav-link nav-active" aria-current="page""#));
        assert_eq!(html.matches("aria-current").count(), 1);
    }

    #[test]
    fn test_breadcrumb_current_is_not_linked() {
        // Act
        let html = breadcrumb(&[
            ("Posts", Some("index.html".to_string())),
            ("Sleep", None),
        ])
        .into_string();

        // Assert
        assert!(html.contains(r#"<a href="index.html" class="breadcrumb-link">Posts</a>"#));
        assert!(html.contains(r#"<span class="breadcrumb-current">Sleep</span>"#));
        assert_eq!(html.matches("breadcrumb-separator").count(), 1);
    }
}
