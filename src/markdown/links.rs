//! Link and image presentation policy for rendered markdown.

/// Browsing context every rendered link opens in.
pub const LINK_TARGET: &str = "_blank";

/// Relationship attached to every rendered link.
pub const LINK_REL: &str = "noopener noreferrer";

/// Presentational class attached to every rendered image.
pub const IMAGE_CLASS: &str = "markdown-image";

/// Decorates anchor and image tags in rendered HTML.
///
/// Finds all `<a ...>` and `<img ...>` tags produced by comrak and injects
/// the site policy attributes: links open in a new browsing context without
/// leaking the opener, images receive the fixed presentational class and lazy
/// loading. In-page anchors (`href="#..."`, as used by footnotes) are left as
/// they are. Tag contents and other attributes are left untouched.
///
/// Text inside code spans and blocks is already entity escaped by comrak, so
/// literal `<a` sequences written by authors never match here.
///
/// # Arguments
///
/// * `html`: HTML from markdown conversion
///
/// # Returns
///
/// HTML with decorated link and image tags
pub fn decorate_links(html: &str) -> String {
    let link_attrs = format!("<a target=\"{}\" rel=\"{}\" ", LINK_TARGET, LINK_REL);
    let image_attrs = format!("<img class=\"{}\" loading=\"lazy\" ", IMAGE_CLASS);

    let mut result = String::with_capacity(html.len() + html.len() / 8);
    let mut pos = 0;

    while pos < html.len() {
        let link_pos = html[pos..].find("<a ");
        let img_pos = html[pos..].find("<img ");

        let (tag_start, is_image) = match (link_pos, img_pos) {
            (Some(l), Some(i)) if l < i => (pos + l, false),
            (Some(l), None) => (pos + l, false),
            (None, Some(i)) => (pos + i, true),
            (Some(_), Some(i)) => (pos + i, true),
            (None, None) => {
                result.push_str(&html[pos..]);
                break;
            }
        };

        result.push_str(&html[pos..tag_start]);

        if is_image {
            result.push_str(&image_attrs);
            pos = tag_start + "<img ".len();
        } else {
            pos = tag_start + "<a ".len();
            if html[pos..].starts_with("href=\"#") {
                result.push_str("<a ");
            } else {
                result.push_str(&link_attrs);
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decorate_single_link() {
        // Arrange
        let html = r#"<p><a href="https://example.com">site</a></p>"#;

        // Act
        let result = decorate_links(html);

        // Assert
        assert_eq!(
            result,
            r#"<p><a target="_blank" rel="noopener noreferrer" href="https://example.com">site</a></p>"#
        );
    }

    #[test]
    fn test_decorate_skips_in_page_anchors() {
        // Arrange
        let html = r##"<sup><a href="#fn-1" id="fnref-1">1</a></sup><a href="#fnref-1" class="footnote-backref">back</a>"##;

        // Act
        let result = decorate_links(html);

        // Assert
        assert_eq!(result, html);
    }

    #[test]
    fn test_decorate_image() {
        // Arrange
        let html = r#"<p><img src="brain.png" alt="Brain" /></p>"#;

        // Act
        let result = decorate_links(html);

        // Assert
        assert_eq!(
            result,
            r#"<p><img class="markdown-image" loading="lazy" src="brain.png" alt="Brain" /></p>"#
        );
    }

    #[test]
    fn test_decorate_mixed_tags_in_order() {
        // Arrange
        let html = r#"<img src="a.png" /><a href="b">b</a><img src="c.png" />"#;

        // Act
        let result = decorate_links(html);

        // Assert
        assert_eq!(result.matches("class=\"markdown-image\"").count(), 2);
        assert_eq!(result.matches("target=\"_blank\"").count(), 1);
        let img_a = result.find("a.png").expect("first image kept");
        let link_b = result.find("href=\"b\"").expect("link kept");
        let img_c = result.find("c.png").expect("second image kept");
        assert!(img_a < link_b && link_b < img_c, "Order preserved: {}", result);
    }

    #[test]
    fn test_decorate_ignores_escaped_markup() {
        // Arrange
        let html = "<pre><code>&lt;a href=&quot;x&quot;&gt;</code></pre>";

        // Act
        let result = decorate_links(html);

        // Assert
        assert_eq!(result, html, "Escaped tags must not be decorated");
    }

    #[test]
    fn test_decorate_does_not_match_other_tags() {
        // Arrange
        let html = "<abbr title=\"x\">x</abbr><article>y</article>";

        // Act
        let result = decorate_links(html);

        // Assert
        assert_eq!(result, html);
    }

    #[test]
    fn test_decorate_empty() {
        assert_eq!(decorate_links(""), "");
    }
}
