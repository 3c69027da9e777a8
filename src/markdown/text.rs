//! Plain text helpers for rendered HTML.

/// Words per minute assumed by [`reading_time`].
const WORDS_PER_MINUTE: usize = 200;

/// Tags that end a line of text when flattening HTML.
const BLOCK_TAGS: &[&str] = &[
    "p", "div", "br", "li", "pre", "blockquote", "tr", "h1", "h2", "h3", "h4", "h5", "h6", "hr",
    "table", "ul", "ol",
];

/// Escapes HTML special characters.
pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Decodes the named and numeric entities comrak emits.
///
/// Unknown entities are copied through literally.
pub(crate) fn decode_entities(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(amp) = rest.find('&') {
        result.push_str(&rest[..amp]);
        let tail = &rest[amp..];

        let Some(semi) = tail.find(';').filter(|&semi| semi <= 11) else {
            result.push('&');
            rest = &tail[1..];
            continue;
        };

        let entity = &tail[1..semi];
        let decoded = match entity {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            "nbsp" => Some('\u{a0}'),
            _ => entity
                .strip_prefix("#x")
                .or_else(|| entity.strip_prefix("#X"))
                .and_then(|hex| u32::from_str_radix(hex, 16).ok())
                .or_else(|| entity.strip_prefix('#').and_then(|dec| dec.parse().ok()))
                .and_then(char::from_u32),
        };

        match decoded {
            Some(c) => {
                result.push(c);
                rest = &tail[semi + 1..];
            }
            None => {
                result.push('&');
                rest = &tail[1..];
            }
        }
    }

    result.push_str(rest);
    result
}

/// Flattens rendered HTML to readable plain text.
///
/// Tags are dropped, block level tags break lines, entities are decoded and
/// blank lines removed. Rendering the result again is stable: the output
/// contains no markup of its own.
///
/// # Arguments
///
/// * `html`: Rendered HTML
///
/// # Returns
///
/// Plain text with one line per text block
pub fn to_plain_text(html: &str) -> String {
    let mut flat = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(open) = rest.find('<') {
        flat.push_str(&rest[..open]);
        let Some(close) = rest[open..].find('>') else {
            flat.push_str(&rest[open..]);
            rest = "";
            break;
        };

        let tag = &rest[open + 1..open + close];
        let name = tag
            .trim_start_matches('/')
            .split(|c: char| c.is_whitespace() || c == '/')
            .next()
            .unwrap_or("");
        if BLOCK_TAGS.contains(&name) {
            flat.push('\n');
        }

        rest = &rest[open + close + 1..];
    }
    flat.push_str(rest);

    decode_entities(&flat)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Collapses all whitespace runs to single spaces.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncates to `max_chars` characters, appending `...` when cut.
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", text[..cut].trim_end()),
        None => text.to_string(),
    }
}

/// Estimated minutes to read markdown source.
///
/// Counts whitespace separated words at 200 words per minute, rounding up.
/// Never returns less than one minute.
pub fn reading_time(source: &str) -> usize {
    let words = source.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<a href=\"x\">Tom & Jerry's</a>"),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_decode_named_entities() {
        assert_eq!(decode_entities("a &lt; b &amp;&amp; c &gt; d"), "a < b && c > d");
        assert_eq!(decode_entities("&quot;hi&quot;"), "\"hi\"");
    }

    #[test]
    fn test_decode_numeric_entities() {
        assert_eq!(decode_entities("it&#39;s"), "it's");
        assert_eq!(decode_entities("&#x2014;"), "\u{2014}");
    }

    #[test]
    fn test_decode_leaves_unknown_and_bare_ampersands() {
        assert_eq!(decode_entities("R&D"), "R&D");
        assert_eq!(decode_entities("&bogus;"), "&bogus;");
        assert_eq!(decode_entities("trailing &"), "trailing &");
    }

    #[test]
    fn test_escape_then_decode_restores_text() {
        let text = "x < y & \"z\" 'w'";
        assert_eq!(decode_entities(&escape_html(text)), text);
    }

    #[test]
    fn test_to_plain_text_blocks() {
        // Arrange
        let html = "<h1>Title</h1>\n<p>Some <strong>bold</strong> text.</p>\n<ul>\n<li>One</li>\n<li>Two</li>\n</ul>\n";

        // Act
        let text = to_plain_text(html);

        // Assert
        assert_eq!(text, "Title\nSome bold text.\nOne\nTwo");
    }

    #[test]
    fn test_to_plain_text_decodes_entities() {
        assert_eq!(to_plain_text("<p>1 &lt; 2</p>"), "1 < 2");
    }

    #[test]
    fn test_to_plain_text_unclosed_tag() {
        assert_eq!(to_plain_text("text <broken"), "text <broken");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a\n\n b\t c  "), "a b c");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("exactly", 7), "exactly");
        assert_eq!(truncate_chars("hello world", 6), "hello...");
        assert_eq!(truncate_chars("héllo wörld", 4), "héll...");
    }

    #[test]
    fn test_reading_time() {
        assert_eq!(reading_time(""), 1);
        assert_eq!(reading_time("one two three"), 1);
        assert_eq!(reading_time(&"word ".repeat(200)), 1);
        assert_eq!(reading_time(&"word ".repeat(201)), 2);
        assert_eq!(reading_time(&"word ".repeat(1000)), 5);
    }
}
