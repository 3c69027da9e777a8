//! Math typesetting for dollar-delimited expressions.

use latex2mathml::{DisplayStyle, latex_to_mathml};
use log::debug;

use super::text::{decode_entities, escape_html};

/// Opening of the placeholder span comrak emits for `$` and `$$` math.
const MATH_SPAN_OPEN: &str = "<span data-math-style=\"";
const SPAN_CLOSE: &str = "</span>";

/// Marker latex2mathml leaves in its output for input it could not parse.
const PARSE_ERROR_MARKER: &str = "[PARSE ERROR";

/// MathML elements whose content is text.
const TOKEN_ELEMENTS: &[&str] = &["mi", "mn", "mo", "ms", "mtext"];

/// How a math expression is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathDisplay {
    /// `$...$`, flows with surrounding text
    Inline,
    /// `$$...$$`, set on its own line
    Block,
}

impl MathDisplay {
    /// Maps comrak's `data-math-style` value to a display mode.
    fn from_style(style: &str) -> Self {
        if style == "display" {
            Self::Block
        } else {
            Self::Inline
        }
    }

    fn delimiter(self) -> &'static str {
        match self {
            Self::Inline => "$",
            Self::Block => "$$",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Inline => "math math-inline",
            Self::Block => "math math-display",
        }
    }
}

impl From<MathDisplay> for DisplayStyle {
    fn from(display: MathDisplay) -> Self {
        match display {
            MathDisplay::Inline => DisplayStyle::Inline,
            MathDisplay::Block => DisplayStyle::Block,
        }
    }
}

/// Typesets a single LaTeX expression to MathML wrapped in a styled span.
///
/// Malformed expressions degrade to their literal, delimited source inside a
/// `math-invalid` span. This never fails.
///
/// # Arguments
///
/// * `latex`: Expression source without delimiters
/// * `display`: Inline or block layout
///
/// # Returns
///
/// HTML fragment safe to embed in rendered output
pub fn typeset_expression(latex: &str, display: MathDisplay) -> String {
    let typeset = latex_to_mathml(latex, display.into())
        .map_err(|err| err.to_string())
        .and_then(|mathml| {
            if mathml.contains(PARSE_ERROR_MARKER) {
                Err("parse error in MathML output".to_string())
            } else {
                Ok(mathml)
            }
        });

    match typeset {
        Ok(mathml) => format!(
            "<span class=\"{}\">{}</span>",
            display.class(),
            escape_token_text(&mathml)
        ),
        Err(err) => {
            debug!("Math fallback to literal text for {:?}: {}", latex, err);
            let delimiter = display.delimiter();
            format!(
                "<span class=\"math math-invalid\">{}{}{}</span>",
                delimiter,
                escape_html(latex),
                delimiter
            )
        }
    }
}

/// Escapes the text content of MathML token elements.
///
/// latex2mathml writes operators such as `<` and text from `\text{}` as is,
/// which would otherwise read as markup.
fn escape_token_text(mathml: &str) -> String {
    let mut result = String::with_capacity(mathml.len());
    let mut pos = 0;

    while let Some(found) = mathml[pos..].find('<') {
        let tag_start = pos + found;
        let Some((name, open_len)) = token_open_tag(&mathml[tag_start..]) else {
            result.push_str(&mathml[pos..=tag_start]);
            pos = tag_start + 1;
            continue;
        };

        let content_start = tag_start + open_len;
        let close = format!("</{}>", name);
        let Some(len) = mathml[content_start..].find(&close) else {
            break;
        };
        let content_end = content_start + len;

        result.push_str(&mathml[pos..content_start]);
        result.push_str(&escape_html(&decode_entities(&mathml[content_start..content_end])));
        result.push_str(&close);
        pos = content_end + close.len();
    }

    result.push_str(&mathml[pos..]);
    result
}

/// Name and length of a token element's opening tag at the start of `tag`.
fn token_open_tag(tag: &str) -> Option<(&'static str, usize)> {
    let after_bracket = tag.strip_prefix('<')?;
    TOKEN_ELEMENTS.iter().find_map(|&name| {
        let rest = after_bracket.strip_prefix(name)?;
        if !rest.starts_with('>') && !rest.starts_with(' ') {
            return None;
        }
        let end = rest.find('>')?;
        Some((name, 1 + name.len() + end + 1))
    })
}

/// Replaces comrak math placeholder spans with typeset MathML.
///
/// comrak's `math_dollars` extension renders `$x$` as
/// `<span data-math-style="inline">x</span>` and `$$x$$` as
/// `<span data-math-style="display">x</span>`, with the expression HTML
/// escaped. Each span is decoded and passed through [`typeset_expression`].
/// Incomplete spans (truncated input) are copied through unchanged.
///
/// # Arguments
///
/// * `html`: HTML from markdown conversion
///
/// # Returns
///
/// HTML with typeset math
pub fn typeset_math(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut last_end = 0;
    let mut search_pos = 0;

    while let Some(found) = html[search_pos..].find(MATH_SPAN_OPEN) {
        let span_start = search_pos + found;
        let style_start = span_start + MATH_SPAN_OPEN.len();

        let style_end = match html[style_start..].find('"') {
            Some(p) => style_start + p,
            None => break,
        };

        let content_start = match html[style_end..].find('>') {
            Some(p) => style_end + p + 1,
            None => break,
        };

        let content_end = match html[content_start..].find(SPAN_CLOSE) {
            Some(p) => content_start + p,
            None => break,
        };

        let display = MathDisplay::from_style(&html[style_start..style_end]);
        let latex = decode_entities(&html[content_start..content_end]);

        result.push_str(&html[last_end..span_start]);
        result.push_str(&typeset_expression(&latex, display));

        last_end = content_end + SPAN_CLOSE.len();
        search_pos = last_end;
    }

    result.push_str(&html[last_end..]);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typeset_inline_expression() {
        // Act
        let html = typeset_expression("E=mc^2", MathDisplay::Inline);

        // Assert
        assert!(html.starts_with("<span class=\"math math-inline\">"));
        assert!(html.contains("<math"), "Should contain MathML: {}", html);
        assert!(!html.contains('$'), "Delimiters should be consumed: {}", html);
    }

    #[test]
    fn test_typeset_block_expression() {
        // Act
        let html = typeset_expression("\\frac{a}{b}", MathDisplay::Block);

        // Assert
        assert!(html.starts_with("<span class=\"math math-display\">"));
        assert!(html.contains("<math"), "Should contain MathML: {}", html);
    }

    #[test]
    fn test_typeset_malformed_falls_back_to_literal() {
        // Act
        let html = typeset_expression("x^{2", MathDisplay::Inline);

        // Assert
        assert_eq!(html, "<span class=\"math math-invalid\">$x^{2$</span>");
    }

    #[test]
    fn test_typeset_incomplete_commands_fall_back_to_literal() {
        for latex in ["\\frac{a}", "\\sqrt", "^"] {
            // Act
            let html = typeset_expression(latex, MathDisplay::Inline);

            // Assert
            assert_eq!(
                html,
                format!("<span class=\"math math-invalid\">${}$</span>", latex),
                "Should fall back for {:?}",
                latex
            );
            assert!(!html.contains("PARSE ERROR"));
        }
    }

    #[test]
    fn test_typeset_escapes_relational_operators() {
        // Act
        let html = typeset_expression("a<b", MathDisplay::Inline);

        // Assert
        assert!(html.contains("<mo>&lt;</mo>"), "Should escape operator: {}", html);
        assert!(!html.contains("<mo><</mo>"));
    }

    #[test]
    fn test_escape_token_text() {
        // Arrange
        let mathml = "<math><mrow><mi>a</mi><mo>></mo><mtext><b>hi</b></mtext><mover><mi>x</mi></mover></mrow></math>";

        // Act
        let result = escape_token_text(mathml);

        // Assert
        assert_eq!(
            result,
            "<math><mrow><mi>a</mi><mo>&gt;</mo><mtext>&lt;b&gt;hi&lt;/b&gt;</mtext><mover><mi>x</mi></mover></mrow></math>"
        );
    }

    #[test]
    fn test_typeset_fallback_escapes_source() {
        // Act
        let html = typeset_expression("a<b^{", MathDisplay::Block);

        // Assert
        assert!(html.contains("$$a&lt;b^{$$"), "Should escape: {}", html);
    }

    #[test]
    fn test_typeset_math_replaces_spans() {
        // Arrange
        let html = "<p>Energy <span data-math-style=\"inline\">E=mc^2</span> holds.</p>";

        // Act
        let result = typeset_math(html);

        // Assert
        assert!(result.starts_with("<p>Energy <span class=\"math math-inline\">"));
        assert!(result.ends_with(" holds.</p>"));
        assert!(!result.contains("data-math-style"));
    }

    #[test]
    fn test_typeset_math_decodes_entities() {
        // Arrange
        let html = "<span data-math-style=\"inline\">a &lt; b</span>";

        // Act
        let result = typeset_math(html);

        // Assert
        assert!(result.contains("<math"), "Should typeset: {}", result);
        assert!(!result.contains("&amp;lt;"), "No double escaping: {}", result);
    }

    #[test]
    fn test_typeset_math_unterminated_span_passthrough() {
        // Arrange
        let html = "<p><span data-math-style=\"inline\">x";

        // Act
        let result = typeset_math(html);

        // Assert
        assert_eq!(result, html);
    }

    #[test]
    fn test_typeset_math_without_math() {
        // Arrange
        let html = "<p><span class=\"other\">text</span></p>";

        // Act & Assert
        assert_eq!(typeset_math(html), html);
    }
}
