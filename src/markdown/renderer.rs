//! Markdown rendering with GitHub Flavored Markdown and math support.

use anyhow::{Context, Result};
use comrak::Options;
use log::debug;
use std::path::Path;
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use super::links::decorate_links;
use super::math::typeset_math;
use super::text::{collapse_whitespace, decode_entities, escape_html, to_plain_text, truncate_chars};

/// Markdown shown in place of an empty document.
pub const DEFAULT_PLACEHOLDER: &str = "*Nothing to preview*";

/// Renders markdown with math to sanitized, styled HTML.
///
/// One renderer backs both the editor's live preview and the published post
/// and event pages, so what authors preview is exactly what gets published.
/// Provides GFM extensions including tables, strikethrough, autolinks, task
/// lists and footnotes, typesets `$...$` and `$$...$$` math to MathML, and
/// highlights fenced code blocks with syntect CSS classes.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
    syntax_set: SyntaxSet,
    placeholder: String,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer with GitHub Flavored Markdown and math options.
    ///
    /// Configures extensions and security settings:
    /// - Tables, strikethrough, autolinks, task lists, footnotes
    /// - Dollar delimited inline and display math
    /// - Smart punctuation for quotes and dashes
    /// - Raw HTML omitted from output (author content is untrusted)
    pub fn new() -> Self {
        let mut options = Options::default();

        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options.extension.footnotes = true;
        options.extension.math_dollars = true;

        options.parse.smart = true;

        options.render.unsafe_ = false;

        let syntax_set = SyntaxSet::load_defaults_newlines();

        Self {
            options,
            syntax_set,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }

    /// Replaces the markdown rendered for empty documents.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Markdown rendered for empty documents.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Renders markdown content to HTML string.
    ///
    /// Parses markdown, then post-processes the HTML: link and image policy,
    /// math typesetting, code highlighting. Pure and deterministic; malformed
    /// markdown or math degrades to literal text instead of failing.
    ///
    /// # Arguments
    ///
    /// * `content`: Markdown source, possibly empty
    ///
    /// # Returns
    ///
    /// Rendered HTML; the rendered placeholder when `content` is empty
    pub fn render(&self, content: &str) -> String {
        let source = if content.is_empty() {
            self.placeholder.as_str()
        } else {
            content
        };

        let html = comrak::markdown_to_html(source, &self.options);
        let html = decorate_links(&html);
        let html = typeset_math(&html);

        self.highlight_code_blocks(&html)
    }

    /// Renders markdown file at given path.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read
    pub fn render_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read markdown file: {}", path.display()))?;
        Ok(self.render(&content))
    }

    /// Plain text preview of markdown source for listings.
    ///
    /// Formatting is stripped by rendering and flattening, whitespace is
    /// collapsed, and the text is cut at `max_chars` characters with a
    /// trailing ellipsis. Blank source yields an empty excerpt rather than the
    /// placeholder.
    pub fn excerpt(&self, source: &str, max_chars: usize) -> String {
        if source.trim().is_empty() {
            return String::new();
        }

        let text = collapse_whitespace(&to_plain_text(&self.render(source)));
        truncate_chars(&text, max_chars)
    }

    /// Post-processes HTML to apply syntax highlighting with CSS classes.
    ///
    /// Finds code blocks with language-* classes from comrak's output and
    /// replaces the plain text content with syntect highlighted HTML using
    /// CSS class names (hljs-* prefix).
    fn highlight_code_blocks(&self, html: &str) -> String {
        let mut result = String::with_capacity(html.len());
        let mut last_end = 0;
        let mut search_pos = 0;

        while let Some(code_start) = html[search_pos..].find("<code class=\"language-") {
            let code_start = search_pos + code_start;

            let lang_start = code_start + "<code class=\"language-".len();
            let lang_end = match html[lang_start..].find('"') {
                Some(pos) => lang_start + pos,
                None => {
                    search_pos = code_start + 1;
                    continue;
                }
            };

            let language = &html[lang_start..lang_end];

            let content_start = match html[lang_end..].find('>') {
                Some(pos) => lang_end + pos + 1,
                None => {
                    search_pos = code_start + 1;
                    continue;
                }
            };

            let content_end = match html[content_start..].find("</code>") {
                Some(pos) => content_start + pos,
                None => {
                    search_pos = code_start + 1;
                    continue;
                }
            };

            let decoded_content = decode_entities(&html[content_start..content_end]);

            result.push_str(&html[last_end..code_start]);
            result.push_str("<code class=\"language-");
            result.push_str(language);
            result.push_str("\">");
            result.push_str(&self.highlight_code(&decoded_content, language));
            result.push_str("</code>");

            last_end = content_end + "</code>".len();
            search_pos = last_end;
        }

        result.push_str(&html[last_end..]);
        result
    }

    /// Highlights code with syntect using CSS classes.
    ///
    /// Unknown languages and highlighter failures fall back to escaped plain
    /// text.
    fn highlight_code(&self, code: &str, language: &str) -> String {
        if code.is_empty() {
            return String::new();
        }

        let syntax = self
            .syntax_set
            .find_syntax_by_token(language)
            .or_else(|| self.syntax_set.find_syntax_by_extension(language));

        let Some(syntax) = syntax else {
            return escape_html(code);
        };

        let mut generator = ClassedHTMLGenerator::new_with_class_style(
            syntax,
            &self.syntax_set,
            ClassStyle::SpacedPrefixed { prefix: "hljs-" },
        );

        for line in LinesWithEndings::from(code) {
            if let Err(err) = generator.parse_html_for_line_which_includes_newline(line) {
                debug!("Highlighting {} block failed, using plain text: {}", language, err);
                return escape_html(code);
            }
        }

        generator.finalize()
    }
}

impl<'a> Default for MarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}
