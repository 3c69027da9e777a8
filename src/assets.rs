//! CSS asset bundling

use anyhow::{Context, Result, anyhow};
use std::{fs, path::Path};
use syntect::highlighting::ThemeSet;
use syntect::html::{ClassStyle, css_for_theme_with_class_style};

const BASE: &str = include_str!("../assets/base.css");
const LAYOUT: &str = include_str!("../assets/components/layout.css");
const NAV: &str = include_str!("../assets/components/nav.css");
const CARDS: &str = include_str!("../assets/components/cards.css");
const COMMENTS: &str = include_str!("../assets/components/comments.css");

const MARKDOWN: &str = include_str!("../assets/markdown.css");

/// Highlight theme used when none is configured.
pub const DEFAULT_THEME: &str = "InspiredGitHub";

/// Stylesheet for the site chrome: layout, navigation, cards, comments.
pub fn site_css() -> String {
    [BASE, LAYOUT, NAV, CARDS, COMMENTS].join("\n")
}

/// Stylesheet for rendered markdown bodies.
pub fn markdown_css() -> &'static str {
    MARKDOWN
}

/// Code highlighting stylesheet for a bundled syntect theme
///
/// Class names carry the same `hljs-` prefix the renderer emits.
///
/// # Errors
///
/// Returns error if the theme is not bundled
pub fn highlight_css(theme: &str) -> Result<String> {
    let themes = ThemeSet::load_defaults();
    let selected = themes.themes.get(theme).ok_or_else(|| {
        let mut known: Vec<&str> = themes.themes.keys().map(String::as_str).collect();
        known.sort_unstable();
        anyhow!("Unknown highlight theme '{}' (available: {})", theme, known.join(", "))
    })?;

    css_for_theme_with_class_style(selected, ClassStyle::SpacedPrefixed { prefix: "hljs-" })
        .with_context(|| format!("Failed to generate CSS for theme {}", theme))
}

/// Stylesheet embedded in standalone rendered documents.
///
/// # Errors
///
/// Returns error if the theme is not bundled
pub fn document_css(theme: &str) -> Result<String> {
    let highlight = highlight_css(theme)?;
    Ok([BASE, MARKDOWN, highlight.as_str(), LAYOUT].join("\n"))
}

/// Writes all bundled CSS assets to output directory
///
/// # Errors
///
/// Returns error if the theme is unknown or a file cannot be written
pub fn write_css_assets(assets_dir: &Path, theme: &str) -> Result<()> {
    fs::create_dir_all(assets_dir)
        .with_context(|| format!("Failed to create assets directory: {}", assets_dir.display()))?;

    write_asset(assets_dir, "site.css", &site_css())?;
    write_asset(assets_dir, "markdown.css", MARKDOWN)?;
    write_asset(assets_dir, "highlight.css", &highlight_css(theme)?)?;
    Ok(())
}

fn write_asset(dir: &Path, name: &str, css: &str) -> Result<()> {
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}
