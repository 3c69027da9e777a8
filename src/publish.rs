//! Static site publishing from a content export.

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use log::{debug, info};
use maud::Markup;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::assets::write_css_assets;
use crate::content::ContentExport;
use crate::markdown::MarkdownRenderer;
use crate::pages::{self, Site};
use crate::util::page_file_name;

/// Settings for one publish run.
#[derive(Debug, Clone)]
pub struct PublishOptions {
    pub site_name: String,
    /// Syntax highlighting theme bundled with syntect
    pub theme: String,
    /// Reference time for event status and comment dates
    pub now: DateTime<Utc>,
}

/// Summary of a publish run.
#[derive(Debug, Clone, Default)]
pub struct PublishReport {
    pub posts: usize,
    pub events: usize,
    pub comments: usize,
    /// Every HTML page written, home page first
    pub pages: Vec<PathBuf>,
    written: HashSet<PathBuf>,
}

impl PublishReport {
    /// Path of the generated home page, if any page was written.
    pub fn index(&self) -> Option<&Path> {
        self.pages.first().map(PathBuf::as_path)
    }
}

/// Generates the public site into `output_dir`
///
/// Writes `index.html`, `posts/index.html`, one `posts/<id>.html` per
/// published post, `events/index.html`, one `events/<id>.html` per
/// published event, `404.html`, and the stylesheets under `assets/`. Drafts
/// are skipped and only visible comments are rendered.
///
/// # Errors
///
/// Returns error if a directory or page cannot be written, two pages map to
/// the same file, or the highlight theme is unknown
pub fn publish_site(
    export: &ContentExport,
    output_dir: &Path,
    renderer: &MarkdownRenderer<'_>,
    options: &PublishOptions,
) -> Result<PublishReport> {
    let site = Site {
        name: &options.site_name,
        now: options.now,
    };

    let posts = export.published_posts();
    let events = export.published_events();
    debug!(
        "Publishing {} of {} posts and {} of {} events",
        posts.len(),
        export.posts.len(),
        events.len(),
        export.events.len()
    );

    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;
    write_css_assets(&output_dir.join("assets"), &options.theme)?;

    let mut report = PublishReport {
        posts: posts.len(),
        events: events.len(),
        ..PublishReport::default()
    };

    let home = pages::home::generate(&site, &posts, &events, renderer);
    write_page(&mut report, &output_dir.join("index.html"), home)?;

    let posts_dir = output_dir.join("posts");
    fs::create_dir_all(&posts_dir).context("Failed to create posts directory")?;
    let list = pages::posts::generate_list(&site, &posts, renderer);
    write_page(&mut report, &posts_dir.join("index.html"), list)?;

    for post in &posts {
        let comments = export.comments_for_post(&post.id);
        report.comments += comments.len();
        let page = pages::posts::generate_detail(&site, post, &comments, renderer);
        write_page(&mut report, &posts_dir.join(page_file_name(&post.id)), page)?;
    }

    let events_dir = output_dir.join("events");
    fs::create_dir_all(&events_dir).context("Failed to create events directory")?;
    let list = pages::events::generate_list(&site, &events, renderer);
    write_page(&mut report, &events_dir.join("index.html"), list)?;

    for event in &events {
        let comments = export.comments_for_event(&event.id);
        report.comments += comments.len();
        let page = pages::events::generate_detail(&site, event, &comments, renderer);
        write_page(&mut report, &events_dir.join(page_file_name(&event.id)), page)?;
    }

    let not_found = pages::not_found::generate(&site);
    write_page(&mut report, &output_dir.join("404.html"), not_found)?;

    info!(
        "Published {} pages ({} posts, {} events, {} comments) to {}",
        report.pages.len(),
        report.posts,
        report.events,
        report.comments,
        output_dir.display()
    );

    Ok(report)
}

fn write_page(report: &mut PublishReport, path: &Path, html: Markup) -> Result<()> {
    if !report.written.insert(path.to_path_buf()) {
        bail!("Two pages map to the same file: {}", path.display());
    }
    fs::write(path, html.into_string())
        .with_context(|| format!("Failed to write page {}", path.display()))?;
    info!("Generated: {}", path.display());
    report.pages.push(path.to_path_buf());
    Ok(())
}
