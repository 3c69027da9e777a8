use anyhow::{Context, Result};
use chrono::Utc;
use log::{info, warn};
use neuropress::content::filter;
use neuropress::{
    Command, Config, ContentExport, MarkdownRenderer, PublishArgs, PublishOptions, RenderArgs,
    SearchArgs, SearchQuery, document_css, format_date, pages, publish_site,
};
use std::fs;
use std::path::Path;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    match &config.command {
        Command::Render(args) => render(args),
        Command::Publish(args) => publish(args),
        Command::Search(args) => search(args),
    }
}

fn render(args: &RenderArgs) -> Result<()> {
    let renderer = MarkdownRenderer::new();
    let body = renderer.render_file(&args.input)?;
    let css = document_css(&args.theme)?;
    let html = pages::document::generate(&args.page_title(), &body, &css);

    let output = args.output_path();
    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(&output, html.into_string())
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!("Generated: {}", output.display());

    if !args.no_open {
        open_in_browser(&output);
    }

    Ok(())
}

fn publish(args: &PublishArgs) -> Result<()> {
    let export = ContentExport::load(&args.export)?;
    let renderer = MarkdownRenderer::new();
    let options = PublishOptions {
        site_name: args.site_name.clone(),
        theme: args.theme.clone(),
        now: Utc::now(),
    };

    let report = publish_site(&export, &args.output, &renderer, &options)
        .context("Failed to publish site")?;

    if !args.no_open
        && let Some(index) = report.index()
    {
        open_in_browser(index);
    }

    Ok(())
}

fn search(args: &SearchArgs) -> Result<()> {
    let export = ContentExport::load(&args.export)?;
    let query = SearchQuery::parse(&args.query, args.mode());

    if args.events {
        let events = export.published_events();
        for event in filter(events, &query) {
            println!("{}\t{}\t{}", event.id, format_date(&event.start_date), event.title);
        }
    } else {
        let posts = export.published_posts();
        for post in filter(posts, &query) {
            println!("{}\t{}\t{}", post.id, format_date(&post.published_date), post.title);
        }
    }

    Ok(())
}

fn open_in_browser(path: &Path) {
    if let Err(e) = open::that(path) {
        warn!("Failed to open {}: {}", path.display(), e);
    }
}
