//! Command line configuration.

use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::assets::DEFAULT_THEME;
use crate::content::SearchMode;

/// Command line configuration for Neuropress.
#[derive(Debug, Clone, Parser)]
#[command(name = "neuropress", version, about, long_about = None)]
pub struct Config {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Render one markdown file to a standalone HTML page
    Render(RenderArgs),
    /// Build the public site from a JSON content export
    Publish(PublishArgs),
    /// List published posts or events matching a query
    Search(SearchArgs),
}

#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// Markdown file to render
    pub input: PathBuf,

    /// Output HTML file (defaults to the input with an .html extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Page title (defaults to the input file name)
    #[arg(long)]
    pub title: Option<String>,

    /// Syntax highlighting theme (InspiredGitHub, base16-ocean.dark, etc.)
    #[arg(long, default_value = DEFAULT_THEME)]
    pub theme: String,

    /// Do not open the result in a browser
    #[arg(long)]
    pub no_open: bool,
}

#[derive(Debug, Clone, Args)]
pub struct PublishArgs {
    /// Content export JSON file
    pub export: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Site name shown in the header and titles
    #[arg(long, default_value = "Neuropress")]
    pub site_name: String,

    /// Syntax highlighting theme (InspiredGitHub, base16-ocean.dark, etc.)
    #[arg(long, default_value = DEFAULT_THEME)]
    pub theme: String,

    /// Do not open the home page in a browser
    #[arg(long)]
    pub no_open: bool,
}

#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    /// Content export JSON file
    pub export: PathBuf,

    /// Query, e.g. "memory" or "@tag neuroscience"
    #[arg(default_value = "")]
    pub query: String,

    /// Search events instead of posts
    #[arg(long)]
    pub events: bool,

    /// Match title, content, and tag instead of the @attribute syntax
    #[arg(long)]
    pub full_text: bool,
}

impl SearchArgs {
    pub fn mode(&self) -> SearchMode {
        if self.full_text {
            SearchMode::FullText
        } else {
            SearchMode::Attribute
        }
    }
}

impl RenderArgs {
    /// Output path, derived from the input when not given.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input.with_extension("html"))
    }

    /// Page title, derived from the input file name when not given.
    pub fn page_title(&self) -> String {
        self.title.clone().unwrap_or_else(|| {
            self.input
                .file_stem()
                .and_then(|n| n.to_str())
                .unwrap_or("Document")
                .to_string()
        })
    }
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if an input file does not exist, rendering would
    /// overwrite its own input, or the site name is blank.
    pub fn validate(&self) -> Result<()> {
        match &self.command {
            Command::Render(args) => {
                require_file(&args.input, "Markdown file")?;
                if args.output_path() == args.input {
                    bail!(
                        "Output would overwrite the input file: {}",
                        args.input.display()
                    );
                }
            }
            Command::Publish(args) => {
                require_file(&args.export, "Content export")?;
                if args.site_name.trim().is_empty() {
                    bail!("Site name must not be empty");
                }
            }
            Command::Search(args) => require_file(&args.export, "Content export")?,
        }

        Ok(())
    }
}

fn require_file(path: &Path, what: &str) -> Result<()> {
    if !path.exists() {
        bail!("{} does not exist: {}", what, path.display());
    }
    if !path.is_file() {
        bail!("{} is not a file: {}", what, path.display());
    }
    Ok(())
}
