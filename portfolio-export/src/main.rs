//! # portfolio-export
//!
//! Prerenders the portfolio page to `index.html` so it can be served from
//! any static host without the wasm bundle.
//!
//! ## Usage
//!
//! ```bash
//! # Embedded content, written to ./dist/index.html
//! portfolio-export
//!
//! # Custom content, checking that every referenced image exists
//! portfolio-export --content site.toml --assets portfolio/public --out public_html
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use portfolio::{SiteContent, render_page};
use tracing::{debug, info, warn};

#[derive(Parser, Debug)]
#[command(name = "portfolio-export")]
#[command(about = "Render the portfolio page to a static index.html")]
#[command(version)]
struct Args {
    /// Directory that receives index.html (created if missing)
    #[arg(long, default_value = "dist")]
    out: PathBuf,

    /// TOML content document to render instead of the embedded one
    #[arg(long)]
    content: Option<PathBuf>,

    /// Static asset directory to check referenced images against
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn load_content(path: Option<&Path>) -> Result<SiteContent> {
    match path {
        Some(path) => {
            let source = fs::read_to_string(path)
                .with_context(|| format!("failed to read content file {}", path.display()))?;
            SiteContent::from_toml_str(&source)
                .with_context(|| format!("invalid content in {}", path.display()))
        }
        None => SiteContent::embedded().context("embedded content is invalid"),
    }
}

/// Referenced images that are not present under `assets_dir`.
fn missing_assets<'a>(content: &'a SiteContent, assets_dir: &Path) -> Vec<&'a str> {
    content
        .asset_paths()
        .into_iter()
        .filter(|asset| !assets_dir.join(asset.trim_start_matches('/')).is_file())
        .collect()
}

fn run(args: &Args) -> Result<PathBuf> {
    let content = load_content(args.content.as_deref())?;
    let source = args
        .content
        .as_deref()
        .map_or_else(|| "embedded".to_string(), |p| p.display().to_string());
    info!(projects = content.projects.len(), source = %source, "content loaded");

    if let Some(assets_dir) = &args.assets {
        let missing = missing_assets(&content, assets_dir);
        for asset in &missing {
            warn!(asset = %asset, dir = %assets_dir.display(), "referenced image not found");
        }
        if missing.is_empty() {
            debug!(dir = %assets_dir.display(), "all referenced images present");
        }
    }

    let html = render_page(&content);

    fs::create_dir_all(&args.out)
        .with_context(|| format!("failed to create output directory {}", args.out.display()))?;
    let target = args.out.join("index.html");
    fs::write(&target, &html)
        .with_context(|| format!("failed to write {}", target.display()))?;

    info!(path = %target.display(), bytes = html.len(), "page exported");
    Ok(target)
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(&args) {
        Ok(target) => {
            println!("{}", target.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("[portfolio-export] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
