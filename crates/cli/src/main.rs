//! transcript CLI entry point.
//!
//! Logs go to stderr; stdout carries only transcript text.

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use vidscript_client::{YtDlpConfig, YtDlpSource};
use vidscript_core::{AppConfig, Error, TranscriptCache, config::MAX_CHUNK_SIZE, page, transcript::normalize_captions};

mod cli;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Fetch { url, chunk, chunk_size, meta } => fetch(&url, chunk, chunk_size, meta).await,
        Command::Normalize { path } => {
            let raw = std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            println!("{}", normalize_captions(&raw));
            Ok(())
        }
    }
}

async fn fetch(url: &str, chunk: i64, chunk_size: Option<usize>, meta: bool) -> Result<()> {
    let config = AppConfig::load()?;

    let chunk_size = chunk_size.unwrap_or(config.default_chunk_size);
    if chunk_size == 0 || chunk_size > MAX_CHUNK_SIZE {
        bail!(Error::InvalidInput(format!("chunk_size must be between 1 and {MAX_CHUNK_SIZE}")));
    }

    let cache = TranscriptCache::new(config.cache_ttl());
    let source = YtDlpSource::new(YtDlpConfig::from(&config));
    let entry = cache.get_or_populate(url, chunk_size, &source).await?;

    let rendered = page::render(&entry, chunk).map_err(Error::from)?;
    println!("{}", rendered.text);

    if meta {
        eprintln!("{}", serde_json::to_string_pretty(&rendered.meta)?);
    }

    Ok(())
}
