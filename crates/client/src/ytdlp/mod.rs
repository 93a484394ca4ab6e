//! yt-dlp backed transcript source.
//!
//! ### Invocation
//! - Fresh temporary directory per fetch, removed when the fetch returns
//! - Manual and auto-generated subtitles, WebVTT only, no media download
//! - Single video only (`--no-playlist`)
//!
//! ### Failure mapping
//! - Executable missing or not spawnable: `SOURCE_UNAVAILABLE`
//! - Deadline exceeded (child is killed): `SOURCE_TIMEOUT`
//! - Non-zero exit: `SOURCE_FAILED` with the extractor's error lines
//! - Clean exit without caption files: `NO_CAPTIONS`

pub mod captions;

use std::ffi::OsString;
use std::path::Path;
use std::process::Stdio;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::process::Command;
use vidscript_core::{AppConfig, Error, RawTranscript, TranscriptSource};

pub use captions::{CAPTION_EXTENSION, collect_captions};

/// Longest stderr excerpt carried in a `SOURCE_FAILED` message.
const MAX_STDERR_CHARS: usize = 500;

/// Configuration for the yt-dlp source.
#[derive(Debug, Clone)]
pub struct YtDlpConfig {
    /// Executable name or path (default: "yt-dlp")
    pub program: String,

    /// Comma-separated subtitle languages (default: "en")
    pub sub_langs: String,

    /// Deadline for one extractor run (default: 120s)
    pub timeout: Duration,
}

impl Default for YtDlpConfig {
    fn default() -> Self {
        Self { program: "yt-dlp".to_string(), sub_langs: "en".to_string(), timeout: Duration::from_secs(120) }
    }
}

impl From<&AppConfig> for YtDlpConfig {
    fn from(config: &AppConfig) -> Self {
        Self { program: config.ytdlp_path.clone(), sub_langs: config.sub_langs.clone(), timeout: config.timeout() }
    }
}

/// Transcript source that shells out to yt-dlp.
#[derive(Debug, Clone)]
pub struct YtDlpSource {
    config: YtDlpConfig,
}

impl YtDlpSource {
    pub fn new(config: YtDlpConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &YtDlpConfig {
        &self.config
    }

    /// Arguments for one run, writing captions under `out_dir`.
    pub fn build_args(&self, url: &str, out_dir: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = [
            "--write-auto-sub",
            "--write-sub",
            "--sub-langs",
            self.config.sub_langs.as_str(),
            "--sub-format",
            CAPTION_EXTENSION,
            "--skip-download",
            "--no-playlist",
            "--no-warnings",
            "--output",
        ]
        .into_iter()
        .map(OsString::from)
        .collect();

        args.push(out_dir.join("%(id)s.%(ext)s").into_os_string());
        args.push("--".into());
        args.push(url.into());
        args
    }

    async fn run(&self, url: &str, out_dir: &Path) -> Result<(), Error> {
        let program = &self.config.program;
        let mut command = Command::new(program);
        command
            .args(self.build_args(url, out_dir))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let start = Instant::now();
        let output = match tokio::time::timeout(self.config.timeout, command.output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::SourceUnavailable(format!("{program} not found: {e}")));
            }
            Ok(Err(e)) => return Err(Error::SourceUnavailable(format!("failed to run {program}: {e}"))),
            Err(_) => {
                return Err(Error::SourceTimeout(format!(
                    "{program} did not finish within {}ms",
                    self.config.timeout.as_millis()
                )));
            }
        };

        tracing::debug!(
            "{} exited with {} in {}ms for {}",
            program,
            output.status,
            start.elapsed().as_millis(),
            url
        );

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::SourceFailed(format!(
                "{program} exited with {}: {}",
                output.status,
                summarize_stderr(&stderr)
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl TranscriptSource for YtDlpSource {
    async fn fetch_raw_transcripts(&self, url: &str) -> Result<Vec<RawTranscript>, Error> {
        let workdir = tempfile::Builder::new().prefix("vidscript-").tempdir()?;

        self.run(url, workdir.path()).await?;

        let captions = collect_captions(workdir.path()).await?;
        if captions.is_empty() {
            return Err(Error::NoCaptions(format!("no '{}' captions available for {url}", self.config.sub_langs)));
        }

        tracing::debug!(url, files = captions.len(), "collected caption files");

        Ok(captions)
    }
}

/// Keep the extractor's `ERROR:` lines, or its last line when there are none.
fn summarize_stderr(stderr: &str) -> String {
    let errors: Vec<&str> = stderr
        .lines()
        .map(str::trim)
        .filter(|l| l.starts_with("ERROR"))
        .collect();

    let summary = if errors.is_empty() {
        stderr.lines().map(str::trim).rfind(|l| !l.is_empty()).unwrap_or("no error output").to_string()
    } else {
        errors.join("; ")
    };

    summary.chars().take(MAX_STDERR_CHARS).collect()
}
