//! Command-line interface parsing for the transcript CLI.
//!
//! Runs the same fetch, normalize and paginate pipeline as the MCP server,
//! without needing an MCP client.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Fetch and page through video transcripts from the terminal.
#[derive(Parser, Debug)]
#[command(name = "transcript")]
#[command(about = "Fetch, normalize and page through video transcripts")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Fetch a video's transcript and print one chunk
    ///
    /// Examples:
    ///   transcript fetch https://youtu.be/dQw4w9WgXcQ
    ///   transcript fetch https://youtu.be/dQw4w9WgXcQ --chunk 2 --chunk-size 5000
    Fetch {
        /// Video URL, passed to yt-dlp as-is
        url: String,

        /// 0-based chunk index to print
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        chunk: i64,

        /// Characters per chunk (defaults to the configured chunk size)
        #[arg(long)]
        chunk_size: Option<usize>,

        /// Also print chunk metadata as JSON on stderr
        #[arg(long)]
        meta: bool,
    },

    /// Normalize a local WebVTT file and print the plain text
    Normalize {
        /// Path to a .vtt file
        path: PathBuf,
    },
}
