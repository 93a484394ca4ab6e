//! WebVTT caption normalization.
//!
//! Auto-generated captions repeat each line as it "rolls" up the screen and
//! carry per-word timestamp and styling tags. Normalization reduces a caption
//! file to the spoken text, one line per caption line, with adjacent repeats
//! collapsed.

use regex::Regex;
use std::sync::OnceLock;

/// Token that must appear on the first line of a caption document.
pub const CAPTION_MARKER: &str = "WEBVTT";

/// Fixed header size dropped before cue processing.
const HEADER_LINES: usize = 4;

const TIME_RANGE_SEPARATOR: &str = "-->";
const POSITION_DIRECTIVES: &[&str] = &["align:", "position:"];

fn timestamp_tag_regex() -> &'static Regex {
    static TIMESTAMP_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    TIMESTAMP_TAG_REGEX
        .get_or_init(|| Regex::new(r"<(?:\d{2}:)?\d{2}:\d{2}\.\d{3}>").expect("timestamp tag regex is valid"))
}

fn style_tag_regex() -> &'static Regex {
    static STYLE_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    STYLE_TAG_REGEX.get_or_init(|| Regex::new(r"</?c(?:\.[^>]*)?>").expect("style tag regex is valid"))
}

/// Convert a raw WebVTT document into clean, deduplicated plain text.
///
/// Returns an empty string for blank input, documents shorter than the fixed
/// header, or documents whose first line lacks [`CAPTION_MARKER`]. Never fails.
pub fn normalize_captions(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }

    let lines: Vec<&str> = raw.lines().collect();
    if lines.len() < HEADER_LINES || !lines[0].contains(CAPTION_MARKER) {
        return String::new();
    }

    clean_cue_lines(lines[HEADER_LINES..].iter().copied())
}

/// Apply the cue-body cleaning pass to text that has no header.
///
/// Running this on its own output returns that output unchanged.
pub fn clean_cue_text(text: &str) -> String {
    clean_cue_lines(text.lines())
}

fn clean_cue_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> String {
    let mut kept: Vec<String> = Vec::new();

    for line in lines {
        if line.trim().is_empty() || is_cue_setting_line(line) {
            continue;
        }

        let cleaned = strip_inline_tags(line);
        if cleaned.is_empty() {
            continue;
        }

        // rolling captions repeat the previous line verbatim
        if kept.last().is_some_and(|prev| *prev == cleaned) {
            continue;
        }

        kept.push(cleaned);
    }

    kept.join("\n")
}

fn is_cue_setting_line(line: &str) -> bool {
    line.contains(TIME_RANGE_SEPARATOR) || POSITION_DIRECTIVES.iter().any(|d| line.contains(d))
}

fn strip_inline_tags(line: &str) -> String {
    let without_timestamps = timestamp_tag_regex().replace_all(line, "");
    let without_styles = style_tag_regex().replace_all(&without_timestamps, "");
    without_styles.trim().to_string()
}
