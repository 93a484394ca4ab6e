//! Reading caption files written by the extractor.

use std::path::Path;

use vidscript_core::{Error, RawTranscript};

/// Extension of caption files requested from yt-dlp.
pub const CAPTION_EXTENSION: &str = "vtt";

/// Read every caption file in `dir`, ordered by file name.
///
/// Files with other extensions are ignored. Invalid UTF-8 is replaced rather
/// than rejected.
pub async fn collect_captions(dir: &Path) -> Result<Vec<RawTranscript>, Error> {
    let mut captions = Vec::new();
    let mut entries = tokio::fs::read_dir(dir).await?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(CAPTION_EXTENSION) {
            continue;
        }

        let bytes = tokio::fs::read(&path).await?;
        let label = entry.file_name().to_string_lossy().into_owned();
        captions.push(RawTranscript::new(label, String::from_utf8_lossy(&bytes)));
    }

    captions.sort_by(|a, b| a.label.cmp(&b.label));

    Ok(captions)
}
