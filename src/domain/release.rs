use std::path::Path;

use crate::domain::models::SubtitleRecord;

/// Release group tag of a scene-style filename, e.g. `DIMENSION` in `Show.S01E01.720p-DIMENSION.mkv`.
pub fn release_tag(filename: &str) -> Option<&str> {
    let stem = Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename);
    let (_, tag) = stem.rsplit_once('-')?;
    let tag = tag.trim();
    (!tag.is_empty()).then_some(tag)
}

pub fn annotate(record: SubtitleRecord, filename: &str) -> SubtitleRecord {
    let release_match = release_tag(filename)
        .map(|tag| {
            record
                .version
                .to_lowercase()
                .contains(&tag.to_lowercase())
        })
        .unwrap_or(false);
    SubtitleRecord {
        release_match,
        ..record
    }
}
