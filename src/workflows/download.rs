use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use url::Url;

use crate::domain::models::SubtitleRecord;
use crate::error::Result;
use crate::infra::webclient::PageSource;

/// Subtitles are named after the video so players pick them up automatically.
pub fn subtitle_filename(video_filename: &str) -> String {
    let name = Path::new(video_filename)
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or(video_filename);
    let stem = Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(name);
    let stem = sanitize_filename(stem);
    if stem.is_empty() {
        "subtitles.srt".to_string()
    } else {
        format!("{stem}.srt")
    }
}

fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c => c,
        })
        .collect::<String>()
        .trim()
        .to_string()
}

pub fn find_unique_filename(directory: &Path, base_filename: &str) -> PathBuf {
    let mut path = directory.join(base_filename);
    let mut counter = 1;

    while path.exists() {
        let stem = Path::new(base_filename)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("subtitles");
        let extension = Path::new(base_filename)
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("srt");

        let new_filename = format!("{stem} [copy {counter}].{extension}");
        path = directory.join(new_filename);
        counter += 1;
    }

    path
}

pub fn save_subtitles(
    source: &impl PageSource,
    record: &SubtitleRecord,
    referer: &Url,
    video_filename: &str,
    directory: &Path,
) -> Result<PathBuf> {
    let contents = source.download(&record.link, referer)?;

    fs::create_dir_all(directory)?;
    let path = find_unique_filename(directory, &subtitle_filename(video_filename));
    fs::write(&path, contents)?;
    info!(path = %path.display(), language = %record.language, "Subtitles downloaded");
    Ok(path)
}
