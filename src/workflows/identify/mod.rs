use regex::Captures;
use std::path::Path;
use tracing::debug;

use crate::domain::models::{EpisodeIdentity, NowPlaying};
use crate::error::{Result, SubsError};

pub mod compact;
pub mod cross;
pub mod sxxexx;

use compact::CompactBlock;
use cross::CrossNotation;
use sxxexx::SeasonEpisodeMarker;

const VIDEO_EXTENSIONS: &[&str] = &["avi", "mkv", "mp4", "ts", "m2ts", "mov"];

pub trait EpisodePattern {
    fn name(&self) -> &'static str;

    /// `filename` has its spaces already converted to dots.
    fn capture(&self, filename: &str) -> Option<EpisodeIdentity>;
}

// Tried in order, the first pattern that matches wins.
const PATTERNS: &[&dyn EpisodePattern] = &[&SeasonEpisodeMarker, &CrossNotation, &CompactBlock];

pub fn identify(filename: &str) -> Result<EpisodeIdentity> {
    let dotted = filename.replace(' ', ".");
    PATTERNS
        .iter()
        .find_map(|pattern| {
            let identity = pattern.capture(&dotted)?;
            debug!(pattern = pattern.name(), ?identity, "Filename matched");
            Some(identity)
        })
        .ok_or_else(|| SubsError::Parse {
            filename: filename.to_string(),
        })
}

/// Builds an identity from a match whose groups are show, season and episode.
fn identity_from_captures(caps: &Captures) -> Option<EpisodeIdentity> {
    let show_name = caps.get(1)?.as_str().replace('.', " ");
    Some(EpisodeIdentity::new(
        show_name,
        caps.get(2)?.as_str(),
        caps.get(3)?.as_str(),
    ))
}

/// Resolves the episode being played and the filename used for release matching.
pub fn resolve(now_playing: &NowPlaying, use_filename: bool) -> Result<(EpisodeIdentity, String)> {
    let library = match (&now_playing.show_title, now_playing.season, now_playing.episode) {
        (Some(show), Some(season), Some(episode)) if !use_filename && !show.trim().is_empty() => {
            Some((show.as_str(), season, episode))
        }
        _ => None,
    };

    let Some((show, season, episode)) = library else {
        debug!(filename = %now_playing.file, "Using filename");
        return match identify(&now_playing.file) {
            Ok(identity) => Ok((identity, now_playing.file.clone())),
            Err(err) => {
                let Some(label) = &now_playing.label else {
                    return Err(err);
                };
                debug!(filename = %now_playing.file, %label, "Filename failed, trying label");
                let identity = identify(label)?;
                Ok((identity, label.clone()))
            }
        };
    };

    let identity = EpisodeIdentity::new(show, &season.to_string(), &episode.to_string());
    let filename = if has_video_extension(&now_playing.file) {
        now_playing.file.clone()
    } else {
        format!("{}.{}x{}.foo", show, identity.season, identity.episode)
    };
    debug!(
        show = %identity.show_name,
        season = %identity.season,
        episode = %identity.episode,
        "Using library metadata"
    );
    Ok((identity, filename))
}

fn has_video_extension(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|s| s.to_str())
        .map(|ext| VIDEO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
