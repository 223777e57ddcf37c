use serde::Serialize;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeIdentity {
    pub show_name: String,
    pub season: String,
    pub episode: String,
}

impl EpisodeIdentity {
    /// Season and episode are zero-padded to two digits, longer numbers are kept as is.
    pub fn new(show_name: impl Into<String>, season: &str, episode: &str) -> Self {
        Self {
            show_name: show_name.into(),
            season: format!("{season:0>2}"),
            episode: format!("{episode:0>2}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    pub local_name: String,
    pub site_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCandidate {
    pub title: String,
    pub link: String,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct SubtitleRecord {
    pub language: String,
    pub version: String,
    pub link: Url,
    pub hearing_impaired: bool,
    pub release_match: bool,
    pub unfinished: bool,
}

/// What the host knows about the video being played.
#[derive(Debug, Clone, Default)]
pub struct NowPlaying {
    pub file: String,
    pub label: Option<String>,
    pub show_title: Option<String>,
    pub season: Option<u32>,
    pub episode: Option<u32>,
}
