use regex::Regex;
use std::sync::LazyLock;

use super::{identity_from_captures, EpisodePattern};
use crate::domain::models::EpisodeIdentity;

static CROSS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.*?)[ .](?:\d*?[ .])?(\d+)x(\d+)\.").expect("valid regex")
});

/// `Show.Name.1x02.mkv`
pub struct CrossNotation;

impl EpisodePattern for CrossNotation {
    fn name(&self) -> &'static str {
        "NxM"
    }

    fn capture(&self, filename: &str) -> Option<EpisodeIdentity> {
        identity_from_captures(&CROSS_RE.captures(filename)?)
    }
}
