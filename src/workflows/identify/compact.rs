use regex::Regex;
use std::sync::LazyLock;

use super::{identity_from_captures, EpisodePattern};
use crate::domain::models::EpisodeIdentity;

static COMPACT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.*?)[ .](?:\d*?[ .])?(\d{1,2}?)[ .]?(\d{2})\.").expect("valid regex")
});

/// `Show.Name.0102.mkv`, season and episode glued into one block
pub struct CompactBlock;

impl EpisodePattern for CompactBlock {
    fn name(&self) -> &'static str {
        "compact"
    }

    fn capture(&self, filename: &str) -> Option<EpisodeIdentity> {
        identity_from_captures(&COMPACT_RE.captures(filename)?)
    }
}
