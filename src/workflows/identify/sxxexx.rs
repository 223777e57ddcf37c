use regex::Regex;
use std::sync::LazyLock;

use super::{identity_from_captures, EpisodePattern};
use crate::domain::models::EpisodeIdentity;

static SXXEXX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.*?)[ .](?:\d*?[ .])?s(\d+)[ .]?e(\d+)\.").expect("valid regex")
});

/// `Show.Name.S01E02.mkv`, `Show.Name.s1.e2.mkv`
pub struct SeasonEpisodeMarker;

impl EpisodePattern for SeasonEpisodeMarker {
    fn name(&self) -> &'static str {
        "SxxEyy"
    }

    fn capture(&self, filename: &str) -> Option<EpisodeIdentity> {
        identity_from_captures(&SXXEXX_RE.captures(filename)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_variants() {
        for filename in ["Show.S01E02.mkv", "Show.s01e02.mkv", "Show.S01.E02.mkv", "Show.s1e2.avi"] {
            let identity = SeasonEpisodeMarker.capture(filename).unwrap();
            assert_eq!(identity, EpisodeIdentity::new("Show", "01", "02"), "{filename}");
        }
    }

    #[test]
    fn test_year_before_marker_is_part_of_prefix() {
        let identity = SeasonEpisodeMarker.capture("Doctor.Who.2005.S10E01.mkv").unwrap();
        assert_eq!(identity, EpisodeIdentity::new("Doctor Who", "10", "01"));
    }

    #[test]
    fn test_requires_dot_after_episode() {
        assert!(SeasonEpisodeMarker.capture("Show.S01E02").is_none());
        assert!(SeasonEpisodeMarker.capture("Show.1x02.mkv").is_none());
    }
}
