use tracing::{debug, info};

use crate::domain::models::{EpisodeIdentity, LanguagePair, SearchCandidate, SubtitleRecord};
use crate::domain::names::normalize_showname;
use crate::domain::release;
use crate::error::{Result, SubsError};
use crate::infra::webclient::PageSource;
use crate::site::{parse_search_page, EpisodePage, SearchPage, SEARCH_PATH};

pub fn build_query(identity: &EpisodeIdentity) -> String {
    format!(
        "{} {}x{}",
        normalize_showname(&identity.show_name),
        identity.season,
        identity.episode
    )
}

pub fn search_episode(source: &impl PageSource, query: &str) -> Result<SearchPage> {
    info!(query, "Searching Addic7ed");
    let page = source.load_page(SEARCH_PATH, &[("search", query), ("Submit", "Search")])?;
    parse_search_page(&page.html, &page.url)
}

pub fn get_episode(source: &impl PageSource, candidate: &SearchCandidate) -> Result<EpisodePage> {
    debug!(title = %candidate.title, link = %candidate.link, "Loading episode page");
    let page = source.load_page(&candidate.link, &[])?;
    EpisodePage::parse(&page.html, page.url)
}

/// Addic7ed having nothing for a query is not a failure. `NoResults` becomes `None`.
pub fn allow_no_results<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(SubsError::NoResults) => {
            info!("Addic7ed has no subtitles for this episode");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Subtitles on `page` in the requested languages, flagged when they match the release of `filename`.
pub fn find_subtitles(
    page: &EpisodePage,
    languages: &[LanguagePair],
    filename: &str,
) -> Vec<SubtitleRecord> {
    let subtitles: Vec<SubtitleRecord> = page
        .subtitles(languages)
        .map(|record| release::annotate(record, filename))
        .collect();
    info!(count = subtitles.len(), filename, "Found subtitles");
    subtitles
}
