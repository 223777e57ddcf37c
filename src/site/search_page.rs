use scraper::Html;
use tracing::debug;
use url::Url;

use super::dom::{AttrMatch, Element, Query};
use super::{EpisodePage, EPISODE_PATH_PREFIX, RESULTS_TABLE};
use crate::domain::models::SearchCandidate;
use crate::error::{Result, SubsError};

const CANDIDATE_LINK: Query = Query::new("a", &[("href", AttrMatch::Prefix(EPISODE_PATH_PREFIX))]);

/// What a search returned: several episodes to choose from, or the episode
/// page itself when the site redirected to the only match.
#[derive(Debug)]
pub enum SearchPage {
    Candidates(Vec<SearchCandidate>),
    Episode(EpisodePage),
}

pub fn parse_search_page(html: &str, url: &Url) -> Result<SearchPage> {
    let document = Html::parse_document(html);

    let candidates = document
        .root_element()
        .find(&RESULTS_TABLE)
        .map(candidates);
    match candidates {
        Some(candidates) if candidates.is_empty() => Err(SubsError::NoResults),
        Some(candidates) => {
            debug!(count = candidates.len(), "Multiple episodes found");
            Ok(SearchPage::Candidates(candidates))
        }
        None => EpisodePage::from_document(document, url.clone()).map(SearchPage::Episode),
    }
}

fn candidates<'a, E: Element<'a>>(table: E) -> Vec<SearchCandidate> {
    table
        .find_all(&CANDIDATE_LINK)
        .into_iter()
        .filter_map(|link| {
            let title = link.text().trim().to_string();
            let href = link.attr("href")?;
            (!title.is_empty()).then(|| SearchCandidate {
                title,
                link: href.to_string(),
            })
        })
        .collect()
}
