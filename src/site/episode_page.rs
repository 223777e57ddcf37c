use regex::Regex;
use scraper::Html;
use std::sync::LazyLock;
use tracing::{debug, warn};
use url::Url;

use super::dom::{AttrMatch, Element, Query};
use super::SUBTITLE_BLOCK;
use crate::domain::models::{LanguagePair, SubtitleRecord};
use crate::error::{Result, SubsError};

static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Version (.*?),").expect("valid regex"));

const TITLE_CELL: Query = Query::new(
    "td",
    &[
        ("colspan", AttrMatch::Equals("3")),
        ("align", AttrMatch::Equals("center")),
        ("class", AttrMatch::Class("NewsTitle")),
    ],
);
const WORKS_WITH_CELL: Query = Query::new(
    "td",
    &[
        ("class", AttrMatch::Class("newsDate")),
        ("colspan", AttrMatch::Equals("3")),
    ],
);
const LANGUAGE_CELL: Query = Query::new("td", &[("class", AttrMatch::Class("language"))]);
const DOWNLOAD_CELL: Query = Query::new("td", &[("colspan", AttrMatch::Equals("3"))]);
const LINK: Query = Query::tag("a");
const ROW: Query = Query::tag("tr");
const HEARING_IMPAIRED_ICON: Query =
    Query::new("img", &[("title", AttrMatch::Equals("Hearing Impaired"))]);
const JOIN_TRANSLATION: Query =
    Query::new("a", &[("href", AttrMatch::Prefix("/jointranslation"))]);

/// An episode page holding one subtitle table per release.
#[derive(Debug, Clone)]
pub struct EpisodePage {
    document: Html,
    url: Url,
}

impl EpisodePage {
    /// `url` is where the page was served from, download links are resolved against it.
    pub fn parse(html: &str, url: Url) -> Result<Self> {
        Self::from_document(Html::parse_document(html), url)
    }

    pub(super) fn from_document(document: Html, url: Url) -> Result<Self> {
        if document.root_element().find(&SUBTITLE_BLOCK).is_none() {
            return Err(SubsError::NoResults);
        }
        Ok(Self { document, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Subtitles in the requested languages, in page order. Every call walks the page again.
    pub fn subtitles<'p>(
        &'p self,
        languages: &'p [LanguagePair],
    ) -> impl Iterator<Item = SubtitleRecord> + 'p {
        let base = &self.url;
        self.document
            .root_element()
            .find_all(&SUBTITLE_BLOCK)
            .into_iter()
            .filter_map(|block| Some((block, block_version(block)?)))
            .flat_map(move |(block, version)| {
                block
                    .find_all(&LANGUAGE_CELL)
                    .into_iter()
                    .filter_map(move |cell| subtitle_for_row(cell, &version, languages, base))
            })
    }
}

fn block_version<'a, E: Element<'a>>(block: E) -> Option<String> {
    let Some(title) = block.find(&TITLE_CELL).map(|cell| cell.text()) else {
        warn!("Subtitle block without a title cell");
        return None;
    };
    let Some(caps) = VERSION_RE.captures(&title) else {
        warn!(title = title.trim(), "Subtitle block without a version");
        return None;
    };
    let mut version = caps[1].to_string();

    let works_with = block
        .find(&WORKS_WITH_CELL)
        .map(|cell| cell.stripped_text())
        .unwrap_or_default();
    if !works_with.is_empty() {
        version.push_str(", ");
        version.push_str(&works_with);
    }
    Some(version)
}

fn subtitle_for_row<'a, E: Element<'a>>(
    cell: E,
    version: &str,
    languages: &[LanguagePair],
    base: &Url,
) -> Option<SubtitleRecord> {
    let label = cell.text();
    // First configured language contained in the label takes the row.
    let language = languages
        .iter()
        .find(|language| label.contains(&language.site_name))?;

    let Some(button) = cell.find_next(&DOWNLOAD_CELL).and_then(download_button) else {
        warn!(version, language = %language.local_name, "No download link for subtitles");
        return None;
    };
    let href = button.attr("href")?;
    let link = match base.join(href) {
        Ok(link) => link,
        Err(e) => {
            warn!(href, "Invalid download link: {e}");
            return None;
        }
    };

    let info_row = button.find_next(&ROW);
    let hearing_impaired = info_row
        .and_then(|row| row.find(&HEARING_IMPAIRED_ICON))
        .is_some();
    let unfinished = info_row
        .and_then(|row| row.find(&JOIN_TRANSLATION))
        .is_some();

    debug!(version, %link, hearing_impaired, unfinished, "Found subtitles");
    Some(SubtitleRecord {
        language: language.local_name.clone(),
        version: version.to_string(),
        link,
        hearing_impaired,
        release_match: false,
        unfinished,
    })
}

/// Prefers the corrected "most updated" file over the original upload.
fn download_button<'a, E: Element<'a>>(cell: E) -> Option<E> {
    let links = cell.find_all(&LINK);
    let labeled = |label: &str, path: &str| {
        links.iter().copied().find(|link| {
            link.text().trim().eq_ignore_ascii_case(label)
                || link.attr("href").is_some_and(|href| href.starts_with(path))
        })
    };
    labeled("most updated", "/updated").or_else(|| labeled("Download", "/original"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::languages::map_languages;

    const EPISODE_PAGE: &str = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/fixtures/episode_page.html"
    ));

    fn page() -> EpisodePage {
        let url = Url::parse("https://www.addic7ed.com/serie/Castle/1/1/Flowers_for_Your_Grave")
            .unwrap();
        EpisodePage::parse(EPISODE_PAGE, url).unwrap()
    }

    #[test]
    fn test_one_record_per_block() {
        let page = page();
        let languages = map_languages(&["English"]);
        let subs: Vec<_> = page.subtitles(&languages).collect();

        assert_eq!(subs.len(), 3);
        assert_eq!(
            subs.iter().map(|s| s.version.as_str()).collect::<Vec<_>>(),
            vec![
                "KILLERS, Works with 720p.HDTV.x264-DIMENSION",
                "LOL",
                "WEB.H264-MEMENTO, Works with WEB-DL",
            ]
        );
        assert!(subs.iter().all(|s| s.language == "English"));
    }

    #[test]
    fn test_prefers_most_updated_link() {
        let page = page();
        let languages = map_languages(&["English"]);
        let subs: Vec<_> = page.subtitles(&languages).collect();

        assert_eq!(
            subs[0].link.as_str(),
            "https://www.addic7ed.com/updated/1/107712/0"
        );
        assert_eq!(
            subs[1].link.as_str(),
            "https://www.addic7ed.com/original/107713/0"
        );
    }

    #[test]
    fn test_hearing_impaired_and_unfinished_flags() {
        let page = page();
        let languages = map_languages(&["English"]);
        let subs: Vec<_> = page.subtitles(&languages).collect();

        assert_eq!(
            subs.iter().map(|s| s.hearing_impaired).collect::<Vec<_>>(),
            vec![true, false, false]
        );
        assert_eq!(
            subs.iter().map(|s| s.unfinished).collect::<Vec<_>>(),
            vec![false, false, true]
        );
        assert!(subs.iter().all(|s| !s.release_match));
    }

    #[test]
    fn test_language_filter_and_local_name() {
        let page = page();
        let languages = map_languages(&["French", "Spanish (Spain)"]);
        let subs: Vec<_> = page.subtitles(&languages).collect();

        assert_eq!(subs.len(), 2);
        assert_eq!(subs[0].language, "French");
        assert_eq!(subs[0].version, "KILLERS, Works with 720p.HDTV.x264-DIMENSION");
        assert_eq!(subs[1].language, "Spanish (Spain)");
        assert_eq!(subs[1].version, "LOL");
    }

    #[test]
    fn test_document_order_across_languages() {
        let page = page();
        let languages = map_languages(&["French", "English"]);
        let subs: Vec<_> = page
            .subtitles(&languages)
            .map(|s| (s.language, s.version))
            .collect();

        assert_eq!(subs.len(), 4);
        assert_eq!(subs[0].0, "English");
        assert_eq!(subs[1].0, "French");
        assert_eq!(subs[2].1, "LOL");
    }

    #[test]
    fn test_first_configured_language_wins() {
        // "English" is contained in the site label of both configured languages.
        let page = page();
        let languages = map_languages(&["English (US)", "English (UK)"]);
        let subs: Vec<_> = page.subtitles(&languages).collect();

        assert_eq!(subs.len(), 3);
        assert!(subs.iter().all(|s| s.language == "English (US)"));
    }

    #[test]
    fn test_iteration_restarts() {
        let page = page();
        let languages = map_languages(&["English"]);
        let first: Vec<_> = page.subtitles(&languages).collect();
        let second: Vec<_> = page.subtitles(&languages).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_page_without_subtitles() {
        let url = Url::parse("https://www.addic7ed.com/").unwrap();
        let err = EpisodePage::parse("<html><body><p>Nothing</p></body></html>", url).unwrap_err();
        assert!(matches!(err, SubsError::NoResults));
    }

    #[test]
    fn test_block_without_version_is_skipped() {
        let html = r#"
            <table width="100%" border="0" align="center" class="tabel95">
              <tr><td colspan="3" align="center" class="NewsTitle">Untitled</td></tr>
              <tr><td class="language">English</td><td colspan="3"><a href="/original/1/0">Download</a></td></tr>
            </table>"#;
        let url = Url::parse("https://www.addic7ed.com/").unwrap();
        let page = EpisodePage::parse(html, url).unwrap();
        let languages = map_languages(&["English"]);
        assert_eq!(page.subtitles(&languages).count(), 0);
    }
}
