pub mod dom;
pub mod episode_page;
pub mod search_page;

use dom::{AttrMatch, Query};

pub use episode_page::EpisodePage;
pub use search_page::{parse_search_page, SearchPage};

pub const SITE: &str = "https://www.addic7ed.com";
pub const SEARCH_PATH: &str = "/search.php";

/// Candidate links on the search results page start with this.
pub const EPISODE_PATH_PREFIX: &str = "serie";

/// The table listing episodes when a search matched several of them.
const RESULTS_TABLE: Query = Query::new(
    "table",
    &[
        ("class", AttrMatch::Class("tabel")),
        ("align", AttrMatch::Equals("center")),
        ("width", AttrMatch::Equals("80%")),
        ("border", AttrMatch::Equals("0")),
    ],
);

/// One table per subtitle release on an episode page.
const SUBTITLE_BLOCK: Query = Query::new(
    "table",
    &[
        ("class", AttrMatch::Class("tabel95")),
        ("width", AttrMatch::Equals("100%")),
        ("border", AttrMatch::Equals("0")),
        ("align", AttrMatch::Equals("center")),
    ],
);
