use scraper::ElementRef;

#[derive(Debug, Clone, Copy)]
pub enum AttrMatch {
    Equals(&'static str),
    Prefix(&'static str),
    /// Whitespace separated token of a `class` attribute.
    Class(&'static str),
}

/// A tag name plus attribute filters, all of which must hold.
#[derive(Debug, Clone, Copy)]
pub struct Query {
    pub tag: &'static str,
    pub attrs: &'static [(&'static str, AttrMatch)],
}

impl Query {
    pub const fn new(tag: &'static str, attrs: &'static [(&'static str, AttrMatch)]) -> Self {
        Self { tag, attrs }
    }

    pub const fn tag(tag: &'static str) -> Self {
        Self { tag, attrs: &[] }
    }
}

/// The few tree operations the page parsers need.
pub trait Element<'a>: Copy {
    fn name(self) -> &'a str;
    fn attr(self, name: &str) -> Option<&'a str>;
    fn text(self) -> String;

    /// Descendants matching `query`, in document order.
    fn find_all(self, query: &Query) -> Vec<Self>;

    /// First element matching `query` that comes after the start of this one in
    /// document order, descending into this element's children first.
    fn find_next(self, query: &Query) -> Option<Self>;

    fn find(self, query: &Query) -> Option<Self> {
        self.find_all(query).into_iter().next()
    }

    fn is_match(self, query: &Query) -> bool {
        self.name().eq_ignore_ascii_case(query.tag)
            && query.attrs.iter().all(|(name, expected)| {
                let Some(value) = self.attr(name) else {
                    return false;
                };
                match expected {
                    AttrMatch::Equals(v) => value == *v,
                    AttrMatch::Prefix(p) => value.starts_with(p),
                    AttrMatch::Class(c) => value.split_whitespace().any(|class| class == *c),
                }
            })
    }

    /// Text with each text node trimmed and empty ones dropped.
    fn stripped_text(self) -> String;
}

impl<'a> Element<'a> for ElementRef<'a> {
    fn name(self) -> &'a str {
        self.value().name()
    }

    fn attr(self, name: &str) -> Option<&'a str> {
        self.value().attr(name)
    }

    fn text(self) -> String {
        ElementRef::text(&self).collect()
    }

    fn stripped_text(self) -> String {
        ElementRef::text(&self)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    fn find_all(self, query: &Query) -> Vec<Self> {
        let node = *self;
        node.descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .filter(|el| el.is_match(query))
            .collect()
    }

    fn find_next(self, query: &Query) -> Option<Self> {
        let node = *self;
        let following = std::iter::once(node)
            .chain(node.ancestors())
            .flat_map(|n| n.next_siblings())
            .flat_map(|n| n.descendants());
        node.descendants()
            .skip(1)
            .chain(following)
            .filter_map(ElementRef::wrap)
            .find(|el| el.is_match(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    const CELL: Query = Query::new("td", &[("colspan", AttrMatch::Equals("3"))]);
    const LANGUAGE: Query = Query::new("td", &[("class", AttrMatch::Class("language"))]);

    const HTML: &str = r#"
        <table>
          <tr><td colspan="3" id="before">x</td></tr>
          <tr><td class="cell language">English</td><td>Completed</td></tr>
          <tr><td colspan="3" id="after"><a href="/updated/1">most updated</a></td></tr>
        </table>"#;

    #[test]
    fn test_find_all_filters_attributes() {
        let document = Html::parse_document(HTML);
        let root = document.root_element();
        assert_eq!(root.find_all(&CELL).len(), 2);
        assert_eq!(root.find_all(&LANGUAGE).len(), 1);
        assert_eq!(root.find_all(&Query::tag("tr")).len(), 3);
    }

    #[test]
    fn test_find_next_looks_forward_only() {
        let document = Html::parse_document(HTML);
        let language = document.root_element().find(&LANGUAGE).unwrap();
        let next = language.find_next(&CELL).unwrap();
        assert_eq!(next.attr("id"), Some("after"));
        assert!(next.find_next(&CELL).is_none());
    }

    #[test]
    fn test_prefix_and_text() {
        let document = Html::parse_document(HTML);
        let link = document
            .root_element()
            .find(&Query::new("a", &[("href", AttrMatch::Prefix("/updated"))]))
            .unwrap();
        assert_eq!(link.text(), "most updated");
    }

    #[test]
    fn test_stripped_text() {
        let document = Html::parse_document("<p>  Works <b> with </b>\n 720p </p>");
        let p = document.root_element().find(&Query::tag("p")).unwrap();
        assert_eq!(p.stripped_text(), "Workswith720p");
    }
}
