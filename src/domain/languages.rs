use regex::Regex;
use std::sync::LazyLock;

use crate::domain::models::LanguagePair;

static SPANISH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Spanish \(.*?\)").expect("valid regex"));

enum Rule {
    Contains(&'static str),
    Equals(&'static str),
    Matches(&'static LazyLock<Regex>),
}

impl Rule {
    fn applies(&self, name: &str) -> bool {
        match self {
            Rule::Contains(needle) => name.contains(needle),
            Rule::Equals(exact) => name == *exact,
            Rule::Matches(re) => re.is_match(name),
        }
    }
}

// Language labels where Addic7ed differs from the host's locale names, checked in order.
static SITE_LANGUAGES: &[(Rule, &str)] = &[
    (Rule::Contains("English"), "English"),
    (Rule::Equals("Portuguese (Brazil)"), "Portuguese (Brazilian)"),
    (Rule::Matches(&SPANISH_RE), "Spanish (Latin America)"),
];

pub fn site_language(local_name: &str) -> &str {
    SITE_LANGUAGES
        .iter()
        .find(|(rule, _)| rule.applies(local_name))
        .map(|(_, site_name)| *site_name)
        .unwrap_or(local_name)
}

pub fn map_languages<S: AsRef<str>>(local_names: &[S]) -> Vec<LanguagePair> {
    local_names
        .iter()
        .map(|name| {
            let local_name = name.as_ref();
            LanguagePair {
                local_name: local_name.to_string(),
                site_name: site_language(local_name).to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site_names(names: &[&str]) -> Vec<String> {
        map_languages(names)
            .into_iter()
            .map(|pair| pair.site_name)
            .collect()
    }

    #[test]
    fn test_english_variants() {
        assert_eq!(
            site_names(&["English", "English (US)", "English (UK)"]),
            vec!["English", "English", "English"]
        );
    }

    #[test]
    fn test_brazilian_portuguese() {
        assert_eq!(
            site_names(&["Portuguese (Brazil)", "Portuguese"]),
            vec!["Portuguese (Brazilian)", "Portuguese"]
        );
    }

    #[test]
    fn test_spanish_variants() {
        assert_eq!(
            site_names(&["Spanish (Latin America)", "Spanish (Spain)", "Spanish"]),
            vec!["Spanish (Latin America)", "Spanish (Latin America)", "Spanish"]
        );
    }

    #[test]
    fn test_mapping_is_idempotent() {
        for name in ["English", "Portuguese (Brazilian)", "Spanish (Latin America)", "French"] {
            assert_eq!(site_language(name), name);
            assert_eq!(site_language(site_language(name)), site_language(name));
        }
    }

    #[test]
    fn test_order_and_local_names_preserved() {
        let pairs = map_languages(&["French", "English (US)"]);
        assert_eq!(
            pairs,
            vec![
                LanguagePair {
                    local_name: "French".to_string(),
                    site_name: "French".to_string(),
                },
                LanguagePair {
                    local_name: "English (US)".to_string(),
                    site_name: "English".to_string(),
                },
            ]
        );
    }
}
