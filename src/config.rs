use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::site::SITE;

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    languages: Option<Vec<String>>,
    use_filename: Option<bool>,
    site_url: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub languages: Vec<String>,
    pub use_filename: bool,
    pub site_url: Url,
    pub timeout: Duration,
}

pub fn load_settings() -> Result<Settings> {
    let config_path = get_config_path();
    let file = if config_path.exists() {
        debug!(path = %config_path.display(), "Reading config file");
        let config_content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        toml::from_str(&config_content)
            .with_context(|| format!("Invalid config file {}", config_path.display()))?
    } else {
        ConfigFile::default()
    };

    settings_from(
        file,
        env::var("ADDIC7ED_LANGUAGES").ok(),
        env::var("ADDIC7ED_SITE_URL").ok(),
    )
}

fn settings_from(
    file: ConfigFile,
    env_languages: Option<String>,
    env_site_url: Option<String>,
) -> Result<Settings> {
    // Environment variables win over the config file
    let languages = env_languages
        .map(|list| parse_language_list(&list))
        .or(file.languages)
        .filter(|languages| !languages.is_empty())
        .unwrap_or_else(|| vec!["English".to_string()]);

    let site_url = env_site_url
        .or(file.site_url)
        .unwrap_or_else(|| SITE.to_string());
    let site_url =
        Url::parse(&site_url).with_context(|| format!("Invalid site URL '{site_url}'"))?;

    Ok(Settings {
        languages,
        use_filename: file.use_filename.unwrap_or(false),
        site_url,
        timeout: Duration::from_secs(file.timeout_secs.unwrap_or(30)),
    })
}

pub fn parse_language_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn get_config_dir_path() -> PathBuf {
    xdir::config()
        .map(|path| path.join("addic7ed-subs"))
        // If the standard path could not be found (e.g.`$HOME` is not set),
        // default to the current directory.
        .unwrap_or_default()
}

fn get_config_path() -> PathBuf {
    get_config_dir_path().join("config.toml")
}
