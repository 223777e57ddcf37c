use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_CHARSET, REFERER, USER_AGENT};
use std::time::Duration;
use tracing::{debug, error};
use url::Url;

use crate::error::{Result, SubsError};

const USER_AGENT_VALUE: &str =
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:67.0) Gecko/20100101 Firefox/67.0";

/// A fetched page and the URL it ended up at after redirects.
#[derive(Debug, Clone)]
pub struct Page {
    pub html: String,
    pub url: Url,
}

pub trait PageSource {
    fn load_page(&self, path: &str, params: &[(&str, &str)]) -> Result<Page>;

    /// Raw subtitle file contents. `referer` must be the episode page.
    fn download(&self, link: &Url, referer: &Url) -> Result<Vec<u8>>;
}

#[derive(Debug, Clone)]
pub struct WebClient {
    site: Url,
    client: Client,
}

impl WebClient {
    pub fn new(site: Url, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );
        headers.insert(ACCEPT_CHARSET, HeaderValue::from_static("UTF-8"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;
        Ok(Self { site, client })
    }

    fn open_url(&self, url: Url, params: &[(&str, &str)], referer: &Url) -> Result<(Url, Vec<u8>)> {
        debug!(%url, "Opening URL");
        let response = self
            .client
            .get(url)
            .query(params)
            .header(REFERER, referer.as_str())
            .send()
            .map_err(|e| {
                error!("Unable to connect to Addic7ed: {e}");
                SubsError::Connection(e.to_string())
            })?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            error!(%status, "Addic7ed returned an error status");
            return Err(SubsError::Connection(format!("HTTP {status}")));
        }

        let final_url = response.url().clone();
        let body = response.bytes()?;
        Ok((final_url, body.to_vec()))
    }
}

impl PageSource for WebClient {
    fn load_page(&self, path: &str, params: &[(&str, &str)]) -> Result<Page> {
        let url = self.site.join(path)?;
        let (url, body) = self.open_url(url, params, &self.site)?;
        let html = String::from_utf8_lossy(&body).into_owned();
        debug!(%url, bytes = html.len(), "Addic7ed returned page");
        Ok(Page { html, url })
    }

    fn download(&self, link: &Url, referer: &Url) -> Result<Vec<u8>> {
        let (_, body) = self.open_url(link.clone(), &[], referer)?;
        if is_html_document(&body) {
            // Addic7ed serves an HTML page instead of the file once the daily quota is used up
            return Err(SubsError::QuotaExceeded);
        }
        Ok(body)
    }
}

pub fn is_html_document(body: &[u8]) -> bool {
    body.len() >= 9 && body[..9].eq_ignore_ascii_case(b"<!doctype")
}
