use reqwest::header::{ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::redirect;
use tracing::debug;

use crate::error::FetchError;

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const BROWSER_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";
const MAX_REDIRECTS: usize = 10;

/// Downloads search-result pages. One client is shared by every request.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    search_base_url: String,
}

impl Fetcher {
    pub fn new(search_base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            search_base_url: search_base_url.into(),
        })
    }

    pub fn search_url(&self, keyword: &str) -> String {
        format!("{}{}", self.search_base_url, urlencoding::encode(keyword))
    }

    pub async fn fetch_html(&self, keyword: &str) -> Result<String, FetchError> {
        let url = self.search_url(keyword);
        debug!(%url, "fetching search page");

        let html = self
            .client
            .get(&url)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .header(ACCEPT_LANGUAGE, BROWSER_ACCEPT_LANGUAGE)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(html)
    }
}
