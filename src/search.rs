use crate::error::FetchError;
use crate::fetcher::Fetcher;
use crate::models::Product;
use crate::parser::Extractor;

/// Fetch then extract, the whole work of one search.
#[derive(Debug)]
pub struct ProductSearch {
    fetcher: Fetcher,
    extractor: Extractor,
}

impl ProductSearch {
    pub fn new(search_base_url: &str) -> anyhow::Result<Self> {
        Ok(Self {
            fetcher: Fetcher::new(search_base_url)?,
            extractor: Extractor::new()?,
        })
    }

    pub fn fetcher(&self) -> &Fetcher {
        &self.fetcher
    }

    pub async fn search(&self, keyword: &str) -> Result<Vec<Product>, FetchError> {
        let html = self.fetcher.fetch_html(keyword).await?;
        Ok(self.extractor.extract(&html))
    }
}
