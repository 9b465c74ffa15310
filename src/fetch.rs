//! Update-history page fetching
//!
//! One attempt, no retry, no progress output. Anchor elements are lifted
//! off the page wholesale, in document order, and handed to the link
//! parser untouched.

use scraper::{Html, Selector};
use url::Url;

use crate::domain::RawLink;
use crate::error::{PatchlagError, Result};

/// User agent for the single history-page request
const USER_AGENT: &str = concat!("patchlag/", env!("CARGO_PKG_VERSION"));

/// Fetches a page and returns its hyperlink elements
pub trait PageFetcher {
    /// Every anchor element on the page at `url`, in document order
    fn fetch(&self, url: &Url) -> Result<Vec<RawLink>>;
}

/// Fetcher backed by a blocking HTTP client
pub struct HttpPageFetcher {
    client: reqwest::blocking::Client,
}

impl HttpPageFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| PatchlagError::HttpClientFailed {
                reason: e.to_string(),
            })?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpPageFetcher {
    fn fetch(&self, url: &Url) -> Result<Vec<RawLink>> {
        let fetch_failed = |reason: String| PatchlagError::PageFetchFailed {
            url: url.to_string(),
            reason,
        };

        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| fetch_failed(e.to_string()))?
            .error_for_status()
            .map_err(|e| fetch_failed(e.to_string()))?;
        let body = response.text().map_err(|e| fetch_failed(e.to_string()))?;

        Ok(anchors(&body))
    }
}

/// Extract every `<a>` element from an HTML document
pub fn anchors(html: &str) -> Vec<RawLink> {
    let document = Html::parse_document(html);
    // Static selector, cannot fail to parse.
    let Ok(selector) = Selector::parse("a") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .map(|element| RawLink {
            label: element.text().collect::<String>().trim().to_string(),
            href: element.value().attr("href").unwrap_or_default().to_string(),
            css_class: element.value().attr("class").unwrap_or_default().to_string(),
            markup: element.html(),
        })
        .collect()
}
