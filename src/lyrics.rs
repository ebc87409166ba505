use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use scraper::Html;
use url::Url;

use crate::error::{Error, Result};

/// A fetched HTML page together with the URL it came from.
///
/// The URL is kept so relative links inside the page can be resolved.
pub struct Document {
    url: Url,
    html: Html,
}

impl Document {
    pub fn parse(url: Url, body: &str) -> Self {
        Self {
            url,
            html: Html::parse_document(body),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn html(&self) -> &Html {
        &self.html
    }
}

/// Source of parsed pages. The HTTP implementation is [`HttpFetcher`];
/// tests plug in canned pages.
pub trait DocumentFetcher {
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<Document>>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Shared client with the app's user agent and request timeout.
    pub fn with_timeout(user_agent: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self::new(client)
    }
}

impl DocumentFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<Document> {
        let fetch_err = |e: reqwest::Error| Error::Fetch {
            url: url.clone(),
            source: Box::new(e),
        };

        tracing::debug!(%url, "fetching page");
        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(fetch_err)?;
        let body = resp.text().await.map_err(fetch_err)?;
        tracing::debug!(%url, bytes = body.len(), "page fetched");

        Ok(Document::parse(url.clone(), &body))
    }
}
