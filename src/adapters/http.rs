use crate::core::links::normalize_page_name;
use crate::core::{FetchedPage, PageSource};
use crate::utils::error::{Result, ScraperError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Fetches rendered article HTML from a MediaWiki/Fandom site.
#[derive(Debug, Clone)]
pub struct WikiClient {
    client: Client,
    base_url: String,
}

impl WikiClient {
    pub fn new(base_url: &str, timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn page_url(&self, page_name: &str) -> Result<Url> {
        let encoded = page_name
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");
        Ok(Url::parse(&format!("{}/wiki/{}", self.base_url, encoded))?)
    }
}

/// Page name the wiki actually served, taken from the URL after redirects.
fn resolved_name(final_url: &Url, requested: &str) -> String {
    let resolved = final_url
        .path()
        .find("/wiki/")
        .map(|idx| &final_url.path()[idx + "/wiki/".len()..])
        .filter(|rest| !rest.is_empty())
        .map(|rest| match urlencoding::decode(rest) {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => rest.to_string(),
        });

    normalize_page_name(resolved.as_deref().unwrap_or(requested))
}

#[async_trait]
impl PageSource for WikiClient {
    async fn fetch_page(&self, page_name: &str) -> Result<FetchedPage> {
        let url = self.page_url(page_name)?;
        tracing::debug!("Requesting {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("Response status for '{}': {}", page_name, status);

        if !status.is_success() {
            return Err(ScraperError::PageFetchError {
                page: page_name.to_string(),
                status: status.as_u16(),
            });
        }

        let resolved = resolved_name(response.url(), page_name);
        let html = response.text().await?;

        Ok(FetchedPage {
            requested: page_name.to_string(),
            resolved,
            html,
        })
    }
}
