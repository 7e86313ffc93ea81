use crate::core::links::LinkExtractor;
use crate::core::{ConfigProvider, CrawlReport, FetchedPage, FileWriter, Page, PageSource};
use crate::utils::error::{Result, ScraperError};
use std::collections::{BTreeSet, HashSet};

pub struct Crawler<'a, S: PageSource, W: FileWriter, C: ConfigProvider> {
    source: &'a S,
    writer: &'a W,
    config: &'a C,
    links: LinkExtractor,
}

/// Failures that only lose one page; anything else ends the crawl.
fn is_skippable(error: &ScraperError) -> bool {
    matches!(
        error,
        ScraperError::PageFetchError { .. } | ScraperError::HttpError(_)
    )
}

impl<'a, S: PageSource, W: FileWriter, C: ConfigProvider> Crawler<'a, S, W, C> {
    pub fn new(source: &'a S, writer: &'a W, config: &'a C) -> Self {
        Self {
            source,
            writer,
            config,
            links: LinkExtractor::new(config.content_id()),
        }
    }

    /// Follows wiki links outward from `start_page` until every reachable page
    /// is downloaded or the page limit is hit.
    pub async fn crawl(&self, start_page: &str) -> Result<CrawlReport> {
        let mut report = CrawlReport::default();
        let mut pending: BTreeSet<String> = BTreeSet::from([start_page.to_string()]);
        let mut downloaded_names: HashSet<String> = HashSet::new();

        while let Some(page_name) = pending.first().cloned() {
            if !self.config.should_download_more_pages(report.pages.len()) {
                tracing::info!(
                    "Reached limit of max number of pages to download ({})",
                    self.config.max_num_pages().unwrap_or_default()
                );
                report.limit_reached = true;
                break;
            }
            pending.remove(&page_name);

            let fetched = match self.source.fetch_page(&page_name).await {
                Ok(fetched) => fetched,
                Err(e) if page_name == start_page || !is_skippable(&e) => return Err(e),
                Err(e) => {
                    tracing::warn!("Skipping page '{}': {}", page_name, e);
                    downloaded_names.insert(page_name.clone());
                    report.failed.push((page_name, e.to_string()));
                    continue;
                }
            };

            if fetched.resolved != page_name && downloaded_names.contains(&fetched.resolved) {
                tracing::debug!(
                    "Redirect: {} -> {} (already downloaded)",
                    page_name,
                    fetched.resolved
                );
                downloaded_names.insert(page_name.clone());
                report.redirects.insert(page_name, fetched.resolved);
                continue;
            }

            let page = self.store_page(fetched).await?;

            downloaded_names.insert(page_name.clone());
            downloaded_names.insert(page.name.clone());
            pending.remove(&page.name);

            if page.name != page_name {
                tracing::debug!("Redirect: {} -> {}", page_name, page.name);
                report.redirects.insert(page_name, page.name.clone());
            }

            for link in &page.outgoing_links {
                if !downloaded_names.contains(link) {
                    pending.insert(link.clone());
                }
            }

            report.pages.push(page);
            self.log_progress(&report, pending.len());
        }

        Ok(report)
    }

    async fn store_page(&self, fetched: FetchedPage) -> Result<Page> {
        let outgoing_links = self.links.extract(&fetched.html);
        let html_path = self
            .writer
            .write_html(&fetched.resolved, &fetched.html)
            .await?;

        Ok(Page {
            name: fetched.resolved,
            outgoing_links,
            html_path,
        })
    }

    fn log_progress(&self, report: &CrawlReport, pending: usize) {
        let done = report.pages.len();
        let Some(last) = report.pages.last() else {
            return;
        };
        match self.config.max_num_pages() {
            Some(max) if max > 0 => tracing::info!(
                "[{}] {} ({:.0}%, {} links, {} queued)",
                done,
                last.name,
                done as f64 * 100.0 / max as f64,
                last.outgoing_links.len(),
                pending
            ),
            _ => tracing::info!(
                "[{}] {} ({} links, {} queued)",
                done,
                last.name,
                last.outgoing_links.len(),
                pending
            ),
        }
    }
}
