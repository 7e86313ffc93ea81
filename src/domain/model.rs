use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// A downloaded wiki page, keyed by its resolved name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub name: String,
    pub outgoing_links: BTreeSet<String>,
    pub html_path: String,
}

/// Raw result of fetching one page from the wiki.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Name the crawler asked for.
    pub requested: String,
    /// Name the wiki served after following redirects.
    pub resolved: String,
    pub html: String,
}

#[derive(Debug, Clone, Default)]
pub struct CrawlReport {
    pub pages: Vec<Page>,
    /// requested name -> resolved name
    pub redirects: BTreeMap<String, String>,
    pub failed: Vec<(String, String)>,
    pub limit_reached: bool,
}

impl CrawlReport {
    /// Final name of a link target, following a recorded redirect if there is one.
    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        self.redirects.get(name).map(String::as_str).unwrap_or(name)
    }
}

/// One row of the pages CSV.
#[derive(Debug, Serialize)]
pub struct PageRow<'a> {
    pub page_name: &'a str,
    pub outgoing_links: String,
    pub local_html_path: &'a str,
}

impl<'a> From<&'a Page> for PageRow<'a> {
    fn from(page: &'a Page) -> Self {
        Self {
            page_name: &page.name,
            outgoing_links: page
                .outgoing_links
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(" "),
            local_html_path: &page.html_path,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScrapeSummary {
    pub pages_downloaded: usize,
    pub pages_failed: usize,
    pub redirects: usize,
    pub limit_reached: bool,
    pub pages_csv: String,
    pub graph_dot: Option<String>,
}
