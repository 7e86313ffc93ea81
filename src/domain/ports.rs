use crate::core::graph::DirectedGraph;
use crate::domain::model::{FetchedPage, Page};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(&self, page_name: &str) -> Result<FetchedPage>;
}

#[async_trait]
pub trait FileWriter: Send + Sync {
    /// Stores a page's HTML and returns the path it was written to.
    async fn write_html(&self, page_name: &str, html: &str) -> Result<String>;
    async fn write_pages_csv(&self, pages: &[Page]) -> Result<String>;
    /// Returns `None` when no graph output is configured.
    async fn write_graph_dot(&self, graph: &DirectedGraph) -> Result<Option<String>>;
}

pub trait ConfigProvider: Send + Sync {
    fn start_page(&self) -> &str;
    fn max_num_pages(&self) -> Option<i64>;
    fn pages_csv(&self) -> &str;
    fn page_html_dir(&self) -> &str;
    fn base_url(&self) -> &str;
    fn content_id(&self) -> &str;
    fn graph_dot(&self) -> Option<&str>;
    fn timeout_seconds(&self) -> u64;

    fn should_download_more_pages(&self, num_pages_downloaded: usize) -> bool {
        match self.max_num_pages() {
            None => true,
            Some(max) => (num_pages_downloaded as i64) < max,
        }
    }
}
