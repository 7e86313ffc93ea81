use crate::core::crawler::Crawler;
use crate::core::graph::DirectedGraph;
use crate::core::{ConfigProvider, FileWriter, PageSource, ScrapeSummary};
use crate::utils::error::Result;

pub struct ScrapeEngine<S: PageSource, W: FileWriter, C: ConfigProvider> {
    source: S,
    writer: W,
    config: C,
}

impl<S: PageSource, W: FileWriter, C: ConfigProvider> ScrapeEngine<S, W, C> {
    pub fn new(source: S, writer: W, config: C) -> Self {
        Self {
            source,
            writer,
            config,
        }
    }

    pub async fn run(&self) -> Result<ScrapeSummary> {
        tracing::info!(
            "Starting crawl at '{}' on {}",
            self.config.start_page(),
            self.config.base_url()
        );

        let report = Crawler::new(&self.source, &self.writer, &self.config)
            .crawl(self.config.start_page())
            .await?;

        for page in &report.pages {
            tracing::debug!(
                "{} -> {} ({} links)",
                page.name,
                page.html_path,
                page.outgoing_links.len()
            );
        }

        let pages_csv = self.writer.write_pages_csv(&report.pages).await?;
        tracing::info!("Wrote {} pages to {}", report.pages.len(), pages_csv);

        let graph = DirectedGraph::from_report(&report);
        let graph_dot = self.writer.write_graph_dot(&graph).await?;
        if let Some(path) = &graph_dot {
            tracing::info!("Wrote link graph ({} edges) to {}", graph.edge_count(), path);
        }

        if !report.failed.is_empty() {
            tracing::warn!("{} pages could not be downloaded", report.failed.len());
        }

        Ok(ScrapeSummary {
            pages_downloaded: report.pages.len(),
            pages_failed: report.failed.len(),
            redirects: report.redirects.len(),
            limit_reached: report.limit_reached,
            pages_csv,
            graph_dot,
        })
    }
}
