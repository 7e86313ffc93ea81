pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;
pub use crate::config::{toml_config::ScraperToml, ScraperConfig};

pub use crate::adapters::{FilesystemWriter, WikiClient};
pub use crate::core::{engine::ScrapeEngine, graph::DirectedGraph};
pub use crate::domain::model::{CrawlReport, Page, ScrapeSummary};
pub use crate::utils::error::{Result, ScraperError};
