pub mod crawler;
pub mod engine;
pub mod graph;
pub mod links;

pub use crate::domain::model::{CrawlReport, FetchedPage, Page, ScrapeSummary};
pub use crate::domain::ports::{ConfigProvider, FileWriter, PageSource};
pub use crate::utils::error::Result;
