#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::{Result, ScraperError};
use crate::utils::validation::{self, Validate};
use toml_config::ScraperToml;

pub const DEFAULT_PAGES_CSV: &str = "pages.csv";
pub const DEFAULT_PAGE_HTML_DIR: &str = "page_html";
pub const DEFAULT_BASE_URL: &str = "https://hollowknight.fandom.com";
pub const DEFAULT_CONTENT_ID: &str = "WikiaArticle";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Settings for one scrape run after merging flags, config file and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScraperConfig {
    pub start_page: String,
    pub max_num_pages: Option<i64>,
    pub pages_csv: String,
    pub page_html_dir: String,
    pub base_url: String,
    pub content_id: String,
    pub graph_dot: Option<String>,
    pub timeout_seconds: u64,
}

impl ScraperConfig {
    /// Config with defaults for everything except the start page.
    pub fn new(start_page: impl Into<String>) -> Self {
        Self {
            start_page: start_page.into(),
            max_num_pages: None,
            pages_csv: DEFAULT_PAGES_CSV.to_string(),
            page_html_dir: DEFAULT_PAGE_HTML_DIR.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            content_id: DEFAULT_CONTENT_ID.to_string(),
            graph_dot: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }

    /// Merges command line flags over the config file; flags win.
    #[cfg(feature = "cli")]
    pub fn from_sources(cli: &cli::CliConfig, file: Option<&ScraperToml>) -> Result<Self> {
        let file = file.cloned().unwrap_or_default();

        let start_page = cli
            .start_page
            .clone()
            .or(file.crawl.start_page)
            .ok_or_else(|| {
                ScraperError::config("a start page is required (positional argument or [crawl].start_page)")
            })?;

        let mut config = Self::new(start_page);
        config.max_num_pages = cli.max_num_pages.or(file.crawl.max_num_pages);
        if let Some(v) = cli.pages_csv.clone().or(file.output.pages_csv) {
            config.pages_csv = v;
        }
        if let Some(v) = cli.page_html_dir.clone().or(file.output.page_html_dir) {
            config.page_html_dir = v;
        }
        if let Some(v) = cli.base_url.clone().or(file.wiki.base_url) {
            config.base_url = v;
        }
        if let Some(v) = cli.content_id.clone().or(file.wiki.content_id) {
            config.content_id = v;
        }
        config.graph_dot = cli.graph_dot.clone().or(file.output.graph_dot);
        if let Some(v) = cli.timeout_seconds.or(file.wiki.timeout_seconds) {
            config.timeout_seconds = v;
        }

        Ok(config)
    }
}

impl Validate for ScraperConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("start_page", &self.start_page)?;

        if let Some(max) = self.max_num_pages {
            if max <= 0 {
                return Err(ScraperError::InvalidConfigValueError {
                    field: "max_num_pages".to_string(),
                    value: max.to_string(),
                    reason: format!(
                        "\"max_num_pages\" cannot be {}, it must be a positive integer",
                        max
                    ),
                });
            }
        }

        validation::validate_url("base_url", &self.base_url)?;
        validation::validate_non_empty_string("content_id", &self.content_id)?;
        validation::validate_path("pages_csv", &self.pages_csv)?;
        validation::validate_path("page_html_dir", &self.page_html_dir)?;
        if let Some(graph_dot) = &self.graph_dot {
            validation::validate_path("graph_dot", graph_dot)?;
        }
        validation::validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;

        Ok(())
    }
}

impl ConfigProvider for ScraperConfig {
    fn start_page(&self) -> &str {
        &self.start_page
    }

    fn max_num_pages(&self) -> Option<i64> {
        self.max_num_pages
    }

    fn pages_csv(&self) -> &str {
        &self.pages_csv
    }

    fn page_html_dir(&self) -> &str {
        &self.page_html_dir
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn content_id(&self) -> &str {
        &self.content_id
    }

    fn graph_dot(&self) -> Option<&str> {
        self.graph_dot.as_deref()
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ScraperConfig::new("Hollow_Knight");
        assert!(config.validate().is_ok());
        assert_eq!(config.pages_csv, "pages.csv");
        assert_eq!(config.page_html_dir, "page_html");
        assert_eq!(config.content_id, "WikiaArticle");
    }

    #[test]
    fn test_non_positive_page_limit_is_rejected() {
        for max in [0, -4] {
            let mut config = ScraperConfig::new("Hollow_Knight");
            config.max_num_pages = Some(max);
            let err = config.validate().unwrap_err();
            assert!(err.to_string().contains(&format!(
                "\"max_num_pages\" cannot be {}, it must be a positive integer",
                max
            )));
        }
    }

    #[test]
    fn test_other_invalid_values() {
        let mut config = ScraperConfig::new(" ");
        assert!(config.validate().is_err());

        config = ScraperConfig::new("Knight");
        config.base_url = "hollowknight.fandom.com".to_string();
        assert!(config.validate().is_err());

        config = ScraperConfig::new("Knight");
        config.timeout_seconds = 0;
        assert!(config.validate().is_err());

        config = ScraperConfig::new("Knight");
        config.graph_dot = Some(String::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_timeout_is_compared_without_wrapping() {
        let mut config = ScraperConfig::new("Knight");
        config.timeout_seconds = u64::MAX;
        assert!(config.validate().is_ok());

        config.timeout_seconds = 0;
        match config.validate().unwrap_err() {
            ScraperError::InvalidConfigValueError { field, value, .. } => {
                assert_eq!(field, "timeout_seconds");
                assert_eq!(value, "0");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_should_download_more_pages() {
        let mut config = ScraperConfig::new("Knight");
        assert!(config.should_download_more_pages(10_000));

        config.max_num_pages = Some(3);
        assert!(config.should_download_more_pages(2));
        assert!(!config.should_download_more_pages(3));
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_flags_override_file() {
        let file = ScraperToml::from_toml_str(
            r#"
[wiki]
base_url = "http://wiki.local"
[crawl]
start_page = "Dirtmouth"
max_num_pages = 5
[output]
pages_csv = "file.csv"
graph_dot = "links.dot"
"#,
        )
        .unwrap();
        let cli = cli::CliConfig {
            max_num_pages: Some(2),
            pages_csv: Some("cli.csv".to_string()),
            ..Default::default()
        };

        let config = ScraperConfig::from_sources(&cli, Some(&file)).unwrap();

        assert_eq!(config.start_page, "Dirtmouth");
        assert_eq!(config.max_num_pages, Some(2));
        assert_eq!(config.pages_csv, "cli.csv");
        assert_eq!(config.base_url, "http://wiki.local");
        assert_eq!(config.graph_dot.as_deref(), Some("links.dot"));
        assert_eq!(config.page_html_dir, DEFAULT_PAGE_HTML_DIR);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_start_page_is_required() {
        let cli = cli::CliConfig::default();
        let err = ScraperConfig::from_sources(&cli, None).unwrap_err();
        assert!(matches!(err, ScraperError::ConfigError { .. }));
    }
}
