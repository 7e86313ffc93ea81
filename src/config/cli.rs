use clap::Parser;

/// Command line flags. Anything not passed here may come from `--config`.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "hollow-knight-wiki-scraper")]
#[command(about = "Crawl the Hollow Knight wiki and save pages with their outgoing links")]
pub struct CliConfig {
    /// Wiki page to start crawling from, e.g. Hollow_Knight
    pub start_page: Option<String>,

    /// Stop after this many pages have been downloaded
    #[arg(long, allow_negative_numbers = true)]
    pub max_num_pages: Option<i64>,

    /// CSV listing every downloaded page [default: pages.csv]
    #[arg(long)]
    pub pages_csv: Option<String>,

    /// Directory the page HTML is saved into [default: page_html]
    #[arg(long)]
    pub page_html_dir: Option<String>,

    /// Wiki root URL [default: https://hollowknight.fandom.com]
    #[arg(long)]
    pub base_url: Option<String>,

    /// Id of the element holding the article body [default: WikiaArticle]
    #[arg(long)]
    pub content_id: Option<String>,

    /// Also write the page link graph as Graphviz DOT to this path
    #[arg(long)]
    pub graph_dot: Option<String>,

    /// Per-request timeout [default: 30]
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// TOML file with default settings
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = CliConfig::parse_from([
            "hollow-knight-wiki-scraper",
            "Hollow_Knight",
            "--max-num-pages",
            "10",
            "--pages-csv",
            "out.csv",
            "-v",
        ]);

        assert_eq!(cli.start_page.as_deref(), Some("Hollow_Knight"));
        assert_eq!(cli.max_num_pages, Some(10));
        assert_eq!(cli.pages_csv.as_deref(), Some("out.csv"));
        assert!(cli.page_html_dir.is_none());
        assert!(cli.verbose);
    }

    #[test]
    fn test_negative_page_limit_reaches_validation() {
        let cli = CliConfig::parse_from(["hollow-knight-wiki-scraper", "Knight", "--max-num-pages", "-3"]);
        assert_eq!(cli.max_num_pages, Some(-3));
    }
}
