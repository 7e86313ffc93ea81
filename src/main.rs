use clap::Parser;
use hollow_knight_wiki_scraper::utils::{logger, validation::Validate};
use hollow_knight_wiki_scraper::{
    CliConfig, FilesystemWriter, ScrapeEngine, ScraperConfig, ScraperError, ScraperToml,
    WikiClient,
};

fn fail(e: &ScraperError) -> ! {
    tracing::error!("{}", e);
    eprintln!("❌ {}", e);
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let file = match &cli.config {
        Some(path) => match ScraperToml::from_file(path) {
            Ok(file) => Some(file),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                std::process::exit(e.exit_code());
            }
        },
        None => None,
    };

    let verbose = cli.verbose || file.as_ref().and_then(|f| f.logging.verbose).unwrap_or(false);
    let log_json = cli.log_json || file.as_ref().and_then(|f| f.logging.json).unwrap_or(false);
    if log_json {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    let config = match ScraperConfig::from_sources(&cli, file.as_ref()) {
        Ok(config) => config,
        Err(e) => fail(&e),
    };
    tracing::debug!("Resolved config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Invalid flags");
        fail(&e);
    }

    let client = match WikiClient::new(&config.base_url, config.timeout_seconds) {
        Ok(client) => client,
        Err(e) => fail(&e),
    };
    let writer = FilesystemWriter::new(
        config.pages_csv.clone(),
        config.page_html_dir.clone(),
        config.graph_dot.clone(),
    );
    let engine = ScrapeEngine::new(client, writer, config);

    match engine.run().await {
        Ok(summary) => {
            tracing::info!(
                "Downloaded {} pages ({} failed, {} redirects)",
                summary.pages_downloaded,
                summary.pages_failed,
                summary.redirects
            );
            println!("✅ Downloaded {} pages", summary.pages_downloaded);
            if summary.limit_reached {
                println!("⏹  Stopped at the page limit");
            }
            println!("📁 Pages CSV: {}", summary.pages_csv);
            if let Some(graph_dot) = &summary.graph_dot {
                println!("📁 Link graph: {}", graph_dot);
            }
        }
        Err(e) => fail(&e),
    }

    Ok(())
}
