use crate::utils::error::{Result, ScraperError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File-based settings. Every field is optional; anything left out falls back
/// to the command line or the built-in default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScraperToml {
    #[serde(default)]
    pub wiki: WikiSection,
    #[serde(default)]
    pub crawl: CrawlSection,
    #[serde(default)]
    pub output: OutputSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WikiSection {
    pub base_url: Option<String>,
    pub content_id: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CrawlSection {
    pub start_page: Option<String>,
    pub max_num_pages: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    pub pages_csv: Option<String>,
    pub page_html_dir: Option<String>,
    pub graph_dot: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSection {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl ScraperToml {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            ScraperError::config(format!(
                "cannot read config file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed)?)
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay literal.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| ScraperError::config(format!("bad substitution pattern: {}", e)))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }
}
