use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("URL error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to fetch page '{page}': HTTP {status}")]
    PageFetchError { page: String, status: u16 },
}

impl ScraperError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Process exit code used by the CLI when a run ends with this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } | Self::TomlError(_) => 1,
            Self::HttpError(_) | Self::PageFetchError { .. } | Self::UrlError(_) => 2,
            Self::IoError(_) | Self::CsvError(_) => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Check the command line flags and the config file"
            }
            Self::TomlError(_) => "Make sure the config file is valid TOML",
            Self::HttpError(_) | Self::UrlError(_) => {
                "Check the network connection and the --base-url value"
            }
            Self::PageFetchError { status, .. } if *status == 404 => {
                "Check that the start page exists on the wiki"
            }
            Self::PageFetchError { .. } => "The wiki may be rate limiting requests, retry later",
            Self::IoError(_) | Self::CsvError(_) => {
                "Check that the output paths are writable"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ScraperError>;
