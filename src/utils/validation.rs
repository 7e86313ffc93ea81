use crate::utils::error::{Result, ScraperError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: impl ToString, reason: impl Into<String>) -> ScraperError {
    ScraperError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(invalid(field_name, url_str, "URL cannot be empty"));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(invalid(
                field_name,
                url_str,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(invalid(
            field_name,
            url_str,
            format!("Invalid URL format: {}", e),
        )),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }

    Ok(())
}

pub fn validate_positive_number<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min_value: T,
) -> Result<()> {
    if value < min_value {
        return Err(invalid(
            field_name,
            value,
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("base_url", "https://hollowknight.fandom.com").is_ok());
        assert!(validate_url("base_url", "http://127.0.0.1:8080").is_ok());
        assert!(validate_url("base_url", "").is_err());
        assert!(validate_url("base_url", "hollowknight.fandom.com").is_err());
        assert!(validate_url("base_url", "ftp://hollowknight.fandom.com").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("pages_csv", "pages.csv").is_ok());
        assert!(validate_path("pages_csv", "").is_err());
        assert!(validate_path("pages_csv", "pa\0ges.csv").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("timeout_seconds", 30, 1).is_ok());
        assert!(validate_positive_number("timeout_seconds", 0, 1).is_err());
        assert!(validate_positive_number("timeout_seconds", u64::MAX, 1).is_ok());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("start_page", "Hollow_Knight").is_ok());
        assert!(validate_non_empty_string("start_page", "   ").is_err());
    }
}
