//! Input validation utilities
//!
//! Checks on user-supplied URLs and filter definitions before they reach
//! the config file or the network.

use crate::error::CliError;

/// Validate that a URL is properly formatted
pub fn validate_url(url: &str) -> crate::Result<()> {
    if url.is_empty() {
        return Err(CliError::InvalidArguments("URL cannot be empty".to_string()).into());
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(CliError::InvalidArguments(format!(
            "Invalid URL '{}': URL must start with http:// or https://",
            url
        ))
        .into());
    }

    Ok(())
}

/// Validate the required parts of a filter definition
pub fn validate_filter(name: &str, filter_type: &str, expression: &str) -> crate::Result<()> {
    for (field, value) in [("name", name), ("type", filter_type), ("filter", expression)] {
        if value.trim().is_empty() {
            return Err(CliError::InvalidArguments(format!(
                "Filter {} cannot be empty",
                field
            ))
            .into());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url_accepts_valid_urls() {
        assert!(validate_url("http://localhost:3000").is_ok());
        assert!(validate_url("https://api.crowdstrike.com").is_ok());
    }

    #[test]
    fn test_validate_url_rejects_invalid_urls() {
        assert!(validate_url("").is_err());
        assert!(validate_url("api.crowdstrike.com").is_err());
        assert!(validate_url("ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_filter() {
        assert!(validate_filter("windows", "hosts", "platform_name:'Windows'").is_ok());
        assert!(validate_filter("", "hosts", "x").is_err());
        assert!(validate_filter("windows", " ", "x").is_err());
        assert!(validate_filter("windows", "hosts", "").is_err());
    }
}
