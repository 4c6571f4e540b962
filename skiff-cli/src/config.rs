//! Configuration module
//!
//! Handles CLI configuration: platform URL, credential source, watch interval
//! and the admin URL used for cluster deploys.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::error::DeployError;

/// Environment variable holding the admin API root
pub const ADMIN_URL_VAR: &str = "ADMIN_URL";

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the platform API
    pub api_url: String,

    /// Token file to read instead of the environment
    pub token_file: Option<PathBuf>,

    /// Delay between two status polls while watching
    pub watch_interval: Duration,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> Result<(), DeployError> {
        parse_http_url(&self.api_url, "api url")?;

        if self.watch_interval.is_zero() {
            return Err(DeployError::config("watch interval must be greater than 0"));
        }

        Ok(())
    }
}

/// Validate a raw `ADMIN_URL` value
pub fn parse_admin_url(raw: Option<&str>) -> Result<Url, DeployError> {
    let raw = raw
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| DeployError::config(format!("{ADMIN_URL_VAR} is not set")))?;

    parse_http_url(raw, ADMIN_URL_VAR)
}

fn parse_http_url(raw: &str, what: &str) -> Result<Url, DeployError> {
    let url = Url::parse(raw)
        .map_err(|err| DeployError::config(format!("invalid {what} '{raw}': {err}")))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(DeployError::config(format!(
            "invalid {what} '{raw}': unsupported scheme '{scheme}', expected http or https"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            api_url: "https://api.example.com".to_string(),
            token_file: None,
            watch_interval: Duration::from_secs(3),
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = config();
        assert!(config.validate().is_ok());

        config.api_url = "not-a-url".to_string();
        assert!(config.validate().is_err());

        config.api_url = "http://localhost:8080".to_string();
        config.watch_interval = Duration::ZERO;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_admin_url() {
        for raw in [None, Some(""), Some("   ")] {
            let err = parse_admin_url(raw).unwrap_err();
            assert!(matches!(err, DeployError::Config(_)));
            assert!(err.to_string().contains("ADMIN_URL is not set"));
        }
    }

    #[test]
    fn test_malformed_admin_url() {
        assert!(matches!(
            parse_admin_url(Some("admin.internal:8080/api")),
            Err(DeployError::Config(_))
        ));
        assert!(matches!(
            parse_admin_url(Some("ftp://admin.internal")),
            Err(DeployError::Config(_))
        ));
    }

    #[test]
    fn test_valid_admin_url() {
        let url = parse_admin_url(Some(" https://admin.internal/api ")).unwrap();
        assert_eq!(url.host_str(), Some("admin.internal"));
    }
}
