use std::path::Path;
use thiserror::Error;

use super::types::{ClientConfig, MAX_PRECISION};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Ratio numerator and denominator are the same stock: {0}")]
    DegenerateRatio(String),
    #[error("Precision {0} exceeds maximum of {max}", max = MAX_PRECISION)]
    PrecisionTooLarge(usize),
}

/// Load client configuration from a JSON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ClientConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Load configuration from a JSON string
pub fn load_config_from_str(json: &str) -> Result<ClientConfig, ConfigError> {
    let config: ClientConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}

/// Load the default embedded configuration
pub fn load_default_config() -> Result<ClientConfig, ConfigError> {
    let default_config = include_str!("client_config.json");
    load_config_from_str(default_config)
}

impl ClientConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(pair) = &self.ratio
            && pair.numerator == pair.denominator
        {
            return Err(ConfigError::DegenerateRatio(pair.numerator.clone()));
        }
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::PrecisionTooLarge(self.precision));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RatioPair;

    #[test]
    fn test_load_default_config() {
        let config = load_default_config().unwrap();
        assert_eq!(config.ratio, Some(RatioPair::new("ABC", "DEF")));
        assert_eq!(config.precision, 2);
        assert!(config.skip_invalid);
    }

    #[test]
    fn test_defaults_for_missing_keys() {
        let config = load_config_from_str("{}").unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_degenerate_ratio_rejected() {
        let json = r#"{"ratio": {"numerator": "ABC", "denominator": "ABC"}}"#;
        let err = load_config_from_str(json).unwrap_err();
        assert!(matches!(err, ConfigError::DegenerateRatio(ref s) if s == "ABC"));
    }

    #[test]
    fn test_precision_too_large_rejected() {
        let err = load_config_from_str(r#"{"precision": 11}"#).unwrap_err();
        assert!(matches!(err, ConfigError::PrecisionTooLarge(11)));

        assert!(ClientConfig::default().with_precision(10).validate().is_ok());
    }

    #[test]
    fn test_parse_error() {
        let err = load_config_from_str("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = load_config("/nonexistent/quotefeed/config.json").unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
