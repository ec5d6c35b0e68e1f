use derive_more::Display;
use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5001/predict";
pub const DEFAULT_FILE_FIELD: &str = "image";
pub const DEFAULT_TIMEOUT_MS: u32 = 30_000;

/// LocalStorage key holding an optional JSON override of [`ClientConfig`].
pub const STORAGE_KEY: &str = "skinscan.config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Multipart field name; has to match what the service reads.
    #[serde(default = "default_file_field")]
    pub file_field: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u32,
}

fn default_endpoint() -> String {
    option_env!("SKINSCAN_ENDPOINT")
        .unwrap_or(DEFAULT_ENDPOINT)
        .to_string()
}

fn default_file_field() -> String {
    option_env!("SKINSCAN_FILE_FIELD")
        .unwrap_or(DEFAULT_FILE_FIELD)
        .to_string()
}

fn default_timeout_ms() -> u32 {
    DEFAULT_TIMEOUT_MS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            file_field: default_file_field(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Display)]
pub enum ConfigError {
    #[display(fmt = "endpoint must be an absolute http(s) URL, got {:?}", _0)]
    InvalidEndpoint(String),
    #[display(fmt = "multipart field name must not be empty")]
    EmptyFileField,
    #[display(fmt = "timeout must be greater than zero")]
    ZeroTimeout,
    #[display(fmt = "invalid config override: {}", _0)]
    Parse(String),
}

impl std::error::Error for ConfigError {}

impl ClientConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = self.endpoint.trim();
        let host = endpoint
            .strip_prefix("http://")
            .or_else(|| endpoint.strip_prefix("https://"));
        if !matches!(host, Some(h) if !h.is_empty()) {
            return Err(ConfigError::InvalidEndpoint(self.endpoint.clone()));
        }
        if self.file_field.trim().is_empty() {
            return Err(ConfigError::EmptyFileField);
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    /// Parses a JSON override. Missing fields keep their defaults.
    pub fn from_override(json: &str) -> Result<Self, ConfigError> {
        let config: ClientConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config =
            ClientConfig::from_override(r#"{"endpoint":"https://derm.example.org/detect"}"#)
                .unwrap();
        assert_eq!(config.endpoint, "https://derm.example.org/detect");
        assert_eq!(config.file_field, ClientConfig::default().file_field);
    }

    #[test]
    fn field_name_can_be_switched() {
        let config = ClientConfig::from_override(r#"{"file_field":"file"}"#).unwrap();
        assert_eq!(config.file_field, "file");
    }

    #[test]
    fn rejects_relative_or_empty_endpoints() {
        for endpoint in ["/predict", "", "http://", "ftp://host/predict"] {
            let err = ClientConfig::from_override(&format!(r#"{{"endpoint":"{}"}}"#, endpoint))
                .unwrap_err();
            assert!(matches!(err, ConfigError::InvalidEndpoint(_)), "{}", endpoint);
        }
    }

    #[test]
    fn rejects_blank_field_and_zero_timeout() {
        assert_eq!(
            ClientConfig::from_override(r#"{"file_field":" "}"#).unwrap_err(),
            ConfigError::EmptyFileField
        );
        assert_eq!(
            ClientConfig::from_override(r#"{"timeout_ms":0}"#).unwrap_err(),
            ConfigError::ZeroTimeout
        );
    }

    #[test]
    fn malformed_override_is_reported() {
        assert!(matches!(
            ClientConfig::from_override("not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
