use std::sync::Arc;
use crate::config::EnvironmentProvider;
use crate::config::errors::ApplicationError;

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValue {
    pub value: String,
    pub source: ConfigValueSource,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValueSource {
    EnvironmentVariable { name: String },
    Default,
}

/// Configuration specification with environment override → default priority
pub struct ConfigSpec {
    env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    env_override: Option<String>,
    default_value: Option<String>,
    min_length: Option<usize>,
    validator: Option<fn(&str) -> Result<(), String>>,
}

impl ConfigSpec {
    pub fn new(env_provider: Arc<dyn EnvironmentProvider + Send + Sync>) -> Self {
        Self {
            env_provider,
            env_override: None,
            default_value: None,
            min_length: None,
            validator: None,
        }
    }

    pub fn env_override(mut self, name: &str) -> Self {
        self.env_override = Some(name.to_string());
        self
    }

    pub fn default_value(mut self, value: &str) -> Self {
        self.default_value = Some(value.to_string());
        self
    }

    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    pub fn validator(mut self, f: fn(&str) -> Result<(), String>) -> Self {
        self.validator = Some(f);
        self
    }

    /// Load a setting value with source tracking
    ///
    /// The environment variable wins when present; otherwise the default is used.
    /// Both are validated against the same rules. A setting with neither is an error.
    pub fn load_setting_with_source(&self) -> Result<ConfigValue, ApplicationError> {
        if let Some(env_var) = &self.env_override {
            if let Some(value) = self.env_provider.get_var(env_var) {
                self.validate_value(&value, env_var)?;

                return Ok(ConfigValue {
                    value,
                    source: ConfigValueSource::EnvironmentVariable {
                        name: env_var.clone(),
                    },
                });
            }
        }

        let setting_name = self.setting_name();

        if let Some(default) = &self.default_value {
            self.validate_value(default, setting_name)?;

            return Ok(ConfigValue {
                value: default.clone(),
                source: ConfigValueSource::Default,
            });
        }

        Err(ApplicationError::InvalidSetting {
            setting_name: setting_name.to_string(),
            reason: "Setting has no value from any source".to_string(),
        })
    }

    /// Validate a setting value according to the ConfigSpec rules
    pub fn validate_value(&self, value: &str, setting_name: &str) -> Result<(), ApplicationError> {
        if let Some(min_len) = self.min_length {
            if value.len() < min_len {
                return Err(ApplicationError::InvalidSetting {
                    setting_name: setting_name.to_string(),
                    reason: format!("Value must be at least {} characters long", min_len),
                });
            }
        }

        if let Some(validator) = self.validator {
            validator(value).map_err(|reason| ApplicationError::InvalidSetting {
                setting_name: setting_name.to_string(),
                reason,
            })?;
        }

        Ok(())
    }

    fn setting_name(&self) -> &str {
        self.env_override.as_deref().unwrap_or("unknown_setting")
    }
}

/// Parsing and validation utilities for configuration values
impl ConfigSpec {
    /// Parse a port number, rejecting zero
    pub fn parse_port(value: &str, setting_name: &str) -> Result<u16, ApplicationError> {
        let port = value.trim().parse::<u16>()
            .map_err(|e| ApplicationError::ParseError {
                setting_name: setting_name.to_string(),
                error: format!("Expected port number (1-65535), got '{}': {}", value, e),
            })?;

        if port == 0 {
            return Err(ApplicationError::InvalidSetting {
                setting_name: setting_name.to_string(),
                reason: "Port number must be between 1 and 65535".to_string(),
            });
        }

        Ok(port)
    }

    pub fn validate_port_range(value: &str, min: u16, max: u16) -> Result<(), String> {
        let parsed = value.parse::<u16>()
            .map_err(|_| format!("Expected port number between {} and {}", min, max))?;

        if parsed < min || parsed > max {
            return Err(format!("Port {} is outside valid range {}-{}", parsed, min, max));
        }

        Ok(())
    }

    /// Validate an IPv4 address format (4 dot-separated integers 0-255, no leading zeros)
    pub fn validate_ipv4_address(value: &str) -> Result<(), String> {
        let parts: Vec<&str> = value.split('.').collect();

        if parts.len() != 4 {
            return Err(format!("IPv4 address must have exactly 4 parts separated by dots, got {}", parts.len()));
        }

        for (i, part) in parts.iter().enumerate() {
            if part.is_empty() {
                return Err(format!("IPv4 address part {} cannot be empty", i + 1));
            }

            if part.len() > 1 && part.starts_with('0') {
                return Err(format!("IPv4 address part {} cannot have leading zeros: '{}'", i + 1, part));
            }

            let octet = part.parse::<u16>()
                .map_err(|_| format!("IPv4 address part {} must be a number: '{}'", i + 1, part))?;

            if octet > 255 {
                return Err(format!("IPv4 address part {} must be between 0-255, got {}", i + 1, octet));
            }
        }

        Ok(())
    }

    /// Validate a host address (IPv4, IPv6, or hostname)
    ///
    /// Strings made of four numeric dot-separated parts are held to strict
    /// IPv4 rules; anything with a colon is treated as IPv6. No DNS lookup.
    pub fn validate_host_address(value: &str) -> Result<(), String> {
        if value.is_empty() {
            return Err("Host address cannot be empty".to_string());
        }

        if value.contains(':') {
            if value.starts_with('[') && value.ends_with(']') {
                let ipv6_part = &value[1..value.len() - 1];
                if ipv6_part.is_empty() || !ipv6_part.contains(':') {
                    return Err("Invalid IPv6 address format".to_string());
                }
            }
            return Ok(());
        }

        if value == "[]" {
            return Err("Invalid IPv6 address format".to_string());
        }

        if value.contains('.') {
            let parts: Vec<&str> = value.split('.').collect();
            if parts.len() == 4 && parts.iter().all(|part| part.chars().all(|c| c.is_ascii_digit())) {
                return Self::validate_ipv4_address(value);
            }
        }

        if value.chars().any(char::is_whitespace) {
            return Err("Host address cannot contain whitespace characters".to_string());
        }

        Ok(())
    }

    /// Validate an absolute http(s) URL used as the advertised API server
    pub fn validate_http_url(value: &str) -> Result<(), String> {
        let rest = value
            .strip_prefix("http://")
            .or_else(|| value.strip_prefix("https://"))
            .ok_or_else(|| format!("URL must start with http:// or https://, got '{}'", value))?;

        if rest.is_empty() || rest.starts_with('/') {
            return Err("URL must include a host".to_string());
        }

        if value.chars().any(char::is_whitespace) {
            return Err("URL cannot contain whitespace characters".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockEnvironment;

    fn env(vars: &[(&str, &str)]) -> Arc<MockEnvironment> {
        let mut provider = MockEnvironment::empty();
        for (key, value) in vars {
            provider = provider.with_var(key, value);
        }
        Arc::new(provider)
    }

    #[test]
    fn test_env_override_takes_priority_over_default() {
        let spec = ConfigSpec::new(env(&[("PORT", "8080")]))
            .env_override("PORT")
            .default_value("3000");

        let loaded = spec.load_setting_with_source().unwrap();
        assert_eq!(loaded.value, "8080");
        assert_eq!(loaded.source, ConfigValueSource::EnvironmentVariable { name: "PORT".to_string() });
    }

    #[test]
    fn test_default_used_when_env_missing() {
        let spec = ConfigSpec::new(env(&[]))
            .env_override("PORT")
            .default_value("3000");

        let loaded = spec.load_setting_with_source().unwrap();
        assert_eq!(loaded.value, "3000");
        assert_eq!(loaded.source, ConfigValueSource::Default);
    }

    #[test]
    fn test_setting_without_env_or_default_fails() {
        let spec = ConfigSpec::new(env(&[])).env_override("DATABASE_URL");

        match spec.load_setting_with_source() {
            Err(ApplicationError::InvalidSetting { setting_name, reason }) => {
                assert_eq!(setting_name, "DATABASE_URL");
                assert!(reason.contains("no value"));
            }
            other => panic!("Expected InvalidSetting, got: {:?}", other),
        }
    }

    #[test]
    fn test_min_length_is_enforced() {
        let spec = ConfigSpec::new(env(&[("DATABASE_URL", "")]))
            .env_override("DATABASE_URL")
            .min_length(1);
        assert!(spec.load_setting_with_source().is_err());

        let spec = ConfigSpec::new(env(&[]))
            .env_override("DATABASE_URL")
            .default_value("")
            .min_length(1);
        assert!(spec.load_setting_with_source().is_err());

        let spec = ConfigSpec::new(env(&[("DATABASE_URL", "sqlite::memory:")]))
            .env_override("DATABASE_URL")
            .min_length(1);
        assert!(spec.load_setting_with_source().is_ok());
    }

    #[test]
    fn test_parse_port() {
        assert_eq!(ConfigSpec::parse_port("8080", "PORT").unwrap(), 8080);
        assert_eq!(ConfigSpec::parse_port(" 443 ", "PORT").unwrap(), 443);
        assert!(ConfigSpec::parse_port("0", "PORT").is_err());
        assert!(ConfigSpec::parse_port("65536", "PORT").is_err());
        assert!(ConfigSpec::parse_port("http", "PORT").is_err());
    }

    #[test]
    fn test_validate_port_range() {
        assert!(ConfigSpec::validate_port_range("1", 1, 65535).is_ok());
        assert!(ConfigSpec::validate_port_range("65535", 1, 65535).is_ok());

        let err = ConfigSpec::validate_port_range("0", 1, 65535).unwrap_err();
        assert!(err.contains("outside valid range"));

        let err = ConfigSpec::validate_port_range("abc", 1, 65535).unwrap_err();
        assert!(err.contains("Expected port number between 1 and 65535"));
    }

    #[test]
    fn test_validate_host_address() {
        for host in ["127.0.0.1", "0.0.0.0", "localhost", "api.example.com", "::1", "[::1]"] {
            assert!(ConfigSpec::validate_host_address(host).is_ok(), "expected {} to be valid", host);
        }

        for host in ["", "256.1.1.1", "192.168.01.1", "bad host"] {
            assert!(ConfigSpec::validate_host_address(host).is_err(), "expected {} to be invalid", host);
        }
    }

    #[test]
    fn test_validate_http_url() {
        assert!(ConfigSpec::validate_http_url("http://localhost:3000/api").is_ok());
        assert!(ConfigSpec::validate_http_url("https://items.example.com/api").is_ok());
        assert!(ConfigSpec::validate_http_url("localhost:3000").is_err());
        assert!(ConfigSpec::validate_http_url("http://").is_err());
        assert!(ConfigSpec::validate_http_url("http://local host").is_err());
    }
}
