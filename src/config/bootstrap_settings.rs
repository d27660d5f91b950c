use std::fmt;
use std::sync::Arc;
use crate::config::errors::ApplicationError;
use crate::config::config_spec::ConfigSpec;
use crate::config::EnvironmentProvider;

/// Infrastructure settings needed before the server can start
pub struct BootstrapSettings {
    database_url: String,
    server_host: String,
    server_port: u16,
    api_server_url: String,
}

impl BootstrapSettings {
    /// Load bootstrap settings through the given environment provider
    pub fn from_env_provider(env_provider: Arc<dyn EnvironmentProvider + Send + Sync>) -> Result<Self, ApplicationError> {
        let database_url = ConfigSpec::new(env_provider.clone())
            .env_override("DATABASE_URL")
            .default_value("sqlite://items.db?mode=rwc")
            .min_length(1)
            .load_setting_with_source()?
            .value;

        let server_host = ConfigSpec::new(env_provider.clone())
            .env_override("HOST")
            .default_value("0.0.0.0")
            .validator(ConfigSpec::validate_host_address)
            .load_setting_with_source()?
            .value;

        let port_value = ConfigSpec::new(env_provider.clone())
            .env_override("PORT")
            .default_value("3000")
            .validator(|value| ConfigSpec::validate_port_range(value, 1, 65535))
            .load_setting_with_source()?
            .value;
        let server_port = ConfigSpec::parse_port(&port_value, "PORT")?;

        let api_server_url = ConfigSpec::new(env_provider)
            .env_override("API_SERVER_URL")
            .default_value("http://localhost:3000/api")
            .validator(ConfigSpec::validate_http_url)
            .load_setting_with_source()?
            .value;

        Ok(Self {
            database_url,
            server_host,
            server_port,
            api_server_url,
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, ApplicationError> {
        use crate::config::SystemEnvironment;
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    /// URL advertised as the server in the OpenAPI document
    pub fn api_server_url(&self) -> &str {
        &self.api_server_url
    }

    /// Socket address to bind, with IPv6 hosts wrapped in brackets
    pub fn server_address(&self) -> String {
        let host = &self.server_host;
        if host.contains(':') && !host.starts_with('[') {
            format!("[{}]:{}", host, self.server_port)
        } else {
            format!("{}:{}", host, self.server_port)
        }
    }
}

impl fmt::Debug for BootstrapSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapSettings")
            .field("database_url", &self.database_url)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("api_server_url", &self.api_server_url)
            .finish()
    }
}
