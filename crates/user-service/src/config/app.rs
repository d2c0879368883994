//! Application configuration for the user service.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// Environment variables are prefixed with `USER_SERVICE_`:
/// - `USER_SERVICE_HOST`: Server bind address (default: "0.0.0.0")
/// - `USER_SERVICE_PORT`: Server port (default: 5000)
/// - `USER_SERVICE_DEBUG`: Enable debug mode (default: false)
/// - `USER_SERVICE_SERVER_NAME`: Server name shown on the home page
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Enable debug mode
    #[serde(default)]
    pub debug: bool,

    /// Server name for identification
    #[serde(default = "default_server_name")]
    pub server_name: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_server_name() -> String {
    "user-service".to_string()
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are prefixed with `USER_SERVICE_`.
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed("USER_SERVICE_").from_env::<AppConfig>()
    }

    /// Get the server bind address as a string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            debug: false,
            server_name: default_server_name(),
        }
    }
}
