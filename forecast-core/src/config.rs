use std::env;

use tracing::warn;

/// Environment variable holding the OpenWeather API key.
pub const API_KEY_VAR: &str = "OPENWEATHER_API_KEY";

/// Environment variable holding the listen port.
pub const PORT_VAR: &str = "PORT";

/// Port used when `PORT` is unset or unparsable.
pub const DEFAULT_PORT: u16 = 3001;

/// Process-level configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// OpenWeather API key. `None` means the relay cannot serve forecasts;
    /// requests are still accepted and answered with a configuration fault.
    pub api_key: Option<String>,

    /// TCP port the HTTP server listens on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { api_key: None, port: DEFAULT_PORT }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// A missing or blank `OPENWEATHER_API_KEY` is deliberately not an
    /// error here: the server starts anyway and every forecast request
    /// fails with a configuration fault until the key is provided.
    pub fn from_env() -> Self {
        let api_key = env::var(API_KEY_VAR).ok().filter(|key| !key.trim().is_empty());
        let port = env::var(PORT_VAR).map_or(DEFAULT_PORT, |raw| parse_port(&raw));

        Self { api_key, port }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

fn parse_port(raw: &str) -> u16 {
    match raw.trim().parse() {
        Ok(port) => port,
        Err(_) => {
            warn!(raw, default = DEFAULT_PORT, "PORT is not a valid port number, using default");
            DEFAULT_PORT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_key_and_default_port() {
        let cfg = ServerConfig::default();

        assert!(!cfg.has_api_key());
        assert_eq!(cfg.port, DEFAULT_PORT);
    }

    #[test]
    fn config_with_key_reports_it() {
        let cfg = ServerConfig { api_key: Some("KEY".to_string()), ..ServerConfig::default() };

        assert!(cfg.has_api_key());
    }

    #[test]
    fn parse_port_accepts_valid_numbers() {
        assert_eq!(parse_port("8080"), 8080);
        assert_eq!(parse_port(" 3001 "), 3001);
    }

    #[test]
    fn parse_port_falls_back_on_garbage() {
        assert_eq!(parse_port("not-a-port"), DEFAULT_PORT);
        assert_eq!(parse_port(""), DEFAULT_PORT);
        assert_eq!(parse_port("70000"), DEFAULT_PORT);
    }
}
