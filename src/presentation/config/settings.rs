use serde::Deserialize;

use crate::domain::{ResolverDefaults, RoutingTable};

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub resolver: ResolverDefaults,
    pub routing: RoutingTable,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Settings {
    /// Defaults with environment overrides, for deployments that configure
    /// through the process environment only.
    pub fn from_env() -> Self {
        let mut settings = Self::default();

        if let Some(port) = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
        {
            settings.server.port = port;
        }
        if let Ok(host) = std::env::var("SERVER_HOST") {
            settings.server.host = host;
        }
        if let Ok(directory) = std::env::var("SERVER_DIRECTORY") {
            settings.resolver.server_directory = directory.into();
        }
        if let Ok(strict) = std::env::var("STRICT_SERVICES") {
            settings.routing.strict = strict.to_lowercase() == "true" || strict == "1";
        }

        settings
    }
}
