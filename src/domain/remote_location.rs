use std::collections::HashMap;

use serde::Deserialize;

use super::request_options::RequestOptions;
use super::track::TrackFormat;

/// Where to fetch one track from: a pure function of the resolved options,
/// recomputed per request and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteLocation {
    pub host: String,
    pub path: String,
    pub port: u16,
}

/// Routing rule for one content service.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceRoute {
    pub host: String,
    pub port: u16,
    pub route_prefix: String,
    /// Container tag to service-specific download variant.
    pub format_codes: HashMap<TrackFormat, String>,
    pub default_format_code: String,
}

impl ServiceRoute {
    fn format_code(&self, format: TrackFormat) -> &str {
        self.format_codes
            .get(&format)
            .map(String::as_str)
            .unwrap_or(&self.default_format_code)
    }
}

/// Lookup table keyed by service name. New services are added as rows, not
/// as code.
#[derive(Debug, Clone, Deserialize)]
pub struct RoutingTable {
    pub services: HashMap<String, ServiceRoute>,
    pub default_service: String,
    /// Permissive mode routes unknown services through the default row;
    /// strict mode rejects them.
    pub strict: bool,
}

impl Default for RoutingTable {
    fn default() -> Self {
        let jamendo = ServiceRoute {
            host: "storage-new.newjamendo.com".to_string(),
            port: 80,
            route_prefix: "/download/track".to_string(),
            format_codes: HashMap::from([(TrackFormat::Ogg, "ogg1".to_string())]),
            default_format_code: "mp31".to_string(),
        };

        Self {
            services: HashMap::from([("jamendo".to_string(), jamendo)]),
            default_service: "jamendo".to_string(),
            strict: false,
        }
    }
}

impl RoutingTable {
    pub fn resolve(&self, options: &RequestOptions) -> Result<RemoteLocation, RoutingError> {
        let route = match self.services.get(&options.service) {
            Some(route) => route,
            None if self.strict => {
                return Err(RoutingError::UnknownService(options.service.clone()));
            }
            None => self
                .services
                .get(&self.default_service)
                .ok_or_else(|| RoutingError::UnknownService(self.default_service.clone()))?,
        };

        let format_code = route.format_code(options.track_format);

        Ok(RemoteLocation {
            host: route.host.clone(),
            path: format!("{}/{}/{}", route.route_prefix, options.track_id, format_code),
            port: route.port,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoutingError {
    #[error("unknown content service: {0}")]
    UnknownService(String),
}
