//! Dashboard configuration
//!
//! The defaults are embedded from `config/default.toml`. Individual values can
//! be replaced at build time through environment variables, which is the only
//! configuration channel a static WASM bundle has.

use contracts::domain::common::ResourceKind;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = include_str!("../../config/default.toml");

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub endpoints: HashMap<String, String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Absolute API base; when absent the page host on port 3000 is used
    #[serde(default)]
    pub base_url: Option<String>,
    /// localStorage key of the bearer token
    pub token_key: String,
    pub login_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: None,
                token_key: "auth_token".to_string(),
                login_path: "/api/auth/login".to_string(),
            },
            endpoints: HashMap::new(),
        }
    }
}

static CONFIG: Lazy<Config> = Lazy::new(|| match load_config() {
    Ok(config) => config,
    Err(e) => {
        log::error!("Invalid embedded configuration, using built-in defaults: {}", e);
        Config::default()
    }
});

/// Parse the embedded configuration and apply build-time overrides
pub fn load_config() -> Result<Config, toml::de::Error> {
    let mut config = parse_config(DEFAULT_CONFIG)?;

    if let Some(base) = option_env!("API_BASE_URL") {
        config.api.base_url = Some(base.to_string());
    }
    if let Some(login) = option_env!("API_LOGIN") {
        config.api.login_path = login.to_string();
    }
    for kind in ResourceKind::all() {
        if let Some(path) = endpoint_override(*kind) {
            config
                .endpoints
                .insert(kind.collection_name().to_string(), path.to_string());
        }
    }

    Ok(config)
}

pub fn parse_config(source: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(source)
}

/// Loaded configuration
pub fn config() -> &'static Config {
    &CONFIG
}

impl Config {
    /// Endpoint path (or absolute URL) configured for a collection
    pub fn endpoint_path(&self, kind: ResourceKind) -> String {
        self.endpoints
            .get(kind.collection_name())
            .cloned()
            .unwrap_or_else(|| format!("/api/{}", kind.collection_name()))
    }
}

// option_env! only accepts literals, hence one arm per collection.
fn endpoint_override(kind: ResourceKind) -> Option<&'static str> {
    match kind {
        ResourceKind::Vendor => option_env!("API_VENDORS"),
        ResourceKind::Product => option_env!("API_PRODUCTS"),
        ResourceKind::Category => option_env!("API_CATEGORIES"),
        ResourceKind::Inventory => option_env!("API_INVENTORIES"),
        ResourceKind::Purchase => option_env!("API_PURCHASES"),
        ResourceKind::Sale => option_env!("API_SALES"),
        ResourceKind::Transfer => option_env!("API_TRANSFERS"),
        ResourceKind::Shipment => option_env!("API_SHIPMENTS"),
        ResourceKind::Vehicle => option_env!("API_VEHICLES"),
        ResourceKind::Employee => option_env!("API_EMPLOYEES"),
        ResourceKind::Customer => option_env!("API_CUSTOMERS"),
        ResourceKind::Supervisor => option_env!("API_SUPERVISORS"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.token_key, "auth_token");
        assert!(config.api.base_url.is_none());
        for kind in ResourceKind::all() {
            assert!(
                config.endpoints.contains_key(kind.collection_name()),
                "missing endpoint for {}",
                kind
            );
        }
    }

    #[test]
    fn missing_endpoint_falls_back_to_collection_path() {
        let config = parse_config(
            r#"
            [api]
            token_key = "t"
            login_path = "/login"
            "#,
        )
        .unwrap();
        assert_eq!(config.endpoint_path(ResourceKind::Vehicle), "/api/vehicles");
    }
}
