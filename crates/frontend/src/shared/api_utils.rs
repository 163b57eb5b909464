//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use contracts::domain::common::ResourceKind;

use super::config::config;

/// Get the base URL for API requests
///
/// Uses the configured base URL when there is one. Otherwise the base is
/// built from the current window location, using port 3000 for the backend.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = config().api.base_url.as_deref() {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// Absolute URLs are returned unchanged.
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/vendors");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

/// Collection endpoint of a resource kind
pub fn resource_url(kind: ResourceKind) -> String {
    api_url(&config().endpoint_path(kind))
}

/// URL of a single resource: `{collection}/{key}` with the key percent-encoded
pub fn item_url(collection_url: &str, key: &str) -> String {
    format!(
        "{}/{}",
        collection_url.trim_end_matches('/'),
        urlencoding::encode(key)
    )
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_keeps_absolute_urls() {
        assert_eq!(
            join_url("http://localhost:3000", "https://api.example.com/vendors"),
            "https://api.example.com/vendors"
        );
    }

    #[test]
    fn join_handles_slashes() {
        assert_eq!(join_url("http://h:3000/", "/api/sales"), "http://h:3000/api/sales");
        assert_eq!(join_url("http://h:3000", "api/sales"), "http://h:3000/api/sales");
    }

    #[test]
    fn item_url_encodes_natural_keys() {
        assert_eq!(
            item_url("http://h/api/vendors/", "Acme Co/West"),
            "http://h/api/vendors/Acme%20Co%2FWest"
        );
    }
}
