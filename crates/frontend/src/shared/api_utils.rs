//! Backend URL resolution.

use crate::config::config;

/// Base URL of the REST backend.
///
/// Uses `api.base_url` when configured, otherwise the page's own host on
/// `api.port`, e.g. `http://localhost:8000`.
pub fn api_base() -> String {
    let api = &config().api;
    if !api.base_url.is_empty() {
        return api.base_url.clone();
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
    origin_url(&protocol, &hostname, api.port)
}

pub fn origin_url(protocol: &str, hostname: &str, port: u16) -> String {
    format!("{}//{}:{}", protocol, hostname, port)
}

/// Build a full API URL from a path such as `/api/items/3`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_url() {
        assert_eq!(origin_url("http:", "localhost", 8000), "http://localhost:8000");
        assert_eq!(origin_url("https:", "inv.example.com", 443), "https://inv.example.com:443");
    }
}
