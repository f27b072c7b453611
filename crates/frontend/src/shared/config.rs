//! Runtime configuration of the admin app.
//!
//! Provided once at the app root via context; screens read it with
//! [`use_config`].

use leptos::prelude::*;
use std::time::Duration;

/// Where a screen reads and writes its records
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataSource {
    /// REST backend
    Remote,
    /// Browser local storage (demo screens not wired to the backend yet)
    Local,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Backend base URL without trailing slash
    pub api_base: String,
    /// How long a list error stays visible on screens that expire it
    pub error_display: Duration,
    pub order_page_size: u32,
    pub products: DataSource,
    pub discounts: DataSource,
    pub banners: DataSource,
    pub blogs: DataSource,
    pub orders: DataSource,
}

impl AppConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: normalize_base(&api_base.into()),
            error_display: Duration::from_secs(4),
            order_page_size: 10,
            products: DataSource::Local,
            discounts: DataSource::Local,
            banners: DataSource::Local,
            blogs: DataSource::Local,
            orders: DataSource::Remote,
        }
    }

    /// Base URL from `ADMIN_API_BASE` at build time, otherwise the page host on port 3000
    pub fn from_environment() -> Self {
        let base = option_env!("ADMIN_API_BASE")
            .map(str::to_string)
            .unwrap_or_else(api_base_from_location);
        Self::new(base)
    }

    /// Joins `path` onto the base URL
    ///
    /// # Example
    /// ```rust,ignore
    /// let url = config.url("/category");
    /// ```
    pub fn url(&self, path: &str) -> String {
        join_url(&self.api_base, path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_environment()
    }
}

/// Get the backend base URL from the current window location,
/// using port 3000 for the backend server.
///
/// Empty string if window is not available.
fn api_base_from_location() -> String {
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

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.is_empty() {
        return base.to_string();
    }
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_handles_slashes() {
        assert_eq!(join_url("http://api:3000", "/category"), "http://api:3000/category");
        assert_eq!(join_url("http://api:3000/", "category"), "http://api:3000/category");
        assert_eq!(join_url("http://api:3000", "/collection/"), "http://api:3000/collection/");
        assert_eq!(join_url("http://api:3000/", ""), "http://api:3000");
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::new("https://api.shop.example/ ");
        assert_eq!(config.api_base, "https://api.shop.example");
        assert_eq!(config.error_display, Duration::from_secs(4));
        assert_eq!(config.products, DataSource::Local);
        assert_eq!(config.orders, DataSource::Remote);
        assert_eq!(config.url("/voucher"), "https://api.shop.example/voucher");
    }
}
