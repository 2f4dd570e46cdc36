//! Runtime configuration for the browser app.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host decides the prime service base URL and writes it into the page
//! head as `<meta name="primes-api-base-url">`. During SSR the value is
//! provided as context directly; during hydration it is read back from that
//! tag so both sides render the same thing.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when nothing is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// `name` of the meta tag carrying the base URL.
pub const API_BASE_URL_META: &str = "primes-api-base-url";

/// Settings shared by every component, provided via context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_owned() }
    }
}

impl ClientConfig {
    /// Build a config from a raw base URL, falling back to the default when blank.
    #[must_use]
    pub fn new(api_base_url: &str) -> Self {
        let trimmed = api_base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::default();
        }
        Self { api_base_url: trimmed.to_owned() }
    }

    /// Read the config the host rendered into the page head.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn from_document() -> Self {
        let content = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(&meta_selector()).ok().flatten())
            .and_then(|el| el.get_attribute("content"));
        content.map_or_else(Self::default, |url| Self::new(&url))
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn meta_selector() -> String {
    format!("meta[name=\"{API_BASE_URL_META}\"]")
}
