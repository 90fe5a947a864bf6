//! API utilities for frontend-backend communication.
//!
//! The RAG backend is a separate service; its base URL can be overridden at
//! deploy time through a `<meta name="api-base">` tag in `index.html`.

/// Fallback backend address for local development.
const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Get the base URL for API requests.
///
/// Reads the `api-base` meta tag if present, otherwise returns the
/// localhost default. Trailing slashes are stripped so `api_url` can
/// concatenate paths safely.
pub fn api_base() -> String {
    let configured = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector("meta[name='api-base']").ok().flatten())
        .and_then(|m| m.get_attribute("content"))
        .filter(|v| !v.trim().is_empty());

    match configured {
        Some(base) => base.trim().trim_end_matches('/').to_string(),
        None => DEFAULT_API_BASE.to_string(),
    }
}

/// Build a full API URL from a path.
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/upload/clear");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
