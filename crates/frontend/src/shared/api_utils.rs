//! API utilities for talking to the backend
//!
//! Provides helper functions for constructing API URLs.

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
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

/// Build a full API URL from a path relative to the versioned API root.
///
/// # Example
/// ```no_run
/// use frontend::shared::api_utils::api_url;
///
/// let url = api_url("/employee/123");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}/api/v1{}", api_base(), path)
}
