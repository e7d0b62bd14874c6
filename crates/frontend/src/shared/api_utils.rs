//! API utilities for frontend-backend communication

/// Port of the products service
const API_PORT: u16 = 3030;

/// Get the base URL for API requests
///
/// Uses the protocol and hostname of the current page with the products
/// service port, e.g. "http://localhost:3030".
/// Falls back to "http://localhost:3030" when no window is available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return format!("http://localhost:{API_PORT}"),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "localhost".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/products/3");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
