//! API utilities for frontend-backend communication

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
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

/// Build a full API URL from a path (should start with "/api/").
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Extract a human-readable message from an error response. The backend
/// answers with `{"kind": ..., "message": ...}`; anything else degrades
/// to the HTTP status.
pub async fn response_error(response: gloo_net::http::Response) -> String {
    let status = response.status();
    match response.text().await {
        Ok(body) => match serde_json::from_str::<contracts::shared::error::ApiError>(&body) {
            Ok(err) => err.message,
            Err(_) => format!("HTTP {}", status),
        },
        Err(_) => format!("HTTP {}", status),
    }
}
