//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.
//! Все хелперы возвращают `Result<_, String>`: текст ошибки сразу показывается в UI.

use contracts::shared::mutation::ApiErrorBody;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

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

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/orders/ORD-1001");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Текст ошибки из тела `{"error": "...", "fields": {...}}`
pub fn describe_error_body(status: u16, body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) if parsed.fields.is_empty() => parsed.error,
        Ok(parsed) => {
            let fields: Vec<String> = parsed
                .fields
                .iter()
                .map(|(field, message)| format!("{}: {}", field, message))
                .collect();
            format!("{} ({})", parsed.error, fields.join("; "))
        }
        Err(_) => format!("HTTP error: {}", status),
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(describe_error_body(status, &body));
    }
    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    read_json(response).await
}

/// GET, где 404 - нормальный ответ (`Ok(None)`)
pub async fn get_json_optional<T: DeserializeOwned>(path: &str) -> Result<Option<T>, String> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    if response.status() == 404 {
        return Ok(None);
    }
    read_json(response).await.map(Some)
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| format!("Failed to encode request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    read_json(response).await
}

pub async fn delete_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::delete(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    read_json(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_error_body() {
        assert_eq!(
            describe_error_body(404, r#"{"error":"Order not found: X"}"#),
            "Order not found: X"
        );
        assert_eq!(
            describe_error_body(
                422,
                r#"{"error":"validation failed","fields":{"email":"Email is required","name":"Name is required"}}"#
            ),
            "validation failed (email: Email is required; name: Name is required)"
        );
        assert_eq!(describe_error_body(502, "<html>"), "HTTP error: 502");
    }
}
