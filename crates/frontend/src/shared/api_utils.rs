//! API utilities for frontend-backend communication
//!
//! Every request is JSON in both directions. Success is decided by the HTTP
//! status class only; the body of a non-2xx response is mined for a
//! `{ message }` / `{ error }` text. No auth headers, retries or cancellation.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::config::api_config;
use super::error::ApiError;

/// Join a base URL and an endpoint path with exactly one slash between them
///
/// `("http://127.0.0.1:5000/", "get_users")` -> `"http://127.0.0.1:5000/get_users"`
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Build a full API URL from an endpoint path such as `/get_tenants`
pub fn api_url(path: &str) -> String {
    join_url(&api_config().base_url, path)
}

/// GET `path` and decode the JSON body
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let url = api_url(path);
    log::debug!("GET {}", url);

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| transport_error(&url, e))?;

    let body = read_body(&url, response).await?;
    decode(&url, &body)
}

/// POST `body` as JSON to `path`; returns the raw response text on 2xx
pub async fn post<B: Serialize>(path: &str, body: &B) -> Result<String, ApiError> {
    let url = api_url(path);
    log::debug!("POST {}", url);

    let response = Request::post(&url)
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| transport_error(&url, e))?
        .send()
        .await
        .map_err(|e| transport_error(&url, e))?;

    read_body(&url, response).await
}

/// Decode a 2xx body into `T`
pub fn decode<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| {
        log::error!("Undecodable response from {}: {}", url, e);
        ApiError::Decode(e.to_string())
    })
}

async fn read_body(url: &str, response: Response) -> Result<String, ApiError> {
    let status = response.status();
    let body = response.text().await;

    if !response.ok() {
        let err = ApiError::rejected(status, body.as_deref().unwrap_or(""));
        log::warn!("{} rejected: {}", url, err);
        return Err(err);
    }

    body.map_err(|e| transport_error(url, e))
}

fn transport_error(url: &str, e: gloo_net::Error) -> ApiError {
    log::error!("Request to {} failed: {}", url, e);
    ApiError::Transport(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_organization::TenantsResponse;

    #[test]
    fn test_join_url_normalizes_slashes() {
        assert_eq!(
            join_url("http://127.0.0.1:5000", "/get_tenants"),
            "http://127.0.0.1:5000/get_tenants"
        );
        assert_eq!(
            join_url("http://127.0.0.1:5000/", "get_tenants"),
            "http://127.0.0.1:5000/get_tenants"
        );
        assert_eq!(
            join_url("https://example.com/admin/", "/create_role"),
            "https://example.com/admin/create_role"
        );
    }

    #[test]
    fn test_api_url_uses_configured_base() {
        let url = api_url("/get_users");
        assert!(url.starts_with(api_config().base_url.trim_end_matches('/')));
        assert!(url.ends_with("/get_users"));
    }

    #[test]
    fn test_decode_reports_shape_mismatch() {
        let err = decode::<TenantsResponse>("http://x/get_tenants", r#"{"tenants":"nope"}"#)
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
