//! REST API helpers for the rental backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each carrying
//! `Authorization: Bearer <token>`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call is single-shot. Callers get a typed `ApiError` and decide how
//! to surface it; nothing here retries or panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
#[cfg(any(test, feature = "hydrate"))]
use super::types::ApiErrorBody;
use super::types::{CommentRecord, ExistingReport, NewReport, ProfileRecord};

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    format!("{}{path}", crate::config::api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn profile_endpoint() -> String {
    endpoint("/api/perfil")
}

#[cfg(any(test, feature = "hydrate"))]
fn host_comments_endpoint(host_id: i64) -> String {
    endpoint(&format!("/api/comentarios-carro?hostId={host_id}"))
}

#[cfg(any(test, feature = "hydrate"))]
fn reports_against_endpoint(reported_id: i64) -> String {
    endpoint(&format!("/api/reportes?reportadoId={reported_id}"))
}

#[cfg(any(test, feature = "hydrate"))]
fn reports_endpoint() -> String {
    endpoint("/api/reportes")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_error_body(raw: &str) -> Option<ApiErrorBody> {
    serde_json::from_str(raw).ok()
}

/// Decode a list payload, rejecting anything that is not a JSON array.
#[cfg(any(test, feature = "hydrate"))]
fn decode_list<T: serde::de::DeserializeOwned>(value: serde_json::Value, what: &str) -> Result<Vec<T>, ApiError> {
    if !value.is_array() {
        return Err(ApiError::MalformedPayload(format!("{what} is not an array")));
    }
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// The user id a profile must carry before host data can be requested.
///
/// # Errors
///
/// Returns `ApiError::MissingIdentity` when the profile has no id.
pub fn require_identity(profile: &ProfileRecord) -> Result<i64, ApiError> {
    profile.id.ok_or(ApiError::MissingIdentity)
}

#[cfg(feature = "hydrate")]
async fn status_error(resp: &gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.ok().and_then(|raw| parse_error_body(&raw));
    ApiError::Status { status, body }
}

#[cfg(feature = "hydrate")]
async fn get_json(url: &str, token: &str) -> Result<serde_json::Value, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(status_error(&resp).await);
    }
    resp.json::<serde_json::Value>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch the current user's profile from `GET /api/perfil`.
///
/// # Errors
///
/// Returns an error if the request fails, the status is not 2xx, or the body
/// is not a profile object.
pub async fn fetch_profile(token: &str) -> Result<ProfileRecord, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let value = get_json(&profile_endpoint(), token).await?;
        serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Fetch every comment left on vehicles owned by `host_id` from
/// `GET /api/comentarios-carro?hostId=<id>`.
///
/// # Errors
///
/// Returns an error if the request fails, the status is not 2xx, or the body
/// is not an array of comments.
pub async fn fetch_host_comments(token: &str, host_id: i64) -> Result<Vec<CommentRecord>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let value = get_json(&host_comments_endpoint(host_id), token).await?;
        decode_list(value, "comment payload")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, host_id);
        Err(ApiError::Unavailable)
    }
}

/// Fetch reports the current user already filed against `reported_id` from
/// `GET /api/reportes?reportadoId=<id>`.
///
/// # Errors
///
/// Returns an error if the request fails, the status is not 2xx, or the body
/// is not an array of reports.
pub async fn fetch_reports_against(token: &str, reported_id: i64) -> Result<Vec<ExistingReport>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let value = get_json(&reports_against_endpoint(reported_id), token).await?;
        decode_list(value, "report payload")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, reported_id);
        Err(ApiError::Unavailable)
    }
}

/// File a new report via `POST /api/reportes`.
///
/// # Errors
///
/// Returns `ApiError::Status` carrying the backend's `{ error, code }` body
/// when the report is rejected, or a transport error.
pub async fn submit_report(token: &str, report: &NewReport) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&reports_endpoint())
            .header("Authorization", &bearer(token))
            .json(report)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(&resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, report);
        Err(ApiError::Unavailable)
    }
}
