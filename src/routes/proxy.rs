//! Same-origin `/api/*` forwarding to the rental backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The hydrated client calls `/api/...` on its own origin. This handler relays
//! method, path, query, body, and a fixed set of request headers to
//! `API_UPSTREAM_URL`, then returns the upstream status, content type, and
//! body unchanged.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Request, State};
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::state::AppState;

/// Largest request body relayed upstream.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Error body in the same `{ error, code }` shape the backend uses.
#[derive(Debug, Serialize)]
pub struct ProxyErrorBody {
    pub error: &'static str,
    pub code: &'static str,
}

/// `{base}{path?query}`.
pub fn upstream_url(base: &str, path_and_query: &str) -> String {
    format!("{}{path_and_query}", base.trim_end_matches('/'))
}

/// Keep only `authorization`, `content-type`, and `accept`.
pub fn forwarded_headers(incoming: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in [AUTHORIZATION, CONTENT_TYPE, ACCEPT] {
        for value in incoming.get_all(&name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

fn bad_gateway() -> Response {
    let body = ProxyErrorBody {
        error: "upstream unavailable",
        code: "upstream_unavailable",
    };
    (StatusCode::BAD_GATEWAY, Json(body)).into_response()
}

/// `ANY /api/{*path}`.
pub async fn forward(State(state): State<AppState>, request: Request) -> Response {
    let Some(base) = state.config.upstream_url.as_deref() else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let (parts, body) = request.into_parts();
    let path_and_query = parts
        .uri
        .path_and_query()
        .map_or_else(|| parts.uri.path().to_owned(), ToString::to_string);
    let url = upstream_url(base, &path_and_query);

    let body = match axum::body::to_bytes(body, MAX_BODY_BYTES).await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(error = %e, %url, "request body rejected");
            return StatusCode::PAYLOAD_TOO_LARGE.into_response();
        }
    };

    let upstream = state
        .http
        .request(parts.method.clone(), &url)
        .headers(forwarded_headers(&parts.headers))
        .body(body)
        .send()
        .await;

    match upstream {
        Ok(resp) => relay(resp, &url).await,
        Err(e) => {
            tracing::warn!(error = %e, method = %parts.method, %url, "upstream request failed");
            bad_gateway()
        }
    }
}

async fn relay(resp: reqwest::Response, url: &str) -> Response {
    let status = resp.status();
    let content_type = resp.headers().get(CONTENT_TYPE).cloned();
    let bytes: Bytes = match resp.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(error = %e, %url, "upstream body read failed");
            return bad_gateway();
        }
    };

    let mut response = (status, bytes).into_response();
    match content_type {
        Some(value) => {
            response.headers_mut().insert(CONTENT_TYPE, value);
        }
        None => {
            response.headers_mut().remove(CONTENT_TYPE);
        }
    }
    response
}
