use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::header::COOKIE;
use axum::http::{HeaderValue, Method, Uri};
use axum::routing::any;

use super::*;
use crate::config::ServerConfig;

fn state_for(upstream_url: Option<String>) -> AppState {
    AppState {
        http: reqwest::Client::new(),
        config: Arc::new(ServerConfig {
            port: 0,
            upstream_url,
            upstream_timeout_secs: 5,
        }),
    }
}

fn api_request(method: &str, uri: &str, body: &str) -> Request {
    axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header(AUTHORIZATION, "Bearer abc")
        .header(CONTENT_TYPE, "application/json")
        .header(COOKIE, "session=1")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: String) -> impl IntoResponse {
    let auth = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()).unwrap_or("-");
    let cookie = headers.get(COOKIE).and_then(|v| v.to_str().ok()).unwrap_or("-");
    (
        StatusCode::IM_A_TEAPOT,
        [(CONTENT_TYPE, "text/plain")],
        format!("{method} {uri} {auth} {cookie} {body}"),
    )
}

/// Serve `echo` on an ephemeral port and return its base URL.
async fn spawn_upstream() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().route("/api/{*path}", any(echo));
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}/")
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// =============================================================================
// helpers
// =============================================================================

#[test]
fn upstream_url_joins_base_and_path() {
    assert_eq!(
        upstream_url("https://backend.test", "/api/reportes?reportadoId=5"),
        "https://backend.test/api/reportes?reportadoId=5"
    );
    assert_eq!(upstream_url("https://backend.test/", "/api/perfil"), "https://backend.test/api/perfil");
}

#[test]
fn forwarded_headers_keeps_only_the_allow_list() {
    let mut incoming = HeaderMap::new();
    incoming.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
    incoming.insert(ACCEPT, HeaderValue::from_static("application/json"));
    incoming.insert(COOKIE, HeaderValue::from_static("session=1"));
    incoming.insert("x-forwarded-for", HeaderValue::from_static("10.0.0.1"));

    let out = forwarded_headers(&incoming);
    assert_eq!(out.len(), 2);
    assert_eq!(out.get(AUTHORIZATION).unwrap(), "Bearer abc");
    assert_eq!(out.get(ACCEPT).unwrap(), "application/json");
    assert!(out.get(COOKIE).is_none());
}

// =============================================================================
// forward
// =============================================================================

#[tokio::test]
async fn forward_without_upstream_is_not_found() {
    let response = forward(State(state_for(None)), api_request("GET", "/api/perfil", "")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn forward_relays_method_path_query_body_and_status() {
    let base = spawn_upstream().await;
    let response = forward(
        State(state_for(Some(base))),
        api_request("POST", "/api/reportes?reportadoId=5", r#"{"motivo":"otro"}"#),
    )
    .await;

    assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
    assert_eq!(response.headers().get(CONTENT_TYPE).unwrap(), "text/plain");
    assert_eq!(
        body_text(response).await,
        r#"POST /api/reportes?reportadoId=5 Bearer abc - {"motivo":"otro"}"#
    );
}

#[tokio::test]
async fn forward_to_unreachable_upstream_is_bad_gateway() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let response = forward(
        State(state_for(Some(format!("http://{addr}")))),
        api_request("GET", "/api/perfil", ""),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["code"], "upstream_unavailable");
}
