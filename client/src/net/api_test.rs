use super::*;
use crate::config::api_base;

#[test]
fn profile_endpoint_formats_expected_path() {
    assert_eq!(profile_endpoint(), format!("{}/api/perfil", api_base()));
}

#[test]
fn host_comments_endpoint_includes_host_id_query() {
    assert_eq!(
        host_comments_endpoint(42),
        format!("{}/api/comentarios-carro?hostId=42", api_base())
    );
}

#[test]
fn reports_against_endpoint_includes_reported_id_query() {
    assert_eq!(
        reports_against_endpoint(7),
        format!("{}/api/reportes?reportadoId=7", api_base())
    );
}

#[test]
fn reports_endpoint_formats_expected_path() {
    assert_eq!(reports_endpoint(), format!("{}/api/reportes", api_base()));
}

#[test]
fn bearer_prefixes_token() {
    assert_eq!(bearer("abc"), "Bearer abc");
    assert_eq!(bearer(""), "Bearer ");
}

#[test]
fn parse_error_body_reads_error_and_code() {
    let body = parse_error_body(r#"{"error":"Has alcanzado el límite de reportes","code":"daily_limit"}"#).unwrap();
    assert_eq!(body.error, "Has alcanzado el límite de reportes");
    assert_eq!(body.code.as_deref(), Some("daily_limit"));
}

#[test]
fn parse_error_body_rejects_non_json() {
    assert_eq!(parse_error_body("<html>502</html>"), None);
}

#[test]
fn decode_list_rejects_object_payload() {
    let result = decode_list::<ExistingReport>(serde_json::json!({ "error": "nope" }), "report payload");
    assert_eq!(
        result,
        Err(ApiError::MalformedPayload("report payload is not an array".to_owned()))
    );
}

#[test]
fn decode_list_rejects_null_payload() {
    let result = decode_list::<CommentRecord>(serde_json::Value::Null, "comment payload");
    assert!(matches!(result, Err(ApiError::MalformedPayload(_))));
}

#[test]
fn decode_list_reports_schema_mismatch_as_decode_error() {
    let result = decode_list::<ExistingReport>(serde_json::json!([{ "id": 1 }]), "report payload");
    assert!(matches!(result, Err(ApiError::Decode(_))));
}

#[test]
fn decode_list_accepts_empty_array() {
    let result = decode_list::<ExistingReport>(serde_json::json!([]), "report payload");
    assert_eq!(result, Ok(Vec::new()));
}

#[test]
fn require_identity_returns_id_or_missing_identity() {
    let with_id = ProfileRecord { id: Some(5), roles: Vec::new() };
    let without_id = ProfileRecord::default();
    assert_eq!(require_identity(&with_id), Ok(5));
    assert_eq!(require_identity(&without_id), Err(ApiError::MissingIdentity));
}
