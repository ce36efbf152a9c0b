use super::*;

#[test]
fn endpoint_paths_match_backend_routes() {
    assert_eq!(Endpoint::Register.path(), "/auth/register");
    assert_eq!(Endpoint::Login.path(), "/auth/login");
    assert_eq!(Endpoint::UpdateUser.path(), "/auth/updateUser");
}

#[test]
fn only_update_uses_patch() {
    assert_eq!(Endpoint::UpdateUser.method(), Method::Patch);
    assert_eq!(Endpoint::Register.method(), Method::Post);
    assert_eq!(Endpoint::Login.method(), Method::Post);
}

#[test]
fn endpoint_url_joins_without_double_slash() {
    assert_eq!(endpoint_url("https://api.test/v1/", Endpoint::Login), "https://api.test/v1/auth/login");
    assert_eq!(endpoint_url("https://api.test/v1", Endpoint::Login), "https://api.test/v1/auth/login");
}

#[test]
fn transport_url_uses_base() {
    let transport = HttpTransport::new("https://api.test");
    assert_eq!(transport.base_url(), "https://api.test");
    assert_eq!(transport.url(Endpoint::Register), "https://api.test/auth/register");
}

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("abc"), "Bearer abc");
}

#[test]
fn parse_body_empty_is_null() {
    assert_eq!(parse_body("  ").unwrap(), serde_json::Value::Null);
}

#[test]
fn parse_body_invalid_json_is_decode_error() {
    assert!(matches!(parse_body("<html>"), Err(ApiError::Decode(_))));
}

#[test]
fn status_error_carries_server_msg() {
    let err = status_error(400, r#"{"msg":"Please provide all values"}"#);
    assert_eq!(err, ApiError::Status { status: 400, message: Some("Please provide all values".to_owned()) });
}

#[test]
fn status_error_tolerates_non_json_body() {
    let err = status_error(502, "Bad Gateway");
    assert_eq!(err, ApiError::Status { status: 502, message: None });
}

#[cfg(not(feature = "hydrate"))]
#[tokio::test]
async fn transport_is_unavailable_off_browser() {
    let transport = HttpTransport::new("https://api.test");
    let result = transport.call(Endpoint::Login, &serde_json::json!({}), None).await;
    assert!(matches!(result, Err(ApiError::Network(_))));
}
