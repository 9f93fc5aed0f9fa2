use super::*;
use crate::net::types::User;

fn store_with_token(token: &str) -> SessionStore {
    let store = SessionStore::in_memory();
    let user = User {
        id: 1,
        email: "ada@example.com".to_owned(),
        name: "Ada".to_owned(),
        role: "user".to_owned(),
    };
    store.set_session(token, &user);
    store
}

// =============================================================
// Bearer credential attachment
// =============================================================

#[test]
fn auth_header_present_with_stored_token() {
    let client = ApiClient::with_base("http://api.test", store_with_token("tok-9"));
    assert_eq!(client.auth_header().as_deref(), Some("Bearer tok-9"));
}

#[test]
fn auth_header_absent_without_token() {
    let client = ApiClient::with_base("http://api.test", SessionStore::in_memory());
    assert!(client.auth_header().is_none());
}

#[test]
fn bearer_formats_credential() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

// =============================================================
// URL construction
// =============================================================

#[test]
fn with_base_trims_trailing_slash() {
    let client = ApiClient::with_base("http://api.test/", SessionStore::in_memory());
    assert_eq!(client.url("/api/rag/ask"), "http://api.test/api/rag/ask");
}

#[test]
fn join_url_keeps_path_intact() {
    assert_eq!(
        join_url("http://localhost:8000", "/api/parse/doc-1/chunks"),
        "http://localhost:8000/api/parse/doc-1/chunks"
    );
}

// =============================================================
// Error detail extraction
// =============================================================

#[test]
fn extract_detail_reads_string_field() {
    assert_eq!(
        extract_detail(r#"{"detail":"Only PDF files are supported"}"#).as_deref(),
        Some("Only PDF files are supported")
    );
}

#[test]
fn extract_detail_ignores_non_string_detail() {
    // FastAPI validation errors put an array under `detail`.
    assert!(extract_detail(r#"{"detail":[{"loc":["body"],"msg":"bad"}]}"#).is_none());
}

#[test]
fn extract_detail_ignores_unstructured_bodies() {
    assert!(extract_detail("Internal Server Error").is_none());
    assert!(extract_detail("").is_none());
    assert!(extract_detail(r#"{"message":"nope"}"#).is_none());
}

// =============================================================
// User-facing messages
// =============================================================

#[test]
fn user_message_prefers_backend_detail() {
    let err = ApiError::Status { status: 400, detail: Some("File too large".to_owned()) };
    assert_eq!(err.user_message("Upload failed."), "File too large");
}

#[test]
fn user_message_falls_back_without_detail() {
    let err = ApiError::Status { status: 500, detail: None };
    assert_eq!(err.user_message("Upload failed."), "Upload failed.");

    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.user_message("Upload failed."), "Upload failed.");
}

// =============================================================
// Unauthorized contract
// =============================================================

#[test]
fn expired_session_is_emptied_before_error_surfaces() {
    // `decode` runs session.expire() on a 401; the store-side half of that
    // contract is what native tests can observe.
    let store = store_with_token("tok-9");
    let client = ApiClient::with_base("http://api.test", store.clone());

    let target = client.session().expire();

    assert_eq!(target, "/login");
    assert!(!store.is_authenticated());
    assert!(store.user().is_none());
}
