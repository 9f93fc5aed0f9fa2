//! REST API client for the VerdictVault backend.
//!
//! Every backend call goes through [`ApiClient`], which enforces the two
//! cross-cutting contracts call sites must never repeat:
//!
//! * a stored bearer token is attached to every outgoing request, and
//! * a 401 response clears the session store and forces navigation to the
//!   login page before the error reaches the caller.
//!
//! Browser HTTP runs over `gloo-net` behind the `csr` feature; native builds
//! get stub bodies that fail with [`ApiError::Network`] so the crate and its
//! tests compile without a browser.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use crate::net::types::{
    AnswerRequest, AnswerResponse, DocumentChunks, LoginRequest, LoginResponse, MetricsSummary,
    ParseResult, QueryLogPage, UploadResponse,
};
use crate::state::session::SessionStore;

/// Base endpoint, baked in at build time via `API_BASE_URL` since WASM has
/// no process environment to read at startup.
pub fn api_base() -> String {
    option_env!("API_BASE_URL")
        .unwrap_or("http://localhost:8000")
        .trim_end_matches('/')
        .to_owned()
}

/// Failures surfaced by the API client.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Backend rejected the credential; the session has already been cleared
    /// and navigation to the login page forced.
    #[error("session expired")]
    Unauthorized,
    /// Non-success status with an optional structured detail message.
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },
    /// Transport-level failure; no response was received.
    #[error("network error: {0}")]
    Network(String),
    /// Response arrived but its body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message suitable for direct display: the backend's `detail` field
    /// when one was sent, otherwise the caller's fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { detail: Some(detail), .. } => detail.clone(),
            _ => fallback.to_owned(),
        }
    }
}

/// HTTP client bound to a base URL and the injected session store.
#[derive(Clone)]
pub struct ApiClient {
    base: String,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(session: SessionStore) -> Self {
        Self::with_base(api_base(), session)
    }

    pub fn with_base(base: impl Into<String>, session: SessionStore) -> Self {
        let base = base.into().trim_end_matches('/').to_owned();
        Self { base, session }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// `Authorization` header value, when a token is stored.
    fn auth_header(&self) -> Option<String> {
        self.session.token().map(|token| bearer(&token))
    }

    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            self.post_json("/api/auth/login", credentials).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
            Err(native_stub())
        }
    }

    /// Multipart upload of one PDF under the `file` field. The browser sets
    /// the multipart boundary itself, so no content type is forced here.
    #[cfg(feature = "csr")]
    pub async fn upload_pdf(&self, file: &web_sys::File) -> Result<UploadResponse, ApiError> {
        let form = web_sys::FormData::new()
            .map_err(|_| ApiError::Network("could not build form data".to_owned()))?;
        form.append_with_blob("file", file)
            .map_err(|_| ApiError::Network("could not attach file".to_owned()))?;

        let mut req = gloo_net::http::Request::post(&self.url("/api/upload/"));
        if let Some(auth) = self.auth_header() {
            req = req.header("Authorization", &auth);
        }
        let resp = req
            .body(form)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.decode(resp).await
    }

    pub async fn parse_document(&self, doc_id: &str) -> Result<ParseResult, ApiError> {
        #[cfg(feature = "csr")]
        {
            self.post_empty(&format!("/api/parse/{doc_id}")).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = doc_id;
            Err(native_stub())
        }
    }

    pub async fn ask(&self, request: &AnswerRequest) -> Result<AnswerResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            self.post_json("/api/rag/ask", request).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(native_stub())
        }
    }

    pub async fn history(&self) -> Result<QueryLogPage, ApiError> {
        #[cfg(feature = "csr")]
        {
            self.get_json("/api/rag/history").await
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(native_stub())
        }
    }

    pub async fn document_chunks(&self, doc_id: &str) -> Result<DocumentChunks, ApiError> {
        #[cfg(feature = "csr")]
        {
            self.get_json(&format!("/api/parse/{doc_id}/chunks")).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = doc_id;
            Err(native_stub())
        }
    }

    pub async fn metrics_summary(&self) -> Result<MetricsSummary, ApiError> {
        #[cfg(feature = "csr")]
        {
            self.get_json("/api/metrics/summary").await
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(native_stub())
        }
    }

    pub async fn recent_queries(&self, limit: u32) -> Result<QueryLogPage, ApiError> {
        #[cfg(feature = "csr")]
        {
            self.get_json(&format!("/api/metrics/recent?limit={limit}")).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = limit;
            Err(native_stub())
        }
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base, path)
    }
}

#[cfg(feature = "csr")]
impl ApiClient {
    async fn get_json<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut req = gloo_net::http::Request::get(&self.url(path));
        if let Some(auth) = self.auth_header() {
            req = req.header("Authorization", &auth);
        }
        let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        self.decode(resp).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        let mut req = gloo_net::http::Request::post(&self.url(path));
        if let Some(auth) = self.auth_header() {
            req = req.header("Authorization", &auth);
        }
        let resp = req
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.decode(resp).await
    }

    async fn post_empty<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut req = gloo_net::http::Request::post(&self.url(path));
        if let Some(auth) = self.auth_header() {
            req = req.header("Authorization", &auth);
        }
        let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        self.decode(resp).await
    }

    /// Shared response handling: the 401 interception lives here so every
    /// endpoint gets it for free.
    async fn decode<T>(&self, resp: gloo_net::http::Response) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = resp.status();
        if status == 401 {
            let target = self.session.expire();
            leptos::logging::warn!("session rejected by backend, signing out");
            redirect(target);
            return Err(ApiError::Unauthorized);
        }
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, detail: extract_detail(&body) });
        }
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Full-page navigation, bypassing the router so in-flight view state is
/// dropped with the document.
#[cfg(feature = "csr")]
fn redirect(path: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }
}

#[cfg(not(feature = "csr"))]
fn native_stub() -> ApiError {
    ApiError::Network("HTTP requests require a browser context".to_owned())
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

/// Pull the backend's `{"detail": "..."}` message out of an error body.
/// Anything else (validation arrays, plain text, empty bodies) yields `None`
/// and the caller's fallback message is shown instead.
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("detail")?.as_str().map(ToOwned::to_owned)
}
