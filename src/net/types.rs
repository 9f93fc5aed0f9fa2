//! Wire types matching the backend's REST models.
//!
//! Field names and shapes mirror the server responses exactly; serde does
//! the rest. `cost_usd` stays a string on the wire because the backend
//! serializes it from a decimal — parsing happens only at display time (see
//! `util::format::format_cost`).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Signed-in user profile, also the shape persisted in `localStorage`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub role: String,
}

/// `POST /api/auth/login` request body.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /api/auth/login` response: profile plus bearer token, flat.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub access_token: String,
    pub role: String,
}

impl LoginResponse {
    /// Split the flat response into the profile the session store persists.
    pub fn into_user(self) -> (String, User) {
        let user = User {
            id: self.id,
            email: self.email,
            name: self.name,
            role: self.role,
        };
        (self.access_token, user)
    }
}

/// `POST /api/upload/` response.
#[derive(Clone, Debug, Deserialize)]
pub struct UploadResponse {
    pub id: String,
    pub status: String,
}

/// `POST /api/parse/{doc_id}` response.
#[derive(Clone, Debug, Deserialize)]
pub struct ParseResult {
    pub doc_id: String,
    pub chunks_indexed: u32,
    pub total_chunks: u32,
    pub status: String,
}

/// `POST /api/rag/ask` request body. `model` is omitted when `None` so the
/// server default applies.
#[derive(Clone, Debug, Serialize)]
pub struct AnswerRequest {
    pub query: String,
    pub k: u32,
    pub max_context_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl Default for AnswerRequest {
    fn default() -> Self {
        Self {
            query: String::new(),
            k: 5,
            max_context_tokens: 2000,
            model: None,
        }
    }
}

/// One retrieved chunk supporting an answer. Ordering within
/// [`AnswerResponse::citations`] is the backend's relevance rank.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Citation {
    pub doc_id: String,
    pub chunk_index: u32,
    pub snippet: String,
    pub score: f64,
}

/// `POST /api/rag/ask` response.
#[derive(Clone, Debug, Deserialize)]
pub struct AnswerResponse {
    pub answer: String,
    pub citations: Vec<Citation>,
    pub provider: String,
    pub model: String,
    pub tokens_in: u32,
    pub tokens_out: u32,
    pub cost_usd: String,
    pub latency_ms: f64,
    pub cached: bool,
}

/// One historical query record. `user_name` is only populated on the admin
/// recent-queries listing.
#[derive(Clone, Debug, Deserialize)]
pub struct QueryLog {
    pub id: String,
    pub user_id: i64,
    #[serde(default)]
    pub user_name: Option<String>,
    pub query: String,
    pub provider: String,
    pub model: String,
    pub tokens_in: u32,
    pub tokens_out: u32,
    pub cost_usd: String,
    pub latency_ms: f64,
    pub created_at: String,
    pub cached: bool,
}

/// Envelope for history and recent-query listings.
#[derive(Clone, Debug, Deserialize)]
pub struct QueryLogPage {
    pub items: Vec<QueryLog>,
}

/// One indexed slice of a parsed document.
#[derive(Clone, Debug, Deserialize)]
pub struct DocumentChunk {
    pub id: String,
    pub chunk_index: u32,
    pub content: String,
    pub embedding_length: u32,
}

/// `GET /api/parse/{doc_id}/chunks` response.
#[derive(Clone, Debug, Deserialize)]
pub struct DocumentChunks {
    pub doc_id: String,
    pub chunks: Vec<DocumentChunk>,
    pub total_chunks: u32,
}

/// Per-model aggregate on the admin dashboard.
#[derive(Clone, Debug, Deserialize)]
pub struct ModelMetrics {
    pub model: String,
    pub n: u64,
    pub avg_cost_usd: f64,
    pub p95_latency_ms: i64,
}

/// One hourly bucket of the last-24h breakdown.
#[derive(Clone, Debug, Deserialize)]
pub struct HourlyMetrics {
    pub ts_hour: String,
    pub n: u64,
    pub avg_cost_usd: f64,
    pub avg_latency_ms: f64,
}

/// `GET /api/metrics/summary` response.
#[derive(Clone, Debug, Deserialize)]
pub struct MetricsSummary {
    pub total_queries: u64,
    pub cache_hit_rate: f64,
    pub avg_cost_usd: f64,
    pub p50_latency_ms: i64,
    pub p95_latency_ms: i64,
    pub by_model: Vec<ModelMetrics>,
    pub last_24h: Vec<HourlyMetrics>,
}
