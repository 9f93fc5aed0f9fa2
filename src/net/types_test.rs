use super::*;

// =============================================================
// AnswerRequest serialization
// =============================================================

#[test]
fn answer_request_defaults() {
    let req = AnswerRequest::default();
    assert_eq!(req.k, 5);
    assert_eq!(req.max_context_tokens, 2000);
    assert!(req.model.is_none());
}

#[test]
fn answer_request_omits_absent_model() {
    let req = AnswerRequest {
        query: "What is force majeure?".to_owned(),
        ..AnswerRequest::default()
    };
    let json = serde_json::to_value(&req).expect("serialize");

    assert_eq!(json["query"], "What is force majeure?");
    assert_eq!(json["k"], 5);
    assert!(json.get("model").is_none());
}

#[test]
fn answer_request_sends_explicit_model() {
    let req = AnswerRequest {
        query: "q".to_owned(),
        model: Some("gpt-4o".to_owned()),
        ..AnswerRequest::default()
    };
    let json = serde_json::to_value(&req).expect("serialize");
    assert_eq!(json["model"], "gpt-4o");
}

// =============================================================
// AnswerResponse deserialization
// =============================================================

const ANSWER_JSON: &str = r#"{
    "answer": "Force majeure excuses performance.",
    "citations": [
        {"doc_id": "d-1", "chunk_index": 4, "snippet": "first", "score": 0.91},
        {"doc_id": "d-2", "chunk_index": 0, "snippet": "second", "score": 0.55}
    ],
    "provider": "openai",
    "model": "gpt-4o-mini",
    "tokens_in": 1500,
    "tokens_out": 230,
    "cost_usd": "0.000412",
    "latency_ms": 842.5,
    "cached": false
}"#;

#[test]
fn answer_response_preserves_citation_order() {
    let resp: AnswerResponse = serde_json::from_str(ANSWER_JSON).expect("deserialize");

    assert_eq!(resp.citations.len(), 2);
    assert_eq!(resp.citations[0].doc_id, "d-1");
    assert_eq!(resp.citations[0].score, 0.91);
    assert_eq!(resp.citations[1].doc_id, "d-2");
}

#[test]
fn answer_response_cost_parses_non_negative() {
    let resp: AnswerResponse = serde_json::from_str(ANSWER_JSON).expect("deserialize");
    let cost: f64 = resp.cost_usd.parse().expect("decimal cost");
    assert!(cost >= 0.0);
}

// =============================================================
// Login response split
// =============================================================

#[test]
fn login_response_splits_into_token_and_user() {
    let resp: LoginResponse = serde_json::from_str(
        r#"{"id":3,"email":"a@b.c","name":"A","access_token":"tok","role":"admin"}"#,
    )
    .expect("deserialize");

    let (token, user) = resp.into_user();
    assert_eq!(token, "tok");
    assert_eq!(user.id, 3);
    assert_eq!(user.role, "admin");
}

// =============================================================
// Query log listings
// =============================================================

#[test]
fn query_log_tolerates_missing_user_name() {
    let page: QueryLogPage = serde_json::from_str(
        r#"{"items":[{
            "id":"q-1","user_id":3,"query":"q","provider":"openai",
            "model":"gpt-4o-mini","tokens_in":10,"tokens_out":5,
            "cost_usd":"0.000010","latency_ms":120.0,
            "created_at":"2026-08-01T10:00:00Z","cached":true
        }]}"#,
    )
    .expect("deserialize");

    assert_eq!(page.items.len(), 1);
    assert!(page.items[0].user_name.is_none());
    assert!(page.items[0].cached);
}

#[test]
fn metrics_summary_deserializes() {
    let summary: MetricsSummary = serde_json::from_str(
        r#"{
            "total_queries": 120,
            "cache_hit_rate": 41.67,
            "avg_cost_usd": 0.000321,
            "p50_latency_ms": 640,
            "p95_latency_ms": 2210,
            "by_model": [
                {"model":"gpt-4o-mini","n":100,"avg_cost_usd":0.0002,"p95_latency_ms":1900}
            ],
            "last_24h": [
                {"ts_hour":"2026-08-01T10:00:00","n":12,"avg_cost_usd":0.0004,"avg_latency_ms":700.0}
            ]
        }"#,
    )
    .expect("deserialize");

    assert_eq!(summary.total_queries, 120);
    assert_eq!(summary.by_model[0].model, "gpt-4o-mini");
    assert_eq!(summary.last_24h[0].n, 12);
}
