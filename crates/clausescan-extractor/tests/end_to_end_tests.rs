//! End-to-end tests: Analyzer → Gemini provider → fake upstream over HTTP

use axum::{extract::State, http::StatusCode, routing::post, Router};
use clausescan_domain::{ClauseEntry, ClauseRecord};
use clausescan_extractor::{AnalysisResponse, Analyzer, AnalyzerConfig, ErrorKind, ExtractorError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Clone)]
struct FakeGemini {
    status: StatusCode,
    body: String,
    hits: Arc<AtomicUsize>,
}

async fn generate_content(State(state): State<FakeGemini>) -> (StatusCode, String) {
    state.hits.fetch_add(1, Ordering::SeqCst);
    (state.status, state.body.clone())
}

/// Helper to start a fake Gemini endpoint, returning its URL and hit counter
async fn spawn_gemini(status: StatusCode, body: String) -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let app = Router::new()
        .route("/v1beta/generate", post(generate_content))
        .with_state(FakeGemini {
            status,
            body,
            hits: hits.clone(),
        });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/v1beta/generate", addr), hits)
}

fn config_for(endpoint: String) -> AnalyzerConfig {
    let mut config = AnalyzerConfig::default().with_api_key("integration-key");
    config.endpoint = endpoint;
    config.request_timeout_secs = 10;
    config
}

fn envelope(text: &str) -> String {
    serde_json::json!({
        "candidates": [{"content": {"parts": [{"text": text}]}}]
    })
    .to_string()
}

#[tokio::test]
async fn test_successful_round_trip() {
    let reply = r#"[{"clause":"X","category":"Payment","explanation":"Y"}]"#;
    let (url, hits) = spawn_gemini(StatusCode::OK, envelope(reply)).await;
    let analyzer = Analyzer::from_config(config_for(url)).unwrap();

    let result = analyzer.analyze_document("Some contract text").await.unwrap();

    assert_eq!(
        result.clauses,
        vec![ClauseEntry::Record(ClauseRecord::new("X", "Payment", "Y"))]
    );
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_server_error_is_upstream_error() {
    let (url, hits) = spawn_gemini(
        StatusCode::INTERNAL_SERVER_ERROR,
        r#"{"error":{"message":"backend unavailable"}}"#.to_string(),
    )
    .await;
    let analyzer = Analyzer::from_config(config_for(url)).unwrap();

    match analyzer.analyze_document("Some contract text").await {
        Err(ExtractorError::Upstream { status, body }) => {
            assert_eq!(status, Some(500));
            assert!(body.contains("backend unavailable"));
        }
        other => panic!("Expected Upstream error, got {:?}", other),
    }
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_wrong_envelope_is_shape_error() {
    let (url, _) = spawn_gemini(StatusCode::OK, r#"{"candidates":[{"content":{}}]}"#.to_string()).await;
    let analyzer = Analyzer::from_config(config_for(url)).unwrap();

    let error = analyzer.analyze_document("Some contract text").await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::UpstreamResponseShape);
}

#[tokio::test]
async fn test_prose_reply_is_format_error() {
    let (url, _) = spawn_gemini(StatusCode::OK, envelope("Sorry, I can't help with that.")).await;
    let analyzer = Analyzer::from_config(config_for(url)).unwrap();

    let error = analyzer.analyze_document("Some contract text").await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::ExtractionFormat);
}

#[tokio::test]
async fn test_empty_document_never_reaches_upstream() {
    let (url, hits) = spawn_gemini(StatusCode::OK, envelope("[]")).await;
    let analyzer = Analyzer::from_config(config_for(url)).unwrap();

    let error = analyzer.analyze_document("").await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::EmptyDocument);
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_boundary_response_for_failure() {
    let (url, _) = spawn_gemini(StatusCode::SERVICE_UNAVAILABLE, "overloaded".to_string()).await;
    let analyzer = Analyzer::from_config(config_for(url)).unwrap();

    let response = AnalysisResponse::from(analyzer.analyze_document("Some contract text").await);
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["error"]["kind"], "upstream");
    assert_eq!(json["error"]["upstream_status"], 503);
    assert_eq!(json["error"]["upstream_body"], "overloaded");
}
