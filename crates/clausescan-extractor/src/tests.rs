//! Integration tests for the Analyzer

#[cfg(test)]
mod tests {
    use crate::{Analyzer, AnalyzerConfig, ErrorKind, ExtractorError};
    use clausescan_domain::{ClauseEntry, ClauseRecord};
    use clausescan_llm::{LlmError, MockProvider};
    use std::sync::Arc;
    use std::time::Duration;

    const CONTRACT: &str = "1. Payment. The Client shall pay all invoices within 30 days.";

    fn analyzer(provider: MockProvider) -> Analyzer<MockProvider> {
        Analyzer::new(provider, AnalyzerConfig::default())
    }

    #[tokio::test]
    async fn test_full_analysis_flow() {
        let llm = MockProvider::new(
            r#"Here are the clauses:
```json
[
    {
        "clause": "The Client shall pay all invoices within 30 days.",
        "category": "Payment",
        "explanation": "You must pay each bill within a month."
    }
]
```"#,
        );
        let analyzer = analyzer(llm);

        let result = analyzer.analyze_document(CONTRACT).await.unwrap();

        assert_eq!(result.len(), 1);
        let record = result.records().next().unwrap();
        assert_eq!(record.category, "Payment");
        assert_eq!(record.clause, "The Client shall pay all invoices within 30 days.");
    }

    #[tokio::test]
    async fn test_analyze_returns_raw_reply() {
        let analyzer = analyzer(MockProvider::new("raw model text"));

        let reply = analyzer.analyze(CONTRACT).await.unwrap();
        assert_eq!(reply, "raw model text");
    }

    #[tokio::test]
    async fn test_prompt_sent_to_generator_contains_document() {
        let llm = MockProvider::new("[]");
        let analyzer = analyzer(llm.clone());

        analyzer.analyze(CONTRACT).await.unwrap();

        let prompt = llm.last_prompt().unwrap();
        assert!(prompt.contains(&format!("---\n{}\n---", CONTRACT)));
    }

    #[tokio::test]
    async fn test_empty_document_makes_no_call() {
        let llm = MockProvider::new("[]");
        let analyzer = analyzer(llm.clone());

        for text in ["", "   ", "\n\t\n"] {
            let result = analyzer.analyze(text).await;
            assert!(matches!(result, Err(ExtractorError::EmptyDocument)));
        }

        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_upstream_error_skips_parsing() {
        let llm = MockProvider::failing(LlmError::Upstream {
            status: 500,
            body: "internal".to_string(),
        });
        let analyzer = analyzer(llm.clone());

        match analyzer.analyze_document(CONTRACT).await {
            Err(error) => {
                assert_eq!(error.kind(), ErrorKind::Upstream);
                assert_eq!(error.upstream_status(), Some(500));
                assert_eq!(error.upstream_body(), Some("internal"));
            }
            Ok(result) => panic!("Expected failure, got {:?}", result),
        }
        assert_eq!(llm.call_count(), 1, "no retry");
    }

    #[tokio::test]
    async fn test_shape_error_is_reported() {
        let llm = MockProvider::failing(LlmError::InvalidResponse("no candidates".to_string()));
        let analyzer = analyzer(llm);

        let error = analyzer.analyze_document(CONTRACT).await.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::UpstreamResponseShape);
    }

    #[tokio::test]
    async fn test_reply_without_array_is_format_error() {
        let analyzer = analyzer(MockProvider::new("I could not find any clauses."));

        let error = analyzer.analyze_document(CONTRACT).await.unwrap_err();
        assert!(matches!(error, ExtractorError::NoArrayFound));
        assert_eq!(error.kind(), ErrorKind::ExtractionFormat);
    }

    #[tokio::test]
    async fn test_permissive_mode_keeps_odd_entries() {
        let analyzer = analyzer(MockProvider::new("[1,2,3]"));

        let result = analyzer.analyze_document(CONTRACT).await.unwrap();
        assert_eq!(result.len(), 3);
        assert_eq!(result.records().count(), 0);
        assert_eq!(serde_json::to_string(&result.clauses).unwrap(), "[1,2,3]");
    }

    #[tokio::test]
    async fn test_strict_mode_rejects_odd_entries() {
        let mut config = AnalyzerConfig::default();
        config.strict_schema = true;
        let analyzer = Analyzer::new(MockProvider::new("[1,2,3]"), config);

        let error = analyzer.analyze_document(CONTRACT).await.unwrap_err();
        assert!(matches!(error, ExtractorError::SchemaMismatch { index: 0, .. }));
    }

    #[tokio::test]
    async fn test_slow_generator_times_out_as_upstream_error() {
        let mut config = AnalyzerConfig::default();
        config.request_timeout_secs = 1;
        let llm = MockProvider::new("[]").with_delay(Duration::from_secs(5));
        let analyzer = Analyzer::new(llm, config);

        let error = analyzer.analyze(CONTRACT).await.unwrap_err();
        assert!(matches!(error, ExtractorError::UpstreamTimeout(1)));
        assert_eq!(error.kind(), ErrorKind::Upstream);
    }

    #[tokio::test]
    async fn test_missing_credential_fails_at_construction() {
        let result = Analyzer::from_config(AnalyzerConfig::default());

        match result {
            Err(error) => assert_eq!(error.kind(), ErrorKind::Config),
            Ok(_) => panic!("Expected configuration error"),
        }
    }

    #[tokio::test]
    async fn test_invalid_config_fails_at_construction() {
        let mut config = AnalyzerConfig::default().with_api_key("k");
        config.request_timeout_secs = 0;

        assert!(matches!(Analyzer::from_config(config), Err(ExtractorError::Config(_))));
    }

    #[tokio::test]
    async fn test_concurrent_analyses_are_independent() {
        let mut llm = MockProvider::new("[]");
        for i in 0..8 {
            let prompt = crate::PromptBuilder::new(&format!("Document {}", i)).build();
            llm.add_response(
                prompt,
                format!(r#"[{{"clause":"{}","category":"Payment","explanation":"x"}}]"#, i),
            );
        }
        let analyzer = Arc::new(analyzer(llm.clone()));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let analyzer = Arc::clone(&analyzer);
                tokio::spawn(async move { analyzer.analyze_document(&format!("Document {}", i)).await })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let result = handle.await.unwrap().unwrap();
            assert_eq!(
                result.clauses,
                vec![ClauseEntry::Record(ClauseRecord::new(i.to_string(), "Payment", "x"))]
            );
        }
        assert_eq!(llm.call_count(), 8);
    }

    #[tokio::test]
    async fn test_repeated_analysis_is_stable() {
        let analyzer = analyzer(MockProvider::new(
            r#"[{"clause":"A","category":"Liability","explanation":"B"}]"#,
        ));

        let first = analyzer.analyze_document(CONTRACT).await.unwrap();
        let second = analyzer.analyze_document(CONTRACT).await.unwrap();
        assert_eq!(first, second);
    }
}
