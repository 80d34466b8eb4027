#[cfg(test)]
mod tests {
    use crate::config::*;
    use crate::error::*;
    use crate::event::*;
    use crate::message::*;
    use crate::search::*;

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_message_greeting() {
        let msg = Message::greeting();
        assert_eq!(msg.id, 1);
        assert_eq!(msg.content, GREETING_TEXT);
        assert!(!msg.is_user);
        assert!(!msg.is_loading);
        assert!(msg.search_info.is_none());
    }

    #[test]
    fn test_message_user() {
        let msg = Message::user(2, "Hello");
        assert_eq!(msg.id, 2);
        assert_eq!(msg.content, "Hello");
        assert!(msg.is_user);
        assert!(!msg.is_loading);
    }

    #[test]
    fn test_message_ai_placeholder() {
        let msg = Message::ai_placeholder(3);
        assert_eq!(msg.id, 3);
        assert!(msg.content.is_empty());
        assert!(!msg.is_user);
        assert!(msg.is_loading);

        let info = msg.search_info.expect("placeholder carries empty progress");
        assert!(info.stages.is_empty());
        assert!(info.query.is_empty());
        assert!(info.urls.is_empty());
        assert!(info.error.is_none());
    }

    #[test]
    fn test_message_standalone_error() {
        let msg = Message::standalone_error(4, CONNECT_ERROR_TEXT);
        assert_eq!(msg.id, 4);
        assert_eq!(msg.content, CONNECT_ERROR_TEXT);
        assert!(!msg.is_user);
        assert!(!msg.is_loading);
        assert!(msg.search_info.is_none());
    }

    #[test]
    fn test_message_serialization_roundtrip() {
        let msg = Message::user(7, "test input");
        let json = serde_json::to_string(&msg).unwrap();
        let deserialized: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.id, 7);
        assert_eq!(deserialized.content, "test input");
        assert!(deserialized.is_user);
    }

    #[test]
    fn test_message_serialization_skips_empty_search_info() {
        let msg = Message::user(2, "hi");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(!json.contains("search_info"));
    }

    // ─── SearchStage / SearchProgress Tests ──────────────────

    #[test]
    fn test_search_stage_serialization() {
        assert_eq!(serde_json::to_string(&SearchStage::Searching).unwrap(), r#""searching""#);
        assert_eq!(serde_json::to_string(&SearchStage::Reading).unwrap(), r#""reading""#);
        assert_eq!(serde_json::to_string(&SearchStage::Writing).unwrap(), r#""writing""#);
        assert_eq!(serde_json::to_string(&SearchStage::Error).unwrap(), r#""error""#);
    }

    #[test]
    fn test_search_stage_deserialization() {
        let stage: SearchStage = serde_json::from_str(r#""reading""#).unwrap();
        assert_eq!(stage, SearchStage::Reading);
    }

    #[test]
    fn test_search_stage_as_str() {
        assert_eq!(SearchStage::Searching.as_str(), "searching");
        assert_eq!(SearchStage::Reading.as_str(), "reading");
        assert_eq!(SearchStage::Writing.as_str(), "writing");
        assert_eq!(SearchStage::Error.as_str(), "error");
    }

    #[test]
    fn test_search_progress_default_is_empty() {
        let progress = SearchProgress::default();
        assert!(progress.stages.is_empty());
        assert!(progress.query.is_empty());
        assert!(progress.urls.is_empty());
        assert!(progress.error.is_none());
    }

    #[test]
    fn test_search_progress_push_stage_preserves_order() {
        let mut progress = SearchProgress::default();
        progress.push_stage(SearchStage::Reading);
        progress.push_stage(SearchStage::Searching);
        assert_eq!(progress.stages, vec![SearchStage::Reading, SearchStage::Searching]);
    }

    #[test]
    fn test_search_progress_push_stage_no_duplicates() {
        let mut progress = SearchProgress::default();
        progress.push_stage(SearchStage::Searching);
        progress.push_stage(SearchStage::Searching);
        progress.push_stage(SearchStage::Reading);
        progress.push_stage(SearchStage::Reading);
        assert_eq!(progress.stages, vec![SearchStage::Searching, SearchStage::Reading]);
        assert!(progress.has_stage(SearchStage::Reading));
        assert!(!progress.has_stage(SearchStage::Writing));
    }

    // ─── StreamEvent Tests ───────────────────────────────────

    #[test]
    fn test_stream_event_checkpoint() {
        let event: StreamEvent =
            serde_json::from_str(r#"{"type":"checkpoint","checkpoint_id":"abc-123"}"#).unwrap();
        assert_eq!(
            event,
            StreamEvent::Checkpoint { checkpoint_id: Some("abc-123".to_string()) }
        );
    }

    #[test]
    fn test_stream_event_checkpoint_missing_id() {
        let event: StreamEvent = serde_json::from_str(r#"{"type":"checkpoint"}"#).unwrap();
        assert_eq!(event, StreamEvent::Checkpoint { checkpoint_id: None });
    }

    #[test]
    fn test_stream_event_content() {
        let event: StreamEvent =
            serde_json::from_str(r#"{"type":"content","content":"Paris"}"#).unwrap();
        assert_eq!(event, StreamEvent::Content { content: "Paris".to_string() });
    }

    #[test]
    fn test_stream_event_content_defaults_to_empty() {
        let event: StreamEvent = serde_json::from_str(r#"{"type":"content"}"#).unwrap();
        assert_eq!(event, StreamEvent::Content { content: String::new() });
    }

    #[test]
    fn test_stream_event_search_start() {
        let event: StreamEvent =
            serde_json::from_str(r#"{"type":"search_start","query":"capital of France"}"#).unwrap();
        assert_eq!(event, StreamEvent::SearchStart { query: "capital of France".to_string() });
    }

    #[test]
    fn test_stream_event_search_results_array() {
        let event: StreamEvent =
            serde_json::from_str(r#"{"type":"search_results","urls":["https://a","https://b"]}"#)
                .unwrap();
        let StreamEvent::SearchResults { urls } = event else {
            panic!("wrong variant");
        };
        assert_eq!(
            urls,
            UrlPayload::Many(vec!["https://a".to_string(), "https://b".to_string()])
        );
    }

    #[test]
    fn test_stream_event_search_results_string() {
        // Double-encoded form emitted by the backend
        let event: StreamEvent = serde_json::from_str(
            r#"{"type":"search_results","urls":"[\"https://a\"]"}"#,
        )
        .unwrap();
        let StreamEvent::SearchResults { urls } = event else {
            panic!("wrong variant");
        };
        assert_eq!(urls, UrlPayload::One(r#"["https://a"]"#.to_string()));
    }

    #[test]
    fn test_stream_event_search_error() {
        let event: StreamEvent =
            serde_json::from_str(r#"{"type":"search_error","error":"rate limited"}"#).unwrap();
        assert_eq!(event, StreamEvent::SearchError { error: "rate limited".to_string() });
    }

    #[test]
    fn test_stream_event_end() {
        let event: StreamEvent = serde_json::from_str(r#"{"type":"end"}"#).unwrap();
        assert_eq!(event, StreamEvent::End);
    }

    #[test]
    fn test_stream_event_unknown_tag_is_rejected() {
        assert!(serde_json::from_str::<StreamEvent>(r#"{"type":"telemetry"}"#).is_err());
    }

    #[test]
    fn test_stream_event_missing_tag_is_rejected() {
        assert!(serde_json::from_str::<StreamEvent>(r#"{"content":"hi"}"#).is_err());
    }

    #[test]
    fn test_url_payload_default() {
        assert_eq!(UrlPayload::default(), UrlPayload::Many(Vec::new()));
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_default_config() {
        let config = BackendConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_config_strips_trailing_slashes() {
        let config = BackendConfig::new("https://api.example.com//");
        assert_eq!(config.base_url, "https://api.example.com");
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = BackendConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: BackendConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.base_url, config.base_url);
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        let err = ChatError::Stream("connection dropped".to_string());
        assert_eq!(err.to_string(), "Stream error: connection dropped");

        let err = ChatError::Network("offline".to_string());
        assert_eq!(err.to_string(), "Network error: offline");

        let err = ChatError::Config("bad base url".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad base url");
    }

    #[test]
    fn test_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{{invalid}}").unwrap_err();
        let err: ChatError = serde_err.into();
        assert!(matches!(err, ChatError::Serialization(_)));
    }

    #[test]
    fn test_error_clone() {
        let err = ChatError::Network("timeout".to_string());
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }
}
