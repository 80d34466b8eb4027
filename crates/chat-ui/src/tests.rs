#[cfg(test)]
mod tests {
    use crate::panels::search::*;
    use chat_types::search::{SearchProgress, SearchStage};

    // ─── Stage Label Tests ───────────────────────────────────

    #[test]
    fn test_stage_labels() {
        assert_eq!(stage_label(SearchStage::Searching), "Searching the web");
        assert_eq!(stage_label(SearchStage::Reading), "Reading sources");
        assert_eq!(stage_label(SearchStage::Writing), "Generating response");
        assert_eq!(stage_label(SearchStage::Error), "Search error");
    }

    // ─── Error Display Tests ─────────────────────────────────

    #[test]
    fn test_error_display_uses_backend_text() {
        let progress = SearchProgress {
            stages: vec![SearchStage::Error],
            query: String::new(),
            urls: Vec::new(),
            error: Some("quota exceeded".to_string()),
        };
        assert_eq!(error_display(&progress), "quota exceeded");
    }

    #[test]
    fn test_error_display_fallback() {
        let progress = SearchProgress::default();
        assert_eq!(error_display(&progress), SEARCH_ERROR_FALLBACK);

        let empty_error = SearchProgress {
            error: Some(String::new()),
            ..SearchProgress::default()
        };
        assert_eq!(error_display(&empty_error), SEARCH_ERROR_FALLBACK);
    }

    // ─── URL Truncation Tests ────────────────────────────────

    #[test]
    fn test_truncate_url_short_unchanged() {
        assert_eq!(truncate_url("https://a.example"), "https://a.example");
    }

    #[test]
    fn test_truncate_url_long() {
        let url = "https://en.wikipedia.org/wiki/Paris_(disambiguation_page)";
        let truncated = truncate_url(url);
        assert!(truncated.ends_with('…'));
        assert_eq!(truncated.chars().count(), 36);
    }
}
