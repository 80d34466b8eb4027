//! Search-stage accumulator.
//!
//! Pure folds over `SearchProgress`: each function takes the prior
//! progress (if any) and the fields carried by the triggering event,
//! and returns the next progress value. Stages are appended at most
//! once, in arrival order.

use chat_types::search::{SearchProgress, SearchStage};

/// A `search_start` event always begins a fresh progress record,
/// discarding any prior progress for this response.
pub fn begin_search(query: impl Into<String>) -> SearchProgress {
    SearchProgress {
        stages: vec![SearchStage::Searching],
        query: query.into(),
        urls: Vec::new(),
        error: None,
    }
}

/// Fold a `search_results` event: enter the reading stage and replace
/// the URL list with the latest one. Query is preserved from `prior`.
pub fn record_results(prior: Option<&SearchProgress>, urls: Vec<String>) -> SearchProgress {
    let mut next = prior.cloned().unwrap_or_default();
    next.push_stage(SearchStage::Reading);
    next.urls = urls;
    next
}

/// Fold a `search_error` event: enter the error stage and record the
/// error text. Other fields are preserved.
pub fn record_error(prior: Option<&SearchProgress>, error: impl Into<String>) -> SearchProgress {
    let mut next = prior.cloned().unwrap_or_default();
    next.push_stage(SearchStage::Error);
    next.error = Some(error.into());
    next
}

/// Fold the terminal `end` event: enter the writing stage, leaving all
/// other fields untouched.
pub fn finish_writing(prior: Option<&SearchProgress>) -> SearchProgress {
    let mut next = prior.cloned().unwrap_or_default();
    next.push_stage(SearchStage::Writing);
    next
}
