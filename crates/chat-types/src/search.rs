use serde::{Deserialize, Serialize};

/// A named phase of backend search progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStage {
    Searching,
    Reading,
    Writing,
    Error,
}

impl SearchStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchStage::Searching => "searching",
            SearchStage::Reading => "reading",
            SearchStage::Writing => "writing",
            SearchStage::Error => "error",
        }
    }
}

/// Progress of a backend web search, grown monotonically as stage
/// events arrive.
///
/// `stages` is an insertion-ordered set: a stage appears at most once,
/// at the position its first triggering event arrived. The order is
/// whatever the stream delivered, not a fixed canonical order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchProgress {
    pub stages: Vec<SearchStage>,
    pub query: String,
    pub urls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchProgress {
    /// Append a stage unless it is already present.
    pub fn push_stage(&mut self, stage: SearchStage) {
        if !self.stages.contains(&stage) {
            self.stages.push(stage);
        }
    }

    pub fn has_stage(&self, stage: SearchStage) -> bool {
        self.stages.contains(&stage)
    }
}
