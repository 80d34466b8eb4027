//! Search progress indicator rendered above an AI message.
//!
//! Stages appear in the order they were entered, which is the order
//! the backend reported them, with the query, source URLs, and any
//! error attached to the relevant stage.

use egui::{self, RichText};

use chat_types::search::{SearchProgress, SearchStage};
use crate::theme::*;

pub const SEARCH_ERROR_FALLBACK: &str = "An error occurred during search.";

const URL_DISPLAY_LEN: usize = 35;

/// Display label for a search stage.
pub fn stage_label(stage: SearchStage) -> &'static str {
    match stage {
        SearchStage::Searching => "Searching the web",
        SearchStage::Reading => "Reading sources",
        SearchStage::Writing => "Generating response",
        SearchStage::Error => "Search error",
    }
}

/// Error text to display, falling back when the backend sent none.
pub fn error_display(progress: &SearchProgress) -> &str {
    match progress.error.as_deref() {
        Some(text) if !text.is_empty() => text,
        _ => SEARCH_ERROR_FALLBACK,
    }
}

/// Truncate a URL for chip display.
pub fn truncate_url(url: &str) -> String {
    if url.chars().count() <= URL_DISPLAY_LEN {
        url.to_string()
    } else {
        let truncated: String = url.chars().take(URL_DISPLAY_LEN).collect();
        format!("{}…", truncated)
    }
}

/// Render the stage list of one message's search progress.
pub fn search_stages(ui: &mut egui::Ui, progress: &SearchProgress) {
    if progress.stages.is_empty() {
        return;
    }

    ui.vertical(|ui| {
        for stage in &progress.stages {
            ui.horizontal(|ui| {
                let dot_color = match stage {
                    SearchStage::Error => ERROR,
                    _ => ACCENT,
                };
                ui.label(RichText::new("●").color(dot_color).small());
                ui.label(
                    RichText::new(stage_label(*stage))
                        .color(match stage {
                            SearchStage::Error => ERROR,
                            _ => TEXT_PRIMARY,
                        })
                        .strong()
                        .small(),
                );
            });

            match stage {
                SearchStage::Searching if !progress.query.is_empty() => {
                    chip(ui, &progress.query);
                }
                SearchStage::Reading => {
                    for url in &progress.urls {
                        chip(ui, &truncate_url(url));
                    }
                }
                SearchStage::Error => {
                    egui::Frame::default()
                        .fill(ERROR_BG)
                        .corner_radius(PANEL_ROUNDING)
                        .inner_margin(6.0)
                        .show(ui, |ui| {
                            ui.label(
                                RichText::new(error_display(progress)).color(ERROR).small(),
                            );
                        });
                }
                _ => {}
            }
        }
    });
}

fn chip(ui: &mut egui::Ui, text: &str) {
    ui.horizontal(|ui| {
        ui.add_space(14.0);
        egui::Frame::default()
            .fill(BG_SURFACE)
            .corner_radius(PANEL_ROUNDING)
            .inner_margin(6.0)
            .show(ui, |ui| {
                ui.label(RichText::new(text).color(TEXT_SECONDARY).small());
            });
    });
}
