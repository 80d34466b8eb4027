//! Chat panel — message area plus input bar.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};

use chat_core::session::ChatSession;
use chat_types::message::Message;

use crate::panels::search;
use crate::theme::*;

const WAITING_TEXT: &str = "Waiting for response...";

/// Render the chat panel. Returns true when the user submitted input
/// (the caller decides whether a stream actually opens).
pub fn chat_panel(ui: &mut egui::Ui, session: &mut ChatSession) -> bool {
    let mut submitted = false;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                // Messages area
                let available_height = ui.available_height() - 52.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for message in session.messages() {
                            render_message(ui, message);
                            ui.add_space(6.0);
                        }
                    });

                ui.add_space(8.0);

                // Input bar
                ui.horizontal(|ui| {
                    let is_loading = session.is_loading();
                    let input = egui::TextEdit::singleline(&mut session.current_input)
                        .hint_text("Ask anything...")
                        .desired_width(ui.available_width() - 70.0)
                        .font(egui::FontId::proportional(14.0));

                    let response = ui.add_enabled(!is_loading, input);

                    let can_send =
                        !session.current_input.trim().is_empty() && !session.is_loading();
                    let send_btn = ui.add_enabled(
                        can_send,
                        egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                            .fill(if can_send { ACCENT } else { BG_SURFACE })
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(60.0, 0.0)),
                    );

                    // Submit on Enter or button click
                    if (response.lost_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter))
                        && can_send)
                        || send_btn.clicked()
                    {
                        submitted = true;
                        response.request_focus();
                    }
                });
            });
        });

    submitted
}

fn render_message(ui: &mut egui::Ui, message: &Message) {
    let layout = if message.is_user {
        Layout::right_to_left(Align::TOP)
    } else {
        Layout::left_to_right(Align::TOP)
    };

    ui.with_layout(layout, |ui| {
        ui.set_max_width(ui.available_width() * 0.85);
        ui.vertical(|ui| {
            // Search progress above the AI bubble
            if !message.is_user {
                if let Some(progress) = &message.search_info {
                    search::search_stages(ui, progress);
                }
            }

            let bubble_fill = if message.is_user { BG_USER_BUBBLE } else { BG_SECONDARY };
            egui::Frame::default()
                .fill(bubble_fill)
                .corner_radius(PANEL_ROUNDING)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    if message.is_loading {
                        ui.add(egui::Spinner::new().color(ACCENT));
                    } else if message.content.is_empty() && !message.is_user {
                        ui.label(
                            RichText::new(WAITING_TEXT).color(TEXT_SECONDARY).italics().small(),
                        );
                    } else {
                        ui.label(RichText::new(&message.content).color(TEXT_PRIMARY));
                    }
                });

            let author = if message.is_user { "You" } else { "Assistant" };
            ui.label(RichText::new(author).color(TEXT_SECONDARY).small());
        });
    });
}
