//! Main egui application — composes the chat panel and owns the
//! session plus the streaming transport.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{self, CentralPanel, RichText, TopBottomPanel};

use chat_core::ports::ChatStreamPort;
use chat_core::session::{drive_stream, ChatSession};
use chat_platform::EventSourceTransport;
use chat_types::config::BackendConfig;
use chat_ui::panels::chat;
use chat_ui::theme;

pub struct ChatApp {
    session: Rc<RefCell<ChatSession>>,
    transport: Rc<dyn ChatStreamPort>,
    first_frame: bool,
}

impl ChatApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            session: Rc::new(RefCell::new(ChatSession::new())),
            transport: Rc::new(EventSourceTransport::new(BackendConfig::default())),
            first_frame: true,
        }
    }

    /// Open a stream for the pending submission and pump it into the
    /// session without blocking the UI thread.
    fn dispatch_submission(&self, ctx: &egui::Context) {
        let Some(req) = self.session.borrow_mut().submit() else {
            return;
        };

        match self.transport.open(&req) {
            Ok(stream) => {
                let session = self.session.clone();
                let ctx = ctx.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let notify = {
                        let ctx = ctx.clone();
                        move || ctx.request_repaint()
                    };
                    drive_stream(&session, stream, req.stream_id, notify).await;
                    ctx.request_repaint();
                });
            }
            Err(e) => {
                log::error!("Failed to open stream: {}", e);
                self.session.borrow_mut().setup_error();
                ctx.request_repaint();
            }
        }
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Keep the spinner animating while a stream is in flight
        if self.session.borrow().is_loading() {
            ctx.request_repaint();
        }

        // ── Top bar ──────────────────────────────────────────
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("●").color(theme::ACCENT));
                ui.label(
                    RichText::new("Research Assistant")
                        .strong()
                        .color(theme::TEXT_PRIMARY)
                        .size(16.0),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Clear chat").clicked() {
                        self.session.borrow_mut().clear();
                    }
                    if self.session.borrow().is_loading() && ui.button("Stop").clicked() {
                        self.session.borrow_mut().abort();
                    }
                });
            });
        });

        // ── Chat ─────────────────────────────────────────────
        CentralPanel::default().show(ctx, |ui| {
            let submitted = chat::chat_panel(ui, &mut self.session.borrow_mut());
            if submitted {
                self.dispatch_submission(ctx);
            }
        });
    }
}
