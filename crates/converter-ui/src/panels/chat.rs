//! Chat panel: message stream, quick actions and input field.

use egui::{self, Align, Key, KeyboardShortcut, Layout, Modifiers, RichText, ScrollArea, Vec2};

use converter_types::api::ChatRequest;
use converter_types::message::ChatMessage;

use crate::quick_actions::QuickAction;
use crate::state::UiState;
use crate::theme::*;

/// Render the chat panel. Returns a request when the user sends a message.
pub fn chat_panel(ui: &mut egui::Ui, state: &mut UiState, history_sent: usize) -> Option<ChatRequest> {
    let mut submitted = None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                // Header
                ui.horizontal(|ui| {
                    ui.heading(RichText::new("AI Assistant").color(TEXT_PRIMARY).strong());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let status_color = match state.backend_online {
                            Some(true) => SUCCESS,
                            Some(false) => ERROR,
                            None => WARNING,
                        };
                        ui.label(RichText::new(state.status_text()).color(status_color).small());
                        ui.label(RichText::new("●").color(status_color).small());
                    });
                });

                ui.separator();

                let available_height = ui.available_height() - 70.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        if state.session.history().is_empty() {
                            if let Some(action) = welcome(ui) {
                                state.apply_quick_action(action);
                            }
                        }

                        for entry in state.session.history().entries() {
                            render_entry(ui, entry);
                            ui.add_space(4.0);
                        }

                        if state.session.is_awaiting_reply() {
                            ui.horizontal(|ui| {
                                ui.add(egui::Spinner::new().size(12.0));
                                ui.label(RichText::new("Assistant is typing").color(TEXT_SECONDARY).small());
                            });
                        }
                    });

                ui.add_space(8.0);

                // Input area
                ui.horizontal(|ui| {
                    let input = egui::TextEdit::multiline(&mut state.chat_input)
                        .hint_text("Ask me anything about code conversion...")
                        .desired_rows(2)
                        .desired_width(ui.available_width() - 50.0)
                        .return_key(KeyboardShortcut::new(Modifiers::SHIFT, Key::Enter));
                    let response = ui.add(input);

                    let send_enabled = state.can_send();
                    let send_btn = ui.add_enabled(
                        send_enabled,
                        egui::Button::new(RichText::new("↗").color(TEXT_PRIMARY))
                            .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(40.0, 40.0)),
                    );

                    let enter = response.has_focus()
                        && ui.input(|i| i.key_pressed(Key::Enter) && i.modifiers.is_none());
                    if (enter && send_enabled) || send_btn.clicked() {
                        submitted = state.submit_chat(history_sent);
                        response.request_focus();
                    }
                });
            });
        });

    submitted
}

fn welcome(ui: &mut egui::Ui) -> Option<QuickAction> {
    let mut picked = None;
    ui.vertical_centered(|ui| {
        ui.add_space(12.0);
        ui.label(RichText::new("🤖 AI Coding Assistant").color(TEXT_PRIMARY).strong());
        ui.label(
            RichText::new(
                "I can help you with code conversion, optimization, debugging, and explanations!",
            )
            .color(TEXT_SECONDARY),
        );
        ui.add_space(8.0);
        ui.horizontal_wrapped(|ui| {
            for action in QuickAction::all() {
                if ui.button(action.label()).clicked() {
                    picked = Some(*action);
                }
            }
        });
    });
    picked
}

fn render_entry(ui: &mut egui::Ui, entry: &ChatMessage) {
    match entry {
        ChatMessage::ConversionSummary { from, to, .. } => {
            egui::Frame::default()
                .fill(BG_SURFACE)
                .corner_radius(PANEL_ROUNDING)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(format!("{} → {}", from, to))
                                .color(ACCENT)
                                .strong()
                                .small(),
                        );
                        ui.label(RichText::new(display_time(entry.timestamp())).color(TEXT_SECONDARY).small());
                    });
                    if let Some(preview) = entry.conversion_preview() {
                        egui::Frame::default()
                            .fill(CODE_PREVIEW_BG)
                            .corner_radius(PANEL_ROUNDING)
                            .inner_margin(6.0)
                            .show(ui, |ui| {
                                ui.label(RichText::new(preview).monospace().color(TEXT_PRIMARY));
                            });
                    }
                });
        }
        ChatMessage::User { content, .. } => bubble(ui, "You", ACCENT, USER_BUBBLE, content, entry),
        ChatMessage::Assistant { content, .. } => {
            bubble(ui, "Assistant", SUCCESS, BG_SECONDARY, content, entry)
        }
    }
}

fn bubble(
    ui: &mut egui::Ui,
    label: &str,
    label_color: egui::Color32,
    fill: egui::Color32,
    content: &str,
    entry: &ChatMessage,
) {
    egui::Frame::default()
        .fill(fill)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(label).color(label_color).strong().small());
                ui.label(RichText::new(display_time(entry.timestamp())).color(TEXT_SECONDARY).small());
            });
            ui.label(RichText::new(content).color(TEXT_PRIMARY));
        });
}

/// Local wall-clock time for an RFC 3339 stamp. Anything else is shown
/// as received.
pub fn display_time(timestamp: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(timestamp) {
        Ok(ts) => ts.with_timezone(&chrono::Local).format("%H:%M:%S").to_string(),
        Err(_) => timestamp.to_string(),
    }
}
