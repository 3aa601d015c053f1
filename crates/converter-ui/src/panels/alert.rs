use egui::{self, Align2, RichText};

use crate::state::UiState;
use crate::theme::*;

/// Modal-style window for the pending alert, if any.
pub fn alert_window(ctx: &egui::Context, state: &mut UiState) {
    let Some(message) = state.alert.clone() else {
        return;
    };

    let mut dismissed = false;
    egui::Window::new("Notice")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(RichText::new(message).color(TEXT_PRIMARY));
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });

    if dismissed {
        state.dismiss_alert();
    }
}
