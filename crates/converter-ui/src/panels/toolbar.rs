//! Header bar: source language, convert button, target language.

use egui::{self, RichText, Vec2};

use converter_types::language::LanguageTag;

use crate::state::UiState;
use crate::theme::*;

/// Render the toolbar. Returns `true` when Convert was clicked.
pub fn toolbar(ui: &mut egui::Ui, state: &mut UiState) -> bool {
    let mut convert_clicked = false;

    ui.horizontal(|ui| {
        ui.label(
            RichText::new("Code Converter IDE")
                .strong()
                .color(ACCENT)
                .size(18.0),
        );
        ui.separator();

        let mut current = state.session.current_language();
        language_selector(ui, "current_language", "Current Language", &mut current);
        if current != state.session.current_language() {
            log::debug!("Current language -> {}", current);
            state.session.set_current_language(current);
        }

        convert_clicked = convert_button(ui, state);

        let mut target = state.session.target_language();
        language_selector(ui, "target_language", "Convert To", &mut target);
        if target != state.session.target_language() {
            state.session.set_target_language(target);
        }
    });

    convert_clicked
}

fn language_selector(ui: &mut egui::Ui, id: &str, label: &str, selected: &mut LanguageTag) {
    ui.vertical(|ui| {
        ui.label(RichText::new(label).color(TEXT_SECONDARY).small());
        egui::ComboBox::from_id_salt(id)
            .selected_text(selected.label())
            .width(120.0)
            .show_ui(ui, |ui| {
                for language in LanguageTag::all() {
                    ui.selectable_value(selected, *language, language.label());
                }
            });
    });
}

fn convert_button(ui: &mut egui::Ui, state: &UiState) -> bool {
    let converting = state.session.is_converting();
    let enabled = state.session.can_convert();

    if converting {
        ui.add(egui::Spinner::new());
    }
    let text = if converting { "Converting..." } else { "→ Convert" };
    ui.add_enabled(
        enabled,
        egui::Button::new(RichText::new(text).color(TEXT_PRIMARY).strong())
            .fill(if enabled { ACCENT } else { BG_SURFACE })
            .corner_radius(PANEL_ROUNDING)
            .min_size(Vec2::new(110.0, 28.0)),
    )
    .clicked()
}
