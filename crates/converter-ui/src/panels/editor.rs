//! Code editor panel.

use egui::{self, FontId, RichText};

use converter_core::editor_sync::EditorSync;
use converter_core::ports::EditorWidget;
use converter_types::session::SessionState;

use crate::editor::EguiEditorHost;
use crate::theme::*;

/// Render the editor and push user edits upward into the session.
pub fn editor_panel(
    ui: &mut egui::Ui,
    sync: &mut EditorSync<EguiEditorHost>,
    session: &mut SessionState,
) {
    let language = sync.language();

    egui::Frame::default()
        .fill(EDITOR_BG)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(language.file_label()).color(TEXT_PRIMARY).monospace());
                if let Some(widget) = sync.widget() {
                    ui.label(
                        RichText::new(format!("{} highlighting", widget.mode().label()))
                            .color(TEXT_SECONDARY)
                            .small(),
                    );
                }
            });
            ui.separator();

            let Some(widget) = sync.widget_mut() else {
                return;
            };
            let id = widget.id();
            let changed = egui::ScrollArea::vertical()
                .id_salt(("code_scroll", id))
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.add(
                        egui::TextEdit::multiline(widget.text_mut())
                            .id_salt(("code_editor", id))
                            .code_editor()
                            .font(FontId::monospace(CODE_FONT_SIZE))
                            .desired_width(f32::INFINITY)
                            .desired_rows(30)
                            .lock_focus(true),
                    )
                    .changed()
                })
                .inner;

            if changed {
                sync.on_widget_changed(session);
            }
        });
}
