//! UI theme constants

use egui::{Color32, CornerRadius, Stroke, Vec2};

pub const BG_PRIMARY: Color32 = Color32::from_rgb(30, 33, 39);
pub const BG_SECONDARY: Color32 = Color32::from_rgb(40, 44, 52);
pub const BG_SURFACE: Color32 = Color32::from_rgb(53, 59, 69);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(220, 223, 228);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(140, 147, 160);
pub const ACCENT: Color32 = Color32::from_rgb(97, 175, 239);
pub const SUCCESS: Color32 = Color32::from_rgb(152, 195, 121);
pub const ERROR: Color32 = Color32::from_rgb(224, 108, 117);
pub const WARNING: Color32 = Color32::from_rgb(229, 192, 123);
pub const EDITOR_BG: Color32 = Color32::from_rgb(33, 37, 43);
pub const CODE_PREVIEW_BG: Color32 = Color32::from_rgb(24, 26, 31);
pub const USER_BUBBLE: Color32 = Color32::from_rgb(44, 62, 88);

pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(6);
pub const PANEL_PADDING: Vec2 = Vec2::new(12.0, 8.0);
pub const CODE_FONT_SIZE: f32 = 14.0;

/// Apply the dark editor theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.dark_mode = true;
    style.visuals.panel_fill = BG_PRIMARY;
    style.visuals.window_fill = BG_SECONDARY;
    style.visuals.extreme_bg_color = EDITOR_BG;
    style.visuals.code_bg_color = CODE_PREVIEW_BG;

    style.visuals.widgets.inactive.bg_fill = BG_SURFACE;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    style.visuals.widgets.hovered.bg_fill = BG_SURFACE;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.widgets.active.bg_fill = ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, BG_PRIMARY);

    style.visuals.selection.bg_fill = ACCENT.linear_multiply(0.35);
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    style.spacing.item_spacing = Vec2::new(8.0, 6.0);

    ctx.set_style(style);
}
