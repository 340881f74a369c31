//! Theme - light form style

use egui::{Color32, CornerRadius, Stroke, Style, Visuals};

/// Color palette
pub struct Colors;

impl Colors {
    pub const BG_PAGE: Color32 = Color32::from_rgb(245, 247, 250);
    pub const BG_PANEL: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BG_HOVER: Color32 = Color32::from_rgb(226, 234, 244);
    pub const PRIMARY: Color32 = Color32::from_rgb(0, 94, 162);
    pub const TEXT: Color32 = Color32::from_rgb(27, 27, 27);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(96, 106, 120);
    pub const BORDER: Color32 = Color32::from_rgb(200, 208, 218);
}

/// Light style used by every view
pub fn light_theme() -> Style {
    let mut visuals = Visuals::light();

    visuals.panel_fill = Colors::BG_PAGE;
    visuals.window_fill = Colors::BG_PANEL;
    visuals.extreme_bg_color = Colors::BG_PANEL;

    let radius = CornerRadius::same(4);
    let widgets = &mut visuals.widgets;

    widgets.noninteractive.bg_stroke = Stroke::new(1.0, Colors::BORDER);
    widgets.noninteractive.fg_stroke = Stroke::new(1.0, Colors::TEXT);

    widgets.inactive.bg_fill = Colors::BG_PANEL;
    widgets.inactive.weak_bg_fill = Colors::BG_PANEL;
    widgets.inactive.bg_stroke = Stroke::new(1.0, Colors::BORDER);
    widgets.inactive.corner_radius = radius;

    widgets.hovered.weak_bg_fill = Colors::BG_HOVER;
    widgets.hovered.bg_stroke = Stroke::new(1.0, Colors::PRIMARY);
    widgets.hovered.corner_radius = radius;

    widgets.active.weak_bg_fill = Colors::PRIMARY;
    widgets.active.fg_stroke = Stroke::new(1.0, Color32::WHITE);
    widgets.active.corner_radius = radius;

    visuals.selection.bg_fill = Colors::PRIMARY.gamma_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, Colors::PRIMARY);

    Style {
        visuals,
        ..Style::default()
    }
}
