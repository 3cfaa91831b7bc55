use egui::{Color32, Context, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};
use std::collections::BTreeMap;

use crate::NoticeLevel;

/// Apply the reading theme: roomy text, soft panels, blue accent
pub fn apply_theme(ctx: &Context) {
    let mut style = Style::default();
    let mut visuals = Visuals::light();

    let panel_bg = Color32::from_rgb(250, 250, 252);
    let widget_bg = Color32::from_rgb(236, 238, 242);
    let text_color = Color32::from_rgb(33, 37, 41);

    visuals.panel_fill = panel_bg;
    visuals.window_fill = panel_bg;
    visuals.faint_bg_color = widget_bg;

    for widget in [
        &mut visuals.widgets.noninteractive,
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
    ] {
        widget.fg_stroke = Stroke::new(1.0, text_color);
        widget.rounding = Rounding::same(6.0);
    }
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, accent_color());

    // Selection and highlighting
    visuals.selection.bg_fill = accent_color().linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, accent_color());
    visuals.hyperlink_color = accent_color();

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 4.0);
    style.spacing.indent = 18.0;

    // Font sizes
    let mut font_sizes = BTreeMap::new();
    font_sizes.insert(TextStyle::Small, FontId::new(12.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Body, FontId::new(15.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Button, FontId::new(14.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Heading, FontId::new(26.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Monospace, FontId::new(13.0, FontFamily::Monospace));

    style.text_styles = font_sizes;

    ctx.set_style(style);
    ctx.set_visuals(visuals);
}

/// Get the accent color for the theme
pub fn accent_color() -> Color32 {
    Color32::from_rgb(52, 120, 246)
}

/// Get the error color for the theme
pub fn error_color() -> Color32 {
    Color32::from_rgb(220, 53, 69)
}

/// Get the warning color for the theme
pub fn warning_color() -> Color32 {
    Color32::from_rgb(230, 160, 30)
}

/// Get the success color for the theme
pub fn success_color() -> Color32 {
    Color32::from_rgb(40, 167, 69)
}

/// Color for an inline message of the given level
pub fn notice_color(level: NoticeLevel) -> Color32 {
    match level {
        NoticeLevel::Success => success_color(),
        NoticeLevel::Warning => warning_color(),
        NoticeLevel::Error => error_color(),
    }
}
