use egui::{Color32, Context, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};
use std::collections::BTreeMap;

use dm_core::{AppSettings, LogLevel};

/// Apply the application theme derived from the user settings
pub fn apply_theme(ctx: &Context, settings: &AppSettings) {
    let mut style = Style::default();
    let mut visuals = if settings.dark_mode {
        dark_visuals()
    } else {
        Visuals::light()
    };

    let accent = accent_color();
    visuals.selection.bg_fill = accent.linear_multiply(0.4);
    visuals.selection.stroke = Stroke::new(1.0, accent);
    visuals.hyperlink_color = accent;

    for widgets in [
        &mut visuals.widgets.noninteractive,
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
    ] {
        widgets.rounding = Rounding::same(3.0);
    }

    // Custom background chosen in the settings dialog
    if let Some([r, g, b]) = settings.background {
        let bg = Color32::from_rgb(r, g, b);
        visuals.panel_fill = bg;
        visuals.window_fill = bg;
    }

    style.spacing.item_spacing = egui::vec2(8.0, 4.0);
    style.spacing.button_padding = egui::vec2(8.0, 3.0);
    style.spacing.menu_margin = egui::Margin::same(6.0);

    style.text_styles = text_styles(settings.font_size);

    ctx.set_style(style);
    ctx.set_visuals(visuals);
}

/// Dark palette: grey window, near-black text fields, blue highlight
fn dark_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    let window = Color32::from_rgb(53, 53, 53);
    let base = Color32::from_rgb(25, 25, 25);
    let text = Color32::WHITE;

    visuals.window_fill = window;
    visuals.panel_fill = window;
    visuals.extreme_bg_color = base;
    visuals.faint_bg_color = Color32::from_rgb(60, 60, 60);
    visuals.code_bg_color = base;

    visuals.widgets.noninteractive.bg_fill = window;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, text);
    visuals.widgets.inactive.bg_fill = window;
    visuals.widgets.inactive.weak_bg_fill = window;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, text);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, text);
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, text);

    visuals
}

fn text_styles(body: f32) -> BTreeMap<TextStyle, FontId> {
    let mut font_sizes = BTreeMap::new();
    font_sizes.insert(TextStyle::Small, FontId::new((body - 2.0).max(6.0), FontFamily::Proportional));
    font_sizes.insert(TextStyle::Body, FontId::new(body, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Button, FontId::new(body, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Heading, FontId::new(body + 5.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Monospace, FontId::new((body - 1.0).max(6.0), FontFamily::Monospace));
    font_sizes
}

/// Get the accent color for the theme
pub fn accent_color() -> Color32 {
    Color32::from_rgb(42, 130, 218)
}

/// Get the error color for the theme
pub fn error_color() -> Color32 {
    Color32::from_rgb(230, 80, 80)
}

/// Get the warning color for the theme
pub fn warning_color() -> Color32 {
    Color32::from_rgb(230, 180, 80)
}

/// Get the success color for the theme
pub fn success_color() -> Color32 {
    Color32::from_rgb(80, 200, 80)
}

/// Text colour of a log line; `None` keeps the default
pub fn log_level_color(level: LogLevel) -> Option<Color32> {
    match level {
        LogLevel::Info => None,
        LogLevel::Warning => Some(warning_color()),
        LogLevel::Error => Some(error_color()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_styles_follow_body_size() {
        let styles = text_styles(16.0);
        assert_eq!(styles[&TextStyle::Body].size, 16.0);
        assert_eq!(styles[&TextStyle::Heading].size, 21.0);
        assert_eq!(text_styles(6.0)[&TextStyle::Small].size, 6.0);
    }

    #[test]
    fn test_only_problems_are_colored() {
        assert_eq!(log_level_color(LogLevel::Info), None);
        assert_eq!(log_level_color(LogLevel::Error), Some(error_color()));
    }
}
