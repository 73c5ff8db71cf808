//! Window geometry, colors and fonts for the counter window.

use eframe::egui;

pub const ACTIVE_COUNT_COLOR: egui::Color32 = egui::Color32::from_rgb(0x00, 0x66, 0xcc);
pub const NEUTRAL_COUNT_COLOR: egui::Color32 = egui::Color32::from_rgb(0x99, 0x99, 0x99);
pub const HELP_TEXT_COLOR: egui::Color32 = egui::Color32::from_rgb(0x66, 0x66, 0x66);

/// Cosmetic state of the readout; nothing else depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayTone {
    Active,
    Neutral,
}

impl DisplayTone {
    pub fn for_count(count: u64) -> Self {
        if count > 0 {
            Self::Active
        } else {
            Self::Neutral
        }
    }

    pub fn color(self) -> egui::Color32 {
        match self {
            Self::Active => ACTIVE_COUNT_COLOR,
            Self::Neutral => NEUTRAL_COUNT_COLOR,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ViewConfig {
    pub app_id: &'static str,
    pub window_title: &'static str,
    pub window_size: [f32; 2],
    pub heading: &'static str,
    pub click_label: &'static str,
    pub reset_label: &'static str,
    pub help_text: &'static str,
    pub heading_size: f32,
    pub readout_size: f32,
    pub button_text_size: f32,
    pub help_text_size: f32,
    pub button_size: [f32; 2],
    pub button_gap: f32,
    pub outer_padding: i8,
    pub display_border_width: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            app_id: "click_counter",
            window_title: "Click Counter - MVC Pattern",
            window_size: [400.0, 300.0],
            heading: "Click Counter",
            click_label: "➕ Click",
            reset_label: "🔄 Reset",
            help_text: "Press 'Click' to increment | 'Reset' to set to zero",
            heading_size: 18.0,
            readout_size: 56.0,
            button_text_size: 13.0,
            help_text_size: 10.0,
            button_size: [110.0, 30.0],
            button_gap: 20.0,
            outer_padding: 20,
            display_border_width: 2.0,
        }
    }
}

pub fn visuals_for_counter() -> egui::Visuals {
    let mut visuals = egui::Visuals::light();
    visuals.selection.bg_fill = ACTIVE_COUNT_COLOR;
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, ACTIVE_COUNT_COLOR);
    visuals
}

pub fn apply_counter_style(ctx: &egui::Context) {
    ctx.set_visuals(visuals_for_counter());
}
