//! Theme module for the egui provider calendar
//!
//! Defines the CalendarTheme structure used by panels, cards and the
//! calendar window, and how the active theme is chosen from settings.

use egui::Color32;

use crate::models::settings::Settings;

/// Colors used by the application chrome. Slot colors live in the status
/// palette; only the neutral "available" text follows the theme.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Side panel and card background color
    pub panel_background: Color32,

    /// Calendar grid background color
    pub calendar_background: Color32,

    /// Cell and card border color
    pub border: Color32,

    /// Accent for selected dates and navigation buttons
    pub primary: Color32,

    /// Primary text color (headings, names, available slots)
    pub text_primary: Color32,

    /// Secondary text color (clinic names, legend, hour labels)
    pub text_secondary: Color32,
}

impl CalendarTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(0xF5, 0xF7, 0xFA),
            panel_background: Color32::from_rgb(0xFF, 0xFF, 0xFF),
            calendar_background: Color32::from_rgb(0xF9, 0xF9, 0xF9),
            border: Color32::from_rgb(0xE0, 0xE0, 0xE0),
            primary: Color32::from_rgb(0x5B, 0x6E, 0xF5),
            text_primary: Color32::from_rgb(0x33, 0x33, 0x33),
            text_secondary: Color32::from_rgb(0x66, 0x66, 0x66),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(0x1A, 0x1A, 0x1A),
            panel_background: Color32::from_rgb(0x2D, 0x2D, 0x2D),
            calendar_background: Color32::from_rgb(0x25, 0x25, 0x25),
            border: Color32::from_rgb(0x44, 0x44, 0x44),
            primary: Color32::from_rgb(0x7C, 0x8D, 0xF5),
            text_primary: Color32::from_rgb(0xF0, 0xF0, 0xF0),
            text_secondary: Color32::from_rgb(0xAA, 0xAA, 0xAA),
        }
    }

    /// Theme selected by the settings, consulting the OS when requested
    pub fn from_settings(settings: &Settings) -> Self {
        let dark = if settings.use_system_theme {
            match dark_light::detect() {
                dark_light::Mode::Dark => true,
                dark_light::Mode::Light => false,
                dark_light::Mode::Default => settings.is_dark_theme(),
            }
        } else {
            settings.is_dark_theme()
        };

        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.panel_background;
        visuals.panel_fill = self.app_background;
        visuals.widgets.noninteractive.bg_stroke.color = self.border;
        visuals.selection.bg_fill = self.primary;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}
