use crate::models::slot::SlotStatus;
use crate::services::palette::status_colors;
use crate::ui_egui::theme::CalendarTheme;
use egui::Color32;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |c1: u8, c2: u8| -> u8 { ((c1 as f32 * (1.0 - t)) + (c2 as f32 * t)).round() as u8 };
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

/// Resolved colors for one slot cell or event box
#[derive(Clone, Copy)]
pub(crate) struct SlotVisual {
    pub fill: Color32,
    pub accent: Color32,
    pub text: Color32,
}

impl SlotVisual {
    pub fn for_status(status: SlotStatus, theme: &CalendarTheme) -> Self {
        let colors = status_colors(status);
        let (fill, accent) = if status.is_available() && theme.is_dark {
            // Keep the neutral cell readable against dark panels
            (
                blend(theme.panel_background, colors.fill, 0.12),
                theme.border,
            )
        } else {
            (colors.fill, colors.accent)
        };
        Self {
            fill,
            accent,
            text: colors.text.resolve(theme.text_primary),
        }
    }

    /// Faded variant for slots that have already started
    pub fn dimmed(self) -> Self {
        Self {
            fill: with_alpha(self.fill, 150),
            accent: with_alpha(self.accent, 150),
            text: with_alpha(self.text, 200),
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct CardPalette {
    pub card_bg: Color32,
    pub card_border: Color32,
    pub name_text: Color32,
    pub clinic_text: Color32,
    pub nav_bg: Color32,
    pub nav_disabled_bg: Color32,
}

impl CardPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        Self {
            card_bg: theme.panel_background,
            card_border: theme.border,
            name_text: theme.text_primary,
            clinic_text: theme.text_secondary,
            nav_bg: theme.primary,
            nav_disabled_bg: with_alpha(theme.text_secondary, 90),
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct TimeGridPalette {
    pub hour_bg: Color32,
    pub regular_bg: Color32,
    pub hour_line: Color32,
    pub slot_line: Color32,
    pub label_text: Color32,
    pub header_bg: Color32,
}

impl TimeGridPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        Self {
            hour_bg: blend(theme.calendar_background, theme.panel_background, 0.4),
            regular_bg: theme.panel_background,
            hour_line: theme.border,
            slot_line: with_alpha(theme.border, 120),
            label_text: theme.text_secondary,
            header_bg: theme.calendar_background,
        }
    }
}
