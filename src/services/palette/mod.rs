//! Status colour table.
//!
//! Every surface that draws a slot (card grid cells, calendar events, the
//! legend) reads its colours from here, keyed by the closed [`SlotStatus`] enum.

use egui::Color32;

use crate::models::slot::SlotStatus;

/// Foreground colour of a status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    White,
    /// The active theme's primary text colour
    Theme,
}

impl TextColor {
    pub fn resolve(&self, theme_text: Color32) -> Color32 {
        match self {
            TextColor::White => Color32::WHITE,
            TextColor::Theme => theme_text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusColors {
    pub fill: Color32,
    pub accent: Color32,
    pub text: TextColor,
}

const fn colors(fill: Color32, accent: Color32, text: TextColor) -> StatusColors {
    StatusColors { fill, accent, text }
}

pub fn status_colors(status: SlotStatus) -> StatusColors {
    match status {
        SlotStatus::Online => colors(
            Color32::from_rgb(0x28, 0xA7, 0x45),
            Color32::from_rgb(0x1E, 0x7E, 0x34),
            TextColor::White,
        ),
        SlotStatus::Offline => colors(
            Color32::from_rgb(0xFF, 0x98, 0x00),
            Color32::from_rgb(0xE6, 0x51, 0x00),
            TextColor::White,
        ),
        SlotStatus::Both => colors(
            Color32::from_rgb(0x21, 0x96, 0xF3),
            Color32::from_rgb(0x15, 0x65, 0xC0),
            TextColor::White,
        ),
        SlotStatus::OnlineBooked => colors(
            Color32::from_rgb(0x00, 0x7B, 0xFF),
            Color32::from_rgb(0x00, 0x56, 0xB3),
            TextColor::White,
        ),
        SlotStatus::OfflineBooked => colors(
            Color32::from_rgb(0x67, 0x3A, 0xB7),
            Color32::from_rgb(0x45, 0x27, 0xA0),
            TextColor::White,
        ),
        SlotStatus::Blocked => colors(
            Color32::from_rgb(0x79, 0x55, 0x48),
            Color32::from_rgb(0x4E, 0x34, 0x2E),
            TextColor::White,
        ),
        SlotStatus::Available => colors(
            Color32::from_rgb(0xF0, 0xF0, 0xF0),
            Color32::from_rgb(0xDD, 0xDD, 0xDD),
            TextColor::Theme,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn color_to_hex(color: Color32) -> String {
        format!("#{:02X}{:02X}{:02X}", color.r(), color.g(), color.b())
    }

    #[test]
    fn test_table_values() {
        let online = status_colors(SlotStatus::Online);
        assert_eq!(color_to_hex(online.fill), "#28A745");
        assert_eq!(color_to_hex(online.accent), "#1E7E34");
        assert_eq!(color_to_hex(status_colors(SlotStatus::Blocked).fill), "#795548");
        assert_eq!(color_to_hex(status_colors(SlotStatus::Available).fill), "#F0F0F0");
    }

    #[test]
    fn test_fills_are_distinct() {
        let fills: HashSet<String> = SlotStatus::ALL
            .iter()
            .map(|s| color_to_hex(status_colors(*s).fill))
            .collect();
        assert_eq!(fills.len(), SlotStatus::ALL.len());
    }

    #[test]
    fn test_only_available_uses_theme_text() {
        for status in SlotStatus::ALL {
            let expected = if status.is_available() {
                TextColor::Theme
            } else {
                TextColor::White
            };
            assert_eq!(status_colors(status).text, expected, "{status}");
        }
    }

    #[test]
    fn test_text_color_resolve() {
        let theme_text = Color32::from_rgb(0x33, 0x33, 0x33);
        assert_eq!(TextColor::Theme.resolve(theme_text), theme_text);
        assert_eq!(TextColor::White.resolve(theme_text), Color32::WHITE);
    }
}
