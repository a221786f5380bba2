use egui::{RichText, Sense, Stroke, Vec2};

use super::palette::SlotVisual;
use crate::models::slot::SlotStatus;
use crate::ui_egui::theme::CalendarTheme;

const SWATCH_SIZE: Vec2 = Vec2::new(14.0, 14.0);

/// Colour key for every slot status, in precedence order with "Available" last
pub fn render_legend(ui: &mut egui::Ui, theme: &CalendarTheme) {
    ui.horizontal_wrapped(|ui| {
        for status in SlotStatus::ALL {
            let visual = SlotVisual::for_status(status, theme);
            let (rect, _) = ui.allocate_exact_size(SWATCH_SIZE, Sense::hover());
            ui.painter()
                .rect_filled(rect, egui::Rounding::same(3.0), visual.fill);
            ui.painter().rect_stroke(
                rect,
                egui::Rounding::same(3.0),
                Stroke::new(1.0, visual.accent),
            );
            ui.label(
                RichText::new(status.label())
                    .size(12.0)
                    .color(theme.text_secondary),
            );
            ui.add_space(10.0);
        }
    });
}
