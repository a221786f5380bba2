//! Provider card with the paged quarter-hour grid.

use chrono::NaiveDate;
use egui::{Align2, Color32, FontId, RichText, Sense, Stroke, Vec2};

use super::palette::{CardPalette, SlotVisual};
use crate::models::provider::Provider;
use crate::services::grid::{project_grid, GridCell, GridPager, SlotGrid};
use crate::services::resolver::resolve_provider_day;
use crate::ui_egui::theme::CalendarTheme;

const CELL_SIZE: Vec2 = Vec2::new(56.0, 26.0);
const CELL_SPACING: f32 = 4.0;
const NAV_BUTTON_SIZE: Vec2 = Vec2::new(24.0, 120.0);
const AVATAR_RADIUS: f32 = 22.0;
const INFO_WIDTH: f32 = 220.0;

/// What the user asked for while the card was drawn
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CardAction {
    pub open_calendar: bool,
}

/// Draw one provider card for `date`, paging with `pager`
pub fn render_provider_card(
    ui: &mut egui::Ui,
    provider: &Provider,
    date: NaiveDate,
    pager: &mut GridPager,
    theme: &CalendarTheme,
) -> CardAction {
    let palette = CardPalette::from_theme(theme);
    let grid = project_grid(&resolve_provider_day(provider, date));
    let mut action = CardAction::default();

    egui::Frame::none()
        .fill(palette.card_bg)
        .stroke(Stroke::new(1.0, palette.card_border))
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.allocate_ui(Vec2::new(INFO_WIDTH, NAV_BUTTON_SIZE.y), |ui| {
                    if render_provider_info(ui, provider, &palette, booked_count(&grid)) {
                        action.open_calendar = true;
                    }
                });
                ui.separator();
                render_grid_pager(ui, &grid, pager, &palette, theme);
            });
        });

    action
}

/// Avatar, name, clinic and the calendar link. Returns true when the link is clicked.
fn render_provider_info(
    ui: &mut egui::Ui,
    provider: &Provider,
    palette: &CardPalette,
    booked: usize,
) -> bool {
    let mut clicked = false;
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(Vec2::splat(AVATAR_RADIUS * 2.0), Sense::hover());
        ui.painter()
            .circle_filled(rect.center(), AVATAR_RADIUS, palette.nav_bg);
        ui.painter().text(
            rect.center(),
            Align2::CENTER_CENTER,
            initials(&provider.name),
            FontId::proportional(15.0),
            Color32::WHITE,
        );

        ui.vertical(|ui| {
            ui.label(
                RichText::new(&provider.name)
                    .strong()
                    .size(15.0)
                    .color(palette.name_text),
            );
            ui.label(
                RichText::new(&provider.clinic_details.name)
                    .size(12.0)
                    .color(palette.clinic_text),
            );
            ui.label(
                RichText::new(format!(
                    "{} · {}",
                    provider.provider_usertype,
                    provider.affiliation()
                ))
                .size(11.0)
                .color(palette.clinic_text),
            );
            if booked > 0 {
                ui.label(
                    RichText::new(format!("{} booked", booked))
                        .size(11.0)
                        .color(palette.clinic_text),
                );
            }
            ui.add_space(6.0);
            if ui.link("View Calendar >").clicked() {
                clicked = true;
            }
        });
    });
    clicked
}

fn render_grid_pager(
    ui: &mut egui::Ui,
    grid: &SlotGrid,
    pager: &mut GridPager,
    palette: &CardPalette,
    theme: &CalendarTheme,
) {
    let total = grid.total_columns();

    ui.vertical(|ui| {
        ui.label(
            RichText::new(pager.page_label(grid))
                .size(11.0)
                .color(palette.clinic_text),
        );
        ui.horizontal(|ui| {
            if nav_button(ui, "◀", pager.can_retreat(), palette)
                .on_hover_text("Earlier hours")
                .clicked()
            {
                pager.retreat();
            }

            for column in pager.page(grid) {
                ui.vertical(|ui| {
                    ui.spacing_mut().item_spacing.y = CELL_SPACING;
                    ui.label(
                        RichText::new(format!("{:02}:00", column.hour))
                            .size(11.0)
                            .strong()
                            .color(palette.name_text),
                    );
                    for cell in &column.cells {
                        render_cell(ui, cell, theme);
                    }
                });
            }

            if nav_button(ui, "▶", pager.can_advance(total), palette)
                .on_hover_text("Later hours")
                .clicked()
            {
                pager.advance(total);
            }
        });
    });
}

fn nav_button(ui: &mut egui::Ui, label: &str, enabled: bool, palette: &CardPalette) -> egui::Response {
    let fill = if enabled {
        palette.nav_bg
    } else {
        palette.nav_disabled_bg
    };
    let button = egui::Button::new(RichText::new(label).color(Color32::WHITE))
        .fill(fill)
        .min_size(NAV_BUTTON_SIZE);
    ui.add_enabled(enabled, button)
}

fn render_cell(ui: &mut egui::Ui, cell: &GridCell, theme: &CalendarTheme) {
    let visual = SlotVisual::for_status(cell.status, theme);
    let (rect, response) = ui.allocate_exact_size(CELL_SIZE, Sense::hover());
    let painter = ui.painter();

    painter.rect_filled(rect, egui::Rounding::same(4.0), visual.fill);
    painter.rect_stroke(rect, egui::Rounding::same(4.0), Stroke::new(1.0, visual.accent));
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        cell.time.to_string(),
        FontId::proportional(11.0),
        visual.text,
    );

    response.on_hover_text(cell_tooltip(cell));
}

fn cell_tooltip(cell: &GridCell) -> String {
    match cell.reason.as_deref() {
        Some(reason) => format!("{} {}\nReason: {}", cell.time, cell.status.label(), reason),
        None => format!("{} {}", cell.time, cell.status.label()),
    }
}

fn booked_count(grid: &SlotGrid) -> usize {
    grid.cells().filter(|cell| cell.status.is_booked()).count()
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter(|word| !word.ends_with('.'))
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}
