//! Central panel: date navigation, the seven-day strip and provider cards.

use super::ProviderCalendarApp;
use crate::ui_egui::views::{render_legend, render_provider_card};
use crate::utils::date::format_date_range;
use chrono::{Local, NaiveDate};
use egui::{RichText, Vec2};

const STRIP_BUTTON_SIZE: Vec2 = Vec2::new(72.0, 44.0);
const CARD_SPACING: f32 = 10.0;

impl ProviderCalendarApp {
    pub(super) fn render_main_panel(&mut self, ctx: &egui::Context) {
        let panel_frame = egui::Frame::central_panel(&ctx.style())
            .outer_margin(egui::Margin::ZERO)
            .inner_margin(egui::Margin::same(12.0));

        egui::CentralPanel::default()
            .frame(panel_frame)
            .show(ctx, |ui| {
                self.render_date_navigation(ui);
                ui.add_space(8.0);
                self.render_date_strip(ui);
                ui.add_space(12.0);
                self.render_schedule_header(ui);
                ui.add_space(8.0);
                render_legend(ui, &self.active_theme);
                ui.add_space(8.0);
                self.render_provider_cards(ui);
            });
    }

    fn render_date_navigation(&mut self, ui: &mut egui::Ui) {
        let dates = self.date_strip.dates();
        ui.horizontal(|ui| {
            if ui.button("◀").on_hover_text("Previous week").clicked() {
                self.navigate_previous_week();
            }
            ui.strong(format_date_range(&dates));
            if ui.button("▶").on_hover_text("Next week").clicked() {
                self.navigate_next_week();
            }

            ui.add_space(12.0);
            let mut picked = self.date_strip.selected_date;
            let response = ui.add(
                egui_extras::DatePickerButton::new(&mut picked)
                    .id_source("strip_date_picker")
                    .calendar_week(false),
            );
            if response.changed() && picked != self.date_strip.selected_date {
                self.select_date(picked);
            }
            if ui.button("Today").clicked() {
                self.jump_to_today();
            }
        });
    }

    fn render_date_strip(&mut self, ui: &mut egui::Ui) {
        let today = Local::now().date_naive();
        let mut clicked: Option<NaiveDate> = None;

        ui.horizontal(|ui| {
            for date in self.date_strip.dates() {
                let selected = date == self.date_strip.selected_date;
                let mut text = RichText::new(date.format("%a\n%-d %b").to_string());
                if date == today {
                    text = text.strong();
                }
                let button = egui::Button::new(text)
                    .selected(selected)
                    .min_size(STRIP_BUTTON_SIZE);
                if ui.add(button).clicked() {
                    clicked = Some(date);
                }
            }
        });

        if let Some(date) = clicked {
            self.select_date(date);
        }
    }

    fn render_schedule_header(&self, ui: &mut egui::Ui) {
        ui.heading(format!(
            "Schedules for {}",
            self.date_strip.selected_date.format("%A, %-d %B %Y")
        ));
        ui.label(
            RichText::new("Showing slots in the 8 am to 12 am window")
                .small()
                .color(self.active_theme.text_secondary),
        );
    }

    fn render_provider_cards(&mut self, ui: &mut egui::Ui) {
        let date = self.date_strip.selected_date;
        let providers = self.filter.apply(self.directory.providers());

        if providers.is_empty() {
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                let message = if self.directory.is_empty() {
                    "No providers loaded"
                } else {
                    "No providers match the current filters"
                };
                ui.label(RichText::new(message).italics());
            });
            return;
        }

        let mut open_calendar_for = None;
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for provider in providers {
                    let pager = self.pagers.pager_mut(provider.id);
                    let action =
                        render_provider_card(ui, provider, date, pager, &self.active_theme);
                    if action.open_calendar {
                        open_calendar_for = Some(provider.id);
                    }
                    ui.add_space(CARD_SPACING);
                }
            });

        if let Some(provider_id) = open_calendar_for {
            self.open_calendar(provider_id);
        }
    }
}
