//! Sidebar with the provider search box and dropdown filters.

use super::ProviderCalendarApp;
use crate::models::provider::Affiliation;
use egui::RichText;

const SIDEBAR_MIN_WIDTH: f32 = 200.0;
const SIDEBAR_DEFAULT_WIDTH: f32 = 240.0;
const SIDEBAR_MAX_WIDTH: f32 = 320.0;
const ANY: &str = "All";

impl ProviderCalendarApp {
    pub(super) fn render_sidebar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("filters_sidebar")
            .default_width(SIDEBAR_DEFAULT_WIDTH)
            .min_width(SIDEBAR_MIN_WIDTH)
            .max_width(SIDEBAR_MAX_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                self.render_sidebar_content(ui);
            });
    }

    fn render_sidebar_content(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.label(RichText::new("Search").strong());
        ui.add(
            egui::TextEdit::singleline(&mut self.filter.name_query)
                .hint_text("Provider name")
                .desired_width(f32::INFINITY),
        );

        ui.add_space(12.0);
        ui.label(RichText::new("Filters").strong());
        ui.add_space(4.0);

        string_combo(
            ui,
            "Service",
            "filter_service",
            &mut self.filter.service,
            &self.filter_options.services,
        );
        affiliation_combo(
            ui,
            &mut self.filter.affiliation,
            &self.filter_options.affiliations,
        );
        string_combo(
            ui,
            "Center",
            "filter_center",
            &mut self.filter.center,
            &self.filter_options.centers,
        );

        ui.add_space(8.0);
        if ui
            .add_enabled(self.filter.is_active(), egui::Button::new("Clear All Filters"))
            .clicked()
        {
            self.filter.clear();
        }

        ui.add_space(12.0);
        ui.separator();
        let shown = self.filter.apply(self.directory.providers()).len();
        ui.label(
            RichText::new(format!("{} of {} providers", shown, self.directory.len()))
                .small()
                .weak(),
        );
    }
}

fn string_combo(
    ui: &mut egui::Ui,
    label: &str,
    id: &str,
    selected: &mut Option<String>,
    options: &[String],
) {
    ui.label(label);
    egui::ComboBox::from_id_source(id)
        .width(ui.available_width())
        .selected_text(selected.as_deref().unwrap_or(ANY))
        .show_ui(ui, |ui| {
            ui.selectable_value(selected, None, ANY);
            for option in options {
                ui.selectable_value(selected, Some(option.clone()), option.as_str());
            }
        });
    ui.add_space(4.0);
}

fn affiliation_combo(
    ui: &mut egui::Ui,
    selected: &mut Option<Affiliation>,
    options: &[Affiliation],
) {
    ui.label("Type");
    egui::ComboBox::from_id_source("filter_affiliation")
        .width(ui.available_width())
        .selected_text(selected.map_or(ANY, |a| a.label()))
        .show_ui(ui, |ui| {
            ui.selectable_value(selected, None, ANY);
            for option in options {
                ui.selectable_value(selected, Some(*option), option.label());
            }
        });
    ui.add_space(4.0);
}
