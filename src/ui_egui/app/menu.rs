use super::ProviderCalendarApp;
use crate::models::settings::VALID_VIEWS;
use egui::{Context, RichText};

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

impl ProviderCalendarApp {
    pub(super) fn render_menu_bar(&mut self, ctx: &Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                self.render_file_menu(ui);
                self.render_view_menu(ui, ctx);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let toggle = if self.active_theme.is_dark {
                        "☀ Light"
                    } else {
                        "🌙 Dark"
                    };
                    if ui
                        .add_enabled(!self.settings.use_system_theme, egui::Button::new(toggle))
                        .clicked()
                    {
                        self.toggle_theme(ctx);
                    }
                    ui.label(
                        RichText::new(&self.data_source_label)
                            .small()
                            .color(self.active_theme.text_secondary),
                    );
                    if let Some(error) = &self.load_error {
                        ui.colored_label(egui::Color32::from_rgb(0xD3, 0x2F, 0x2F), error.as_str());
                    }
                });
            });
        });
    }

    fn render_file_menu(&mut self, ui: &mut egui::Ui) {
        ui.menu_button("File", |ui| {
            if ui.button("📂 Open Provider Data...").clicked() {
                ui.close_menu();
                self.open_data_file_dialog();
            }
            if ui.button("Use Sample Data").clicked() {
                ui.close_menu();
                self.use_bundled_data();
            }
        });
    }

    fn render_view_menu(&mut self, ui: &mut egui::Ui, ctx: &Context) {
        ui.menu_button("View", |ui| {
            if ui
                .checkbox(&mut self.settings.use_system_theme, "Follow system theme")
                .changed()
            {
                self.apply_theme(ctx);
                self.save_settings();
            }

            ui.separator();
            ui.menu_button("Week starts on", |ui| {
                for (index, name) in WEEKDAY_NAMES.iter().enumerate() {
                    if ui
                        .selectable_value(&mut self.settings.first_day_of_week, index as u8, *name)
                        .clicked()
                    {
                        self.save_settings();
                        ui.close_menu();
                    }
                }
            });
            ui.menu_button("Calendar opens in", |ui| {
                for view in VALID_VIEWS {
                    if ui
                        .selectable_value(&mut self.settings.default_view, view.to_string(), view)
                        .clicked()
                    {
                        self.save_settings();
                        ui.close_menu();
                    }
                }
            });

            ui.separator();
            if ui.button("Go to Today").clicked() {
                self.jump_to_today();
                ui.close_menu();
            }
            if ui.button("Reset Settings").clicked() {
                self.reset_settings(ctx);
                ui.close_menu();
            }
        });
    }

    fn toggle_theme(&mut self, ctx: &Context) {
        self.settings.theme = if self.settings.is_dark_theme() {
            "light".to_string()
        } else {
            "dark".to_string()
        };
        log::info!("Switched to {} theme", self.settings.theme);
        self.apply_theme(ctx);
        self.save_settings();
    }
}
