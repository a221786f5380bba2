use super::state::{DateStripState, PagerState};
use super::ProviderCalendarApp;
use crate::services::directory::{FilterOptions, ProviderDirectory};
use crate::services::settings::{load_settings_or_default, SettingsService};
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::date_strip;
use chrono::{Local, NaiveDate};
use std::path::{Path, PathBuf};

const BUNDLED_LABEL: &str = "Sample data";

impl ProviderCalendarApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings_service = SettingsService::from_project_dirs();
        let settings = match settings_service.as_ref() {
            Some(service) => {
                log::debug!("Settings file: {}", service.path().display());
                load_settings_or_default(service)
            }
            None => {
                log::warn!("No config directory available; settings will not be saved");
                Default::default()
            }
        };
        log::info!(
            "Loaded settings: theme={}, first_day_of_week={}, default_view={}",
            settings.theme,
            settings.first_day_of_week,
            settings.default_view
        );

        let (directory, data_source_label, load_error) =
            load_startup_directory(settings.data_file.as_deref());
        let today = Local::now().date_naive();

        let mut app = Self {
            filter_options: FilterOptions::from_providers(directory.providers()),
            date_strip: DateStripState::new(initial_date(&directory, today)),
            settings,
            settings_service,
            directory,
            data_source_label,
            filter: Default::default(),
            pagers: PagerState::default(),
            calendar: None,
            active_theme: CalendarTheme::light(),
            load_error,
        };

        app.apply_theme(&cc.egui_ctx);
        app
    }

    pub(super) fn apply_theme(&mut self, ctx: &egui::Context) {
        let theme = CalendarTheme::from_settings(&self.settings);
        theme.apply_to_context(ctx);
        self.active_theme = theme;
    }

    pub(super) fn save_settings(&self) {
        let Some(service) = self.settings_service.as_ref() else {
            return;
        };
        if let Err(err) = service.update(&self.settings) {
            log::error!("Failed to save settings: {:#}", err);
        }
    }

    pub(super) fn reset_settings(&mut self, ctx: &egui::Context) {
        if let Some(service) = self.settings_service.as_ref() {
            if let Err(err) = service.reset() {
                log::error!("Failed to reset settings: {:#}", err);
                return;
            }
        }
        self.settings = Default::default();
        self.apply_theme(ctx);
        self.use_bundled_data();
    }

    /// Ask for a providers JSON file and load it
    pub(super) fn open_data_file_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .set_title("Open Provider Data")
            .add_filter("JSON files", &["json"])
            .pick_file()
        {
            self.open_data_file(path);
        }
    }

    pub(super) fn open_data_file(&mut self, path: PathBuf) {
        match ProviderDirectory::from_path(&path) {
            Ok(directory) => {
                self.replace_directory(directory, path.display().to_string());
                self.settings.data_file = Some(path);
                self.save_settings();
            }
            Err(err) => {
                log::error!("{}", err);
                self.load_error = Some(err.to_string());
            }
        }
    }

    pub(super) fn use_bundled_data(&mut self) {
        match ProviderDirectory::bundled() {
            Ok(directory) => {
                self.replace_directory(directory, BUNDLED_LABEL.to_string());
                if self.settings.data_file.take().is_some() {
                    self.save_settings();
                }
            }
            Err(err) => {
                log::error!("Bundled provider data is invalid: {}", err);
                self.load_error = Some(err.to_string());
            }
        }
    }

    fn replace_directory(&mut self, directory: ProviderDirectory, label: String) {
        self.filter_options = FilterOptions::from_providers(directory.providers());
        self.filter.clear();
        self.pagers.reset();
        self.calendar = None;
        self.date_strip = DateStripState::new(initial_date(&directory, Local::now().date_naive()));
        self.directory = directory;
        self.data_source_label = label;
        self.load_error = None;
    }
}

/// Configured data file, falling back to the bundled sample
fn load_startup_directory(data_file: Option<&Path>) -> (ProviderDirectory, String, Option<String>) {
    let mut load_error = None;

    if let Some(path) = data_file {
        match ProviderDirectory::from_path(path) {
            Ok(directory) => return (directory, path.display().to_string(), None),
            Err(err) => {
                log::warn!("{}. Falling back to sample data.", err);
                load_error = Some(err.to_string());
            }
        }
    }

    match ProviderDirectory::bundled() {
        Ok(directory) => {
            log::info!("Loaded {} sample providers", directory.len());
            (directory, BUNDLED_LABEL.to_string(), load_error)
        }
        Err(err) => {
            log::error!("Bundled provider data is invalid: {}", err);
            (ProviderDirectory::default(), String::new(), Some(err.to_string()))
        }
    }
}

/// Today, unless nothing is published in the coming week; then the first
/// published date so the strip does not open on empty cards.
fn initial_date(directory: &ProviderDirectory, today: NaiveDate) -> NaiveDate {
    if directory.has_records_within(&date_strip(today, 0)) {
        return today;
    }
    directory.earliest_date().unwrap_or(today)
}
