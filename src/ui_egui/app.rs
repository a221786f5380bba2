mod lifecycle;
mod menu;
mod navigation;
mod sidebar;
pub(super) mod state;
mod views;

use self::state::{CalendarWindowState, DateStripState, PagerState};
use crate::models::settings::Settings;
use crate::services::directory::{FilterOptions, ProviderDirectory, ProviderFilter};
use crate::services::settings::SettingsService;
use crate::ui_egui::theme::CalendarTheme;

const MIN_ROOT_WIDTH: f32 = 800.0;
const MIN_ROOT_HEIGHT: f32 = 600.0;

pub struct ProviderCalendarApp {
    /// Persisted preferences
    settings: Settings,
    /// None when the platform has no config directory
    settings_service: Option<SettingsService>,
    directory: ProviderDirectory,
    /// Where `directory` came from, shown in the status line
    data_source_label: String,
    filter: ProviderFilter,
    filter_options: FilterOptions,
    date_strip: DateStripState,
    pagers: PagerState,
    /// Calendar window for the provider whose "View Calendar" link was clicked
    calendar: Option<CalendarWindowState>,
    /// Currently applied theme colors
    active_theme: CalendarTheme,
    /// Last data-file error, shown until the next successful load
    load_error: Option<String>,
}

impl eframe::App for ProviderCalendarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_menu_bar(ctx);
        self.render_sidebar(ctx);
        self.render_main_panel(ctx);
        self.render_calendar_window(ctx);
    }
}

impl ProviderCalendarApp {
    pub fn min_window_size() -> [f32; 2] {
        [MIN_ROOT_WIDTH, MIN_ROOT_HEIGHT]
    }

    fn render_calendar_window(&mut self, ctx: &egui::Context) {
        let Some(state) = self.calendar.as_mut() else {
            return;
        };
        let Some(provider) = self.directory.find(state.provider_id) else {
            log::warn!(
                "Provider {} is no longer loaded, closing its calendar",
                state.provider_id
            );
            self.calendar = None;
            return;
        };

        let still_open = crate::ui_egui::views::render_calendar_window(
            ctx,
            state,
            provider,
            self.settings.first_day_of_week,
            &self.active_theme,
        );
        if !still_open {
            self.calendar = None;
        }
    }
}
