use super::state::CalendarWindowState;
use super::ProviderCalendarApp;
use crate::services::calendar::CalendarViewKind;
use chrono::{Local, NaiveDate};

impl ProviderCalendarApp {
    pub(super) fn navigate_previous_week(&mut self) {
        self.date_strip.previous_week();
    }

    pub(super) fn navigate_next_week(&mut self) {
        self.date_strip.next_week();
    }

    pub(super) fn select_date(&mut self, date: NaiveDate) {
        if !self.date_strip.dates().contains(&date) {
            self.date_strip.jump_to(date);
        }
        self.date_strip.selected_date = date;
    }

    pub(super) fn jump_to_today(&mut self) {
        self.select_date(Local::now().date_naive());
    }

    /// Open (or retarget) the calendar window on the selected date
    pub(super) fn open_calendar(&mut self, provider_id: u64) {
        let view = CalendarViewKind::from_name(&self.settings.default_view);
        log::debug!(
            "Opening {} calendar for provider {}",
            view.name(),
            provider_id
        );
        self.calendar = Some(CalendarWindowState::new(
            provider_id,
            self.date_strip.selected_date,
            view,
        ));
    }
}
