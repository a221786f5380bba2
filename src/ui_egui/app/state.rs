use crate::services::calendar::CalendarViewKind;
use crate::services::grid::GridPager;
use crate::utils::date::{date_strip, DAYS_PER_WEEK};
use chrono::{Duration, NaiveDate};
use std::collections::HashMap;

/// The seven-day strip above the provider cards
pub struct DateStripState {
    /// Date the strip was first anchored on; offset 0 starts here
    pub base_date: NaiveDate,
    pub week_offset: i64,
    pub selected_date: NaiveDate,
}

impl DateStripState {
    pub fn new(base_date: NaiveDate) -> Self {
        Self {
            base_date,
            week_offset: 0,
            selected_date: base_date,
        }
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        date_strip(self.base_date, self.week_offset)
    }

    pub fn previous_week(&mut self) {
        self.week_offset -= 1;
    }

    pub fn next_week(&mut self) {
        self.week_offset += 1;
    }

    /// Select `date` and move the strip so that it is visible
    pub fn jump_to(&mut self, date: NaiveDate) {
        let days = (date - self.base_date).num_days();
        self.week_offset = days.div_euclid(DAYS_PER_WEEK);
        self.selected_date = date;
    }
}

/// Open calendar window for one provider
pub struct CalendarWindowState {
    pub provider_id: u64,
    pub anchor: NaiveDate,
    pub view: CalendarViewKind,
}

impl CalendarWindowState {
    pub fn new(provider_id: u64, anchor: NaiveDate, view: CalendarViewKind) -> Self {
        Self {
            provider_id,
            anchor,
            view,
        }
    }

    pub fn navigate_previous(&mut self) {
        self.anchor -= Duration::days(self.view.step_days());
    }

    pub fn navigate_next(&mut self) {
        self.anchor += Duration::days(self.view.step_days());
    }
}

/// Per-card grid offsets, keyed by provider id
#[derive(Default)]
pub struct PagerState {
    pagers: HashMap<u64, GridPager>,
}

impl PagerState {
    pub fn pager_mut(&mut self, provider_id: u64) -> &mut GridPager {
        self.pagers.entry(provider_id).or_default()
    }

    pub fn reset(&mut self) {
        self.pagers.clear();
    }
}
