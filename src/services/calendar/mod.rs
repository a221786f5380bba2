//! Calendar event projector.
//!
//! Turns resolved days into discrete 15-minute events for the day and week
//! views. Only non-available slots become events, so events never overlap.

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime};

use crate::models::provider::Provider;
use crate::models::slot::{SlotStatus, SLOT_MINUTES};
use crate::services::palette::{status_colors, StatusColors};
use crate::services::resolver::{resolve_provider_day, ResolvedDay};
use crate::utils::date::week_dates;

/// A visible, time-boxed slot in the calendar views
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub status: SlotStatus,
    pub reason: Option<String>,
}

/// How an event should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventVisual {
    pub colors: StatusColors,
    /// Multi-line text; otherwise a single truncated line
    pub wrap_text: bool,
}

impl CalendarEvent {
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Start interpreted in the host's local time zone
    pub fn start_local(&self) -> Option<DateTime<Local>> {
        self.start.and_local_timezone(Local).earliest()
    }

    pub fn visual(&self) -> EventVisual {
        EventVisual {
            colors: status_colors(self.status),
            wrap_text: self.status == SlotStatus::Blocked,
        }
    }

    pub fn title(&self) -> &'static str {
        self.status.label()
    }

    /// Text shown inside the event box
    pub fn body(&self) -> String {
        match (&self.status, self.reason.as_deref()) {
            (SlotStatus::Blocked, Some(reason)) => format!("{}: {}", self.title(), reason),
            _ => self.title().to_string(),
        }
    }

    pub fn tooltip(&self) -> String {
        let mut lines = vec![
            self.title().to_string(),
            format!(
                "{} - {} ({})",
                self.start.format("%H:%M"),
                self.end.format("%H:%M"),
                self.start.format("%A, %B %d")
            ),
        ];
        if let Some(reason) = self.reason.as_deref() {
            lines.push(format!("Reason: {}", reason));
        }
        lines.join("\n")
    }
}

/// Day or week calendar window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalendarViewKind {
    Day,
    #[default]
    Week,
}

impl CalendarViewKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "Day" => CalendarViewKind::Day,
            _ => CalendarViewKind::Week,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CalendarViewKind::Day => "Day",
            CalendarViewKind::Week => "Week",
        }
    }

    /// Dates to project for a window anchored on `anchor`
    pub fn dates(&self, anchor: NaiveDate, first_day_of_week: u8) -> Vec<NaiveDate> {
        match self {
            CalendarViewKind::Day => vec![anchor],
            CalendarViewKind::Week => week_dates(anchor, first_day_of_week),
        }
    }

    /// Number of days navigation moves by
    pub fn step_days(&self) -> i64 {
        match self {
            CalendarViewKind::Day => 1,
            CalendarViewKind::Week => 7,
        }
    }
}

/// Events for one resolved day, ascending by start time
pub fn project_day_events(date: NaiveDate, day: &ResolvedDay) -> Vec<CalendarEvent> {
    day.claimed()
        .map(|slot| {
            let start = date.and_time(slot.time.to_naive_time());
            CalendarEvent {
                start,
                end: start + Duration::minutes(SLOT_MINUTES as i64),
                status: slot.status,
                reason: slot.reason.clone(),
            }
        })
        .collect()
}

/// Events for a provider across `dates`, in the order the dates are given
pub fn project_events(provider: &Provider, dates: &[NaiveDate]) -> Vec<CalendarEvent> {
    let events: Vec<CalendarEvent> = dates
        .iter()
        .flat_map(|date| project_day_events(*date, &resolve_provider_day(provider, *date)))
        .collect();

    log::debug!(
        "Projected {} calendar events for provider {} over {} day(s)",
        events.len(),
        provider.id,
        dates.len()
    );
    events
}
