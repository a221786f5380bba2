// Slot module
// Quarter-hour time-of-day units, slot categories and canonical statuses

use serde::{Deserialize, Serialize};
use std::fmt;

/// First hour shown by every view (inclusive)
pub const DISPLAY_START_HOUR: u32 = 8;
/// End of the display window (exclusive), i.e. the last unit starts at 23:45
pub const DISPLAY_END_HOUR: u32 = 24;
/// Fixed size of a slot in minutes
pub const SLOT_MINUTES: u32 = 15;
pub const SLOTS_PER_HOUR: usize = 4;
/// Number of slots between 08:00 and 24:00
pub const WINDOW_SLOT_COUNT: usize =
    (DISPLAY_END_HOUR - DISPLAY_START_HOUR) as usize * SLOTS_PER_HOUR;

/// A quarter-hour aligned time of day, identified by its starting minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotTime {
    hour: u32,
    minute: u32,
}

impl SlotTime {
    /// Build a slot time from components.
    ///
    /// Returns `None` unless `hour < 24` and `minute` is one of 0, 15, 30, 45.
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        if hour >= 24 || minute >= 60 || minute % SLOT_MINUTES != 0 {
            return None;
        }
        Some(Self { hour, minute })
    }

    /// Parse an `HH:MM` string as found in availability records.
    ///
    /// Malformed text, wrong granularity and out-of-range components all
    /// yield `None`; callers treat that as "claims nothing".
    ///
    /// # Examples
    /// ```
    /// use provider_calendar::models::slot::SlotTime;
    ///
    /// assert_eq!(SlotTime::parse("09:15"), SlotTime::new(9, 15));
    /// assert_eq!(SlotTime::parse("9:15"), SlotTime::new(9, 15));
    /// assert!(SlotTime::parse("09:10").is_none());
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        let (hour, minute) = text.trim().split_once(':')?;
        if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
            return None;
        }
        if !hour.bytes().chain(minute.bytes()).all(|b| b.is_ascii_digit()) {
            return None;
        }
        Self::new(hour.parse().ok()?, minute.parse().ok()?)
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Quarter within the hour (0 for :00 through 3 for :45)
    pub fn quarter(&self) -> usize {
        (self.minute / SLOT_MINUTES) as usize
    }

    /// Position of this slot inside the display window, if it is visible at all.
    pub fn window_index(&self) -> Option<usize> {
        if self.hour < DISPLAY_START_HOUR || self.hour >= DISPLAY_END_HOUR {
            return None;
        }
        Some((self.hour - DISPLAY_START_HOUR) as usize * SLOTS_PER_HOUR + self.quarter())
    }

    /// Inverse of [`SlotTime::window_index`].
    pub fn from_window_index(index: usize) -> Option<Self> {
        if index >= WINDOW_SLOT_COUNT {
            return None;
        }
        let hour = DISPLAY_START_HOUR + (index / SLOTS_PER_HOUR) as u32;
        let minute = (index % SLOTS_PER_HOUR) as u32 * SLOT_MINUTES;
        Self::new(hour, minute)
    }

    /// Every slot of the display window in ascending order (08:00 .. 23:45).
    pub fn window() -> impl Iterator<Item = SlotTime> {
        (0..WINDOW_SLOT_COUNT).filter_map(Self::from_window_index)
    }

    pub fn to_naive_time(&self) -> chrono::NaiveTime {
        chrono::NaiveTime::from_hms_opt(self.hour, self.minute, 0)
            .unwrap_or(chrono::NaiveTime::MIN)
    }
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Canonical status of a slot after all categories have been merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlotStatus {
    Online,
    Offline,
    Both,
    OnlineBooked,
    OfflineBooked,
    Blocked,
    #[default]
    Available,
}

impl SlotStatus {
    /// Every status, legend order
    pub const ALL: [SlotStatus; 7] = [
        SlotStatus::Online,
        SlotStatus::Offline,
        SlotStatus::Both,
        SlotStatus::OnlineBooked,
        SlotStatus::OfflineBooked,
        SlotStatus::Blocked,
        SlotStatus::Available,
    ];

    /// Wire name as used by the data source and style keys
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotStatus::Online => "online",
            SlotStatus::Offline => "offline",
            SlotStatus::Both => "both",
            SlotStatus::OnlineBooked => "online-booked",
            SlotStatus::OfflineBooked => "offline-booked",
            SlotStatus::Blocked => "blocked",
            SlotStatus::Available => "available",
        }
    }

    /// Legend text
    pub fn label(&self) -> &'static str {
        match self {
            SlotStatus::Online => "Online",
            SlotStatus::Offline => "Offline",
            SlotStatus::Both => "Both",
            SlotStatus::OnlineBooked => "Booked Online",
            SlotStatus::OfflineBooked => "Booked Offline",
            SlotStatus::Blocked => "Blocked",
            SlotStatus::Available => "Available",
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, SlotStatus::Available)
    }

    pub fn is_booked(&self) -> bool {
        matches!(self, SlotStatus::OnlineBooked | SlotStatus::OfflineBooked)
    }
}

impl fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the six independently maintained slot lists of an availability record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotCategory {
    Online,
    Offline,
    Both,
    OnlineBooked,
    OfflineBooked,
    Blocked,
}

impl SlotCategory {
    /// Merge order. A later category overwrites an earlier one claiming the same slot.
    pub const PRECEDENCE: [SlotCategory; 6] = [
        SlotCategory::Online,
        SlotCategory::Offline,
        SlotCategory::Both,
        SlotCategory::OnlineBooked,
        SlotCategory::OfflineBooked,
        SlotCategory::Blocked,
    ];

    pub fn status(&self) -> SlotStatus {
        match self {
            SlotCategory::Online => SlotStatus::Online,
            SlotCategory::Offline => SlotStatus::Offline,
            SlotCategory::Both => SlotStatus::Both,
            SlotCategory::OnlineBooked => SlotStatus::OnlineBooked,
            SlotCategory::OfflineBooked => SlotStatus::OfflineBooked,
            SlotCategory::Blocked => SlotStatus::Blocked,
        }
    }

    /// Name of the list in the source JSON
    pub fn field_name(&self) -> &'static str {
        match self {
            SlotCategory::Online => "online_slots",
            SlotCategory::Offline => "offline_slots",
            SlotCategory::Both => "both_slots",
            SlotCategory::OnlineBooked => "online_booked_slots",
            SlotCategory::OfflineBooked => "offline_booked_slots",
            SlotCategory::Blocked => "blocked_slots",
        }
    }
}
