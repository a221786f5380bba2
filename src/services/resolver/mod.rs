//! Slot resolver.
//!
//! Merges the six category lists of one availability record into a single
//! canonical status per quarter-hour of the display window. Categories are
//! applied in [`SlotCategory::PRECEDENCE`] order and a later category simply
//! overwrites an earlier one, so `blocked` wins every tie and the booked
//! statuses win over the open ones. Both projectors consume this output;
//! neither re-implements the merge.

use chrono::NaiveDate;

use crate::models::availability::Availability;
use crate::models::provider::Provider;
use crate::models::slot::{SlotCategory, SlotStatus, SlotTime, WINDOW_SLOT_COUNT};

/// A display-window slot paired with its canonical status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSlot {
    pub time: SlotTime,
    pub status: SlotStatus,
    /// Only ever set when `status` is [`SlotStatus::Blocked`]
    pub reason: Option<String>,
}

impl ResolvedSlot {
    fn available(time: SlotTime) -> Self {
        Self {
            time,
            status: SlotStatus::Available,
            reason: None,
        }
    }
}

/// Canonical statuses for every slot of one day's display window.
///
/// Always holds exactly [`WINDOW_SLOT_COUNT`] entries in ascending time order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDay {
    slots: Vec<ResolvedSlot>,
}

impl ResolvedDay {
    /// A day on which nothing is claimed
    pub fn empty() -> Self {
        Self {
            slots: SlotTime::window().map(ResolvedSlot::available).collect(),
        }
    }

    /// The resolved slot for `time`, or `None` when `time` lies outside the window
    pub fn slot_at(&self, time: SlotTime) -> Option<&ResolvedSlot> {
        time.window_index().and_then(|index| self.slots.get(index))
    }

    /// Status at `time`; anything outside the window reads as available
    pub fn status_at(&self, time: SlotTime) -> SlotStatus {
        self.slot_at(time)
            .map(|slot| slot.status)
            .unwrap_or(SlotStatus::Available)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResolvedSlot> {
        self.slots.iter()
    }

    /// Slots whose status is anything but available, in time order
    pub fn claimed(&self) -> impl Iterator<Item = &ResolvedSlot> {
        self.slots.iter().filter(|slot| !slot.status.is_available())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn claim(&mut self, index: usize, status: SlotStatus, reason: Option<&str>) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.status = status;
            slot.reason = match status {
                SlotStatus::Blocked => reason.map(str::to_string),
                _ => None,
            };
        }
    }
}

impl Default for ResolvedDay {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a> IntoIterator for &'a ResolvedDay {
    type Item = &'a ResolvedSlot;
    type IntoIter = std::slice::Iter<'a, ResolvedSlot>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Resolve one availability record into canonical per-slot statuses.
///
/// `None` stands for "no record for this date" and yields a fully available
/// day. Slot strings that are malformed or fall outside 08:00-23:45 are
/// skipped; they never produce an error.
pub fn resolve_day(availability: Option<&Availability>) -> ResolvedDay {
    let mut day = ResolvedDay::empty();
    let Some(availability) = availability else {
        return day;
    };

    for category in SlotCategory::PRECEDENCE {
        let status = category.status();
        for (raw, reason) in availability.claims(category) {
            match SlotTime::parse(raw).and_then(|time| time.window_index()) {
                Some(index) => day.claim(index, status, reason),
                None => log::trace!(
                    "Ignoring slot '{}' in {} for {}",
                    raw,
                    category.field_name(),
                    availability.date
                ),
            }
        }
    }

    debug_assert_eq!(day.len(), WINDOW_SLOT_COUNT);
    day
}

/// Resolve the record a provider publishes for `date`
pub fn resolve_provider_day(provider: &Provider, date: NaiveDate) -> ResolvedDay {
    resolve_day(provider.availability_for(date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 24).unwrap()
    }

    fn at(text: &str) -> SlotTime {
        SlotTime::parse(text).unwrap()
    }

    #[test]
    fn test_no_record_is_all_available() {
        let day = resolve_day(None);
        assert_eq!(day.len(), WINDOW_SLOT_COUNT);
        assert_eq!(day.claimed().count(), 0);
    }

    #[test]
    fn test_blocked_overrides_online() {
        let availability = Availability::new(date())
            .with_slots(SlotCategory::Online, &["09:00"])
            .with_blocked("09:00", Some("maintenance"));

        let day = resolve_day(Some(&availability));
        let slot = day.slot_at(at("09:00")).unwrap();
        assert_eq!(slot.status, SlotStatus::Blocked);
        assert_eq!(slot.reason.as_deref(), Some("maintenance"));
    }

    #[test]
    fn test_single_offline_booked_slot() {
        let availability =
            Availability::new(date()).with_slots(SlotCategory::OfflineBooked, &["14:30"]);

        let day = resolve_day(Some(&availability));
        assert_eq!(day.status_at(at("14:30")), SlotStatus::OfflineBooked);
        let claimed: Vec<_> = day.claimed().map(|s| s.time.to_string()).collect();
        assert_eq!(claimed, vec!["14:30"]);
    }

    #[test_case(SlotCategory::Online, SlotCategory::Offline, SlotStatus::Offline ; "offline over online")]
    #[test_case(SlotCategory::Offline, SlotCategory::Both, SlotStatus::Both ; "both over offline")]
    #[test_case(SlotCategory::Both, SlotCategory::Online, SlotStatus::Both ; "list order does not matter")]
    #[test_case(SlotCategory::OnlineBooked, SlotCategory::Online, SlotStatus::OnlineBooked ; "booked over open")]
    #[test_case(SlotCategory::OnlineBooked, SlotCategory::OfflineBooked, SlotStatus::OfflineBooked ; "offline booked last")]
    #[test_case(SlotCategory::Blocked, SlotCategory::OfflineBooked, SlotStatus::Blocked ; "blocked over booked")]
    fn test_precedence_pairs(first: SlotCategory, second: SlotCategory, expected: SlotStatus) {
        let availability = Availability::new(date())
            .with_slots(first, &["10:00"])
            .with_slots(second, &["10:00"]);

        let day = resolve_day(Some(&availability));
        assert_eq!(day.status_at(at("10:00")), expected);
    }

    #[test]
    fn test_reason_dropped_when_not_blocked() {
        let availability = Availability::new(date())
            .with_slots(SlotCategory::Online, &["11:00"])
            .with_blocked("11:15", None);

        let day = resolve_day(Some(&availability));
        assert_eq!(day.slot_at(at("11:00")).unwrap().reason, None);
        assert_eq!(day.slot_at(at("11:15")).unwrap().reason, None);
        assert_eq!(day.status_at(at("11:15")), SlotStatus::Blocked);
    }

    #[test]
    fn test_malformed_and_out_of_window_ignored() {
        let availability = Availability::new(date()).with_slots(
            SlotCategory::Online,
            &["07:45", "banana", "09:07", "24:00", "", "12:00"],
        );

        let day = resolve_day(Some(&availability));
        let claimed: Vec<_> = day.claimed().map(|s| s.time.to_string()).collect();
        assert_eq!(claimed, vec!["12:00"]);
        assert_eq!(day.status_at(at("07:45")), SlotStatus::Available);
        assert!(day.slot_at(at("07:45")).is_none());
    }

    #[test]
    fn test_duplicate_within_category_is_harmless() {
        let availability = Availability::new(date())
            .with_slots(SlotCategory::Both, &["16:00", "16:00", "16:0"]);

        let day = resolve_day(Some(&availability));
        assert_eq!(day.claimed().count(), 1);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let availability = Availability::new(date())
            .with_slots(SlotCategory::Online, &["08:00", "08:15"])
            .with_slots(SlotCategory::Offline, &["08:15"])
            .with_blocked("23:45", Some("close"));

        assert_eq!(resolve_day(Some(&availability)), resolve_day(Some(&availability)));
    }
}
