// Property-based tests for slot resolution and projection
// Random availability records checked against the merge and paging rules

mod fixtures;

use chrono::Duration;
use proptest::prelude::*;
use provider_calendar::models::availability::Availability;
use provider_calendar::models::slot::{SlotCategory, SlotStatus, SlotTime, WINDOW_SLOT_COUNT};
use provider_calendar::services::calendar::project_events;
use provider_calendar::services::grid::{project_grid, GridPager, PAGE_SIZE, TOTAL_COLUMNS};
use provider_calendar::services::resolver::resolve_day;

/// Any quarter-hour inside the display window, as raw text
fn window_slot() -> impl Strategy<Value = String> {
    (0..WINDOW_SLOT_COUNT).prop_map(|index| {
        SlotTime::from_window_index(index)
            .map(|time| time.to_string())
            .unwrap_or_default()
    })
}

/// Mostly valid slots, with some out-of-window and malformed noise
fn raw_slot() -> impl Strategy<Value = String> {
    prop_oneof![
        6 => window_slot(),
        1 => (0u32..8, prop::sample::select(vec![0u32, 15, 30, 45]))
            .prop_map(|(h, m)| format!("{:02}:{:02}", h, m)),
        1 => "[a-z0-9:]{0,6}",
    ]
}

fn availability() -> impl Strategy<Value = Availability> {
    let list = || prop::collection::vec(raw_slot(), 0..12);
    (
        list(),
        list(),
        list(),
        list(),
        list(),
        prop::collection::vec((raw_slot(), prop::option::of("[a-z ]{0,12}")), 0..6),
    )
        .prop_map(|(online, offline, both, online_booked, offline_booked, blocked)| {
            let mut availability = Availability::new(fixtures::dates::jul_24_2025());
            availability.online_slots = online;
            availability.offline_slots = offline;
            availability.both_slots = both;
            availability.online_booked_slots = online_booked;
            availability.offline_booked_slots = offline_booked;
            for (slot, reason) in blocked {
                availability = availability.with_blocked(&slot, reason.as_deref());
            }
            availability
        })
}

/// The spellings a slot string may use for `time`: "09:00" and "9:00"
fn names_time(raw: &str, time: SlotTime) -> bool {
    let raw = raw.trim();
    raw == format!("{:02}:{:02}", time.hour(), time.minute())
        || raw == format!("{}:{:02}", time.hour(), time.minute())
}

/// Status and reason expected at `time`: the last category in precedence
/// order claiming it, and for blocked slots the last listed reason
fn expected_slot(availability: &Availability, time: SlotTime) -> (SlotStatus, Option<String>) {
    let Some(category) = SlotCategory::PRECEDENCE.iter().rev().find(|category| {
        availability
            .claims(**category)
            .any(|(slot, _)| names_time(slot, time))
    }) else {
        return (SlotStatus::Available, None);
    };

    let reason = availability
        .claims(*category)
        .filter(|(slot, _)| names_time(slot, time))
        .last()
        .and_then(|(_, reason)| reason.map(str::to_string));
    (category.status(), reason)
}

proptest! {
    /// Property: the last claiming category wins, unclaimed slots are available
    #[test]
    fn prop_precedence_and_default(availability in availability()) {
        let day = resolve_day(Some(&availability));
        prop_assert_eq!(day.len(), WINDOW_SLOT_COUNT);
        for slot in day.iter() {
            let (status, reason) = expected_slot(&availability, slot.time);
            prop_assert_eq!(slot.status, status);
            prop_assert_eq!(&slot.reason, &reason);
        }
    }

    /// Property: of two blocked entries for one time, the later reason wins
    #[test]
    fn prop_later_blocked_reason_wins(
        slot in window_slot(),
        first in "[a-z]{1,10}",
        second in "[a-z]{1,10}",
    ) {
        let availability = Availability::new(fixtures::dates::jul_24_2025())
            .with_blocked(&slot, Some(&first))
            .with_blocked(&slot, Some(&second));
        let day = resolve_day(Some(&availability));
        let time = SlotTime::parse(&slot).unwrap();
        let resolved = day.slot_at(time).unwrap();

        prop_assert_eq!(resolved.status, SlotStatus::Blocked);
        prop_assert_eq!(resolved.reason.as_deref(), Some(second.as_str()));
    }

    /// Property: the grid is always 16 columns of 4 cells
    #[test]
    fn prop_grid_is_complete(availability in availability()) {
        let grid = project_grid(&resolve_day(Some(&availability)));
        prop_assert_eq!(grid.total_columns(), TOTAL_COLUMNS);
        prop_assert!(grid.columns().iter().all(|c| c.cells.len() == 4));
        prop_assert_eq!(grid.cells().count(), WINDOW_SLOT_COUNT);
    }

    /// Property: offsets clamp into range and pages never overrun the grid
    #[test]
    fn prop_windowing_bounds(offset in 0usize..64) {
        let grid = project_grid(&resolve_day(None));
        let total = grid.total_columns();
        let pager = GridPager::with_offset(offset, total);

        prop_assert!(pager.offset() <= total - PAGE_SIZE);
        prop_assert_eq!(pager.offset(), offset.min(total - PAGE_SIZE));
        prop_assert_eq!(
            grid.window(pager.offset(), PAGE_SIZE).len(),
            PAGE_SIZE.min(total - pager.offset())
        );
    }

    /// Property: navigation at either edge leaves the offset untouched
    #[test]
    fn prop_edge_navigation_is_noop(steps in 0usize..10) {
        let total = TOTAL_COLUMNS;
        let mut pager = GridPager::new();
        for _ in 0..steps {
            pager.advance(total);
        }
        let before = pager.offset();
        if !pager.can_advance(total) {
            prop_assert!(!pager.advance(total));
            prop_assert_eq!(pager.offset(), before);
        }

        let mut first = GridPager::new();
        prop_assert!(!first.retreat());
        prop_assert_eq!(first.offset(), 0);
    }

    /// Property: one event per non-available slot, each 15 minutes long
    #[test]
    fn prop_event_emission(availability in availability()) {
        let date = availability.date;
        let claimed = resolve_day(Some(&availability)).claimed().count();
        let provider = fixtures::providers::with_availabilities(1, vec![availability]);

        let events = project_events(&provider, &[date]);
        prop_assert_eq!(events.len(), claimed);
        prop_assert!(events.iter().all(|e| e.status != SlotStatus::Available));
        prop_assert!(events.iter().all(|e| e.duration() == Duration::minutes(15)));
        prop_assert!(events.windows(2).all(|w| w[0].start < w[1].start));
    }

    /// Property: resolving twice yields identical output
    #[test]
    fn prop_resolution_is_idempotent(availability in availability()) {
        prop_assert_eq!(resolve_day(Some(&availability)), resolve_day(Some(&availability)));
    }
}
