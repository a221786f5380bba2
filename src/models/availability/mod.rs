// Availability module
// One provider's raw slot lists for a single calendar date

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::slot::SlotCategory;

/// A blocked slot with an optional administrative reason
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedSlot {
    pub slot: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl BlockedSlot {
    pub fn new(slot: impl Into<String>, reason: Option<&str>) -> Self {
        Self {
            slot: slot.into(),
            reason: reason.map(str::to_string),
        }
    }

    /// Reason text, treating an empty or whitespace-only reason as absent
    pub fn reason(&self) -> Option<&str> {
        self.reason
            .as_deref()
            .map(str::trim)
            .filter(|reason| !reason.is_empty())
    }
}

/// Availability record as supplied by the provider directory.
///
/// Any time of day may appear in more than one list; the slot resolver
/// settles that. Absent, `null` or malformed lists deserialize as empty,
/// and entries of the wrong shape are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub date: NaiveDate,
    #[serde(default, deserialize_with = "lenient_slots")]
    pub online_slots: Vec<String>,
    #[serde(default, deserialize_with = "lenient_slots")]
    pub offline_slots: Vec<String>,
    #[serde(default, deserialize_with = "lenient_slots")]
    pub both_slots: Vec<String>,
    #[serde(default, deserialize_with = "lenient_slots")]
    pub online_booked_slots: Vec<String>,
    #[serde(default, deserialize_with = "lenient_slots")]
    pub offline_booked_slots: Vec<String>,
    #[serde(default, deserialize_with = "lenient_blocked")]
    pub blocked_slots: Vec<BlockedSlot>,
}

/// Iterator over `(time, reason)` claims of one category
pub type Claims<'a> = Box<dyn Iterator<Item = (&'a str, Option<&'a str>)> + 'a>;

fn plain(slots: &[String]) -> Claims<'_> {
    Box::new(slots.iter().map(|slot| (slot.as_str(), None)))
}

/// Entries of a list value; anything that is not an array counts as empty
fn list_entries(value: Value) -> Vec<Value> {
    match value {
        Value::Array(entries) => entries,
        Value::Null => Vec::new(),
        other => {
            log::trace!("Ignoring malformed slot list: {}", other);
            Vec::new()
        }
    }
}

fn lenient_slots<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(list_entries(value)
        .into_iter()
        .filter_map(|entry| match entry {
            Value::String(slot) => Some(slot),
            other => {
                log::trace!("Ignoring malformed slot entry: {}", other);
                None
            }
        })
        .collect())
}

fn lenient_blocked<'de, D>(deserializer: D) -> Result<Vec<BlockedSlot>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(list_entries(value)
        .into_iter()
        .filter_map(blocked_entry)
        .collect())
}

/// `{"slot": "09:00", "reason": "..."}`; a non-string reason is dropped
fn blocked_entry(entry: Value) -> Option<BlockedSlot> {
    let mut fields = match entry {
        Value::Object(fields) => fields,
        other => {
            log::trace!("Ignoring malformed blocked entry: {}", other);
            return None;
        }
    };
    let Some(Value::String(slot)) = fields.remove("slot") else {
        log::trace!("Ignoring blocked entry without a slot string");
        return None;
    };
    let reason = match fields.remove("reason") {
        Some(Value::String(reason)) => Some(reason),
        _ => None,
    };
    Some(BlockedSlot { slot, reason })
}

impl Availability {
    /// Create an empty record for `date`
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            online_slots: Vec::new(),
            offline_slots: Vec::new(),
            both_slots: Vec::new(),
            online_booked_slots: Vec::new(),
            offline_booked_slots: Vec::new(),
            blocked_slots: Vec::new(),
        }
    }

    /// Raw `(time, reason)` claims made by one category, in list order.
    /// Only blocked claims ever carry a reason.
    pub fn claims(&self, category: SlotCategory) -> Claims<'_> {
        match category {
            SlotCategory::Online => plain(&self.online_slots),
            SlotCategory::Offline => plain(&self.offline_slots),
            SlotCategory::Both => plain(&self.both_slots),
            SlotCategory::OnlineBooked => plain(&self.online_booked_slots),
            SlotCategory::OfflineBooked => plain(&self.offline_booked_slots),
            SlotCategory::Blocked => Box::new(
                self.blocked_slots
                    .iter()
                    .map(|blocked| (blocked.slot.as_str(), blocked.reason())),
            ),
        }
    }

    /// True when none of the six lists holds anything
    pub fn is_empty(&self) -> bool {
        SlotCategory::PRECEDENCE
            .iter()
            .all(|category| self.claims(*category).next().is_none())
    }

    /// Builder-style helper for a category list of plain slots
    pub fn with_slots(mut self, category: SlotCategory, slots: &[&str]) -> Self {
        let slots = slots.iter().map(|s| s.to_string());
        match category {
            SlotCategory::Online => self.online_slots.extend(slots),
            SlotCategory::Offline => self.offline_slots.extend(slots),
            SlotCategory::Both => self.both_slots.extend(slots),
            SlotCategory::OnlineBooked => self.online_booked_slots.extend(slots),
            SlotCategory::OfflineBooked => self.offline_booked_slots.extend(slots),
            SlotCategory::Blocked => self
                .blocked_slots
                .extend(slots.map(|slot| BlockedSlot { slot, reason: None })),
        }
        self
    }

    /// Builder-style helper adding one blocked slot
    pub fn with_blocked(mut self, slot: &str, reason: Option<&str>) -> Self {
        self.blocked_slots.push(BlockedSlot::new(slot, reason));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 24).unwrap()
    }

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "date": "2025-07-24",
            "online_slots": ["09:00", "09:15"],
            "offline_slots": ["10:00"],
            "both_slots": [],
            "online_booked_slots": ["11:00"],
            "offline_booked_slots": ["14:30"],
            "blocked_slots": [{"slot": "12:00", "reason": "lunch"}, {"slot": "12:15"}]
        }"#;

        let availability: Availability = serde_json::from_str(json).unwrap();
        assert_eq!(availability.date, date());
        assert_eq!(availability.online_slots, vec!["09:00", "09:15"]);
        assert_eq!(availability.blocked_slots.len(), 2);
        assert_eq!(availability.blocked_slots[0].reason(), Some("lunch"));
        assert_eq!(availability.blocked_slots[1].reason(), None);
    }

    #[test]
    fn test_missing_and_null_lists_are_empty() {
        let json = r#"{"date": "2025-07-25", "online_slots": null}"#;
        let availability: Availability = serde_json::from_str(json).unwrap();

        assert_eq!(availability, Availability::new(NaiveDate::from_ymd_opt(2025, 7, 25).unwrap()));
        assert!(availability.is_empty());
    }

    #[test]
    fn test_malformed_lists_are_empty() {
        let json = r#"{
            "date": "2025-07-24",
            "online_slots": "09:00",
            "offline_slots": ["10:00", 900, null, {"slot": "10:15"}],
            "both_slots": {"slot": "11:00"},
            "online_booked_slots": 42,
            "blocked_slots": ["12:00", {"slot": 1200}, {"slot": "12:15", "reason": 7}, {"slot": "12:30", "reason": "audit"}]
        }"#;

        let availability: Availability = serde_json::from_str(json).unwrap();
        assert!(availability.online_slots.is_empty());
        assert_eq!(availability.offline_slots, vec!["10:00"]);
        assert!(availability.both_slots.is_empty());
        assert!(availability.online_booked_slots.is_empty());
        assert_eq!(
            availability.blocked_slots,
            vec![
                BlockedSlot::new("12:15", None),
                BlockedSlot::new("12:30", Some("audit")),
            ]
        );
    }

    #[test]
    fn test_blank_reason_is_absent() {
        let blocked = BlockedSlot::new("09:00", Some("   "));
        assert_eq!(blocked.reason(), None);
    }

    #[test]
    fn test_claims_per_category() {
        let availability = Availability::new(date())
            .with_slots(SlotCategory::Both, &["13:00", "13:15"])
            .with_blocked("15:00", Some("training"));

        let both: Vec<_> = availability.claims(SlotCategory::Both).collect();
        assert_eq!(both, vec![("13:00", None), ("13:15", None)]);

        let blocked: Vec<_> = availability.claims(SlotCategory::Blocked).collect();
        assert_eq!(blocked, vec![("15:00", Some("training"))]);

        assert_eq!(availability.claims(SlotCategory::Online).count(), 0);
        assert!(!availability.is_empty());
    }
}
