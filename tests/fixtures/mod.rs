// Test fixtures - reusable test data
// Provides consistent providers and availability records across test files

#![allow(dead_code)]

use chrono::NaiveDate;
use provider_calendar::models::availability::Availability;
use provider_calendar::models::provider::{ClinicDetails, Provider};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Thursday, July 24 2025
    pub fn jul_24_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 24).unwrap()
    }

    /// Friday, July 25 2025
    pub fn jul_25_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 25).unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }
}

/// Sample providers for testing
pub mod providers {
    use super::*;

    /// A provider with the given availability records
    pub fn with_availabilities(id: u64, availabilities: Vec<Availability>) -> Provider {
        Provider {
            id,
            name: format!("Dr. Provider {}", id),
            image: String::new(),
            clinic_details: ClinicDetails {
                id: 1,
                name: "Indiranagar".to_string(),
            },
            is_inhouse: true,
            provider_usertype: "therapist".to_string(),
            availabilities,
        }
    }

    /// Raw JSON as served by the provider directory
    pub const DIRECTORY_JSON: &str = r#"[
        {
            "id": 11,
            "name": "Dr. Kavya Shetty",
            "image": "",
            "clinic_details": {"id": 3, "name": "Jayanagar"},
            "is_inhouse": true,
            "provider_usertype": "therapist",
            "availabilities": [
                {
                    "date": "2025-07-24",
                    "online_slots": ["09:00", "09:15"],
                    "offline_slots": null,
                    "blocked_slots": [{"slot": "09:00", "reason": "maintenance"}]
                },
                {"date": "2025-07-25"}
            ]
        },
        {
            "id": 12,
            "name": "Arjun Pillai",
            "clinic_details": {"id": 4, "name": "Whitefield"},
            "is_inhouse": false,
            "provider_usertype": "psychiatrist",
            "availabilities": [
                {"date": "2025-07-24", "offline_booked_slots": ["14:30"]}
            ]
        }
    ]"#;
}
