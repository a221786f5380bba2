// Provider module
// Clinician records supplied by the provider directory

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::availability::Availability;

/// Clinic a provider is affiliated with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicDetails {
    pub id: u64,
    pub name: String,
}

/// In-house or external provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Affiliation {
    InHouse,
    External,
}

impl Affiliation {
    pub fn label(&self) -> &'static str {
        match self {
            Affiliation::InHouse => "In-house",
            Affiliation::External => "External",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "in-house" | "inhouse" => Some(Affiliation::InHouse),
            "external" => Some(Affiliation::External),
            _ => None,
        }
    }
}

impl fmt::Display for Affiliation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A provider and the per-date availability published for them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub image: String,
    pub clinic_details: ClinicDetails,
    #[serde(default)]
    pub is_inhouse: bool,
    /// Service-type tag, e.g. "therapist" or "psychiatrist"
    #[serde(default, alias = "service_type")]
    pub provider_usertype: String,
    #[serde(default)]
    pub availabilities: Vec<Availability>,
}

impl Provider {
    /// The availability record for `date`, if any.
    ///
    /// Dates are expected to be unique per provider; should the source repeat
    /// one, the first record wins.
    pub fn availability_for(&self, date: NaiveDate) -> Option<&Availability> {
        self.availabilities.iter().find(|a| a.date == date)
    }

    pub fn affiliation(&self) -> Affiliation {
        if self.is_inhouse {
            Affiliation::InHouse
        } else {
            Affiliation::External
        }
    }
}
