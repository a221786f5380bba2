//! Provider directory.
//!
//! Read-only source of providers and their availability, plus the search and
//! dropdown filters applied before anything is resolved.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::provider::{Affiliation, Provider};

const BUNDLED_PROVIDERS: &str = include_str!("../../../assets/providers.json");

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Failed to read provider data from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid provider data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Ordered, immutable collection of providers
#[derive(Debug, Clone, Default)]
pub struct ProviderDirectory {
    providers: Vec<Provider>,
}

impl ProviderDirectory {
    pub fn new(providers: Vec<Provider>) -> Self {
        Self { providers }
    }

    /// Parse a JSON array of provider records
    pub fn from_json_str(json: &str) -> Result<Self, DirectoryError> {
        let providers: Vec<Provider> = serde_json::from_str(json)?;
        Ok(Self::new(providers))
    }

    pub fn from_path(path: &Path) -> Result<Self, DirectoryError> {
        let json = std::fs::read_to_string(path).map_err(|source| DirectoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let directory = Self::from_json_str(&json)?;
        log::info!(
            "Loaded {} providers from {}",
            directory.len(),
            path.display()
        );
        Ok(directory)
    }

    /// The sample data shipped with the application
    pub fn bundled() -> Result<Self, DirectoryError> {
        Self::from_json_str(BUNDLED_PROVIDERS)
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn find(&self, id: u64) -> Option<&Provider> {
        self.providers.iter().find(|p| p.id == id)
    }

    /// Earliest date any provider publishes availability for
    pub fn earliest_date(&self) -> Option<NaiveDate> {
        self.providers
            .iter()
            .flat_map(|p| p.availabilities.iter().map(|a| a.date))
            .min()
    }

    /// True when at least one provider has a record for one of `dates`
    pub fn has_records_within(&self, dates: &[NaiveDate]) -> bool {
        self.providers
            .iter()
            .any(|p| dates.iter().any(|d| p.availability_for(*d).is_some()))
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

/// Search box and dropdown selections. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderFilter {
    pub name_query: String,
    pub service: Option<String>,
    pub affiliation: Option<Affiliation>,
    pub center: Option<String>,
}

impl ProviderFilter {
    pub fn matches(&self, provider: &Provider) -> bool {
        let query = self.name_query.trim().to_lowercase();
        let matches_name = query.is_empty() || provider.name.to_lowercase().contains(&query);
        let matches_service = self
            .service
            .as_ref()
            .map_or(true, |service| &provider.provider_usertype == service);
        let matches_type = self
            .affiliation
            .map_or(true, |affiliation| provider.affiliation() == affiliation);
        let matches_center = self
            .center
            .as_ref()
            .map_or(true, |center| &provider.clinic_details.name == center);

        matches_name && matches_service && matches_type && matches_center
    }

    /// Matching providers in directory order
    pub fn apply<'a>(&self, providers: &'a [Provider]) -> Vec<&'a Provider> {
        providers.iter().filter(|p| self.matches(p)).collect()
    }

    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Distinct dropdown values, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub services: Vec<String>,
    pub affiliations: Vec<Affiliation>,
    pub centers: Vec<String>,
}

impl FilterOptions {
    pub fn from_providers(providers: &[Provider]) -> Self {
        let mut options = Self::default();
        for provider in providers {
            push_unique(&mut options.services, provider.provider_usertype.clone());
            push_unique(&mut options.affiliations, provider.affiliation());
            push_unique(&mut options.centers, provider.clinic_details.name.clone());
        }
        options
    }
}

fn push_unique<T: PartialEq>(values: &mut Vec<T>, value: T) {
    if !values.contains(&value) {
        values.push(value);
    }
}
