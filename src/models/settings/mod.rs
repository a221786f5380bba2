// Settings module
// User preferences persisted to the config file

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const VALID_THEMES: [&str; 2] = ["light", "dark"];
pub const VALID_VIEWS: [&str; 2] = ["Day", "Week"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: String,
    /// Follow the operating system's light/dark preference instead of `theme`
    pub use_system_theme: bool,
    /// 0 = Sunday .. 6 = Saturday
    pub first_day_of_week: u8,
    /// Calendar window opened from a provider card ("Day" or "Week")
    pub default_view: String,
    /// Providers JSON to load at startup; the bundled sample when unset
    pub data_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            use_system_theme: false,
            first_day_of_week: 0, // Sunday
            default_view: "Week".to_string(),
            data_file: None,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if !VALID_THEMES.contains(&self.theme.to_lowercase().as_str()) {
            return Err(format!("Unknown theme '{}'", self.theme));
        }

        if self.first_day_of_week > 6 {
            return Err("First day of week must be between 0 (Sunday) and 6 (Saturday)".to_string());
        }

        if !VALID_VIEWS.contains(&self.default_view.as_str()) {
            return Err(format!("Unknown calendar view '{}'", self.default_view));
        }

        Ok(())
    }

    pub fn is_dark_theme(&self) -> bool {
        self.theme.eq_ignore_ascii_case("dark")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert!(!settings.is_dark_theme());
        assert!(settings.data_file.is_none());
    }

    #[test]
    fn test_invalid_first_day_of_week() {
        let settings = Settings {
            first_day_of_week: 7,
            ..Settings::default()
        };
        assert!(settings.validate().unwrap_err().contains("First day of week"));
    }

    #[test]
    fn test_invalid_view() {
        let settings = Settings {
            default_view: "Month".to_string(),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_theme_is_case_insensitive() {
        let settings = Settings {
            theme: "Dark".to_string(),
            ..Settings::default()
        };
        assert!(settings.validate().is_ok());
        assert!(settings.is_dark_theme());
    }
}
