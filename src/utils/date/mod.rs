// Date utility functions
// Week and date-strip arithmetic shared by the views

use chrono::{Datelike, Duration, NaiveDate};

/// Number of days shown by a week view or the date strip
pub const DAYS_PER_WEEK: i64 = 7;

/// Calculate the start of the week containing the given date.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc.
pub fn get_week_start(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - first_day_of_week as i64 + 7) % 7;
    date - Duration::days(offset)
}

/// The seven consecutive dates of the week containing `anchor`
pub fn week_dates(anchor: NaiveDate, first_day_of_week: u8) -> Vec<NaiveDate> {
    let start = get_week_start(anchor, first_day_of_week);
    (0..DAYS_PER_WEEK).map(|i| start + Duration::days(i)).collect()
}

/// Seven dates starting `week_offset` whole weeks away from `today`.
///
/// Unlike [`week_dates`] this is not aligned to a week start: offset 0 always
/// begins with today.
pub fn date_strip(today: NaiveDate, week_offset: i64) -> Vec<NaiveDate> {
    let start = today + Duration::days(week_offset * DAYS_PER_WEEK);
    (0..DAYS_PER_WEEK).map(|i| start + Duration::days(i)).collect()
}

/// Human readable range such as "24 Jul - 30 Jul 2025"
pub fn format_date_range(dates: &[NaiveDate]) -> String {
    match (dates.first(), dates.last()) {
        (Some(first), Some(last)) => format!(
            "{} - {}",
            first.format("%-d %b"),
            last.format("%-d %b %Y")
        ),
        _ => String::new(),
    }
}

/// Parse an ISO `YYYY-MM-DD` date
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_get_week_start_sunday() {
        // Thursday, Jul 24, 2025
        let start = get_week_start(ymd(2025, 7, 24), 0);
        assert_eq!(start, ymd(2025, 7, 20));
    }

    #[test]
    fn test_get_week_start_monday() {
        let start = get_week_start(ymd(2025, 7, 24), 1);
        assert_eq!(start, ymd(2025, 7, 21));
    }

    #[test]
    fn test_get_week_start_on_start_day() {
        assert_eq!(get_week_start(ymd(2025, 7, 20), 0), ymd(2025, 7, 20));
    }

    #[test]
    fn test_week_dates_crosses_month() {
        let dates = week_dates(ymd(2025, 7, 31), 0);
        assert_eq!(dates.len(), 7);
        assert_eq!(dates[0], ymd(2025, 7, 27));
        assert_eq!(dates[6], ymd(2025, 8, 2));
    }

    #[test]
    fn test_date_strip_offsets() {
        let today = ymd(2025, 7, 24);
        assert_eq!(date_strip(today, 0)[0], today);
        assert_eq!(date_strip(today, 1)[0], ymd(2025, 7, 31));
        assert_eq!(date_strip(today, -1)[6], ymd(2025, 7, 23));
    }

    #[test]
    fn test_format_date_range() {
        let dates = date_strip(ymd(2025, 7, 24), 0);
        assert_eq!(format_date_range(&dates), "24 Jul - 30 Jul 2025");
        assert_eq!(format_date_range(&[]), "");
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2025-07-24"), Some(ymd(2025, 7, 24)));
        assert_eq!(parse_date("24/07/2025"), None);
    }
}
