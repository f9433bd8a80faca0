//! Calendar-date helpers for review stamps.

use chrono::{Local, NaiveDate};

/// Today's local calendar date, `YYYY-MM-DD`
pub fn review_date() -> String {
    format_review_date(Local::now().date_naive())
}

/// Format a date the way `last_reviewed` stores it
pub fn format_review_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_review_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(format_review_date(date), "2024-03-07");
    }

    #[test]
    fn test_review_date_is_iso() {
        let today = review_date();
        assert!(NaiveDate::parse_from_str(&today, "%Y-%m-%d").is_ok());
    }
}
