/// Utilities for date formatting
use chrono::NaiveDate;

/// Format a date for post cards
/// Example: 2024-03-15 -> "Mar 15, 2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_date(date), "Mar 15, 2024");

        let date = NaiveDate::from_ymd_opt(2019, 12, 1).unwrap();
        assert_eq!(format_date(date), "Dec 1, 2019");
    }
}
