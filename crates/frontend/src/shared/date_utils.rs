//! Formatting of dates, money and counts for tables and forms
//!
//! Keeps the look consistent across all screens

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Local calendar date of the browser
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Example: 2026-03-15T14:02:26Z -> "15.03.2026 14:02"
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%d.%m.%Y %H:%M").to_string()
}

pub fn format_optional_datetime(dt: Option<&DateTime<Utc>>) -> String {
    dt.map(format_datetime).unwrap_or_else(|| "-".to_string())
}

/// Example: 2026-03-15 -> "15.03.2026"
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Value for `<input type="date">`
pub fn to_input_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Thousands separated with commas, two decimals: 1234.5 -> "1,234.50"
pub fn format_money(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}{}.{:02}", group_thousands(cents / 100), cents % 100)
}

pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime() {
        let dt = Utc.with_ymd_and_hms(2026, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_datetime(&dt), "15.03.2026 14:02");
        assert_eq!(format_optional_datetime(None), "-");
    }

    #[test]
    fn test_format_date() {
        let d = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
        assert_eq!(format_date(&d), "31.12.2026");
        assert_eq!(to_input_date(&d), "2026-12-31");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(1234.5), "1,234.50");
        assert_eq!(format_money(1_250_000.0), "1,250,000.00");
        assert_eq!(format_money(-99.999), "-100.00");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(12345678), "12,345,678");
    }
}
