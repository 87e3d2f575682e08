//! Display formatting shared by the views.

use chrono::{DateTime, NaiveDateTime, Utc};

/// First eight characters of a backend UUID, the way quote references are
/// shown to people.
pub fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

/// `14.03.2026`
pub fn date(dt: &DateTime<Utc>) -> String {
    dt.format("%d.%m.%Y").to_string()
}

/// `14.03.2026 09:41`
pub fn datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%d.%m.%Y %H:%M").to_string()
}

/// Currency with thousands separators: `₺12,480.50`.
pub fn money(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}₺{grouped}.{frac:02}")
}

/// Parse the value of an `<input type="datetime-local">`. The picker has no
/// timezone, so the value is taken as UTC.
pub fn parse_datetime_input(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Inverse of [`parse_datetime_input`], for pre-filling edit forms.
pub fn to_datetime_input(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%dT%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("a3f8c2d1-77aa-4b01"), "a3f8c2d1");
        assert_eq!(short_id("ab"), "ab");
    }

    #[test]
    fn test_money_grouping() {
        assert_eq!(money(0.0), "₺0.00");
        assert_eq!(money(999.5), "₺999.50");
        assert_eq!(money(12480.5), "₺12,480.50");
        assert_eq!(money(1_234_567.899), "₺1,234,567.90");
        assert_eq!(money(-42.0), "-₺42.00");
    }

    #[test]
    fn test_datetime_input_round_trip() {
        let parsed = parse_datetime_input("2026-03-01T09:30").unwrap();
        assert_eq!(to_datetime_input(&parsed), "2026-03-01T09:30");
        assert!(parse_datetime_input("not a date").is_none());
        assert!(parse_datetime_input("").is_none());
    }
}
