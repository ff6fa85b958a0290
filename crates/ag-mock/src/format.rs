//! Formatting helpers shared by generators and the summarizer.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};

const WEEKDAYS: [&str; 7] = [
    "понедельник",
    "вторник",
    "среда",
    "четверг",
    "пятница",
    "суббота",
    "воскресенье",
];

/// Month names in the genitive case ("17 октября").
const MONTHS: [&str; 12] = [
    "января", "февраля", "марта", "апреля", "мая", "июня", "июля", "августа", "сентября",
    "октября", "ноября", "декабря",
];

/// Round to cents.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Render a large amount with a K/M/B/T suffix and two decimals.
pub fn format_large_number(value: f64) -> String {
    if value >= 1e12 {
        format!("{:.2}T", value / 1e12)
    } else if value >= 1e9 {
        format!("{:.2}B", value / 1e9)
    } else if value >= 1e6 {
        format!("{:.2}M", value / 1e6)
    } else if value >= 1e3 {
        format!("{:.2}K", value / 1e3)
    } else {
        format!("{value}")
    }
}

/// Rouble amount with thousands grouped by a no-break space, e.g. "45 320 ₽".
pub fn format_rub(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + 6);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('\u{a0}');
        }
        grouped.push(ch);
    }
    format!("{grouped} ₽")
}

/// "17.10.2026, 09:05"
pub fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format("%d.%m.%Y, %H:%M").to_string()
}

/// "пятница, 17 октября"
pub fn date_label(date: NaiveDate) -> String {
    let weekday = WEEKDAYS[date.weekday().num_days_from_monday() as usize];
    let month = MONTHS[date.month0() as usize];
    format!("{weekday}, {} {month}", date.day())
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// First `max` characters of `s` (not bytes).
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Display a computed value without a trailing ".0" and without "-0".
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_number_suffixes() {
        assert_eq!(format_large_number(2_500_000_000_000.0), "2.50T");
        assert_eq!(format_large_number(42_000_000_000.0), "42.00B");
        assert_eq!(format_large_number(7_000_000.0), "7.00M");
        assert_eq!(format_large_number(1_500.0), "1.50K");
        assert_eq!(format_large_number(999.0), "999");
    }

    #[test]
    fn rub_grouping() {
        assert_eq!(format_rub(45_320), "45\u{a0}320 ₽");
        assert_eq!(format_rub(999), "999 ₽");
        assert_eq!(format_rub(1_000_000), "1\u{a0}000\u{a0}000 ₽");
    }

    #[test]
    fn russian_date_label() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(date_label(date), "пятница, 16 октября");
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate_chars("привет мир", 6), "привет");
    }

    #[test]
    fn number_display() {
        assert_eq!(format_number(4.0), "4");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(2.5), "2.5");
    }
}
