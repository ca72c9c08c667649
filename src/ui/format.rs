// SPDX-License-Identifier: MPL-2.0
//! Text helpers for cards and the details panel.

use crate::i18n::fluent::I18n;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Description length shown on gallery cards.
pub const CARD_DESCRIPTION_CHARS: usize = 120;

/// Cuts `text` to `max_chars` characters, appending `...` when shortened.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}

/// Parses the date formats the backend emits: RFC 3339 timestamps,
/// naive ISO timestamps and plain `YYYY-MM-DD` dates.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }

    let datetime_formats = [
        "%Y-%m-%dT%H:%M:%S%.f", // 2024-01-15T10:00:00.000
        "%Y-%m-%dT%H:%M:%S",    // 2024-01-15T10:00:00
        "%Y-%m-%d %H:%M:%S",    // 2024-01-15 10:00:00
    ];
    for fmt in &datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Long English-style date, e.g. `January 15, 2024`.
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Formats an optional backend date for display.
pub fn format_date(raw: Option<&str>, i18n: &I18n) -> String {
    match raw.map(str::trim).filter(|r| !r.is_empty()) {
        None => i18n.tr("date-not-set"),
        Some(raw) => match parse_date(raw) {
            Some(date) => long_date(date),
            None => i18n.tr("date-invalid"),
        },
    }
}
