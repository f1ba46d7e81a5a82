//! Quote number generation
//!
//! Format: `QT<YYYYMMDD><3-digit ordinal>`, where the ordinal is the number
//! of quotes already created that UTC day plus one. A number is assigned once
//! at first save and never regenerated; collisions under concurrent creation
//! are handled by the quote repository with a bounded retry.

use chrono::{NaiveDate, NaiveTime};

/// Milliseconds in one day
const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Format a quote number for the given date and 1-based ordinal.
pub fn format(date: NaiveDate, ordinal: u32) -> String {
    format!("QT{}{:03}", date.format("%Y%m%d"), ordinal)
}

/// UTC millisecond bounds `[start, end)` of a calendar day, for counting
/// quotes created that day against `created_at` timestamps.
pub fn day_bounds_millis(date: NaiveDate) -> (i64, i64) {
    let start = date.and_time(NaiveTime::MIN).and_utc().timestamp_millis();
    (start, start + DAY_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_sequence() {
        let day = date(2025, 7, 22);
        assert_eq!(format(day, 1), "QT20250722001");
        assert_eq!(format(day, 2), "QT20250722002");
    }

    #[test]
    fn test_format_pads_and_grows() {
        let day = date(2025, 1, 5);
        assert_eq!(format(day, 42), "QT20250105042");
        assert_eq!(format(day, 999), "QT20250105999");
        // Past 999 the number simply gets longer; uniqueness still holds.
        assert_eq!(format(day, 1000), "QT202501051000");
    }

    #[test]
    fn test_day_bounds() {
        let (start, end) = day_bounds_millis(date(2025, 7, 22));
        assert_eq!(end - start, DAY_MS);
        // 2025-07-22T00:00:00Z
        assert_eq!(start, 1_753_142_400_000);
    }
}
