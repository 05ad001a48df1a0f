// src/locale.rs
//! Spanish localization tables and the pinned-timezone date formatter.
//! Tables live in `locale_es.json` so localization changes never touch code.

use chrono::{DateTime, Datelike, SecondsFormat};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;

/// Calendar fields are computed in the target audience's timezone instead of
/// inheriting whatever the host happens to run in.
pub const TZ: chrono_tz::Tz = chrono_tz::Europe::Madrid;

#[derive(Debug, Deserialize)]
struct LocaleTables {
    categories: HashMap<String, String>,
    /// 7 entries, index 0 = Sunday.
    weekdays: Vec<String>,
    /// 12 entries, index 0 = January.
    months: Vec<String>,
    status_labels: HashMap<String, String>,
}

static TABLES: Lazy<LocaleTables> = Lazy::new(|| {
    let raw = include_str!("../locale_es.json");
    let tables: LocaleTables = serde_json::from_str(raw).expect("valid Spanish locale tables");
    assert_eq!(tables.weekdays.len(), 7, "weekday table must have 7 entries");
    assert_eq!(tables.months.len(), 12, "month table must have 12 entries");
    tables
});

/// Localized display name for a source category. Unknown names pass through.
pub fn translate_category(name: &str) -> String {
    TABLES
        .categories
        .get(name)
        .cloned()
        .unwrap_or_else(|| name.to_string())
}

/// Localized label for a machine status (`upcoming`/`live`/`completed`).
/// Unknown statuses pass through like category misses.
pub fn status_label(status: &str) -> String {
    TABLES
        .status_labels
        .get(status)
        .cloned()
        .unwrap_or_else(|| status.to_string())
}

/// The formatted views of one instant that the metadata sections share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParts {
    /// "martes 14 de noviembre de 2023"
    pub long: String,
    /// "14/11/2023"
    pub short: String,
    /// "23:13"
    pub time: String,
    /// RFC 3339 with the Madrid offset.
    pub iso: String,
}

pub fn format_date(unix_secs: i64) -> DateParts {
    let utc = DateTime::from_timestamp(unix_secs, 0).unwrap_or(DateTime::UNIX_EPOCH);
    let dt = utc.with_timezone(&TZ);

    let weekday = &TABLES.weekdays[dt.weekday().num_days_from_sunday() as usize];
    let month = &TABLES.months[dt.month0() as usize];

    DateParts {
        long: format!("{weekday} {} de {month} de {}", dt.day(), dt.year()),
        short: format!("{:02}/{:02}/{}", dt.day(), dt.month(), dt.year()),
        time: dt.format("%H:%M").to_string(),
        iso: dt.to_rfc3339_opts(SecondsFormat::Secs, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_category_translates() {
        assert_eq!(translate_category("Football"), "Fútbol");
        assert_eq!(translate_category("Basketball"), "Baloncesto");
    }

    #[test]
    fn unknown_category_passes_through() {
        assert_eq!(translate_category("Sepak Takraw"), "Sepak Takraw");
        assert_eq!(translate_category(""), "");
    }

    #[test]
    fn status_labels_cover_all_three_states() {
        assert_eq!(status_label("upcoming"), "Próximamente");
        assert_eq!(status_label("live"), "En Vivo");
        assert_eq!(status_label("completed"), "Finalizado");
    }

    #[test]
    fn formats_in_madrid_time() {
        // 2023-11-14 22:13:20 UTC is 23:13 CET on a Tuesday.
        let parts = format_date(1_700_000_000);
        assert_eq!(parts.long, "martes 14 de noviembre de 2023");
        assert_eq!(parts.short, "14/11/2023");
        assert_eq!(parts.time, "23:13");
        assert_eq!(parts.iso, "2023-11-14T23:13:20+01:00");
    }

    #[test]
    fn summer_dates_pick_up_dst_offset() {
        // 2024-07-01 12:00:00 UTC is 14:00 CEST.
        let parts = format_date(1_719_835_200);
        assert_eq!(parts.long, "lunes 1 de julio de 2024");
        assert_eq!(parts.time, "14:00");
        assert!(parts.iso.ends_with("+02:00"));
    }
}
