use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

static RE_EMBEDDED_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d{4})[-/](\d{2})[-/](\d{2})\b").unwrap()
});

const DATETIME_FMTS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

const DATE_FMTS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// A timestamp field as written in the export, with its local reading.
#[derive(Debug, Clone, PartialEq)]
pub struct Timestamp {
    pub raw: String,
    pub local: Option<NaiveDateTime>, // None when the text is not a recognisable date
}

impl Timestamp {
    pub fn parse(raw: &str) -> Self {
        Self { raw: raw.to_string(), local: parse_local(raw) }
    }
}

/// Interprets `s` as a local wall-clock time.
///
/// Naive values are taken as already local; values carrying an offset are
/// converted into the local zone. Returns `None` when nothing usable is found.
pub fn parse_local(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    for f in ["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%z"] {
        if let Ok(dt) = DateTime::parse_from_str(s, f) {
            return Some(dt.with_timezone(&Local).naive_local());
        }
    }
    for f in DATETIME_FMTS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, f) {
            return Some(ndt);
        }
    }
    for f in DATE_FMTS {
        if let Ok(d) = NaiveDate::parse_from_str(s, f) {
            return d.and_hms_opt(0, 0, 0);
        }
    }
    // last resort: a date somewhere inside the text
    let caps = RE_EMBEDDED_DATE.captures(s)?;
    let year = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    let day = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(0, 0, 0)
}
