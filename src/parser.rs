use serde::Serialize;
use std::str::FromStr;

use crate::error::ParseError;
use crate::timestamp::Timestamp;

/// Number of positional fields in one data line.
pub const FIELD_COUNT: usize = 11;

const FIELD_NAMES: [&str; FIELD_COUNT] = [
    "id",
    "openedAt",
    "closedAt",
    "status",
    "priority",
    "reason",
    "department",
    "technician",
    "resolutionMinutes",
    "firstResponseMinutes",
    "satisfaction",
];

/// One support ticket as read from the export.
///
/// Numeric fields that fail coercion are `None`; categorical fields are `None`
/// only when the line was too short to carry them.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: Option<i64>,
    pub opened_at: Timestamp,
    pub closed_at: Option<Timestamp>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub reason: Option<String>,
    pub department: Option<String>,
    pub technician: Option<String>,
    pub resolution_minutes: Option<f64>,
    pub first_response_minutes: Option<i64>,
    pub satisfaction: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AnomalyKind {
    NotNumeric,
    Negative,
    MissingFields,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldAnomaly {
    pub line_number: usize,
    pub field: String,
    pub value: String,
    pub kind: AnomalyKind,
}

#[derive(Debug, Clone, Default)]
pub struct ParsedDataset {
    pub tickets: Vec<Ticket>,
    pub anomalies: Vec<FieldAnomaly>,
}

/// Parses a header line followed by comma-delimited data lines.
///
/// Lines are split on every comma: quoting and escaping are not supported, so a
/// field value containing a comma shifts the remaining fields. Blank data lines
/// are skipped. An empty payload or a blank first line is an error.
pub fn parse_export(text: &str) -> Result<ParsedDataset, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::EmptyPayload);
    }
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    // line 1 is the header; only its presence is checked
    match text.lines().next() {
        Some(header) if !header.trim().is_empty() => {}
        _ => return Err(ParseError::MissingHeader),
    }
    let mut out = ParsedDataset::default();
    for (idx, line) in text.lines().enumerate().skip(1) {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        let (ticket, mut anomalies) = parse_line(line, idx + 1);
        out.tickets.push(ticket);
        out.anomalies.append(&mut anomalies);
    }
    Ok(out)
}

pub fn parse_line(line: &str, line_number: usize) -> (Ticket, Vec<FieldAnomaly>) {
    let values: Vec<&str> = line.split(',').collect();
    let mut anomalies = Vec::new();
    if values.len() < FIELD_COUNT {
        anomalies.push(FieldAnomaly {
            line_number,
            field: FIELD_NAMES[values.len()].to_string(),
            value: format!("{} of {} fields", values.len(), FIELD_COUNT),
            kind: AnomalyKind::MissingFields,
        });
    }
    let field = |i: usize| values.get(i).copied();
    let text = |i: usize| field(i).map(str::to_string);

    let id = field(0).and_then(|raw| coerce(raw, 0, line_number, &mut anomalies));
    let resolution_minutes = field(8).and_then(|raw| {
        match coerce::<f64>(raw, 8, line_number, &mut anomalies) {
            Some(v) if v.is_finite() && v >= 0.0 => Some(v),
            Some(v) if v.is_finite() => {
                anomalies.push(anomaly(line_number, 8, raw, AnomalyKind::Negative));
                None
            }
            // "NaN" and "inf" parse as f64 but are not usable minutes
            Some(_) => {
                anomalies.push(anomaly(line_number, 8, raw, AnomalyKind::NotNumeric));
                None
            }
            None => None,
        }
    });
    let first_response_minutes = field(9).and_then(|raw| {
        match coerce::<i64>(raw, 9, line_number, &mut anomalies) {
            Some(v) if v < 0 => {
                anomalies.push(anomaly(line_number, 9, raw, AnomalyKind::Negative));
                None
            }
            other => other,
        }
    });

    let ticket = Ticket {
        id,
        opened_at: Timestamp::parse(field(1).unwrap_or("")),
        closed_at: field(2).and_then(nullable).map(Timestamp::parse),
        status: text(3),
        priority: text(4),
        reason: text(5),
        department: text(6),
        technician: text(7),
        resolution_minutes,
        first_response_minutes,
        satisfaction: field(10).and_then(nullable).map(str::to_string),
    };
    (ticket, anomalies)
}

/// `""` and the literal `None` both mean "no value".
pub fn nullable(raw: &str) -> Option<&str> {
    if raw.is_empty() || raw == "None" {
        None
    } else {
        Some(raw)
    }
}

fn coerce<T: FromStr>(
    raw: &str,
    index: usize,
    line_number: usize,
    anomalies: &mut Vec<FieldAnomaly>,
) -> Option<T> {
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            anomalies.push(anomaly(line_number, index, raw, AnomalyKind::NotNumeric));
            None
        }
    }
}

fn anomaly(line_number: usize, index: usize, raw: &str, kind: AnomalyKind) -> FieldAnomaly {
    FieldAnomaly {
        line_number,
        field: FIELD_NAMES[index].to_string(),
        value: raw.to_string(),
        kind,
    }
}
