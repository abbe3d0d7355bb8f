use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::parser::Ticket;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBucket {
    pub month: String, // YYYY-MM
    pub count: usize,
}

pub fn month_key(t: &NaiveDateTime) -> String {
    format!("{:04}-{:02}", t.year(), t.month())
}

/// Tickets per opening month, ascending. Months without tickets are omitted and
/// tickets with an unreadable opening time are skipped.
pub fn bucket_by_month(tickets: &[Ticket]) -> Vec<TimeBucket> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for t in tickets {
        if let Some(opened) = t.opened_at.local.as_ref() {
            *counts.entry(month_key(opened)).or_insert(0) += 1;
        }
    }
    counts.into_iter().map(|(month, count)| TimeBucket { month, count }).collect()
}

/// Busiest month; the earliest month wins a tie.
pub fn peak_month(series: &[TimeBucket]) -> Option<&TimeBucket> {
    series.iter().fold(None, |best: Option<&TimeBucket>, b| match best {
        Some(cur) if cur.count > b.count => Some(cur),
        Some(cur) if cur.count == b.count && cur.month <= b.month => Some(cur),
        _ => Some(b),
    })
}
