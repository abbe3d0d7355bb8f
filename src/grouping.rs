use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::parser::Ticket;

/// Label used for tickets whose grouping key is absent.
pub const NONE_LABEL: &str = "(none)";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountBucket {
    pub label: String,
    pub count: usize,
}

impl CountBucket {
    pub fn new(label: impl Into<String>, count: usize) -> Self {
        Self { label: label.into(), count }
    }
}

/// Counts tickets per label. Buckets come out in first-seen label order.
pub fn count_by<F>(tickets: &[Ticket], key: F) -> Vec<CountBucket>
where
    F: Fn(&Ticket) -> Option<&str>,
{
    count_by_derived(tickets, |t| key(t).map(str::to_string))
}

/// Like [`count_by`] but for keys computed per ticket rather than borrowed.
pub fn count_by_derived<F>(tickets: &[Ticket], key: F) -> Vec<CountBucket>
where
    F: Fn(&Ticket) -> Option<String>,
{
    let mut index: AHashMap<String, usize> = AHashMap::new();
    let mut buckets: Vec<CountBucket> = Vec::new();
    for t in tickets {
        let label = key(t).unwrap_or_else(|| NONE_LABEL.to_string());
        match index.get(&label) {
            Some(&pos) => buckets[pos].count += 1,
            None => {
                index.insert(label.clone(), buckets.len());
                buckets.push(CountBucket { label, count: 1 });
            }
        }
    }
    buckets
}

pub fn by_status(tickets: &[Ticket]) -> Vec<CountBucket> {
    count_by(tickets, |t| t.status.as_deref())
}

pub fn by_priority(tickets: &[Ticket]) -> Vec<CountBucket> {
    count_by(tickets, |t| t.priority.as_deref())
}

pub fn by_reason(tickets: &[Ticket]) -> Vec<CountBucket> {
    count_by(tickets, |t| t.reason.as_deref())
}

pub fn by_department(tickets: &[Ticket]) -> Vec<CountBucket> {
    count_by(tickets, |t| t.department.as_deref())
}

pub fn by_technician(tickets: &[Ticket]) -> Vec<CountBucket> {
    count_by(tickets, |t| t.technician.as_deref())
}

/// Count for `label`, or 0 when no bucket carries it.
pub fn count_of(buckets: &[CountBucket], label: &str) -> usize {
    buckets.iter().find(|b| b.label == label).map(|b| b.count).unwrap_or(0)
}
