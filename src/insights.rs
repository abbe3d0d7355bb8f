use serde::Serialize;

use crate::config::CategoryLabels;
use crate::grouping::{count_of, CountBucket};
use crate::ranking;
use crate::stats::{format_percent, percent_of};
use crate::temporal::{self, TimeBucket};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InsightKey {
    Status,
    Priority,
    TopReason,
    TopTechnician,
    TopDepartment,
    PeakMonth,
}

impl InsightKey {
    pub const ALL: [InsightKey; 6] = [
        InsightKey::Status,
        InsightKey::Priority,
        InsightKey::TopReason,
        InsightKey::TopTechnician,
        InsightKey::TopDepartment,
        InsightKey::PeakMonth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InsightKey::Status => "status",
            InsightKey::Priority => "priority",
            InsightKey::TopReason => "topReason",
            InsightKey::TopTechnician => "topTechnician",
            InsightKey::TopDepartment => "topDepartment",
            InsightKey::PeakMonth => "peakMonth",
        }
    }
}

/// Generated sentences; a field is `None` when its inputs were empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightBundle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_technician: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak_month: Option<String>,
}

impl InsightBundle {
    pub fn get(&self, key: InsightKey) -> Option<&str> {
        let slot = match key {
            InsightKey::Status => &self.status,
            InsightKey::Priority => &self.priority,
            InsightKey::TopReason => &self.top_reason,
            InsightKey::TopTechnician => &self.top_technician,
            InsightKey::TopDepartment => &self.top_department,
            InsightKey::PeakMonth => &self.peak_month,
        };
        slot.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        InsightKey::ALL.iter().all(|k| self.get(*k).is_none())
    }

    /// Present insights in key order.
    pub fn iter(&self) -> impl Iterator<Item = (InsightKey, &str)> {
        InsightKey::ALL.into_iter().filter_map(|k| self.get(k).map(|s| (k, s)))
    }
}

/// Aggregates the synthesizer reads from.
pub struct InsightInputs<'a> {
    pub total: usize,
    pub by_status: &'a [CountBucket],
    pub by_priority: &'a [CountBucket],
    pub top_reasons: &'a [CountBucket],
    pub by_technician: &'a [CountBucket],
    pub by_department: &'a [CountBucket],
    pub by_month: &'a [TimeBucket],
}

pub fn synthesize(inputs: &InsightInputs<'_>, labels: &CategoryLabels) -> InsightBundle {
    let total = inputs.total;
    let mut out = InsightBundle::default();
    if total > 0 {
        let resolved = count_of(inputs.by_status, &labels.resolved);
        let pending = count_of(inputs.by_status, &labels.pending);
        out.status = Some(format!(
            "{}% dos chamados foram resolvidos. {} chamados ainda estão pendentes.",
            format_percent(percent_of(resolved, total)),
            pending
        ));

        let [first, second] = &labels.high_urgency;
        let critical = count_of(inputs.by_priority, first) + count_of(inputs.by_priority, second);
        out.priority = Some(format!(
            "{}% dos chamados são de prioridade {} ou {}, indicando alta demanda crítica.",
            format_percent(percent_of(critical, total)),
            first,
            second
        ));
    }

    if let Some(top) = inputs.top_reasons.first() {
        out.top_reason = Some(format!(
            "\"{}\" é o motivo mais frequente com {} chamados, representando {}% do total.",
            top.label,
            top.count,
            format_percent(percent_of(top.count, total))
        ));
    }
    if let Some(tech) = ranking::top(inputs.by_technician) {
        out.top_technician = Some(format!(
            "{} é o técnico mais produtivo com {} chamados atendidos.",
            tech.label, tech.count
        ));
    }
    if let Some(dept) = ranking::top(inputs.by_department) {
        out.top_department = Some(format!(
            "O departamento de {} tem a maior demanda com {} chamados.",
            dept.label, dept.count
        ));
    }
    if let Some(peak) = temporal::peak_month(inputs.by_month) {
        out.peak_month = Some(format!(
            "O pico de chamados ocorreu em {} com {} registros, indicando alta demanda nesse período.",
            peak.month, peak.count
        ));
    }
    out
}
