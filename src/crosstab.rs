use serde::{Deserialize, Serialize};

use crate::config::CategoryLabels;
use crate::grouping::{self, NONE_LABEL};
use crate::parser::Ticket;
use crate::stats::percent_of;

/// One row of the status × satisfaction table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRow {
    pub status: String,
    pub quantity: usize,
    pub percent_of_total: f64,
    pub satisfaction_good: usize,
    pub satisfaction_medium: usize,
    pub satisfaction_regular: usize,
}

/// Builds one row per distinct status, in first-seen order.
///
/// An empty dataset gives an empty table; percentages are 0.0 whenever the
/// total is zero instead of failing.
pub fn summarize(tickets: &[Ticket], labels: &CategoryLabels) -> Vec<SummaryRow> {
    let total = tickets.len();
    let mut rows: Vec<SummaryRow> = grouping::by_status(tickets)
        .into_iter()
        .map(|b| SummaryRow {
            percent_of_total: percent_of(b.count, total),
            status: b.label,
            quantity: b.count,
            satisfaction_good: 0,
            satisfaction_medium: 0,
            satisfaction_regular: 0,
        })
        .collect();

    for t in tickets {
        let Some(sat) = t.satisfaction.as_deref() else { continue };
        let status = t.status.as_deref().unwrap_or(NONE_LABEL);
        let Some(row) = rows.iter_mut().find(|r| r.status == status) else { continue };
        if sat == labels.satisfaction_good {
            row.satisfaction_good += 1;
        } else if sat == labels.satisfaction_medium {
            row.satisfaction_medium += 1;
        } else if sat == labels.satisfaction_regular {
            row.satisfaction_regular += 1;
        }
    }
    rows
}
