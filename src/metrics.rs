use serde::Serialize;

use crate::config::CategoryLabels;
use crate::parser::Ticket;
use crate::stats::mean;

/// Headline figures shown above the charts.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub total_tickets: usize,
    pub resolved_tickets: usize,
    /// Mean resolution time over tickets with a numeric value.
    pub mean_resolution_minutes: Option<f64>,
    pub mean_first_response_minutes: Option<f64>,
}

pub fn compute_metrics(tickets: &[Ticket], labels: &CategoryLabels) -> Metrics {
    let resolution: Vec<f64> = tickets.iter().filter_map(|t| t.resolution_minutes).collect();
    let first_response: Vec<f64> = tickets
        .iter()
        .filter_map(|t| t.first_response_minutes)
        .map(|m| m as f64)
        .collect();
    Metrics {
        total_tickets: tickets.len(),
        resolved_tickets: tickets
            .iter()
            .filter(|t| t.status.as_deref() == Some(labels.resolved.as_str()))
            .count(),
        mean_resolution_minutes: mean(&resolution),
        mean_first_response_minutes: mean(&first_response),
    }
}
