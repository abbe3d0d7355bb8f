use serde::Serialize;

use crate::config::AggregateOpts;
use crate::crosstab::{self, SummaryRow};
use crate::error::{AggregateError, ParseError};
use crate::grouping::{self, CountBucket};
use crate::insights::{self, InsightBundle, InsightInputs};
use crate::metrics::{self, Metrics};
use crate::parser::{self, FieldAnomaly, Ticket};
use crate::ranking;
use crate::temporal::{self, TimeBucket};

#[derive(Debug, Clone, Default, Serialize)]
pub struct AnomaliesOut {
    pub total: usize,
    pub samples: Vec<FieldAnomaly>,
}

/// Everything the presentation layer needs from one ticket export.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationBundle {
    pub metrics: Metrics,
    pub by_status: Vec<CountBucket>,
    pub by_priority: Vec<CountBucket>,
    pub by_reason: Vec<CountBucket>,
    pub top_reasons: Vec<CountBucket>,
    pub by_technician: Vec<CountBucket>,
    pub by_department: Vec<CountBucket>,
    pub by_month: Vec<TimeBucket>,
    pub summary: Vec<SummaryRow>,
    pub insights: InsightBundle,
    pub anomalies: AnomaliesOut,
}

pub fn aggregate(raw: &str) -> Result<AggregationBundle, ParseError> {
    aggregate_with_opts(raw, &AggregateOpts::default())
}

pub fn aggregate_with_opts(raw: &str, opts: &AggregateOpts) -> Result<AggregationBundle, ParseError> {
    let parsed = parser::parse_export(raw)?;
    log::debug!(
        "parsed {} tickets with {} field anomalies",
        parsed.tickets.len(),
        parsed.anomalies.len()
    );
    if !parsed.anomalies.is_empty() {
        log::warn!(
            "{} fields could not be coerced; affected tickets are left out of numeric metrics",
            parsed.anomalies.len()
        );
    }
    let mut bundle = aggregate_tickets(&parsed.tickets, opts);
    let total = parsed.anomalies.len();
    let mut samples = parsed.anomalies;
    samples.truncate(opts.max_anomaly_samples);
    bundle.anomalies = AnomaliesOut { total, samples };
    Ok(bundle)
}

/// Runs every stage over already-parsed tickets.
pub fn aggregate_tickets(tickets: &[Ticket], opts: &AggregateOpts) -> AggregationBundle {
    let by_status = grouping::by_status(tickets);
    let by_priority = grouping::by_priority(tickets);
    let by_reason = grouping::by_reason(tickets);
    let by_technician = grouping::by_technician(tickets);
    let by_department = grouping::by_department(tickets);
    let by_month = temporal::bucket_by_month(tickets);
    log::debug!(
        "{} statuses, {} reasons, {} months",
        by_status.len(),
        by_reason.len(),
        by_month.len()
    );

    let top_reasons = ranking::top_k(&by_reason, opts.top_reasons);
    let summary = crosstab::summarize(tickets, &opts.labels);
    let insights = insights::synthesize(
        &InsightInputs {
            total: tickets.len(),
            by_status: &by_status,
            by_priority: &by_priority,
            top_reasons: &top_reasons,
            by_technician: &by_technician,
            by_department: &by_department,
            by_month: &by_month,
        },
        &opts.labels,
    );

    AggregationBundle {
        metrics: metrics::compute_metrics(tickets, &opts.labels),
        by_status,
        by_priority,
        by_reason,
        top_reasons,
        by_technician,
        by_department,
        by_month,
        summary,
        insights,
        anomalies: AnomaliesOut::default(),
    }
}

/// Fetches the export through `fetch` and aggregates it. The fetch runs once,
/// to completion, before any parsing.
pub fn aggregate_from_source<F>(fetch: F, opts: &AggregateOpts) -> Result<AggregationBundle, AggregateError>
where
    F: FnOnce() -> std::io::Result<String>,
{
    let raw = fetch()?;
    Ok(aggregate_with_opts(&raw, opts)?)
}
