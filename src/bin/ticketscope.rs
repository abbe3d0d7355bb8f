use clap::Parser;
use itertools::Itertools;
use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::Once;
use ticketscope::aggregate::{aggregate_from_source, AggregationBundle};
use ticketscope::config::{AggregateOpts, CategoryLabels};
use ticketscope::grouping::CountBucket;
use ticketscope::stats::format_percent;

const SECTIONS: [&str; 9] = [
    "status",
    "priority",
    "reasons",
    "technicians",
    "departments",
    "months",
    "summary",
    "insights",
    "metrics",
];

fn init_parallelism() {
    static START: Once = Once::new();
    START.call_once(|| {
        let n = num_cpus::get();
        let _ = rayon::ThreadPoolBuilder::new().num_threads(n).build_global();
    });
}

#[derive(Parser, Debug)]
#[command(name = "ticketscope", version, about = "Support ticket export aggregation")]
struct Cli {
    /// Ticket exports (`-` for stdin). May be repeated.
    #[arg(required = false)]
    input: Vec<String>,

    /// Print only one section: status | priority | reasons | technicians | departments | months | summary | insights | metrics
    #[arg(long = "only")]
    only: Option<String>,

    /// Output format: json | table
    #[arg(long = "format", default_value = "json")]
    format: String,

    /// Size of the reason ranking
    #[arg(long = "top", default_value_t = 10)]
    top: usize,

    /// JSON file overriding the status/priority/satisfaction labels
    #[arg(long = "labels")]
    labels: Option<PathBuf>,

    /// Maximum coercion anomalies echoed in the output
    #[arg(long = "anomaly-samples", default_value_t = 20)]
    anomaly_samples: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    init_parallelism();
    let cli = Cli::parse();
    check_section(cli.only.as_deref())?;
    if cli.format != "json" && cli.format != "table" {
        log::warn!("unknown format {:?}, printing json", cli.format);
    }

    let labels = match &cli.labels {
        Some(path) => CategoryLabels::from_json_file(path)?,
        None => CategoryLabels::default(),
    };
    let opts = AggregateOpts { top_reasons: cli.top, max_anomaly_samples: cli.anomaly_samples, labels };

    let inputs = if cli.input.is_empty() { vec!["-".to_string()] } else { cli.input.clone() };

    // each export is independent, so several can be aggregated at once
    let results: Vec<(String, AggregationBundle)> = inputs
        .par_iter()
        .map(|path| -> anyhow::Result<(String, AggregationBundle)> {
            let bundle = aggregate_from_source(|| ticketscope::source::read_source(path), &opts)
                .map_err(|e| anyhow::anyhow!("{path}: {e}"))?;
            Ok((path.clone(), bundle))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    if cli.format == "table" {
        for (path, bundle) in &results {
            if results.len() > 1 {
                println!("\n# {path}");
            }
            print_table(bundle, cli.only.as_deref());
        }
    } else {
        let sections: Vec<serde_json::Value> = results
            .iter()
            .map(|(_, b)| select_section(b, cli.only.as_deref()))
            .collect::<Result<_, _>>()?;
        let out = if sections.len() == 1 {
            sections.into_iter().next().unwrap_or_default()
        } else {
            serde_json::Value::Object(
                results.iter().map(|(p, _)| p.clone()).zip(sections).collect(),
            )
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    }
    Ok(())
}

fn check_section(only: Option<&str>) -> anyhow::Result<()> {
    match only {
        Some(section) if !SECTIONS.iter().any(|s| *s == section) => {
            anyhow::bail!("unknown section {section:?} for --only; expected one of: {}", SECTIONS.join(", "))
        }
        _ => Ok(()),
    }
}

fn select_section(b: &AggregationBundle, only: Option<&str>) -> serde_json::Result<serde_json::Value> {
    match only {
        Some("status") => serde_json::to_value(&b.by_status),
        Some("priority") => serde_json::to_value(&b.by_priority),
        Some("reasons") => serde_json::to_value(&b.top_reasons),
        Some("technicians") => serde_json::to_value(&b.by_technician),
        Some("departments") => serde_json::to_value(&b.by_department),
        Some("months") => serde_json::to_value(&b.by_month),
        Some("summary") => serde_json::to_value(&b.summary),
        Some("insights") => serde_json::to_value(&b.insights),
        Some("metrics") => serde_json::to_value(&b.metrics),
        _ => serde_json::to_value(b),
    }
}

fn print_table(b: &AggregationBundle, only: Option<&str>) {
    match only {
        Some("status") => print_counts("Status", &b.by_status),
        Some("priority") => print_counts("Priority", &b.by_priority),
        Some("reasons") => print_counts("Reason", &b.top_reasons),
        Some("technicians") => print_counts("Technician", &b.by_technician),
        Some("departments") => print_counts("Department", &b.by_department),
        Some("months") => {
            println!("{:<10} {}", "Month", "Count");
            for m in &b.by_month {
                println!("{:<10} {}", m.month, m.count);
            }
        }
        Some("insights") => print_insights(b),
        Some("metrics") => print_metrics(b),
        Some("summary") => print_summary(b),
        _ => {
            print_metrics(b);
            println!();
            print_summary(b);
            println!();
            print_insights(b);
        }
    }
}

fn print_counts(title: &str, buckets: &[CountBucket]) {
    println!("{:<30} {}", title, "Count");
    for c in buckets {
        println!("{:<30} {}", c.label, c.count);
    }
}

fn print_metrics(b: &AggregationBundle) {
    let m = &b.metrics;
    let minutes = |v: Option<f64>| v.map(|x| format!("{:.0}", x)).unwrap_or_else(|| "-".into());
    println!("Tickets: {}  Resolved: {}  TMA (min): {}  FRT (min): {}",
        m.total_tickets, m.resolved_tickets,
        minutes(m.mean_resolution_minutes), minutes(m.mean_first_response_minutes));
    if b.anomalies.total > 0 {
        let fields = b.anomalies.samples.iter().map(|a| a.field.as_str()).unique().join(", ");
        println!("Anomalies: {} (fields: {})", b.anomalies.total, fields);
    }
}

fn print_summary(b: &AggregationBundle) {
    println!("{:<24} {:<10} {:<8} {:<6} {:<6} {}", "Status", "Quantity", "Percent", "Good", "Medium", "Regular");
    for r in &b.summary {
        println!("{:<24} {:<10} {:<8} {:<6} {:<6} {}",
            r.status, r.quantity, format_percent(r.percent_of_total),
            r.satisfaction_good, r.satisfaction_medium, r.satisfaction_regular);
    }
}

fn print_insights(b: &AggregationBundle) {
    for (key, sentence) in b.insights.iter() {
        println!("[{}] {}", key.as_str(), sentence);
    }
}
