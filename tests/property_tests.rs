use proptest::prelude::*;
use ticketscope::aggregate::aggregate;
use ticketscope::grouping::{by_reason, by_status};
use ticketscope::parser::{parse_line, Ticket};
use ticketscope::ranking::top_k;
use ticketscope::temporal::bucket_by_month;

const STATUSES: [&str; 8] = [
    "Resolvido/Fechado",
    "Pendente",
    "Em Andamento",
    "Aguardando Usuário",
    "Cancelado",
    "Reaberto",
    "Agendado",
    "Em Validação",
];
const REASONS: [&str; 5] = ["Rede", "Impressora", "Acesso", "Email", "Hardware"];
const SATISFACTION: [&str; 5] = ["Bom", "Médio", "Regular", "", "None"];

fn row() -> impl Strategy<Value = String> {
    (0usize..STATUSES.len(), 0usize..5, 0usize..5, 2022i32..2025, 1u32..=12, 1u32..=28, 0u32..24)
        .prop_map(|(s, r, sat, y, m, d, h)| {
            format!(
                "1,{y:04}-{m:02}-{d:02} {h:02}:00:00,,{},Alta,{},TI,Ana,10,2,{}",
                STATUSES[s], REASONS[r], SATISFACTION[sat]
            )
        })
}

fn to_tickets(rows: &[String]) -> Vec<Ticket> {
    rows.iter().enumerate().map(|(i, r)| parse_line(r, i + 2).0).collect()
}

proptest! {
    #[test]
    fn grouping_counts_sum_to_dataset_size(rows in prop::collection::vec(row(), 0..60)) {
        let ts = to_tickets(&rows);
        prop_assert_eq!(by_status(&ts).iter().map(|b| b.count).sum::<usize>(), ts.len());
        prop_assert_eq!(by_reason(&ts).iter().map(|b| b.count).sum::<usize>(), ts.len());
        prop_assert_eq!(bucket_by_month(&ts).iter().map(|b| b.count).sum::<usize>(), ts.len());
    }

    #[test]
    fn summary_percentages_sum_to_hundred(rows in prop::collection::vec(row(), 1..60)) {
        let text = format!("header\n{}", rows.join("\n"));
        let b = aggregate(&text).unwrap();
        let sum: f64 = b.summary.iter().map(|r| r.percent_of_total).sum();
        // each row rounds on its own, so the drift grows with the number of rows
        let bound = 0.05 * b.summary.len() as f64 + 1e-9;
        prop_assert!((sum - 100.0).abs() <= bound, "sum was {} over {} rows", sum, b.summary.len());
        let quantities: usize = b.summary.iter().map(|r| r.quantity).sum();
        prop_assert_eq!(quantities, rows.len());
    }

    #[test]
    fn top_k_is_idempotent(rows in prop::collection::vec(row(), 0..60), k in 0usize..8, extra in 0usize..4) {
        let buckets = by_reason(&to_tickets(&rows));
        let once = top_k(&buckets, k);
        prop_assert!(once.len() <= k);
        prop_assert_eq!(top_k(&once, k), once.clone());
        prop_assert_eq!(top_k(&once, k + extra), once);
    }

    #[test]
    fn monthly_series_ignores_input_order(rows in prop::collection::vec(row(), 0..40), seed in any::<u64>()) {
        let ts = to_tickets(&rows);
        let mut shuffled = ts.clone();
        // deterministic Fisher-Yates driven by the generated seed
        let mut state = seed;
        for i in (1..shuffled.len()).rev() {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let j = (state >> 33) as usize % (i + 1);
            shuffled.swap(i, j);
        }
        prop_assert_eq!(bucket_by_month(&ts), bucket_by_month(&shuffled));
    }
}
