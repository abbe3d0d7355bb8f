use pretty_assertions::assert_eq;
use ticketscope::grouping::{by_status, count_by, count_by_derived, count_of, CountBucket, NONE_LABEL};
use ticketscope::parser::parse_line;

fn tickets(lines: &[&str]) -> Vec<ticketscope::parser::Ticket> {
    lines.iter().enumerate().map(|(i, l)| parse_line(l, i + 2).0).collect()
}

#[test]
fn counts_in_first_seen_order() {
    let ts = tickets(&[
        "1,2024-01-01,,Pendente,Alta,A,TI,Ana,1,1,",
        "2,2024-01-01,,Resolvido/Fechado,Alta,A,TI,Ana,1,1,",
        "3,2024-01-01,,Pendente,Alta,A,TI,Ana,1,1,",
        "4,2024-01-01,,Em Andamento,Alta,A,TI,Ana,1,1,",
    ]);
    assert_eq!(
        by_status(&ts),
        vec![
            CountBucket::new("Pendente", 2),
            CountBucket::new("Resolvido/Fechado", 1),
            CountBucket::new("Em Andamento", 1),
        ]
    );
}

#[test]
fn absent_keys_group_under_none_label() {
    let ts = tickets(&[
        "1,2024-01-01,,Pendente,Alta,A,TI,Ana,1,1,Bom",
        "2,2024-01-01,,Pendente,Alta,A,TI,Ana,1,1,",
        "3,2024-01-01,,Pendente,Alta,A,TI,Ana,1,1,None",
    ]);
    let buckets = count_by(&ts, |t| t.satisfaction.as_deref());
    assert_eq!(buckets, vec![CountBucket::new("Bom", 1), CountBucket::new(NONE_LABEL, 2)]);
}

#[test]
fn derived_keys() {
    let ts = tickets(&[
        "1,2024-01-01,,Pendente,Alta,A,TI,Ana,1,1,",
        "2,2024-01-01,,Pendente,Baixa,A,TI,Ana,1,1,",
        "3,2024-01-01,,Pendente,Urgente,A,TI,Ana,1,1,",
    ]);
    let buckets = count_by_derived(&ts, |t| {
        t.priority.as_deref().map(|p| if p == "Baixa" { "normal" } else { "critical" }.to_string())
    });
    assert_eq!(buckets, vec![CountBucket::new("critical", 2), CountBucket::new("normal", 1)]);
}

#[test]
fn empty_input_gives_no_buckets() {
    assert!(by_status(&[]).is_empty());
    assert_eq!(count_of(&[], "Pendente"), 0);
}
