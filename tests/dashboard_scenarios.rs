// ============================================================================
// Scénarios de bout en bout : JSON du service -> données affichées
// ============================================================================

use lazyfinances::api::parse_transactions_response;
use lazyfinances::format::format_value;
use lazyfinances::models::{BalanceView, RawBalance};
use lazyfinances::normalize::normalize;

fn transaction_json(id: &str, value: &str, kind: &str, created_at: &str, category: &str) -> String {
    format!(
        r#"{{ "id": "{id}", "title": "T{id}", "value": {value}, "type": "{kind}",
             "category": {{ "title": "{category}" }}, "created_at": "{created_at}" }}"#
    )
}

fn body(transactions: &[String], income: &str, outcome: &str, total: &str) -> String {
    format!(
        r#"{{ "transactions": [{}], "balance": {{ "income": "{income}", "outcome": "{outcome}", "total": "{total}" }} }}"#,
        transactions.join(",")
    )
}

#[test]
fn salary_income_is_formatted() {
    let json = body(
        &[transaction_json("1", "500", "income", "2020-03-05T10:00:00Z", "Salary")],
        "500",
        "0",
        "500",
    );
    let response = parse_transactions_response(&json).unwrap();
    let dashboard = normalize(&response.transactions, &response.balance).unwrap();

    let salary = &dashboard.transactions[0];
    assert_eq!(salary.formatted_value, "R$ 500,00");
    assert_eq!(salary.formatted_date, "05/03/2020");
    assert_eq!(salary.category.title, "Salary");
}

#[test]
fn outcome_row_gets_minus_prefix() {
    let json = body(
        &[transaction_json("2", "120.5", "outcome", "2020-03-06T10:00:00Z", "Food")],
        "0",
        "120",
        "-120",
    );
    let response = parse_transactions_response(&json).unwrap();
    let dashboard = normalize(&response.transactions, &response.balance).unwrap();

    assert_eq!(dashboard.transactions[0].value_cell(), "- R$ 120,50");
}

#[test]
fn balance_cards_are_formatted() {
    let dashboard = normalize(&[], &RawBalance::new("1000", "300", "700")).unwrap();

    assert_eq!(
        dashboard.balance,
        BalanceView {
            income: "R$ 1.000,00".to_string(),
            outcome: "R$ 300,00".to_string(),
            total: "R$ 700,00".to_string(),
        }
    );
}

#[test]
fn fractional_balance_is_truncated() {
    let dashboard = normalize(&[], &RawBalance::new("99.9", "0", "99.9")).unwrap();
    assert_eq!(dashboard.balance.income, "R$ 99,00");
}

#[test]
fn empty_transaction_list() {
    let response = parse_transactions_response(&body(&[], "10", "5", "5")).unwrap();
    let dashboard = normalize(&response.transactions, &response.balance).unwrap();

    assert!(dashboard.transactions.is_empty());
    assert_eq!(dashboard.balance.total, "R$ 5,00");
}

#[test]
fn many_transactions_keep_order_and_date_shape() {
    let transactions: Vec<String> = (1..=12)
        .rev()
        .map(|month| {
            transaction_json(
                &month.to_string(),
                &format!("{}.{}", month * 100, month),
                if month % 2 == 0 { "income" } else { "outcome" },
                &format!("2021-{:02}-{:02}T12:00:00Z", month, month),
                "Misc",
            )
        })
        .collect();

    let response = parse_transactions_response(&body(&transactions, "1", "1", "0")).unwrap();
    let first = normalize(&response.transactions, &response.balance).unwrap();
    let second = normalize(&response.transactions, &response.balance).unwrap();
    assert_eq!(first, second);

    let ids: Vec<_> = first.transactions.iter().map(|t| t.id.clone()).collect();
    let expected: Vec<_> = (1..=12).rev().map(|m: i32| m.to_string()).collect();
    assert_eq!(ids, expected);

    for (transaction, month) in first.transactions.iter().zip((1..=12).rev()) {
        assert_eq!(transaction.formatted_date, format!("{:02}/{:02}/2021", month, month));
        assert_eq!(transaction.formatted_value, format_value(transaction.value));
    }
}
