use super::*;

#[test]
fn clients_have_unique_ids_and_first_is_greenleaf() {
    let list = clients();
    assert_eq!(list.len(), 6);
    assert_eq!(list[0].company_name, "GreenLeaf Landscaping");
    let mut ids: Vec<_> = list.iter().map(|c| c.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 6);
}

#[test]
fn disconnected_fixture_client_has_no_sync() {
    let list = clients();
    let urbanfit = list.iter().find(|c| c.id == "5").unwrap();
    assert_eq!(urbanfit.connection_status, ConnectionStatus::Disconnected);
    assert_eq!(urbanfit.status, ClientStatus::Pending);
    assert!(urbanfit.last_sync.is_none());
}

#[test]
fn insights_cover_every_urgency() {
    let list = insights();
    assert_eq!(list.len(), 8);
    for urgency in Urgency::ALL {
        assert!(list.iter().any(|i| i.urgency == urgency), "missing {urgency:?}");
    }
}

#[test]
fn monthly_chart_profit_is_revenue_minus_expenses() {
    for point in monthly_chart() {
        assert!((point.revenue - point.expenses - point.profit).abs() < f64::EPSILON, "{}", point.month);
    }
}

#[test]
fn statements_mark_headers_and_totals() {
    let pnl = profit_and_loss();
    assert!(pnl[0].is_header);
    assert_eq!(pnl[0].indent, 0);
    assert_eq!(pnl[1].indent, 1);
    let net_income = pnl.last().unwrap();
    assert_eq!(net_income.label, "Net Income");
    assert!(net_income.is_total);
    assert!((net_income.current - 145_070.0).abs() < f64::EPSILON);
}

#[test]
fn balance_sheet_balances() {
    let rows = balance_sheet();
    let total = |label: &str| rows.iter().find(|r| r.label == label).unwrap().current;
    assert!((total("Total Assets") - total("Total Liabilities & Equity")).abs() < f64::EPSILON);
}

#[test]
fn cash_flow_ending_balance_matches_cash_position_metric() {
    let ending = cash_flow().last().unwrap().current;
    let cash_metric = metrics().into_iter().find(|m| m.title == "Cash Position").unwrap();
    assert!((ending - cash_metric.value).abs() < f64::EPSILON);
}
