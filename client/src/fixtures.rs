//! Bundled demo data: clients, dashboard metrics, trend series, insights and
//! the three financial statements for the default client.

#[cfg(test)]
#[path = "fixtures_test.rs"]
mod fixtures_test;

use crate::state::clients::{Client, ClientStatus, ConnectionStatus};
use crate::state::financials::{ChartPoint, MetricCard, MetricFormat, ReportLineItem, Trend};
use crate::state::insights::{Insight, Urgency};

const INSIGHT_CREATED_AT: &str = "2026-02-16T06:30:00Z";

#[allow(clippy::too_many_arguments)]
fn client(
    id: &str,
    name: &str,
    email: &str,
    company_name: &str,
    industry: &str,
    phone: &str,
    status: ClientStatus,
    connection_status: ConnectionStatus,
    last_sync: &str,
    created_at: &str,
) -> Client {
    Client {
        id: id.to_owned(),
        name: name.to_owned(),
        email: email.to_owned(),
        company_name: company_name.to_owned(),
        industry: industry.to_owned(),
        phone: phone.to_owned(),
        status,
        connection_status,
        last_sync: (!last_sync.is_empty()).then(|| last_sync.to_owned()),
        created_at: created_at.to_owned(),
    }
}

/// Six demo clients in display order; the first is the default selection.
#[must_use]
pub fn clients() -> Vec<Client> {
    use ClientStatus::{Active, Pending};
    use ConnectionStatus::{Connected, Disconnected, Expired};
    vec![
        client("1", "Sarah Mitchell", "sarah@greenleaf.com", "GreenLeaf Landscaping", "Services", "(555) 123-4567", Active, Connected, "2026-02-16T06:30:00Z", "2025-09-15"),
        client("2", "James Rodriguez", "james@techpulse.io", "TechPulse Solutions", "Technology", "(555) 234-5678", Active, Connected, "2026-02-16T05:45:00Z", "2025-10-01"),
        client("3", "Emily Chen", "emily@blossomcafe.com", "Blossom Café & Bakery", "Food & Beverage", "(555) 345-6789", Active, Expired, "2026-02-10T12:00:00Z", "2025-11-20"),
        client("4", "Michael Torres", "mike@precisionauto.com", "Precision Auto Works", "Automotive", "(555) 456-7890", Active, Connected, "2026-02-16T04:15:00Z", "2025-08-10"),
        client("5", "Lisa Park", "lisa@urbanfit.com", "UrbanFit Studios", "Health & Fitness", "(555) 567-8901", Pending, Disconnected, "", "2026-01-05"),
        client("6", "David Okafor", "david@brightpath.edu", "BrightPath Tutoring", "Education", "(555) 678-9012", Active, Connected, "2026-02-15T22:00:00Z", "2025-12-01"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn metric(
    id: &str,
    title: &str,
    value: f64,
    previous_value: f64,
    format: MetricFormat,
    trend: Trend,
    trend_is_good: bool,
    icon: &str,
    color: &str,
) -> MetricCard {
    MetricCard {
        id: id.to_owned(),
        title: title.to_owned(),
        value,
        previous_value,
        format,
        trend,
        trend_is_good,
        icon: icon.to_owned(),
        color: color.to_owned(),
    }
}

/// Headline KPIs for the default client.
#[must_use]
pub fn metrics() -> Vec<MetricCard> {
    use MetricFormat::{Currency, Percentage};
    use Trend::Up;
    vec![
        metric("1", "Total Revenue", 487_250.0, 435_800.0, Currency, Up, true, "dollar-sign", "emerald"),
        metric("2", "Total Expenses", 342_180.0, 318_500.0, Currency, Up, false, "credit-card", "red"),
        metric("3", "Net Profit", 145_070.0, 117_300.0, Currency, Up, true, "trending-up", "blue"),
        metric("4", "Profit Margin", 29.8, 26.9, Percentage, Up, true, "pie-chart", "violet"),
        metric("5", "Cash Position", 128_450.0, 95_200.0, Currency, Up, true, "wallet", "teal"),
        metric("6", "Accounts Receivable", 67_800.0, 54_200.0, Currency, Up, false, "file-text", "amber"),
    ]
}

/// Trailing twelve months, oldest first.
#[must_use]
pub fn monthly_chart() -> Vec<ChartPoint> {
    const ROWS: [(&str, f64, f64, f64, f64); 12] = [
        ("Mar", 35_200.0, 28_100.0, 7_100.0, 62_000.0),
        ("Apr", 38_500.0, 29_800.0, 8_700.0, 68_500.0),
        ("May", 42_100.0, 31_200.0, 10_900.0, 75_200.0),
        ("Jun", 45_800.0, 33_500.0, 12_300.0, 82_100.0),
        ("Jul", 48_200.0, 34_100.0, 14_100.0, 89_500.0),
        ("Aug", 46_500.0, 33_800.0, 12_700.0, 95_800.0),
        ("Sep", 43_200.0, 32_200.0, 11_000.0, 101_200.0),
        ("Oct", 39_800.0, 30_500.0, 9_300.0, 105_800.0),
        ("Nov", 36_500.0, 28_900.0, 7_600.0, 110_200.0),
        ("Dec", 34_200.0, 27_500.0, 6_700.0, 115_400.0),
        ("Jan", 37_800.0, 29_200.0, 8_600.0, 121_800.0),
        ("Feb", 39_450.0, 30_380.0, 9_070.0, 128_450.0),
    ];
    ROWS.iter()
        .map(|&(month, revenue, expenses, profit, cash)| ChartPoint {
            month: month.to_owned(),
            revenue,
            expenses,
            profit,
            cash,
        })
        .collect()
}

fn insight(
    id: &str,
    title: &str,
    description: &str,
    urgency: Urgency,
    category: &str,
    metric: &str,
    metric_value: &str,
) -> Insight {
    Insight {
        id: id.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        urgency,
        category: category.to_owned(),
        metric: Some(metric.to_owned()),
        metric_value: Some(metric_value.to_owned()),
        created_at: INSIGHT_CREATED_AT.to_owned(),
    }
}

/// Cached insights shown before any refresh.
#[must_use]
pub fn insights() -> Vec<Insight> {
    use Urgency::{ActionRequired, Info, Positive, Watch};
    vec![
        insight(
            "1",
            "Revenue Growth Accelerating",
            "Your revenue increased 11.8% compared to the same period last year, outpacing industry average of 7.2%. The strongest growth came from commercial landscaping contracts, which grew 18.3% year-over-year.",
            Positive,
            "Revenue",
            "+11.8%",
            "YoY Growth",
        ),
        insight(
            "2",
            "Operating Expenses Rising Faster Than Revenue",
            "Operating expenses grew 7.4% this quarter while revenue grew 5.2%. Primary drivers are labor costs (+12.1%) and fuel expenses (+8.7%). Consider reviewing staffing efficiency and fuel procurement strategies.",
            ActionRequired,
            "Expenses",
            "+7.4%",
            "Expense Growth",
        ),
        insight(
            "3",
            "Cash Runway Healthy at 6.4 Months",
            "Based on current burn rate of $20,070/month and cash reserves of $128,450, your estimated cash runway is 6.4 months. This is above the recommended 3-month minimum but below the 9-month ideal buffer.",
            Info,
            "Cash Flow",
            "6.4 mo",
            "Cash Runway",
        ),
        insight(
            "4",
            "Accounts Receivable Aging Concern",
            "A/R increased 25.1% ($13,600) this quarter. 32% of outstanding invoices are over 60 days past due, up from 18% last quarter. Recommend implementing stricter collection procedures for accounts over 45 days.",
            ActionRequired,
            "Collections",
            "32%",
            "Over 60 Days",
        ),
        insight(
            "5",
            "Profit Margins Improving",
            "Net profit margin improved from 26.9% to 29.8% over the trailing 12 months. Gross margin expansion was driven by better material procurement pricing and improved project estimation accuracy.",
            Positive,
            "Profitability",
            "29.8%",
            "Net Margin",
        ),
        insight(
            "6",
            "Seasonal Revenue Pattern Detected",
            "Revenue follows a predictable seasonal curve peaking in June-August. Consider building a 2-month cash reserve before the November-February slow period to maintain operations without stress.",
            Watch,
            "Planning",
            "Jun-Aug",
            "Peak Season",
        ),
        insight(
            "7",
            "Equipment Depreciation Impact",
            "Equipment depreciation accounts for 8.2% of total expenses. Two major assets will be fully depreciated by Q3 2026, which will reduce reported expenses but may require replacement capital planning.",
            Watch,
            "Assets",
            "8.2%",
            "Of Expenses",
        ),
        insight(
            "8",
            "Tax Liability Estimate Available",
            "Based on current YTD income of $145,070 and applicable deductions, estimated quarterly tax liability is approximately $14,200. Ensure adequate reserves are set aside before the April 15 deadline.",
            Info,
            "Tax",
            "$14.2K",
            "Est. Quarterly",
        ),
    ]
}

/// Row kind used by the compact statement tables below.
#[derive(Clone, Copy)]
enum Row {
    Header,
    Line,
    Total,
}

fn statement(rows: &[(Row, &str, f64, f64)]) -> Vec<ReportLineItem> {
    rows.iter()
        .map(|&(row, label, current, previous)| ReportLineItem {
            label: label.to_owned(),
            current,
            previous,
            is_header: matches!(row, Row::Header),
            is_total: matches!(row, Row::Total),
            indent: u8::from(matches!(row, Row::Line)),
        })
        .collect()
}

/// Profit & loss statement.
#[must_use]
pub fn profit_and_loss() -> Vec<ReportLineItem> {
    use Row::{Header as H, Line as L, Total as T};
    statement(&[
        (H, "Income", 0.0, 0.0),
        (L, "Landscaping Services", 312_500.0, 285_200.0),
        (L, "Maintenance Contracts", 98_750.0, 87_600.0),
        (L, "Design Consulting", 45_200.0, 38_400.0),
        (L, "Hardscape Installation", 28_300.0, 22_100.0),
        (L, "Other Income", 2_500.0, 2_500.0),
        (T, "Total Income", 487_250.0, 435_800.0),
        (H, "Cost of Goods Sold", 0.0, 0.0),
        (L, "Materials & Supplies", 89_200.0, 82_100.0),
        (L, "Subcontractor Costs", 45_600.0, 38_900.0),
        (L, "Equipment Rental", 12_800.0, 11_200.0),
        (T, "Total COGS", 147_600.0, 132_200.0),
        (T, "Gross Profit", 339_650.0, 303_600.0),
        (H, "Operating Expenses", 0.0, 0.0),
        (L, "Payroll & Benefits", 118_500.0, 105_600.0),
        (L, "Vehicle & Fuel", 24_800.0, 22_800.0),
        (L, "Insurance", 15_200.0, 14_800.0),
        (L, "Rent & Utilities", 12_600.0, 12_200.0),
        (L, "Marketing & Advertising", 8_500.0, 7_200.0),
        (L, "Office & Admin", 6_200.0, 5_800.0),
        (L, "Depreciation", 5_780.0, 5_400.0),
        (L, "Professional Services", 3_000.0, 2_500.0),
        (T, "Total Operating Expenses", 194_580.0, 176_300.0),
        (T, "Net Operating Income", 145_070.0, 127_300.0),
        (H, "Other Income/Expense", 0.0, 0.0),
        (L, "Interest Income", 1_200.0, 800.0),
        (L, "Interest Expense", -1_200.0, -1_500.0),
        (T, "Net Other Income", 0.0, -700.0),
        (T, "Net Income", 145_070.0, 126_600.0),
    ])
}

/// Balance sheet.
#[must_use]
pub fn balance_sheet() -> Vec<ReportLineItem> {
    use Row::{Header as H, Line as L, Total as T};
    statement(&[
        (H, "Assets", 0.0, 0.0),
        (H, "Current Assets", 0.0, 0.0),
        (L, "Checking Account", 98_450.0, 72_800.0),
        (L, "Savings Account", 30_000.0, 22_400.0),
        (L, "Accounts Receivable", 67_800.0, 54_200.0),
        (L, "Inventory", 12_500.0, 10_800.0),
        (L, "Prepaid Expenses", 4_200.0, 3_800.0),
        (T, "Total Current Assets", 212_950.0, 164_000.0),
        (H, "Fixed Assets", 0.0, 0.0),
        (L, "Vehicles", 85_000.0, 85_000.0),
        (L, "Equipment", 42_000.0, 42_000.0),
        (L, "Less: Accumulated Depreciation", -28_500.0, -22_720.0),
        (T, "Total Fixed Assets", 98_500.0, 104_280.0),
        (T, "Total Assets", 311_450.0, 268_280.0),
        (H, "Liabilities", 0.0, 0.0),
        (H, "Current Liabilities", 0.0, 0.0),
        (L, "Accounts Payable", 28_500.0, 24_200.0),
        (L, "Credit Card Payable", 8_200.0, 6_800.0),
        (L, "Payroll Liabilities", 12_400.0, 11_200.0),
        (L, "Sales Tax Payable", 3_200.0, 2_800.0),
        (T, "Total Current Liabilities", 52_300.0, 45_000.0),
        (H, "Long-Term Liabilities", 0.0, 0.0),
        (L, "Vehicle Loan", 32_000.0, 38_000.0),
        (L, "Equipment Loan", 15_000.0, 20_000.0),
        (T, "Total Long-Term Liabilities", 47_000.0, 58_000.0),
        (T, "Total Liabilities", 99_300.0, 103_000.0),
        (H, "Equity", 0.0, 0.0),
        (L, "Owner's Equity", 67_080.0, 38_680.0),
        (L, "Retained Earnings", 145_070.0, 126_600.0),
        (T, "Total Equity", 212_150.0, 165_280.0),
        (T, "Total Liabilities & Equity", 311_450.0, 268_280.0),
    ])
}

/// Cash flow statement.
#[must_use]
pub fn cash_flow() -> Vec<ReportLineItem> {
    use Row::{Header as H, Line as L, Total as T};
    statement(&[
        (H, "Operating Activities", 0.0, 0.0),
        (L, "Net Income", 145_070.0, 126_600.0),
        (L, "Depreciation & Amortization", 5_780.0, 5_400.0),
        (L, "Change in Accounts Receivable", -13_600.0, -8_200.0),
        (L, "Change in Inventory", -1_700.0, -1_200.0),
        (L, "Change in Accounts Payable", 4_300.0, 3_100.0),
        (L, "Change in Other Liabilities", 4_800.0, 2_800.0),
        (T, "Net Cash from Operations", 144_650.0, 128_500.0),
        (H, "Investing Activities", 0.0, 0.0),
        (L, "Equipment Purchases", 0.0, -15_000.0),
        (L, "Vehicle Purchases", 0.0, 0.0),
        (T, "Net Cash from Investing", 0.0, -15_000.0),
        (H, "Financing Activities", 0.0, 0.0),
        (L, "Loan Payments", -11_000.0, -11_000.0),
        (L, "Owner's Draws", -100_400.0, -85_000.0),
        (T, "Net Cash from Financing", -111_400.0, -96_000.0),
        (T, "Net Change in Cash", 33_250.0, 17_500.0),
        (L, "Beginning Cash Balance", 95_200.0, 77_700.0),
        (T, "Ending Cash Balance", 128_450.0, 95_200.0),
    ])
}
