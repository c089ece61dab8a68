//! Plain-text views of the aggregation results.

use pesaview_analytics::{
    CategoryBreakdownRow, Dashboard, DirectionTotal, MonthlyBucket, SummaryMetrics, TopCategory,
    WeekdayBucket,
};
use pesaview_core::{Direction, month_label};
use std::fmt::Write;

use crate::config::DisplaySection;
use crate::fmt::{abbreviate, money, percent};

pub fn summary(s: &SummaryMetrics, d: &DisplaySection) -> String {
    let mut out = String::new();
    let c = &d.currency;
    let _ = writeln!(out, "Total Inflow         {}", money(s.total_in, c));
    let _ = writeln!(out, "Total Outflow        {}", money(s.total_out, c));
    let _ = writeln!(out, "Net Flow             {}", money(s.net_flow, c));
    let _ = writeln!(out, "Total Transactions   {}", s.transaction_count);
    let _ = writeln!(out, "Average Transaction  {}", money(s.average_amount, c));
    match &s.top_category {
        Some(top) => {
            let _ = writeln!(
                out,
                "Top Spending         {} ({})",
                top.category,
                money(top.total_amount, c)
            );
        }
        None => {
            let _ = writeln!(out, "Top Spending         N/A");
        }
    }
    out
}

pub fn flows(rows: &[DirectionTotal], d: &DisplaySection) -> String {
    let mut out = String::new();
    for row in rows {
        let label = match row.direction {
            Direction::In => "Inflow",
            Direction::Out => "Outflow",
        };
        let _ = writeln!(
            out,
            "{:<8} {:>16}  ({} transactions)",
            label,
            money(row.total_amount, &d.currency),
            row.transaction_count
        );
    }
    out
}

pub fn categories(rows: &[CategoryBreakdownRow], d: &DisplaySection) -> String {
    let w = d.label_width;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<w$}  {:>14}  {:>5}  {:>14}  {:>6}",
        "Category", "Amount", "Txns", "Average", "Share"
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:<w$}  {:>14}  {:>5}  {:>14}  {:>6}",
            abbreviate(&row.category, w),
            money(row.total_amount, &d.currency),
            row.transaction_count,
            money(row.average_amount, &d.currency),
            percent(row.percent_of_total)
        );
    }
    out
}

pub fn top_categories(rows: &[TopCategory], d: &DisplaySection) -> String {
    let mut out = String::new();
    for top in rows {
        let _ = writeln!(
            out,
            "{}. [{}] {} ({}) {}",
            top.rank + 1,
            top.color,
            top.row.category,
            percent(top.row.percent_of_total),
            money(top.row.total_amount, &d.currency)
        );
    }
    out
}

pub fn monthly(rows: &[MonthlyBucket], d: &DisplaySection) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<9}  {:>14}  {:>14}  {:>14}  {:>5}",
        "Month", "Inflow", "Outflow", "Net", "Txns"
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:<9}  {:>14}  {:>14}  {:>14}  {:>5}",
            month_label(row.month_start),
            money(row.total_in, &d.currency),
            money(row.total_out, &d.currency),
            money(row.net(), &d.currency),
            row.transaction_count
        );
    }
    out
}

pub fn weekday(rows: &[WeekdayBucket], d: &DisplaySection) -> String {
    let mut out = String::new();
    for row in rows {
        let _ = writeln!(out, "{:<9}  {:>14}", row.name, money(row.total_out_amount, &d.currency));
    }
    out
}

pub fn dashboard(dash: &Dashboard, d: &DisplaySection) -> String {
    let mut out = String::new();
    if let Some((first, last)) = dash.period {
        let _ = writeln!(out, "# M-Pesa spending {} to {}\n", first, last);
    }
    let _ = writeln!(out, "## Key metrics\n\n{}", summary(&dash.summary, d));
    let _ = writeln!(out, "## Inflow vs outflow\n\n{}", flows(&dash.direction_totals, d));
    let _ = writeln!(out, "## Spending by category\n\n{}", categories(&dash.breakdown, d));
    let _ = writeln!(
        out,
        "## Top {} categories\n\n{}",
        dash.top_categories.len(),
        top_categories(&dash.top_categories, d)
    );
    let _ = writeln!(out, "## Monthly trend\n\n{}", monthly(&dash.monthly, d));
    let _ = write!(out, "## By day of week\n\n{}", weekday(&dash.weekday, d));
    out
}
