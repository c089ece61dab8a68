//! Every view of the dashboard built from one snapshot.
//!
//! The category breakdown is sorted once and sliced for both the top-3 side
//! panel and the top-10 pie, so the two always agree on order and totals.

use chrono::NaiveDate;
use pesaview_core::{Palette, TransactionRecord};
use serde::{Deserialize, Serialize};

use crate::categories::{
    CategoryBreakdownRow, TopCategory, assign_top_categories, category_breakdown,
};
use crate::flows::{DirectionTotal, direction_totals};
use crate::monthly::{MonthlyBucket, monthly_buckets};
use crate::summary::{SummaryMetrics, date_range, summary_metrics};
use crate::weekday::{WeekdayBucket, weekday_buckets};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardOptions {
    /// Rows kept in the full category breakdown
    pub breakdown_limit: usize,
    /// Rows in the top-categories side panel
    pub summary_top: usize,
    pub palette: Palette,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            breakdown_limit: 10,
            summary_top: 3,
            palette: Palette::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub period: Option<(NaiveDate, NaiveDate)>,
    pub summary: SummaryMetrics,
    pub direction_totals: Vec<DirectionTotal>,
    pub breakdown: Vec<CategoryBreakdownRow>,
    /// Top categories for the side panel
    pub top_categories: Vec<TopCategory>,
    /// Coloured rows for the category chart
    pub pie_categories: Vec<TopCategory>,
    pub monthly: Vec<MonthlyBucket>,
    pub weekday: Vec<WeekdayBucket>,
}

impl Dashboard {
    pub fn build(records: &[TransactionRecord], options: &DashboardOptions) -> Self {
        let limit = options.breakdown_limit.max(options.summary_top);
        let sorted = category_breakdown(records, limit);

        let top_categories = assign_top_categories(&sorted, options.summary_top, &options.palette);
        let pie_categories =
            assign_top_categories(&sorted, options.breakdown_limit, &options.palette);
        let breakdown: Vec<_> = sorted.into_iter().take(options.breakdown_limit).collect();

        Self {
            period: date_range(records),
            summary: summary_metrics(records),
            direction_totals: direction_totals(records),
            breakdown,
            top_categories,
            pie_categories,
            monthly: monthly_buckets(records),
            weekday: weekday_buckets(records),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.summary.transaction_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{scenario, txn};
    use pesaview_core::Direction;

    #[test]
    fn test_build_from_scenario() {
        let dash = Dashboard::build(&scenario(), &DashboardOptions::default());
        assert!(!dash.is_empty());
        assert_eq!(dash.summary.transaction_count, 3);
        assert_eq!(dash.direction_totals.len(), 2);
        assert_eq!(dash.breakdown.len(), 2);
        assert_eq!(dash.top_categories.len(), 2);
        assert_eq!(dash.pie_categories.len(), 2);
        assert_eq!(dash.monthly.len(), 1);
        assert_eq!(dash.weekday.len(), 7);
        assert_eq!(dash.top_categories[0].color, "#3b82f6");
    }

    #[test]
    fn test_side_panel_agrees_with_pie() {
        let records: Vec<_> = (0..15)
            .map(|i| {
                let amount = (i * 7 % 11) as f64 + 1.0;
                txn("2024-06-01", Direction::Out, amount, &format!("Cat{i}"))
            })
            .collect();
        let dash = Dashboard::build(&records, &DashboardOptions::default());
        assert_eq!(dash.pie_categories.len(), 10);
        assert_eq!(dash.top_categories.len(), 3);
        assert_eq!(&dash.pie_categories[..3], &dash.top_categories[..]);
        assert_eq!(dash.breakdown[0], dash.top_categories[0].row);
        assert_eq!(dash.summary.top_category.as_ref(), Some(&dash.breakdown[0]));
    }

    #[test]
    fn test_summary_top_larger_than_breakdown_limit() {
        let records: Vec<_> = (0..6)
            .map(|i| txn("2024-06-01", Direction::Out, 100.0 - i as f64, &format!("Cat{i}")))
            .collect();
        let options = DashboardOptions {
            breakdown_limit: 2,
            summary_top: 4,
            ..DashboardOptions::default()
        };
        let dash = Dashboard::build(&records, &options);
        assert_eq!(dash.breakdown.len(), 2);
        assert_eq!(dash.pie_categories.len(), 2);
        assert_eq!(dash.top_categories.len(), 4);
    }

    #[test]
    fn test_period_skips_non_finite_records() {
        let mut records = scenario();
        records.push(txn("2030-01-01", Direction::Out, f64::NAN, "Ghost"));
        let dash = Dashboard::build(&records, &DashboardOptions::default());
        let june = |d| NaiveDate::from_ymd_opt(2024, 6, d).unwrap();
        assert_eq!(dash.period, Some((june(1), june(3))));
        assert_eq!(dash.summary.transaction_count, 3);
    }

    #[test]
    fn test_empty_dashboard() {
        let dash = Dashboard::build(&[], &DashboardOptions::default());
        assert!(dash.is_empty());
        assert_eq!(dash.period, None);
        assert!(dash.breakdown.is_empty());
        assert!(dash.top_categories.is_empty());
        assert!(dash.monthly.is_empty());
        assert!(dash.direction_totals.is_empty());
        assert_eq!(dash.weekday.len(), 7);
        assert!(dash.summary.top_category.is_none());
    }

    #[test]
    fn test_serializes_to_json() {
        let dash = Dashboard::build(&scenario(), &DashboardOptions::default());
        let json = serde_json::to_value(&dash).unwrap();
        assert_eq!(json["summary"]["net_flow"], 500.0);
        assert_eq!(json["direction_totals"][0]["direction"], "IN");
        assert_eq!(json["top_categories"][0]["category"], "Groceries");
        assert_eq!(json["top_categories"][0]["rank"], 0);
        assert_eq!(json["monthly"][0]["month_start"], "2024-06-01");
    }
}
