//! Headline metrics for the whole snapshot.

use chrono::NaiveDate;
use pesaview_core::{Direction, TransactionRecord};
use serde::{Deserialize, Serialize};

use crate::categories::{CategoryBreakdownRow, category_breakdown};
use crate::flows::directional_sum;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    pub total_in: f64,
    pub total_out: f64,
    /// `total_in - total_out`, negative when spending exceeds income
    pub net_flow: f64,
    pub transaction_count: usize,
    /// Mean amount over all records regardless of direction, 0 when there are none
    pub average_amount: f64,
    /// Highest-spending category; `None` when there are no OUT records
    pub top_category: Option<CategoryBreakdownRow>,
}

pub fn summary_metrics(records: &[TransactionRecord]) -> SummaryMetrics {
    let total_in = directional_sum(records, Direction::In);
    let total_out = directional_sum(records, Direction::Out);

    let (sum, count) = records
        .iter()
        .filter(|t| t.is_countable())
        .fold((0.0, 0usize), |(sum, count), t| (sum + t.amount, count + 1));
    let average_amount = if count > 0 { sum / count as f64 } else { 0.0 };

    SummaryMetrics {
        total_in,
        total_out,
        net_flow: total_in - total_out,
        transaction_count: count,
        average_amount,
        top_category: category_breakdown(records, 1).into_iter().next(),
    }
}

/// Earliest and latest dates among countable records, if any.
pub fn date_range(records: &[TransactionRecord]) -> Option<(NaiveDate, NaiveDate)> {
    let mut dates = records.iter().filter(|t| t.is_countable()).map(|t| t.date);
    let first = dates.next()?;
    Some(dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d))))
}
