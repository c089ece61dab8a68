//! Spending breakdown by category, and top-N selection with colours.

use pesaview_core::{Palette, TransactionRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Aggregate of all OUT records sharing a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdownRow {
    pub category: String,
    pub total_amount: f64,
    pub transaction_count: usize,
    pub average_amount: f64,
    /// Share of total OUT spending, rounded to one decimal place
    pub percent_of_total: f64,
}

/// A breakdown row with its display rank and colour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopCategory {
    /// 0-based position in the sorted breakdown
    pub rank: usize,
    pub color_index: usize,
    pub color: String,
    #[serde(flatten)]
    pub row: CategoryBreakdownRow,
}

/// Group OUT records by category, sorted by total descending.
///
/// Equal totals keep the order in which categories first appear among the
/// OUT records. Percentages are relative to all OUT spending, not just the
/// rows kept after truncating to `top_n`.
pub fn category_breakdown(
    records: &[TransactionRecord],
    top_n: usize,
) -> Vec<CategoryBreakdownRow> {
    // (category, total, count) in first-appearance order
    let mut groups: Vec<(&str, f64, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for txn in records.iter().filter(|t| t.is_outflow() && t.is_countable()) {
        let slot = *index.entry(txn.category.as_str()).or_insert_with(|| {
            groups.push((txn.category.as_str(), 0.0, 0));
            groups.len() - 1
        });
        let group = &mut groups[slot];
        group.1 += txn.amount;
        group.2 += 1;
    }

    let total_out: f64 = groups.iter().map(|(_, total, _)| total).sum();

    let mut rows: Vec<CategoryBreakdownRow> = groups
        .into_iter()
        .map(|(category, total, count)| CategoryBreakdownRow {
            category: category.to_string(),
            total_amount: total,
            transaction_count: count,
            average_amount: total / count as f64,
            percent_of_total: percent_of(total, total_out),
        })
        .collect();

    // sort_by is stable, so ties stay in first-appearance order
    rows.sort_by(|a, b| b.total_amount.total_cmp(&a.total_amount));
    rows.truncate(top_n);
    rows
}

/// `part / whole * 100`, one decimal place; 0 when `whole` is 0.
fn percent_of(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        (part / whole * 1000.0).round() / 10.0
    } else {
        0.0
    }
}

/// Take the first `n` rows of an already sorted breakdown and attach rank and colour.
pub fn assign_top_categories(
    breakdown: &[CategoryBreakdownRow],
    n: usize,
    palette: &Palette,
) -> Vec<TopCategory> {
    breakdown
        .iter()
        .take(n)
        .enumerate()
        .map(|(rank, row)| TopCategory {
            rank,
            color_index: palette.index_for(rank),
            color: palette.color_for(rank).to_string(),
            row: row.clone(),
        })
        .collect()
}
