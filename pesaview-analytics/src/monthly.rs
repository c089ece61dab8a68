//! Calendar-month rollups for the trend view.

use chrono::NaiveDate;
use pesaview_core::{Direction, TransactionRecord, month_start};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBucket {
    /// First day of the calendar month
    pub month_start: NaiveDate,
    pub total_in: f64,
    pub total_out: f64,
    /// `total_in + total_out`
    pub total: f64,
    pub transaction_count: usize,
}

impl MonthlyBucket {
    fn empty(month_start: NaiveDate) -> Self {
        Self {
            month_start,
            total_in: 0.0,
            total_out: 0.0,
            total: 0.0,
            transaction_count: 0,
        }
    }

    pub fn net(&self) -> f64 {
        self.total_in - self.total_out
    }
}

/// One bucket per month present in the data, oldest first.
pub fn monthly_buckets(records: &[TransactionRecord]) -> Vec<MonthlyBucket> {
    let mut buckets: BTreeMap<NaiveDate, MonthlyBucket> = BTreeMap::new();

    for txn in records.iter().filter(|t| t.is_countable()) {
        let Some(key) = month_start(txn.date) else {
            continue;
        };
        let bucket = buckets.entry(key).or_insert_with(|| MonthlyBucket::empty(key));
        match txn.direction {
            Direction::In => bucket.total_in += txn.amount,
            Direction::Out => bucket.total_out += txn.amount,
        }
        bucket.total += txn.amount;
        bucket.transaction_count += 1;
    }

    buckets.into_values().collect()
}
