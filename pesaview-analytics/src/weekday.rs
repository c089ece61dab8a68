//! Spending by day of week.

use chrono::{Datelike, Weekday};
use pesaview_core::{TransactionRecord, WEEK, weekday_name};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekdayBucket {
    pub weekday: Weekday,
    /// English day name, e.g. "Monday"
    pub name: String,
    pub total_out_amount: f64,
    pub transaction_count: usize,
}

/// Always seven rows, Monday through Sunday. Days with no spending are 0.
pub fn weekday_buckets(records: &[TransactionRecord]) -> Vec<WeekdayBucket> {
    let mut totals = [0.0_f64; 7];
    let mut counts = [0_usize; 7];

    for txn in records.iter().filter(|t| t.is_outflow() && t.is_countable()) {
        let slot = txn.date.weekday().num_days_from_monday() as usize;
        totals[slot] += txn.amount;
        counts[slot] += 1;
    }

    WEEK.iter()
        .enumerate()
        .map(|(i, day)| WeekdayBucket {
            weekday: *day,
            name: weekday_name(*day).to_string(),
            total_out_amount: totals[i],
            transaction_count: counts[i],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::txn;
    use pesaview_core::Direction;

    const NAMES: [&str; 7] = [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ];

    #[test]
    fn test_seven_rows_for_empty_input() {
        let rows = weekday_buckets(&[]);
        assert_eq!(rows.len(), 7);
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, NAMES);
        assert!(rows.iter().all(|r| r.total_out_amount == 0.0));
    }

    #[test]
    fn test_sums_outflows_per_day() {
        // 2024-06-01 is a Saturday, 2024-06-03 a Monday
        let records = vec![
            txn("2024-06-01", Direction::Out, 120.0, "Food"),
            txn("2024-06-08", Direction::Out, 30.0, "Food"),
            txn("2024-06-03", Direction::Out, 50.0, "Transport"),
            txn("2024-06-04", Direction::In, 900.0, "Salary"),
        ];
        let rows = weekday_buckets(&records);
        assert_eq!(rows.len(), 7);
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, NAMES);

        assert_eq!(rows[0].weekday, Weekday::Mon);
        assert_eq!(rows[0].total_out_amount, 50.0);
        assert_eq!(rows[1].total_out_amount, 0.0);
        assert_eq!(rows[5].weekday, Weekday::Sat);
        assert_eq!(rows[5].total_out_amount, 150.0);
        assert_eq!(rows[5].transaction_count, 2);
        assert_eq!(rows[6].total_out_amount, 0.0);
    }
}
