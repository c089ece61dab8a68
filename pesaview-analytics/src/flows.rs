//! Inflow vs outflow totals.

use pesaview_core::{Direction, TransactionRecord};
use serde::{Deserialize, Serialize};

/// Sum of all amounts sharing one direction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionTotal {
    pub direction: Direction,
    pub total_amount: f64,
    pub transaction_count: usize,
}

/// One row per direction present, in order of first appearance.
/// A direction with no records gets no row.
pub fn direction_totals(records: &[TransactionRecord]) -> Vec<DirectionTotal> {
    let mut totals: Vec<DirectionTotal> = Vec::with_capacity(2);

    for txn in records.iter().filter(|t| t.is_countable()) {
        match totals.iter_mut().find(|t| t.direction == txn.direction) {
            Some(row) => {
                row.total_amount += txn.amount;
                row.transaction_count += 1;
            }
            None => totals.push(DirectionTotal {
                direction: txn.direction,
                total_amount: txn.amount,
                transaction_count: 1,
            }),
        }
    }

    totals
}

/// Sum of countable amounts in one direction.
pub fn directional_sum(records: &[TransactionRecord], direction: Direction) -> f64 {
    records
        .iter()
        .filter(|t| t.is_countable() && t.direction == direction)
        .map(|t| t.amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::txn;

    #[test]
    fn test_totals_per_direction() {
        let records = vec![
            txn("2024-06-02", Direction::Out, 300.0, "Groceries"),
            txn("2024-06-01", Direction::In, 1000.0, "Salary"),
            txn("2024-06-03", Direction::Out, 200.0, "Transport"),
        ];
        let totals = direction_totals(&records);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].direction, Direction::Out);
        assert_eq!(totals[0].total_amount, 500.0);
        assert_eq!(totals[0].transaction_count, 2);
        assert_eq!(totals[1].direction, Direction::In);
        assert_eq!(totals[1].total_amount, 1000.0);
    }

    #[test]
    fn test_absent_direction_has_no_row() {
        let records = vec![txn("2024-06-01", Direction::In, 10.0, "Salary")];
        let totals = direction_totals(&records);
        assert_eq!(totals.len(), 1);
        assert!(totals.iter().all(|t| t.direction == Direction::In));
    }

    #[test]
    fn test_total_is_conserved() {
        let records = vec![
            txn("2024-06-01", Direction::In, 1000.25, "Salary"),
            txn("2024-06-02", Direction::Out, 300.5, "Groceries"),
            txn("2024-07-09", Direction::Out, 49.25, "Airtime"),
            txn("2024-07-10", Direction::In, 12.0, "Refund"),
        ];
        let by_direction: f64 = direction_totals(&records).iter().map(|t| t.total_amount).sum();
        let overall: f64 = records.iter().map(|t| t.amount).sum();
        assert!((by_direction - overall).abs() < 1e-9);
    }

    #[test]
    fn test_non_finite_amounts_excluded() {
        let records = vec![
            txn("2024-06-01", Direction::Out, f64::NAN, "Misc"),
            txn("2024-06-01", Direction::Out, 5.0, "Misc"),
        ];
        let totals = direction_totals(&records);
        assert_eq!(totals[0].total_amount, 5.0);
        assert_eq!(totals[0].transaction_count, 1);
        assert_eq!(directional_sum(&records, Direction::Out), 5.0);
    }

    #[test]
    fn test_empty_input() {
        assert!(direction_totals(&[]).is_empty());
        assert_eq!(directional_sum(&[], Direction::In), 0.0);
    }
}
