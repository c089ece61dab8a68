//! Transaction record types shared by the record source and the aggregation engine

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether money was received or spent
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    #[serde(rename = "IN")]
    In,
    #[serde(rename = "OUT")]
    Out,
}

impl Direction {
    /// Parse the literal statement label. Case-sensitive: only `IN` and `OUT` are accepted.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "IN" => Some(Direction::In),
            "OUT" => Some(Direction::Out),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Direction::In => "IN",
            Direction::Out => "OUT",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single validated statement line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionRecord {
    /// Day the transaction occurred
    pub date: NaiveDate,
    pub direction: Direction,
    /// Non-negative amount in the statement currency
    pub amount: f64,
    /// Human-readable description
    pub description: String,
    /// Original statement text, kept for auditing only
    pub raw_line: String,
    /// Upstream-assigned label, treated as an opaque key
    pub category: String,
}

impl TransactionRecord {
    /// Create a new TransactionRecord with an empty raw line
    pub fn new(
        date: NaiveDate,
        direction: Direction,
        amount: f64,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            date,
            direction,
            amount,
            description: description.into(),
            raw_line: String::new(),
            category: category.into(),
        }
    }

    pub fn with_raw_line(mut self, raw: impl Into<String>) -> Self {
        self.raw_line = raw.into();
        self
    }

    /// Returns true if this is money received
    pub fn is_inflow(&self) -> bool {
        self.direction == Direction::In
    }

    /// Returns true if this is money spent
    pub fn is_outflow(&self) -> bool {
        self.direction == Direction::Out
    }

    /// Records with a non-finite amount never take part in an aggregation.
    pub fn is_countable(&self) -> bool {
        self.amount.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_direction_labels() {
        assert_eq!(Direction::from_label("IN"), Some(Direction::In));
        assert_eq!(Direction::from_label("OUT"), Some(Direction::Out));
        assert_eq!(Direction::from_label("out"), None);
        assert_eq!(Direction::from_label(" IN"), None);
        assert_eq!(Direction::Out.to_string(), "OUT");
    }

    #[test]
    fn test_direction_serializes_as_statement_label() {
        let json = serde_json::to_string(&Direction::In).unwrap();
        assert_eq!(json, "\"IN\"");
        let back: Direction = serde_json::from_str("\"OUT\"").unwrap();
        assert_eq!(back, Direction::Out);
    }

    #[test]
    fn test_record_creation() {
        let date = day(2024, 6, 2);
        let record = TransactionRecord::new(date, Direction::Out, 300.0, "Naivas", "Groceries")
            .with_raw_line("QF12AB Paid to Naivas 300.00");
        assert!(record.is_outflow());
        assert!(!record.is_inflow());
        assert!(record.is_countable());
        assert_eq!(record.raw_line, "QF12AB Paid to Naivas 300.00");
    }

    #[test]
    fn test_nan_amount_is_not_countable() {
        let date = day(2024, 6, 2);
        let record = TransactionRecord::new(date, Direction::In, f64::NAN, "x", "Salary");
        assert!(!record.is_countable());
        let record = TransactionRecord::new(date, Direction::In, f64::INFINITY, "x", "Salary");
        assert!(!record.is_countable());
    }
}
