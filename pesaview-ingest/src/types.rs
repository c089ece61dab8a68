use pesaview_core::TransactionRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Columns every export must carry.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "date",
    "direction",
    "clean_amount",
    "description",
    "raw",
    "category",
];

/// One CSV row before validation. Every field is optional so that a bad row
/// can be reported instead of aborting the whole file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawRow {
    pub date: Option<String>,
    pub direction: Option<String>,
    pub clean_amount: Option<String>,
    pub description: Option<String>,
    pub raw: Option<String>,
    pub category: Option<String>,
}

/// Why a row was left out of the snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipReason {
    MissingDate,
    InvalidDate,
    InvalidDirection,
    InvalidAmount,
    MissingCategory,
    Unreadable,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SkipReason::MissingDate => "missing date",
            SkipReason::InvalidDate => "invalid date",
            SkipReason::InvalidDirection => "invalid direction",
            SkipReason::InvalidAmount => "invalid amount",
            SkipReason::MissingCategory => "missing category",
            SkipReason::Unreadable => "unreadable row",
        };
        f.write_str(s)
    }
}

/// Row accounting for a single load
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    /// Data rows seen (header excluded)
    pub rows_read: usize,
    pub skipped: BTreeMap<SkipReason, usize>,
}

impl LoadReport {
    pub fn record_skip(&mut self, reason: SkipReason) {
        *self.skipped.entry(reason).or_insert(0) += 1;
    }

    pub fn skipped_total(&self) -> usize {
        self.skipped.values().sum()
    }

    pub fn accepted(&self) -> usize {
        self.rows_read - self.skipped_total()
    }
}

/// A fully materialised snapshot plus its load accounting
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded {
    pub records: Vec<TransactionRecord>,
    pub report: LoadReport,
}
