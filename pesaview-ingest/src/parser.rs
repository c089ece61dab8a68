//! Parse M-Pesa CSV exports into validated transaction records.
//!
//! Expected header (column order does not matter):
//!   date,direction,clean_amount,description,raw,category
//!
//! Rows that fail validation are dropped and counted in the [`LoadReport`];
//! only framing errors and missing header columns fail the whole read.

use chrono::NaiveDate;
use pesaview_core::{Direction, TransactionRecord};
use regex::Regex;
use std::io::Read;

use crate::error::{LoadError, Result};
use crate::types::{LoadReport, Loaded, REQUIRED_COLUMNS, RawRow, SkipReason};

/// Turns untyped rows into typed records.
pub struct RowValidator {
    date_re: Regex,
}

impl RowValidator {
    pub fn new() -> Result<Self> {
        // ISO calendar date, optionally followed by a time part we ignore
        let date_re = Regex::new(r"^(?P<ymd>\d{4}-\d{2}-\d{2})(?:[T ].*)?$")?;
        Ok(Self { date_re })
    }

    pub fn parse_date(&self, s: &str) -> Option<NaiveDate> {
        let caps = self.date_re.captures(s.trim())?;
        NaiveDate::parse_from_str(&caps["ymd"], "%Y-%m-%d").ok()
    }

    pub fn validate(&self, row: RawRow) -> std::result::Result<TransactionRecord, SkipReason> {
        let date_str = non_empty(row.date).ok_or(SkipReason::MissingDate)?;
        let date = self.parse_date(&date_str).ok_or(SkipReason::InvalidDate)?;

        let direction = non_empty(row.direction)
            .and_then(|d| Direction::from_label(&d))
            .ok_or(SkipReason::InvalidDirection)?;

        let amount = non_empty(row.clean_amount)
            .and_then(|a| a.parse::<f64>().ok())
            .filter(|a| a.is_finite() && *a >= 0.0)
            .ok_or(SkipReason::InvalidAmount)?;

        let category = non_empty(row.category).ok_or(SkipReason::MissingCategory)?;

        Ok(TransactionRecord {
            date,
            direction,
            amount,
            description: row.description.unwrap_or_default().trim().to_string(),
            raw_line: row.raw.unwrap_or_default().trim().to_string(),
            category,
        })
    }
}

fn non_empty(field: Option<String>) -> Option<String> {
    field
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Parse CSV text from any reader, returning every valid record in file order.
pub fn parse_transactions<R: Read>(reader: R) -> Result<Loaded> {
    let validator = RowValidator::new()?;
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column.to_string()));
        }
    }

    let mut records = Vec::new();
    let mut report = LoadReport::default();

    for result in rdr.records() {
        let record = result?;
        report.rows_read += 1;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let row: RawRow = match record.deserialize(Some(&headers)) {
            Ok(r) => r,
            Err(e) => {
                tracing::debug!(line, error = %e, "skipping unreadable row");
                report.record_skip(SkipReason::Unreadable);
                continue;
            }
        };

        match validator.validate(row) {
            Ok(txn) => records.push(txn),
            Err(reason) => {
                tracing::debug!(line, %reason, "skipping malformed row");
                report.record_skip(reason);
            }
        }
    }

    if report.skipped_total() > 0 {
        tracing::warn!(
            skipped = report.skipped_total(),
            rows = report.rows_read,
            "dropped malformed rows"
        );
    }

    Ok(Loaded { records, report })
}
