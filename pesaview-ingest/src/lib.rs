//! pesaview-ingest: the record source. Fetches M-Pesa CSV exports and validates
//! each row into a typed [`pesaview_core::TransactionRecord`].

pub mod error;
pub mod parser;
pub mod source;
pub mod types;

pub use error::LoadError;
pub use parser::{RowValidator, parse_transactions};
pub use source::{RecordSource, load_transactions};
pub use types::{LoadReport, Loaded, RawRow, SkipReason};
