//! pesaview-core: transaction record types, colour palette and calendar helpers

pub mod calendar;
pub mod palette;
pub mod record;

pub use calendar::{WEEK, month_label, month_start, weekday_name};
pub use palette::{DEFAULT_COLORS, Palette};
pub use record::{Direction, TransactionRecord};
