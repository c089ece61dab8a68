//! pesaview-analytics: pure aggregations over a snapshot of transaction records.
//!
//! Every function takes the full record slice, never mutates it, and is
//! defined for empty input. Records with a non-finite amount are ignored.

pub mod categories;
pub mod dashboard;
pub mod flows;
pub mod monthly;
pub mod summary;
pub mod weekday;

pub use categories::{CategoryBreakdownRow, TopCategory, assign_top_categories, category_breakdown};
pub use dashboard::{Dashboard, DashboardOptions};
pub use flows::{DirectionTotal, direction_totals, directional_sum};
pub use monthly::{MonthlyBucket, monthly_buckets};
pub use summary::{SummaryMetrics, date_range, summary_metrics};
pub use weekday::{WeekdayBucket, weekday_buckets};
