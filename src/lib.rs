// Pup Diary statistics core
// Pure aggregation of house-training events for charts and dashboards

pub mod analytics;
pub mod error;
pub mod models;

pub use analytics::{
    calculator::{build_month_view, compute_statistics, compute_statistics_now, today_summary},
    DailySummary, MonthView, Statistics, Timeframe,
};
pub use error::AppError;
pub use models::{Event, EventKind, Puppy};
