//! Statistics aggregation for house-training events
//!
//! Produces the data series behind the statistics dashboards: a per-day
//! event-count series, per-day averages, a four-bucket time-of-day
//! distribution, and a 24-bucket hourly pattern.
//!
//! ## Architecture
//!
//! - **Event Filter**: clips the event list to a timeframe and optional puppy
//! - **Series Builders**: fold the filtered list into fixed-shape buckets
//! - **Injected Clock**: every entry point takes `now`, so output is a pure
//!   function of its inputs
//!
//! ## Local First
//!
//! All calculations happen in memory on the caller's thread; there is no
//! incremental state to invalidate between calls, and re-running on every
//! filter change is cheap for realistic diary sizes.

mod types;


pub use types::*;

/// Calculator module for series and averages computation
pub mod calculator;
