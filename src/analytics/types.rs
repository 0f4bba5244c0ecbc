//! Statistics type definitions
//!
//! Contains the timeframe selection and the chart-facing output structures.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Timeframe filter for the statistics dashboards
///
/// Either a relative window ending now or an explicit calendar-date range.
/// Not persisted; it only exists while a dashboard selection is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Timeframe {
    /// Last 7 days (default)
    #[serde(rename = "7days")]
    Days7,
    /// Last 30 days
    #[serde(rename = "30days")]
    Days30,
    /// Last 90 days
    #[serde(rename = "90days")]
    Days90,
    /// Explicit calendar range; see [`calculator::filter_events`] for how
    /// the end bound is interpreted
    ///
    /// [`calculator::filter_events`]: super::calculator::filter_events
    #[serde(rename = "custom")]
    Custom {
        start_date: NaiveDate,
        end_date: NaiveDate,
    },
}

impl Default for Timeframe {
    fn default() -> Self {
        Timeframe::Days7
    }
}

impl Timeframe {
    /// Resolve a relative-window selection key from the presentation layer
    ///
    /// Unrecognized keys fall back to the 7-day default.
    pub fn from_key(key: &str) -> Self {
        match key {
            "30days" => Timeframe::Days30,
            "90days" => Timeframe::Days90,
            _ => Timeframe::Days7,
        }
    }

    /// Build a custom timeframe from raw `YYYY-MM-DD` strings
    pub fn custom_from_strs(start: &str, end: &str) -> Result<Self, AppError> {
        Ok(Timeframe::Custom {
            start_date: parse_date(start)?,
            end_date: parse_date(end)?,
        })
    }

    /// Width of the window in days, if this is a relative timeframe
    pub fn relative_days(&self) -> Option<i64> {
        match self {
            Timeframe::Days7 => Some(7),
            Timeframe::Days30 => Some(30),
            Timeframe::Days90 => Some(90),
            Timeframe::Custom { .. } => None,
        }
    }

    /// Number of days covered, used as the per-day averages denominator
    ///
    /// Custom ranges count whole days between the bounds, clamped to at
    /// least 1 so the denominator is always defined, including when the
    /// range is inverted or both bounds name the same day.
    pub fn day_count(&self) -> i64 {
        match self {
            Timeframe::Days7 => 7,
            Timeframe::Days30 => 30,
            Timeframe::Days90 => 90,
            Timeframe::Custom {
                start_date,
                end_date,
            } => (*end_date - *start_date).num_days().max(1),
        }
    }
}

/// Parses a date string (YYYY-MM-DD) to a NaiveDate
fn parse_date(input: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| AppError::invalid_date(input))
}

/// One calendar day of the daily event series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DailyPoint {
    /// Day key in the aggregation time zone
    pub date: NaiveDate,
    /// Chart axis label ("dd.mm")
    pub display_date: String,
    /// Events counting toward the pee tally on this day
    pub pee: u32,
    /// Events counting toward the poop tally on this day
    pub poop: u32,
}

/// Per-day averages over the selected timeframe
///
/// Pre-rendered to one decimal place for direct display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Averages {
    pub pee_per_day: String,
    pub poop_per_day: String,
}

/// Time-of-day slot of the four-bucket distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,
    Midday,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Fixed display order of the four slots
    pub const ORDER: [TimeOfDay; 4] = [
        TimeOfDay::Morning,
        TimeOfDay::Midday,
        TimeOfDay::Evening,
        TimeOfDay::Night,
    ];

    /// Slot for a local hour of day (0-23)
    pub fn from_hour(hour: u32) -> Self {
        if (6..12).contains(&hour) {
            TimeOfDay::Morning
        } else if (12..18).contains(&hour) {
            TimeOfDay::Midday
        } else if hour >= 18 {
            TimeOfDay::Evening
        } else {
            TimeOfDay::Night
        }
    }

    /// Chart label with the hour range spelled out
    pub fn label(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Morning (6-12)",
            TimeOfDay::Midday => "Midday (12-18)",
            TimeOfDay::Evening => "Evening (18-24)",
            TimeOfDay::Night => "Night (0-6)",
        }
    }
}

/// One bucket of the time-of-day distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DistributionBucket {
    /// Which slot this bucket covers
    pub slot: TimeOfDay,
    /// Display label for the categorical axis
    pub label: String,
    pub pee: u32,
    pub poop: u32,
}

/// One hour of the 24-bucket hourly pattern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct HourlyPoint {
    /// Hour label ("00:00" through "23:00")
    pub hour: String,
    pub pee: u32,
    pub poop: u32,
}

/// Complete statistics output for one dashboard selection
///
/// `distribution` always holds exactly four buckets in Morning, Midday,
/// Evening, Night order; `hourly_pattern` always holds 24.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Statistics {
    /// Timeframe this output was computed for
    pub timeframe: Timeframe,
    /// Per-calendar-day event counts, oldest first
    pub daily_series: Vec<DailyPoint>,
    /// Per-day averages over the timeframe
    pub averages: Averages,
    /// Four-bucket time-of-day distribution
    pub distribution: Vec<DistributionBucket>,
    /// 24-bucket hourly pattern
    pub hourly_pattern: Vec<HourlyPoint>,
}

/// Today's per-kind counts for the entry page card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DailySummary {
    /// The day the counts cover
    pub date: NaiveDate,
    pub pee: u32,
    pub poop: u32,
}

/// One cell of the calendar grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub pee: u32,
    pub poop: u32,
    /// Total events on this day, `both` counted once
    pub event_count: u32,
}

/// One month of the calendar grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    /// Blank cells before day 1 in a Sunday-first week grid
    pub leading_blanks: u32,
    /// One entry per day of the month, zero-filled
    pub days: Vec<CalendarDay>,
}
