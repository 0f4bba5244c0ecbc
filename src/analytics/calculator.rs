//! Statistics calculation logic
//!
//! Pure functions that clip the event list to a timeframe and fold it into
//! the chart-facing series. Day boundaries and hour-of-day are evaluated in
//! the time zone of the injected `now` value, so callers control both the
//! clock and the zone; nothing here reads ambient state.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};

use crate::error::AppError;
use crate::models::Event;

use super::{
    Averages, CalendarDay, DailyPoint, DailySummary, DistributionBucket, HourlyPoint, MonthView,
    Statistics, TimeOfDay, Timeframe,
};

/// Midnight at the start of `day` in `tz`
///
/// When midnight falls into a DST gap the first valid later time is used.
fn day_start<Tz: TimeZone>(tz: &Tz, day: NaiveDate) -> DateTime<Tz> {
    let midnight = day.and_time(NaiveTime::MIN);
    if let Some(dt) = tz.from_local_datetime(&midnight).earliest() {
        return dt;
    }
    tz.from_local_datetime(&(midnight + Duration::hours(1)))
        .earliest()
        .unwrap_or_else(|| Utc.from_utc_datetime(&midnight).with_timezone(tz))
}

/// Inclusive clipping window plus the day span seeded for the daily series
struct Window<Tz: TimeZone> {
    start: DateTime<Tz>,
    end: DateTime<Tz>,
    first_day: NaiveDate,
    last_day: NaiveDate,
}

fn resolve_window<Tz: TimeZone>(timeframe: &Timeframe, now: &DateTime<Tz>) -> Window<Tz> {
    let tz = now.timezone();
    let today = now.date_naive();
    match timeframe {
        Timeframe::Custom {
            start_date,
            end_date,
        } => Window {
            start: day_start(&tz, *start_date),
            // The end bound is midnight at the *start* of the end day, so
            // events later on that day are not included. Callers that want
            // the whole end day covered pass the day after it.
            end: day_start(&tz, *end_date),
            first_day: *start_date,
            last_day: *end_date,
        },
        relative => {
            let days = relative.day_count();
            Window {
                start: day_start(&tz, today - Duration::days(days)),
                end: now.clone(),
                first_day: today - Duration::days(days - 1),
                last_day: today,
            }
        }
    }
}

/// Clip `events` to the timeframe window and the optional puppy filter
///
/// Relative windows cover `[start of day N days ago, now]`, both bounds
/// inclusive. Custom windows are inclusive of both explicit bounds, with the
/// end bound at midnight at the *start* of the end day: events later on
/// that day are not included, so callers wanting the whole end day covered
/// pass the day after it. An inverted custom range yields an empty result.
///
/// No puppy filter means the timeframe clip passes every owner through.
pub fn filter_events<'a, Tz: TimeZone>(
    events: &'a [Event],
    timeframe: &Timeframe,
    puppy_filter: Option<&str>,
    now: &DateTime<Tz>,
) -> Vec<&'a Event> {
    let window = resolve_window(timeframe, now);
    events
        .iter()
        .filter(|event| {
            event.timestamp >= window.start
                && event.timestamp <= window.end
                && puppy_filter.map_or(true, |id| event.puppy_id == id)
        })
        .collect()
}

/// Fold filtered events into one bucket per calendar day, oldest first
///
/// Buckets are pre-seeded with zero counts for the whole span, so the series
/// keeps a fixed length over sparse data: a relative window of `D` days
/// always yields `D` buckets ending today, a custom window one bucket per
/// day of its range. An event whose day key falls outside the span is
/// dropped.
pub fn build_daily_series<Tz: TimeZone>(
    filtered: &[&Event],
    timeframe: &Timeframe,
    now: &DateTime<Tz>,
) -> Vec<DailyPoint> {
    let tz = now.timezone();
    let window = resolve_window(timeframe, now);

    let mut buckets: BTreeMap<NaiveDate, (u32, u32)> = BTreeMap::new();
    let mut day = window.first_day;
    while day <= window.last_day {
        buckets.insert(day, (0, 0));
        day = day + Duration::days(1);
    }

    for event in filtered {
        let key = event.timestamp.with_timezone(&tz).date_naive();
        if let Some((pee, poop)) = buckets.get_mut(&key) {
            let flags = event.kind.flags();
            if flags.pee {
                *pee += 1;
            }
            if flags.poop {
                *poop += 1;
            }
        }
    }

    buckets
        .into_iter()
        .map(|(date, (pee, poop))| DailyPoint {
            display_date: date.format("%d.%m").to_string(),
            date,
            pee,
            poop,
        })
        .collect()
}

/// Per-day averages over the timeframe, rendered to one decimal place
///
/// The denominator comes from [`Timeframe::day_count`], which is always at
/// least 1.
pub fn calculate_averages(filtered: &[&Event], timeframe: &Timeframe) -> Averages {
    let days = timeframe.day_count();
    let pee_total = filtered.iter().filter(|e| e.kind.flags().pee).count();
    let poop_total = filtered.iter().filter(|e| e.kind.flags().poop).count();

    Averages {
        pee_per_day: per_day(pee_total, days),
        poop_per_day: per_day(poop_total, days),
    }
}

/// Render `count / days` with half-up rounding to one decimal place
fn per_day(count: usize, days: i64) -> String {
    let rounded = (count as f64 / days as f64 * 10.0).round() / 10.0;
    format!("{:.1}", rounded)
}

/// Partition filtered events into the four fixed time-of-day buckets
///
/// Output order is always Morning, Midday, Evening, Night; empty buckets
/// stay in place with zero counts.
pub fn build_time_distribution<Tz: TimeZone>(
    filtered: &[&Event],
    tz: &Tz,
) -> Vec<DistributionBucket> {
    let mut counts = [(0u32, 0u32); 4];

    for event in filtered {
        let hour = event.timestamp.with_timezone(tz).hour();
        let entry = &mut counts[TimeOfDay::from_hour(hour) as usize];
        let flags = event.kind.flags();
        if flags.pee {
            entry.0 += 1;
        }
        if flags.poop {
            entry.1 += 1;
        }
    }

    TimeOfDay::ORDER
        .iter()
        .map(|slot| {
            let (pee, poop) = counts[*slot as usize];
            DistributionBucket {
                slot: *slot,
                label: slot.label().to_string(),
                pee,
                poop,
            }
        })
        .collect()
}

/// Fold filtered events into 24 hourly buckets, hour 0 first
pub fn build_hourly_pattern<Tz: TimeZone>(filtered: &[&Event], tz: &Tz) -> Vec<HourlyPoint> {
    let mut counts = [(0u32, 0u32); 24];

    for event in filtered {
        let hour = event.timestamp.with_timezone(tz).hour() as usize;
        let flags = event.kind.flags();
        if flags.pee {
            counts[hour].0 += 1;
        }
        if flags.poop {
            counts[hour].1 += 1;
        }
    }

    counts
        .iter()
        .enumerate()
        .map(|(hour, (pee, poop))| HourlyPoint {
            hour: format!("{:02}:00", hour),
            pee: *pee,
            poop: *poop,
        })
        .collect()
}

/// Compute the full statistics output for one dashboard selection
///
/// Runs the event filter once and feeds the result to every series builder.
/// Identical inputs produce identical output; no state is kept between
/// calls, so a superseded result can simply be discarded.
pub fn compute_statistics<Tz: TimeZone>(
    events: &[Event],
    timeframe: &Timeframe,
    puppy_filter: Option<&str>,
    now: &DateTime<Tz>,
) -> Statistics {
    let tz = now.timezone();
    let filtered = filter_events(events, timeframe, puppy_filter, now);

    Statistics {
        timeframe: *timeframe,
        daily_series: build_daily_series(&filtered, timeframe, now),
        averages: calculate_averages(&filtered, timeframe),
        distribution: build_time_distribution(&filtered, &tz),
        hourly_pattern: build_hourly_pattern(&filtered, &tz),
    }
}

/// Compute statistics against the local clock
pub fn compute_statistics_now(
    events: &[Event],
    timeframe: &Timeframe,
    puppy_filter: Option<&str>,
) -> Statistics {
    compute_statistics(events, timeframe, puppy_filter, &Local::now())
}

/// Per-kind counts for events recorded today
///
/// "Today" is the calendar day of `now` in its time zone. Honors the puppy
/// filter the same way the event filter does.
pub fn today_summary<Tz: TimeZone>(
    events: &[Event],
    puppy_filter: Option<&str>,
    now: &DateTime<Tz>,
) -> DailySummary {
    let tz = now.timezone();
    let today = now.date_naive();
    let mut summary = DailySummary {
        date: today,
        pee: 0,
        poop: 0,
    };

    for event in events {
        if !puppy_filter.map_or(true, |id| event.puppy_id == id) {
            continue;
        }
        if event.timestamp.with_timezone(&tz).date_naive() != today {
            continue;
        }
        let flags = event.kind.flags();
        if flags.pee {
            summary.pee += 1;
        }
        if flags.poop {
            summary.poop += 1;
        }
    }

    summary
}

/// Calendar-grid counts for every day of the given month
///
/// Only the puppy filter applies; the calendar shows the whole month
/// regardless of any dashboard timeframe. `leading_blanks` positions day 1
/// in a Sunday-first week grid.
pub fn build_month_view<Tz: TimeZone>(
    events: &[Event],
    puppy_filter: Option<&str>,
    year: i32,
    month: u32,
    tz: &Tz,
) -> Result<MonthView, AppError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::invalid_date(format!("{}-{:02}", year, month)))?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| AppError::invalid_date(format!("{}-{:02}", year, month)))?;

    let mut days: Vec<CalendarDay> = Vec::new();
    let mut day = first;
    while day < next_month {
        days.push(CalendarDay {
            date: day,
            pee: 0,
            poop: 0,
            event_count: 0,
        });
        day = day + Duration::days(1);
    }

    for event in events {
        if !puppy_filter.map_or(true, |id| event.puppy_id == id) {
            continue;
        }
        let key = event.timestamp.with_timezone(tz).date_naive();
        if key.year() != year || key.month() != month {
            continue;
        }
        let cell = &mut days[key.day0() as usize];
        let flags = event.kind.flags();
        if flags.pee {
            cell.pee += 1;
        }
        if flags.poop {
            cell.poop += 1;
        }
        cell.event_count += 1;
    }

    Ok(MonthView {
        year,
        month,
        leading_blanks: first.weekday().num_days_from_sunday(),
        days,
    })
}
