use anyhow::Result;
use async_trait::async_trait;
use chrono::{Datelike, NaiveDate, Weekday};

use super::{
    entities::{DaySnapshot, GoalConfig, HourlyUsage, UsageRecord},
    source::UsagePeriodSource,
};

/// Built-in dataset standing in for a real screen-time backend. Data only
/// depends on the date, so a given day renders the same dashboard on every
/// run, and consecutive ISO weeks differ by a fixed per-app shift so the
/// weekly trend lists are never empty.
pub struct MockUsageSource;

const APP_NAMES: [&str; 5] = ["Instagram", "YouTube", "TikTok", "Twitter", "LINE"];

/// Per-app minutes for each weekday, Monday first. Column order follows
/// [APP_NAMES].
const WEEKDAY_MINUTES: [[i64; 5]; 7] = [
    [60, 45, 35, 25, 15],
    [75, 60, 45, 35, 25],
    [95, 75, 55, 45, 30],
    [90, 70, 50, 40, 30],
    [100, 80, 60, 45, 35],
    [80, 65, 50, 40, 25],
    [95, 80, 60, 45, 30],
];

/// Applied on odd ISO weeks. LINE stays flat on purpose so the zero-delta
/// exclusion of the trend comparison shows up in real output.
const ODD_WEEK_SHIFT: [i64; 5] = [-5, -4, 9, 7, 0];

/// Rough phone-shaped day used to spread a day's total over its hours:
/// quiet night, a lunch bump, an evening peak.
const HOUR_WEIGHTS: [i64; 24] = [
    0, 0, 0, 0, 0, 0, 1, 2, 3, 3, 4, 5, 6, 4, 3, 3, 4, 5, 7, 8, 9, 7, 4, 2,
];

const DAILY_GOAL_MINUTES: i64 = 290;
const DECLINED_COUNT: u32 = 10;
const STREAK_DAYS: u32 = 9;
const SAVED_MINUTES: i64 = 60;

fn weekday_index(weekday: Weekday) -> usize {
    weekday.num_days_from_monday() as usize
}

fn day_records(date: NaiveDate) -> Vec<UsageRecord> {
    let row = WEEKDAY_MINUTES[weekday_index(date.weekday())];
    let odd_week = date.iso_week().week() % 2 == 1;
    APP_NAMES
        .iter()
        .zip(row)
        .enumerate()
        .map(|(index, (name, minutes))| {
            let minutes = if odd_week {
                minutes + ODD_WEEK_SHIFT[index]
            } else {
                minutes
            };
            UsageRecord::new(*name, minutes)
        })
        .collect()
}

fn hourly_spread(total: i64) -> Vec<HourlyUsage> {
    let weight_sum: i64 = HOUR_WEIGHTS.iter().sum();
    HOUR_WEIGHTS
        .iter()
        .enumerate()
        .map(|(hour, weight)| HourlyUsage {
            hour: hour as u32,
            minutes: total * weight / weight_sum,
        })
        .collect()
}

#[async_trait]
impl UsagePeriodSource for MockUsageSource {
    async fn day_snapshot(&self, date: NaiveDate) -> Result<DaySnapshot> {
        let records = day_records(date);
        let total = records.iter().map(|record| record.minutes).sum();
        Ok(DaySnapshot {
            date,
            hourly: hourly_spread(total),
            records,
            declined_count: DECLINED_COUNT,
            streak_days: STREAK_DAYS,
            saved_minutes: SAVED_MINUTES,
        })
    }

    async fn goal(&self) -> Result<GoalConfig> {
        Ok(GoalConfig {
            daily_goal_minutes: DAILY_GOAL_MINUTES,
        })
    }
}
