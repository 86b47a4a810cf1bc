use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Total foreground time of one app within a period. The app name is the
/// unique key inside a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub app_name: Arc<str>,
    pub minutes: i64,
}

impl UsageRecord {
    pub fn new(app_name: impl Into<Arc<str>>, minutes: i64) -> Self {
        Self {
            app_name: app_name.into(),
            minutes,
        }
    }
}

/// A day or week bucket of usage records. Record order is display order,
/// not significance order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub label: Arc<str>,
    pub records: Vec<UsageRecord>,
}

/// The user's configured daily allowance. The goal must stay positive,
/// progress computation rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalConfig {
    pub daily_goal_minutes: i64,
}

/// Minutes used within one hour of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyUsage {
    pub hour: u32,
    pub minutes: i64,
}

/// Everything the Today view needs for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySnapshot {
    pub date: NaiveDate,
    pub records: Vec<UsageRecord>,
    pub hourly: Vec<HourlyUsage>,
    /// Times the user tapped "not now" on an app open prompt that day.
    pub declined_count: u32,
    /// Consecutive days the daily goal was met.
    pub streak_days: u32,
    /// Minutes saved that day compared to the user's baseline.
    pub saved_minutes: i64,
}

impl DaySnapshot {
    pub fn total_minutes(&self) -> i64 {
        self.records.iter().map(|record| record.minutes).sum()
    }
}

/// Aggregates a sequence of day snapshots into one period summing minutes
/// per app. App order is first-seen order across the days, which keeps the
/// aggregate deterministic.
pub fn aggregate_days<'a>(
    label: impl Into<Arc<str>>,
    days: impl IntoIterator<Item = &'a DaySnapshot>,
) -> Period {
    let mut records: Vec<UsageRecord> = vec![];
    for day in days {
        for record in &day.records {
            match records
                .iter_mut()
                .find(|existing| existing.app_name == record.app_name)
            {
                Some(existing) => existing.minutes += record.minutes,
                None => records.push(record.clone()),
            }
        }
    }
    Period {
        label: label.into(),
        records,
    }
}
