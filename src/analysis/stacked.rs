use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{data::entities::UsageRecord, utils::percentage::minutes_percentage};

/// Label of the synthetic bucket aggregating everything outside the top
/// apps. The renderer translates it per locale.
pub const OTHER_LABEL: &str = "other";

/// One slice of a day's 100%-stacked usage bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackedSegment {
    pub label: Arc<str>,
    pub minutes: i64,
    pub percentage_of_total: f64,
}

/// Splits one day into a segment per top app plus a single "other" segment
/// for the rest. Top apps appear in caller order with zero minutes when the
/// app was not used that day: segment position drives color assignment, and
/// an app must keep its color across every day of the chart.
///
/// The returned percentages sum to 100, except for an all-zero day where
/// every segment is 0% and the bar renders empty. The output length is
/// always `top_app_names.len() + 1`.
pub fn allocate_segments(
    day_records: &[UsageRecord],
    top_app_names: &[Arc<str>],
) -> Vec<StackedSegment> {
    let mut segments: Vec<StackedSegment> = top_app_names
        .iter()
        .map(|name| StackedSegment {
            label: name.clone(),
            minutes: day_records
                .iter()
                .find(|record| record.app_name == *name)
                .map(|record| record.minutes)
                .unwrap_or(0),
            percentage_of_total: 0.,
        })
        .collect();

    let other_minutes = day_records
        .iter()
        .filter(|record| !top_app_names.contains(&record.app_name))
        .map(|record| record.minutes)
        .sum();

    segments.push(StackedSegment {
        label: OTHER_LABEL.into(),
        minutes: other_minutes,
        percentage_of_total: 0.,
    });

    let total: i64 = segments.iter().map(|segment| segment.minutes).sum();
    if total > 0 {
        for segment in &mut segments {
            segment.percentage_of_total = *minutes_percentage(segment.minutes, total);
        }
    }

    segments
}
