use std::{collections::HashMap, sync::Arc};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data::entities::Period;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increased,
    Decreased,
}

/// Minute difference for one app between two comparable periods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendDelta {
    pub app_name: Arc<str>,
    pub minutes_delta: i64,
    pub direction: TrendDirection,
}

/// Classifies apps as increased or decreased between `previous` and
/// `current`. Apps with identical minutes in both periods carry no trend
/// and are dropped. The result follows the current period's record order.
///
/// Apps present in only one of the two periods are also dropped: there is
/// no baseline to diff against. This hides newly appeared and abandoned
/// apps. If new apps should ever surface as a 100% increase, this is the
/// place to change.
pub fn compare_periods(current: &Period, previous: &Period) -> Vec<TrendDelta> {
    let baseline: HashMap<&str, i64> = previous
        .records
        .iter()
        .map(|record| (record.app_name.as_ref(), record.minutes))
        .collect();

    current
        .records
        .iter()
        .filter_map(|record| {
            let Some(previous_minutes) = baseline.get(record.app_name.as_ref()) else {
                debug!("No baseline for {}, skipping trend", record.app_name);
                return None;
            };
            let minutes_delta = record.minutes - previous_minutes;
            if minutes_delta == 0 {
                return None;
            }
            let direction = if minutes_delta > 0 {
                TrendDirection::Increased
            } else {
                TrendDirection::Decreased
            };
            Some(TrendDelta {
                app_name: record.app_name.clone(),
                minutes_delta,
                direction,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::data::entities::{Period, UsageRecord};

    use super::{compare_periods, TrendDirection};

    fn period(label: &str, records: Vec<UsageRecord>) -> Period {
        Period {
            label: Arc::from(label),
            records,
        }
    }

    #[test]
    fn test_increase_from_zero_baseline() {
        let current = period("this week", vec![UsageRecord::new("TikTok", 65)]);
        let previous = period("last week", vec![UsageRecord::new("TikTok", 0)]);

        let deltas = compare_periods(&current, &previous);
        assert_eq!(deltas.len(), 1);
        assert_eq!(deltas[0].app_name.as_ref(), "TikTok");
        assert_eq!(deltas[0].minutes_delta, 65);
        assert_eq!(deltas[0].direction, TrendDirection::Increased);
    }

    #[test]
    fn test_directions_and_order() {
        let current = period(
            "this week",
            vec![
                UsageRecord::new("Instagram", 32),
                UsageRecord::new("TikTok", 80),
                UsageRecord::new("Twitter", 60),
            ],
        );
        let previous = period(
            "last week",
            vec![
                UsageRecord::new("TikTok", 15),
                UsageRecord::new("Twitter", 12),
                UsageRecord::new("Instagram", 64),
            ],
        );

        let deltas = compare_periods(&current, &previous);
        assert_eq!(
            deltas
                .iter()
                .map(|v| (v.app_name.as_ref(), v.minutes_delta, v.direction))
                .collect::<Vec<_>>(),
            vec![
                ("Instagram", -32, TrendDirection::Decreased),
                ("TikTok", 65, TrendDirection::Increased),
                ("Twitter", 48, TrendDirection::Increased),
            ]
        );
    }

    #[test]
    fn test_identical_minutes_are_excluded() {
        let current = period("this week", vec![UsageRecord::new("LINE", 30)]);
        let previous = period("last week", vec![UsageRecord::new("LINE", 30)]);
        assert!(compare_periods(&current, &previous).is_empty());
    }

    #[test]
    fn test_one_sided_apps_are_excluded() {
        let current = period("this week", vec![UsageRecord::new("Threads", 45)]);
        let previous = period("last week", vec![UsageRecord::new("Vine", 45)]);
        assert!(compare_periods(&current, &previous).is_empty());
    }
}
