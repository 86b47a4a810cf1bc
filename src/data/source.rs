use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use futures::{stream, StreamExt};
#[cfg(test)]
use mockall::automock;

use crate::utils::time::week_dates;

use super::entities::{DaySnapshot, GoalConfig};

/// Capability for resolving usage data. Implementations can be backed by
/// mock data, an OS screen-time API, or a local store; the computation
/// layer never cares which.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UsagePeriodSource: Sync + Send {
    /// Usage data for a single day. Days without any activity must come
    /// back as an empty snapshot, not an error.
    async fn day_snapshot(&self, date: NaiveDate) -> Result<DaySnapshot>;

    async fn goal(&self) -> Result<GoalConfig>;
}

/// Fetches the seven days of the week starting at `week_start`, keeping day
/// order while letting the source resolve days concurrently.
pub async fn week_of(
    source: &(impl UsagePeriodSource + ?Sized),
    week_start: NaiveDate,
) -> Result<Vec<DaySnapshot>> {
    stream::iter(week_dates(week_start))
        .map(|date| source.day_snapshot(date))
        .buffered(4)
        .collect::<Vec<_>>()
        .await
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::LazyLock;

    use anyhow::Result;
    use chrono::{Duration, NaiveDate};

    use crate::{
        data::{
            entities::DaySnapshot,
            source::{week_of, MockUsagePeriodSource},
        },
        utils::logging::TEST_LOGGING,
    };

    #[tokio::test]
    async fn test_week_of_preserves_day_order() -> Result<()> {
        LazyLock::force(&TEST_LOGGING);
        let mut source = MockUsagePeriodSource::new();
        source.expect_day_snapshot().times(7).returning(|date| {
            Ok(DaySnapshot {
                date,
                records: vec![],
                hourly: vec![],
                declined_count: 0,
                streak_days: 0,
                saved_minutes: 0,
            })
        });

        let monday = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        let week = week_of(&source, monday).await?;

        assert_eq!(week.len(), 7);
        for (offset, day) in week.iter().enumerate() {
            assert_eq!(day.date, monday + Duration::days(offset as i64));
        }
        Ok(())
    }
}
