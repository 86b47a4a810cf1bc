use serde::{Deserialize, Serialize};

use crate::data::entities::UsageRecord;

/// The dashboard always shows at most five apps: three on the podium and
/// two in the list under it. This is a product decision, not a general
/// top-N.
pub const PODIUM_SIZE: usize = 3;
pub const OVERFLOW_SIZE: usize = 2;

/// An app with its place in the descending usage order, 1 being the most
/// used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedApp {
    pub app: UsageRecord,
    pub rank: usize,
}

/// Ranks apps by descending minutes. The sort is stable, so apps with equal
/// minutes keep their input order instead of jumping around between
/// renders.
pub fn rank_by_usage(records: &[UsageRecord]) -> Vec<RankedApp> {
    let mut ordered = records.to_vec();
    ordered.sort_by(|a, b| b.minutes.cmp(&a.minutes));
    ordered
        .into_iter()
        .enumerate()
        .map(|(index, app)| RankedApp {
            app,
            rank: index + 1,
        })
        .collect()
}

/// Reorders the top three for a center-biggest podium: second place on the
/// left, first place in the middle, third place on the right. With fewer
/// than three apps the rank order is kept untouched.
pub fn podium_order(ranked: &[RankedApp]) -> Vec<RankedApp> {
    let top = &ranked[..ranked.len().min(PODIUM_SIZE)];
    if top.len() < PODIUM_SIZE {
        top.to_vec()
    } else {
        vec![top[1].clone(), top[0].clone(), top[2].clone()]
    }
}

/// Ranks four and five, shown as a plain list below the podium. Silently
/// shorter or empty when fewer apps exist.
pub fn overflow_list(ranked: &[RankedApp]) -> Vec<RankedApp> {
    ranked
        .iter()
        .skip(PODIUM_SIZE)
        .take(OVERFLOW_SIZE)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::data::entities::UsageRecord;

    use super::{overflow_list, podium_order, rank_by_usage};

    fn sample() -> Vec<UsageRecord> {
        vec![
            UsageRecord::new("Instagram", 45),
            UsageRecord::new("YouTube", 38),
            UsageRecord::new("TikTok", 25),
            UsageRecord::new("Twitter", 20),
            UsageRecord::new("LINE", 15),
        ]
    }

    fn names(ranked: &[super::RankedApp]) -> Vec<&str> {
        ranked.iter().map(|v| v.app.app_name.as_ref()).collect()
    }

    #[test]
    fn test_rank_descending() {
        let ranked = rank_by_usage(&sample());
        assert_eq!(
            names(&ranked),
            vec!["Instagram", "YouTube", "TikTok", "Twitter", "LINE"]
        );
        assert_eq!(
            ranked.iter().map(|v| v.rank).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5]
        );
    }

    #[test]
    fn test_ties_keep_input_order() {
        let records = vec![
            UsageRecord::new("A", 30),
            UsageRecord::new("B", 45),
            UsageRecord::new("C", 30),
        ];
        let ranked = rank_by_usage(&records);
        assert_eq!(names(&ranked), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_podium_puts_first_place_in_the_center() {
        let ranked = rank_by_usage(&sample());
        let podium = podium_order(&ranked);
        assert_eq!(names(&podium), vec!["YouTube", "Instagram", "TikTok"]);
        assert_eq!(podium.iter().map(|v| v.rank).collect::<Vec<_>>(), vec![2, 1, 3]);
    }

    #[test]
    fn test_short_podium_is_not_reordered() {
        let records = vec![UsageRecord::new("A", 45), UsageRecord::new("B", 38)];
        let ranked = rank_by_usage(&records);
        assert_eq!(names(&podium_order(&ranked)), vec!["A", "B"]);
    }

    #[test]
    fn test_overflow_yields_fourth_and_fifth() {
        let ranked = rank_by_usage(&sample());
        let overflow = overflow_list(&ranked);
        assert_eq!(names(&overflow), vec!["Twitter", "LINE"]);
        assert_eq!(overflow.iter().map(|v| v.rank).collect::<Vec<_>>(), vec![4, 5]);
    }

    #[test]
    fn test_overflow_is_empty_for_three_apps() {
        let ranked = rank_by_usage(&sample()[..3]);
        assert!(overflow_list(&ranked).is_empty());
    }
}
