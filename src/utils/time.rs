use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Weekday};
use now::DateTimeNow;

/// This is the standard way of converting a date to a string in screenwise.
pub fn date_to_day_label(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Single letter used by the day axis of the weekly charts, like the week
/// strip of a phone day selector.
pub fn weekday_letter(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "M",
        Weekday::Tue => "T",
        Weekday::Wed => "W",
        Weekday::Thu => "T",
        Weekday::Fri => "F",
        Weekday::Sat => "S",
        Weekday::Sun => "S",
    }
}

/// Monday of the week containing `date`.
pub fn week_start<Tz: TimeZone>(date: DateTime<Tz>) -> NaiveDate {
    date.beginning_of_week().date_naive()
}

/// The seven days of the week beginning at `start`, in order.
pub fn week_dates(start: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    (0..7).map(move |offset| start + Duration::days(offset))
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};

    use super::{week_dates, week_start, weekday_letter};

    #[test]
    fn test_week_start_is_monday() {
        // 2024-04-05 is a Friday
        let date = Utc.with_ymd_and_hms(2024, 4, 5, 13, 30, 0).unwrap();
        assert_eq!(
            week_start(date),
            NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
        );
    }

    #[test]
    fn test_week_dates_are_seven_consecutive_days() {
        let start = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        let days: Vec<_> = week_dates(start).collect();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], start);
        assert_eq!(days[6], NaiveDate::from_ymd_opt(2024, 4, 7).unwrap());
        assert_eq!(
            days.iter().map(|d| weekday_letter(*d)).collect::<Vec<_>>(),
            vec!["M", "T", "W", "T", "F", "S", "S"]
        );
    }
}
