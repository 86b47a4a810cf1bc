use std::fmt::Display;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::ContractError;

/// The two display languages the dashboard strings are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationLocale {
    En,
    Ja,
}

impl Display for DurationLocale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DurationLocale::En => write!(f, "en"),
            DurationLocale::Ja => write!(f, "ja"),
        }
    }
}

/// A minute count split into whole hours and leftover minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursMinutes {
    pub hours: i64,
    pub mins: i64,
}

/// Splits minutes into hour and minute components, so that
/// `hours * 60 + mins` gives back the input.
pub fn split_minutes(minutes: i64) -> Result<HoursMinutes, ContractError> {
    if minutes < 0 {
        return Err(ContractError::InvalidDuration(minutes));
    }
    Ok(HoursMinutes {
        hours: minutes / 60,
        mins: minutes % 60,
    })
}

/// Compact rendering that drops a zero component. A zero duration still
/// renders as zero of the smallest unit, never as an empty string.
pub fn format_compact(minutes: i64, locale: DurationLocale) -> Result<String, ContractError> {
    let HoursMinutes { hours, mins } = split_minutes(minutes)?;
    let (hour_unit, minute_unit) = units(locale);
    Ok(if hours == 0 {
        format!("{mins}{minute_unit}")
    } else if mins == 0 {
        format!("{hours}{hour_unit}")
    } else {
        format!("{hours}{hour_unit}{mins}{minute_unit}")
    })
}

/// Fixed two-part rendering that always shows both components, used where
/// the layout reserves space for both.
pub fn format_full(minutes: i64, locale: DurationLocale) -> Result<String, ContractError> {
    let HoursMinutes { hours, mins } = split_minutes(minutes)?;
    let (hour_unit, minute_unit) = units(locale);
    Ok(format!("{hours}{hour_unit}{mins}{minute_unit}"))
}

fn units(locale: DurationLocale) -> (&'static str, &'static str) {
    match locale {
        DurationLocale::En => ("h", "m"),
        DurationLocale::Ja => ("時間", "分"),
    }
}

#[cfg(test)]
mod tests {
    use crate::analysis::ContractError;

    use super::{format_compact, format_full, split_minutes, DurationLocale};

    #[test]
    fn test_split_round_trips() {
        for minutes in [0, 1, 59, 60, 61, 230, 290, 720, 1439] {
            let split = split_minutes(minutes).unwrap();
            assert_eq!(split.hours * 60 + split.mins, minutes, "{minutes}");
        }
    }

    #[test]
    fn test_split_rejects_negative() {
        assert_eq!(
            split_minutes(-5),
            Err(ContractError::InvalidDuration(-5))
        );
    }

    #[test]
    fn test_compact_omits_zero_components() {
        assert_eq!(format_compact(50, DurationLocale::En).unwrap(), "50m");
        assert_eq!(format_compact(120, DurationLocale::En).unwrap(), "2h");
        assert_eq!(format_compact(230, DurationLocale::En).unwrap(), "3h50m");
        assert_eq!(format_compact(230, DurationLocale::Ja).unwrap(), "3時間50分");
        assert_eq!(format_compact(120, DurationLocale::Ja).unwrap(), "2時間");
    }

    #[test]
    fn test_compact_zero_renders_smallest_unit() {
        assert_eq!(format_compact(0, DurationLocale::En).unwrap(), "0m");
        assert_eq!(format_compact(0, DurationLocale::Ja).unwrap(), "0分");
    }

    #[test]
    fn test_full_always_shows_both() {
        assert_eq!(format_full(120, DurationLocale::En).unwrap(), "2h0m");
        assert_eq!(format_full(50, DurationLocale::Ja).unwrap(), "0時間50分");
    }
}
