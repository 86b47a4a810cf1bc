use std::path::PathBuf;

use anyhow::Result;
use chrono::{NaiveDate, Timelike};
use chrono_english::parse_date_string;
use clap::{CommandFactory, Parser};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    analysis::{
        duration_format::{format_compact, DurationLocale},
        progress::{compute_progress, ProgressState},
        ranking::{overflow_list, podium_order, rank_by_usage, RankedApp},
    },
    data::{entities::HourlyUsage, source::UsagePeriodSource},
    utils::{clock::Clock, time::date_to_day_label},
};

use super::{render, Args, DateStyle};

#[derive(Debug, Parser)]
pub struct TodayCommand {
    #[arg(
        long = "day",
        short,
        help = "Day to show. Examples are \"yesterday\", \"2 days ago\", \"15/03/2025\""
    )]
    day: Option<String>,
    #[arg(long, default_value_t = DateStyle::Uk, help = "Style of dates used during parsing. For Uk it's day/month/year. For Us it's month/day/year")]
    date_style: DateStyle,
    #[arg(long, default_value_t = DurationLocale::En, help = "Language used for duration strings")]
    lang: DurationLocale,
    #[arg(long, help = "Print the view as JSON instead of text")]
    json: bool,
    #[arg(long, help = "Write the usage gauge to an SVG file")]
    svg: Option<PathBuf>,
}

/// Everything the Today screen shows, computed once per invocation. The
/// command recomputes the whole view on each run instead of caching
/// anything, the inputs are a handful of records.
#[derive(Debug, Serialize)]
pub struct TodayView {
    pub date: NaiveDate,
    pub progress: ProgressState,
    pub used_display: String,
    pub remaining_minutes: i64,
    pub declined_count: u32,
    pub streak_days: u32,
    pub saved_minutes: i64,
    pub podium: Vec<RankedApp>,
    pub overflow: Vec<RankedApp>,
    pub hourly: Vec<HourlyUsage>,
    pub current_hour: u32,
}

/// Command to process `today`. Shows usage of a single day against the
/// daily goal.
pub async fn process_today_command(
    TodayCommand {
        day,
        date_style,
        lang,
        json,
        svg,
    }: TodayCommand,
    source: &impl UsagePeriodSource,
    clock: &impl Clock,
) -> Result<()> {
    let now = clock.time();
    let date = match day.map(|s| parse_date_string(&s, now, date_style.into())) {
        Some(Ok(v)) => v.date_naive(),
        Some(Err(e)) => {
            return Err(Args::command()
                .error(
                    clap::error::ErrorKind::ValueValidation,
                    format!("Failed to validate day {e}"),
                )
                .into());
        }
        None => now.date_naive(),
    };
    // Past days show all 24 hours, today cuts the hourly chart at the
    // current hour.
    let current_hour = if date == now.date_naive() {
        now.hour()
    } else {
        23
    };

    let view = build_today_view(source, date, current_hour, lang).await?;

    if let Some(path) = &svg {
        tokio::fs::write(path, render::gauge_svg(&view.progress)).await?;
        debug!("Wrote gauge svg to {path:?}");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    print_today(&view, lang)
}

#[instrument(skip(source))]
pub async fn build_today_view(
    source: &(impl UsagePeriodSource + ?Sized),
    date: NaiveDate,
    current_hour: u32,
    lang: DurationLocale,
) -> Result<TodayView> {
    let snapshot = source.day_snapshot(date).await?;
    let goal = source.goal().await?;

    let used = snapshot.total_minutes();
    let progress = compute_progress(used, goal.daily_goal_minutes)?;
    let ranked = rank_by_usage(&snapshot.records);

    Ok(TodayView {
        date,
        used_display: format_compact(used, lang)?,
        remaining_minutes: (goal.daily_goal_minutes - used).max(0),
        declined_count: snapshot.declined_count,
        streak_days: snapshot.streak_days,
        saved_minutes: snapshot.saved_minutes,
        podium: podium_order(&ranked),
        overflow: overflow_list(&ranked),
        hourly: snapshot.hourly,
        current_hour,
        progress,
    })
}

fn print_today(view: &TodayView, lang: DurationLocale) -> Result<()> {
    println!("Today  {}", date_to_day_label(view.date));
    println!();
    println!("{}", render::gauge_line(&view.progress, 24));
    println!("Used {}", view.used_display);
    if view.progress.is_over {
        println!(
            "Over the goal by {}",
            format_compact(view.progress.overshoot_minutes, lang)?
        );
    } else {
        println!(
            "Remaining to the goal: {}",
            format_compact(view.remaining_minutes, lang)?
        );
    }
    println!();
    println!(
        "Declined prompts: {}   Streak: {} days   Saved: {}",
        view.declined_count,
        view.streak_days,
        format_compact(view.saved_minutes, lang)?
    );
    println!();
    for line in render::podium_lines(&view.podium, lang)? {
        println!("{line}");
    }
    for entry in &view.overflow {
        println!("{}", render::list_line(entry, lang)?);
    }
    println!();
    println!("{}", render::hourly_sparkline(&view.hourly, view.current_hour));
    Ok(())
}
