use std::sync::Arc;

use anyhow::Result;
use chrono::{Duration, NaiveDate};
use chrono_english::parse_date_string;
use clap::{CommandFactory, Parser};
use serde::Serialize;
use tracing::instrument;

use crate::{
    analysis::{
        duration_format::{format_compact, DurationLocale},
        ranking::{rank_by_usage, PODIUM_SIZE},
        stacked::{allocate_segments, StackedSegment},
        trend::{compare_periods, TrendDelta, TrendDirection},
    },
    data::{
        entities::aggregate_days,
        source::{week_of, UsagePeriodSource},
    },
    utils::{
        clock::Clock,
        percentage::{minutes_percentage, Percentage},
        time::{date_to_day_label, week_start, weekday_letter},
    },
};

use super::{render, Args, DateStyle};

/// Y axis cap of the weekly chart, 12 hours like the phone chart. Days
/// above the cap stretch the axis instead of clipping.
const AXIS_MAX_MINUTES: i64 = 720;

#[derive(Debug, Parser)]
pub struct StatsCommand {
    #[arg(
        long = "week",
        short,
        help = "Any day inside the week to show. Examples are \"yesterday\", \"last week\", \"15/03/2025\""
    )]
    week: Option<String>,
    #[arg(long, default_value_t = DateStyle::Uk, help = "Style of dates used during parsing. For Uk it's day/month/year. For Us it's month/day/year")]
    date_style: DateStyle,
    #[arg(long, default_value_t = DurationLocale::En, help = "Language used for duration strings")]
    lang: DurationLocale,
    #[arg(long, help = "Print the view as JSON instead of text")]
    json: bool,
    #[arg(short = 'p', long = "min-share", help = "Hide trend apps below this share of the week's total. \"5\" and \"2.5%\" both work", default_value_t = Percentage::new_opt(0.).unwrap())]
    min_share: Percentage,
}

#[derive(Debug, Serialize)]
pub struct StatsDay {
    pub date: NaiveDate,
    pub day_letter: String,
    pub total_minutes: i64,
    pub segments: Vec<StackedSegment>,
}

/// Everything the Statistics screen shows for one week.
#[derive(Debug, Serialize)]
pub struct StatsView {
    pub week_start: NaiveDate,
    pub days: Vec<StatsDay>,
    pub average_minutes: i64,
    pub goal_minutes: i64,
    pub axis_max_minutes: i64,
    pub top_apps: Vec<Arc<str>>,
    pub increased: Vec<TrendDelta>,
    pub decreased: Vec<TrendDelta>,
}

/// Command to process `stats`. Shows one week of usage with per-day app
/// breakdowns and the apps that moved compared to the week before.
pub async fn process_stats_command(
    StatsCommand {
        week,
        date_style,
        lang,
        json,
        min_share,
    }: StatsCommand,
    source: &impl UsagePeriodSource,
    clock: &impl Clock,
) -> Result<()> {
    let now = clock.time();
    let anchor = match week.map(|s| parse_date_string(&s, now, date_style.into())) {
        Some(Ok(v)) => v,
        Some(Err(e)) => {
            return Err(Args::command()
                .error(
                    clap::error::ErrorKind::ValueValidation,
                    format!("Failed to validate week {e}"),
                )
                .into());
        }
        None => now,
    };

    let view = build_stats_view(source, week_start(anchor), min_share).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    print_stats(&view, lang)
}

#[instrument(skip(source))]
pub async fn build_stats_view(
    source: &(impl UsagePeriodSource + ?Sized),
    week_start: NaiveDate,
    min_share: Percentage,
) -> Result<StatsView> {
    let current_days = week_of(source, week_start).await?;
    let previous_days = week_of(source, week_start - Duration::days(7)).await?;
    let goal = source.goal().await?;

    let current_period = aggregate_days("this week", &current_days);
    let previous_period = aggregate_days("previous week", &previous_days);

    // The week's top three apps decide the stacked chart positions, and
    // through them the colors, for every day of the chart.
    let top_apps: Vec<Arc<str>> = rank_by_usage(&current_period.records)
        .into_iter()
        .take(PODIUM_SIZE)
        .map(|ranked| ranked.app.app_name)
        .collect();

    let days: Vec<StatsDay> = current_days
        .iter()
        .map(|day| StatsDay {
            date: day.date,
            day_letter: weekday_letter(day.date).to_string(),
            total_minutes: day.total_minutes(),
            segments: allocate_segments(&day.records, &top_apps),
        })
        .collect();

    let week_total: i64 = days.iter().map(|day| day.total_minutes).sum();
    let average_minutes = week_total / days.len() as i64;
    let axis_max_minutes = days
        .iter()
        .map(|day| day.total_minutes)
        .fold(AXIS_MAX_MINUTES, i64::max);

    let (increased, decreased): (Vec<_>, Vec<_>) = compare_periods(&current_period, &previous_period)
        .into_iter()
        .filter(|delta| {
            let minutes = current_period
                .records
                .iter()
                .find(|record| record.app_name == delta.app_name)
                .map(|record| record.minutes)
                .unwrap_or(0);
            minutes_percentage(minutes, week_total) >= min_share
        })
        .partition(|delta| delta.direction == TrendDirection::Increased);

    Ok(StatsView {
        week_start,
        days,
        average_minutes,
        goal_minutes: goal.daily_goal_minutes,
        axis_max_minutes,
        top_apps,
        increased,
        decreased,
    })
}

fn print_stats(view: &StatsView, lang: DurationLocale) -> Result<()> {
    println!("Statistics  week of {}", date_to_day_label(view.week_start));
    println!();
    println!(
        "Daily average: {}",
        format_compact(view.average_minutes, lang)?
    );
    println!();
    for day in &view.days {
        println!(
            "{}",
            render::weekly_bar_line(
                &day.day_letter,
                day.total_minutes,
                view.axis_max_minutes,
                24,
                lang
            )?
        );
    }
    println!(
        "Average {}   Goal {}",
        format_compact(view.average_minutes, lang)?,
        format_compact(view.goal_minutes, lang)?
    );
    println!();
    println!("App breakdown, share of each day");
    for day in &view.days {
        println!("{}", render::stacked_bar_line(&day.day_letter, &day.segments, 24));
    }
    if let Some(first) = view.days.first() {
        println!("{}", render::stacked_legend(&first.segments, lang));
    }
    println!();
    println!("Increased");
    for delta in &view.increased {
        println!(
            "  {}  +{}",
            delta.app_name,
            format_compact(delta.minutes_delta.abs(), lang)?
        );
    }
    println!("Decreased");
    for delta in &view.decreased {
        println!(
            "  {}  -{}",
            delta.app_name,
            format_compact(delta.minutes_delta.abs(), lang)?
        );
    }
    Ok(())
}
