//! Text rendering of the computed view models. Every function builds a
//! string instead of printing, which keeps the layout testable.

use ansi_term::Colour;
use anyhow::Result;

use crate::{
    analysis::{
        duration_format::{format_compact, DurationLocale},
        progress::{dash_offset, gauge_tip, semicircle_path_length, ProgressState},
        ranking::RankedApp,
        stacked::{StackedSegment, OTHER_LABEL},
    },
    data::entities::HourlyUsage,
};

/// Fixed palette for stacked segments, indexed by segment position. Index
/// based lookup is what keeps one app on one color across all days of the
/// chart.
const SEGMENT_COLOURS: [Colour; 4] = [
    Colour::Purple,
    Colour::Red,
    Colour::Cyan,
    Colour::Fixed(244),
];

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

const PODIUM_COLUMN_WIDTH: usize = 14;

/// Horizontal gauge standing in for the phone's semicircle: filled cells
/// for the clamped percent. The printed number is the unclamped percent so
/// overshoot stays readable.
pub fn gauge_line(progress: &ProgressState, width: usize) -> String {
    let filled = (progress.clamped_percent / 100. * width as f64).round() as usize;
    let filled = filled.min(width);
    let mut bar = String::with_capacity(width);
    for cell in 0..width {
        bar.push(if cell < filled { '█' } else { '░' });
    }
    format!("[{bar}] {:.0}%", progress.percent)
}

/// Unicode sparkline of per-hour minutes from midnight up to
/// `current_hour` inclusive.
pub fn hourly_sparkline(hourly: &[HourlyUsage], current_hour: u32) -> String {
    let visible: Vec<_> = hourly
        .iter()
        .filter(|usage| usage.hour <= current_hour)
        .collect();
    let max = visible.iter().map(|usage| usage.minutes).max().unwrap_or(0);
    if max == 0 {
        return SPARK_LEVELS[0].to_string().repeat(visible.len());
    }
    visible
        .iter()
        .map(|usage| {
            let level = usage.minutes * (SPARK_LEVELS.len() as i64 - 1) / max;
            SPARK_LEVELS[level as usize]
        })
        .collect()
}

/// One row of the weekly chart: day letter, bar proportional to the axis
/// maximum, total for the day.
pub fn weekly_bar_line(
    day_letter: &str,
    minutes: i64,
    axis_max: i64,
    width: usize,
    locale: DurationLocale,
) -> Result<String> {
    let filled = if axis_max > 0 {
        (minutes as f64 / axis_max as f64 * width as f64).round() as usize
    } else {
        0
    };
    let filled = filled.min(width);
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(width - filled));
    Ok(format!(
        "{day_letter}  {bar}  {}",
        format_compact(minutes, locale)?
    ))
}

/// One row of the 100%-stacked chart. Cells are placed at cumulative
/// percentage boundaries, so the row is exactly `width` cells whenever the
/// day has any usage, and empty cells when it has none.
pub fn stacked_bar_line(day_letter: &str, segments: &[StackedSegment], width: usize) -> String {
    let mut bar = String::new();
    let mut cumulative = 0.;
    let mut previous_boundary = 0usize;
    for (index, segment) in segments.iter().enumerate() {
        cumulative += segment.percentage_of_total;
        let boundary = (cumulative / 100. * width as f64).round() as usize;
        let cells = boundary.saturating_sub(previous_boundary);
        previous_boundary = boundary.max(previous_boundary);
        if cells > 0 {
            let colour = SEGMENT_COLOURS[index.min(SEGMENT_COLOURS.len() - 1)];
            bar.push_str(&colour.paint("█".repeat(cells)).to_string());
        }
    }
    let empty = width.saturating_sub(previous_boundary);
    bar.push_str(&"·".repeat(empty));
    format!("{day_letter}  {bar}")
}

/// Legend row matching the stacked chart colors, one swatch per segment.
pub fn stacked_legend(segments: &[StackedSegment], locale: DurationLocale) -> String {
    segments
        .iter()
        .enumerate()
        .map(|(index, segment)| {
            let colour = SEGMENT_COLOURS[index.min(SEGMENT_COLOURS.len() - 1)];
            format!(
                "{} {}",
                colour.paint("■"),
                segment_display_label(&segment.label, locale)
            )
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Translates the synthetic "other" label; real app names pass through.
pub fn segment_display_label<'a>(label: &'a str, locale: DurationLocale) -> &'a str {
    if label == OTHER_LABEL {
        match locale {
            DurationLocale::En => "Other",
            DurationLocale::Ja => "その他",
        }
    } else {
        label
    }
}

/// Three-column podium with first place in the middle. `podium` is expected
/// in display order, the way [crate::analysis::ranking::podium_order]
/// returns it.
pub fn podium_lines(podium: &[RankedApp], locale: DurationLocale) -> Result<Vec<String>> {
    if podium.is_empty() {
        return Ok(vec![]);
    }
    let mut names = String::new();
    let mut ranks = String::new();
    let mut times = String::new();
    for entry in podium {
        names.push_str(&center(entry.app.app_name.as_ref(), PODIUM_COLUMN_WIDTH));
        ranks.push_str(&center(&format!("#{}", entry.rank), PODIUM_COLUMN_WIDTH));
        times.push_str(&center(
            &format_compact(entry.app.minutes, locale)?,
            PODIUM_COLUMN_WIDTH,
        ));
    }
    Ok(vec![
        names.trim_end().to_string(),
        ranks.trim_end().to_string(),
        times.trim_end().to_string(),
    ])
}

/// One row of the list below the podium.
pub fn list_line(entry: &RankedApp, locale: DurationLocale) -> Result<String> {
    Ok(format!(
        "{}. {}  {}",
        entry.rank,
        entry.app.app_name,
        format_compact(entry.app.minutes, locale)?
    ))
}

fn center(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.chars().count());
    let left = padding / 2;
    format!(
        "{}{}{}",
        " ".repeat(left),
        text,
        " ".repeat(padding - left)
    )
}

/// Mirrors the phone gauge in SVG: a 240x120 viewbox, radius 80 semicircle
/// with round caps, progress stroke driven by the dash offset and a tip
/// marker at the end of the sweep.
pub fn gauge_svg(progress: &ProgressState) -> String {
    let radius = 80.;
    let stroke_width = 16.;
    let cx = 120.;
    let cy = 100.;
    let start_x = cx - radius;
    let end_x = cx + radius;
    let arc_path = format!("M {start_x} {cy} A {radius} {radius} 0 0 1 {end_x} {cy}");
    let arc_length = semicircle_path_length(radius);
    let offset = dash_offset(arc_length, progress.clamped_percent);
    let (tip_x, tip_y) = gauge_tip(progress.clamped_percent, radius, cx, cy);
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="240" height="120" viewBox="0 0 240 120">
  <path d="{arc_path}" fill="none" stroke="#e5e2dd" stroke-width="{stroke_width}" stroke-linecap="round"/>
  <path d="{arc_path}" fill="none" stroke="#7c6bd6" stroke-width="{stroke_width}" stroke-linecap="round" stroke-dasharray="{arc_length}" stroke-dashoffset="{offset}"/>
  <circle cx="{tip_x}" cy="{tip_y}" r="6" fill="#7c6bd6"/>
</svg>
"##
    )
}
