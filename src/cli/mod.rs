pub mod render;
pub mod stats;
pub mod today;

use std::{env, fmt::Display, path::PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use stats::{process_stats_command, StatsCommand};
use today::{process_today_command, TodayCommand};
use tokio::io;
use tracing::level_filters::LevelFilter;

use crate::{
    data::mock::MockUsageSource,
    utils::{clock::DefaultClock, logging::enable_logging},
};

#[derive(Parser, Debug)]
#[command(name = "Screenwise", version, long_about = None)]
#[command(about = "Screen time dashboard with daily goals and weekly statistics", long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
    #[arg(long, help = "Enable logging")]
    log: bool,
}

#[derive(Subcommand, Debug)]
#[command(version, about, long_about = None)]
enum Commands {
    #[command(about = "Show a day's usage against the daily goal")]
    Today {
        #[command(flatten)]
        command: TodayCommand,
    },
    #[command(about = "Show weekly statistics and app trends")]
    Stats {
        #[command(flatten)]
        command: StatsCommand,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DateStyle {
    Uk,
    Us,
}

impl From<DateStyle> for chrono_english::Dialect {
    fn from(value: DateStyle) -> Self {
        match value {
            DateStyle::Uk => Self::Uk,
            DateStyle::Us => Self::Us,
        }
    }
}

impl Display for DateStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateStyle::Uk => write!(f, "uk"),
            DateStyle::Us => write!(f, "us"),
        }
    }
}

pub async fn run_cli() -> Result<()> {
    let args = Args::parse();

    let logging_level = if args.log {
        Some(LevelFilter::TRACE)
    } else {
        None
    };
    enable_logging(
        &create_application_default_path()?,
        logging_level,
        args.log,
    )?;

    // Until a real screen-time backend exists every command runs on the
    // built-in dataset.
    let source = MockUsageSource;
    let clock = DefaultClock;

    match args.commands {
        Commands::Today { command } => process_today_command(command, &source, &clock).await,
        Commands::Stats { command } => process_stats_command(command, &source, &clock).await,
    }
}

pub fn create_application_default_path() -> Result<PathBuf> {
    let path = {
        #[cfg(windows)]
        {
            let mut path =
                PathBuf::from(env::var("APPDATA").expect("APPDATA should be present on Windows"));
            path.push("screenwise");
            path
        }
        #[cfg(target_os = "linux")]
        {
            let mut path = env::var("XDG_STATE_HOME")
                .map(PathBuf::from)
                .or_else(|_| {
                    env::var("HOME").map(|home| {
                        let mut path = PathBuf::from(home);
                        path.push(".local/state");
                        path
                    })
                })
                .expect("Couldn't find neither XDG_STATE_HOME nor HOME");
            path.push("screenwise");
            path
        }
    };

    match std::fs::create_dir_all(&path) {
        Ok(_) => Ok(path),
        Err(v) if v.kind() == io::ErrorKind::AlreadyExists => Ok(path),
        Err(v) => Err(v.into()),
    }
}
