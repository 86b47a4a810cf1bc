//! Screen time dashboard for the terminal. Renders a Today view (usage
//! against a daily goal, app ranking, hourly chart) and a Statistics view
//! (weekly totals, per-day stacked app breakdowns, week-over-week app
//! trends) from a pluggable usage source.
//!

pub mod analysis;
pub mod cli;
pub mod data;
pub mod utils;
