use chrono::{DateTime, Local};

/// Represents an entity responsible for providing dates across the
/// application. This allows commands that depend on "today" and the current
/// hour to be tested against a fixed moment.
pub trait Clock: Sync + Send + 'static {
    fn time(&self) -> DateTime<Local>;
}

pub struct DefaultClock;

impl Clock for DefaultClock {
    fn time(&self) -> DateTime<Local> {
        Local::now()
    }
}
