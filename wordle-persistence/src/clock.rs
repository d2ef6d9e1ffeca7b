use chrono::NaiveDate;

/// Source of "today". Injected so day-rollover behavior is testable.
pub trait Clock: Send + Sync {
    /// The local calendar date, truncated to day granularity. Two instants
    /// belong to the same game day iff their dates are equal.
    fn today(&self) -> NaiveDate;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Clock pinned to a fixed date, for deterministic tests.
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
