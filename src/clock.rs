//! Date source for the footer copyright line.
//!
//! The year is read through a [`Clock`] on every render, never captured once
//! at startup, so a long-running process rolls over on 1 January.

use std::cell::Cell;

use chrono::{Datelike, Duration, Local, NaiveDate};

pub trait Clock {
    fn today(&self) -> NaiveDate;

    fn current_year(&self) -> i32 {
        self.today().year()
    }
}

/// Local wall-clock date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Hand-driven clock for tests and reproducible renders.
#[derive(Debug, Clone)]
pub struct ManualClock {
    today: Cell<NaiveDate>,
}

impl ManualClock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today: Cell::new(today),
        }
    }

    /// Clock fixed at `year-month-day`, or `None` for an impossible date.
    pub fn at(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self::new)
    }

    pub fn set(&self, today: NaiveDate) {
        self.today.set(today);
    }

    /// Move forward by `days`. Saturates at chrono's maximum date.
    pub fn advance_days(&self, days: i64) {
        let current = self.today.get();
        let next = current
            .checked_add_signed(Duration::days(days))
            .unwrap_or(NaiveDate::MAX);
        self.today.set(next);
    }
}

impl Clock for ManualClock {
    fn today(&self) -> NaiveDate {
        self.today.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_crosses_year_boundary() {
        let clock = ManualClock::at(2025, 12, 31).unwrap();
        assert_eq!(clock.current_year(), 2025);
        clock.advance_days(1);
        assert_eq!(clock.current_year(), 2026);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
    }

    #[test]
    fn impossible_dates_are_rejected() {
        assert!(ManualClock::at(2025, 2, 30).is_none());
    }

    #[test]
    fn system_clock_reports_a_plausible_year() {
        assert!(SystemClock.current_year() >= 2024);
    }
}
