//! `Calendar` trait and the weekends-only calendar.
//!
//! A calendar answers "is this date a business day?" one date at a time.
//! Its [`Calendar::business_days_between`] walks the range day by day and is
//! the reference the closed-form counter is tested against.

use crate::date::Date;

/// A business-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Australia"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a business day in this calendar.
    fn is_business_day(&self, date: Date) -> bool;

    /// Return `true` if `date` is a holiday (non-business) day.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Return `true` if `date` is a Saturday or Sunday.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Count the business days strictly between `start` and `end` by visiting
    /// each day.  Returns 0 when `start >= end`.
    fn business_days_between(&self, start: Date, end: Date) -> i32 {
        if start >= end {
            return 0;
        }
        let mut count = 0;
        let mut d = start + 1;
        while d < end {
            if self.is_business_day(d) {
                count += 1;
            }
            d += 1;
        }
        count
    }
}

/// A calendar that treats only Saturdays and Sundays as non-business days.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date)
    }
}
