//! Business-day counting between two dates.
//!
//! A business day is a Monday–Friday that is not a public holiday.  Both
//! endpoints of a query are excluded, so `(Mon 7th, Wed 9th)` contains one
//! business day, Tuesday the 8th.
//!
//! # Degenerate ranges
//! When `start >= end` there is nothing strictly between the two dates and
//! every count in this module is zero.  This is part of the contract, not an
//! error the caller has to handle: [`DateRange::new`] reports it as
//! [`Error::Validation`] and the counting functions map that to `0`.
//! Holiday-rule configuration errors, by contrast, are always returned.

use std::collections::BTreeSet;

use tracing::debug;

use crate::date::Date;
use crate::date_math::{days_between_exclusive, weekend_days_in_range};
use crate::holiday_expander::HolidayExpander;
use crate::holiday_rule::HolidayRule;
use bd_core::errors::{Error, Result};

/// A validated query range with `start < end`, both ends exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    /// Validate and build a range.
    ///
    /// # Errors
    /// [`Error::Validation`] if either date is null or `start >= end`.
    pub fn new(start: Date, end: Date) -> Result<Self> {
        if start.is_null() || end.is_null() {
            return Err(Error::Validation("null date in range".into()));
        }
        if start >= end {
            return Err(Error::Validation(format!(
                "start {start} must precede end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// The excluded first date.
    pub fn start(&self) -> Date {
        self.start
    }

    /// The excluded last date.
    pub fn end(&self) -> Date {
        self.end
    }

    /// Calendar days strictly inside the range.
    pub fn total_days(&self) -> i32 {
        days_between_exclusive(self.start, self.end)
    }

    /// Saturdays and Sundays strictly inside the range.
    pub fn weekend_days(&self) -> i32 {
        weekend_days_in_range(self.start, self.total_days())
    }

    /// Monday–Friday days strictly inside the range.
    pub fn weekdays(&self) -> i32 {
        self.total_days() - self.weekend_days()
    }

    /// Return `true` if `date` lies strictly inside the range.
    pub fn contains(&self, date: Date) -> bool {
        self.start < date && date < self.end
    }

    /// Count the distinct weekday holidays strictly inside the range.
    ///
    /// Holidays on a weekend are skipped because the weekend count already
    /// excludes them.
    pub fn weekday_holidays<I>(&self, holidays: I) -> i32
    where
        I: IntoIterator<Item = Date>,
    {
        holidays
            .into_iter()
            .filter(|&d| self.contains(d) && d.weekday().is_weekday())
            .collect::<BTreeSet<_>>()
            .len() as i32
    }
}

/// Counts business days between two dates.
///
/// The counter is stateless; every call is a pure function of its arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct BusinessDayCounter;

impl BusinessDayCounter {
    /// Create a counter.
    pub fn new() -> Self {
        Self
    }

    /// Weekdays strictly between `start` and `end`, ignoring holidays.
    pub fn weekdays_between(&self, start: Date, end: Date) -> i32 {
        match DateRange::new(start, end) {
            Ok(range) => range.weekdays(),
            Err(_) => 0,
        }
    }

    /// Business days strictly between `start` and `end`, given concrete
    /// holiday dates.
    ///
    /// Duplicates, weekend dates, and dates outside the range in `holidays`
    /// are ignored.
    pub fn business_days_with_holidays(&self, start: Date, end: Date, holidays: &[Date]) -> i32 {
        match DateRange::new(start, end) {
            Ok(range) => Self::count(&range, holidays.iter().copied()),
            Err(_) => 0,
        }
    }

    /// Business days strictly between `start` and `end`, given recurring
    /// holiday rules.
    ///
    /// Returns `Ok(0)` when `start >= end`.
    ///
    /// # Errors
    /// Any configuration error raised while expanding `rules`.
    pub fn business_days_between(
        &self,
        start: Date,
        end: Date,
        rules: &[HolidayRule],
    ) -> Result<i32> {
        let range = match DateRange::new(start, end) {
            Ok(range) => range,
            Err(e) => {
                debug!(%start, %end, reason = %e, "degenerate range, no business days");
                return Ok(0);
            }
        };
        let holidays = HolidayExpander::new(range.start(), range.end()).expand(rules)?;
        Ok(Self::count(&range, holidays))
    }

    fn count<I>(range: &DateRange, holidays: I) -> i32
    where
        I: IntoIterator<Item = Date>,
    {
        let total_days = range.total_days();
        let weekend_days = range.weekend_days();
        let holiday_days = range.weekday_holidays(holidays);
        let business_days = total_days - weekend_days - holiday_days;
        debug!(
            start = %range.start(),
            end = %range.end(),
            total_days,
            weekend_days,
            holiday_days,
            business_days,
            "counted business days"
        );
        business_days
    }
}

/// Business days strictly between `start` and `end` under `rules`.
///
/// This is the main entry point of the crate.  A reversed or empty range
/// yields `Ok(0)`; malformed holiday rules yield an error.
///
/// # Example
/// ```
/// use bd_time::{business_days, Date, HolidayRule};
///
/// let start = Date::from_ymd(2013, 10, 7).unwrap();
/// let end = Date::from_ymd(2014, 1, 1).unwrap();
/// let rules = [
///     HolidayRule::Fixed { month: 12, day: 25 },
///     HolidayRule::Fixed { month: 12, day: 26 },
///     HolidayRule::Fixed { month: 1, day: 1 },
/// ];
/// assert_eq!(business_days(start, end, &rules).unwrap(), 59);
/// ```
pub fn business_days(start: Date, end: Date, rules: &[HolidayRule]) -> Result<i32> {
    BusinessDayCounter.business_days_between(start, end, rules)
}
