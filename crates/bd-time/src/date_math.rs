//! Closed-form day arithmetic over exclusive date ranges.
//!
//! All counts here treat both endpoints as excluded: for `start` and `end`
//! the days considered are `start + 1 ..= end - 1`.
//!
//! The weekend count avoids walking the range.  Any run of seven consecutive
//! days holds exactly two weekend days, so only the remainder of the division
//! by seven has to be inspected, and that remainder is at most six days long.

use crate::date::Date;
use crate::weekday::Weekday;

/// Number of days in a week.
pub const DAYS_PER_WEEK: i32 = 7;

/// Weekend days contained in every full week.
pub const WEEKEND_DAYS_PER_WEEK: i32 = 2;

/// Return the number of calendar days strictly between `start` and `end`.
///
/// This is `(end - start) - 1`.  The result is only meaningful when
/// `start < end`; callers check that first (see
/// [`DateRange`](crate::business_day_counter::DateRange)).
pub fn days_between_exclusive(start: Date, end: Date) -> i32 {
    start.days_between(end) - 1
}

/// Return the ISO weekday index of `date` (0 = Monday … 6 = Sunday).
pub fn weekday_index(date: Date) -> u8 {
    date.weekday().index()
}

/// Count Saturdays and Sundays among the `total_days` days strictly after
/// `start`.
///
/// With `q = total_days / 7` and `r = total_days % 7`, the result is
/// `2 * q` plus the weekend days among the `r` days immediately following
/// `start`.  The remaining `7 * q` days then form whole weeks no matter where
/// they begin.  A non-positive `total_days` yields zero.
pub fn weekend_days_in_range(start: Date, total_days: i32) -> i32 {
    if total_days <= 0 {
        return 0;
    }
    let quotient = total_days / DAYS_PER_WEEK;
    let remainder = total_days % DAYS_PER_WEEK;
    let start_index = weekday_index(start) as i32;

    let tail = (1..=remainder)
        .map(|i| ((start_index + i) % DAYS_PER_WEEK) as u8)
        .filter(|&idx| idx == Weekday::SATURDAY_INDEX || idx == Weekday::SUNDAY_INDEX)
        .count() as i32;

    quotient * WEEKEND_DAYS_PER_WEEK + tail
}

/// Count Monday–Friday days strictly between `start` and `end`.
///
/// Returns 0 when `start >= end`.
pub fn weekdays_between(start: Date, end: Date) -> i32 {
    if start >= end {
        return 0;
    }
    let total = days_between_exclusive(start, end);
    total - weekend_days_in_range(start, total)
}
