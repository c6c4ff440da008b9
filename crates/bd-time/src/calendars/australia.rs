//! Australia holiday rules.

use crate::calendars::rule_calendar::RuleCalendar;
use crate::holiday_rule::HolidayRule;
use bd_core::errors::Result;

/// National holiday rules for Australia, excluding the Easter holidays.
///
/// * New Year's Day (Jan 1, moved to Monday if on a weekend)
/// * Australia Day (Jan 26, moved to Monday if on a weekend)
/// * Anzac Day (Apr 25)
/// * King's Birthday (2nd Monday of June)
/// * Christmas Day (Dec 25)
/// * Boxing Day (Dec 26)
pub fn rules() -> Vec<HolidayRule> {
    vec![
        HolidayRule::WeekendShifted { month: 1, day: 1 },
        HolidayRule::WeekendShifted { month: 1, day: 26 },
        HolidayRule::Fixed { month: 4, day: 25 },
        HolidayRule::NthWeekday {
            month: 6,
            weekday: 0,
            occurrence: 2,
        },
        HolidayRule::Fixed { month: 12, day: 25 },
        HolidayRule::Fixed { month: 12, day: 26 },
    ]
}

/// A [`RuleCalendar`] named `"Australia"` built from [`rules`].
pub fn calendar(first_year: u16, last_year: u16) -> Result<RuleCalendar> {
    RuleCalendar::new("Australia", &rules(), first_year, last_year)
}
