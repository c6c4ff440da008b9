//! # bd-time
//!
//! Dates, recurring holiday rules, and business-day counting.
//!
//! The counting pipeline is:
//!
//! 1. [`HolidayExpander`] resolves each [`HolidayRule`] for every year the
//!    query spans and keeps the dates strictly inside the range;
//! 2. [`date_math`] counts the days and weekend days strictly inside the
//!    range in closed form;
//! 3. [`BusinessDayCounter`] subtracts weekends and weekday holidays.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day counting and the validated `DateRange`.
pub mod business_day_counter;

/// Calendar trait and the weekends-only calendar.
pub mod calendar;

/// Concrete rule-driven calendars.
pub mod calendars;

/// `Date` type.
pub mod date;

/// Closed-form day and weekend counts.
pub mod date_math;

/// Expansion of rule sets into concrete holidays.
pub mod holiday_expander;

/// Recurring holiday rules.
pub mod holiday_rule;

/// `Month`, the month of the year.
pub mod month;

/// Holiday rules in their configuration shape.
pub mod rule_record;

/// `Weekday`, the day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_day_counter::{business_days, BusinessDayCounter, DateRange};
pub use calendar::{Calendar, WeekendsOnly};
pub use calendars::RuleCalendar;
pub use date::Date;
pub use holiday_expander::{expand_holidays, HolidayExpander};
pub use holiday_rule::HolidayRule;
pub use month::Month;
pub use rule_record::{parse_rules, HolidayRuleRecord};
pub use weekday::Weekday;
