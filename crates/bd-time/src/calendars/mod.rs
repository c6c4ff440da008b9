//! Concrete calendars built from holiday rules.

/// Australian national holiday rules.
pub mod australia;

/// Calendar backed by a list of [`HolidayRule`](crate::HolidayRule)s.
pub mod rule_calendar;

pub use rule_calendar::RuleCalendar;
