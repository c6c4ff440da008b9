//! Recurring holiday rules and their expansion into concrete dates.
//!
//! A [`HolidayRule`] is an abstract description ("December 25 every year",
//! "second Monday of June") that turns into one concrete [`Date`] per year.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::date::Date;
use crate::month::Month;
use crate::weekday::Weekday;
use bd_core::errors::{Error, Result};

/// Highest meaningful occurrence of a weekday within a month.
pub const MAX_OCCURRENCE: u8 = 5;

/// One recurring public holiday.
///
/// Rules are plain values.  They can be written literally, built through the
/// checked constructors, or deserialized (`{"rule": "fixed", "month": 4,
/// "day": 25}`); in every case [`HolidayRule::validate`] runs before a rule is
/// expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum HolidayRule {
    /// Same month and day every year, e.g. Anzac Day (April 25).
    Fixed {
        /// Month, 1–12.
        month: u8,
        /// Day of month.
        day: u8,
    },
    /// Same month and day every year, moved to the following Monday when it
    /// falls on a weekend (Saturday +2 days, Sunday +1 day).
    WeekendShifted {
        /// Month, 1–12.
        month: u8,
        /// Day of month.
        day: u8,
    },
    /// The `occurrence`-th `weekday` of `month`, e.g. the second Monday of June.
    NthWeekday {
        /// Month, 1–12.
        month: u8,
        /// Weekday index, 0 = Monday … 6 = Sunday.
        weekday: u8,
        /// 1-based occurrence within the month.
        occurrence: u8,
    },
}

impl HolidayRule {
    /// Build a validated [`HolidayRule::Fixed`].
    pub fn fixed(month: u8, day: u8) -> Result<Self> {
        let rule = HolidayRule::Fixed { month, day };
        rule.validate()?;
        Ok(rule)
    }

    /// Build a validated [`HolidayRule::WeekendShifted`].
    pub fn weekend_shifted(month: u8, day: u8) -> Result<Self> {
        let rule = HolidayRule::WeekendShifted { month, day };
        rule.validate()?;
        Ok(rule)
    }

    /// Build a validated [`HolidayRule::NthWeekday`].
    pub fn nth_weekday(month: u8, weekday: Weekday, occurrence: u8) -> Result<Self> {
        let rule = HolidayRule::NthWeekday {
            month,
            weekday: weekday.index(),
            occurrence,
        };
        rule.validate()?;
        Ok(rule)
    }

    /// Return the month (1–12) this rule falls in.
    pub fn month(&self) -> u8 {
        match *self {
            HolidayRule::Fixed { month, .. }
            | HolidayRule::WeekendShifted { month, .. }
            | HolidayRule::NthWeekday { month, .. } => month,
        }
    }

    /// Check every field against its allowed range.
    ///
    /// Days are checked against the longest possible length of the month, so
    /// February 30 is rejected here while February 29 is accepted and only
    /// fails when expanded against a non-leap year.
    ///
    /// # Errors
    /// [`Error::Configuration`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        let month = Month::from_number(self.month()).ok_or_else(|| {
            Error::Configuration(format!("month {} out of range [1, 12]", self.month()))
        })?;
        match *self {
            HolidayRule::Fixed { day, .. } | HolidayRule::WeekendShifted { day, .. } => {
                if day == 0 || day > month.max_days() {
                    return Err(Error::Configuration(format!(
                        "day {day} out of range [1, {}] for {month}",
                        month.max_days()
                    )));
                }
            }
            HolidayRule::NthWeekday {
                weekday,
                occurrence,
                ..
            } => {
                if Weekday::from_index(weekday).is_none() {
                    return Err(Error::Configuration(format!(
                        "weekday {weekday} out of range [0, 6]"
                    )));
                }
                if occurrence == 0 || occurrence > MAX_OCCURRENCE {
                    return Err(Error::Configuration(format!(
                        "occurrence {occurrence} out of range [1, {MAX_OCCURRENCE}]"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Resolve the rule to its concrete date in `year`.
    ///
    /// # Errors
    /// [`Error::Configuration`] if the rule is invalid, or if the date does not
    /// exist in `year` (February 29 outside a leap year, a fifth weekday the
    /// month does not have, a shift past the last supported date).  The
    /// message names both the rule and the year.
    pub fn resolve(&self, year: u16) -> Result<Date> {
        self.validate()?;
        self.resolve_validated(year)
    }

    /// Resolve the rule for every year in `first_year..=last_year`.
    ///
    /// An empty span (`first_year > last_year`) yields no dates.
    pub fn expand(&self, first_year: u16, last_year: u16) -> Result<Vec<Date>> {
        self.validate()?;
        (first_year..=last_year)
            .map(|year| self.resolve_validated(year))
            .collect()
    }

    fn resolve_validated(&self, year: u16) -> Result<Date> {
        let context = |e: Error| Error::Configuration(format!("{self} in {year}: {e}"));
        let date = match *self {
            HolidayRule::Fixed { month, day } => {
                Date::from_ymd(year, month, day).map_err(context)?
            }
            HolidayRule::WeekendShifted { month, day } => {
                let date = Date::from_ymd(year, month, day).map_err(context)?;
                let shift = match date.weekday() {
                    Weekday::Saturday => 2,
                    Weekday::Sunday => 1,
                    _ => 0,
                };
                date.add_days(shift).map_err(context)?
            }
            HolidayRule::NthWeekday {
                month,
                weekday,
                occurrence,
            } => {
                let weekday = Weekday::from_index(weekday)
                    .ok_or_else(|| Error::Configuration(format!("{self}: invalid weekday")))?;
                Date::nth_weekday(occurrence, weekday, year, month).map_err(context)?
            }
        };
        trace!(rule = %self, year, %date, "resolved holiday");
        Ok(date)
    }
}

impl std::fmt::Display for HolidayRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let month_name = |m: u8| Month::from_number(m).map_or("invalid month", |m| m.long_name());
        match *self {
            HolidayRule::Fixed { month, day } => write!(f, "{} {day}", month_name(month)),
            HolidayRule::WeekendShifted { month, day } => {
                write!(f, "{} {day} (weekend-shifted)", month_name(month))
            }
            HolidayRule::NthWeekday {
                month,
                weekday,
                occurrence,
            } => {
                let suffix = match occurrence {
                    1 => "st",
                    2 => "nd",
                    3 => "rd",
                    _ => "th",
                };
                match Weekday::from_index(weekday) {
                    Some(w) => write!(f, "{occurrence}{suffix} {w} of {}", month_name(month)),
                    None => write!(
                        f,
                        "{occurrence}{suffix} weekday #{weekday} of {}",
                        month_name(month)
                    ),
                }
            }
        }
    }
}
