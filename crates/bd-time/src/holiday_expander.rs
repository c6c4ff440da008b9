//! Expansion of a rule set into the concrete holidays of a query range.

use std::collections::BTreeSet;

use tracing::debug;

use crate::date::Date;
use crate::holiday_rule::HolidayRule;
use bd_core::errors::Result;

/// Expands holiday rules over the years spanned by `start..end`.
///
/// Every rule is resolved for each year from `start.year()` to `end.year()`
/// inclusive.  The results are then restricted to dates strictly between
/// `start` and `end`, deduplicated, and returned in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayExpander {
    start: Date,
    end: Date,
}

impl HolidayExpander {
    /// Create an expander for the exclusive range `(start, end)`.
    pub fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    /// First year any rule is resolved for.
    pub fn first_year(&self) -> u16 {
        self.start.year()
    }

    /// Last year any rule is resolved for.
    pub fn last_year(&self) -> u16 {
        self.end.year()
    }

    /// Return `true` if `date` lies strictly inside the range.
    pub fn contains(&self, date: Date) -> bool {
        self.start < date && date < self.end
    }

    /// Expand `rules` into the concrete holidays inside the range.
    ///
    /// An empty rule list yields an empty vector.
    ///
    /// # Errors
    /// The first configuration error raised by any rule.  Errors are never
    /// swallowed, since an unexpandable rule would otherwise read as "no
    /// holidays".
    pub fn expand(&self, rules: &[HolidayRule]) -> Result<Vec<Date>> {
        let (first_year, last_year) = (self.first_year(), self.last_year());
        let mut holidays = BTreeSet::new();
        for rule in rules {
            let dates = rule.expand(first_year, last_year)?;
            holidays.extend(dates.into_iter().filter(|&d| self.contains(d)));
        }
        debug!(
            start = %self.start,
            end = %self.end,
            rules = rules.len(),
            holidays = holidays.len(),
            "expanded holiday rules"
        );
        Ok(holidays.into_iter().collect())
    }
}

/// Shorthand for `HolidayExpander::new(start, end).expand(rules)`.
pub fn expand_holidays(start: Date, end: Date, rules: &[HolidayRule]) -> Result<Vec<Date>> {
    HolidayExpander::new(start, end).expand(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::Weekday;
    use bd_core::errors::Error;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn empty_rules_give_no_holidays() {
        let holidays = expand_holidays(date(2013, 10, 7), date(2014, 1, 1), &[]).unwrap();
        assert!(holidays.is_empty());
    }

    #[test]
    fn boundaries_are_excluded() {
        let rules = [
            HolidayRule::Fixed { month: 12, day: 25 },
            HolidayRule::Fixed { month: 12, day: 26 },
            HolidayRule::Fixed { month: 1, day: 1 },
        ];
        let holidays = expand_holidays(date(2013, 10, 7), date(2014, 1, 1), &rules).unwrap();
        assert_eq!(holidays, vec![date(2013, 12, 25), date(2013, 12, 26)]);

        let holidays = expand_holidays(date(2013, 12, 25), date(2013, 12, 26), &rules).unwrap();
        assert!(holidays.is_empty());
    }

    #[test]
    fn multi_year_span_is_sorted() {
        let rules = [
            HolidayRule::Fixed { month: 4, day: 25 },
            HolidayRule::Fixed { month: 1, day: 26 },
        ];
        let holidays = expand_holidays(date(2021, 1, 1), date(2023, 12, 31), &rules).unwrap();
        assert_eq!(
            holidays,
            vec![
                date(2021, 1, 26),
                date(2021, 4, 25),
                date(2022, 1, 26),
                date(2022, 4, 25),
                date(2023, 1, 26),
                date(2023, 4, 25),
            ]
        );
    }

    #[test]
    fn coinciding_rules_are_deduplicated() {
        // 2024-12-25 is a Wednesday, so both rules land on the same day
        let rules = [
            HolidayRule::Fixed { month: 12, day: 25 },
            HolidayRule::WeekendShifted { month: 12, day: 25 },
        ];
        let holidays = expand_holidays(date(2024, 12, 1), date(2024, 12, 31), &rules).unwrap();
        assert_eq!(holidays, vec![date(2024, 12, 25)]);
    }

    #[test]
    fn shifted_date_may_enter_the_range() {
        // 2023-01-01 is a Sunday and moves to Monday 2023-01-02
        let rules = [HolidayRule::WeekendShifted { month: 1, day: 1 }];
        let holidays = expand_holidays(date(2023, 1, 1), date(2023, 1, 5), &rules).unwrap();
        assert_eq!(holidays, vec![date(2023, 1, 2)]);
    }

    #[test]
    fn nth_weekday_across_years() {
        let rules = [HolidayRule::nth_weekday(6, Weekday::Monday, 2).unwrap()];
        let holidays = expand_holidays(date(2022, 1, 1), date(2024, 1, 1), &rules).unwrap();
        assert_eq!(holidays, vec![date(2022, 6, 13), date(2023, 6, 12)]);
    }

    #[test]
    fn configuration_errors_propagate() {
        let rules = [
            HolidayRule::Fixed { month: 12, day: 25 },
            HolidayRule::Fixed { month: 2, day: 30 },
        ];
        let err = expand_holidays(date(2013, 10, 7), date(2014, 1, 1), &rules).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn out_of_range_dates_still_validate() {
        // The leap-day rule fails for 2023 even though February is outside
        // the queried range.
        let rules = [HolidayRule::Fixed { month: 2, day: 29 }];
        let err = expand_holidays(date(2023, 10, 1), date(2023, 11, 1), &rules).unwrap_err();
        assert!(err.is_configuration());
    }
}
