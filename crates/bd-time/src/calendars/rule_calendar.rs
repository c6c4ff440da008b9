//! Rule calendar: a calendar whose holidays come from [`HolidayRule`]s.

use std::collections::HashSet;

use tracing::debug;

use crate::calendar::Calendar;
use crate::date::Date;
use crate::holiday_rule::HolidayRule;
use bd_core::errors::Result;
use bd_core::ensure;

/// A calendar with holidays expanded from rules over a fixed span of years.
///
/// Holidays are resolved once, at construction, for every year in
/// `first_year..=last_year`.  Outside that span only weekends are known, so
/// [`RuleCalendar::covers`] should be checked when that matters.  One-off
/// holidays can be added on top with [`RuleCalendar::add_holiday`].
#[derive(Debug, Clone)]
pub struct RuleCalendar {
    name: String,
    rules: Vec<HolidayRule>,
    first_year: u16,
    last_year: u16,
    holidays: HashSet<Date>,
}

impl RuleCalendar {
    /// Build a calendar from `rules` for the years `first_year..=last_year`.
    ///
    /// # Errors
    /// A precondition error if the span is empty, or the first configuration
    /// error raised by any rule.
    pub fn new(
        name: impl Into<String>,
        rules: &[HolidayRule],
        first_year: u16,
        last_year: u16,
    ) -> Result<Self> {
        ensure!(
            first_year <= last_year,
            "empty year span {first_year}..={last_year}"
        );
        let mut holidays = HashSet::new();
        for rule in rules {
            holidays.extend(rule.expand(first_year, last_year)?);
        }
        let name = name.into();
        debug!(
            calendar = %name,
            first_year,
            last_year,
            holidays = holidays.len(),
            "built rule calendar"
        );
        Ok(Self {
            name,
            rules: rules.to_vec(),
            first_year,
            last_year,
            holidays,
        })
    }

    /// The rules this calendar was built from.
    pub fn rules(&self) -> &[HolidayRule] {
        &self.rules
    }

    /// Return `true` if `date` falls in the span of years holidays were
    /// resolved for.
    pub fn covers(&self, date: Date) -> bool {
        (self.first_year..=self.last_year).contains(&date.year())
    }

    /// Add a one-off holiday.  Weekends are already non-business days.
    pub fn add_holiday(&mut self, date: Date) {
        self.holidays.insert(date);
    }

    /// Return the number of distinct holiday dates, weekend ones included.
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }

    /// Return the holidays falling on a weekday, in ascending order.
    pub fn weekday_holidays(&self) -> Vec<Date> {
        let mut dates: Vec<Date> = self
            .holidays
            .iter()
            .copied()
            .filter(|d| d.weekday().is_weekday())
            .collect();
        dates.sort_unstable();
        dates
    }
}

impl Calendar for RuleCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.holidays.contains(&date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::Weekday;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn empty_rules_is_weekends_only() {
        let cal = RuleCalendar::new("Test", &[], 2024, 2024).unwrap();
        assert_eq!(cal.name(), "Test");
        assert!(cal.is_business_day(date(2024, 1, 8)));
        assert!(!cal.is_business_day(date(2024, 1, 6)));
        assert_eq!(cal.holiday_count(), 0);
    }

    #[test]
    fn rules_become_holidays() {
        let rules = [
            HolidayRule::fixed(4, 25).unwrap(),
            HolidayRule::weekend_shifted(1, 1).unwrap(),
            HolidayRule::nth_weekday(6, Weekday::Monday, 2).unwrap(),
        ];
        let cal = RuleCalendar::new("Custom", &rules, 2023, 2023).unwrap();
        assert!(!cal.is_business_day(date(2023, 4, 25)));
        assert!(!cal.is_business_day(date(2023, 1, 2)));
        assert!(!cal.is_business_day(date(2023, 6, 12)));
        assert!(cal.is_business_day(date(2023, 6, 13)));
        assert_eq!(
            cal.weekday_holidays(),
            vec![date(2023, 1, 2), date(2023, 4, 25), date(2023, 6, 12)]
        );
        assert_eq!(cal.rules().len(), 3);
    }

    #[test]
    fn add_one_off_holiday() {
        let mut cal = RuleCalendar::new("Custom", &[], 2024, 2024).unwrap();
        let holiday = date(2024, 3, 15); // Friday
        assert!(cal.is_business_day(holiday));
        cal.add_holiday(holiday);
        assert!(!cal.is_business_day(holiday));
        assert_eq!(cal.holiday_count(), 1);
    }

    #[test]
    fn coverage() {
        let cal = RuleCalendar::new("Span", &[], 2020, 2022).unwrap();
        assert!(cal.covers(date(2020, 1, 1)));
        assert!(cal.covers(date(2022, 12, 31)));
        assert!(!cal.covers(date(2023, 1, 1)));
    }

    #[test]
    fn invalid_inputs() {
        assert!(RuleCalendar::new("Empty", &[], 2024, 2023).is_err());
        let bad = [HolidayRule::Fixed { month: 2, day: 29 }];
        assert!(RuleCalendar::new("Leap", &bad, 2023, 2024).is_err());
        assert!(RuleCalendar::new("Leap", &bad, 2024, 2024).is_ok());
    }
}
