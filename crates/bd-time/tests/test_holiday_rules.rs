//! Holiday rules: expansion scenarios and configuration parsing.

use bd_core::Error;
use bd_time::rule_record::{CERTAIN_OCCURRENCE_HOLIDAY, MOVEABLE_HOLIDAY, PUBLIC_HOLIDAY};
use bd_time::{business_days, parse_rules, Date, HolidayRule, HolidayRuleRecord, Weekday};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

const RULES_JSON: &str = r#"[
    { "holiday_type": "public_holiday", "description": "Anzac Day", "month": 4, "day": 25 },
    { "holiday_type": "moveable_holiday", "description": "New Year's Day", "month": 1, "day": 1 },
    {
        "holiday_type": "certain_occurrence_holiday",
        "description": "King's Birthday",
        "month": 6,
        "day": 0,
        "occurrence": 2
    }
]"#;

#[test]
fn weekend_shifted_new_year_2023() {
    let rule = HolidayRule::WeekendShifted { month: 1, day: 1 };
    assert_eq!(rule.resolve(2023).unwrap(), date(2023, 1, 2));
}

#[test]
fn second_monday_of_june_2023() {
    let rule = HolidayRule::NthWeekday {
        month: 6,
        weekday: 0,
        occurrence: 2,
    };
    let resolved = rule.resolve(2023).unwrap();
    assert_eq!(resolved, date(2023, 6, 12));
    assert_eq!(resolved.weekday(), Weekday::Monday);
}

#[test]
fn every_weekday_of_every_month_resolves_in_place() {
    for year in [2013u16, 2020, 2023, 2024] {
        for month in 1..=12u8 {
            for weekday in 0..=6u8 {
                for occurrence in 1..=4u8 {
                    let rule = HolidayRule::NthWeekday {
                        month,
                        weekday,
                        occurrence,
                    };
                    let d = rule.resolve(year).unwrap();
                    assert_eq!(d.month(), month, "{rule} in {year}");
                    assert_eq!(d.weekday().index(), weekday, "{rule} in {year}");
                    let day = d.day_of_month();
                    assert!(
                        (7 * (occurrence - 1) + 1..=7 * occurrence).contains(&day),
                        "{rule} in {year} resolved to {d}"
                    );
                }
            }
        }
    }
}

#[test]
fn parse_records_from_json() {
    let records: Vec<HolidayRuleRecord> = serde_json::from_str(RULES_JSON).unwrap();
    assert_eq!(records[0].holiday_type, PUBLIC_HOLIDAY);
    assert_eq!(records[1].holiday_type, MOVEABLE_HOLIDAY);
    assert_eq!(records[2].holiday_type, CERTAIN_OCCURRENCE_HOLIDAY);
    assert_eq!(records[2].description.as_deref(), Some("King's Birthday"));

    let rules = parse_rules(&records).unwrap();
    assert_eq!(
        rules,
        vec![
            HolidayRule::Fixed { month: 4, day: 25 },
            HolidayRule::WeekendShifted { month: 1, day: 1 },
            HolidayRule::NthWeekday {
                month: 6,
                weekday: 0,
                occurrence: 2
            },
        ]
    );

    // New Year's Day 2023 moves to Monday Jan 2
    assert_eq!(business_days(date(2022, 12, 26), date(2023, 1, 4), &rules), Ok(5));
}

#[test]
fn unknown_holiday_type_in_json() {
    let json = r#"[{ "holiday_type": "easter_holiday", "month": 4, "day": 9 }]"#;
    let records: Vec<HolidayRuleRecord> = serde_json::from_str(json).unwrap();
    assert_eq!(
        parse_rules(&records),
        Err(Error::UnsupportedRule("easter_holiday".into()))
    );
}

#[test]
fn tagged_rule_form_roundtrips() {
    let json = r#"[
        { "rule": "fixed", "month": 12, "day": 25 },
        { "rule": "weekend_shifted", "month": 1, "day": 26 },
        { "rule": "nth_weekday", "month": 6, "weekday": 0, "occurrence": 2 }
    ]"#;
    let rules: Vec<HolidayRule> = serde_json::from_str(json).unwrap();
    assert_eq!(rules[0], HolidayRule::Fixed { month: 12, day: 25 });
    assert_eq!(rules[1], HolidayRule::WeekendShifted { month: 1, day: 26 });

    let encoded = serde_json::to_string(&rules[2]).unwrap();
    assert_eq!(
        encoded,
        r#"{"rule":"nth_weekday","month":6,"weekday":0,"occurrence":2}"#
    );
}

#[test]
fn deserialized_rules_are_validated_before_use() {
    // serde accepts the shape; expansion rejects the month
    let rules: Vec<HolidayRule> =
        serde_json::from_str(r#"[{ "rule": "fixed", "month": 14, "day": 1 }]"#).unwrap();
    let err = business_days(date(2023, 1, 1), date(2023, 2, 1), &rules).unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
}
