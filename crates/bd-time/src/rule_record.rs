//! Holiday rule records as they appear in configuration.
//!
//! Configuration files describe holidays as flat records with a
//! `holiday_type` tag:
//!
//! ```json
//! [
//!   { "holiday_type": "public_holiday", "description": "Anzac Day", "month": 4, "day": 25 },
//!   { "holiday_type": "moveable_holiday", "description": "New Year's Day", "month": 1, "day": 1 },
//!   { "holiday_type": "certain_occurrence_holiday", "description": "King's Birthday",
//!     "month": 6, "day": 0, "occurrence": 2 }
//! ]
//! ```
//!
//! For `certain_occurrence_holiday`, `day` holds the weekday index
//! (0 = Monday … 6 = Sunday).  Records are converted into [`HolidayRule`]s
//! with [`HolidayRule::try_from`] or [`parse_rules`].

use serde::{Deserialize, Serialize};

use crate::holiday_rule::HolidayRule;
use bd_core::errors::{Error, Result};

/// Tag for [`HolidayRule::Fixed`].
pub const PUBLIC_HOLIDAY: &str = "public_holiday";

/// Tag for [`HolidayRule::WeekendShifted`].
pub const MOVEABLE_HOLIDAY: &str = "moveable_holiday";

/// Tag for [`HolidayRule::NthWeekday`].
pub const CERTAIN_OCCURRENCE_HOLIDAY: &str = "certain_occurrence_holiday";

/// Every tag [`HolidayRule::try_from`] understands.
pub const SUPPORTED_TAGS: [&str; 3] = [
    PUBLIC_HOLIDAY,
    MOVEABLE_HOLIDAY,
    CERTAIN_OCCURRENCE_HOLIDAY,
];

/// A holiday definition in its configuration shape.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HolidayRuleRecord {
    /// Rule kind; one of the `*_HOLIDAY` tags in this module.
    pub holiday_type: String,
    /// Free-text name, used only in diagnostics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Month, 1–12.
    #[serde(default)]
    pub month: Option<u8>,
    /// Day of month, or the weekday index for occurrence rules.
    #[serde(default)]
    pub day: Option<u8>,
    /// Occurrence within the month (occurrence rules only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occurrence: Option<u8>,
}

impl HolidayRuleRecord {
    fn label(&self) -> &str {
        self.description.as_deref().unwrap_or(&self.holiday_type)
    }

    fn require(&self, field: &str, value: Option<u8>) -> Result<u8> {
        value.ok_or_else(|| {
            Error::Configuration(format!("{}: missing required field '{field}'", self.label()))
        })
    }
}

impl TryFrom<&HolidayRuleRecord> for HolidayRule {
    type Error = Error;

    fn try_from(record: &HolidayRuleRecord) -> Result<Self> {
        if !SUPPORTED_TAGS.contains(&record.holiday_type.as_str()) {
            return Err(Error::UnsupportedRule(record.holiday_type.clone()));
        }
        let month = record.require("month", record.month)?;
        let day = record.require("day", record.day)?;
        let rule = match record.holiday_type.as_str() {
            PUBLIC_HOLIDAY => HolidayRule::Fixed { month, day },
            MOVEABLE_HOLIDAY => HolidayRule::WeekendShifted { month, day },
            CERTAIN_OCCURRENCE_HOLIDAY => HolidayRule::NthWeekday {
                month,
                weekday: day,
                occurrence: record.require("occurrence", record.occurrence)?,
            },
            other => return Err(Error::UnsupportedRule(other.to_string())),
        };
        rule.validate().map_err(|e| match e {
            Error::Configuration(msg) => {
                Error::Configuration(format!("{}: {msg}", record.label()))
            }
            other => other,
        })?;
        Ok(rule)
    }
}

impl TryFrom<HolidayRuleRecord> for HolidayRule {
    type Error = Error;

    fn try_from(record: HolidayRuleRecord) -> Result<Self> {
        HolidayRule::try_from(&record)
    }
}

/// Convert a list of records, stopping at the first invalid one.
pub fn parse_rules(records: &[HolidayRuleRecord]) -> Result<Vec<HolidayRule>> {
    records.iter().map(HolidayRule::try_from).collect()
}
