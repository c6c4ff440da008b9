//! # bizdays
//!
//! Count the business days between two calendar dates, skipping weekends and
//! public holidays described by recurring rules.
//!
//! This crate is a **façade** that re-exports the public items of the
//! workspace crates.  Application code should depend on this crate rather
//! than on `bd-core` / `bd-time` directly.
//!
//! ## Quick start
//!
//! ```rust
//! use bizdays::time::{Date, HolidayRule};
//!
//! let start = Date::from_ymd(2013, 10, 7).unwrap();
//! let end = Date::from_ymd(2014, 1, 1).unwrap();
//! let rules = [
//!     HolidayRule::Fixed { month: 12, day: 25 },
//!     HolidayRule::Fixed { month: 12, day: 26 },
//!     HolidayRule::WeekendShifted { month: 1, day: 1 },
//! ];
//!
//! // Both endpoints are excluded; Jan 1 2014 is the end date itself.
//! assert_eq!(bizdays::business_days(start, end, &rules).unwrap(), 59);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions.
pub use bd_core as core;

/// Dates, holiday rules, calendars, and counting.
pub use bd_time as time;

pub use bd_core::{Error, Result};
pub use bd_time::business_days;
