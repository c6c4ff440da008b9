//! `Weekday`, the day-of-week enum.
//!
//! Two numberings are in use: the ISO ordinal (Monday = 1 … Sunday = 7) and
//! the zero-based index (Monday = 0 … Sunday = 6) used by holiday rules and
//! the weekend arithmetic.

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
    /// Sunday (7).
    Sunday = 7,
}

impl Weekday {
    /// Zero-based index of Saturday.
    pub const SATURDAY_INDEX: u8 = 5;

    /// Zero-based index of Sunday.
    pub const SUNDAY_INDEX: u8 = 6;

    /// Construct from the ISO ordinal (1 = Monday … 7 = Sunday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        match n {
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            7 => Some(Weekday::Sunday),
            _ => None,
        }
    }

    /// Construct from the zero-based index (0 = Monday … 6 = Sunday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_index(n: u8) -> Option<Self> {
        n.checked_add(1).and_then(Self::from_ordinal)
    }

    /// Return `true` if this is Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }

    /// Return `true` if this is Monday–Friday.
    pub fn is_weekday(&self) -> bool {
        !self.is_weekend()
    }

    /// Return the ISO ordinal (1 = Monday … 7 = Sunday).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Return the zero-based index (0 = Monday … 6 = Sunday).
    pub fn index(&self) -> u8 {
        *self as u8 - 1
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_and_ordinal_agree() {
        for i in 0..7u8 {
            let w = Weekday::from_index(i).unwrap();
            assert_eq!(w.index(), i);
            assert_eq!(w.ordinal(), i + 1);
            assert_eq!(Weekday::from_ordinal(i + 1), Some(w));
        }
        assert_eq!(Weekday::from_index(7), None);
        assert_eq!(Weekday::from_ordinal(0), None);
        assert_eq!(Weekday::from_index(u8::MAX), None);
    }

    #[test]
    fn weekend_indices() {
        assert_eq!(Weekday::Saturday.index(), Weekday::SATURDAY_INDEX);
        assert_eq!(Weekday::Sunday.index(), Weekday::SUNDAY_INDEX);
        assert!(Weekday::Saturday.is_weekend());
        assert!(Weekday::Friday.is_weekday());
    }
}
