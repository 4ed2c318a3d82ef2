//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity. Entity identity is
//! carried by the integer keys defined here.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

use super::error::ValidationError;

/// Minimum number of characters in a visitor name
pub const VISITOR_NAME_MIN_LEN: usize = 1;

/// Maximum number of characters in a visitor name
pub const VISITOR_NAME_MAX_LEN: usize = 15;

/// Minimum number of characters in a national park name
pub const PARK_NAME_MIN_LEN: usize = 3;

/// `Month Day<suffix>`; `\w` and `\d` are Unicode-aware and one trailing
/// newline is tolerated.
static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\w+) (\d{1,2})(st|nd|rd|th)\n?$").expect("date pattern is valid")
});

static DECIMAL_DIGIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d$").expect("digit pattern is valid"));

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        pub struct $name(usize);

        impl $name {
            /// Create an identifier from its raw key.
            pub fn new(value: usize) -> Self {
                Self(value)
            }

            /// Get the raw key.
            pub fn value(&self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "#{}"), self.0)
            }
        }
    };
}

entity_id!(
    /// Visitor identifier, assigned by the repository in creation order.
    VisitorId,
    "visitor"
);

entity_id!(
    /// National park identifier, assigned by the repository in creation order.
    ParkId,
    "park"
);

entity_id!(
    /// Trip identifier, assigned by the repository in creation order.
    TripId,
    "trip"
);

/// Visitor name value object.
///
/// Holds between 1 and 15 characters, counted as Unicode scalar values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct VisitorName(String);

impl VisitorName {
    /// Create a new VisitorName.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::VisitorNameLength` if the name is empty or
    /// longer than 15 characters.
    pub fn new(name: String) -> Result<Self, ValidationError> {
        let len = name.chars().count();
        if !(VISITOR_NAME_MIN_LEN..=VISITOR_NAME_MAX_LEN).contains(&len) {
            return Err(ValidationError::VisitorNameLength {
                min: VISITOR_NAME_MIN_LEN,
                max: VISITOR_NAME_MAX_LEN,
                actual: len,
            });
        }
        Ok(Self(name))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl fmt::Display for VisitorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// National park name value object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ParkName(String);

impl ParkName {
    /// Create a new ParkName.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ParkNameTooShort` if the name has fewer
    /// than 3 characters.
    pub fn new(name: String) -> Result<Self, ValidationError> {
        let len = name.chars().count();
        if len < PARK_NAME_MIN_LEN {
            return Err(ValidationError::ParkNameTooShort {
                min: PARK_NAME_MIN_LEN,
                actual: len,
            });
        }
        Ok(Self(name))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl fmt::Display for ParkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trip date value object.
///
/// Accepts strings of the form `<word> <1-2 digits><st|nd|rd|th>`, such as
/// `May 5th`, optionally followed by a single `\n`. Word characters and
/// digits follow Unicode, so `May ５th` is a valid date. The suffix is not
/// checked against the day, so `May 5nd` is a valid date too.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TripDate {
    value: String,
    month_len: usize,
    day: u8,
    suffix_at: usize,
}

impl TripDate {
    /// Create a new TripDate.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDateFormat` if the string does not
    /// follow the `Month Day<suffix>` format.
    pub fn new(value: String) -> Result<Self, ValidationError> {
        match parse_date(&value) {
            Some((month_len, day, suffix_at)) => Ok(Self {
                value,
                month_len,
                day,
                suffix_at,
            }),
            None => Err(ValidationError::InvalidDateFormat { value }),
        }
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The word before the space, e.g. `May`.
    pub fn month(&self) -> &str {
        &self.value[..self.month_len]
    }

    /// The numeric day, e.g. `5` for `May 5th`.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// The two-letter ordinal suffix, e.g. `th`.
    pub fn suffix(&self) -> &str {
        &self.value[self.suffix_at..self.suffix_at + 2]
    }
}

impl fmt::Display for TripDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Serialize for TripDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

/// Split a date into its month length (in bytes), day number and the byte
/// offset of its suffix.
fn parse_date(value: &str) -> Option<(usize, u8, usize)> {
    let caps = DATE_PATTERN.captures(value)?;
    let month = caps.get(1)?;
    let digits = caps.get(2)?;
    let suffix = caps.get(3)?;

    let day = digits
        .as_str()
        .chars()
        .fold(0u32, |acc, c| acc * 10 + digit_value(c));

    Some((month.end(), u8::try_from(day).ok()?, suffix.start()))
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0; 4];
    DECIMAL_DIGIT.is_match(c.encode_utf8(&mut buf))
}

/// Numeric value of a Unicode decimal digit.
///
/// Decimal digits are encoded in contiguous runs of ten starting at zero,
/// so the value is the distance to the start of the run, modulo ten.
fn digit_value(c: char) -> u32 {
    if let Some(d) = c.to_digit(10) {
        return d;
    }
    let mut steps = 0;
    let mut code = c as u32;
    while let Some(prev) = code.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        steps += 1;
        code -= 1;
    }
    steps % 10
}
