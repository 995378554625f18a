use std::{fmt, str::FromStr};

use thiserror::Error;

/// The number of stars a comment gives to a campsite.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct RatingValue(u8);

impl RatingValue {
    pub fn new<I: Into<u8>>(val: I) -> Self {
        let new = Self(val.into());
        debug_assert!(new.is_valid());
        new
    }

    pub const fn min() -> Self {
        Self(1)
    }

    pub const fn max() -> Self {
        Self(5)
    }

    pub fn clamp(self) -> Self {
        Self(self.0.max(Self::min().0).min(Self::max().0))
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }

    /// All selectable values in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::min().0..=Self::max().0).map(Self)
    }
}

// The first selectable option.
impl Default for RatingValue {
    fn default() -> Self {
        Self::min()
    }
}

impl From<u8> for RatingValue {
    fn from(from: u8) -> Self {
        Self(from)
    }
}

impl From<RatingValue> for u8 {
    fn from(from: RatingValue) -> Self {
        from.0
    }
}

impl fmt::Display for RatingValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid rating value: {0:?}")]
pub struct RatingValueParseError(String);

impl FromStr for RatingValue {
    type Err = RatingValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .map(Self)
            .filter(|v| v.is_valid())
            .ok_or_else(|| RatingValueParseError(s.to_owned()))
    }
}
