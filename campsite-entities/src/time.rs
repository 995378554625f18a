use std::fmt;

use ::time::{error::ComponentRange, OffsetDateTime, UtcOffset};

/// A point in time, always normalized to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(OffsetDateTime);

impl Timestamp {
    pub fn now() -> Self {
        OffsetDateTime::now_utc().into()
    }

    pub fn from_unix_timestamp(seconds: i64) -> Result<Self, ComponentRange> {
        OffsetDateTime::from_unix_timestamp(seconds).map(Self)
    }

    pub fn unix_timestamp(self) -> i64 {
        self.0.unix_timestamp()
    }

    pub const fn into_inner(self) -> OffsetDateTime {
        self.0
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self(from.to_offset(UtcOffset::UTC))
    }
}

impl From<Timestamp> for OffsetDateTime {
    fn from(from: Timestamp) -> Self {
        from.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::time::macros::datetime;

    #[test]
    fn convert_from_into_unix_timestamp() {
        let t1 = Timestamp::now();
        let t2 = Timestamp::from_unix_timestamp(t1.unix_timestamp()).unwrap();
        assert_eq!(t1.unix_timestamp(), t2.unix_timestamp());
    }

    #[test]
    fn normalize_offset_to_utc() {
        let t = Timestamp::from(datetime!(2023-06-15 01:00 +02:00));
        assert_eq!(t.into_inner(), datetime!(2023-06-14 23:00 UTC));
    }
}
