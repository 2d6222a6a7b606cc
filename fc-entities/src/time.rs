use std::{
    fmt,
    ops::{Add, Sub},
    time::Duration,
};

use time::{format_description::well_known::Rfc3339, OffsetDateTime};

/// A UTC point in time with millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn now() -> Self {
        let nanos = OffsetDateTime::now_utc().unix_timestamp_nanos();
        Self((nanos / 1_000_000) as i64)
    }

    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }

    pub const fn as_secs(self) -> i64 {
        self.0.div_euclid(1_000)
    }

    fn to_offset_date_time(self) -> Option<OffsetDateTime> {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(self.0) * 1_000_000).ok()
    }
}

impl Add<Duration> for Timestamp {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self {
        let millis = i64::try_from(rhs.as_millis()).unwrap_or(i64::MAX);
        Self(self.0.saturating_add(millis))
    }
}

impl Sub<Duration> for Timestamp {
    type Output = Self;

    fn sub(self, rhs: Duration) -> Self {
        let millis = i64::try_from(rhs.as_millis()).unwrap_or(i64::MAX);
        Self(self.0.saturating_sub(millis))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.to_offset_date_time().and_then(|t| t.format(&Rfc3339).ok()) {
            Some(formatted) => f.write_str(&formatted),
            None => write!(f, "{}ms", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_from_into_millis() {
        let t1 = Timestamp::now();
        let t2 = Timestamp::from_millis(t1.as_millis());
        assert_eq!(t1, t2);
    }

    #[test]
    fn add_and_subtract_durations() {
        let t = Timestamp::from_millis(1_000);
        assert_eq!(Timestamp::from_millis(61_000), t + Duration::from_secs(60));
        assert_eq!(Timestamp::from_millis(500), t - Duration::from_millis(500));
        assert!(t + Duration::from_millis(1) > t);
    }

    #[test]
    fn format_rfc3339() {
        let t = Timestamp::from_millis(0);
        assert_eq!("1970-01-01T00:00:00Z", t.to_string());
        assert_eq!(0, t.as_secs());
        assert_eq!(-1, Timestamp::from_millis(-1).as_secs());
    }
}
