/// The number of stars a review awards.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct RatingValue(u8);

impl RatingValue {
    pub const fn min() -> Self {
        Self(1)
    }

    pub const fn max() -> Self {
        Self(5)
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }

    /// Accepts only values inside the valid range.
    pub fn try_new(val: i64) -> Option<Self> {
        u8::try_from(val).ok().map(Self).filter(|v| v.is_valid())
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

impl From<RatingValue> for i16 {
    fn from(from: RatingValue) -> Self {
        i16::from(from.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_range() {
        assert!(RatingValue::try_new(0).is_none());
        assert!(RatingValue::try_new(-3).is_none());
        assert!(RatingValue::try_new(6).is_none());
        assert!(RatingValue::try_new(1_000).is_none());
        for v in 1..=5 {
            assert_eq!(v as u8, u8::from(RatingValue::try_new(v).unwrap()));
        }
        assert!(!RatingValue::default().is_valid());
    }
}
