use serde::Serialize;
use std::fmt::{Display, Formatter, Result};
use std::iter::Sum;
use std::ops::{Add, Sub};

/// Money in tenths of a million, the unit fantasy prices are quoted in (45 = £4.5m).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CurrencyValue {
    pub amount: i32,
}

impl CurrencyValue {
    pub const ZERO: CurrencyValue = CurrencyValue { amount: 0 };

    pub fn new(amount: i32) -> Self {
        CurrencyValue { amount }
    }

    pub fn is_negative(&self) -> bool {
        self.amount < 0
    }

    pub fn checked_add(self, rhs: CurrencyValue) -> Option<CurrencyValue> {
        self.amount.checked_add(rhs.amount).map(CurrencyValue::new)
    }
}

// saturates instead of wrapping
impl Add for CurrencyValue {
    type Output = CurrencyValue;

    fn add(self, rhs: CurrencyValue) -> CurrencyValue {
        CurrencyValue::new(self.amount.saturating_add(rhs.amount))
    }
}

impl Sub for CurrencyValue {
    type Output = CurrencyValue;

    fn sub(self, rhs: CurrencyValue) -> CurrencyValue {
        CurrencyValue::new(self.amount.saturating_sub(rhs.amount))
    }
}

impl Sum for CurrencyValue {
    fn sum<I: Iterator<Item = CurrencyValue>>(iter: I) -> Self {
        iter.fold(CurrencyValue::ZERO, |acc, value| acc + value)
    }
}

impl<'a> Sum<&'a CurrencyValue> for CurrencyValue {
    fn sum<I: Iterator<Item = &'a CurrencyValue>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Display for CurrencyValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.amount.unsigned_abs();
        write!(f, "{}£{}.{}m", sign, abs / 10, abs % 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_formats_tenths_as_millions() {
        assert_eq!(CurrencyValue::new(45).to_string(), "£4.5m");
        assert_eq!(CurrencyValue::new(1000).to_string(), "£100.0m");
        assert_eq!(CurrencyValue::new(-5).to_string(), "-£0.5m");
    }

    #[test]
    fn test_sum_is_exact() {
        let total: CurrencyValue = [45, 55, 100].iter().map(|a| CurrencyValue::new(*a)).sum();
        assert_eq!(total, CurrencyValue::new(200));
    }

    #[test]
    fn test_add_saturates_and_checked_add_reports_overflow() {
        let max = CurrencyValue::new(i32::MAX);

        assert_eq!(max + CurrencyValue::new(10), max);
        assert_eq!(max.checked_add(CurrencyValue::new(10)), None);
        assert_eq!(
            CurrencyValue::new(40).checked_add(CurrencyValue::new(5)),
            Some(CurrencyValue::new(45))
        );
    }
}
