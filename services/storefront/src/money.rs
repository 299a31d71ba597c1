//! Rupee amounts held as integer paise

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use thiserror::Error;

const PAISE_PER_RUPEE: i64 = 100;

/// Text that is not a plain decimal number, or too large to hold
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("not a valid amount")]
pub struct ParseMoneyError;

/// An amount of money in paise
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    pub fn paise(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Sum of two amounts, `None` when it does not fit
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// Parse a decimal such as `9.99`, `-5`, `.5` or `12.`
    ///
    /// Surrounding whitespace is ignored. Digits past the second decimal
    /// place are rounded half to even. Exponents and thousands separators
    /// are not accepted.
    pub fn parse(text: &str) -> Result<Self, ParseMoneyError> {
        let text = text.trim();
        let (negative, unsigned) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };

        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (unsigned, ""),
        };

        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction)
        {
            return Err(ParseMoneyError);
        }

        let mut paise: i64 = 0;
        for digit in whole.bytes() {
            paise = paise
                .checked_mul(10)
                .and_then(|p| p.checked_add(i64::from(digit - b'0')))
                .ok_or(ParseMoneyError)?;
        }
        paise = paise.checked_mul(PAISE_PER_RUPEE).ok_or(ParseMoneyError)?;

        let fraction = fraction.as_bytes();
        let digit_at = |i: usize| fraction.get(i).map_or(0, |d| i64::from(d - b'0'));
        paise = paise
            .checked_add(digit_at(0) * 10 + digit_at(1))
            .ok_or(ParseMoneyError)?;

        if round_up(fraction.get(2..).unwrap_or(&[]), paise) {
            paise = paise.checked_add(1).ok_or(ParseMoneyError)?;
        }

        Ok(Money(if negative { -paise } else { paise }))
    }
}

/// Half-to-even rounding decision for the digits dropped after the paise
fn round_up(dropped: &[u8], kept: i64) -> bool {
    match dropped.split_first() {
        None => false,
        Some((&first, rest)) => match first.cmp(&b'5') {
            std::cmp::Ordering::Greater => true,
            std::cmp::Ordering::Less => false,
            std::cmp::Ordering::Equal => rest.iter().any(|&d| d != b'0') || kept % 2 == 1,
        },
    }
}

/// Overflows like the underlying `i64`; use [`Money::checked_add`] for
/// amounts that are not already known to fit
impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

/// Formats as Indian rupees with Indian digit grouping, e.g. `₹1,23,456.78`
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let paise = self.0.unsigned_abs();
        let rupees = group_indian(&(paise / PAISE_PER_RUPEE as u64).to_string());
        write!(f, "{sign}₹{rupees}.{:02}", paise % PAISE_PER_RUPEE as u64)
    }
}

/// Last three digits form one group, the rest are grouped in pairs
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 2);
    for (i, c) in head.chars().enumerate() {
        if i > 0 && (head.len() - i) % 2 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped.push(',');
    grouped.push_str(last_three);
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_amounts() {
        assert_eq!(Money::parse("9.99"), Ok(Money::from_paise(999)));
        assert_eq!(Money::parse("10.00"), Ok(Money::from_paise(1000)));
        assert_eq!(Money::parse("5.5"), Ok(Money::from_paise(550)));
        assert_eq!(Money::parse("12"), Ok(Money::from_paise(1200)));
        assert_eq!(Money::parse("12."), Ok(Money::from_paise(1200)));
        assert_eq!(Money::parse(".5"), Ok(Money::from_paise(50)));
        assert_eq!(Money::parse(" 3.25 "), Ok(Money::from_paise(325)));
        assert_eq!(Money::parse("-5"), Ok(Money::from_paise(-500)));
        assert_eq!(Money::parse("0"), Ok(Money::ZERO));
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        for text in ["", ".", "-", "abc", "1.2.3", "1e3", "1,000", "₹5", "5 0", "--5"] {
            assert_eq!(Money::parse(text), Err(ParseMoneyError), "{text:?}");
        }
    }

    #[test]
    fn test_parse_rejects_overflow() {
        assert_eq!(Money::parse("99999999999999999999"), Err(ParseMoneyError));
    }

    #[test]
    fn test_extra_digits_round_half_even() {
        assert_eq!(Money::parse("1.004"), Ok(Money::from_paise(100)));
        assert_eq!(Money::parse("1.006"), Ok(Money::from_paise(101)));
        assert_eq!(Money::parse("1.005"), Ok(Money::from_paise(100)));
        assert_eq!(Money::parse("1.015"), Ok(Money::from_paise(102)));
        assert_eq!(Money::parse("1.0051"), Ok(Money::from_paise(101)));
        assert_eq!(Money::parse("0.001"), Ok(Money::ZERO));
    }

    #[test]
    fn test_display_inr() {
        assert_eq!(Money::ZERO.to_string(), "₹0.00");
        assert_eq!(Money::from_paise(999).to_string(), "₹9.99");
        assert_eq!(Money::from_paise(1550).to_string(), "₹15.50");
        assert_eq!(Money::from_paise(100_000).to_string(), "₹1,000.00");
        assert_eq!(Money::from_paise(12_345_678).to_string(), "₹1,23,456.78");
        assert_eq!(Money::from_paise(1_000_000_000).to_string(), "₹1,00,00,000.00");
        assert_eq!(Money::from_paise(-500).to_string(), "-₹5.00");
    }

    #[test]
    fn test_checked_add() {
        let max = Money::from_paise(i64::MAX);
        assert_eq!(max.checked_add(Money::ZERO), Some(max));
        assert_eq!(max.checked_add(Money::from_paise(1)), None);
        assert_eq!(
            Money::from_paise(1000).checked_add(Money::from_paise(550)),
            Some(Money::from_paise(1550))
        );
    }

    #[test]
    fn test_sum() {
        let total: Money = [1000, 550].into_iter().map(Money::from_paise).sum();
        assert_eq!(total, Money::from_paise(1550));
    }
}
