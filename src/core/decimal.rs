//! Fixed-point decimal strings of arbitrary length, as used by `inc`.
//!
//! Only the integer part moves: incrementing keeps the number of fraction
//! digits and any leading zeros intact.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sign {
    Unsigned,
    Plus,
    Minus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDecimalError;

impl fmt::Display for ParseDecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a decimal number")
    }
}

impl std::error::Error for ParseDecimalError {}

/// `[+-]?digits(.digits)?`, stored digit by digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decimal {
    sign: Sign,
    int_digits: Vec<u8>,
    frac_digits: Vec<u8>,
}

impl Decimal {
    pub fn one() -> Self {
        Self {
            sign: Sign::Unsigned,
            int_digits: vec![1],
            frac_digits: Vec::new(),
        }
    }

    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Minus
    }

    /// Add one to the integer part.
    ///
    /// A negative value whose magnitude drops to zero becomes `1` rather
    /// than `0` or `-0`.
    pub fn increment(&self) -> Self {
        if self.is_negative() {
            return self.increment_negative();
        }

        Self {
            sign: self.sign,
            int_digits: carry_increment(&self.int_digits),
            frac_digits: self.frac_digits.clone(),
        }
    }

    fn increment_negative(&self) -> Self {
        let int_zero = all_zero(&self.int_digits);
        let frac_zero = all_zero(&self.frac_digits);

        if int_zero && frac_zero {
            return Self::one();
        }

        if int_zero {
            // -0.xyz + 1: the unit is borrowed through the fraction
            return Self {
                sign: Sign::Unsigned,
                int_digits: vec![0],
                frac_digits: ten_complement(&self.frac_digits),
            };
        }

        let int_digits = borrow_decrement(&self.int_digits);
        if all_zero(&int_digits) && frac_zero {
            return Self::one();
        }

        Self {
            sign: Sign::Minus,
            int_digits,
            frac_digits: self.frac_digits.clone(),
        }
    }
}

fn all_zero(digits: &[u8]) -> bool {
    digits.iter().all(|&d| d == 0)
}

fn carry_increment(digits: &[u8]) -> Vec<u8> {
    let mut out = digits.to_vec();
    for d in out.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return out;
        }
    }
    out.insert(0, 1);
    out
}

/// Caller guarantees at least one nonzero digit.
fn borrow_decrement(digits: &[u8]) -> Vec<u8> {
    let mut out = digits.to_vec();
    for d in out.iter_mut().rev() {
        if *d == 0 {
            *d = 9;
        } else {
            *d -= 1;
            break;
        }
    }
    out
}

/// `1 - 0.<digits>` over the same number of places. Caller guarantees a
/// nonzero digit.
fn ten_complement(digits: &[u8]) -> Vec<u8> {
    let mut out = digits.to_vec();
    let mut borrowed = false;
    for d in out.iter_mut().rev() {
        if borrowed {
            *d = 9 - *d;
        } else if *d != 0 {
            *d = 10 - *d;
            borrowed = true;
        }
    }
    out
}

fn parse_digits(s: &str) -> Result<Vec<u8>, ParseDecimalError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseDecimalError);
    }
    Ok(s.bytes().map(|b| b - b'0').collect())
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (sign, rest) = match s.as_bytes().first() {
            Some(b'+') => (Sign::Plus, &s[1..]),
            Some(b'-') => (Sign::Minus, &s[1..]),
            _ => (Sign::Unsigned, s),
        };

        let (int_part, frac_part) = match rest.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (rest, None),
        };

        Ok(Self {
            sign,
            int_digits: parse_digits(int_part)?,
            frac_digits: frac_part.map(parse_digits).transpose()?.unwrap_or_default(),
        })
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sign {
            Sign::Plus => write!(f, "+")?,
            Sign::Minus => write!(f, "-")?,
            Sign::Unsigned => {}
        }
        for d in &self.int_digits {
            write!(f, "{}", d)?;
        }
        if !self.frac_digits.is_empty() {
            write!(f, ".")?;
            for d in &self.frac_digits {
                write!(f, "{}", d)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inc(s: &str) -> String {
        s.parse::<Decimal>()
            .expect("valid decimal")
            .increment()
            .to_string()
    }

    #[test]
    fn test_positive_increment() {
        assert_eq!(inc("0"), "1");
        assert_eq!(inc("9"), "10");
        assert_eq!(inc("41"), "42");
        assert_eq!(inc("999"), "1000");
        assert_eq!(inc("009"), "010");
        assert_eq!(inc("0.9"), "1.9");
        assert_eq!(inc("999.99"), "1000.99");
        assert_eq!(inc("12.000"), "13.000");
    }

    #[test]
    fn test_plus_sign_is_kept() {
        assert_eq!(inc("+9"), "+10");
        assert_eq!(inc("+0.5"), "+1.5");
    }

    #[test]
    fn test_negative_integer_part() {
        assert_eq!(inc("-2"), "-1");
        assert_eq!(inc("-10"), "-09");
        assert_eq!(inc("-13.309"), "-12.309");
        assert_eq!(inc("-100.5"), "-099.5");
        assert_eq!(inc("-1.5"), "-0.5");
    }

    #[test]
    fn test_negative_fraction_only() {
        assert_eq!(inc("-0.123"), "0.877");
        assert_eq!(inc("-0.120"), "0.880");
        assert_eq!(inc("-0.001"), "0.999");
        assert_eq!(inc("-00.5"), "0.5");
    }

    #[test]
    fn test_zero_magnitude_collapses_to_one() {
        assert_eq!(inc("-1"), "1");
        assert_eq!(inc("-01"), "1");
        assert_eq!(inc("-1.000"), "1");
        assert_eq!(inc("-0"), "1");
        assert_eq!(inc("-0.000"), "1");
    }

    #[test]
    fn test_rejects_malformed() {
        for s in [
            "", "+", "-", ".", "1.", ".5", "-.5", "1.2.3", "abc", "1a", " 1", "1 ", "1e5",
            "--1", "+-1", "١",
        ] {
            assert!(s.parse::<Decimal>().is_err(), "{:?} should be rejected", s);
        }
    }

    #[test]
    fn test_integer_sweep_matches_i64() {
        for n in -2000i64..=2000 {
            let out = inc(&n.to_string());
            if n == -1 {
                assert_eq!(out, "1");
                continue;
            }
            let got: i64 = out.parse().expect("integer result");
            assert_eq!(got, n + 1, "incrementing {}", n);
        }
    }

    #[test]
    fn test_fraction_digits_frozen_for_positive() {
        for n in 0u32..200 {
            let s = format!("{}.{:03}", n, (n * 7) % 1000);
            let out = inc(&s);
            let (int_part, frac_part) = out.split_once('.').expect("fraction kept");
            assert_eq!(int_part.parse::<u32>().expect("int"), n + 1);
            assert_eq!(frac_part, &s[s.len() - 3..]);
        }
    }

    #[test]
    fn test_arbitrary_length() {
        let big = "9".repeat(60);
        assert_eq!(inc(&big), format!("1{}", "0".repeat(60)));

        let neg = format!("-1{}", "0".repeat(40));
        assert_eq!(inc(&neg), format!("-0{}", "9".repeat(40)));
    }
}
