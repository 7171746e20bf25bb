//! Arbitrary-precision numeric literal values
//!
//! Literals are never converted to machine numbers: the compiler only ever
//! echoes them back, so each value keeps its validated decimal text in the
//! canonical form used when it is printed. Leading zeros of the integral part
//! are dropped, the fractional digits of a decimal are kept as written (the
//! scale is significant), and a zero value never carries a sign.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid numeric literal '{0}'")]
pub struct NumeralError(pub String);

/// Integer literal of unbounded magnitude.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInteger(String);

impl BigInteger {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for BigInteger {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, digits) = split_sign(s);
        if !is_digits(digits) {
            return Err(NumeralError(s.to_string()));
        }

        let magnitude = strip_leading_zeros(digits);
        Ok(BigInteger(with_sign(negative && magnitude != "0", magnitude)))
    }
}

impl From<i32> for BigInteger {
    fn from(value: i32) -> Self {
        BigInteger(value.to_string())
    }
}

impl From<u64> for BigInteger {
    fn from(value: u64) -> Self {
        BigInteger(value.to_string())
    }
}

impl From<i64> for BigInteger {
    fn from(value: i64) -> Self {
        BigInteger(value.to_string())
    }
}

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Decimal literal of unbounded magnitude and scale.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigDecimal(String);

impl BigDecimal {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits after the decimal point.
    pub fn scale(&self) -> usize {
        self.0.split_once('.').map_or(0, |(_, fraction)| fraction.len())
    }
}

impl FromStr for BigDecimal {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, unsigned) = split_sign(s);
        let (integral, fraction) = unsigned
            .split_once('.')
            .ok_or_else(|| NumeralError(s.to_string()))?;
        if !is_digits(integral) || !is_digits(fraction) {
            return Err(NumeralError(s.to_string()));
        }

        let integral = strip_leading_zeros(integral);
        let is_zero = integral == "0" && fraction.bytes().all(|b| b == b'0');
        let text = format!("{}.{}", integral, fraction);
        Ok(BigDecimal(with_sign(negative && !is_zero, &text)))
    }
}

impl fmt::Display for BigDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn split_sign(s: &str) -> (bool, &str) {
    match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn strip_leading_zeros(digits: &str) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0"
    } else {
        trimmed
    }
}

fn with_sign(negative: bool, magnitude: &str) -> String {
    if negative {
        format!("-{}", magnitude)
    } else {
        magnitude.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_canonical_form() {
        assert_eq!("42".parse::<BigInteger>().unwrap().as_str(), "42");
        assert_eq!("007".parse::<BigInteger>().unwrap().as_str(), "7");
        assert_eq!("000".parse::<BigInteger>().unwrap().as_str(), "0");
        assert_eq!("-0".parse::<BigInteger>().unwrap().as_str(), "0");
        assert_eq!("-12".parse::<BigInteger>().unwrap().as_str(), "-12");
    }

    #[test]
    fn test_integer_beyond_u128() {
        let text = "340282366920938463463374607431768211456123";
        let value: BigInteger = text.parse().unwrap();
        assert_eq!(value.to_string(), text);
    }

    #[test]
    fn test_integer_rejects_non_digits() {
        assert!("".parse::<BigInteger>().is_err());
        assert!("-".parse::<BigInteger>().is_err());
        assert!("1.0".parse::<BigInteger>().is_err());
        assert!("+1".parse::<BigInteger>().is_err());
        assert!("12a".parse::<BigInteger>().is_err());
    }

    #[test]
    fn test_decimal_keeps_scale() {
        let value: BigDecimal = "3.140".parse().unwrap();
        assert_eq!(value.as_str(), "3.140");
        assert_eq!(value.scale(), 3);

        assert_eq!("00.50".parse::<BigDecimal>().unwrap().as_str(), "0.50");
        assert_eq!("-0.00".parse::<BigDecimal>().unwrap().as_str(), "0.00");
        assert_eq!("-1.5".parse::<BigDecimal>().unwrap().as_str(), "-1.5");
    }

    #[test]
    fn test_decimal_rejects_malformed() {
        assert!("1".parse::<BigDecimal>().is_err());
        assert!("1.".parse::<BigDecimal>().is_err());
        assert!(".5".parse::<BigDecimal>().is_err());
        assert!("1.2.3".parse::<BigDecimal>().is_err());
    }

    #[test]
    fn test_from_machine_integers() {
        assert_eq!(BigInteger::from(10u64).to_string(), "10");
        assert_eq!(BigInteger::from(-3i64).to_string(), "-3");
        assert_eq!(BigInteger::from(5).to_string(), "5");
    }
}
