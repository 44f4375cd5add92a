//! Money type for representing currency amounts
//!
//! Amounts are exact decimals, so totals and balances never pick up float
//! noise. On disk an amount is a plain JSON number in currency units (`12.5`).
//! A value read from the file is written back exactly as it was read: whole
//! numbers stay integers and fractional values keep every digit.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::{self, Deserializer, Visitor};
use serde::ser::{self, Serialize, Serializer};
use serde::Deserialize;
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// A monetary amount in currency units
///
/// Arithmetic saturates at the limits of [`Decimal`] instead of panicking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use spendlog::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// The exact amount in currency units
    pub const fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Build an amount from a number read from the data file
    ///
    /// Uses the shortest decimal form of the float, so `0.125` stays `0.125`
    /// and `12.0` is written back as `12.0`.
    pub fn from_units(units: f64) -> Option<Self> {
        if !units.is_finite() {
            return None;
        }
        let value = Decimal::from_str(&units.to_string()).ok()?;
        Some(Self(with_fraction(value)))
    }

    /// Parse a money amount from user input
    ///
    /// Accepts "10.50", "-10.50", "$10.50", "10", ".5", "12.345" and
    /// scientific notation such as "1e3". Every digit is kept; input with more
    /// precision than the data file can hold is rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(trimmed.to_string());

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        let value = if rest.contains(['e', 'E']) {
            parse_scientific(rest).ok_or_else(invalid)?
        } else {
            parse_plain(rest).ok_or_else(invalid)?
        };

        // Whatever is stored must read back as the same number
        let roundtrip = value
            .to_string()
            .parse::<f64>()
            .ok()
            .and_then(Money::from_units);
        if roundtrip != Some(Money(with_fraction(value))) {
            return Err(MoneyParseError::TooPrecise(trimmed.to_string()));
        }

        let value = with_fraction(value);
        Ok(Self(if negative { -value } else { value }))
    }
}

fn parse_plain(s: &str) -> Option<Decimal> {
    let (whole, fraction) = s.split_once('.').unwrap_or((s, ""));
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
    if !all_digits(whole) || !all_digits(fraction) {
        return None;
    }

    let whole = if whole.is_empty() { "0" } else { whole };
    let normalized = if fraction.is_empty() {
        whole.to_string()
    } else {
        format!("{}.{}", whole, fraction)
    };
    Decimal::from_str_exact(&normalized).ok()
}

fn parse_scientific(s: &str) -> Option<Decimal> {
    let (mantissa, exponent) = s.split_once(['e', 'E'])?;
    if mantissa.is_empty() || mantissa.starts_with(['+', '-']) {
        return None;
    }
    let exponent = exponent.strip_prefix('+').unwrap_or(exponent);
    let digits = exponent.strip_prefix('-').unwrap_or(exponent);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    parse_plain(mantissa)?;
    Decimal::from_scientific(&format!("{}e{}", mantissa, exponent)).ok()
}

/// Fractional amounts are written as floats (`1000.0`), so keep at least one
/// decimal place
fn with_fraction(mut value: Decimal) -> Decimal {
    if value.scale() == 0 {
        value.rescale(1);
    }
    value
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let mut magnitude = rounded.abs();
        magnitude.rescale(2);

        if rounded.is_sign_negative() && !rounded.is_zero() {
            write!(f, "-${}", magnitude)
        } else {
            write!(f, "${}", magnitude)
        }
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.scale() == 0 {
            if let Some(whole) = self.0.to_i64() {
                return serializer.serialize_i64(whole);
            }
        }
        let units: f64 = self
            .0
            .to_string()
            .parse()
            .map_err(|_| {
                <S::Error as ser::Error>::custom(format!("amount out of range: {}", self.0))
            })?;
        serializer.serialize_f64(units)
    }
}

struct MoneyVisitor;

impl<'de> Visitor<'de> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Money, E> {
        Ok(Money(Decimal::from(value)))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Money, E> {
        Ok(Money(Decimal::from(value)))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Money, E> {
        Money::from_units(value)
            .ok_or_else(|| E::custom(format!("amount out of range: {}", value)))
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    TooPrecise(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: '{}'", s),
            MoneyParseError::TooPrecise(s) => {
                write!(f, "amount '{}' has more digits than can be stored", s)
            }
        }
    }
}

impl std::error::Error for MoneyParseError {}
