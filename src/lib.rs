// Copyright 2020 CoD Technologies Corp.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Arbitrary precision signed decimal numbers with an explicit scale.
//!
//! A [`Decimal`] pairs an arbitrary precision unscaled integer with a
//! non-negative scale, the count of digits after the decimal point. The
//! represented value is `unscaled × 10^(-scale)`. Addition, subtraction
//! and multiplication are always exact; division either proves the
//! quotient terminates in base 10 or rounds it to a caller-chosen scale
//! with an explicit [`RoundingMode`].
//!
//! Values are immutable: every operation produces a new `Decimal`.
//!
//! # Examples
//!
//! ```
//! use bigdec::{Decimal, RoundingMode};
//!
//! let price = "19.99".parse::<Decimal>().unwrap();
//! let qty = Decimal::from(3);
//!
//! let total = &price * &qty;
//! assert_eq!(total.to_string(), "59.97");
//!
//! let each = total.div_with_scale(&Decimal::from(2), 2, RoundingMode::HalfUp).unwrap();
//! assert_eq!(each.to_string(), "29.99");
//! ```

mod convert;
mod error;
mod ops;
mod parse;

pub use crate::error::DivideError;
pub use crate::error::ParseDecimalError;
pub use crate::error::TryFromDecimalError;

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

pub const SCALE_OVERFLOW_MSG: &str = "scale overflows decimal format";

/// Returns `10^exp` as a big integer.
#[inline]
pub(crate) fn ten_pow(exp: u32) -> BigInt {
    num_traits::pow(BigInt::from(10u8), exp as usize)
}

/// Policy for discarding digits beyond a target scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundingMode {
    /// Truncate toward zero.
    Down,
    /// Round away from zero on any non-zero discarded fraction.
    Up,
    /// Round toward negative infinity.
    Floor,
    /// Round toward positive infinity.
    Ceiling,
    /// Round to the nearest neighbor; ties round away from zero.
    HalfUp,
    /// Round to the nearest neighbor; ties round to the even neighbor.
    HalfEven,
}

/// An immutable arbitrary precision signed decimal number.
///
/// The value is `unscaled × 10^(-scale)`, where `unscaled` is an arbitrary
/// precision signed integer and `scale` counts the digits after the decimal
/// point. The scale is preserved through arithmetic and rendered on output,
/// so `1.50 + 0.50` displays as `2.00`; comparison and equality ignore it
/// and follow the numeric value only.
#[derive(Debug, Clone)]
pub struct Decimal {
    unscaled: BigInt,
    scale: u32,
}

impl Decimal {
    /// Creates a decimal from an unscaled integer and a scale.
    ///
    /// The resulting value is `unscaled × 10^(-scale)`.
    #[inline]
    pub fn new(unscaled: BigInt, scale: u32) -> Self {
        Decimal { unscaled, scale }
    }

    /// Creates a zero decimal.
    #[inline]
    pub fn zero() -> Self {
        Decimal::new(BigInt::zero(), 0)
    }

    /// Creates a decimal with value one.
    #[inline]
    pub fn one() -> Self {
        Decimal::new(BigInt::one(), 0)
    }

    /// Creates a decimal with value ten.
    #[inline]
    pub fn ten() -> Self {
        Decimal::new(BigInt::from(10u8), 0)
    }

    /// Returns the unscaled integer.
    #[inline]
    pub fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    /// Returns the scale, i.e. the count of decimal digits in the
    /// fractional part.
    #[inline]
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Decomposes `self` into its unscaled integer and scale.
    #[inline]
    pub fn into_parts(self) -> (BigInt, u32) {
        (self.unscaled, self.scale)
    }

    /// Checks if `self` is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }

    /// Checks if `self` is greater than zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.unscaled.sign() == Sign::Plus
    }

    /// Checks if `self` is less than zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.unscaled.sign() == Sign::Minus
    }

    /// Computes the absolute value of `self`.
    #[inline]
    pub fn abs(&self) -> Decimal {
        Decimal::new(self.unscaled.abs(), self.scale)
    }

    /// Returns a decimal that represents the sign of `self`.
    ///
    /// * -1 if `self` is less than 0
    /// * 0 if `self` is equal to 0
    /// * 1 if `self` is greater than zero
    #[inline]
    pub fn signum(&self) -> Decimal {
        Decimal::new(self.unscaled.signum(), 0)
    }

    /// Returns an equal value with trailing fractional zeroes stripped,
    /// i.e. the smallest scale that still represents `self` exactly.
    pub fn normalized(&self) -> Decimal {
        if self.unscaled.is_zero() {
            return Decimal::zero();
        }

        let ten = BigInt::from(10u8);
        let mut unscaled = self.unscaled.clone();
        let mut scale = self.scale;

        while scale > 0 {
            let (quotient, remainder) = unscaled.div_rem(&ten);
            if !remainder.is_zero() {
                break;
            }
            unscaled = quotient;
            scale -= 1;
        }

        Decimal::new(unscaled, scale)
    }

    /// Truncates `self` toward zero to an integer.
    #[inline]
    pub(crate) fn to_integral(&self) -> BigInt {
        if self.scale == 0 {
            self.unscaled.clone()
        } else {
            &self.unscaled / ten_pow(self.scale)
        }
    }

    /// Brings both unscaled values to the larger of the two scales.
    pub(crate) fn aligned(&self, other: &Decimal) -> (BigInt, BigInt, u32) {
        match self.scale.cmp(&other.scale) {
            Ordering::Equal => (self.unscaled.clone(), other.unscaled.clone(), self.scale),
            Ordering::Less => (
                &self.unscaled * ten_pow(other.scale - self.scale),
                other.unscaled.clone(),
                other.scale,
            ),
            Ordering::Greater => (
                self.unscaled.clone(),
                &other.unscaled * ten_pow(self.scale - other.scale),
                self.scale,
            ),
        }
    }

    /// Compares numeric values, ignoring the stored scales.
    pub(crate) fn cmp_value(&self, other: &Decimal) -> Ordering {
        let sign_self = sign_value(&self.unscaled);
        let sign_other = sign_value(&other.unscaled);

        // Check the signs before aligning digits.
        if sign_self != sign_other {
            return sign_self.cmp(&sign_other);
        }
        if sign_self == 0 {
            return Ordering::Equal;
        }

        let (lhs, rhs, _) = self.aligned(other);
        lhs.cmp(&rhs)
    }

    /// Re-expresses the value with `scale` fractional digits.
    ///
    /// Discarded digits are rounded per `mode`. When `scale` is not below
    /// the current scale this is exact zero-padding and `mode` is unused.
    pub fn with_scale(&self, scale: u32, mode: RoundingMode) -> Decimal {
        match scale.cmp(&self.scale) {
            Ordering::Equal => self.clone(),
            Ordering::Greater => Decimal::new(
                &self.unscaled * ten_pow(scale - self.scale),
                scale,
            ),
            Ordering::Less => Decimal::new(
                round_div(self.unscaled.clone(), ten_pow(self.scale - scale), mode),
                scale,
            ),
        }
    }

    /// Checked exact division. Computes `self / other`.
    ///
    /// Succeeds only when the quotient terminates in base 10, i.e. the
    /// reduced denominator has no prime factors other than 2 and 5;
    /// returns [`DivideError::Inexact`] otherwise and
    /// [`DivideError::DivisionByZero`] when `other` is zero.
    ///
    /// The result carries the smallest exact scale, widened to
    /// `self.scale() - other.scale()` when that is larger, so
    /// `1.00 / 0.5` is `2.0`.
    pub fn checked_div(&self, other: &Decimal) -> Result<Decimal, DivideError> {
        if other.is_zero() {
            return Err(DivideError::DivisionByZero);
        }

        let ideal = self.scale.saturating_sub(other.scale);

        if self.is_zero() {
            return Ok(Decimal::new(BigInt::zero(), ideal));
        }

        // self / other = (|u1| * 10^s2) / (|u2| * 10^s1), sign applied last
        let negative = self.is_negative() != other.is_negative();
        let mut numer = self.unscaled.abs();
        let mut denom = other.unscaled.abs();
        if self.scale <= other.scale {
            numer *= ten_pow(other.scale - self.scale);
        } else {
            denom *= ten_pow(self.scale - other.scale);
        }

        let gcd = numer.gcd(&denom);
        numer /= &gcd;
        denom /= gcd;

        // The quotient terminates iff the reduced denominator is 2^a * 5^b.
        let twos = strip_factor(&mut denom, 2);
        let fives = strip_factor(&mut denom, 5);
        if !denom.is_one() {
            return Err(DivideError::Inexact);
        }

        // numer / (2^twos * 5^fives) = numer * 2^(n-twos) * 5^(n-fives) / 10^n
        let mut scale = twos.max(fives);
        if twos < scale {
            numer *= num_traits::pow(BigInt::from(2u8), (scale - twos) as usize);
        }
        if fives < scale {
            numer *= num_traits::pow(BigInt::from(5u8), (scale - fives) as usize);
        }

        if ideal > scale {
            numer *= ten_pow(ideal - scale);
            scale = ideal;
        }
        if negative {
            numer = -numer;
        }

        Ok(Decimal::new(numer, scale))
    }

    /// Computes `self / other` rounded to exactly `scale` fractional
    /// digits per `mode`.
    ///
    /// Returns [`DivideError::DivisionByZero`] when `other` is zero.
    pub fn div_with_scale(
        &self,
        other: &Decimal,
        scale: u32,
        mode: RoundingMode,
    ) -> Result<Decimal, DivideError> {
        if other.is_zero() {
            return Err(DivideError::DivisionByZero);
        }

        // quotient * 10^scale = u1 * 10^(scale + s2 - s1) / u2
        let shift = scale as i64 + other.scale as i64 - self.scale as i64;
        let (numer, denom) = if shift >= 0 {
            let shift = u32::try_from(shift).expect(SCALE_OVERFLOW_MSG);
            (&self.unscaled * ten_pow(shift), other.unscaled.clone())
        } else {
            (self.unscaled.clone(), &other.unscaled * ten_pow((-shift) as u32))
        };

        Ok(Decimal::new(round_div(numer, denom, mode), scale))
    }
}

/// Divides out `factor` as often as it goes, returning the count.
fn strip_factor(value: &mut BigInt, factor: u32) -> u32 {
    let factor = BigInt::from(factor);
    let mut count = 0;

    loop {
        let (quotient, remainder) = value.div_rem(&factor);
        if !remainder.is_zero() {
            return count;
        }
        *value = quotient;
        count += 1;
    }
}

/// Computes `numerator / denominator` rounded to an integer per `mode`.
///
/// The denominator must be non-zero.
fn round_div(numerator: BigInt, denominator: BigInt, mode: RoundingMode) -> BigInt {
    let (numerator, denominator) = if denominator.sign() == Sign::Minus {
        (-numerator, -denominator)
    } else {
        (numerator, denominator)
    };

    let negative = numerator.sign() == Sign::Minus;
    let (quotient, remainder) = numerator.div_rem(&denominator);
    if remainder.is_zero() {
        return quotient;
    }

    let round_away = match mode {
        RoundingMode::Down => false,
        RoundingMode::Up => true,
        RoundingMode::Floor => negative,
        RoundingMode::Ceiling => !negative,
        RoundingMode::HalfUp | RoundingMode::HalfEven => {
            let twice = remainder.abs() * 2u8;
            match twice.cmp(&denominator) {
                Ordering::Greater => true,
                Ordering::Less => false,
                Ordering::Equal => mode == RoundingMode::HalfUp || quotient.is_odd(),
            }
        }
    };

    if round_away {
        if negative {
            quotient - BigInt::one()
        } else {
            quotient + BigInt::one()
        }
    } else {
        quotient
    }
}

#[inline]
fn sign_value(value: &BigInt) -> i8 {
    match value.sign() {
        Sign::Minus => -1,
        Sign::NoSign => 0,
        Sign::Plus => 1,
    }
}

impl Default for Decimal {
    #[inline]
    fn default() -> Self {
        Decimal::zero()
    }
}

impl Zero for Decimal {
    #[inline]
    fn zero() -> Self {
        Decimal::zero()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }
}

impl One for Decimal {
    #[inline]
    fn one() -> Self {
        Decimal::one()
    }
}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Trailing zeroes are suppressed so that values comparing equal
        // hash equally regardless of their stored scale.
        let normalized = self.normalized();
        normalized.unscaled.hash(state);
        normalized.scale.hash(state);
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        // Output a dash for negative values.
        if self.unscaled.sign() == Sign::Minus {
            write!(f, "-")?;
        }

        let digits = self.unscaled.magnitude().to_str_radix(10);
        let scale = self.scale as usize;

        if scale == 0 {
            f.write_str(&digits)
        } else if digits.len() > scale {
            let (integral, fractional) = digits.split_at(digits.len() - scale);
            write!(f, "{}.{}", integral, fractional)
        } else {
            write!(f, "0.{:0>width$}", digits, width = scale)
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Decimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Decimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
