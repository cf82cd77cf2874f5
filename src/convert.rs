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

//! Decimal conversion utilities.

use crate::error::TryFromDecimalError;
use crate::Decimal;
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use std::convert::TryFrom;

macro_rules! impl_from_integer {
    ($t: ty) => {
        impl From<$t> for Decimal {
            #[inline]
            fn from(value: $t) -> Self {
                Decimal::new(BigInt::from(value), 0)
            }
        }
    };
}

impl_from_integer!(i8);
impl_from_integer!(i16);
impl_from_integer!(i32);
impl_from_integer!(i64);
impl_from_integer!(i128);
impl_from_integer!(isize);
impl_from_integer!(u8);
impl_from_integer!(u16);
impl_from_integer!(u32);
impl_from_integer!(u64);
impl_from_integer!(u128);
impl_from_integer!(usize);

// A binary floating-point number converts via its shortest decimal
// representation that round-trips to the same float, which is what the
// standard float formatting produces. Non-finite values are rejected.
macro_rules! impl_try_from_floating {
    ($t: ty) => {
        impl TryFrom<$t> for Decimal {
            type Error = TryFromDecimalError;

            fn try_from(value: $t) -> Result<Self, Self::Error> {
                if value.is_nan() || value.is_infinite() {
                    return Err(TryFromDecimalError::invalid());
                }

                value
                    .to_string()
                    .parse()
                    .map_err(|_| TryFromDecimalError::invalid())
            }
        }
    };
}

impl_try_from_floating!(f32);
impl_try_from_floating!(f64);

// Narrowing truncates toward zero first; the integral part must fit the
// target width.
macro_rules! impl_try_from_decimal {
    ($t: ty, $to: ident) => {
        impl TryFrom<&Decimal> for $t {
            type Error = TryFromDecimalError;

            #[inline]
            fn try_from(value: &Decimal) -> Result<Self, Self::Error> {
                value
                    .to_integral()
                    .$to()
                    .ok_or_else(|| TryFromDecimalError::overflow())
            }
        }

        impl TryFrom<Decimal> for $t {
            type Error = TryFromDecimalError;

            #[inline]
            fn try_from(value: Decimal) -> Result<Self, Self::Error> {
                <$t>::try_from(&value)
            }
        }
    };
}

impl_try_from_decimal!(i8, to_i8);
impl_try_from_decimal!(i16, to_i16);
impl_try_from_decimal!(i32, to_i32);
impl_try_from_decimal!(i64, to_i64);
impl_try_from_decimal!(i128, to_i128);
impl_try_from_decimal!(isize, to_isize);
impl_try_from_decimal!(u8, to_u8);
impl_try_from_decimal!(u16, to_u16);
impl_try_from_decimal!(u32, to_u32);
impl_try_from_decimal!(u64, to_u64);
impl_try_from_decimal!(u128, to_u128);
impl_try_from_decimal!(usize, to_usize);

impl Decimal {
    /// Converts `self` to the nearest representable `f32`.
    ///
    /// This conversion is best-effort and never fails; precision loss is
    /// expected, and values beyond the `f32` range become infinite.
    #[inline]
    pub fn to_f32(&self) -> f32 {
        // the canonical form is always a valid float literal
        self.to_string().parse().unwrap_or_default()
    }

    /// Converts `self` to the nearest representable `f64`.
    ///
    /// This conversion is best-effort and never fails; precision loss is
    /// expected, and values beyond the `f64` range become infinite.
    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.to_string().parse().unwrap_or_default()
    }
}
