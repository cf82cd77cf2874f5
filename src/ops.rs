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

//! Implementing operators for decimal.
//!
//! Addition, subtraction and multiplication are exact and total, so they
//! are exposed as operators. Division is fallible and only offered through
//! [`Decimal::checked_div`] and [`Decimal::div_with_scale`].

use crate::{Decimal, SCALE_OVERFLOW_MSG};
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

// The main implementation
// &self + &other
impl Add<&Decimal> for &Decimal {
    type Output = Decimal;

    fn add(self, other: &Decimal) -> Self::Output {
        let (lhs, rhs, scale) = self.aligned(other);
        Decimal::new(lhs + rhs, scale)
    }
}

// self + &other
impl Add<&Decimal> for Decimal {
    type Output = Decimal;

    #[inline]
    fn add(self, other: &Decimal) -> Self::Output {
        Add::add(&self, other)
    }
}

// &self + other
impl Add<Decimal> for &Decimal {
    type Output = Decimal;

    #[inline]
    fn add(self, other: Decimal) -> Self::Output {
        Add::add(self, &other)
    }
}

// self + other
impl Add<Decimal> for Decimal {
    type Output = Decimal;

    #[inline]
    fn add(self, other: Decimal) -> Self::Output {
        Add::add(&self, &other)
    }
}

// &mut self += &other
impl AddAssign<&Decimal> for Decimal {
    #[inline]
    fn add_assign(&mut self, other: &Decimal) {
        let result = Add::add(self as &Decimal, other);
        *self = result;
    }
}

// &mut self += other
impl AddAssign<Decimal> for Decimal {
    #[inline]
    fn add_assign(&mut self, other: Decimal) {
        let result = Add::add(self as &Decimal, &other);
        *self = result;
    }
}

// The main implementation
// &self - &other
impl Sub<&Decimal> for &Decimal {
    type Output = Decimal;

    fn sub(self, other: &Decimal) -> Self::Output {
        let (lhs, rhs, scale) = self.aligned(other);
        Decimal::new(lhs - rhs, scale)
    }
}

// self - &other
impl Sub<&Decimal> for Decimal {
    type Output = Decimal;

    #[inline]
    fn sub(self, other: &Decimal) -> Self::Output {
        Sub::sub(&self, other)
    }
}

// &self - other
impl Sub<Decimal> for &Decimal {
    type Output = Decimal;

    #[inline]
    fn sub(self, other: Decimal) -> Self::Output {
        Sub::sub(self, &other)
    }
}

// self - other
impl Sub<Decimal> for Decimal {
    type Output = Decimal;

    #[inline]
    fn sub(self, other: Decimal) -> Self::Output {
        Sub::sub(&self, &other)
    }
}

// &mut self -= &other
impl SubAssign<&Decimal> for Decimal {
    #[inline]
    fn sub_assign(&mut self, other: &Decimal) {
        let result = Sub::sub(self as &Decimal, other);
        *self = result;
    }
}

// &mut self -= other
impl SubAssign<Decimal> for Decimal {
    #[inline]
    fn sub_assign(&mut self, other: Decimal) {
        let result = Sub::sub(self as &Decimal, &other);
        *self = result;
    }
}

// The main implementation
// &self * &other
impl Mul<&Decimal> for &Decimal {
    type Output = Decimal;

    fn mul(self, other: &Decimal) -> Self::Output {
        // we request exact representation for the product,
        // scale = sum(scale of self, scale of other)
        let scale = self
            .scale()
            .checked_add(other.scale())
            .expect(SCALE_OVERFLOW_MSG);
        Decimal::new(self.unscaled() * other.unscaled(), scale)
    }
}

// self * &other
impl Mul<&Decimal> for Decimal {
    type Output = Decimal;

    #[inline]
    fn mul(self, other: &Decimal) -> Self::Output {
        Mul::mul(&self, other)
    }
}

// &self * other
impl Mul<Decimal> for &Decimal {
    type Output = Decimal;

    #[inline]
    fn mul(self, other: Decimal) -> Self::Output {
        Mul::mul(self, &other)
    }
}

// self * other
impl Mul<Decimal> for Decimal {
    type Output = Decimal;

    #[inline]
    fn mul(self, other: Decimal) -> Self::Output {
        Mul::mul(&self, &other)
    }
}

// &mut self *= &other
impl MulAssign<&Decimal> for Decimal {
    #[inline]
    fn mul_assign(&mut self, other: &Decimal) {
        let result = Mul::mul(self as &Decimal, other);
        *self = result;
    }
}

// &mut self *= other
impl MulAssign<Decimal> for Decimal {
    #[inline]
    fn mul_assign(&mut self, other: Decimal) {
        let result = Mul::mul(self as &Decimal, &other);
        *self = result;
    }
}

// -self
impl Neg for Decimal {
    type Output = Decimal;

    #[inline]
    fn neg(self) -> Self::Output {
        let (unscaled, scale) = self.into_parts();
        Decimal::new(-unscaled, scale)
    }
}

// -&self
impl Neg for &Decimal {
    type Output = Decimal;

    #[inline]
    fn neg(self) -> Self::Output {
        Decimal::new(-self.unscaled(), self.scale())
    }
}

impl PartialEq for Decimal {
    #[inline]
    fn eq(&self, other: &Decimal) -> bool {
        Ord::cmp(self, other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    #[inline]
    fn partial_cmp(&self, other: &Decimal) -> Option<Ordering> {
        Some(Ord::cmp(self, other))
    }
}

impl Ord for Decimal {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_value(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RoundingMode;

    fn assert_add(val1: &str, val2: &str, expected: &str) {
        let var1 = val1.parse::<Decimal>().unwrap();
        let var2 = val2.parse::<Decimal>().unwrap();

        let result1 = &var1 + &var2;
        assert_eq!(result1.to_string(), expected);

        let result2 = &var2 + &var1;
        assert_eq!(result2.to_string(), expected);

        let mut result3 = var1.clone();
        result3 += &var2;
        assert_eq!(result3.to_string(), expected);

        let mut result4 = var2.clone();
        result4 += &var1;
        assert_eq!(result4.to_string(), expected);
    }

    #[test]
    fn add() {
        assert_add("0.000000001", "100000000", "100000000.000000001");
        assert_add("123456789.987654321", "-123456789.987654321", "0.000000000");
        assert_add("987654321.123456789", "-987654321.123456789", "0.000000000");
        assert_add(
            "123456789.987654321",
            "987654321.123456789",
            "1111111111.111111110",
        );
        assert_add("123456789.987654321", "00000.00000", "123456789.987654321");
        assert_add(
            "123456789.987654321",
            "-987654321.123456789",
            "-864197531.135802468",
        );
        assert_add("00000.00000", "00000.00000", "0.00000");
        assert_add(
            "-123456789.987654321",
            "987654321.123456789",
            "864197531.135802468",
        );
        assert_add(
            "-123456789.987654321",
            "-987654321.123456789",
            "-1111111111.111111110",
        );
    }

    fn assert_sub(val1: &str, val2: &str, expected1: &str, expected2: &str) {
        let var1 = val1.parse::<Decimal>().unwrap();
        let var2 = val2.parse::<Decimal>().unwrap();

        let result1 = &var1 - &var2;
        assert_eq!(result1.to_string(), expected1);

        let result2 = &var2 - &var1;
        assert_eq!(result2.to_string(), expected2);

        let mut result3 = var1.clone();
        result3 -= &var2;
        assert_eq!(result3.to_string(), expected1);

        let mut result4 = var2.clone();
        result4 -= &var1;
        assert_eq!(result4.to_string(), expected2);
    }

    #[test]
    fn sub() {
        assert_sub(
            "0.000000001",
            "100000000",
            "-99999999.999999999",
            "99999999.999999999",
        );
        assert_sub(
            "123456789.987654321",
            "123456789.987654321",
            "0.000000000",
            "0.000000000",
        );
        assert_sub(
            "123456789.987654321",
            "987654321.123456789",
            "-864197531.135802468",
            "864197531.135802468",
        );
        assert_sub(
            "123456789.987654321",
            "-987654321.123456789",
            "1111111111.111111110",
            "-1111111111.111111110",
        );
        assert_sub("00000.00000", "00000.00000", "0.00000", "0.00000");
        assert_sub(
            "-123456789.987654321",
            "987654321.123456789",
            "-1111111111.111111110",
            "1111111111.111111110",
        );
        assert_sub(
            "-123456789.987654321",
            "-987654321.123456789",
            "864197531.135802468",
            "-864197531.135802468",
        );
    }

    fn assert_mul(val1: &str, val2: &str, expected: &str) {
        let var1 = val1.parse::<Decimal>().unwrap();
        let var2 = val2.parse::<Decimal>().unwrap();

        let result1 = &var1 * &var2;
        assert_eq!(result1.to_string(), expected);

        let result2 = &var2 * &var1;
        assert_eq!(result2.to_string(), expected);

        let mut result3 = var1.clone();
        result3 *= &var2;
        assert_eq!(result3.to_string(), expected);

        let mut result4 = var2.clone();
        result4 *= &var1;
        assert_eq!(result4.to_string(), expected);
    }

    #[test]
    fn mul() {
        assert_mul("0.000000001", "100000000", "0.100000000");
        assert_mul(
            "123456789.987654321",
            "-123456789.987654321",
            "-15241578994055784.200731595789971041",
        );
        assert_mul(
            "987654321.123456789",
            "-987654321.123456789",
            "-975461058033836303.240512116750190521",
        );
        assert_mul(
            "123456789.987654321",
            "987654321.123456789",
            "121932632103337905.662094193112635269",
        );
        assert_mul("123456789.987654321", "00000.00000", "0.00000000000000");
        assert_mul("00000.00000", "00000.00000", "0.0000000000");
        assert_mul(
            "-123456789.987654321",
            "987654321.123456789",
            "-121932632103337905.662094193112635269",
        );
        assert_mul(
            "-123456789.987654321",
            "-987654321.123456789",
            "121932632103337905.662094193112635269",
        );
        assert_mul("2.5", "4", "10.0");
    }

    macro_rules! assert_cmp {
        ($left: expr, $cmp: tt, $right: expr) => {{
            let left = $left.parse::<Decimal>().unwrap();
            let right = $right.parse::<Decimal>().unwrap();
            assert!(left $cmp right, "left = {}, right = {}", left, right);
        }};
    }

    fn assert_ord(val1: &str, val2: &str, expected: &str) {
        let var1 = val1.parse::<Decimal>().unwrap();
        let var2 = val2.parse::<Decimal>().unwrap();

        let result = std::cmp::max(var1, var2);
        assert_eq!(result.to_string(), expected);
    }

    #[test]
    fn cmp() {
        assert_cmp!("00000.00000", ==, "0");
        assert_cmp!("1.0", ==, "1");
        assert_cmp!("10.0", ==, "10");
        assert_cmp!("-10.0", ==, "-10");
        assert_cmp!("0.000000001", <, "100000000");
        assert_cmp!("100000000", >, "0.000000001");
        assert_cmp!("123456789.987654321", ==, "123456789.987654321");
        assert_cmp!("123456789.987654321", <, "987654321.123456789");
        assert_cmp!("987654321.123456789", >, "123456789.987654321");
        assert_cmp!("00000.00000", <, "123456789.987654321");
        assert_cmp!("123456789.987654321", >, "-987654321.123456789");
        assert_cmp!("-987654321.123456789", <, "123456789.987654321");
        assert_cmp!("00000.00000", >, "-987654321.123456789");
        assert_cmp!("-123456789.987654321", >, "-987654321.123456789");
        assert_cmp!("-987654321.123456789", <, "-123456789.987654321");
        assert_cmp!("1.0e-10000", >=, "1.0e-10001");
        assert_cmp!("1.0e-10001", <=, "1.0e-10000");
        assert_cmp!("1.0e-10000", !=, "1.0e-10001");
        assert_cmp!("1.0e100000", <=, "1.0e100001");
        assert_cmp!("1.0e100001", >=, "1.0e100000");
        assert_cmp!("1.0e100000", !=, "1.0e100001");

        assert_ord(
            "123456789.987654321",
            "987654321.123456789",
            "987654321.123456789",
        );
        assert_ord("-1", "-2", "-1");
    }

    fn assert_neg(val: &str, expected: &str) {
        let var = val.parse::<Decimal>().unwrap();
        assert_eq!((-&var).to_string(), expected);
        assert_eq!((-var).to_string(), expected);
    }

    #[test]
    fn neg() {
        assert_neg("00000.00000", "0.00000");
        assert_neg("1.0", "-1.0");
        assert_neg("-1.0", "1.0");
        assert_neg("123456789.987654321", "-123456789.987654321");
        assert_neg("-123456789.987654321", "123456789.987654321");
    }

    #[test]
    fn hash() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        fn hash_of(s: &str) -> u64 {
            let mut hasher = DefaultHasher::new();
            s.parse::<Decimal>().unwrap().hash(&mut hasher);
            hasher.finish()
        }

        // equal values hash equally regardless of scale
        assert_eq!(hash_of("1"), hash_of("1.0"));
        assert_eq!(hash_of("1"), hash_of("1.000000000"));
        assert_eq!(hash_of("-10"), hash_of("-10.00"));
        assert_eq!(hash_of("0"), hash_of("0.000"));
        assert_ne!(hash_of("1"), hash_of("-1"));
    }

    #[test]
    fn self_inverse() {
        // a + (a - a) == a
        let a = "123456789.987654321".parse::<Decimal>().unwrap();
        let result = &a + &(&a - &a);
        assert_eq!(result, a);
    }

    #[test]
    fn div_then_rescale() {
        // division errors are values, not panics, so the rescale is explicit
        let third = Decimal::one()
            .div_with_scale(&Decimal::from(3), 10, RoundingMode::HalfEven)
            .unwrap();
        assert_eq!(third.to_string(), "0.3333333333");
        assert_eq!(third.with_scale(2, RoundingMode::Down).to_string(), "0.33");
    }
}

#[cfg(test)]
mod prop_tests {
    use crate::{Decimal, RoundingMode};
    use proptest::prelude::*;

    fn decimal() -> impl Strategy<Value = Decimal> {
        (any::<i64>(), 0u32..12).prop_map(|(unscaled, scale)| Decimal::new(unscaled.into(), scale))
    }

    proptest! {
        #[test]
        fn add_commutes(a in decimal(), b in decimal()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn mul_commutes(a in decimal(), b in decimal()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn add_associates(a in decimal(), b in decimal(), c in decimal()) {
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn mul_associates(a in decimal(), b in decimal(), c in decimal()) {
            prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        }

        #[test]
        fn sub_is_add_inverse(a in decimal(), b in decimal()) {
            prop_assert_eq!(&(&a - &b) + &b, a);
        }

        #[test]
        fn string_round_trips(a in decimal()) {
            let reparsed = a.to_string().parse::<Decimal>().unwrap();
            prop_assert_eq!(reparsed, a);
        }

        #[test]
        fn cmp_ignores_scale(a in decimal(), pad in 0u32..6) {
            let padded = a.with_scale(a.scale() + pad, RoundingMode::Down);
            prop_assert_eq!(padded, a);
        }

        #[test]
        fn neg_flips_ordering(a in decimal(), b in decimal()) {
            prop_assert_eq!((-&a).cmp(&-&b), b.cmp(&a));
        }
    }
}
