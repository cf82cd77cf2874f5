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

//! Decimal parsing utilities.

use crate::error::ParseDecimalError;
use crate::{ten_pow, Decimal};
use num_bigint::BigInt;
use smallvec::SmallVec;
use std::str::FromStr;

#[derive(Debug)]
enum Sign {
    Positive,
    Negative,
}

/// The interesting parts of a decimal string.
#[derive(Debug)]
struct Parts<'a> {
    sign: Sign,
    integral: &'a [u8],
    fractional: &'a [u8],
    exp: i32,
}

/// Checks if the input string is a valid decimal and if so, locate the
/// integral part, the fractional part, and the exponent in it.
fn parse_parts(s: &[u8]) -> Result<(Parts, &[u8]), ParseDecimalError> {
    let (sign, s) = extract_sign(s);

    if s.is_empty() {
        return Err(ParseDecimalError::invalid());
    }

    let (integral, s) = eat_digits(s);

    let (fractional, exp, s) = match s.first() {
        Some(&b'e') | Some(&b'E') => {
            if integral.is_empty() {
                return Err(ParseDecimalError::invalid());
            }

            let (exp, s) = extract_exponent(&s[1..])?;
            (b"".as_ref(), exp, s)
        }
        Some(&b'.') => {
            let (fractional, s) = eat_digits(&s[1..]);
            if integral.is_empty() && fractional.is_empty() {
                return Err(ParseDecimalError::invalid());
            }

            match s.first() {
                Some(&b'e') | Some(&b'E') => {
                    let (exp, s) = extract_exponent(&s[1..])?;
                    (fractional, exp, s)
                }
                _ => (fractional, 0, s),
            }
        }
        _ => {
            if integral.is_empty() {
                return Err(ParseDecimalError::invalid());
            }

            (b"".as_ref(), 0, s)
        }
    };

    Ok((
        Parts {
            sign,
            integral,
            fractional,
            exp,
        },
        s,
    ))
}

/// Carves off whitespaces up to the first non-whitespace character.
#[inline]
fn eat_whitespaces(s: &[u8]) -> &[u8] {
    let i = s.iter().take_while(|&i| i.is_ascii_whitespace()).count();
    &s[i..]
}

/// Carves off decimal digits up to the first non-digit character.
#[inline]
fn eat_digits(s: &[u8]) -> (&[u8], &[u8]) {
    let i = s.iter().take_while(|&i| i.is_ascii_digit()).count();
    (&s[..i], &s[i..])
}

/// Splits a decimal string bytes into sign and the rest, without inspecting
/// or validating the rest.
#[inline]
fn extract_sign(s: &[u8]) -> (Sign, &[u8]) {
    match s.first() {
        Some(b'+') => (Sign::Positive, &s[1..]),
        Some(b'-') => (Sign::Negative, &s[1..]),
        _ => (Sign::Positive, s),
    }
}

/// Extracts exponent, if any.
fn extract_exponent(s: &[u8]) -> Result<(i32, &[u8]), ParseDecimalError> {
    let (sign, s) = extract_sign(s);
    let (mut number, s) = eat_digits(s);

    if number.is_empty() {
        return Err(ParseDecimalError::invalid());
    }

    while number.first() == Some(&b'0') {
        number = &number[1..];
    }

    if number.len() > 10 {
        return Err(ParseDecimalError::overflow());
    }

    let exp = {
        let mut result: i64 = 0;
        for &n in number {
            result = result * 10 + (n - b'0') as i64;
        }
        match sign {
            Sign::Positive => result,
            Sign::Negative => -result,
        }
    };

    // Constraining the exponent is enough to prevent integer overflow
    // in the scale computation below.
    if exp >= i32::MAX as i64 / 2 || exp <= -(i32::MAX as i64 / 2) {
        return Err(ParseDecimalError::overflow());
    }

    Ok((exp as i32, s))
}

/// Parses a string bytes into a decimal.
///
/// This function does not handle leading or trailing spaces. It returns the
/// remaining string bytes so that caller can check for trailing
/// spaces/garbage if deemed necessary.
fn parse_str(s: &[u8]) -> Result<(Decimal, &[u8]), ParseDecimalError> {
    let (
        Parts {
            sign,
            integral,
            fractional,
            exp,
        },
        s,
    ) = parse_parts(s)?;

    let mut digits: SmallVec<[u8; 64]> =
        SmallVec::with_capacity(integral.len() + fractional.len());
    digits.extend_from_slice(integral);
    digits.extend_from_slice(fractional);

    let mut unscaled = match BigInt::parse_bytes(&digits, 10) {
        Some(value) => value,
        None => return Err(ParseDecimalError::invalid()),
    };

    let scale = fractional.len() as i64 - exp as i64;
    let scale = if scale < 0 {
        unscaled *= ten_pow((-scale) as u32);
        0
    } else {
        u32::try_from(scale).map_err(|_| ParseDecimalError::overflow())?
    };

    if let Sign::Negative = sign {
        unscaled = -unscaled;
    }

    Ok((Decimal::new(unscaled, scale), s))
}

/// Parses a string slice and creates a decimal.
///
/// This function handles leading and trailing spaces.
fn from_str(s: &str) -> Result<Decimal, ParseDecimalError> {
    let s = eat_whitespaces(s.as_bytes());
    if s.is_empty() {
        return Err(ParseDecimalError::empty());
    }

    let (n, s) = parse_str(s)?;

    if s.iter().any(|n| !n.is_ascii_whitespace()) {
        return Err(ParseDecimalError::invalid());
    }

    Ok(n)
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_str(s)
    }
}
