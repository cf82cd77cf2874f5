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

//! Error types for decimal operations.

use std::error::Error;
use std::fmt;

/// An error which can be returned when parsing a decimal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDecimalError {
    kind: ParseErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ParseErrorKind {
    Empty,
    Invalid,
    Overflow,
}

impl fmt::Display for ParseDecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self.kind {
            ParseErrorKind::Empty => write!(f, "cannot parse decimal from empty string"),
            ParseErrorKind::Invalid => write!(f, "invalid decimal literal"),
            ParseErrorKind::Overflow => write!(f, "value overflows decimal format"),
        }
    }
}

impl Error for ParseDecimalError {}

impl ParseDecimalError {
    #[inline]
    pub(crate) const fn new(kind: ParseErrorKind) -> Self {
        ParseDecimalError { kind }
    }

    #[inline]
    pub(crate) const fn empty() -> Self {
        Self::new(ParseErrorKind::Empty)
    }

    #[inline]
    pub(crate) const fn invalid() -> Self {
        Self::new(ParseErrorKind::Invalid)
    }

    #[inline]
    pub(crate) const fn overflow() -> Self {
        Self::new(ParseErrorKind::Overflow)
    }
}

/// An error which can be returned when converting between decimals and
/// native numeric types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TryFromDecimalError {
    kind: TryFromErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TryFromErrorKind {
    Invalid,
    Overflow,
}

impl fmt::Display for TryFromDecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self.kind {
            TryFromErrorKind::Invalid => write!(f, "cannot convert non-finite value to decimal"),
            TryFromErrorKind::Overflow => write!(f, "value out of range of the target type"),
        }
    }
}

impl Error for TryFromDecimalError {}

impl TryFromDecimalError {
    #[inline]
    pub(crate) const fn new(kind: TryFromErrorKind) -> Self {
        TryFromDecimalError { kind }
    }

    #[inline]
    pub(crate) const fn invalid() -> Self {
        Self::new(TryFromErrorKind::Invalid)
    }

    #[inline]
    pub(crate) const fn overflow() -> Self {
        Self::new(TryFromErrorKind::Overflow)
    }
}

/// An error which can be returned when dividing decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DivideError {
    /// The divisor is zero.
    DivisionByZero,
    /// The exact quotient has a non-terminating decimal expansion.
    Inexact,
}

impl fmt::Display for DivideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            DivideError::DivisionByZero => write!(f, "attempt to divide by zero"),
            DivideError::Inexact => {
                write!(f, "exact quotient has a non-terminating decimal expansion")
            }
        }
    }
}

impl Error for DivideError {}
