/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::convert::TryFrom;
use std::error::Error;
use std::fmt;

/// A number type that implements Javascript / JSON semantics, modeled on serde_json:
/// <https://docs.serde.rs/src/serde_json/number.rs.html#20-22>
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    PosInt(u64),
    NegInt(i64),
    Float(f64),
}

// Integers above this can't round-trip through an f64.
const MAX_SAFE_FLOAT_INT: u64 = 1 << 53;

impl Number {
    /// Lossy conversion to `f64`
    pub fn to_f64_lossy(self) -> f64 {
        match self {
            Number::PosInt(v) => v as f64,
            Number::NegInt(v) => v as f64,
            Number::Float(v) => v,
        }
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::from(value as i64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        if value < 0 {
            Number::NegInt(value)
        } else {
            Number::PosInt(value as u64)
        }
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

/// The number could not be converted into the requested type without loss.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TryFromNumberError {
    OutOfRange { value: Number, target: &'static str },
    FractionalPart { value: f64, target: &'static str },
    PrecisionLoss { value: Number },
}

impl fmt::Display for TryFromNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TryFromNumberError::OutOfRange { value, target } => {
                write!(f, "{:?} does not fit into {}", value, target)
            }
            TryFromNumberError::FractionalPart { value, target } => {
                write!(f, "{} has a fractional part and cannot become {}", value, target)
            }
            TryFromNumberError::PrecisionLoss { value } => {
                write!(f, "{:?} cannot be represented exactly as an f64", value)
            }
        }
    }
}

impl Error for TryFromNumberError {}

macro_rules! integer_conversion {
    ($typ:ty) => {
        impl TryFrom<Number> for $typ {
            type Error = TryFromNumberError;

            fn try_from(value: Number) -> Result<Self, Self::Error> {
                let out_of_range = || TryFromNumberError::OutOfRange {
                    value,
                    target: stringify!($typ),
                };
                match value {
                    Number::PosInt(v) => <$typ>::try_from(v).map_err(|_| out_of_range()),
                    Number::NegInt(v) => <$typ>::try_from(v).map_err(|_| out_of_range()),
                    Number::Float(v) => {
                        if v.fract() != 0.0 {
                            return Err(TryFromNumberError::FractionalPart {
                                value: v,
                                target: stringify!($typ),
                            });
                        }
                        if v < <$typ>::MIN as f64 || v > <$typ>::MAX as f64 {
                            return Err(out_of_range());
                        }
                        Ok(v as $typ)
                    }
                }
            }
        }
    };
}

integer_conversion!(i32);
integer_conversion!(i64);

impl TryFrom<Number> for f64 {
    type Error = TryFromNumberError;

    fn try_from(value: Number) -> Result<Self, Self::Error> {
        match value {
            Number::PosInt(v) if v > MAX_SAFE_FLOAT_INT => {
                Err(TryFromNumberError::PrecisionLoss { value })
            }
            Number::NegInt(v) if v.unsigned_abs() > MAX_SAFE_FLOAT_INT => {
                Err(TryFromNumberError::PrecisionLoss { value })
            }
            other => Ok(other.to_f64_lossy()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Number, TryFromNumberError};
    use std::convert::TryFrom;

    #[test]
    fn integer_conversions() {
        assert_eq!(i32::try_from(Number::PosInt(5)), Ok(5));
        assert_eq!(i32::try_from(Number::NegInt(-5)), Ok(-5));
        assert_eq!(i64::try_from(Number::Float(10.0)), Ok(10));
        assert!(matches!(
            i32::try_from(Number::PosInt(u64::from(u32::MAX))),
            Err(TryFromNumberError::OutOfRange { .. })
        ));
        assert!(matches!(
            i64::try_from(Number::PosInt(u64::MAX)),
            Err(TryFromNumberError::OutOfRange { .. })
        ));
        assert!(matches!(
            i32::try_from(Number::Float(1.5)),
            Err(TryFromNumberError::FractionalPart { .. })
        ));
    }

    #[test]
    fn float_conversions() {
        assert_eq!(f64::try_from(Number::Float(1.5)), Ok(1.5));
        assert_eq!(f64::try_from(Number::NegInt(-3)), Ok(-3.0));
        assert!(matches!(
            f64::try_from(Number::PosInt(u64::MAX)),
            Err(TryFromNumberError::PrecisionLoss { .. })
        ));
    }

    #[test]
    fn from_signed() {
        assert_eq!(Number::from(-1i64), Number::NegInt(-1));
        assert_eq!(Number::from(7i32), Number::PosInt(7));
    }
}
