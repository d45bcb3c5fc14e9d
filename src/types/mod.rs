//! Validated option value types.
//!
//! Rule config structs use these newtypes so that out-of-range values (zero or negative
//! lengths, absurd indentation or spacing) are rejected when options are deserialized,
//! before any rule runs.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// A numeric option outside its accepted range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("must be between {min} and {max}, got {value}")]
pub struct OutOfRange {
    pub value: i64,
    pub min: usize,
    pub max: usize,
}

fn check_range(value: i64, min: usize, max: usize) -> Result<usize, OutOfRange> {
    usize::try_from(value)
        .ok()
        .filter(|v| (min..=max).contains(v))
        .ok_or(OutOfRange { value, min, max })
}

/// Range-checked construction, const defaults and plain-number serde for a bounded count
macro_rules! bounded_usize {
    ($name:ident, $min:expr, $max:expr) => {
        impl $name {
            pub const MIN: usize = $min;
            pub const MAX: usize = $max;

            pub fn new(value: usize) -> Result<Self, OutOfRange> {
                let value = i64::try_from(value).unwrap_or(i64::MAX);
                check_range(value, Self::MIN, Self::MAX).map(Self)
            }

            pub fn get(self) -> usize {
                self.0
            }

            /// For const defaults only.
            ///
            /// # Panics
            /// Panics if the value is outside `MIN..=MAX`.
            pub const fn from_const(value: usize) -> Self {
                assert!(
                    value >= Self::MIN && value <= Self::MAX,
                    concat!(stringify!($name), " out of range")
                );
                Self(value)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let value = i64::deserialize(deserializer)?;
                check_range(value, Self::MIN, Self::MAX)
                    .map(Self)
                    .map_err(serde::de::Error::custom)
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                self.0.serialize(serializer)
            }
        }
    };
}

/// A limit that must be at least 1 (line lengths)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PositiveUsize(usize);

bounded_usize!(PositiveUsize, 1, 1_000_000);

/// List indentation width in spaces (1-8)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndentSize(usize);

bounded_usize!(IndentSize, 1, 8);

impl Default for IndentSize {
    fn default() -> Self {
        Self(2)
    }
}

/// A run of spaces emitted into a fix hint: after a list marker, or per expanded tab (1-16)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpaceCount(usize);

bounded_usize!(SpaceCount, 1, 16);
