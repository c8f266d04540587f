//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs should carry these wrappers instead of raw primitives so that
//! identifiers, text values and monetary precision are enforced at the
//! boundary.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// An identifier was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveId(&'static str),
    /// A numeric value required to be positive was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveNumber(&'static str),
    /// A numeric value required to be non-negative was negative.
    #[error("{0} must be zero or greater")]
    NegativeNumber(&'static str),
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// A string exceeded its maximum length in characters.
    #[error("{0} cannot exceed {1} characters")]
    TooLong(&'static str, usize),
    /// Stored decimal text could not be parsed.
    #[error("{0} is not a valid decimal number")]
    InvalidDecimal(&'static str),
    /// Decimal arithmetic overflowed.
    #[error("{0} is out of range")]
    Overflow(&'static str),
    /// Catch-all for custom validation failures.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

fn require_max_chars(
    value: String,
    field: &'static str,
    max: usize,
) -> Result<String, TypeConstraintError> {
    if value.chars().count() > max {
        Err(TypeConstraintError::TooLong(field, max))
    } else {
        Ok(value)
    }
}

/// Rounds half away from zero to `scale` fractional digits and pins the scale
/// so the textual form always carries exactly that many digits.
fn normalize_scale(value: Decimal, scale: u32) -> Decimal {
    let mut normalized = value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    normalized.rescale(scale);
    if normalized.is_zero() {
        normalized.set_sign_positive(true);
    }
    normalized
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId($field))
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i32> for $name {
            fn eq(&self, other: &i32) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$name> for i32 {
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }
    };
}

/// Trimmed, non-empty strings with an upper bound on their character count.
macro_rules! bounded_string_newtype {
    ($name:ident, $doc:expr, $field:expr, $max:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Maximum length in characters.
            pub const MAX_LEN: usize = $max;

            /// Constructs a trimmed, non-empty value no longer than [`Self::MAX_LEN`].
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let trimmed = trim_and_require_non_empty(value, $field)?;
                require_max_chars(trimmed, $field, $max).map(Self)
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl PartialEq<$name> for &str {
            fn eq(&self, other: &$name) -> bool {
                *self == other.as_str()
            }
        }
    };
}

/// Exact decimal newtypes pinned to a fixed number of fractional digits.
macro_rules! decimal_newtype {
    ($name:ident, $doc:expr, $field:expr, $scale:expr, $valid:expr, $err:ident) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(Decimal);

        impl $name {
            /// Number of fractional digits kept for this value.
            pub const SCALE: u32 = $scale;

            /// Rounds to [`Self::SCALE`] digits and checks the sign constraint.
            pub fn new(value: Decimal) -> Result<Self, TypeConstraintError> {
                let normalized = normalize_scale(value, $scale);
                let valid: fn(&Decimal) -> bool = $valid;
                if valid(&normalized) {
                    Ok(Self(normalized))
                } else {
                    Err(TypeConstraintError::$err($field))
                }
            }

            /// Returns the underlying decimal.
            pub const fn get(self) -> Decimal {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = TypeConstraintError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                let parsed = Decimal::from_str(value.trim())
                    .map_err(|_| TypeConstraintError::InvalidDecimal($field))?;
                Self::new(parsed)
            }
        }

        impl TryFrom<Decimal> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: Decimal) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$name> for Decimal {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<Decimal> for $name {
            fn eq(&self, other: &Decimal) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$name> for Decimal {
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }
    };
}

id_newtype!(ProductId, "Unique identifier for a product.", "product_id");
id_newtype!(
    ComponentId,
    "Unique identifier for a component.",
    "component_id"
);
id_newtype!(
    CategoryId,
    "Unique identifier for a component category.",
    "category_id"
);
id_newtype!(UnitId, "Unique identifier for a unit of measure.", "unit_id");
id_newtype!(SeriesId, "Unique identifier for a product series.", "series_id");
id_newtype!(BomItemId, "Unique identifier for a BOM line.", "bom_item_id");
id_newtype!(
    ProductionHistoryId,
    "Unique identifier for a production history record.",
    "production_history_id"
);

bounded_string_newtype!(
    ProductCode,
    "Catalog code identifying a product, at most 10 characters.",
    "product code",
    10
);
bounded_string_newtype!(
    ComponentName,
    "Component display name, at most 90 characters.",
    "component name",
    90
);
bounded_string_newtype!(
    CategoryName,
    "Category name, at most 50 characters.",
    "category name",
    50
);
bounded_string_newtype!(UnitName, "Unit of measure name.", "unit name", 10);
bounded_string_newtype!(SeriesName, "Product series name.", "series name", 90);
bounded_string_newtype!(Notes, "Free-text notes.", "notes", 500);

decimal_newtype!(
    Money,
    "Non-negative currency amount with two fractional digits.",
    "price",
    2,
    |value| !value.is_sign_negative(),
    NegativeNumber
);
decimal_newtype!(
    Dimension,
    "Non-negative physical size with two fractional digits.",
    "size",
    2,
    |value| !value.is_sign_negative(),
    NegativeNumber
);
decimal_newtype!(
    Quantity,
    "Strictly positive BOM quantity with three fractional digits.",
    "quantity",
    3,
    |value| value.is_sign_positive() && !value.is_zero(),
    NonPositiveNumber
);

impl Money {
    /// Zero in the canonical two-digit form.
    pub fn zero() -> Self {
        Self(normalize_scale(Decimal::ZERO, 2))
    }

    /// Adds two amounts, failing instead of panicking on overflow.
    pub fn checked_add(self, other: Money) -> Result<Money, TypeConstraintError> {
        self.0
            .checked_add(other.0)
            .ok_or(TypeConstraintError::Overflow("price"))
            .and_then(Money::new)
    }

    /// Rounds an exact non-negative total up to the next whole currency unit.
    pub fn ceiling_of(total: Decimal) -> Result<Money, TypeConstraintError> {
        Money::new(total.ceil())
    }
}

impl Notes {
    /// Builds notes from arbitrary text, cutting it to [`Self::MAX_LEN`]
    /// characters. Returns `None` when nothing remains after trimming.
    pub fn truncated(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }
        let cut: String = trimmed.chars().take(Self::MAX_LEN).collect();
        Self::new(cut).ok()
    }
}

/// Cost of one BOM line: `quantity × price per unit`, computed exactly.
pub fn line_total(quantity: Quantity, price_per_unit: Money) -> Result<Decimal, TypeConstraintError> {
    quantity
        .get()
        .checked_mul(price_per_unit.get())
        .ok_or(TypeConstraintError::Overflow("line total"))
}
