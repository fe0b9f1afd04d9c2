//! Strongly-typed value objects used by domain records.
//!
//! These wrappers enforce basic invariants (e.g., well-formed record
//! identifiers, trimmed non-empty names, non-negative amounts) so that once a
//! value reaches the domain layer it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided record identifier did not match `<PREFIX><digits>`.
    #[error("invalid record id: {0}")]
    InvalidRecordId(String),
    /// Provided amount was negative, NaN or infinite.
    #[error("amount must be a finite non-negative number")]
    InvalidAmount,
    /// Provided status string is not part of the option set.
    #[error("unknown status: {0}")]
    UnknownStatus(String),
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
    /// No sequence number is left after the highest existing identifier.
    #[error("no identifiers left after {0}")]
    IdsExhausted(String),
}

/// Wrapper for non-empty, trimmed strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Borrow the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for NonEmptyString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let inner = NonEmptyString::new(value)?;
                Ok(Self(inner.into_inner()))
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

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
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

        impl FromStr for $name {
            type Err = TypeConstraintError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_string_newtype!(AnimalName, "Animal or calf name enforcing non-empty values.");
non_empty_string_newtype!(BreedName, "Breed label enforcing non-empty values.");
non_empty_string_newtype!(
    LocationName,
    "Pen, paddock or barn label enforcing non-empty values."
);
non_empty_string_newtype!(VaccineName, "Vaccine product name enforcing non-empty values.");
non_empty_string_newtype!(
    ConditionName,
    "Diagnosed condition wrapper enforcing non-empty values."
);
non_empty_string_newtype!(
    VeterinarianName,
    "Attending veterinarian wrapper enforcing non-empty values."
);
non_empty_string_newtype!(SireId, "Bull tag or semen straw code enforcing non-empty values.");
non_empty_string_newtype!(FeedType, "Feed kind (hay, silage, ...) enforcing non-empty values.");
non_empty_string_newtype!(
    CategoryName,
    "Financial category wrapper enforcing non-empty values."
);

/// Sanitized free text used for notes and descriptions.
///
/// Markup is stripped with `ammonia`; empty input is allowed and stays empty.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Notes(String);

impl Notes {
    pub fn new<S: Into<String>>(value: S) -> Self {
        let sanitized = ammonia::clean(&value.into());
        Self(sanitized.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for Notes {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Macro to generate record identifiers of the form `<PREFIX><digits>`.
macro_rules! record_id_newtype {
    ($name:ident, $prefix:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Prefix shared by every identifier of this kind.
            pub const PREFIX: &'static str = $prefix;

            /// Parses an identifier, upper-casing the input.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let normalized = value.into().trim().to_uppercase();
                parse_record_number(&normalized, Self::PREFIX)?;
                Ok(Self(normalized))
            }

            /// Builds the identifier for a sequence number, zero padded to three digits.
            pub fn from_number(number: u32) -> Self {
                Self(format!("{}{:03}", Self::PREFIX, number))
            }

            /// Returns the numeric part of the identifier.
            pub fn number(&self) -> u32 {
                // Validated on construction.
                parse_record_number(&self.0, Self::PREFIX).unwrap_or_default()
            }

            /// Returns the identifier following the highest one in `existing`.
            pub fn next_after<'a, I>(existing: I) -> Result<Self, TypeConstraintError>
            where
                I: IntoIterator<Item = &'a Self>,
            {
                let max = existing.into_iter().map(Self::number).max().unwrap_or(0);
                max.checked_add(1)
                    .map(Self::from_number)
                    .ok_or_else(|| TypeConstraintError::IdsExhausted(Self::from_number(max).0))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = TypeConstraintError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
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
    };
}

fn parse_record_number(value: &str, prefix: &str) -> Result<u32, TypeConstraintError> {
    let invalid = || TypeConstraintError::InvalidRecordId(value.to_string());
    let digits = value.strip_prefix(prefix).ok_or_else(invalid)?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    digits.parse().map_err(|_| invalid())
}

record_id_newtype!(AnimalTag, "COW", "Ear tag identifying an adult animal.");
record_id_newtype!(CalfTag, "CALF", "Ear tag identifying a newborn calf.");
record_id_newtype!(VaccinationId, "VAC", "Identifier of a vaccination schedule entry.");
record_id_newtype!(HealthRecordId, "HEALTH", "Identifier of a treatment record.");
record_id_newtype!(BreedingRecordId, "BRD", "Identifier of a breeding record.");
record_id_newtype!(FeedRecordId, "FEED", "Identifier of a feed purchase log entry.");
record_id_newtype!(TransactionId, "TXN", "Identifier of a financial transaction.");

/// Finite, non-negative quantity (money, litres, kilograms).
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, PartialOrd)]
#[serde(try_from = "f64", into = "f64")]
pub struct Amount(f64);

impl Amount {
    pub const ZERO: Amount = Amount(0.0);

    /// Validates that the value is finite and not negative.
    pub fn new(value: f64) -> Result<Self, TypeConstraintError> {
        if value.is_finite() && value >= 0.0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::InvalidAmount)
        }
    }

    pub const fn get(self) -> f64 {
        self.0
    }
}

impl std::ops::Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Self) -> Self::Output {
        Amount(self.0 + rhs.0)
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, |acc, a| acc + a)
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl TryFrom<f64> for Amount {
    type Error = TypeConstraintError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for f64 {
    fn from(value: Amount) -> Self {
        value.0
    }
}

/// Macro to generate small closed option sets parsed from their labels.
macro_rules! labeled_enum {
    ($name:ident, $doc:expr, { $($variant:ident => $label:expr),+ $(,)? }) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// All values in display order.
            pub const OPTIONS: &'static [Self] = &[$($name::$variant),+];

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.label())
            }
        }

        impl FromStr for $name {
            type Err = TypeConstraintError;

            /// Matches labels case-insensitively.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                Self::OPTIONS
                    .iter()
                    .copied()
                    .find(|option| option.label().eq_ignore_ascii_case(trimmed))
                    .ok_or_else(|| TypeConstraintError::InvalidValue(trimmed.to_string()))
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.label().to_string()
            }
        }
    };
}

labeled_enum!(Gender, "Sex of an animal or calf.", {
    Female => "Female",
    Male => "Male",
});

labeled_enum!(BreedingMethod, "How a breeding was performed.", {
    Natural => "Natural",
    ArtificialInsemination => "AI",
});

labeled_enum!(ConfirmationMethod, "How a pregnancy was checked.", {
    Ultrasound => "Ultrasound",
    PhysicalExam => "Physical Exam",
    BloodTest => "Blood Test",
    Visual => "Visual",
});

labeled_enum!(VaccineReaction, "Observed reaction after a vaccination.", {
    NoReaction => "None",
    Mild => "Mild",
    Moderate => "Moderate",
    Severe => "Severe",
});

labeled_enum!(Severity, "Severity of a diagnosed condition.", {
    Mild => "Mild",
    Moderate => "Moderate",
    Severe => "Severe",
    Critical => "Critical",
});
