//! Strongly-typed value objects used by domain records.
//!
//! These wrappers enforce basic invariants (e.g., positive identifiers,
//! trimmed non-empty labels, sanitized remarks) so that once a value reaches
//! the domain layer it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Width used when rendering record identifiers (`7` becomes `00007`).
pub const ID_DISPLAY_WIDTH: usize = 5;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided value is not a valid non-negative whole number.
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    /// Page size must be at least one record.
    #[error("page size must be greater than zero")]
    InvalidPageSize,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Formats a raw identifier the way list tables display it.
pub fn padded_id(id: i32) -> String {
    format!("{id:0width$}", width = ID_DISPLAY_WIDTH)
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(try_from = "i32", into = "i32")]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }

            /// Zero-padded form shown in list tables.
            pub fn padded(self) -> String {
                padded_id(self.0)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                Display::fmt(&self.0, f)
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
    };
}

id_newtype!(OfficeId, "Unique identifier for an office.");
id_newtype!(RegionId, "Unique identifier for a region.");
id_newtype!(ActionOfficerId, "Unique identifier for an action officer.");
id_newtype!(DocumentTypeId, "Unique identifier for a document type.");
id_newtype!(ActionRequiredId, "Unique identifier for an action required entry.");
id_newtype!(ActionTakenId, "Unique identifier for an action taken entry.");
id_newtype!(
    ActionRequiredDaysId,
    "Unique identifier for a document/action required days rule."
);
id_newtype!(UserLevelId, "Unique identifier for a user level.");
id_newtype!(DocumentId, "Unique identifier for an outbox document.");
id_newtype!(DestinationId, "Unique identifier for a document destination.");

/// Trims `value`, rejecting strings with nothing left.
fn trimmed_non_empty(value: String) -> Result<String, TypeConstraintError> {
    match value.trim() {
        "" => Err(TypeConstraintError::EmptyString),
        trimmed if trimmed.len() == value.len() => Ok(value),
        trimmed => Ok(trimmed.to_owned()),
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
                trimmed_non_empty(value.into()).map(Self)
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
                Display::fmt(&self.0, f)
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

non_empty_string_newtype!(OfficeName, "Office name enforcing non-empty values.");
non_empty_string_newtype!(RegionName, "Region name enforcing non-empty values.");
non_empty_string_newtype!(
    EmployeeCode,
    "Action officer employee code enforcing non-empty values."
);
non_empty_string_newtype!(PersonName, "Single name part of an action officer.");
non_empty_string_newtype!(
    DocumentTypeName,
    "Document type label enforcing non-empty values."
);
non_empty_string_newtype!(
    ActionLabel,
    "Action required / action taken label enforcing non-empty values."
);
non_empty_string_newtype!(UserLevelName, "User level name enforcing non-empty values.");
non_empty_string_newtype!(
    ControlNumber,
    "Document control or route number enforcing non-empty values."
);
non_empty_string_newtype!(Subject, "Document subject enforcing non-empty values.");

/// Free-text remarks passed through `ammonia`, trimmed and non-empty.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Remarks(String);

impl Remarks {
    /// Constructs a sanitized, trimmed, non-empty value.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        trimmed_non_empty(ammonia::clean(&value.into())).map(Self)
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

impl Display for Remarks {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// Number of days an action is allowed to take for a document type.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequiredDays(u32);

impl RequiredDays {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Parses the textual form input, rejecting anything but a whole number.
    pub fn parse(value: &str) -> Result<Self, TypeConstraintError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        trimmed
            .parse::<u32>()
            .map(Self)
            .map_err(|_| TypeConstraintError::InvalidNumber(trimmed.to_string()))
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Display for RequiredDays {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_reject_non_positive_values() {
        assert_eq!(OfficeId::new(0), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(OfficeId::new(-3), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(OfficeId::new(12).map(OfficeId::get), Ok(12));
    }

    #[test]
    fn ids_render_zero_padded() {
        let id = RegionId::new(7).expect("valid region id");
        assert_eq!(id.padded(), "00007");
        assert_eq!(padded_id(123456), "123456");
    }

    #[test]
    fn labels_are_trimmed_and_non_empty() {
        let name = RegionName::new("  NCR  ").expect("valid name");
        assert_eq!(name.as_str(), "NCR");
        assert_eq!(RegionName::new("   "), Err(TypeConstraintError::EmptyString));
    }

    #[test]
    fn remarks_strip_markup() {
        let remarks = Remarks::new("<script>alert(1)</script>Signed copy").expect("valid remarks");
        assert_eq!(remarks.as_str(), "Signed copy");
        assert!(Remarks::new("<script>x</script>").is_err());
    }

    #[test]
    fn required_days_parse_whole_numbers_only() {
        assert_eq!(RequiredDays::parse(" 15 ").map(RequiredDays::get), Ok(15));
        assert_eq!(
            RequiredDays::parse("three"),
            Err(TypeConstraintError::InvalidNumber("three".to_string()))
        );
        assert_eq!(RequiredDays::parse(""), Err(TypeConstraintError::EmptyString));
        assert!(RequiredDays::parse("-1").is_err());
    }

    #[test]
    fn ids_deserialize_through_validation() {
        let id: DocumentId = serde_json::from_str("4").expect("valid id");
        assert_eq!(id.get(), 4);
        assert!(serde_json::from_str::<DocumentId>("0").is_err());
    }
}
