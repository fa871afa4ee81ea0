//! Form definitions backing the create and edit dialogs.
//!
//! Each form is deserialized from user input, checked with `validator` for
//! length limits and converted with `TryFrom` into the typed payload sent to
//! the API. Conversion reports the first missing field with the same message
//! the API itself would return.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;

pub mod outbox;
pub mod reference;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("{0} is required")]
    Required(&'static str),

    #[error("Action Required field is required")]
    ActionRequiredMissing,

    #[error("Required Days must be a valid number")]
    InvalidRequiredDays,

    #[error("Subject and Remarks are required")]
    SubjectAndRemarksRequired,

    #[error("document_source_id is required")]
    DocumentSourceRequired,

    #[error("document_control_no and route_no are required")]
    ControlAndRouteRequired,

    #[error("invalid {0}")]
    InvalidValue(&'static str),
}

/// Builds a required value object, reporting `label` when it is blank.
pub(crate) fn required<T>(value: String, label: &'static str) -> Result<T, FormError>
where
    T: TryFrom<String, Error = TypeConstraintError>,
{
    T::try_from(value).map_err(|_| FormError::Required(label))
}

/// Trims an optional text input.
pub(crate) fn trimmed(value: &str) -> String {
    value.trim().to_string()
}
