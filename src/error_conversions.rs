//! Error conversion glue between the value objects and the console layers.
//!
//! The domain layer must not depend on service/repository error types, so the
//! conversions live here and are only compiled with the `console` feature.

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::RegionName;
    use crate::forms::FormError;

    #[test]
    fn value_errors_keep_their_message() {
        let blank = || RegionName::new("  ").expect_err("blank name");
        let message = blank().to_string();

        assert!(matches!(
            ServiceError::from(blank()),
            ServiceError::TypeConstraint(ref text) if *text == message
        ));
        assert!(matches!(
            RepositoryError::from(blank()),
            RepositoryError::ValidationError(ref text) if *text == message
        ));
    }

    #[test]
    fn form_errors_surface_as_service_errors() {
        let err = ServiceError::from(FormError::Required("Region Name"));
        assert_eq!(err.to_string(), "Region Name is required");
    }
}
