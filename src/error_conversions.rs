//! Error conversion glue between layers.
//!
//! The domain layer must not depend on service or repository error types, so
//! the conversions from value-object failures live here.

use crate::domain::types::TypeConstraintError;
use crate::forms::FormError;
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

impl From<FormError> for ServiceError {
    fn from(val: FormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_constraint_maps_to_both_layers() {
        let service: ServiceError = TypeConstraintError::EmptyString.into();
        assert!(matches!(service, ServiceError::TypeConstraint(msg) if msg == "value cannot be empty"));

        let repo: RepositoryError = TypeConstraintError::InvalidAmount.into();
        assert!(matches!(repo, RepositoryError::ValidationError(_)));
    }

    #[test]
    fn form_error_maps_to_form() {
        let service: ServiceError = FormError::InvalidDate("2024-13-01".to_string()).into();
        assert!(matches!(service, ServiceError::Form(msg) if msg.contains("2024-13-01")));
    }
}
