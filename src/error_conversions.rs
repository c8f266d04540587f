//! Error conversion glue between forms, repositories and services.
//!
//! The domain layer must not depend on service error types, so conversions
//! live here and are only compiled with the `app` feature.

use crate::domain::types::TypeConstraintError;
use crate::forms::catalog::{AddComponentFormError, AddSeriesFormError, AddUnitFormError};
use crate::forms::production_history::{AddProductionHistoryFormError, ProductReportFormError};
use crate::forms::products::CreateProductFormError;
use crate::repository::RepositoryError;
use crate::services::errors::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::Validation(vec![val.to_string()])
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(val: RepositoryError) -> Self {
        ServiceError::Internal(val.to_string())
    }
}

impl From<CreateProductFormError> for ServiceError {
    fn from(val: CreateProductFormError) -> Self {
        match val {
            CreateProductFormError::Validation(messages) => ServiceError::Validation(messages),
            other => ServiceError::Validation(vec![other.to_string()]),
        }
    }
}

impl From<AddProductionHistoryFormError> for ServiceError {
    fn from(val: AddProductionHistoryFormError) -> Self {
        match val {
            AddProductionHistoryFormError::Validation(messages) => {
                ServiceError::Validation(messages)
            }
            other => ServiceError::Validation(vec![other.to_string()]),
        }
    }
}

impl From<ProductReportFormError> for ServiceError {
    fn from(val: ProductReportFormError) -> Self {
        match val {
            ProductReportFormError::Validation(messages) => ServiceError::Validation(messages),
            other => ServiceError::Validation(vec![other.to_string()]),
        }
    }
}

impl From<AddComponentFormError> for ServiceError {
    fn from(val: AddComponentFormError) -> Self {
        match val {
            AddComponentFormError::Validation(messages) => ServiceError::Validation(messages),
            other => ServiceError::Validation(vec![other.to_string()]),
        }
    }
}

impl From<AddUnitFormError> for ServiceError {
    fn from(val: AddUnitFormError) -> Self {
        match val {
            AddUnitFormError::Validation(messages) => ServiceError::Validation(messages),
            other => ServiceError::Validation(vec![other.to_string()]),
        }
    }
}

impl From<AddSeriesFormError> for ServiceError {
    fn from(val: AddSeriesFormError) -> Self {
        match val {
            AddSeriesFormError::Validation(messages) => ServiceError::Validation(messages),
            other => ServiceError::Validation(vec![other.to_string()]),
        }
    }
}
