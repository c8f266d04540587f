use chrono::{NaiveDateTime, Utc};
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

use super::{collect_messages, valid_product_code};
use crate::domain::report::ReportPeriod;
use crate::domain::types::{ProductCode, TypeConstraintError};

const HISTORY_FIELDS: &[&str] = &["product_code", "notes"];
const REPORT_FIELDS: &[&str] = &["product_code"];

fn production_date_not_in_future(form: &AddProductionHistoryForm) -> Result<(), ValidationError> {
    match form.production_date {
        Some(date) if date > Utc::now().naive_utc() => Err(ValidationError::new("future_date")
            .with_message("Production date cannot be in the future.".into())),
        _ => Ok(()),
    }
}

fn start_not_after_end(form: &ProductReportForm) -> Result<(), ValidationError> {
    match (form.start_date, form.end_date) {
        (Some(start), Some(end)) if start > end => Err(ValidationError::new("date_range")
            .with_message("Start date cannot be later than end date.".into())),
        _ => Ok(()),
    }
}

/// Request to record one manufacturing run of a product.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[validate(schema(function = "production_date_not_in_future", skip_on_field_errors = false))]
pub struct AddProductionHistoryForm {
    #[validate(custom(function = "valid_product_code"))]
    pub product_code: String,
    /// UTC timestamp of the run; the current time when absent.
    pub production_date: Option<NaiveDateTime>,
    #[validate(length(max = 500, message = "Notes cannot exceed 500 characters."))]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddProductionHistoryFormPayload {
    pub product_code: ProductCode,
    pub production_date: Option<NaiveDateTime>,
    pub notes: Option<String>,
}

#[derive(Debug, Error, PartialEq)]
pub enum AddProductionHistoryFormError {
    #[error("{}", .0.join(" "))]
    Validation(Vec<String>),
    #[error("Production history form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for AddProductionHistoryFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(collect_messages(&value, HISTORY_FIELDS))
    }
}

impl From<TypeConstraintError> for AddProductionHistoryFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<AddProductionHistoryForm> for AddProductionHistoryFormPayload {
    type Error = AddProductionHistoryFormError;

    fn try_from(value: AddProductionHistoryForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            product_code: ProductCode::new(value.product_code)?,
            production_date: value.production_date,
            notes: value.notes,
        })
    }
}

/// Request for a product report over an optional inclusive date range.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[validate(schema(function = "start_not_after_end", skip_on_field_errors = false))]
pub struct ProductReportForm {
    #[validate(custom(function = "valid_product_code"))]
    pub product_code: String,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductReportFormPayload {
    pub product_code: ProductCode,
    pub period: ReportPeriod,
}

#[derive(Debug, Error, PartialEq)]
pub enum ProductReportFormError {
    #[error("{}", .0.join(" "))]
    Validation(Vec<String>),
    #[error("Product report form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for ProductReportFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(collect_messages(&value, REPORT_FIELDS))
    }
}

impl From<TypeConstraintError> for ProductReportFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<ProductReportForm> for ProductReportFormPayload {
    type Error = ProductReportFormError;

    fn try_from(value: ProductReportForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            product_code: ProductCode::new(value.product_code)?,
            period: ReportPeriod::new(value.start_date, value.end_date),
        })
    }
}
