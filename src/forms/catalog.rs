use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use super::{collect_messages, not_blank};
use crate::domain::category::CategoryKind;
use crate::domain::component::NewComponent;
use crate::domain::series::NewSeries;
use crate::domain::types::{
    ComponentName, Money, SeriesName, TypeConstraintError, UnitId, UnitName,
};
use crate::domain::unit::NewUnit;

const COMPONENT_FIELDS: &[&str] = &["name", "unit_id", "price_per_unit", "category"];
const NAME_FIELDS: &[&str] = &["name"];

fn non_negative_decimal(value: &Decimal) -> Result<(), validator::ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        Err(validator::ValidationError::new("non_negative"))
    } else {
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AddComponentForm {
    #[validate(
        custom(function = "not_blank", message = "Name must be provided."),
        length(max = 90, message = "Component name cannot exceed 90 characters.")
    )]
    pub name: String,
    #[validate(range(min = 1, message = "The field 'UnitId' must be greater than zero."))]
    pub unit_id: i32,
    #[validate(custom(
        function = "non_negative_decimal",
        message = "The field 'PricePerUnit' cannot be negative."
    ))]
    pub price_per_unit: Decimal,
    #[validate(custom(function = "not_blank", message = "Category must be provided."))]
    pub category: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddComponentFormPayload {
    pub component: NewComponent,
}

#[derive(Debug, Error, PartialEq)]
pub enum AddComponentFormError {
    #[error("{}", .0.join(" "))]
    Validation(Vec<String>),
    #[error("Add component form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for AddComponentFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(collect_messages(&value, COMPONENT_FIELDS))
    }
}

impl From<TypeConstraintError> for AddComponentFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<AddComponentForm> for AddComponentFormPayload {
    type Error = AddComponentFormError;

    fn try_from(value: AddComponentForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            component: NewComponent {
                name: ComponentName::new(value.name)?,
                unit_id: UnitId::new(value.unit_id)?,
                price_per_unit: Money::new(value.price_per_unit)?,
                category: CategoryKind::try_from(value.category)?,
            },
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AddUnitForm {
    #[validate(
        custom(function = "not_blank", message = "Name must be provided."),
        length(max = 10, message = "Unit name cannot exceed 10 characters.")
    )]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddUnitFormPayload {
    pub unit: NewUnit,
}

#[derive(Debug, Error, PartialEq)]
pub enum AddUnitFormError {
    #[error("{}", .0.join(" "))]
    Validation(Vec<String>),
    #[error("Add unit form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for AddUnitFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(collect_messages(&value, NAME_FIELDS))
    }
}

impl From<TypeConstraintError> for AddUnitFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<AddUnitForm> for AddUnitFormPayload {
    type Error = AddUnitFormError;

    fn try_from(value: AddUnitForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            unit: NewUnit {
                name: UnitName::new(value.name)?,
            },
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AddSeriesForm {
    #[validate(
        custom(function = "not_blank", message = "Name must be provided."),
        length(max = 90, message = "Series name cannot exceed 90 characters.")
    )]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddSeriesFormPayload {
    pub series: NewSeries,
}

#[derive(Debug, Error, PartialEq)]
pub enum AddSeriesFormError {
    #[error("{}", .0.join(" "))]
    Validation(Vec<String>),
    #[error("Add series form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for AddSeriesFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(collect_messages(&value, NAME_FIELDS))
    }
}

impl From<TypeConstraintError> for AddSeriesFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<AddSeriesForm> for AddSeriesFormPayload {
    type Error = AddSeriesFormError;

    fn try_from(value: AddSeriesForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            series: NewSeries {
                name: SeriesName::new(value.name)?,
            },
        })
    }
}
