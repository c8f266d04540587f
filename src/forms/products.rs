use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use super::{
    collect_messages, positive_dimension, positive_money, positive_quantity, valid_product_code,
};
use crate::domain::product::{NewBomItem, NewProduct};
use crate::domain::types::{
    ComponentId, Dimension, Money, Notes, ProductCode, Quantity, SeriesId, TypeConstraintError,
};

const PRODUCT_FIELDS: &[&str] = &[
    "product_code",
    "series_id",
    "size_width",
    "size_height",
    "recommended_price",
    "bom_items",
    "notes",
];
const BOM_ITEM_FIELDS: &[&str] = &["component_id", "quantity"];

/// One BOM line of a product creation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct BomItemForm {
    #[validate(range(min = 1, message = "The field 'ComponentId' must be greater than zero."))]
    pub component_id: i32,
    #[validate(custom(
        function = "positive_quantity",
        message = "The field 'Quantity' must be greater than zero."
    ))]
    pub quantity: Decimal,
}

/// Request to create a product together with its bill of materials.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateProductForm {
    #[validate(custom(function = "valid_product_code"))]
    pub product_code: String,
    #[validate(range(min = 1, message = "The field 'SeriesId' must be greater than zero."))]
    pub series_id: i32,
    #[validate(custom(
        function = "positive_dimension",
        message = "The field 'SizeWidth' must be greater than zero."
    ))]
    pub size_width: Decimal,
    #[validate(custom(
        function = "positive_dimension",
        message = "The field 'SizeHeight' must be greater than zero."
    ))]
    pub size_height: Decimal,
    #[validate(custom(
        function = "positive_money",
        message = "The field 'RecommendedPrice' must be greater than zero."
    ))]
    pub recommended_price: Decimal,
    #[validate(length(min = 1, message = "Product must have at least one BOM item."))]
    pub bom_items: Vec<BomItemForm>,
    #[validate(length(max = 500, message = "Notes cannot exceed 500 characters."))]
    pub notes: Option<String>,
}

impl CreateProductForm {
    /// Every rule violation of the request, BOM lines included.
    pub fn violations(&self) -> Vec<String> {
        let mut messages = match self.validate() {
            Ok(()) => vec![],
            Err(errors) => collect_messages(&errors, PRODUCT_FIELDS),
        };

        for (index, item) in self.bom_items.iter().enumerate() {
            if let Err(errors) = item.validate() {
                messages.extend(
                    collect_messages(&errors, BOM_ITEM_FIELDS)
                        .into_iter()
                        .map(|message| format!("BomItems[{index}]: {message}")),
                );
            }
        }

        messages
    }
}

/// Validated product creation request.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateProductFormPayload {
    pub product_code: ProductCode,
    pub series_id: SeriesId,
    pub size_width: Dimension,
    pub size_height: Dimension,
    pub recommended_price: Money,
    pub notes: Option<Notes>,
    pub bom_items: Vec<NewBomItem>,
}

impl CreateProductFormPayload {
    pub fn into_new_product(self, created_at: NaiveDateTime) -> NewProduct {
        NewProduct {
            product_code: self.product_code,
            series_id: self.series_id,
            size_width: self.size_width,
            size_height: self.size_height,
            recommended_price: self.recommended_price,
            created_at,
            notes: self.notes,
            bom_items: self.bom_items,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum CreateProductFormError {
    #[error("{}", .0.join(" "))]
    Validation(Vec<String>),
    #[error("Create product form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for CreateProductFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(collect_messages(&value, PRODUCT_FIELDS))
    }
}

impl From<TypeConstraintError> for CreateProductFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<CreateProductForm> for CreateProductFormPayload {
    type Error = CreateProductFormError;

    fn try_from(value: CreateProductForm) -> Result<Self, Self::Error> {
        let violations = value.violations();
        if !violations.is_empty() {
            return Err(CreateProductFormError::Validation(violations));
        }

        let bom_items = value
            .bom_items
            .into_iter()
            .map(|item| {
                Ok(NewBomItem {
                    component_id: ComponentId::new(item.component_id)?,
                    quantity: Quantity::new(item.quantity)?,
                })
            })
            .collect::<Result<Vec<_>, TypeConstraintError>>()?;

        Ok(Self {
            product_code: ProductCode::new(value.product_code)?,
            series_id: SeriesId::new(value.series_id)?,
            size_width: Dimension::new(value.size_width)?,
            size_height: Dimension::new(value.size_height)?,
            recommended_price: Money::new(value.recommended_price)?,
            notes: value.notes.as_deref().and_then(Notes::truncated),
            bom_items,
        })
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn valid_form() -> CreateProductForm {
        CreateProductForm {
            product_code: " 110 ".to_string(),
            series_id: 1,
            size_width: dec!(60),
            size_height: dec!(30),
            recommended_price: dec!(2300),
            bom_items: vec![BomItemForm {
                component_id: 1,
                quantity: dec!(0.18),
            }],
            notes: None,
        }
    }

    #[test]
    fn default_form_reports_six_violations() {
        let messages = CreateProductForm::default().violations();
        assert_eq!(
            messages,
            vec![
                "ProductCode must be provided.",
                "The field 'SeriesId' must be greater than zero.",
                "The field 'SizeWidth' must be greater than zero.",
                "The field 'SizeHeight' must be greater than zero.",
                "The field 'RecommendedPrice' must be greater than zero.",
                "Product must have at least one BOM item.",
            ]
        );
    }

    #[test]
    fn rejects_long_codes_and_bad_bom_lines() {
        let mut form = valid_form();
        form.product_code = "12345678901".to_string();
        form.bom_items.push(BomItemForm {
            component_id: 0,
            quantity: dec!(-1),
        });

        let messages = form.violations();
        assert_eq!(
            messages,
            vec![
                "Product code cannot exceed 10 characters.",
                "BomItems[1]: The field 'ComponentId' must be greater than zero.",
                "BomItems[1]: The field 'Quantity' must be greater than zero.",
            ]
        );
    }

    #[test]
    fn values_that_round_to_zero_are_rejected() {
        let mut form = valid_form();
        form.size_width = dec!(0.001);
        form.recommended_price = dec!(0.004);
        form.bom_items[0].quantity = dec!(0.0004);

        let err = CreateProductFormPayload::try_from(form).unwrap_err();
        assert_eq!(
            err,
            CreateProductFormError::Validation(vec![
                "The field 'SizeWidth' must be greater than zero.".to_string(),
                "The field 'RecommendedPrice' must be greater than zero.".to_string(),
                "BomItems[0]: The field 'Quantity' must be greater than zero.".to_string(),
            ])
        );
    }

    #[test]
    fn code_length_is_measured_after_trimming() {
        let mut form = valid_form();
        form.product_code = "  1234567890 ".to_string();
        let payload = CreateProductFormPayload::try_from(form).unwrap();
        assert_eq!(payload.product_code.as_str(), "1234567890");
    }

    #[test]
    fn converts_valid_form_into_payload() {
        let payload = CreateProductFormPayload::try_from(valid_form()).unwrap();
        assert_eq!(payload.product_code.as_str(), "110");
        assert_eq!(payload.recommended_price.to_string(), "2300.00");
        assert_eq!(payload.bom_items.len(), 1);
        assert_eq!(payload.bom_items[0].quantity.to_string(), "0.180");
    }

    #[test]
    fn too_long_notes_are_rejected() {
        let mut form = valid_form();
        form.notes = Some("n".repeat(501));
        let err = CreateProductFormPayload::try_from(form).unwrap_err();
        assert_eq!(
            err,
            CreateProductFormError::Validation(vec![
                "Notes cannot exceed 500 characters.".to_string()
            ])
        );
    }
}
