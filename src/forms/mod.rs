//! Request forms and their conversion into domain payloads.

use rust_decimal::Decimal;
use validator::{ValidationError, ValidationErrors};

use crate::domain::types::{Dimension, Money, ProductCode, Quantity, TypeConstraintError};

pub mod catalog;
pub mod production_history;
pub mod products;

/// Key used by `validator` for struct-level (schema) errors.
const SCHEMA_ERRORS: &str = "__all__";

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("required"))
    } else {
        Ok(())
    }
}

/// Required and at most [`ProductCode::MAX_LEN`] characters once trimmed.
fn valid_product_code(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::new("required").with_message("ProductCode must be provided.".into()))
    } else if trimmed.chars().count() > ProductCode::MAX_LEN {
        Err(ValidationError::new("length")
            .with_message("Product code cannot exceed 10 characters.".into()))
    } else {
        Ok(())
    }
}

/// The value must stay above zero once rounded to its stored precision.
fn positive_when_stored(
    rounded: Result<Decimal, TypeConstraintError>,
) -> Result<(), ValidationError> {
    match rounded {
        Ok(value) if !value.is_zero() => Ok(()),
        _ => Err(ValidationError::new("positive")),
    }
}

fn positive_money(value: &Decimal) -> Result<(), ValidationError> {
    positive_when_stored(Money::new(*value).map(Money::get))
}

fn positive_dimension(value: &Decimal) -> Result<(), ValidationError> {
    positive_when_stored(Dimension::new(*value).map(Dimension::get))
}

fn positive_quantity(value: &Decimal) -> Result<(), ValidationError> {
    positive_when_stored(Quantity::new(*value).map(Quantity::get))
}

/// Flattens `errors` into human-readable messages, visiting fields in
/// `fields` order and struct-level errors last.
fn collect_messages(errors: &ValidationErrors, fields: &[&str]) -> Vec<String> {
    let field_errors = errors.field_errors();
    fields
        .iter()
        .chain(std::iter::once(&SCHEMA_ERRORS))
        .filter_map(|field| field_errors.get(*field).map(|errs| (*field, errs)))
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| match &err.message {
                Some(message) => message.to_string(),
                None => format!("{field} is invalid ({})", err.code),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use validator::Validate;

    use super::*;

    #[derive(Validate)]
    struct Sample {
        #[validate(custom(function = "not_blank", message = "Name must be provided."))]
        name: String,
        #[validate(custom(function = "positive_money"))]
        amount: Decimal,
    }

    #[test]
    fn collects_messages_in_field_order() {
        let sample = Sample {
            name: "  ".to_string(),
            amount: dec!(0),
        };
        let errors = sample.validate().unwrap_err();
        let messages = collect_messages(&errors, &["name", "amount"]);
        assert_eq!(
            messages,
            vec![
                "Name must be provided.".to_string(),
                "amount is invalid (positive)".to_string()
            ]
        );
    }

    #[test]
    fn positivity_is_checked_at_stored_precision() {
        assert!(positive_money(&dec!(0.01)).is_ok());
        assert!(positive_money(&dec!(0.004)).is_err());
        assert!(positive_money(&dec!(0)).is_err());
        assert!(positive_money(&dec!(-1)).is_err());

        assert!(positive_dimension(&dec!(0.005)).is_ok());
        assert!(positive_dimension(&dec!(0.001)).is_err());

        assert!(positive_quantity(&dec!(0.001)).is_ok());
        assert!(positive_quantity(&dec!(0.0004)).is_err());
    }

    #[test]
    fn product_code_length_ignores_surrounding_whitespace() {
        assert!(valid_product_code("  1234567890 ").is_ok());
        assert_eq!(valid_product_code("12345678901").unwrap_err().code, "length");
        assert_eq!(valid_product_code("   ").unwrap_err().code, "required");
    }
}
