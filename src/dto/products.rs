use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::product::Product;
use crate::domain::production_history::ProductionHistory;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDto {
    pub id: i32,
    pub product_code: String,
    pub series_id: i32,
    pub size_width: Decimal,
    pub size_height: Decimal,
    pub recommended_price: Decimal,
    pub created_at: NaiveDateTime,
    pub notes: Option<String>,
}

impl From<Product> for ProductDto {
    fn from(value: Product) -> Self {
        Self {
            id: value.id.get(),
            product_code: value.product_code.into_inner(),
            series_id: value.series_id.get(),
            size_width: value.size_width.get(),
            size_height: value.size_height.get(),
            recommended_price: value.recommended_price.get(),
            created_at: value.created_at,
            notes: value.notes.map(String::from),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductionHistoryDto {
    pub id: i32,
    pub created_at: NaiveDateTime,
    pub price: Decimal,
    pub recommended_price: Decimal,
    pub work_cost: Decimal,
    pub notes: Option<String>,
}

impl From<ProductionHistory> for ProductionHistoryDto {
    fn from(value: ProductionHistory) -> Self {
        Self {
            id: value.id.get(),
            created_at: value.created_at,
            price: value.price.get(),
            recommended_price: value.recommended_price.get(),
            work_cost: value.work_cost.get(),
            notes: value.notes.map(String::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::domain::types::{Money, Notes, ProductId, ProductionHistoryId};
    use crate::repository::test::fixture_time;

    #[test]
    fn history_serializes_money_as_fixed_point_text() {
        let dto = ProductionHistoryDto::from(ProductionHistory {
            id: ProductionHistoryId::new(1).unwrap(),
            product_id: ProductId::new(1).unwrap(),
            created_at: fixture_time(),
            price: Money::new(dec!(481)).unwrap(),
            recommended_price: Money::new(dec!(2300)).unwrap(),
            work_cost: Money::new(dec!(351)).unwrap(),
            notes: Notes::truncated("batch 7"),
        });

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["price"], "481.00");
        assert_eq!(json["recommended_price"], "2300.00");
        assert_eq!(json["created_at"], "2024-01-01T00:00:00");
        assert_eq!(json["notes"], "batch 7");
    }
}
