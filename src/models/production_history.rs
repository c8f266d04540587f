use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::production_history::{
    NewProductionHistory as DomainNewProductionHistory,
    ProductionHistory as DomainProductionHistory,
};
use crate::domain::report::HistoryValueRow;
use crate::domain::types::{Notes, TypeConstraintError};

/// Diesel model representing the `production_histories` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::production_histories)]
pub struct ProductionHistory {
    pub id: i32,
    pub product_id: i32,
    pub created_at: NaiveDateTime,
    pub price: String,
    pub recommended_price: String,
    pub work_cost: String,
    pub notes: Option<String>,
}

/// Insertable form of [`ProductionHistory`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::production_histories)]
pub struct NewProductionHistory<'a> {
    pub product_id: i32,
    pub created_at: NaiveDateTime,
    pub price: String,
    pub recommended_price: String,
    pub work_cost: String,
    pub notes: Option<&'a str>,
}

/// Projection of the columns used by reports.
#[derive(Debug, Clone, Queryable)]
pub struct HistoryValues {
    pub created_at: NaiveDateTime,
    pub recommended_price: String,
    pub work_cost: String,
}

impl TryFrom<ProductionHistory> for DomainProductionHistory {
    type Error = TypeConstraintError;

    fn try_from(history: ProductionHistory) -> Result<Self, Self::Error> {
        Ok(Self {
            id: history.id.try_into()?,
            product_id: history.product_id.try_into()?,
            created_at: history.created_at,
            price: history.price.parse()?,
            recommended_price: history.recommended_price.parse()?,
            work_cost: history.work_cost.parse()?,
            notes: history.notes.as_deref().and_then(Notes::truncated),
        })
    }
}

impl TryFrom<HistoryValues> for HistoryValueRow {
    type Error = TypeConstraintError;

    fn try_from(values: HistoryValues) -> Result<Self, Self::Error> {
        Ok(Self {
            created_at: values.created_at,
            recommended_price: values.recommended_price.parse()?,
            work_cost: values.work_cost.parse()?,
        })
    }
}

impl<'a> From<&'a DomainNewProductionHistory> for NewProductionHistory<'a> {
    fn from(history: &'a DomainNewProductionHistory) -> Self {
        Self {
            product_id: history.product_id.get(),
            created_at: history.created_at,
            price: history.price.to_string(),
            recommended_price: history.recommended_price.to_string(),
            work_cost: history.work_cost.to_string(),
            notes: history.notes.as_ref().map(Notes::as_str),
        }
    }
}
