use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::product::{BomItem, ProductWithBom};
use crate::domain::types::{
    Money, Notes, ProductId, ProductionHistoryId, TypeConstraintError, line_total,
};

/// An immutable record of one manufacturing run with its price snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductionHistory {
    pub id: ProductionHistoryId,
    pub product_id: ProductId,
    pub created_at: NaiveDateTime,
    /// Material plus labor cost of the BOM, rounded up to whole units.
    pub price: Money,
    /// The product's recommended price at the moment the run was recorded.
    pub recommended_price: Money,
    /// Labor share of the BOM cost, rounded up to whole units.
    pub work_cost: Money,
    pub notes: Option<Notes>,
}

/// Data required to append a new [`ProductionHistory`] record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProductionHistory {
    pub product_id: ProductId,
    pub created_at: NaiveDateTime,
    pub price: Money,
    pub recommended_price: Money,
    pub work_cost: Money,
    pub notes: Option<Notes>,
}

/// Total and labor cost of a bill of materials.
///
/// Both sums are exact; the ceiling is applied once to each total, never per
/// line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostSnapshot {
    pub price: Money,
    pub work_cost: Money,
}

impl CostSnapshot {
    pub fn from_bom(items: &[BomItem]) -> Result<Self, TypeConstraintError> {
        let mut total = Decimal::ZERO;
        let mut labor = Decimal::ZERO;

        for item in items {
            let line = line_total(item.quantity, item.component.price_per_unit)?;
            total = total
                .checked_add(line)
                .ok_or(TypeConstraintError::Overflow("price"))?;
            if item.component.category.is_labor() {
                labor = labor
                    .checked_add(line)
                    .ok_or(TypeConstraintError::Overflow("work cost"))?;
            }
        }

        Ok(Self {
            price: Money::ceiling_of(total)?,
            work_cost: Money::ceiling_of(labor)?,
        })
    }
}

impl NewProductionHistory {
    /// Freezes the current state of `product` into a history record.
    ///
    /// Notes are the request notes followed by the product's own notes,
    /// trimmed and cut to the notes limit.
    pub fn snapshot(
        product: &ProductWithBom,
        created_at: NaiveDateTime,
        notes: Option<&str>,
    ) -> Result<Self, TypeConstraintError> {
        let cost = CostSnapshot::from_bom(&product.bom_items)?;
        let product_notes = product
            .product
            .notes
            .as_ref()
            .map(Notes::as_str)
            .unwrap_or_default();
        let combined = format!("{} {}", notes.unwrap_or_default(), product_notes);

        Ok(Self {
            product_id: product.product.id,
            created_at,
            price: cost.price,
            recommended_price: product.product.recommended_price,
            work_cost: cost.work_cost,
            notes: Notes::truncated(&combined),
        })
    }
}
