use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{
    BomItem as DomainBomItem, NewBomItem as DomainNewBomItem, NewProduct as DomainNewProduct,
    Product as DomainProduct,
};
use crate::domain::types::{Notes, ProductCode, TypeConstraintError};
use crate::models::component::Component;

/// Diesel model representing the `products` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub product_code: String,
    pub series_id: i32,
    pub size_width: String,
    pub size_height: String,
    pub recommended_price: String,
    pub created_at: NaiveDateTime,
    pub notes: Option<String>,
}

/// Insertable form of [`Product`]. BOM lines are inserted separately.
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub product_code: &'a str,
    pub series_id: i32,
    pub size_width: String,
    pub size_height: String,
    pub recommended_price: String,
    pub created_at: NaiveDateTime,
    pub notes: Option<&'a str>,
}

/// Diesel model representing the `bom_items` table.
#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(belongs_to(Product))]
#[diesel(table_name = crate::schema::bom_items)]
pub struct BomItem {
    pub id: i32,
    pub product_id: i32,
    pub component_id: i32,
    pub quantity: String,
}

/// Insertable form of [`BomItem`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::bom_items)]
pub struct NewBomItem {
    pub product_id: i32,
    pub component_id: i32,
    pub quantity: String,
}

impl TryFrom<Product> for DomainProduct {
    type Error = TypeConstraintError;

    fn try_from(product: Product) -> Result<Self, Self::Error> {
        Ok(Self {
            id: product.id.try_into()?,
            product_code: ProductCode::new(product.product_code)?,
            series_id: product.series_id.try_into()?,
            size_width: product.size_width.parse()?,
            size_height: product.size_height.parse()?,
            recommended_price: product.recommended_price.parse()?,
            created_at: product.created_at,
            notes: product.notes.as_deref().and_then(Notes::truncated),
        })
    }
}

/// A BOM row joined with its component and the component's category name.
impl TryFrom<(BomItem, Component, String)> for DomainBomItem {
    type Error = TypeConstraintError;

    fn try_from(
        (item, component, category): (BomItem, Component, String),
    ) -> Result<Self, Self::Error> {
        Ok(Self {
            id: item.id.try_into()?,
            product_id: item.product_id.try_into()?,
            component: (component, category).try_into()?,
            quantity: item.quantity.parse()?,
        })
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(product: &'a DomainNewProduct) -> Self {
        Self {
            product_code: product.product_code.as_str(),
            series_id: product.series_id.get(),
            size_width: product.size_width.to_string(),
            size_height: product.size_height.to_string(),
            recommended_price: product.recommended_price.to_string(),
            created_at: product.created_at,
            notes: product.notes.as_ref().map(Notes::as_str),
        }
    }
}

impl NewBomItem {
    pub fn new(product_id: i32, item: &DomainNewBomItem) -> Self {
        Self {
            product_id,
            component_id: item.component_id.get(),
            quantity: item.quantity.to_string(),
        }
    }
}
