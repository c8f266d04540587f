use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::component::Component;
use crate::domain::types::{
    BomItemId, ComponentId, Dimension, Money, Notes, ProductCode, ProductId, Quantity, SeriesId,
};

/// A catalog product. `recommended_price` is the current price and may change
/// over time; history records keep their own copy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub product_code: ProductCode,
    pub series_id: SeriesId,
    pub size_width: Dimension,
    pub size_height: Dimension,
    pub recommended_price: Money,
    pub created_at: NaiveDateTime,
    pub notes: Option<Notes>,
}

/// One line of a product's bill of materials with its component loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BomItem {
    pub id: BomItemId,
    pub product_id: ProductId,
    pub component: Component,
    pub quantity: Quantity,
}

/// A product together with its full bill of materials.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductWithBom {
    pub product: Product,
    pub bom_items: Vec<BomItem>,
}

/// Information required to create a new [`Product`] and its BOM.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProduct {
    pub product_code: ProductCode,
    pub series_id: SeriesId,
    pub size_width: Dimension,
    pub size_height: Dimension,
    pub recommended_price: Money,
    pub created_at: NaiveDateTime,
    pub notes: Option<Notes>,
    pub bom_items: Vec<NewBomItem>,
}

/// A BOM line submitted with a [`NewProduct`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NewBomItem {
    pub component_id: ComponentId,
    pub quantity: Quantity,
}
