use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::component::Component;
use crate::domain::series::Series;
use crate::domain::unit::Unit;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentDto {
    pub id: i32,
    pub name: String,
    pub unit_id: i32,
    pub price_per_unit: Decimal,
    pub category: String,
}

impl From<Component> for ComponentDto {
    fn from(value: Component) -> Self {
        Self {
            id: value.id.get(),
            name: value.name.into_inner(),
            unit_id: value.unit_id.get(),
            price_per_unit: value.price_per_unit.get(),
            category: value.category.as_str().to_string(),
        }
    }
}

/// Reference entry with just an id and a name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedDto {
    pub id: i32,
    pub name: String,
}

impl From<Unit> for NamedDto {
    fn from(value: Unit) -> Self {
        Self {
            id: value.id.get(),
            name: value.name.into_inner(),
        }
    }
}

impl From<Series> for NamedDto {
    fn from(value: Series) -> Self {
        Self {
            id: value.id.get(),
            name: value.name.into_inner(),
        }
    }
}
