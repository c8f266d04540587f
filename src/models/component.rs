use diesel::prelude::*;

use crate::domain::category::CategoryKind;
use crate::domain::component::{Component as DomainComponent, NewComponent as DomainNewComponent};
use crate::domain::types::{ComponentName, TypeConstraintError};

/// Diesel model representing the `components` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::components)]
pub struct Component {
    pub id: i32,
    pub name: String,
    pub unit_id: i32,
    pub price_per_unit: String,
    pub category_id: i32,
}

/// Insertable form of [`Component`]. The category id is resolved by the
/// repository from the category name.
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::components)]
pub struct NewComponent<'a> {
    pub name: &'a str,
    pub unit_id: i32,
    pub price_per_unit: String,
    pub category_id: i32,
}

impl<'a> NewComponent<'a> {
    pub fn new(component: &'a DomainNewComponent, category_id: i32) -> Self {
        Self {
            name: component.name.as_str(),
            unit_id: component.unit_id.get(),
            price_per_unit: component.price_per_unit.to_string(),
            category_id,
        }
    }
}

/// A component row joined with its category name.
impl TryFrom<(Component, String)> for DomainComponent {
    type Error = TypeConstraintError;

    fn try_from((component, category): (Component, String)) -> Result<Self, Self::Error> {
        Ok(Self {
            id: component.id.try_into()?,
            name: ComponentName::new(component.name)?,
            unit_id: component.unit_id.try_into()?,
            price_per_unit: component.price_per_unit.parse()?,
            category: CategoryKind::try_from(category)?,
        })
    }
}
