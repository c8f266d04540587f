use diesel::prelude::*;

use crate::domain::category::{Category as DomainCategory, CategoryKind};
use crate::domain::types::TypeConstraintError;

/// Diesel model representing the `categories` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::categories)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

impl TryFrom<Category> for DomainCategory {
    type Error = TypeConstraintError;

    fn try_from(category: Category) -> Result<Self, Self::Error> {
        Ok(Self {
            id: category.id.try_into()?,
            kind: CategoryKind::try_from(category.name)?,
        })
    }
}
