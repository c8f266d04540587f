use diesel::prelude::*;

use crate::domain::types::{TypeConstraintError, UnitName};
use crate::domain::unit::{NewUnit as DomainNewUnit, Unit as DomainUnit};

/// Diesel model representing the `units` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::units)]
pub struct Unit {
    pub id: i32,
    pub name: String,
}

/// Insertable form of [`Unit`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::units)]
pub struct NewUnit<'a> {
    pub name: &'a str,
}

impl TryFrom<Unit> for DomainUnit {
    type Error = TypeConstraintError;

    fn try_from(unit: Unit) -> Result<Self, Self::Error> {
        Ok(Self {
            id: unit.id.try_into()?,
            name: UnitName::new(unit.name)?,
        })
    }
}

impl<'a> From<&'a DomainNewUnit> for NewUnit<'a> {
    fn from(unit: &'a DomainNewUnit) -> Self {
        Self {
            name: unit.name.as_str(),
        }
    }
}
