use diesel::prelude::*;

use crate::domain::series::{NewSeries as DomainNewSeries, Series as DomainSeries};
use crate::domain::types::{SeriesName, TypeConstraintError};

/// Diesel model representing the `series` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::series)]
pub struct Series {
    pub id: i32,
    pub name: String,
}

/// Insertable form of [`Series`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::series)]
pub struct NewSeries<'a> {
    pub name: &'a str,
}

impl TryFrom<Series> for DomainSeries {
    type Error = TypeConstraintError;

    fn try_from(series: Series) -> Result<Self, Self::Error> {
        Ok(Self {
            id: series.id.try_into()?,
            name: SeriesName::new(series.name)?,
        })
    }
}

impl<'a> From<&'a DomainNewSeries> for NewSeries<'a> {
    fn from(series: &'a DomainNewSeries) -> Self {
        Self {
            name: series.name.as_str(),
        }
    }
}
