use diesel::prelude::*;

use crate::domain::category::Category;
use crate::domain::component::{Component, NewComponent};
use crate::domain::series::{NewSeries, Series};
use crate::domain::types::{ComponentId, SeriesId, UnitId};
use crate::domain::unit::{NewUnit, Unit};
use crate::models::category::Category as DbCategory;
use crate::models::component::{Component as DbComponent, NewComponent as DbNewComponent};
use crate::models::series::{NewSeries as DbNewSeries, Series as DbSeries};
use crate::models::unit::{NewUnit as DbNewUnit, Unit as DbUnit};
use crate::repository::{
    CatalogReader, CatalogWriter, DieselRepository, RepositoryError, RepositoryResult,
};

impl CatalogReader for DieselRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let items = categories::table
            .order(categories::id.asc())
            .load::<DbCategory>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Category>, _>>()?;

        Ok(items)
    }

    fn list_units(&self) -> RepositoryResult<Vec<Unit>> {
        use crate::schema::units;

        let mut conn = self.conn()?;

        let items = units::table
            .order(units::name.asc())
            .load::<DbUnit>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Unit>, _>>()?;

        Ok(items)
    }

    fn list_series(&self) -> RepositoryResult<Vec<Series>> {
        use crate::schema::series;

        let mut conn = self.conn()?;

        let items = series::table
            .order(series::name.asc())
            .load::<DbSeries>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Series>, _>>()?;

        Ok(items)
    }

    fn list_components(&self) -> RepositoryResult<Vec<Component>> {
        use crate::schema::{categories, components};

        let mut conn = self.conn()?;

        let items = components::table
            .inner_join(categories::table)
            .select((components::all_columns, categories::name))
            .order(components::name.asc())
            .load::<(DbComponent, String)>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Component>, _>>()?;

        Ok(items)
    }

    fn get_components_by_ids(&self, ids: &[ComponentId]) -> RepositoryResult<Vec<Component>> {
        use crate::schema::{categories, components};

        if ids.is_empty() {
            return Ok(vec![]);
        }

        let mut conn = self.conn()?;
        let raw_ids: Vec<i32> = ids.iter().map(|id| id.get()).collect();

        let items = components::table
            .inner_join(categories::table)
            .filter(components::id.eq_any(raw_ids))
            .select((components::all_columns, categories::name))
            .order(components::id.asc())
            .load::<(DbComponent, String)>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Component>, _>>()?;

        Ok(items)
    }
}

impl CatalogWriter for DieselRepository {
    fn create_unit(&self, unit: &NewUnit) -> RepositoryResult<UnitId> {
        use crate::schema::units;

        let mut conn = self.conn()?;

        let id: i32 = diesel::insert_into(units::table)
            .values(DbNewUnit::from(unit))
            .returning(units::id)
            .get_result(&mut conn)?;

        Ok(UnitId::new(id)?)
    }

    fn create_series(&self, series: &NewSeries) -> RepositoryResult<SeriesId> {
        use crate::schema::series;

        let mut conn = self.conn()?;

        let id: i32 = diesel::insert_into(series::table)
            .values(DbNewSeries::from(series))
            .returning(series::id)
            .get_result(&mut conn)?;

        Ok(SeriesId::new(id)?)
    }

    fn create_component(&self, component: &NewComponent) -> RepositoryResult<ComponentId> {
        use crate::schema::{categories, components};

        let mut conn = self.conn()?;

        let id = conn.transaction::<_, RepositoryError, _>(|conn| {
            let category_id: i32 = categories::table
                .filter(categories::name.eq(component.category.as_str()))
                .select(categories::id)
                .first(conn)
                .optional()?
                .ok_or_else(|| {
                    log::warn!("Component {} has no seeded category", component.name);
                    RepositoryError::ConstraintViolation(format!(
                        "category {} is not seeded",
                        component.category
                    ))
                })?;

            let id: i32 = diesel::insert_into(components::table)
                .values(DbNewComponent::new(component, category_id))
                .returning(components::id)
                .get_result(conn)?;

            Ok(id)
        })?;

        Ok(ComponentId::new(id)?)
    }

    fn delete_component(&self, id: ComponentId) -> RepositoryResult<usize> {
        use crate::schema::{bom_items, components};

        let mut conn = self.conn()?;

        let affected = conn.transaction::<_, RepositoryError, _>(|conn| {
            let references = bom_items::table
                .filter(bom_items::component_id.eq(id.get()))
                .count()
                .get_result::<i64>(conn)?;
            if references > 0 {
                log::warn!("Component {id} is still used by {references} BOM items");
                return Err(RepositoryError::ConstraintViolation(format!(
                    "component {id} is used by {references} BOM items"
                )));
            }

            Ok(diesel::delete(components::table.filter(components::id.eq(id.get())))
                .execute(conn)?)
        })?;

        Ok(affected)
    }
}
