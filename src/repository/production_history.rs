use diesel::prelude::*;

use crate::domain::production_history::{NewProductionHistory, ProductionHistory};
use crate::domain::report::{
    HistoryValueRow, ProductDetailedReport, ReportPeriod, total_production_value,
};
use crate::domain::types::{Money, ProductCode, ProductionHistoryId};
use crate::models::production_history::{
    HistoryValues, NewProductionHistory as DbNewProductionHistory,
    ProductionHistory as DbProductionHistory,
};
use crate::repository::{
    DieselRepository, HistoryReader, HistoryWriter, ReportReader, RepositoryResult,
};

impl HistoryReader for DieselRepository {
    fn list_history_for_product(
        &self,
        code: &ProductCode,
    ) -> RepositoryResult<Vec<ProductionHistory>> {
        use crate::schema::{production_histories, products};

        let mut conn = self.conn()?;

        let items = production_histories::table
            .inner_join(products::table)
            .filter(products::product_code.eq(code.as_str()))
            .select(production_histories::all_columns)
            .order((
                production_histories::created_at.asc(),
                production_histories::id.asc(),
            ))
            .load::<DbProductionHistory>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<ProductionHistory>, _>>()?;

        Ok(items)
    }
}

impl HistoryWriter for DieselRepository {
    fn add_history(&self, record: &NewProductionHistory) -> RepositoryResult<ProductionHistoryId> {
        use crate::schema::production_histories;

        let mut conn = self.conn()?;

        let id: i32 = diesel::insert_into(production_histories::table)
            .values(DbNewProductionHistory::from(record))
            .returning(production_histories::id)
            .get_result(&mut conn)?;

        Ok(ProductionHistoryId::new(id)?)
    }
}

impl ReportReader for DieselRepository {
    fn total_production_value(&self) -> RepositoryResult<Money> {
        use crate::schema::production_histories;

        let mut conn = self.conn()?;

        let prices = production_histories::table
            .select(production_histories::recommended_price)
            .load::<String>(&mut conn)?
            .into_iter()
            .map(|price| price.parse::<Money>())
            .collect::<Result<Vec<Money>, _>>()?;

        Ok(total_production_value(prices)?)
    }

    fn product_detailed_report(
        &self,
        code: &ProductCode,
        period: ReportPeriod,
    ) -> RepositoryResult<Option<ProductDetailedReport>> {
        use crate::schema::{production_histories, products};

        let mut conn = self.conn()?;

        let mut query = production_histories::table
            .inner_join(products::table)
            .filter(products::product_code.eq(code.as_str()))
            .select((
                production_histories::created_at,
                production_histories::recommended_price,
                production_histories::work_cost,
            ))
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(start) = period.start {
            query = query.filter(production_histories::created_at.ge(start));
        }
        if let Some(end) = period.end {
            query = query.filter(production_histories::created_at.le(end));
        }

        let rows = query
            .load::<HistoryValues>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<HistoryValueRow>, _>>()?;

        Ok(ProductDetailedReport::aggregate(code.clone(), period, &rows)?)
    }
}
