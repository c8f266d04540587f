use crate::db::{DbConnection, DbPool};
use crate::domain::category::Category;
use crate::domain::component::{Component, NewComponent};
use crate::domain::product::{NewProduct, Product, ProductWithBom};
use crate::domain::production_history::{NewProductionHistory, ProductionHistory};
use crate::domain::report::{ProductDetailedReport, ReportPeriod};
use crate::domain::series::{NewSeries, Series};
use crate::domain::types::{
    ComponentId, Money, ProductCode, ProductId, ProductionHistoryId, SeriesId, UnitId,
};
use crate::domain::unit::{NewUnit, Unit};

pub mod catalog;
pub mod errors;
pub mod product;
pub mod production_history;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between services.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        self.pool.get().map_err(|e| {
            log::error!("Failed to get a database connection: {e}");
            e.into()
        })
    }
}

/// Read-only operations for products.
pub trait ProductReader {
    /// Whether a product with `code` is already stored.
    fn product_exists(&self, code: &ProductCode) -> RepositoryResult<bool>;
    /// Load a product with every BOM line and each line's component.
    fn get_product_by_code_with_bom(
        &self,
        code: &ProductCode,
    ) -> RepositoryResult<Option<ProductWithBom>>;
    /// All products ordered by code.
    fn list_products(&self) -> RepositoryResult<Vec<Product>>;
}

/// Write operations for products and their BOM.
pub trait ProductWriter {
    /// Insert a product and all of its BOM lines in one transaction.
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<ProductId>;
    /// Change the current recommended price. History is untouched.
    fn update_recommended_price(&self, id: ProductId, price: Money) -> RepositoryResult<usize>;
    /// Remove every BOM line of a product.
    fn clear_bom(&self, id: ProductId) -> RepositoryResult<usize>;
    /// Delete a product and its BOM. Fails when history references it.
    fn delete_product(&self, id: ProductId) -> RepositoryResult<usize>;
}

/// Read-only access to reference data.
pub trait CatalogReader {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    fn list_units(&self) -> RepositoryResult<Vec<Unit>>;
    fn list_series(&self) -> RepositoryResult<Vec<Series>>;
    /// All components ordered by name.
    fn list_components(&self) -> RepositoryResult<Vec<Component>>;
    /// Components whose ids are in `ids`. Unknown ids are skipped.
    fn get_components_by_ids(&self, ids: &[ComponentId]) -> RepositoryResult<Vec<Component>>;
}

/// Write operations for reference data.
pub trait CatalogWriter {
    fn create_unit(&self, unit: &NewUnit) -> RepositoryResult<UnitId>;
    fn create_series(&self, series: &NewSeries) -> RepositoryResult<SeriesId>;
    fn create_component(&self, component: &NewComponent) -> RepositoryResult<ComponentId>;
    /// Delete a component. Fails while any BOM line references it.
    fn delete_component(&self, id: ComponentId) -> RepositoryResult<usize>;
}

/// Read access to production history records.
pub trait HistoryReader {
    /// History of one product ordered by timestamp.
    fn list_history_for_product(
        &self,
        code: &ProductCode,
    ) -> RepositoryResult<Vec<ProductionHistory>>;
}

/// Append-only writes of production history records.
pub trait HistoryWriter {
    fn add_history(&self, record: &NewProductionHistory) -> RepositoryResult<ProductionHistoryId>;
}

/// Aggregations over frozen history values.
pub trait ReportReader {
    /// Sum of frozen recommended prices across all records.
    fn total_production_value(&self) -> RepositoryResult<Money>;
    /// Report for one product, `None` when no record falls in `period`.
    fn product_detailed_report(
        &self,
        code: &ProductCode,
        period: ReportPeriod,
    ) -> RepositoryResult<Option<ProductDetailedReport>>;
}
