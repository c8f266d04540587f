use chrono::Utc;
use rust_decimal::Decimal;

use crate::domain::production_history::NewProductionHistory;
use crate::domain::report::ProductDetailedReport;
use crate::domain::types::{ProductCode, ProductionHistoryId};
use crate::dto::products::ProductionHistoryDto;
use crate::forms::production_history::{
    AddProductionHistoryForm, AddProductionHistoryFormPayload, ProductReportForm,
    ProductReportFormPayload,
};
use crate::repository::{HistoryReader, HistoryWriter, ProductReader, ReportReader};

use super::{ServiceError, ServiceResult};

/// Records a manufacturing run with a frozen cost snapshot of the product.
pub fn add_production_history_entry<R>(
    form: AddProductionHistoryForm,
    repo: &R,
) -> ServiceResult<ProductionHistoryId>
where
    R: ProductReader + HistoryWriter,
{
    let payload = AddProductionHistoryFormPayload::try_from(form)?;
    let code = payload.product_code;

    let product = match repo.get_product_by_code_with_bom(&code) {
        Ok(Some(product)) => product,
        Ok(None) => {
            log::warn!("Production entry for unknown product {code}");
            return Err(ServiceError::NotFound(format!(
                "Product with code {code} not found."
            )));
        }
        Err(e) => {
            log::error!("Failed to load product {code}: {e}");
            return Err(ServiceError::Internal(e.to_string()));
        }
    };

    let created_at = payload
        .production_date
        .unwrap_or_else(|| Utc::now().naive_utc());
    let record = NewProductionHistory::snapshot(&product, created_at, payload.notes.as_deref())
        .map_err(|e| {
            log::error!("Failed to price product {code}: {e}");
            ServiceError::Internal(e.to_string())
        })?;
    log::debug!(
        "Snapshot for {code}: price {}, work cost {}, recommended {}",
        record.price,
        record.work_cost,
        record.recommended_price
    );

    match repo.add_history(&record) {
        Ok(id) => {
            log::info!("Recorded production of {code} at {created_at}");
            Ok(id)
        }
        Err(e) => {
            log::error!("Failed to record production of {code}: {e}");
            Err(ServiceError::Internal(e.to_string()))
        }
    }
}

/// Every history record of a product, oldest first.
pub fn show_production_history<R>(
    product_code: &str,
    repo: &R,
) -> ServiceResult<Vec<ProductionHistoryDto>>
where
    R: HistoryReader,
{
    let code = ProductCode::new(product_code)?;

    match repo.list_history_for_product(&code) {
        Ok(items) => Ok(items.into_iter().map(ProductionHistoryDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list history of {code}: {e}");
            Err(ServiceError::Internal(e.to_string()))
        }
    }
}

/// Aggregates one product's history over an inclusive period.
///
/// `Ok(None)` means the request was valid but no record matched.
pub fn get_product_detailed_report<R>(
    form: ProductReportForm,
    repo: &R,
) -> ServiceResult<Option<ProductDetailedReport>>
where
    R: ReportReader,
{
    let payload = ProductReportFormPayload::try_from(form)?;

    match repo.product_detailed_report(&payload.product_code, payload.period) {
        Ok(report) => Ok(report),
        Err(e) => {
            log::error!(
                "Failed to build report for {}: {e}",
                payload.product_code
            );
            Err(ServiceError::Internal(e.to_string()))
        }
    }
}

/// Sum of frozen recommended prices over the whole history.
pub fn get_total_production_value<R>(repo: &R) -> ServiceResult<Decimal>
where
    R: ReportReader,
{
    match repo.total_production_value() {
        Ok(total) => Ok(total.get()),
        Err(e) => {
            log::error!("Failed to sum production value: {e}");
            Err(e.into())
        }
    }
}
