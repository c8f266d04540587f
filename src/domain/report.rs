//! Aggregation of frozen history values into product reports.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{Money, ProductCode, TypeConstraintError};

/// Inclusive time window used to select history records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl ReportPeriod {
    pub fn new(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> Self {
        Self { start, end }
    }

    /// Whether `at` falls inside the window. Missing bounds are open.
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        self.start.is_none_or(|start| at >= start) && self.end.is_none_or(|end| at <= end)
    }
}

/// The projected columns a report needs from one history record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryValueRow {
    pub created_at: NaiveDateTime,
    pub recommended_price: Money,
    pub work_cost: Money,
}

/// Aggregated production figures for one product over a period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductDetailedReport {
    pub product_code: ProductCode,
    pub count: usize,
    /// Sum of the recommended prices frozen in each record.
    pub total_value: Money,
    /// Sum of the work costs frozen in each record.
    pub work_cost: Money,
    pub period_from: NaiveDateTime,
    pub period_to: NaiveDateTime,
}

impl ProductDetailedReport {
    /// Builds a report from rows already filtered to `period`.
    ///
    /// Returns `Ok(None)` when there are no rows. Period bounds that were not
    /// supplied are taken from the earliest and latest rows.
    pub fn aggregate(
        product_code: ProductCode,
        period: ReportPeriod,
        rows: &[HistoryValueRow],
    ) -> Result<Option<Self>, TypeConstraintError> {
        let (Some(earliest), Some(latest)) = (
            rows.iter().map(|row| row.created_at).min(),
            rows.iter().map(|row| row.created_at).max(),
        ) else {
            return Ok(None);
        };

        let mut total_value = Money::zero();
        let mut work_cost = Money::zero();
        for row in rows {
            total_value = total_value.checked_add(row.recommended_price)?;
            work_cost = work_cost.checked_add(row.work_cost)?;
        }

        Ok(Some(Self {
            product_code,
            count: rows.len(),
            total_value,
            work_cost,
            period_from: period.start.unwrap_or(earliest),
            period_to: period.end.unwrap_or(latest),
        }))
    }
}

/// Sums frozen recommended prices; zero for an empty history.
pub fn total_production_value<I>(prices: I) -> Result<Money, TypeConstraintError>
where
    I: IntoIterator<Item = Money>,
{
    prices
        .into_iter()
        .try_fold(Money::zero(), |total, price| total.checked_add(price))
}
