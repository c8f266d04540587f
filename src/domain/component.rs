use serde::{Deserialize, Serialize};

use crate::domain::category::CategoryKind;
use crate::domain::types::{ComponentId, ComponentName, Money, UnitId};

/// A priced part or labor item that products are assembled from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Component {
    pub id: ComponentId,
    pub name: ComponentName,
    pub unit_id: UnitId,
    pub price_per_unit: Money,
    /// Category resolved from the `categories` table when the row is loaded.
    pub category: CategoryKind,
}

/// Data required to insert a new [`Component`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewComponent {
    pub name: ComponentName,
    pub unit_id: UnitId,
    pub price_per_unit: Money,
    pub category: CategoryKind,
}
