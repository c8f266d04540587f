use serde::{Deserialize, Serialize};

use crate::domain::types::{UnitId, UnitName};

/// Unit of measure used for component quantities.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Unit {
    pub id: UnitId,
    pub name: UnitName,
}

/// Data required to insert a new [`Unit`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewUnit {
    pub name: UnitName,
}
