use serde::{Deserialize, Serialize};

use crate::domain::types::{SeriesId, SeriesName};

/// Logical grouping of products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Series {
    pub id: SeriesId,
    pub name: SeriesName,
}

/// Data required to insert a new [`Series`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewSeries {
    pub name: SeriesName,
}
