use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, TypeConstraintError};

/// Fixed set of component categories seeded into the catalog.
///
/// `AssemblyWork` marks labor components; their cost is reported separately
/// from materials as the work cost of a production run.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    Artifact,
    BaseMaterial,
    AssemblyWork,
}

impl CategoryKind {
    /// Every seeded category.
    pub const ALL: [CategoryKind; 3] = [Self::Artifact, Self::BaseMaterial, Self::AssemblyWork];

    /// Name stored in the `categories` table.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Artifact => "Artifact",
            Self::BaseMaterial => "BaseMaterial",
            Self::AssemblyWork => "AssemblyWork",
        }
    }

    /// Whether components of this category count towards the work cost.
    pub const fn is_labor(self) -> bool {
        matches!(self, Self::AssemblyWork)
    }
}

impl Display for CategoryKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for CategoryKind {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| TypeConstraintError::InvalidValue(format!("category: {value}")))
    }
}

impl TryFrom<String> for CategoryKind {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

/// Category row as stored in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub kind: CategoryKind,
}
