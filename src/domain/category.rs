use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, CategoryName, ImageData};

/// Gallery category together with its encoded image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub image: ImageData,
}

/// Listing projection of a [`Category`]; carries no image payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorySummary {
    pub id: CategoryId,
    pub name: CategoryName,
}

impl From<&Category> for CategorySummary {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
        }
    }
}
