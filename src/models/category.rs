use diesel::prelude::*;

use crate::domain::category::{Category as DomainCategory, CategorySummary as DomainSummary};
use crate::domain::types::{CategoryId, CategoryName, ImageData, TypeConstraintError};

/// Diesel model representing a full row of the `categories` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Insertable)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub image: Vec<u8>,
}

/// `(id, name)` projection of the `categories` table used for listings.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CategorySummary {
    pub id: i64,
    pub name: String,
}

impl TryFrom<Category> for DomainCategory {
    type Error = TypeConstraintError;

    fn try_from(category: Category) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CategoryId::new(category.id)?,
            name: CategoryName::new(category.name)?,
            image: ImageData::new(category.image)?,
        })
    }
}

impl TryFrom<CategorySummary> for DomainSummary {
    type Error = TypeConstraintError;

    fn try_from(summary: CategorySummary) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CategoryId::new(summary.id)?,
            name: CategoryName::new(summary.name)?,
        })
    }
}

impl From<DomainCategory> for Category {
    fn from(category: DomainCategory) -> Self {
        Self {
            id: category.id.get(),
            name: category.name.into_inner(),
            image: category.image.into_inner(),
        }
    }
}
