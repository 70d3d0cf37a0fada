use serde::Serialize;

use crate::domain::category::CategorySummary;

/// Listing entry handed to the fragment renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
}

impl From<CategorySummary> for CategoryDto {
    fn from(value: CategorySummary) -> Self {
        Self {
            id: value.id.get(),
            name: value.name.into_inner(),
        }
    }
}

/// Image bytes together with the media type to serve them as.
#[derive(Clone, PartialEq)]
pub struct CategoryImageDto {
    pub data: Vec<u8>,
    pub media_type: &'static str,
}

impl std::fmt::Debug for CategoryImageDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CategoryImageDto")
            .field("len", &self.data.len())
            .field("media_type", &self.media_type)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{CategoryId, CategoryName};

    #[test]
    fn category_dto_serializes_id_and_name_only() {
        let dto = CategoryDto::from(CategorySummary {
            id: CategoryId::new(42).unwrap(),
            name: CategoryName::new("Beach").unwrap(),
        });

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 42, "name": "Beach" }));
    }
}
