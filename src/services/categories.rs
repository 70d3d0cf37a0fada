use crate::codec::ImageCodec;
use crate::domain::category::Category;
use crate::domain::types::{CategoryId, ImageData};
use crate::dto::categories::{CategoryDto, CategoryImageDto};
use crate::forms::categories::UploadCategoryFormPayload;
use crate::repository::{CategoryReader, CategoryWriter, RepositoryError, SchemaManager};

use super::{ServiceError, ServiceResult};

/// Create the categories table at process start-up.
pub fn ensure_schema<R>(repo: &R) -> ServiceResult<()>
where
    R: SchemaManager,
{
    repo.ensure_schema().map_err(|e| {
        log::error!("Failed to create categories schema: {e}");
        ServiceError::Internal
    })
}

/// Metadata of every category, for the gallery and the delete menu.
pub fn show_categories<R>(repo: &R) -> ServiceResult<Vec<CategoryDto>>
where
    R: CategoryReader,
{
    match repo.list_categories() {
        Ok(categories) => Ok(categories.into_iter().map(CategoryDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Re-encode the uploaded image and store it as a new category.
///
/// Nothing is written unless the codec accepts the upload.
pub fn upload_category<R>(
    payload: UploadCategoryFormPayload,
    codec: &ImageCodec,
    repo: &R,
) -> ServiceResult<CategoryId>
where
    R: CategoryWriter,
{
    let encoded = match codec.encode(&payload.data, &payload.content_type) {
        Ok(encoded) => encoded,
        Err(e) => {
            log::error!("Rejected upload for category '{}': {e}", payload.name);
            return Err(e.into());
        }
    };

    let image = ImageData::new(encoded.bytes).map_err(|e| {
        log::error!("Codec produced an unusable image: {e}");
        ServiceError::Internal
    })?;

    let category = Category {
        id: CategoryId::generate(),
        name: payload.name,
        image,
    };

    match repo.create_category(&category) {
        Ok(_) => {
            log::info!(
                "Stored category {} '{}' ({} bytes)",
                category.id,
                category.name,
                category.image.len()
            );
            Ok(category.id)
        }
        Err(RepositoryError::DuplicateId(e)) => {
            log::error!("Generated category id {} collided: {e}", category.id);
            Err(ServiceError::Conflict)
        }
        Err(e) => {
            log::error!("Failed to create category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Encoded image of a single category.
pub fn show_category_image<R>(category_id: i64, repo: &R) -> ServiceResult<CategoryImageDto>
where
    R: CategoryReader,
{
    // No stored row can carry a non-positive id.
    let category_id = CategoryId::new(category_id).map_err(|_| ServiceError::NotFound)?;

    match repo.get_category_image(category_id) {
        Ok(image) => Ok(CategoryImageDto {
            data: image.into_inner(),
            media_type: crate::codec::OUTPUT_MEDIA_TYPE,
        }),
        Err(RepositoryError::NotFound) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to load image of category {category_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Delete a category. Returns whether a row was removed; a missing id is not
/// an error.
pub fn delete_category<R>(category_id: i64, repo: &R) -> ServiceResult<bool>
where
    R: CategoryWriter,
{
    let Ok(category_id) = CategoryId::new(category_id) else {
        log::debug!("Ignoring delete of invalid category id {category_id}");
        return Ok(false);
    };

    match repo.delete_category(category_id) {
        Ok(affected) => {
            log::debug!("Deleted category {category_id} ({affected} rows)");
            Ok(affected > 0)
        }
        Err(e) => {
            log::error!("Failed to delete category {category_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}
