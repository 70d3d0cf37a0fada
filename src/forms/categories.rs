use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::types::{CategoryName, TypeConstraintError};

/// Fields of the category upload form, as read from the multipart body.
#[derive(Deserialize, Validate)]
pub struct UploadCategoryForm {
    #[validate(length(min = 1))]
    pub name: String,
    /// Declared content type of the file part.
    pub content_type: Option<String>,
    /// Raw bytes of the file part.
    pub data: Vec<u8>,
}

#[derive(Clone, PartialEq)]
pub struct UploadCategoryFormPayload {
    pub name: CategoryName,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl std::fmt::Debug for UploadCategoryFormPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadCategoryFormPayload")
            .field("name", &self.name)
            .field("content_type", &self.content_type)
            .field("len", &self.data.len())
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum UploadCategoryFormError {
    #[error("Upload category form validation failed: {0}")]
    Validation(String),
    #[error("Upload category form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for UploadCategoryFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for UploadCategoryFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<UploadCategoryForm> for UploadCategoryFormPayload {
    type Error = UploadCategoryFormError;

    fn try_from(value: UploadCategoryForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            name: CategoryName::new(value.name)?,
            // A missing type is rejected by the codec, not here.
            content_type: value.content_type.unwrap_or_default(),
            data: value.data,
        })
    }
}
