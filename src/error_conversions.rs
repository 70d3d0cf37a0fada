//! Error conversion glue between layers.
//!
//! The domain layer must not depend on service/repository error types, so the
//! conversions live here instead.

use crate::domain::types::TypeConstraintError;
use crate::repository::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

#[cfg(feature = "app")]
mod service {
    use crate::codec::CodecError;
    use crate::domain::types::TypeConstraintError;
    use crate::forms::categories::UploadCategoryFormError;
    use crate::services::ServiceError;

    impl From<TypeConstraintError> for ServiceError {
        fn from(val: TypeConstraintError) -> Self {
            ServiceError::Form(val.to_string())
        }
    }

    impl From<UploadCategoryFormError> for ServiceError {
        fn from(val: UploadCategoryFormError) -> Self {
            ServiceError::Form(val.to_string())
        }
    }

    impl From<CodecError> for ServiceError {
        fn from(val: CodecError) -> Self {
            match val {
                // The upload was fine; producing the output failed.
                CodecError::Encode(_) => ServiceError::Internal,
                other => ServiceError::Form(other.to_string()),
            }
        }
    }
}
