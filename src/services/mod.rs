//! Entry points called by the HTTP layer.
//!
//! Services take their collaborators (repository, codec) as arguments and
//! translate store and codec failures into [`ServiceError`], logging each
//! failure once.

pub mod categories;
pub mod errors;

pub use errors::{ServiceError, ServiceResult};
