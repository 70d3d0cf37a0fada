//! Domain entities and value objects shared by the store and the services.

pub mod category;
pub mod types;
