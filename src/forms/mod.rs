//! Boundary forms filled in by the HTTP layer.

pub mod categories;
