//! Core library of the Travely categories gallery.
//!
//! The crate stores named gallery categories with a re-encoded image each. It
//! exposes the domain types, the SQLite-backed repository, the image codec and
//! the service functions an HTTP layer calls to upload, list, serve and delete
//! categories.

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
mod error_conversions;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod schema;

#[cfg(feature = "app")]
pub mod codec;
#[cfg(feature = "app")]
pub mod config;
#[cfg(feature = "app")]
pub mod forms;
#[cfg(feature = "app")]
pub mod services;
