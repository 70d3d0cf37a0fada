use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::category::{Category, CategorySummary};
use crate::domain::types::{CategoryId, ImageData};

pub mod category;
pub mod errors;

pub use errors::{RepositoryError, RepositoryResult};

/// How long a connection waits on a locked database before giving up.
const BUSY_TIMEOUT_MS: u32 = 5_000;

/// Repository implementation backed by Diesel and SQLite.
///
/// Holds only the database location. Every operation opens its own
/// connection and drops it before returning, so the repository is cheap to
/// clone and share between request handlers.
#[derive(Clone, Debug)]
pub struct DieselRepository {
    database_url: String,
}

impl DieselRepository {
    /// Create a new repository for the SQLite database at `database_url`.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
        }
    }

    /// Location of the backing database.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Open a fresh connection scoped to a single operation.
    fn conn(&self) -> RepositoryResult<SqliteConnection> {
        let mut conn = SqliteConnection::establish(&self.database_url)?;
        conn.batch_execute(&format!("PRAGMA busy_timeout = {BUSY_TIMEOUT_MS};"))?;
        Ok(conn)
    }
}

/// Start-up schema management.
pub trait SchemaManager {
    /// Create the categories table if it does not exist yet.
    fn ensure_schema(&self) -> RepositoryResult<()>;
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List `(id, name)` pairs of every category in insertion order.
    fn list_categories(&self) -> RepositoryResult<Vec<CategorySummary>>;
    /// Fetch the encoded image of a category.
    fn get_category_image(&self, id: CategoryId) -> RepositoryResult<ImageData>;
}

/// Write operations for category entities.
pub trait CategoryWriter {
    /// Persist a new category under its own identifier.
    fn create_category(&self, category: &Category) -> RepositoryResult<usize>;
    /// Delete a category by id. Deleting a missing id affects zero rows.
    fn delete_category(&self, id: CategoryId) -> RepositoryResult<usize>;
}
