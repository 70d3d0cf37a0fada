use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::BigInt;

use crate::domain::category::{Category, CategorySummary};
use crate::domain::types::{CategoryId, ImageData};
use crate::models::category::{Category as DbCategory, CategorySummary as DbCategorySummary};
use crate::repository::{
    CategoryReader, CategoryWriter, DieselRepository, RepositoryResult, SchemaManager,
};

// `id` is BIGINT rather than INTEGER so it does not alias `rowid`; the implicit
// rowid then keeps insertion order for listings.
const CREATE_CATEGORIES_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS categories (
    id BIGINT NOT NULL PRIMARY KEY,
    name TEXT NOT NULL,
    image BLOB NOT NULL
)";

impl SchemaManager for DieselRepository {
    fn ensure_schema(&self) -> RepositoryResult<()> {
        let mut conn = self.conn()?;
        diesel::sql_query(CREATE_CATEGORIES_TABLE).execute(&mut conn)?;
        Ok(())
    }
}

impl CategoryReader for DieselRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<CategorySummary>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let items = categories::table
            .select(DbCategorySummary::as_select())
            .order(sql::<BigInt>("rowid"))
            .load::<DbCategorySummary>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<CategorySummary>, _>>()?;

        Ok(items)
    }

    fn get_category_image(&self, id: CategoryId) -> RepositoryResult<ImageData> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let image = categories::table
            .find(id.get())
            .select(categories::image)
            .first::<Vec<u8>>(&mut conn)?;

        Ok(ImageData::new(image)?)
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(&self, category: &Category) -> RepositoryResult<usize> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let db_category: DbCategory = category.clone().into();

        let affected = diesel::insert_into(categories::table)
            .values(db_category)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_category(&self, id: CategoryId) -> RepositoryResult<usize> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let affected = diesel::delete(categories::table.find(id.get())).execute(&mut conn)?;

        Ok(affected)
    }
}
