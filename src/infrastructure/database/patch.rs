//! Merge-Patch Query Builder
//!
//! Builds `UPDATE … SET` statements from the fields actually present in a
//! patch. Each present field becomes one `column = $n` assignment with a
//! positional bind; absent fields never reach the statement.
//!
//! ```rust,ignore
//! let mut patch = PatchQuery::new("stores");
//! patch
//!     .set("name", update.name.as_deref())
//!     .set("rating", update.rating);
//!
//! if !patch.execute(&pool, "id", id).await? {
//!     return Err(AppError::not_found("Store", id));
//! }
//! ```

use sqlx::{Encode, PgPool, Postgres, QueryBuilder, Type};

use super::row_exists;

/// Dynamic `UPDATE` statement over the present fields of a patch.
pub struct PatchQuery<'args> {
    table: String,
    builder: QueryBuilder<'args, Postgres>,
    fields: usize,
}

impl<'args> PatchQuery<'args> {
    /// Start an update of `table`.
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_owned(),
            builder: QueryBuilder::new(format!("UPDATE {} SET ", table)),
            fields: 0,
        }
    }

    /// Add `column = $n` when `value` is present.
    pub fn set<T>(&mut self, column: &str, value: Option<T>) -> &mut Self
    where
        T: 'args + Encode<'args, Postgres> + Type<Postgres> + Send,
    {
        if let Some(value) = value {
            if self.fields > 0 {
                self.builder.push(", ");
            }
            self.builder.push(column).push(" = ").push_bind(value);
            self.fields += 1;
        }
        self
    }

    /// Number of assignments collected so far.
    pub fn len(&self) -> usize {
        self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields == 0
    }

    /// Stamp `updated_at` and restrict to `key_column = key`.
    ///
    /// Returns `None` for an empty patch: no statement should be issued.
    pub fn finish(mut self, key_column: &str, key: &'args str) -> Option<QueryBuilder<'args, Postgres>> {
        if self.is_empty() {
            return None;
        }

        self.builder
            .push(", updated_at = NOW() WHERE ")
            .push(key_column)
            .push(" = ")
            .push_bind(key);

        Some(self.builder)
    }

    /// Run the update against `key_column = key`.
    ///
    /// Returns whether the target row exists. An empty patch issues no
    /// `UPDATE`; only the existence of the row is checked.
    pub async fn execute(
        self,
        pool: &PgPool,
        key_column: &str,
        key: &'args str,
    ) -> Result<bool, sqlx::Error> {
        let table = self.table.clone();

        match self.finish(key_column, key) {
            Some(mut query) => {
                let result = query.build().execute(pool).await?;
                Ok(result.rows_affected() > 0)
            }
            None => {
                tracing::debug!(table = %table, key, "Empty patch, nothing to update");
                row_exists(pool, &table, key_column, key).await
            }
        }
    }
}
