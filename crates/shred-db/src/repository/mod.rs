//! # Repository Module
//!
//! One generic repository for every catalog entity.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Repository, Five Schemas                         │
//! │                                                                         │
//! │  HTTP handler                                                          │
//! │       │                                                                 │
//! │       │  db.categories().get(&Code::new("strength"))                   │
//! │       ▼                                                                 │
//! │  Repository<Category>                                                  │
//! │  ├── create(&self, request)       INSERT ... RETURNING                 │
//! │  ├── get(&self, key)              SELECT ... WHERE key = ?1            │
//! │  ├── list(&self)                  SELECT ... ORDER BY key              │
//! │  ├── update(&self, key, request)  UPDATE ... SET ..., updated_at       │
//! │  ├── delete(&self, key)           DELETE ... WHERE key = ?1            │
//! │  └── count(&self)                 SELECT COUNT(*)                      │
//! │       │                                                                 │
//! │       │  statements built once from the entity's CatalogEntity impl    │
//! │       ▼                                                                 │
//! │  ┌──────────────┬────────────────┬──────────────────────────────────┐  │
//! │  │ Category     │ category_type  │ category_code  + 2 field columns │  │
//! │  │ Muscle       │ muscle_type    │ muscle_code    + 3 field columns │  │
//! │  │ Apparatus    │ apparatus_type │ apparatus_code + 2 field columns │  │
//! │  │ License      │ license        │ license_short_name + 2 columns   │  │
//! │  │ Exercise     │ exercise       │ exercise_uuid  + 8 field columns │  │
//! │  └──────────────┴────────────────┴──────────────────────────────────┘  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Model
//! Every operation fails in exactly one of two ways:
//! - [`DbError::NotFound`]: `get` found no row, or `update`/`delete`
//!   affected zero rows
//! - [`DbError::Query`]: the driver's error, untouched
//!
//! The repository never logs and never retries. The caller decides.

use std::fmt;
use std::iter;
use std::marker::PhantomData;
use std::sync::Arc;

use sqlx::error::BoxDynError;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{Arguments, Encode, FromRow, Sqlite, SqlitePool, Type};
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use shred_core::Code;

pub mod apparatus;
pub mod category;
pub mod exercise;
pub mod license;
pub mod muscle;

pub use apparatus::ApparatusRepository;
pub use category::CategoryRepository;
pub use exercise::ExerciseRepository;
pub use license::LicenseRepository;
pub use muscle::MuscleRepository;

/// Audit columns shared by every catalog table, in select order.
const AUDIT_COLUMNS: [&str; 3] = ["created_by", "created_at", "updated_at"];

/// Same expression as the column defaults in the schema migration.
const NOW: &str = "strftime('%Y-%m-%dT%H:%M:%fZ', 'now')";

// =============================================================================
// Entity Schema
// =============================================================================

/// A value that can address a row: a [`Code`] or a generated [`Uuid`].
pub trait EntityKey:
    Clone + fmt::Display + Send + Sync + for<'q> Encode<'q, Sqlite> + Type<Sqlite> + 'static
{
}

impl EntityKey for Code {}
impl EntityKey for Uuid {}

/// Describes how one catalog entity maps onto its table.
///
/// `FIELD_COLUMNS` lists the mutable columns only (no key, no audit
/// columns), and `bind_fields` must bind exactly those, in that order.
pub trait CatalogEntity: for<'r> FromRow<'r, SqliteRow> + Send + Unpin + 'static {
    /// Primary key type.
    type Key: EntityKey;

    /// Payload accepted by `create` and `update`.
    type Request: Send + Sync;

    /// Lower-case entity name used in not-found messages, e.g. `"category"`.
    const ENTITY: &'static str;

    /// How the key is described in not-found messages, e.g. `"code"`.
    const KEY_LABEL: &'static str;

    const TABLE: &'static str;
    const KEY_COLUMN: &'static str;
    const FIELD_COLUMNS: &'static [&'static str];

    /// Key for a new row: the request's code, or a freshly generated id.
    fn new_key(request: &Self::Request) -> Self::Key;

    fn created_by(request: &Self::Request) -> Option<Uuid>;

    /// Binds the values for `FIELD_COLUMNS`.
    fn bind_fields<'q>(
        request: &'q Self::Request,
        args: &mut SqliteArguments<'q>,
    ) -> Result<(), BoxDynError>;
}

// =============================================================================
// Statements
// =============================================================================

/// SQL text for one entity, derived from its [`CatalogEntity`] impl.
#[derive(Debug)]
struct Statements {
    insert: String,
    select_one: String,
    select_all: String,
    update: String,
    delete: String,
    count: String,
}

impl Statements {
    fn for_entity<E: CatalogEntity>() -> Self {
        let table = E::TABLE;
        let key = E::KEY_COLUMN;
        let fields = E::FIELD_COLUMNS;

        let columns = iter::once(key)
            .chain(fields.iter().copied())
            .chain(AUDIT_COLUMNS)
            .collect::<Vec<_>>()
            .join(", ");

        // key, fields..., created_by
        let insert_columns = iter::once(key)
            .chain(fields.iter().copied())
            .chain(iter::once("created_by"))
            .collect::<Vec<_>>()
            .join(", ");
        let placeholders = (1..=fields.len() + 2)
            .map(|i| format!("?{i}"))
            .collect::<Vec<_>>()
            .join(", ");

        let assignments = fields
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{column} = ?{}", i + 1))
            .chain(iter::once(format!("updated_at = {NOW}")))
            .collect::<Vec<_>>()
            .join(", ");

        Statements {
            insert: format!(
                "INSERT INTO {table} ({insert_columns}) VALUES ({placeholders}) RETURNING {columns}"
            ),
            select_one: format!("SELECT {columns} FROM {table} WHERE {key} = ?1"),
            select_all: format!("SELECT {columns} FROM {table} ORDER BY {key}"),
            update: format!(
                "UPDATE {table} SET {assignments} WHERE {key} = ?{}",
                fields.len() + 1
            ),
            delete: format!("DELETE FROM {table} WHERE {key} = ?1"),
            count: format!("SELECT COUNT(*) FROM {table}"),
        }
    }
}

// =============================================================================
// Repository
// =============================================================================

/// CRUD operations for one catalog entity.
///
/// ## Usage
/// ```rust,ignore
/// let repo = CategoryRepository::new(pool);
///
/// let created = repo.create(&CategoryRequest::new("strength", "Strength", "")).await?;
/// let found = repo.get(&Code::new("Strength")).await?;
/// assert_eq!(created, found);
/// ```
pub struct Repository<E> {
    pool: SqlitePool,
    statements: Arc<Statements>,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for Repository<E> {
    fn clone(&self) -> Self {
        Repository {
            pool: self.pool.clone(),
            statements: Arc::clone(&self.statements),
            _entity: PhantomData,
        }
    }
}

impl<E> fmt::Debug for Repository<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repository")
            .field("pool", &self.pool)
            .field("statements", &self.statements)
            .finish()
    }
}

impl<E: CatalogEntity> Repository<E> {
    /// Creates a repository on an injected pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository {
            pool,
            statements: Arc::new(Statements::for_entity::<E>()),
            _entity: PhantomData,
        }
    }

    /// Inserts a new row and returns it as stored, including the
    /// database-generated `created_at` and `updated_at`.
    ///
    /// A duplicate key surfaces as the driver's unique violation
    /// (see [`DbError::is_unique_violation`]).
    pub async fn create(&self, request: &E::Request) -> DbResult<E> {
        let mut args = SqliteArguments::default();
        args.add(E::new_key(request)).map_err(sqlx::Error::Encode)?;
        E::bind_fields(request, &mut args).map_err(sqlx::Error::Encode)?;
        args.add(E::created_by(request))
            .map_err(sqlx::Error::Encode)?;

        let row = sqlx::query_as_with::<Sqlite, E, _>(&self.statements.insert, args)
            .fetch_one(&self.pool)
            .await?;

        Ok(row)
    }

    /// Fetches one row by key.
    pub async fn get(&self, key: &E::Key) -> DbResult<E> {
        let mut args = SqliteArguments::default();
        args.add(key.clone()).map_err(sqlx::Error::Encode)?;

        sqlx::query_as_with::<Sqlite, E, _>(&self.statements.select_one, args)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::RowNotFound => DbError::not_found(E::ENTITY, E::KEY_LABEL, key),
                other => DbError::Query(other),
            })
    }

    /// Fetches every row, ordered by key.
    pub async fn list(&self) -> DbResult<Vec<E>> {
        let rows = sqlx::query_as::<Sqlite, E>(&self.statements.select_all)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    /// Overwrites every mutable field of the row at `key` and refreshes
    /// `updated_at`. The key itself is never changed.
    pub async fn update(&self, key: &E::Key, request: &E::Request) -> DbResult<()> {
        let mut args = SqliteArguments::default();
        E::bind_fields(request, &mut args).map_err(sqlx::Error::Encode)?;
        args.add(key.clone()).map_err(sqlx::Error::Encode)?;

        let result = sqlx::query_with::<Sqlite, _>(&self.statements.update, args)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(E::ENTITY, E::KEY_LABEL, key));
        }

        Ok(())
    }

    /// Permanently deletes the row at `key`.
    pub async fn delete(&self, key: &E::Key) -> DbResult<()> {
        let mut args = SqliteArguments::default();
        args.add(key.clone()).map_err(sqlx::Error::Encode)?;

        let result = sqlx::query_with::<Sqlite, _>(&self.statements.delete, args)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(E::ENTITY, E::KEY_LABEL, key));
        }

        Ok(())
    }

    /// Number of rows in the table.
    pub async fn count(&self) -> DbResult<i64> {
        let count = sqlx::query_scalar::<Sqlite, i64>(&self.statements.count)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};
    use shred_core::{Category, Exercise, License};

    #[tokio::test]
    async fn test_accessors_share_statements() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let first = db.categories();
        let second = db.categories();
        assert!(Arc::ptr_eq(&first.statements, &second.statements));

        let cloned = db.clone();
        assert!(Arc::ptr_eq(
            &db.exercises().statements,
            &cloned.exercises().statements
        ));
    }

    #[test]
    fn test_statements_for_code_keyed_entity() {
        let sql = Statements::for_entity::<Category>();

        assert_eq!(
            sql.insert,
            "INSERT INTO category_type (category_code, category_name, category_description, created_by) \
             VALUES (?1, ?2, ?3, ?4) \
             RETURNING category_code, category_name, category_description, created_by, created_at, updated_at"
        );
        assert_eq!(
            sql.update,
            format!(
                "UPDATE category_type SET category_name = ?1, category_description = ?2, \
                 updated_at = {NOW} WHERE category_code = ?3"
            )
        );
        assert!(sql.select_all.ends_with("ORDER BY category_code"));
    }

    #[test]
    fn test_statements_for_uuid_keyed_entity() {
        let sql = Statements::for_entity::<Exercise>();

        // 1 key + 8 fields + created_by
        assert!(sql.insert.contains("?10)"));
        assert!(sql.update.ends_with("WHERE exercise_uuid = ?9"));
        assert_eq!(sql.delete, "DELETE FROM exercise WHERE exercise_uuid = ?1");
    }

    #[test]
    fn test_statements_never_assign_key_or_creator() {
        let sql = Statements::for_entity::<License>();
        let set_clause = sql
            .update
            .split(" WHERE ")
            .next()
            .unwrap_or_default();

        assert!(!set_clause.contains("license_short_name ="));
        assert!(!set_clause.contains("created_by"));
        assert!(!set_clause.contains("created_at"));
    }
}
