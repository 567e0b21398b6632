//! # Category Repository
//!
//! Exercise categories (strength, cardio, stretching, ...), keyed by code.

use sqlx::error::BoxDynError;
use sqlx::sqlite::SqliteArguments;
use sqlx::Arguments;
use uuid::Uuid;

use super::{CatalogEntity, Repository};
use shred_core::{Category, CategoryRequest, Code};

impl CatalogEntity for Category {
    type Key = Code;
    type Request = CategoryRequest;

    const ENTITY: &'static str = "category";
    const KEY_LABEL: &'static str = "code";
    const TABLE: &'static str = "category_type";
    const KEY_COLUMN: &'static str = "category_code";
    const FIELD_COLUMNS: &'static [&'static str] = &["category_name", "category_description"];

    fn new_key(request: &CategoryRequest) -> Code {
        request.fields.code.clone()
    }

    fn created_by(request: &CategoryRequest) -> Option<Uuid> {
        request.created_by
    }

    fn bind_fields<'q>(
        request: &'q CategoryRequest,
        args: &mut SqliteArguments<'q>,
    ) -> Result<(), BoxDynError> {
        args.add(request.fields.name.as_str())?;
        args.add(request.fields.description.as_str())
    }
}

/// Repository for category rows.
pub type CategoryRepository = Repository<Category>;
