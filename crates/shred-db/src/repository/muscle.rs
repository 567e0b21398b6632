//! # Muscle Repository
//!
//! Target muscles, keyed by code and grouped by body region.

use sqlx::error::BoxDynError;
use sqlx::sqlite::SqliteArguments;
use sqlx::Arguments;
use uuid::Uuid;

use super::{CatalogEntity, Repository};
use shred_core::{Code, Muscle, MuscleRequest};

impl CatalogEntity for Muscle {
    type Key = Code;
    type Request = MuscleRequest;

    const ENTITY: &'static str = "muscle";
    const KEY_LABEL: &'static str = "code";
    const TABLE: &'static str = "muscle_type";
    const KEY_COLUMN: &'static str = "muscle_code";
    const FIELD_COLUMNS: &'static [&'static str] =
        &["muscle_name", "muscle_description", "muscle_group"];

    fn new_key(request: &MuscleRequest) -> Code {
        request.fields.code.clone()
    }

    fn created_by(request: &MuscleRequest) -> Option<Uuid> {
        request.created_by
    }

    fn bind_fields<'q>(
        request: &'q MuscleRequest,
        args: &mut SqliteArguments<'q>,
    ) -> Result<(), BoxDynError> {
        let fields = &request.fields;
        args.add(fields.name.as_str())?;
        args.add(fields.description.as_str())?;
        args.add(fields.group.as_str())
    }
}

/// Repository for muscle rows.
pub type MuscleRepository = Repository<Muscle>;
