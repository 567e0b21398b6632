//! # License Repository
//!
//! Content licenses exercises are published under, keyed by short name
//! (`CC0`, `CC-BY-SA-4.0`, ...).

use sqlx::error::BoxDynError;
use sqlx::sqlite::SqliteArguments;
use sqlx::Arguments;
use uuid::Uuid;

use super::{CatalogEntity, Repository};
use shred_core::{Code, License, LicenseRequest};

impl CatalogEntity for License {
    type Key = Code;
    type Request = LicenseRequest;

    const ENTITY: &'static str = "license";
    const KEY_LABEL: &'static str = "short name";
    const TABLE: &'static str = "license";
    const KEY_COLUMN: &'static str = "license_short_name";
    const FIELD_COLUMNS: &'static [&'static str] = &["license_full_name", "url"];

    fn new_key(request: &LicenseRequest) -> Code {
        request.fields.short_name.clone()
    }

    fn created_by(request: &LicenseRequest) -> Option<Uuid> {
        request.created_by
    }

    fn bind_fields<'q>(
        request: &'q LicenseRequest,
        args: &mut SqliteArguments<'q>,
    ) -> Result<(), BoxDynError> {
        args.add(request.fields.full_name.as_str())?;
        args.add(request.fields.url.as_str())
    }
}

/// Repository for license rows.
pub type LicenseRepository = Repository<License>;
