//! # Apparatus Repository
//!
//! Equipment an exercise may use (barbell, bench, kettlebell, ...).

use sqlx::error::BoxDynError;
use sqlx::sqlite::SqliteArguments;
use sqlx::Arguments;
use uuid::Uuid;

use super::{CatalogEntity, Repository};
use shred_core::{Apparatus, ApparatusRequest, Code};

impl CatalogEntity for Apparatus {
    type Key = Code;
    type Request = ApparatusRequest;

    const ENTITY: &'static str = "apparatus";
    const KEY_LABEL: &'static str = "code";
    const TABLE: &'static str = "apparatus_type";
    const KEY_COLUMN: &'static str = "apparatus_code";
    const FIELD_COLUMNS: &'static [&'static str] = &["apparatus_name", "apparatus_description"];

    fn new_key(request: &ApparatusRequest) -> Code {
        request.fields.code.clone()
    }

    fn created_by(request: &ApparatusRequest) -> Option<Uuid> {
        request.created_by
    }

    fn bind_fields<'q>(
        request: &'q ApparatusRequest,
        args: &mut SqliteArguments<'q>,
    ) -> Result<(), BoxDynError> {
        args.add(request.fields.name.as_str())?;
        args.add(request.fields.description.as_str())
    }
}

/// Repository for apparatus rows.
pub type ApparatusRepository = Repository<Apparatus>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};

    #[tokio::test]
    async fn test_apparatus_create_list_delete() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.apparatus();

        let barbell = repo
            .create(&ApparatusRequest::new("barbell", "Barbell", "Olympic bar, 20kg"))
            .await
            .unwrap();
        repo.create(&ApparatusRequest::new("bench", "Bench", ""))
            .await
            .unwrap();

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0], barbell);

        repo.delete(&Code::new("Bench")).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 1);

        let err = repo.delete(&Code::new("bench")).await.unwrap_err();
        assert_eq!(err.to_string(), "apparatus with code BENCH not found");
    }
}
