//! # Exercise Repository
//!
//! Exercises, keyed by a UUID generated on insert.
//!
//! `category_code` and `license_short_name` hold normalized codes but are
//! not foreign keys: an exercise may reference a category or license that
//! has not been created yet.

use sqlx::error::BoxDynError;
use sqlx::sqlite::SqliteArguments;
use sqlx::Arguments;
use uuid::Uuid;

use super::{CatalogEntity, Repository};
use shred_core::{Code, Exercise, ExerciseRequest};

impl CatalogEntity for Exercise {
    type Key = Uuid;
    type Request = ExerciseRequest;

    const ENTITY: &'static str = "exercise";
    const KEY_LABEL: &'static str = "id";
    const TABLE: &'static str = "exercise";
    const KEY_COLUMN: &'static str = "exercise_uuid";
    const FIELD_COLUMNS: &'static [&'static str] = &[
        "exercise_name",
        "exercise_description",
        "instructions",
        "cues",
        "video_url",
        "category_code",
        "license_short_name",
        "license_author",
    ];

    fn new_key(_request: &ExerciseRequest) -> Uuid {
        Uuid::new_v4()
    }

    fn created_by(request: &ExerciseRequest) -> Option<Uuid> {
        request.created_by
    }

    fn bind_fields<'q>(
        request: &'q ExerciseRequest,
        args: &mut SqliteArguments<'q>,
    ) -> Result<(), BoxDynError> {
        let fields = &request.fields;
        args.add(fields.name.as_str())?;
        args.add(fields.description.as_deref())?;
        args.add(fields.instructions.as_deref())?;
        args.add(fields.cues.as_deref())?;
        args.add(fields.video_url.as_deref())?;
        args.add(fields.category_code.as_ref().map(Code::as_str))?;
        args.add(fields.license_short_name.as_ref().map(Code::as_str))?;
        args.add(fields.license_author.as_deref())
    }
}

/// Repository for exercise rows.
pub type ExerciseRepository = Repository<Exercise>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};

    async fn repo() -> ExerciseRepository {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.exercises()
    }

    fn squat() -> ExerciseRequest {
        let mut request = ExerciseRequest::named("Back Squat");
        request.fields.description = Some("Barbell on the upper back".to_string());
        request.fields.cues = Some("Chest up; knees out".to_string());
        request.fields.category_code = Some(Code::new("strength"));
        request.fields.license_short_name = Some(Code::new("cc-by-sa-4.0"));
        request.fields.license_author = Some("wger".to_string());
        request
    }

    #[tokio::test]
    async fn test_create_generates_id_and_round_trips() {
        let repo = repo().await;

        let created = repo.create(&squat()).await.unwrap();
        assert!(!created.id.is_nil());
        assert_eq!(created.fields.category_code, Some(Code::new("STRENGTH")));
        assert_eq!(
            created.fields.license_short_name.as_ref().map(Code::as_str),
            Some("CC-BY-SA-4.0")
        );
        assert!(created.fields.video_url.is_none());

        let found = repo.get(&created.id).await.unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_each_create_gets_a_new_id() {
        let repo = repo().await;

        let first = repo.create(&squat()).await.unwrap();
        let second = repo.create(&squat()).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_update_keeps_id_and_clears_optional_fields() {
        let repo = repo().await;
        let created = repo.create(&squat()).await.unwrap();

        repo.update(&created.id, &ExerciseRequest::named("Front Squat"))
            .await
            .unwrap();

        let found = repo.get(&created.id).await.unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.fields.name, "Front Squat");
        assert!(found.fields.cues.is_none());
        assert!(found.fields.category_code.is_none());
        assert_eq!(found.audit.created_at, created.audit.created_at);
    }

    #[tokio::test]
    async fn test_missing_exercise() {
        let repo = repo().await;
        let id = Uuid::new_v4();

        let err = repo.get(&id).await.unwrap_err();
        assert_eq!(err.to_string(), format!("exercise with id {id} not found"));
        assert!(repo.delete(&id).await.unwrap_err().is_not_found());
        assert!(repo
            .update(&id, &ExerciseRequest::named("Lunge"))
            .await
            .unwrap_err()
            .is_not_found());
    }
}
