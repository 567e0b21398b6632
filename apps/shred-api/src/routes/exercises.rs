//! Exercise endpoints
//!
//! Exercises are addressed by the UUID generated when they were created.
//! A path segment that is not a UUID is rejected before the database is
//! touched.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use shred_core::{Exercise, ExerciseRequest};

use crate::error::ApiError;
use crate::extractors::{ValidJson, ValidUuid};
use crate::AppState;

/// GET /exercises
async fn list_exercises(State(state): State<AppState>) -> Result<Json<Vec<Exercise>>, ApiError> {
    Ok(Json(state.db.exercises().list().await?))
}

/// POST /exercises
async fn create_exercise(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<ExerciseRequest>,
) -> Result<(StatusCode, Json<Exercise>), ApiError> {
    let exercise = state.db.exercises().create(&request).await?;
    tracing::debug!(id = %exercise.id, "Exercise created");
    Ok((StatusCode::CREATED, Json(exercise)))
}

/// GET /exercises/{id}
async fn get_exercise(
    State(state): State<AppState>,
    ValidUuid(id): ValidUuid,
) -> Result<Json<Exercise>, ApiError> {
    Ok(Json(state.db.exercises().get(&id).await?))
}

/// PUT /exercises/{id}
async fn update_exercise(
    State(state): State<AppState>,
    ValidUuid(id): ValidUuid,
    ValidJson(request): ValidJson<ExerciseRequest>,
) -> Result<Json<Exercise>, ApiError> {
    let repo = state.db.exercises();
    repo.update(&id, &request).await?;
    Ok(Json(repo.get(&id).await?))
}

/// DELETE /exercises/{id}
async fn delete_exercise(
    State(state): State<AppState>,
    ValidUuid(id): ValidUuid,
) -> Result<StatusCode, ApiError> {
    state.db.exercises().delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Exercise routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/exercises", get(list_exercises).post(create_exercise))
        .route(
            "/exercises/{id}",
            get(get_exercise)
                .put(update_exercise)
                .delete(delete_exercise),
        )
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::{read_json, send, test_app};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_exercise_lifecycle_over_http() {
        let app = test_app().await;

        let response = send(
            &app,
            "POST",
            "/exercises",
            Some(json!({
                "name": "Back Squat",
                "cues": "Chest up; knees out",
                "categoryCode": "strength",
                "licenseShortName": "cc0",
                "videoUrl": "https://example.org/squat.mp4"
            })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = read_json(response).await;
        assert_eq!(created["categoryCode"], "STRENGTH");
        assert_eq!(created["licenseShortName"], "CC0");
        assert!(created["description"].is_null());

        let id = created["id"].as_str().unwrap().to_string();
        let uri = format!("/exercises/{id}");

        let response = send(&app, "GET", &uri, None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await, created);

        let response = send(&app, "PUT", &uri, Some(json!({"name": "Front Squat"}))).await;
        assert_eq!(response.status(), StatusCode::OK);
        let updated = read_json(response).await;
        assert_eq!(updated["id"], created["id"]);
        assert_eq!(updated["name"], "Front Squat");
        assert!(updated["cues"].is_null());

        let response = send(&app, "GET", "/exercises", None).await;
        assert_eq!(read_json(response).await.as_array().map(Vec::len), Some(1));

        let response = send(&app, "DELETE", &uri, None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = send(&app, "GET", &uri, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            read_json(response).await["message"],
            format!("exercise with id {id} not found")
        );
    }

    #[tokio::test]
    async fn test_malformed_id_is_400() {
        let app = test_app().await;

        let response = send(&app, "GET", "/exercises/not-a-uuid", None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_json(response).await["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_blank_name_is_400() {
        let app = test_app().await;

        let response = send(&app, "POST", "/exercises", Some(json!({"name": "  "}))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
