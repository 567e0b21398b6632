//! Muscle endpoints

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use shred_core::validation::ensure_same_code;
use shred_core::{Code, Muscle, MuscleRequest};

use crate::error::ApiError;
use crate::extractors::ValidJson;
use crate::AppState;

/// GET /muscles
async fn list_muscles(State(state): State<AppState>) -> Result<Json<Vec<Muscle>>, ApiError> {
    Ok(Json(state.db.muscles().list().await?))
}

/// POST /muscles
async fn create_muscle(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<MuscleRequest>,
) -> Result<(StatusCode, Json<Muscle>), ApiError> {
    let muscle = state.db.muscles().create(&request).await?;
    Ok((StatusCode::CREATED, Json(muscle)))
}

/// GET /muscles/{code}
async fn get_muscle(
    State(state): State<AppState>,
    Path(code): Path<Code>,
) -> Result<Json<Muscle>, ApiError> {
    Ok(Json(state.db.muscles().get(&code).await?))
}

/// PUT /muscles/{code}
async fn update_muscle(
    State(state): State<AppState>,
    Path(code): Path<Code>,
    ValidJson(request): ValidJson<MuscleRequest>,
) -> Result<Json<Muscle>, ApiError> {
    ensure_same_code("code", &code, &request.fields.code)?;

    let repo = state.db.muscles();
    repo.update(&code, &request).await?;
    Ok(Json(repo.get(&code).await?))
}

/// DELETE /muscles/{code}
async fn delete_muscle(
    State(state): State<AppState>,
    Path(code): Path<Code>,
) -> Result<StatusCode, ApiError> {
    state.db.muscles().delete(&code).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Muscle routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/muscles", get(list_muscles).post(create_muscle))
        .route(
            "/muscles/{code}",
            get(get_muscle).put(update_muscle).delete(delete_muscle),
        )
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::{read_json, send, test_app};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_muscle_returns_timestamps() {
        let app = test_app().await;

        let response = send(
            &app,
            "POST",
            "/muscles",
            Some(json!({
                "code": "lat",
                "name": "Latissimus",
                "description": "Muscle of the back",
                "group": "Back"
            })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = read_json(response).await;
        assert_eq!(body["code"], "LAT");
        assert_eq!(body["group"], "Back");
        assert!(body["createdAt"].as_str().is_some_and(|s| !s.is_empty()));
        assert!(body["updatedAt"].as_str().is_some_and(|s| !s.is_empty()));
        assert!(body["createdBy"].is_null());
    }

    #[tokio::test]
    async fn test_delete_missing_muscle_is_404() {
        let app = test_app().await;

        let response = send(&app, "DELETE", "/muscles/quad", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            read_json(response).await["message"],
            "muscle with code QUAD not found"
        );
    }
}
