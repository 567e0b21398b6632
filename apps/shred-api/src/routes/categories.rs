//! Category endpoints

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use shred_core::validation::ensure_same_code;
use shred_core::{Category, CategoryRequest, Code};

use crate::error::ApiError;
use crate::extractors::ValidJson;
use crate::AppState;

/// GET /categories
async fn list_categories(State(state): State<AppState>) -> Result<Json<Vec<Category>>, ApiError> {
    Ok(Json(state.db.categories().list().await?))
}

/// POST /categories
async fn create_category(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CategoryRequest>,
) -> Result<(StatusCode, Json<Category>), ApiError> {
    let category = state.db.categories().create(&request).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /categories/{code}
async fn get_category(
    State(state): State<AppState>,
    Path(code): Path<Code>,
) -> Result<Json<Category>, ApiError> {
    Ok(Json(state.db.categories().get(&code).await?))
}

/// PUT /categories/{code}
async fn update_category(
    State(state): State<AppState>,
    Path(code): Path<Code>,
    ValidJson(request): ValidJson<CategoryRequest>,
) -> Result<Json<Category>, ApiError> {
    ensure_same_code("code", &code, &request.fields.code)?;

    let repo = state.db.categories();
    repo.update(&code, &request).await?;
    Ok(Json(repo.get(&code).await?))
}

/// DELETE /categories/{code}
async fn delete_category(
    State(state): State<AppState>,
    Path(code): Path<Code>,
) -> Result<StatusCode, ApiError> {
    state.db.categories().delete(&code).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Category routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route(
            "/categories/{code}",
            get(get_category)
                .put(update_category)
                .delete(delete_category),
        )
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::{read_json, send, test_app};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_category_lifecycle_over_http() {
        let app = test_app().await;

        let response = send(
            &app,
            "POST",
            "/categories",
            Some(json!({"code": "strength", "name": "Strength", "description": "Strength training exercises"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = read_json(response).await;
        assert_eq!(created["code"], "STRENGTH");
        assert!(created["createdAt"].is_string());

        let response = send(&app, "GET", "/categories/Strength", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await, created);

        let response = send(
            &app,
            "PUT",
            "/categories/strength",
            Some(json!({"code": "STRENGTH", "name": "Resistance"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let updated = read_json(response).await;
        assert_eq!(updated["name"], "Resistance");
        assert_eq!(updated["description"], "");
        assert_eq!(updated["createdAt"], created["createdAt"]);

        let response = send(&app, "DELETE", "/categories/STRENGTH", None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = send(&app, "GET", "/categories/strength", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = read_json(response).await;
        assert_eq!(body["code"], "NOT_FOUND");
        assert_eq!(body["message"], "category with code STRENGTH not found");
    }

    #[tokio::test]
    async fn test_duplicate_category_is_conflict() {
        let app = test_app().await;
        let body = json!({"code": "cardio", "name": "Cardio"});

        let first = send(&app, "POST", "/categories", Some(body.clone())).await;
        assert_eq!(first.status(), StatusCode::CREATED);

        let second = send(&app, "POST", "/categories", Some(body)).await;
        assert_eq!(second.status(), StatusCode::CONFLICT);
        assert_eq!(read_json(second).await["code"], "CONFLICT");
    }

    #[tokio::test]
    async fn test_put_rejects_mismatched_code() {
        let app = test_app().await;
        send(&app, "POST", "/categories", Some(json!({"code": "cardio", "name": "Cardio"}))).await;

        let response = send(
            &app,
            "PUT",
            "/categories/cardio",
            Some(json!({"code": "hiit", "name": "HIIT"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_json(response).await["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_invalid_payloads_are_rejected() {
        let app = test_app().await;

        let missing_name = send(&app, "POST", "/categories", Some(json!({"code": "cardio"}))).await;
        assert_eq!(missing_name.status(), StatusCode::BAD_REQUEST);

        let bad_code = send(
            &app,
            "POST",
            "/categories",
            Some(json!({"code": "two words", "name": "Nope"})),
        )
        .await;
        assert_eq!(bad_code.status(), StatusCode::BAD_REQUEST);

        let list = send(&app, "GET", "/categories", None).await;
        assert_eq!(read_json(list).await, json!([]));
    }
}
