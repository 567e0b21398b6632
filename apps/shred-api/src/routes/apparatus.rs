//! Apparatus endpoints

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use shred_core::validation::ensure_same_code;
use shred_core::{Apparatus, ApparatusRequest, Code};

use crate::error::ApiError;
use crate::extractors::ValidJson;
use crate::AppState;

/// GET /apparatus
async fn list_apparatus(State(state): State<AppState>) -> Result<Json<Vec<Apparatus>>, ApiError> {
    Ok(Json(state.db.apparatus().list().await?))
}

/// POST /apparatus
async fn create_apparatus(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<ApparatusRequest>,
) -> Result<(StatusCode, Json<Apparatus>), ApiError> {
    let apparatus = state.db.apparatus().create(&request).await?;
    Ok((StatusCode::CREATED, Json(apparatus)))
}

/// GET /apparatus/{code}
async fn get_apparatus(
    State(state): State<AppState>,
    Path(code): Path<Code>,
) -> Result<Json<Apparatus>, ApiError> {
    Ok(Json(state.db.apparatus().get(&code).await?))
}

/// PUT /apparatus/{code}
async fn update_apparatus(
    State(state): State<AppState>,
    Path(code): Path<Code>,
    ValidJson(request): ValidJson<ApparatusRequest>,
) -> Result<Json<Apparatus>, ApiError> {
    ensure_same_code("code", &code, &request.fields.code)?;

    let repo = state.db.apparatus();
    repo.update(&code, &request).await?;
    Ok(Json(repo.get(&code).await?))
}

/// DELETE /apparatus/{code}
async fn delete_apparatus(
    State(state): State<AppState>,
    Path(code): Path<Code>,
) -> Result<StatusCode, ApiError> {
    state.db.apparatus().delete(&code).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Apparatus routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/apparatus", get(list_apparatus).post(create_apparatus))
        .route(
            "/apparatus/{code}",
            get(get_apparatus)
                .put(update_apparatus)
                .delete(delete_apparatus),
        )
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::{read_json, send, test_app};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_apparatus_sorted_by_code() {
        let app = test_app().await;

        for (code, name) in [("kettlebell", "Kettlebell"), ("barbell", "Barbell")] {
            let response = send(
                &app,
                "POST",
                "/apparatus",
                Some(json!({"code": code, "name": name})),
            )
            .await;
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let response = send(&app, "GET", "/apparatus", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = read_json(response).await;
        let codes: Vec<_> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["code"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(codes, ["BARBELL", "KETTLEBELL"]);
    }
}
