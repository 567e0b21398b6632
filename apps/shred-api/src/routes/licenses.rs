//! License endpoints
//!
//! Licenses are addressed by short name (`/licenses/cc-by-4.0`), normalized
//! to upper case like any other code.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use shred_core::validation::ensure_same_code;
use shred_core::{Code, License, LicenseRequest};

use crate::error::ApiError;
use crate::extractors::ValidJson;
use crate::AppState;

/// GET /licenses
async fn list_licenses(State(state): State<AppState>) -> Result<Json<Vec<License>>, ApiError> {
    Ok(Json(state.db.licenses().list().await?))
}

/// POST /licenses
async fn create_license(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<LicenseRequest>,
) -> Result<(StatusCode, Json<License>), ApiError> {
    let license = state.db.licenses().create(&request).await?;
    Ok((StatusCode::CREATED, Json(license)))
}

/// GET /licenses/{short_name}
async fn get_license(
    State(state): State<AppState>,
    Path(short_name): Path<Code>,
) -> Result<Json<License>, ApiError> {
    Ok(Json(state.db.licenses().get(&short_name).await?))
}

/// PUT /licenses/{short_name}
async fn update_license(
    State(state): State<AppState>,
    Path(short_name): Path<Code>,
    ValidJson(request): ValidJson<LicenseRequest>,
) -> Result<Json<License>, ApiError> {
    ensure_same_code("shortName", &short_name, &request.fields.short_name)?;

    let repo = state.db.licenses();
    repo.update(&short_name, &request).await?;
    Ok(Json(repo.get(&short_name).await?))
}

/// DELETE /licenses/{short_name}
async fn delete_license(
    State(state): State<AppState>,
    Path(short_name): Path<Code>,
) -> Result<StatusCode, ApiError> {
    state.db.licenses().delete(&short_name).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// License routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/licenses", get(list_licenses).post(create_license))
        .route(
            "/licenses/{short_name}",
            get(get_license).put(update_license).delete(delete_license),
        )
}
