use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::SearchQuery;
use crate::models::organization::{self, NewOrganization, Organization};
use crate::DbPool;

pub async fn list(
    State(pool): State<DbPool>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Organization>>, StatusCode> {
    match organization::list(&pool, query.q.as_deref()) {
        Ok(organizations) => Ok(Json(organizations)),
        Err(e) => {
            tracing::error!("Failed to list organizations: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn show(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> Result<Json<Organization>, StatusCode> {
    match organization::find(&pool, id) {
        Ok(Some(organization)) => Ok(Json(organization)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to fetch organization {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn create(
    State(pool): State<DbPool>,
    Json(payload): Json<NewOrganization>,
) -> Result<(StatusCode, Json<Organization>), StatusCode> {
    match organization::create(&pool, &payload) {
        Ok(organization) => Ok((StatusCode::CREATED, Json(organization))),
        Err(e) => {
            tracing::error!("Failed to create organization: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn update(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
    Json(payload): Json<NewOrganization>,
) -> Result<Json<Organization>, StatusCode> {
    match organization::update(&pool, id, &payload) {
        Ok(Some(organization)) => Ok(Json(organization)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to update organization {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn destroy(State(pool): State<DbPool>, Path(id): Path<i64>) -> StatusCode {
    match organization::delete(&pool, id) {
        Ok(()) => StatusCode::NO_CONTENT,
        Err(e) => {
            tracing::error!("Failed to delete organization {}: {}", id, e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
