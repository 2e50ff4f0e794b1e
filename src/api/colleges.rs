use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::SearchQuery;
use crate::models::college::{self, College, NewCollege};
use crate::DbPool;

pub async fn list(
    State(pool): State<DbPool>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<College>>, StatusCode> {
    match college::list(&pool, query.q.as_deref()) {
        Ok(colleges) => Ok(Json(colleges)),
        Err(e) => {
            tracing::error!("Failed to list colleges: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn show(State(pool): State<DbPool>, Path(id): Path<i64>) -> Result<Json<College>, StatusCode> {
    match college::find(&pool, id) {
        Ok(Some(college)) => Ok(Json(college)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to fetch college {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn create(
    State(pool): State<DbPool>,
    Json(payload): Json<NewCollege>,
) -> Result<(StatusCode, Json<College>), StatusCode> {
    match college::create(&pool, &payload) {
        Ok(college) => Ok((StatusCode::CREATED, Json(college))),
        Err(e) => {
            tracing::error!("Failed to create college: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn update(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
    Json(payload): Json<NewCollege>,
) -> Result<Json<College>, StatusCode> {
    match college::update(&pool, id, &payload) {
        Ok(Some(college)) => Ok(Json(college)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to update college {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn destroy(State(pool): State<DbPool>, Path(id): Path<i64>) -> StatusCode {
    match college::delete(&pool, id) {
        Ok(()) => StatusCode::NO_CONTENT,
        Err(e) => {
            tracing::error!("Failed to delete college {}: {}", id, e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
