use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::SearchQuery;
use crate::models::program::{self, NewProgram, Program};
use crate::DbPool;

pub async fn list(
    State(pool): State<DbPool>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Program>>, StatusCode> {
    match program::list(&pool, query.q.as_deref()) {
        Ok(programs) => Ok(Json(programs)),
        Err(e) => {
            tracing::error!("Failed to list programs: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn show(State(pool): State<DbPool>, Path(id): Path<i64>) -> Result<Json<Program>, StatusCode> {
    match program::find(&pool, id) {
        Ok(Some(program)) => Ok(Json(program)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to fetch program {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn create(
    State(pool): State<DbPool>,
    Json(payload): Json<NewProgram>,
) -> Result<(StatusCode, Json<Program>), StatusCode> {
    match program::create(&pool, &payload) {
        Ok(program) => Ok((StatusCode::CREATED, Json(program))),
        Err(e) => {
            tracing::error!("Failed to create program: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn update(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
    Json(payload): Json<NewProgram>,
) -> Result<Json<Program>, StatusCode> {
    match program::update(&pool, id, &payload) {
        Ok(Some(program)) => Ok(Json(program)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to update program {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn destroy(State(pool): State<DbPool>, Path(id): Path<i64>) -> StatusCode {
    match program::delete(&pool, id) {
        Ok(()) => StatusCode::NO_CONTENT,
        Err(e) => {
            tracing::error!("Failed to delete program {}: {}", id, e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
