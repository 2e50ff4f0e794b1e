use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::SearchQuery;
use crate::models::student::{self, NewStudent, Student};
use crate::DbPool;

pub async fn list(
    State(pool): State<DbPool>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Student>>, StatusCode> {
    match student::list(&pool, query.q.as_deref()) {
        Ok(students) => Ok(Json(students)),
        Err(e) => {
            tracing::error!("Failed to list students: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn show(State(pool): State<DbPool>, Path(id): Path<i64>) -> Result<Json<Student>, StatusCode> {
    match student::find(&pool, id) {
        Ok(Some(student)) => Ok(Json(student)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to fetch student {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn create(
    State(pool): State<DbPool>,
    Json(payload): Json<NewStudent>,
) -> Result<(StatusCode, Json<Student>), StatusCode> {
    match student::create(&pool, &payload) {
        Ok(student) => Ok((StatusCode::CREATED, Json(student))),
        Err(e) => {
            tracing::error!("Failed to create student: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn update(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
    Json(payload): Json<NewStudent>,
) -> Result<Json<Student>, StatusCode> {
    match student::update(&pool, id, &payload) {
        Ok(Some(student)) => Ok(Json(student)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to update student {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn destroy(State(pool): State<DbPool>, Path(id): Path<i64>) -> StatusCode {
    match student::delete(&pool, id) {
        Ok(()) => StatusCode::NO_CONTENT,
        Err(e) => {
            tracing::error!("Failed to delete student {}: {}", id, e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
