use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::SearchQuery;
use crate::models::org_member::{self, NewOrgMember, OrgMember, OrgMemberRow};
use crate::DbPool;

pub async fn list(
    State(pool): State<DbPool>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<OrgMemberRow>>, StatusCode> {
    match org_member::list(&pool, query.q.as_deref()) {
        Ok(members) => Ok(Json(members)),
        Err(e) => {
            tracing::error!("Failed to list org members: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn show(State(pool): State<DbPool>, Path(id): Path<i64>) -> Result<Json<OrgMember>, StatusCode> {
    match org_member::find(&pool, id) {
        Ok(Some(member)) => Ok(Json(member)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to fetch org member {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn create(
    State(pool): State<DbPool>,
    Json(payload): Json<NewOrgMember>,
) -> Result<(StatusCode, Json<OrgMember>), StatusCode> {
    match org_member::create(&pool, &payload) {
        Ok(member) => Ok((StatusCode::CREATED, Json(member))),
        Err(e) => {
            tracing::error!("Failed to create org member: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn update(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
    Json(payload): Json<NewOrgMember>,
) -> Result<Json<OrgMember>, StatusCode> {
    match org_member::update(&pool, id, &payload) {
        Ok(Some(member)) => Ok(Json(member)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to update org member {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn destroy(State(pool): State<DbPool>, Path(id): Path<i64>) -> StatusCode {
    match org_member::delete(&pool, id) {
        Ok(()) => StatusCode::NO_CONTENT,
        Err(e) => {
            tracing::error!("Failed to delete org member {}: {}", id, e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
