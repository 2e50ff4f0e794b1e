//! Chart-data endpoints. Each handler runs one aggregation against the
//! store and returns its JSON payload; a query failure surfaces as a 500.

use std::collections::BTreeMap;

use axum::{extract::State, http::StatusCode, Json};
use chrono::{Datelike, Utc};

use crate::charts::{incident, org, MemberSeries, MonthBuckets, ProgramSeries, RadarSeries, StudentProgramSeries};
use crate::DbPool;

/// Org count per college, top 7 padded with placeholders (radar chart).
pub async fn org_participation(State(pool): State<DbPool>) -> Result<Json<RadarSeries>, StatusCode> {
    match org::org_count_per_college(&pool) {
        Ok(series) => Ok(Json(series)),
        Err(e) => {
            tracing::error!("Org participation query failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Student and membership counts per program, top 10 (bubble chart).
pub async fn student_programs(State(pool): State<DbPool>) -> Result<Json<StudentProgramSeries>, StatusCode> {
    match org::student_program_breakdown(&pool) {
        Ok(series) => Ok(Json(series)),
        Err(e) => {
            tracing::error!("Student program query failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Member count per organization, top 5 (horizontal bar chart).
pub async fn top_organizations(State(pool): State<DbPool>) -> Result<Json<MemberSeries>, StatusCode> {
    match org::top_organizations(&pool) {
        Ok(series) => Ok(Json(series)),
        Err(e) => {
            tracing::error!("Top organizations query failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Membership counts per year and semester (stacked bar chart).
pub async fn member_trends(State(pool): State<DbPool>) -> Result<Json<MemberSeries>, StatusCode> {
    match org::member_trends(&pool) {
        Ok(series) => Ok(Json(series)),
        Err(e) => {
            tracing::error!("Member trends query failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Program count per college (doughnut chart).
pub async fn program_distribution(State(pool): State<DbPool>) -> Result<Json<ProgramSeries>, StatusCode> {
    match org::program_distribution(&pool) {
        Ok(series) => Ok(Json(series)),
        Err(e) => {
            tracing::error!("Program distribution query failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Incident count per severity level (pie chart).
pub async fn severity_breakdown(State(pool): State<DbPool>) -> Result<Json<BTreeMap<String, i64>>, StatusCode> {
    match incident::count_by_severity(&pool) {
        Ok(counts) => Ok(Json(counts)),
        Err(e) => {
            tracing::error!("Severity breakdown query failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Incident count per month of the current year (line chart). The year is
/// taken at request time.
pub async fn monthly_incidents(
    State(pool): State<DbPool>,
) -> Result<Json<serde_json::Map<String, serde_json::Value>>, StatusCode> {
    let year = Utc::now().year();
    match incident::monthly_counts(&pool, year) {
        Ok(counts) => Ok(Json(counts)),
        Err(e) => {
            tracing::error!("Monthly incident query failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Month-by-month incidents for the current year's top 3 countries
/// (multi-line chart).
pub async fn top_country_incidents(
    State(pool): State<DbPool>,
) -> Result<Json<BTreeMap<String, MonthBuckets>>, StatusCode> {
    let year = Utc::now().year();
    match incident::top_country_monthly(&pool, year) {
        Ok(series) => Ok(Json(series)),
        Err(e) => {
            tracing::error!("Top country query failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Month-by-month incidents per severity level (grouped bar chart).
pub async fn severity_monthly_incidents(
    State(pool): State<DbPool>,
) -> Result<Json<BTreeMap<String, MonthBuckets>>, StatusCode> {
    match incident::severity_monthly(&pool) {
        Ok(series) => Ok(Json(series)),
        Err(e) => {
            tracing::error!("Severity by month query failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
