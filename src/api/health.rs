use axum::{extract::State, Json};
use serde::Serialize;
use std::time::Instant;

use crate::{db, DbPool};

static START_TIME: std::sync::OnceLock<Instant> = std::sync::OnceLock::new();

pub fn init_start_time() {
    START_TIME.get_or_init(Instant::now);
}

#[derive(Serialize, Default)]
pub struct RecordCounts {
    pub students: i64,
    pub organizations: i64,
    pub incidents: i64,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub db_size_mb: f64,
    pub uptime_seconds: u64,
    pub records: RecordCounts,
}

fn record_counts(pool: &DbPool) -> anyhow::Result<RecordCounts> {
    let conn = pool.get()?;
    let counts = conn.query_row(
        r#"
        SELECT (SELECT COUNT(*) FROM students),
               (SELECT COUNT(*) FROM organizations),
               (SELECT COUNT(*) FROM incidents)
        "#,
        [],
        |row| {
            Ok(RecordCounts {
                students: row.get(0)?,
                organizations: row.get(1)?,
                incidents: row.get(2)?,
            })
        },
    )?;
    Ok(counts)
}

pub async fn health_handler(State(pool): State<DbPool>) -> Json<HealthResponse> {
    let db_size_mb = db::get_db_size(&pool).unwrap_or(0.0);
    let uptime_seconds = START_TIME
        .get()
        .map(|t| t.elapsed().as_secs())
        .unwrap_or(0);
    let records = record_counts(&pool).unwrap_or_default();

    Json(HealthResponse {
        status: "ok".to_string(),
        db_size_mb,
        uptime_seconds,
        records,
    })
}
