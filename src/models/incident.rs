use crate::DbPool;
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub name: String,
    pub city: Option<String>,
    pub country: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Incident {
    pub id: i64,
    pub location_id: i64,
    pub date_time: String,
    pub severity_level: String,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
pub struct NewLocation {
    pub name: String,
    pub city: Option<String>,
    pub country: String,
}

#[derive(Debug, Deserialize)]
pub struct NewIncident {
    pub location_id: i64,
    /// "YYYY-MM-DD HH:MM:SS".
    pub date_time: String,
    pub severity_level: String,
    pub description: Option<String>,
}

pub fn create_location(pool: &DbPool, new: &NewLocation) -> anyhow::Result<Location> {
    let conn = pool.get()?;
    let now = Utc::now().to_rfc3339();
    conn.execute(
        "INSERT INTO locations (name, city, country, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?4)",
        rusqlite::params![&new.name, &new.city, &new.country, &now],
    )?;

    Ok(Location {
        id: conn.last_insert_rowid(),
        name: new.name.clone(),
        city: new.city.clone(),
        country: new.country.clone(),
        created_at: now.clone(),
        updated_at: now,
    })
}

pub fn create_incident(pool: &DbPool, new: &NewIncident) -> anyhow::Result<Incident> {
    let conn = pool.get()?;
    let now = Utc::now().to_rfc3339();
    conn.execute(
        r#"
        INSERT INTO incidents (location_id, date_time, severity_level, description, created_at, updated_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?5)
        "#,
        rusqlite::params![
            new.location_id,
            &new.date_time,
            &new.severity_level,
            &new.description,
            &now
        ],
    )?;

    Ok(Incident {
        id: conn.last_insert_rowid(),
        location_id: new.location_id,
        date_time: new.date_time.clone(),
        severity_level: new.severity_level.clone(),
        description: new.description.clone(),
        created_at: now.clone(),
        updated_at: now,
    })
}
