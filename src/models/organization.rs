use crate::DbPool;
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    pub id: i64,
    pub name: String,
    pub college_id: Option<i64>,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
pub struct NewOrganization {
    pub name: String,
    pub college_id: Option<i64>,
    pub description: Option<String>,
}

fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Organization> {
    Ok(Organization {
        id: row.get(0)?,
        name: row.get(1)?,
        college_id: row.get(2)?,
        description: row.get(3)?,
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
    })
}

/// List organizations, optionally filtered by a substring of the name or
/// description.
pub fn list(pool: &DbPool, q: Option<&str>) -> anyhow::Result<Vec<Organization>> {
    let conn = pool.get()?;
    let mut stmt = conn.prepare(
        r#"
        SELECT id, name, college_id, description, created_at, updated_at
        FROM organizations
        WHERE (?1 IS NULL
               OR name LIKE '%' || ?1 || '%'
               OR description LIKE '%' || ?1 || '%')
        ORDER BY name
        "#,
    )?;

    let organizations = stmt
        .query_map(rusqlite::params![q], from_row)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(organizations)
}

pub fn find(pool: &DbPool, id: i64) -> anyhow::Result<Option<Organization>> {
    let conn = pool.get()?;
    let organization = conn
        .query_row(
            r#"
            SELECT id, name, college_id, description, created_at, updated_at
            FROM organizations WHERE id = ?1
            "#,
            [id],
            from_row,
        )
        .ok();
    Ok(organization)
}

pub fn create(pool: &DbPool, new: &NewOrganization) -> anyhow::Result<Organization> {
    let conn = pool.get()?;
    let now = Utc::now().to_rfc3339();
    conn.execute(
        r#"
        INSERT INTO organizations (name, college_id, description, created_at, updated_at)
        VALUES (?1, ?2, ?3, ?4, ?4)
        "#,
        rusqlite::params![&new.name, new.college_id, &new.description, &now],
    )?;

    Ok(Organization {
        id: conn.last_insert_rowid(),
        name: new.name.clone(),
        college_id: new.college_id,
        description: new.description.clone(),
        created_at: now.clone(),
        updated_at: now,
    })
}

pub fn update(pool: &DbPool, id: i64, new: &NewOrganization) -> anyhow::Result<Option<Organization>> {
    let conn = pool.get()?;
    let now = Utc::now().to_rfc3339();
    let affected = conn.execute(
        r#"
        UPDATE organizations
        SET name = ?1, college_id = ?2, description = ?3, updated_at = ?4
        WHERE id = ?5
        "#,
        rusqlite::params![&new.name, new.college_id, &new.description, &now, id],
    )?;

    if affected == 0 {
        return Ok(None);
    }
    find(pool, id)
}

pub fn delete(pool: &DbPool, id: i64) -> anyhow::Result<()> {
    let conn = pool.get()?;
    conn.execute("DELETE FROM organizations WHERE id = ?1", [id])?;
    Ok(())
}
