use crate::DbPool;
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgMember {
    pub id: i64,
    pub student_id: i64,
    pub organization_id: i64,
    pub date_joined: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Display row for membership listings, carrying the joined student and
/// organization names alongside the raw ids.
#[derive(Debug, Clone, Serialize)]
pub struct OrgMemberRow {
    pub id: i64,
    pub student_id: i64,
    pub organization_id: i64,
    pub date_joined: String,
    pub student_name: String,
    pub organization_name: String,
}

#[derive(Debug, Deserialize)]
pub struct NewOrgMember {
    pub student_id: i64,
    pub organization_id: i64,
    /// ISO date, e.g. "2025-08-01".
    pub date_joined: String,
}

/// List memberships with student and organization names, newest first.
/// The filter matches the student's first or last name or the
/// organization name.
pub fn list(pool: &DbPool, q: Option<&str>) -> anyhow::Result<Vec<OrgMemberRow>> {
    let conn = pool.get()?;
    let mut stmt = conn.prepare(
        r#"
        SELECT om.id, om.student_id, om.organization_id, om.date_joined,
               s.firstname || ' ' || s.lastname AS student_name,
               o.name AS organization_name
        FROM org_members om
        JOIN students s ON s.id = om.student_id
        JOIN organizations o ON o.id = om.organization_id
        WHERE (?1 IS NULL
               OR s.firstname LIKE '%' || ?1 || '%'
               OR s.lastname LIKE '%' || ?1 || '%'
               OR o.name LIKE '%' || ?1 || '%')
        ORDER BY om.date_joined DESC
        "#,
    )?;

    let members = stmt
        .query_map(rusqlite::params![q], |row| {
            Ok(OrgMemberRow {
                id: row.get(0)?,
                student_id: row.get(1)?,
                organization_id: row.get(2)?,
                date_joined: row.get(3)?,
                student_name: row.get(4)?,
                organization_name: row.get(5)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(members)
}

fn from_row(row: &rusqlite::Row) -> rusqlite::Result<OrgMember> {
    Ok(OrgMember {
        id: row.get(0)?,
        student_id: row.get(1)?,
        organization_id: row.get(2)?,
        date_joined: row.get(3)?,
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
    })
}

pub fn find(pool: &DbPool, id: i64) -> anyhow::Result<Option<OrgMember>> {
    let conn = pool.get()?;
    let member = conn
        .query_row(
            r#"
            SELECT id, student_id, organization_id, date_joined, created_at, updated_at
            FROM org_members WHERE id = ?1
            "#,
            [id],
            from_row,
        )
        .ok();
    Ok(member)
}

pub fn create(pool: &DbPool, new: &NewOrgMember) -> anyhow::Result<OrgMember> {
    let conn = pool.get()?;
    let now = Utc::now().to_rfc3339();
    conn.execute(
        r#"
        INSERT INTO org_members (student_id, organization_id, date_joined, created_at, updated_at)
        VALUES (?1, ?2, ?3, ?4, ?4)
        "#,
        rusqlite::params![new.student_id, new.organization_id, &new.date_joined, &now],
    )?;

    Ok(OrgMember {
        id: conn.last_insert_rowid(),
        student_id: new.student_id,
        organization_id: new.organization_id,
        date_joined: new.date_joined.clone(),
        created_at: now.clone(),
        updated_at: now,
    })
}

pub fn update(pool: &DbPool, id: i64, new: &NewOrgMember) -> anyhow::Result<Option<OrgMember>> {
    let conn = pool.get()?;
    let now = Utc::now().to_rfc3339();
    let affected = conn.execute(
        r#"
        UPDATE org_members
        SET student_id = ?1, organization_id = ?2, date_joined = ?3, updated_at = ?4
        WHERE id = ?5
        "#,
        rusqlite::params![new.student_id, new.organization_id, &new.date_joined, &now, id],
    )?;

    if affected == 0 {
        return Ok(None);
    }
    find(pool, id)
}

pub fn delete(pool: &DbPool, id: i64) -> anyhow::Result<()> {
    let conn = pool.get()?;
    conn.execute("DELETE FROM org_members WHERE id = ?1", [id])?;
    Ok(())
}
