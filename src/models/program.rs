use crate::DbPool;
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    pub id: i64,
    pub prog_name: String,
    pub college_id: i64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
pub struct NewProgram {
    pub prog_name: String,
    pub college_id: i64,
}

fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Program> {
    Ok(Program {
        id: row.get(0)?,
        prog_name: row.get(1)?,
        college_id: row.get(2)?,
        created_at: row.get(3)?,
        updated_at: row.get(4)?,
    })
}

pub fn list(pool: &DbPool, q: Option<&str>) -> anyhow::Result<Vec<Program>> {
    let conn = pool.get()?;
    let mut stmt = conn.prepare(
        r#"
        SELECT id, prog_name, college_id, created_at, updated_at
        FROM programs
        WHERE (?1 IS NULL OR prog_name LIKE '%' || ?1 || '%')
        ORDER BY prog_name
        "#,
    )?;

    let programs = stmt
        .query_map(rusqlite::params![q], from_row)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(programs)
}

pub fn find(pool: &DbPool, id: i64) -> anyhow::Result<Option<Program>> {
    let conn = pool.get()?;
    let program = conn
        .query_row(
            "SELECT id, prog_name, college_id, created_at, updated_at FROM programs WHERE id = ?1",
            [id],
            from_row,
        )
        .ok();
    Ok(program)
}

pub fn create(pool: &DbPool, new: &NewProgram) -> anyhow::Result<Program> {
    let conn = pool.get()?;
    let now = Utc::now().to_rfc3339();
    conn.execute(
        "INSERT INTO programs (prog_name, college_id, created_at, updated_at) VALUES (?1, ?2, ?3, ?3)",
        rusqlite::params![&new.prog_name, new.college_id, &now],
    )?;

    Ok(Program {
        id: conn.last_insert_rowid(),
        prog_name: new.prog_name.clone(),
        college_id: new.college_id,
        created_at: now.clone(),
        updated_at: now,
    })
}

pub fn update(pool: &DbPool, id: i64, new: &NewProgram) -> anyhow::Result<Option<Program>> {
    let conn = pool.get()?;
    let now = Utc::now().to_rfc3339();
    let affected = conn.execute(
        "UPDATE programs SET prog_name = ?1, college_id = ?2, updated_at = ?3 WHERE id = ?4",
        rusqlite::params![&new.prog_name, new.college_id, &now, id],
    )?;

    if affected == 0 {
        return Ok(None);
    }
    find(pool, id)
}

pub fn delete(pool: &DbPool, id: i64) -> anyhow::Result<()> {
    let conn = pool.get()?;
    conn.execute("DELETE FROM programs WHERE id = ?1", [id])?;
    Ok(())
}
