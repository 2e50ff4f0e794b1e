use crate::DbPool;
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct College {
    pub id: i64,
    pub college_name: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
pub struct NewCollege {
    pub college_name: String,
}

fn from_row(row: &rusqlite::Row) -> rusqlite::Result<College> {
    Ok(College {
        id: row.get(0)?,
        college_name: row.get(1)?,
        created_at: row.get(2)?,
        updated_at: row.get(3)?,
    })
}

/// List colleges, optionally filtered by a name substring.
pub fn list(pool: &DbPool, q: Option<&str>) -> anyhow::Result<Vec<College>> {
    let conn = pool.get()?;
    let mut stmt = conn.prepare(
        r#"
        SELECT id, college_name, created_at, updated_at
        FROM colleges
        WHERE (?1 IS NULL OR college_name LIKE '%' || ?1 || '%')
        ORDER BY college_name
        "#,
    )?;

    let colleges = stmt
        .query_map(rusqlite::params![q], from_row)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(colleges)
}

pub fn find(pool: &DbPool, id: i64) -> anyhow::Result<Option<College>> {
    let conn = pool.get()?;
    let college = conn
        .query_row(
            "SELECT id, college_name, created_at, updated_at FROM colleges WHERE id = ?1",
            [id],
            from_row,
        )
        .ok();
    Ok(college)
}

pub fn create(pool: &DbPool, new: &NewCollege) -> anyhow::Result<College> {
    let conn = pool.get()?;
    let now = Utc::now().to_rfc3339();
    conn.execute(
        "INSERT INTO colleges (college_name, created_at, updated_at) VALUES (?1, ?2, ?2)",
        rusqlite::params![&new.college_name, &now],
    )?;

    Ok(College {
        id: conn.last_insert_rowid(),
        college_name: new.college_name.clone(),
        created_at: now.clone(),
        updated_at: now,
    })
}

pub fn update(pool: &DbPool, id: i64, new: &NewCollege) -> anyhow::Result<Option<College>> {
    let conn = pool.get()?;
    let now = Utc::now().to_rfc3339();
    let affected = conn.execute(
        "UPDATE colleges SET college_name = ?1, updated_at = ?2 WHERE id = ?3",
        rusqlite::params![&new.college_name, &now, id],
    )?;

    if affected == 0 {
        return Ok(None);
    }
    find(pool, id)
}

pub fn delete(pool: &DbPool, id: i64) -> anyhow::Result<()> {
    let conn = pool.get()?;
    conn.execute("DELETE FROM colleges WHERE id = ?1", [id])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    #[test]
    fn test_create_find_update_delete() {
        let pool = db::test_pool();

        let created = create(&pool, &NewCollege { college_name: "Engineering".into() }).unwrap();
        assert_eq!(created.college_name, "Engineering");

        let found = find(&pool, created.id).unwrap().unwrap();
        assert_eq!(found.id, created.id);

        let updated = update(
            &pool,
            created.id,
            &NewCollege { college_name: "Engineering and Technology".into() },
        )
        .unwrap()
        .unwrap();
        assert_eq!(updated.college_name, "Engineering and Technology");

        delete(&pool, created.id).unwrap();
        assert!(find(&pool, created.id).unwrap().is_none());
    }

    #[test]
    fn test_update_missing_returns_none() {
        let pool = db::test_pool();
        let result = update(&pool, 999, &NewCollege { college_name: "Ghost".into() }).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_list_filters_by_name_substring() {
        let pool = db::test_pool();
        create(&pool, &NewCollege { college_name: "College of Engineering".into() }).unwrap();
        create(&pool, &NewCollege { college_name: "College of Nursing".into() }).unwrap();

        let all = list(&pool, None).unwrap();
        assert_eq!(all.len(), 2);

        let filtered = list(&pool, Some("Nurs")).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].college_name, "College of Nursing");
    }
}
