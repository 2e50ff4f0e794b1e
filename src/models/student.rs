use crate::DbPool;
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub student_id: String,
    pub lastname: String,
    pub firstname: String,
    pub middlename: Option<String>,
    pub program_id: i64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
pub struct NewStudent {
    pub student_id: String,
    pub lastname: String,
    pub firstname: String,
    pub middlename: Option<String>,
    pub program_id: i64,
}

fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Student> {
    Ok(Student {
        id: row.get(0)?,
        student_id: row.get(1)?,
        lastname: row.get(2)?,
        firstname: row.get(3)?,
        middlename: row.get(4)?,
        program_id: row.get(5)?,
        created_at: row.get(6)?,
        updated_at: row.get(7)?,
    })
}

/// List students, optionally filtered by a substring across the name
/// columns and the student number.
pub fn list(pool: &DbPool, q: Option<&str>) -> anyhow::Result<Vec<Student>> {
    let conn = pool.get()?;
    let mut stmt = conn.prepare(
        r#"
        SELECT id, student_id, lastname, firstname, middlename, program_id, created_at, updated_at
        FROM students
        WHERE (?1 IS NULL
               OR firstname LIKE '%' || ?1 || '%'
               OR lastname LIKE '%' || ?1 || '%'
               OR middlename LIKE '%' || ?1 || '%'
               OR student_id LIKE '%' || ?1 || '%')
        ORDER BY lastname, firstname
        "#,
    )?;

    let students = stmt
        .query_map(rusqlite::params![q], from_row)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(students)
}

pub fn find(pool: &DbPool, id: i64) -> anyhow::Result<Option<Student>> {
    let conn = pool.get()?;
    let student = conn
        .query_row(
            r#"
            SELECT id, student_id, lastname, firstname, middlename, program_id, created_at, updated_at
            FROM students WHERE id = ?1
            "#,
            [id],
            from_row,
        )
        .ok();
    Ok(student)
}

pub fn create(pool: &DbPool, new: &NewStudent) -> anyhow::Result<Student> {
    let conn = pool.get()?;
    let now = Utc::now().to_rfc3339();
    conn.execute(
        r#"
        INSERT INTO students (student_id, lastname, firstname, middlename, program_id, created_at, updated_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)
        "#,
        rusqlite::params![
            &new.student_id,
            &new.lastname,
            &new.firstname,
            &new.middlename,
            new.program_id,
            &now
        ],
    )?;

    Ok(Student {
        id: conn.last_insert_rowid(),
        student_id: new.student_id.clone(),
        lastname: new.lastname.clone(),
        firstname: new.firstname.clone(),
        middlename: new.middlename.clone(),
        program_id: new.program_id,
        created_at: now.clone(),
        updated_at: now,
    })
}

pub fn update(pool: &DbPool, id: i64, new: &NewStudent) -> anyhow::Result<Option<Student>> {
    let conn = pool.get()?;
    let now = Utc::now().to_rfc3339();
    let affected = conn.execute(
        r#"
        UPDATE students
        SET student_id = ?1, lastname = ?2, firstname = ?3, middlename = ?4, program_id = ?5, updated_at = ?6
        WHERE id = ?7
        "#,
        rusqlite::params![
            &new.student_id,
            &new.lastname,
            &new.firstname,
            &new.middlename,
            new.program_id,
            &now,
            id
        ],
    )?;

    if affected == 0 {
        return Ok(None);
    }
    find(pool, id)
}

pub fn delete(pool: &DbPool, id: i64) -> anyhow::Result<()> {
    let conn = pool.get()?;
    conn.execute("DELETE FROM students WHERE id = ?1", [id])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::models::{college, program};

    fn fixture_program(pool: &DbPool) -> i64 {
        let c = college::create(pool, &college::NewCollege { college_name: "Engineering".into() }).unwrap();
        program::create(
            pool,
            &program::NewProgram { prog_name: "Computer Science".into(), college_id: c.id },
        )
        .unwrap()
        .id
    }

    #[test]
    fn test_search_matches_any_name_column() {
        let pool = db::test_pool();
        let program_id = fixture_program(&pool);

        create(
            &pool,
            &NewStudent {
                student_id: "2025-0001".into(),
                lastname: "Reyes".into(),
                firstname: "Maria".into(),
                middlename: Some("Santos".into()),
                program_id,
            },
        )
        .unwrap();
        create(
            &pool,
            &NewStudent {
                student_id: "2025-0002".into(),
                lastname: "Cruz".into(),
                firstname: "Jose".into(),
                middlename: None,
                program_id,
            },
        )
        .unwrap();

        assert_eq!(list(&pool, Some("Reyes")).unwrap().len(), 1);
        assert_eq!(list(&pool, Some("Santos")).unwrap().len(), 1);
        assert_eq!(list(&pool, Some("2025-0002")).unwrap().len(), 1);
        assert_eq!(list(&pool, Some("nowhere")).unwrap().len(), 0);
        assert_eq!(list(&pool, None).unwrap().len(), 2);
    }

    #[test]
    fn test_list_orders_by_lastname() {
        let pool = db::test_pool();
        let program_id = fixture_program(&pool);

        for (number, last) in [("2025-0001", "Reyes"), ("2025-0002", "Cruz")] {
            create(
                &pool,
                &NewStudent {
                    student_id: number.into(),
                    lastname: last.into(),
                    firstname: "Ana".into(),
                    middlename: None,
                    program_id,
                },
            )
            .unwrap();
        }

        let students = list(&pool, None).unwrap();
        assert_eq!(students[0].lastname, "Cruz");
        assert_eq!(students[1].lastname, "Reyes");
    }
}
