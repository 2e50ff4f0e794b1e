//! Chart aggregations over the record entities: college participation,
//! program breakdowns, organization membership counts and trends.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::charts::shape::{self, Semester};
use crate::DbPool;

/// One grouped-count row: a category label and how many records fell in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub label: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RadarSeries {
    pub labels: Vec<String>,
    pub values: Vec<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudentProgramSeries {
    pub labels: Vec<String>,
    pub student_counts: Vec<i64>,
    pub org_memberships: Vec<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MemberSeries {
    pub labels: Vec<String>,
    pub member_counts: Vec<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgramSeries {
    pub labels: Vec<String>,
    pub program_counts: Vec<i64>,
}

const MIN_COLLEGE_ROWS: usize = 7;

/// Organization count per college, top 7 by count, padded with placeholder
/// rows so the radar chart always has exactly 7 axes.
pub fn org_count_per_college(pool: &DbPool) -> anyhow::Result<RadarSeries> {
    let conn = pool.get()?;
    let mut stmt = conn.prepare(
        r#"
        SELECT c.college_name, COUNT(DISTINCT o.id) AS org_count
        FROM colleges c
        LEFT JOIN organizations o ON c.id = o.college_id
        GROUP BY c.college_name
        ORDER BY org_count DESC
        LIMIT 7
        "#,
    )?;

    let mut rows: Vec<CategoryCount> = stmt
        .query_map([], |row| {
            Ok(CategoryCount {
                label: row.get(0)?,
                count: row.get(1)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    shape::pad_to_minimum(&mut rows, MIN_COLLEGE_ROWS);

    Ok(RadarSeries {
        labels: rows.iter().map(|r| r.label.clone()).collect(),
        values: rows.iter().map(|r| r.count).collect(),
    })
}

/// Student count and organization-membership count per program, top 10
/// programs by student count.
pub fn student_program_breakdown(pool: &DbPool) -> anyhow::Result<StudentProgramSeries> {
    let conn = pool.get()?;
    let mut stmt = conn.prepare(
        r#"
        SELECT p.prog_name,
               COUNT(s.id) AS student_count,
               COUNT(DISTINCT om.id) AS org_membership_count
        FROM programs p
        LEFT JOIN students s ON p.id = s.program_id
        LEFT JOIN org_members om ON s.id = om.student_id
        GROUP BY p.prog_name
        ORDER BY student_count DESC
        LIMIT 10
        "#,
    )?;

    let rows: Vec<(String, i64, i64)> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(StudentProgramSeries {
        labels: rows.iter().map(|r| r.0.clone()).collect(),
        student_counts: rows.iter().map(|r| r.1).collect(),
        org_memberships: rows.iter().map(|r| r.2).collect(),
    })
}

/// Member count per organization, top 5.
pub fn top_organizations(pool: &DbPool) -> anyhow::Result<MemberSeries> {
    let conn = pool.get()?;
    let mut stmt = conn.prepare(
        r#"
        SELECT o.name, COUNT(om.id) AS member_count
        FROM organizations o
        LEFT JOIN org_members om ON o.id = om.organization_id
        GROUP BY o.name
        ORDER BY member_count DESC
        LIMIT 5
        "#,
    )?;

    let rows: Vec<CategoryCount> = stmt
        .query_map([], |row| {
            Ok(CategoryCount {
                label: row.get(0)?,
                count: row.get(1)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(MemberSeries {
        labels: rows.iter().map(|r| r.label.clone()).collect(),
        member_counts: rows.iter().map(|r| r.count).collect(),
    })
}

/// Membership counts bucketed by calendar year and semester, labeled
/// "<year> <semester>". Ordered by year, then semester label.
pub fn member_trends(pool: &DbPool) -> anyhow::Result<MemberSeries> {
    let conn = pool.get()?;
    let mut stmt = conn.prepare(
        r#"
        SELECT CAST(strftime('%Y', date_joined) AS INTEGER) AS year,
               CAST(strftime('%m', date_joined) AS INTEGER) AS month
        FROM org_members
        "#,
    )?;

    let joins: Vec<(i32, u32)> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get::<_, i64>(1)? as u32)))?
        .collect::<Result<Vec<_>, _>>()?;

    let mut buckets: BTreeMap<(i32, Semester), i64> = BTreeMap::new();
    for (year, month) in joins {
        *buckets.entry((year, Semester::from_month(month))).or_insert(0) += 1;
    }

    Ok(MemberSeries {
        labels: buckets
            .keys()
            .map(|(year, semester)| format!("{year} {}", semester.label()))
            .collect(),
        member_counts: buckets.values().copied().collect(),
    })
}

/// Program count per college, every college included, sorted by count.
pub fn program_distribution(pool: &DbPool) -> anyhow::Result<ProgramSeries> {
    let conn = pool.get()?;
    let mut stmt = conn.prepare(
        r#"
        SELECT c.college_name, COUNT(p.id) AS program_count
        FROM colleges c
        LEFT JOIN programs p ON c.id = p.college_id
        GROUP BY c.college_name
        ORDER BY program_count DESC
        "#,
    )?;

    let rows: Vec<CategoryCount> = stmt
        .query_map([], |row| {
            Ok(CategoryCount {
                label: row.get(0)?,
                count: row.get(1)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ProgramSeries {
        labels: rows.iter().map(|r| r.label.clone()).collect(),
        program_counts: rows.iter().map(|r| r.count).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    const TS: &str = "2025-01-01T00:00:00Z";

    fn insert_college(pool: &DbPool, name: &str) -> i64 {
        let conn = pool.get().unwrap();
        conn.execute(
            "INSERT INTO colleges (college_name, created_at, updated_at) VALUES (?1, ?2, ?2)",
            rusqlite::params![name, TS],
        )
        .unwrap();
        conn.last_insert_rowid()
    }

    fn insert_program(pool: &DbPool, name: &str, college_id: i64) -> i64 {
        let conn = pool.get().unwrap();
        conn.execute(
            "INSERT INTO programs (prog_name, college_id, created_at, updated_at) VALUES (?1, ?2, ?3, ?3)",
            rusqlite::params![name, college_id, TS],
        )
        .unwrap();
        conn.last_insert_rowid()
    }

    fn insert_student(pool: &DbPool, number: &str, program_id: i64) -> i64 {
        let conn = pool.get().unwrap();
        conn.execute(
            r#"
            INSERT INTO students (student_id, lastname, firstname, program_id, created_at, updated_at)
            VALUES (?1, 'Doe', 'Jan', ?2, ?3, ?3)
            "#,
            rusqlite::params![number, program_id, TS],
        )
        .unwrap();
        conn.last_insert_rowid()
    }

    fn insert_org(pool: &DbPool, name: &str, college_id: Option<i64>) -> i64 {
        let conn = pool.get().unwrap();
        conn.execute(
            "INSERT INTO organizations (name, college_id, created_at, updated_at) VALUES (?1, ?2, ?3, ?3)",
            rusqlite::params![name, college_id, TS],
        )
        .unwrap();
        conn.last_insert_rowid()
    }

    fn insert_member(pool: &DbPool, student_id: i64, organization_id: i64, date_joined: &str) {
        let conn = pool.get().unwrap();
        conn.execute(
            r#"
            INSERT INTO org_members (student_id, organization_id, date_joined, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?4)
            "#,
            rusqlite::params![student_id, organization_id, date_joined, TS],
        )
        .unwrap();
    }

    #[test]
    fn test_org_count_per_college_pads_to_seven() {
        let pool = db::test_pool();
        let eng = insert_college(&pool, "Engineering");
        let nur = insert_college(&pool, "Nursing");
        insert_org(&pool, "Robotics Club", Some(eng));
        insert_org(&pool, "Builders Guild", Some(eng));
        insert_org(&pool, "Care Circle", Some(nur));

        let series = org_count_per_college(&pool).unwrap();
        assert_eq!(series.labels.len(), 7);
        assert_eq!(series.values.len(), 7);
        assert_eq!(series.labels[0], "Engineering");
        assert_eq!(series.values[0], 2);
        assert_eq!(series.labels[1], "Nursing");
        for i in 2..7 {
            assert_eq!(series.labels[i], "Placeholder");
            assert_eq!(series.values[i], 0);
        }
    }

    #[test]
    fn test_org_count_per_college_empty_store_is_all_placeholder() {
        let pool = db::test_pool();
        let series = org_count_per_college(&pool).unwrap();
        assert_eq!(series.labels, vec!["Placeholder"; 7]);
        assert_eq!(series.values, vec![0; 7]);
    }

    #[test]
    fn test_student_program_breakdown_parallel_arrays() {
        let pool = db::test_pool();
        let college = insert_college(&pool, "Engineering");
        let cs = insert_program(&pool, "Computer Science", college);
        let ce = insert_program(&pool, "Civil Engineering", college);
        let org = insert_org(&pool, "Robotics Club", Some(college));

        let a = insert_student(&pool, "2025-0001", cs);
        let b = insert_student(&pool, "2025-0002", cs);
        insert_student(&pool, "2025-0003", ce);
        insert_member(&pool, a, org, "2025-02-10");
        insert_member(&pool, b, org, "2025-03-11");

        let series = student_program_breakdown(&pool).unwrap();
        assert_eq!(series.labels[0], "Computer Science");
        assert_eq!(series.student_counts[0], 2);
        assert_eq!(series.org_memberships[0], 2);
        assert_eq!(series.labels[1], "Civil Engineering");
        assert_eq!(series.student_counts[1], 1);
        assert_eq!(series.org_memberships[1], 0);
        assert_eq!(series.labels.len(), series.student_counts.len());
        assert_eq!(series.labels.len(), series.org_memberships.len());
    }

    #[test]
    fn test_top_organizations_limit_and_order() {
        let pool = db::test_pool();
        let college = insert_college(&pool, "Engineering");
        let program = insert_program(&pool, "Computer Science", college);
        let students: Vec<i64> = (0..5)
            .map(|i| insert_student(&pool, &format!("2025-{i:04}"), program))
            .collect();

        for (i, name) in ["A", "B", "C", "D", "E", "F"].iter().enumerate() {
            let org = insert_org(&pool, name, Some(college));
            // org "A" gets 5 members, "B" gets 4, and so on down to 0
            for student in students.iter().take(5usize.saturating_sub(i)) {
                insert_member(&pool, *student, org, "2025-02-10");
            }
        }

        let series = top_organizations(&pool).unwrap();
        assert_eq!(series.labels.len(), 5);
        assert_eq!(series.labels[0], "A");
        assert_eq!(series.member_counts[0], 5);
        assert_eq!(series.member_counts, vec![5, 4, 3, 2, 1]);
        assert!(!series.labels.contains(&"F".to_string()));
    }

    #[test]
    fn test_top_organizations_empty_store_yields_empty_arrays() {
        let pool = db::test_pool();
        let series = top_organizations(&pool).unwrap();
        assert!(series.labels.is_empty());
        assert!(series.member_counts.is_empty());
    }

    #[test]
    fn test_member_trends_buckets_by_year_and_semester() {
        let pool = db::test_pool();
        let college = insert_college(&pool, "Engineering");
        let program = insert_program(&pool, "Computer Science", college);
        let org = insert_org(&pool, "Robotics Club", Some(college));

        let dates = ["2024-03-15", "2024-05-02", "2024-09-20", "2025-01-10"];
        for (i, date) in dates.iter().enumerate() {
            let s = insert_student(&pool, &format!("2025-{i:04}"), program);
            insert_member(&pool, s, org, date);
        }

        let series = member_trends(&pool).unwrap();
        // Fall sorts before Spring within a year, matching the label sort.
        assert_eq!(series.labels, vec!["2024 Fall", "2024 Spring", "2025 Spring"]);
        assert_eq!(series.member_counts, vec![1, 2, 1]);
    }

    #[test]
    fn test_program_distribution_counts_every_college() {
        let pool = db::test_pool();
        let eng = insert_college(&pool, "Engineering");
        let nur = insert_college(&pool, "Nursing");
        insert_college(&pool, "Arts");
        insert_program(&pool, "Computer Science", eng);
        insert_program(&pool, "Civil Engineering", eng);
        insert_program(&pool, "Midwifery", nur);

        let series = program_distribution(&pool).unwrap();
        assert_eq!(series.labels.len(), 3);
        assert_eq!(series.labels[0], "Engineering");
        assert_eq!(series.program_counts[0], 2);
        assert_eq!(*series.program_counts.last().unwrap(), 0);
    }

    #[test]
    fn test_aggregators_are_idempotent() {
        let pool = db::test_pool();
        let college = insert_college(&pool, "Engineering");
        insert_program(&pool, "Computer Science", college);
        insert_org(&pool, "Robotics Club", Some(college));

        let first = org_count_per_college(&pool).unwrap();
        let second = org_count_per_college(&pool).unwrap();
        assert_eq!(first.labels, second.labels);
        assert_eq!(first.values, second.values);
    }
}
