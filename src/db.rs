use crate::config::Config;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use std::fs;
use std::path::Path;

pub type DbPool = Pool<SqliteConnectionManager>;

const SCHEMA: &str = r#"
PRAGMA journal_mode = WAL;
PRAGMA busy_timeout = 100;
PRAGMA synchronous = NORMAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS colleges (
    id INTEGER PRIMARY KEY,
    college_name TEXT NOT NULL UNIQUE,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS programs (
    id INTEGER PRIMARY KEY,
    prog_name TEXT NOT NULL,
    college_id INTEGER NOT NULL REFERENCES colleges(id) ON DELETE CASCADE,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_programs_college_id ON programs(college_id);

CREATE TABLE IF NOT EXISTS students (
    id INTEGER PRIMARY KEY,
    student_id TEXT NOT NULL UNIQUE,
    lastname TEXT NOT NULL,
    firstname TEXT NOT NULL,
    middlename TEXT,
    program_id INTEGER NOT NULL REFERENCES programs(id) ON DELETE CASCADE,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_students_program_id ON students(program_id);
CREATE INDEX IF NOT EXISTS idx_students_lastname ON students(lastname);

CREATE TABLE IF NOT EXISTS organizations (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    college_id INTEGER REFERENCES colleges(id) ON DELETE SET NULL,
    description TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_organizations_college_id ON organizations(college_id);

CREATE TABLE IF NOT EXISTS org_members (
    id INTEGER PRIMARY KEY,
    student_id INTEGER NOT NULL REFERENCES students(id) ON DELETE CASCADE,
    organization_id INTEGER NOT NULL REFERENCES organizations(id) ON DELETE CASCADE,
    date_joined TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_org_members_student_id ON org_members(student_id);
CREATE INDEX IF NOT EXISTS idx_org_members_organization_id ON org_members(organization_id);
CREATE INDEX IF NOT EXISTS idx_org_members_date_joined ON org_members(date_joined);

CREATE TABLE IF NOT EXISTS locations (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    city TEXT,
    country TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS incidents (
    id INTEGER PRIMARY KEY,
    location_id INTEGER NOT NULL REFERENCES locations(id) ON DELETE CASCADE,
    date_time TEXT NOT NULL,
    severity_level TEXT NOT NULL,
    description TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_incidents_location_id ON incidents(location_id);
CREATE INDEX IF NOT EXISTS idx_incidents_date_time ON incidents(date_time);
CREATE INDEX IF NOT EXISTS idx_incidents_severity ON incidents(severity_level);
"#;

pub fn init(config: &Config) -> anyhow::Result<DbPool> {
    // Ensure data directory exists
    if let Some(parent) = Path::new(&config.sqlite_path).parent() {
        fs::create_dir_all(parent)?;
    }

    let manager = SqliteConnectionManager::file(&config.sqlite_path);
    let pool = Pool::builder().max_size(10).build(manager)?;

    migrate(&pool)?;

    Ok(pool)
}

fn migrate(pool: &DbPool) -> anyhow::Result<()> {
    let conn = pool.get()?;
    conn.execute_batch(SCHEMA)?;
    tracing::debug!("Database schema initialized");
    Ok(())
}

pub fn get_db_size(pool: &DbPool) -> anyhow::Result<f64> {
    let conn = pool.get()?;
    let size: i64 = conn.query_row("SELECT page_count * page_size FROM pragma_page_count(), pragma_page_size()", [], |row| row.get(0))?;
    Ok(size as f64 / 1_048_576.0) // Convert to MB
}

/// Single-connection in-memory pool for tests. One connection keeps the
/// in-memory database alive across pool checkouts.
#[cfg(test)]
pub fn test_pool() -> DbPool {
    let manager = SqliteConnectionManager::memory();
    let pool = Pool::builder().max_size(1).build(manager).expect("memory pool");
    pool.get()
        .expect("memory conn")
        .execute_batch(SCHEMA)
        .expect("schema");
    pool
}
