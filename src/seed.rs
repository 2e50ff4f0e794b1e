//! Demo dataset covering every chart: colleges with uneven org and program
//! counts, memberships spread across semesters, incidents spread across
//! months, severities, and countries.

use chrono::{Datelike, Utc};

use crate::models::{college, incident, org_member, organization, program, student};
use crate::DbPool;

pub fn run(pool: &DbPool) -> anyhow::Result<()> {
    let existing: i64 = pool
        .get()?
        .query_row("SELECT COUNT(*) FROM colleges", [], |row| row.get(0))?;
    if existing > 0 {
        anyhow::bail!("Database already contains data; seed expects an empty store");
    }

    let colleges = [
        "College of Engineering",
        "College of Sciences",
        "College of Nursing",
        "College of Business",
    ];
    let mut college_ids = Vec::new();
    for name in colleges {
        let c = college::create(pool, &college::NewCollege { college_name: name.into() })?;
        college_ids.push(c.id);
    }

    // (program, college index)
    let programs = [
        ("Computer Science", 0),
        ("Civil Engineering", 0),
        ("Electrical Engineering", 0),
        ("Biology", 1),
        ("Marine Science", 1),
        ("Nursing", 2),
        ("Accountancy", 3),
    ];
    let mut program_ids = Vec::new();
    for (name, college_idx) in programs {
        let p = program::create(
            pool,
            &program::NewProgram { prog_name: name.into(), college_id: college_ids[college_idx] },
        )?;
        program_ids.push(p.id);
    }

    // (org, college index) - engineering deliberately has the most orgs so
    // the radar and doughnut charts have an uneven profile
    let organizations = [
        ("Robotics Club", 0),
        ("Programming Guild", 0),
        ("Builders Society", 0),
        ("Science Circle", 1),
        ("Marine Explorers", 1),
        ("Student Nurses Association", 2),
        ("Junior Executives", 3),
    ];
    let mut organization_ids = Vec::new();
    for (name, college_idx) in organizations {
        let o = organization::create(
            pool,
            &organization::NewOrganization {
                name: name.into(),
                college_id: Some(college_ids[college_idx]),
                description: None,
            },
        )?;
        organization_ids.push(o.id);
    }

    // (lastname, firstname, program index)
    let students = [
        ("Reyes", "Maria", 0),
        ("Cruz", "Jose", 0),
        ("Santos", "Ana", 0),
        ("Garcia", "Luis", 1),
        ("Torres", "Elena", 2),
        ("Flores", "Ramon", 3),
        ("Navarro", "Carmen", 3),
        ("Domingo", "Paolo", 4),
        ("Aquino", "Isabel", 5),
        ("Velasco", "Miguel", 6),
    ];
    let mut student_ids = Vec::new();
    for (i, (last, first, program_idx)) in students.iter().enumerate() {
        let s = student::create(
            pool,
            &student::NewStudent {
                student_id: format!("2023-{:04}", i + 1),
                lastname: (*last).into(),
                firstname: (*first).into(),
                middlename: None,
                program_id: program_ids[*program_idx],
            },
        )?;
        student_ids.push(s.id);
    }

    // (student index, org index, date joined) - spread across semesters and
    // years so the trends chart shows several buckets
    let memberships = [
        (0, 0, "2023-02-10"),
        (1, 0, "2023-09-05"),
        (2, 0, "2024-01-20"),
        (0, 1, "2024-02-14"),
        (3, 1, "2024-08-30"),
        (4, 2, "2024-10-02"),
        (5, 3, "2024-03-18"),
        (6, 3, "2025-01-09"),
        (7, 4, "2025-02-11"),
        (8, 5, "2025-03-07"),
        (9, 6, "2025-07-15"),
    ];
    for (student_idx, org_idx, date_joined) in memberships {
        org_member::create(
            pool,
            &org_member::NewOrgMember {
                student_id: student_ids[student_idx],
                organization_id: organization_ids[org_idx],
                date_joined: date_joined.into(),
            },
        )?;
    }

    // (location, country)
    let locations = [
        ("Main Campus Hall", "Philippines"),
        ("Annex Building", "Philippines"),
        ("Exchange Campus", "Japan"),
        ("Partner Institute", "Korea"),
    ];
    let mut location_ids = Vec::new();
    for (name, country) in locations {
        let l = incident::create_location(
            pool,
            &incident::NewLocation { name: name.into(), city: None, country: country.into() },
        )?;
        location_ids.push(l.id);
    }

    // Incident dates land in the current year so the monthly and
    // top-country charts have data to show.
    let year = Utc::now().year();
    // (location index, month, day, severity)
    let incidents = [
        (0, 1, 12, "Minor"),
        (0, 2, 3, "Moderate"),
        (1, 2, 21, "Minor"),
        (0, 3, 9, "Major"),
        (1, 4, 17, "Moderate"),
        (2, 5, 5, "Minor"),
        (0, 6, 28, "Moderate"),
        (2, 7, 14, "Major"),
        (3, 8, 2, "Minor"),
        (1, 9, 23, "Minor"),
    ];
    for (location_idx, month, day, severity) in incidents {
        incident::create_incident(
            pool,
            &incident::NewIncident {
                location_id: location_ids[location_idx],
                date_time: format!("{year}-{month:02}-{day:02} 10:30:00"),
                severity_level: severity.into(),
                description: None,
            },
        )?;
    }

    tracing::info!(
        "Seeded {} colleges, {} programs, {} students, {} organizations, {} memberships, {} incidents",
        college_ids.len(),
        program_ids.len(),
        student_ids.len(),
        organization_ids.len(),
        memberships.len(),
        incidents.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{incident as incident_charts, org as org_charts};
    use crate::db;

    #[test]
    fn test_seed_populates_every_chart() {
        let pool = db::test_pool();
        run(&pool).unwrap();

        let radar = org_charts::org_count_per_college(&pool).unwrap();
        assert_eq!(radar.labels.len(), 7);
        assert!(radar.values[0] > 0);

        let trends = org_charts::member_trends(&pool).unwrap();
        assert!(trends.labels.len() >= 4);

        let severity = incident_charts::count_by_severity(&pool).unwrap();
        assert_eq!(severity.len(), 3);

        let year = Utc::now().year();
        let countries = incident_charts::top_country_monthly(&pool, year).unwrap();
        assert_eq!(countries.len(), 3);
        assert!(countries.contains_key("Philippines"));
    }

    #[test]
    fn test_seed_refuses_populated_store() {
        let pool = db::test_pool();
        run(&pool).unwrap();
        assert!(run(&pool).is_err());
    }
}
