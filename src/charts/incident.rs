//! Chart aggregations over the incident log: severity breakdowns, monthly
//! counts for the current year, and per-country/per-severity month series.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::charts::shape;
use crate::DbPool;

/// Month-keyed counts, "01" through "12", always fully populated.
pub type MonthBuckets = BTreeMap<String, i64>;

const MIN_COUNTRY_SERIES: usize = 3;

/// Incident count per severity level, as a flat label → count object.
pub fn count_by_severity(pool: &DbPool) -> anyhow::Result<BTreeMap<String, i64>> {
    let conn = pool.get()?;
    let mut stmt = conn.prepare(
        r#"
        SELECT severity_level, COUNT(*) AS incident_count
        FROM incidents
        GROUP BY severity_level
        "#,
    )?;

    let counts = stmt
        .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)))?
        .collect::<Result<BTreeMap<_, _>, _>>()?;

    Ok(counts)
}

/// Incident count per month for the given calendar year, keyed by
/// three-letter month abbreviation in calendar order. Every month is
/// present, zero when no incidents were recorded.
pub fn monthly_counts(pool: &DbPool, year: i32) -> anyhow::Result<Map<String, Value>> {
    let conn = pool.get()?;
    let mut stmt = conn.prepare(
        r#"
        SELECT CAST(strftime('%m', date_time) AS INTEGER) AS month
        FROM incidents
        WHERE strftime('%Y', date_time) = ?1
        "#,
    )?;

    let months: Vec<u32> = stmt
        .query_map([year.to_string()], |row| Ok(row.get::<_, i64>(0)? as u32))?
        .collect::<Result<Vec<_>, _>>()?;

    let mut counts = [0i64; 12];
    for month in months {
        counts[(month - 1) as usize] += 1;
    }

    let mut result = Map::new();
    for (i, count) in counts.iter().enumerate() {
        result.insert(shape::month_abbr(i as u32 + 1).to_string(), Value::from(*count));
    }

    Ok(result)
}

/// Month-by-month incident counts for the top 3 countries of the given
/// calendar year. Every series carries all 12 month buckets; when fewer
/// than 3 countries have incidents, synthetic "Country {n}" all-zero series
/// fill the gap.
pub fn top_country_monthly(pool: &DbPool, year: i32) -> anyhow::Result<BTreeMap<String, MonthBuckets>> {
    let conn = pool.get()?;
    let mut stmt = conn.prepare(
        r#"
        SELECT l.country, strftime('%m', i.date_time) AS month, COUNT(i.id) AS incident_count
        FROM incidents i
        JOIN locations l ON i.location_id = l.id
        WHERE l.country IN (
            SELECT l_top.country
            FROM incidents i_top
            JOIN locations l_top ON i_top.location_id = l_top.id
            WHERE strftime('%Y', i_top.date_time) = ?1
            GROUP BY l_top.country
            ORDER BY COUNT(i_top.id) DESC
            LIMIT 3
        )
          AND strftime('%Y', i.date_time) = ?1
        GROUP BY l.country, month
        ORDER BY l.country, month
        "#,
    )?;

    let rows: Vec<(String, String, i64)> = stmt
        .query_map([year.to_string()], |row| {
            Ok((row.get(0)?, row.get(1)?, row.get(2)?))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let mut result: BTreeMap<String, MonthBuckets> = BTreeMap::new();
    for (country, month, count) in rows {
        result
            .entry(country)
            .or_insert_with(shape::zero_filled_months)
            .insert(month, count);
    }

    while result.len() < MIN_COUNTRY_SERIES {
        let placeholder = format!("Country {}", result.len() + 1);
        result.insert(placeholder, shape::zero_filled_months());
    }

    Ok(result)
}

/// Month-by-month incident counts per severity level, all years. Every
/// severity series carries all 12 month buckets.
pub fn severity_monthly(pool: &DbPool) -> anyhow::Result<BTreeMap<String, MonthBuckets>> {
    let conn = pool.get()?;
    let mut stmt = conn.prepare(
        r#"
        SELECT severity_level, strftime('%m', date_time) AS month, COUNT(id) AS incident_count
        FROM incidents
        GROUP BY severity_level, month
        "#,
    )?;

    let rows: Vec<(String, String, i64)> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?
        .collect::<Result<Vec<_>, _>>()?;

    let mut result: BTreeMap<String, MonthBuckets> = BTreeMap::new();
    for (severity, month, count) in rows {
        result
            .entry(severity)
            .or_insert_with(shape::zero_filled_months)
            .insert(month, count);
    }

    Ok(result)
}
