//! In-memory copy of the dataset schema with a handful of real rows.

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::error::Result;

const SCHEMA: [&str; 2] = [
    "CREATE TABLE station (
        id INTEGER PRIMARY KEY,
        station TEXT,
        name TEXT,
        latitude FLOAT,
        longitude FLOAT,
        elevation FLOAT
    )",
    "CREATE TABLE measurement (
        id INTEGER PRIMARY KEY,
        station TEXT,
        date TEXT,
        prcp FLOAT,
        tobs FLOAT
    )",
];

const STATIONS: [(&str, &str, f64, f64, f64); 3] = [
    ("USC00519397", "WAIKIKI 717.2, HI US", 21.2716, -157.8168, 3.0),
    ("USC00513117", "KANEOHE 838.1, HI US", 21.4234, -157.8015, 14.6),
    ("USC00519281", "WAIHEE 837.5, HI US", 21.45167, -157.84889, 32.9),
];

const MEASUREMENTS: [(&str, &str, Option<f64>, f64); 8] = [
    ("USC00519397", "2016-08-22", Some(0.0), 80.0),
    ("USC00519397", "2016-08-23", Some(0.0), 81.0),
    ("USC00519397", "2017-08-23", Some(0.0), 81.0),
    ("USC00513117", "2016-08-23", Some(0.15), 76.0),
    ("USC00519281", "2016-08-23", Some(1.79), 77.0),
    ("USC00519281", "2017-01-01", None, 62.0),
    ("USC00519281", "2017-08-18", Some(0.06), 79.0),
    ("USC00519281", "2010-01-01", Some(0.08), 65.0),
];

pub async fn empty_pool() -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;

    for statement in SCHEMA {
        sqlx::query(statement).execute(&pool).await?;
    }

    Ok(pool)
}

pub async fn seeded_pool() -> Result<SqlitePool> {
    let pool = empty_pool().await?;

    for (station, name, latitude, longitude, elevation) in STATIONS {
        sqlx::query(
            "INSERT INTO station (station, name, latitude, longitude, elevation)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(station)
        .bind(name)
        .bind(latitude)
        .bind(longitude)
        .bind(elevation)
        .execute(&pool)
        .await?;
    }

    for (station, date, prcp, tobs) in MEASUREMENTS {
        sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?1, ?2, ?3, ?4)")
            .bind(station)
            .bind(date)
            .bind(prcp)
            .bind(tobs)
            .execute(&pool)
            .await?;
    }

    Ok(pool)
}
