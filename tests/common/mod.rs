use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use tempfile::TempDir;
use tower::ServiceExt;

use hawaii_climate::config::{AppConfig, DatabaseSettings};
use hawaii_climate::readers::Database;
use hawaii_climate::server::{self, AppState};

/// Temporary copy of the dataset. Dropping it removes the file.
pub struct TestDatabase {
    _dir: TempDir,
    pub path: PathBuf,
}

pub async fn create_database() -> TestDatabase {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("hawaii.sqlite");

    let pool = SqlitePool::connect_with(
        SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true),
    )
    .await
    .expect("Failed to create database");

    sqlx::query(
        "CREATE TABLE station (
            id INTEGER PRIMARY KEY,
            station TEXT,
            name TEXT,
            latitude FLOAT,
            longitude FLOAT,
            elevation FLOAT
        )",
    )
    .execute(&pool)
    .await
    .unwrap();

    sqlx::query(
        "CREATE TABLE measurement (
            id INTEGER PRIMARY KEY,
            station TEXT,
            date TEXT,
            prcp FLOAT,
            tobs FLOAT
        )",
    )
    .execute(&pool)
    .await
    .unwrap();

    sqlx::query(
        "INSERT INTO station (station, name, latitude, longitude, elevation) VALUES
            ('USC00519397', 'WAIKIKI 717.2, HI US', 21.2716, -157.8168, 3.0),
            ('USC00513117', 'KANEOHE 838.1, HI US', 21.4234, -157.8015, 14.6),
            ('USC00519281', 'WAIHEE 837.5, HI US', 21.45167, -157.84889, 32.9)",
    )
    .execute(&pool)
    .await
    .unwrap();

    sqlx::query(
        "INSERT INTO measurement (station, date, prcp, tobs) VALUES
            ('USC00519397', '2016-08-22', 0.0, 80.0),
            ('USC00519397', '2016-08-23', 0.0, 81.0),
            ('USC00519397', '2017-08-23', 0.0, 81.0),
            ('USC00513117', '2016-08-23', 0.15, 76.0),
            ('USC00519281', '2016-08-23', 1.79, 77.0),
            ('USC00519281', '2017-01-01', NULL, 62.0),
            ('USC00519281', '2017-08-18', 0.06, 79.0),
            ('USC00519281', '2010-01-01', 0.08, 65.0)",
    )
    .execute(&pool)
    .await
    .unwrap();

    pool.close().await;

    TestDatabase { _dir: dir, path }
}

/// Router over a read-only connection to `db`, scoped as in `config`.
pub async fn app(db: &TestDatabase, mut config: AppConfig) -> Router {
    config.database = DatabaseSettings {
        path: db.path.clone(),
        max_connections: 2,
    };

    let pool = Database::connect(&config.database)
        .await
        .expect("Failed to open database");
    let state = AppState::build(pool, &config.analysis)
        .await
        .expect("Failed to build state");

    server::router(Arc::new(state), config.server.cors)
}

/// Sends a GET with extra request headers; returns status, response headers and body.
pub async fn get_with_headers(
    app: &Router,
    uri: &str,
    headers: &[(&str, &str)],
) -> (StatusCode, HeaderMap, Vec<u8>) {
    let mut request = Request::builder().uri(uri);
    for (name, value) in headers {
        request = request.header(*name, *value);
    }

    let response = app
        .clone()
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, body.to_vec())
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let (status, _, body) = get_with_headers(app, uri, &[]).await;
    (status, body)
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(app, uri).await;
    let value = serde_json::from_slice(&body).expect("Response is not JSON");
    (status, value)
}
