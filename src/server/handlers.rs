//! Request handlers. Each one runs a single query through the shared readers.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Html;
use axum::Json;
use chrono::NaiveDate;
use serde::Serialize;

use super::state::AppState;
use crate::error::Result;
use crate::models::{DateRange, Measurement, Station, TemperatureSummary};
use crate::utils::constants::*;
use crate::utils::parse_date;

pub async fn welcome() -> Html<String> {
    let temp_base = ROUTE_TEMP_FROM.trim_end_matches("/:start");
    Html(format!(
        "Welcome to Hawaii API!<br/>\
         Available Routes:<br/>\
         {ROUTE_PRECIPITATION}<br/>\
         {ROUTE_STATIONS}<br/>\
         {ROUTE_TOBS}<br/>\
         {temp_base}/start_date<br/>\
         {temp_base}/start_date/end_date<br/>"
    ))
}

pub async fn health() -> &'static str {
    "OK"
}

#[derive(Debug, Serialize)]
pub struct ServerStatus {
    pub status: &'static str,
    pub uptime_seconds: u64,
    pub station: String,
    pub window: DateRange,
}

pub async fn status(State(state): State<Arc<AppState>>) -> Json<ServerStatus> {
    Json(ServerStatus {
        status: "running",
        uptime_seconds: state.start_time.elapsed().as_secs(),
        station: state.scope.station.clone(),
        window: state.scope.window,
    })
}

pub async fn precipitation(
    State(state): State<Arc<AppState>>,
) -> Result<Json<BTreeMap<NaiveDate, Option<f64>>>> {
    let precipitation = state.measurements.precipitation(&state.scope.window).await?;
    Ok(Json(precipitation))
}

pub async fn stations(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Station>>> {
    let stations = state.stations.read_stations().await?;
    Ok(Json(stations))
}

pub async fn temperature_observations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Measurement>>> {
    let scope = &state.scope;
    let observations = state
        .measurements
        .observations(&scope.station, &scope.window)
        .await?;
    Ok(Json(observations))
}

pub async fn temperature_from(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> Result<Json<TemperatureSummary>> {
    let range = DateRange::starting(parse_date(&start)?);
    let stats = state.measurements.temperature_stats(&range).await?;
    Ok(Json(stats.into()))
}

pub async fn temperature_between(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<TemperatureSummary>> {
    let range = DateRange::between(parse_date(&start)?, parse_date(&end)?)?;
    let stats = state.measurements.temperature_stats(&range).await?;
    Ok(Json(stats.into()))
}
