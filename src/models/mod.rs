// src/models/mod.rs

use serde::Serialize;
use sqlx::FromRow;

// ───────────────────────────────────────
// Query result rows
// ───────────────────────────────────────
/// Entry in the city dropdown.
#[derive(Debug, Serialize, FromRow)]
pub struct CityRef {
    pub code: String,
    pub name: String,
}

/// Detail panel for one city, including facility counts.
#[derive(Debug, Serialize, FromRow)]
pub struct CityDetails {
    pub code: String,
    pub name: String,
    pub population: i64,
    pub area: f64,
    pub region: String,
    pub latitude: f64,
    pub longitude: f64,
    pub special_municipality: String,
    pub service_facilities: i64,
    pub counseling_units: i64,
}

/// One point of the gender-specific SMR trend.
#[derive(Debug, Serialize, FromRow)]
pub struct GenderSmrPoint {
    pub gender: String,
    pub year: i64,
    pub suicide_rate: f64,
}

#[derive(Debug, Serialize, FromRow)]
pub struct WelfarePoint {
    pub year: i64,
    pub spending: f64,
}

/// Map marker: facility coverage for one city.
#[derive(Debug, Serialize, FromRow)]
pub struct AccessibilityRow {
    pub code: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub population: i64,
    pub total_facilities: i64,
    pub facilities_per_100k: f64,
}

/// Scatter point: latest happiness standing vs average suicide rate.
#[derive(Debug, Serialize, FromRow)]
pub struct ResourcePriorityRow {
    pub code: String,
    pub name: String,
    pub happiness_ranking: i64,
    pub happiness_score: f64,
    pub avg_suicide_rate: f64,
}

/// Nationwide suicide figures for one year and age group.
#[derive(Debug, Serialize, FromRow)]
pub struct AgeTrendRow {
    pub year: i64,
    pub age_group: String,
    pub suicide_death_count: i64,
    pub crude_suicide_rate: f64,
}

#[derive(Debug, Serialize, FromRow)]
pub struct WelfareAvgRow {
    pub year: i64,
    pub avg_spending: f64,
}

// ───────────────────────────────────────
// Response envelopes
// ───────────────────────────────────────
/// `{"city": ..., "data": [...]}` for per-city chart endpoints.
#[derive(Debug, Serialize)]
pub struct CitySeries<T> {
    pub city: String,
    pub data: Vec<T>,
}

/// `{"data": [...]}` for nationwide chart endpoints.
#[derive(Debug, Serialize)]
pub struct Series<T> {
    pub data: Vec<T>,
}
