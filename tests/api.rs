//! End-to-end tests: load fixture CSVs into a temporary database, then
//! drive the real router (and the real SQL templates) with oneshot requests.

use std::fs;
use std::path::{Path, PathBuf};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use citywell_api::config::AppConfig;
use citywell_api::{loader, routes, AppState};

fn manifest_path(rel: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(rel)
}

fn write_fixture_csvs(dir: &Path) {
    // city_info carries an extra trailing column the loader must ignore,
    // and is deliberately unsorted.
    fs::write(
        dir.join("city_info.csv"),
        "city_code,city_name,population,area,region,latitude,longitude,special_municipality,notes\n\
         B,Stonebridge,250000,310.5,North,37.2,127.1,No,second\n\
         A,Riverton,120000,145.2,South,36.5,127.8,No,first\n",
    )
    .unwrap();
    fs::write(
        dir.join("happiness_index.csv"),
        "city_code,year,special_municipality,happiness_ranking,happiness_score\n\
         A,2020,No,2,6.1\n\
         A,2021,No,1,6.8\n\
         B,2021,No,2,6.2\n",
    )
    .unwrap();
    fs::write(
        dir.join("city_suicide_rate.csv"),
        "city_code,gender,year,suicide_rate\n\
         A,Male,2020,32.5\n\
         A,Female,2020,15.1\n\
         A,Male,2021,30.2\n\
         B,Male,2020,28.9\n",
    )
    .unwrap();
    fs::write(
        dir.join("nation_suicide_rate.csv"),
        "year,age_group,suicide_death_count,crude_suicide_rate\n\
         2020,20-29,1471,19.2\n\
         2020,30-39,1680,24.1\n\
         2021,20-29,1575,20.8\n",
    )
    .unwrap();
    fs::write(
        dir.join("service_facility.csv"),
        "city_code,service_facility\n\
         A,Riverton Counseling Center\n\
         A,Riverton Mental Health Clinic\n\
         B,Stonebridge Wellness Center\n",
    )
    .unwrap();
    fs::write(
        dir.join("remote_facility.csv"),
        "city_code,counseling_unit\n\
         A,Mobile Unit 12\n",
    )
    .unwrap();
    fs::write(
        dir.join("social_welfare_spending.csv"),
        "city_code,year,spending\n\
         A,2020,812.4\n\
         A,2021,890.1\n\
         B,2020,640.0\n\
         B,2021,702.3\n",
    )
    .unwrap();
}

async fn loaded_config(tmp: &TempDir) -> AppConfig {
    let data_dir = tmp.path().join("data_csv");
    fs::create_dir_all(&data_dir).unwrap();
    write_fixture_csvs(&data_dir);

    let config = AppConfig {
        database_path: tmp.path().join("dashboard.db"),
        sql_dir: manifest_path("sql"),
        data_dir,
        static_dir: manifest_path("static"),
    };
    loader::load_all(&config).await.unwrap();
    config
}

fn app(config: AppConfig) -> Router {
    routes::router(AppState { config })
}

/// GET `uri` and parse the body as JSON.
async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

fn assert_close(value: &Value, expected: f64) {
    let actual = value.as_f64().unwrap();
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[tokio::test]
async fn cities_are_listed_sorted_by_name() {
    let tmp = TempDir::new().unwrap();
    let config = loaded_config(&tmp).await;

    let (status, body) = get(app(config), "/cities").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!([
            {"code": "A", "name": "Riverton"},
            {"code": "B", "name": "Stonebridge"}
        ])
    );
}

#[tokio::test]
async fn city_details_include_facility_counts() {
    let tmp = TempDir::new().unwrap();
    let config = loaded_config(&tmp).await;

    let (status, body) = get(app(config), "/city/A/details").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], "A");
    assert_eq!(body["name"], "Riverton");
    assert_eq!(body["population"], 120000);
    assert_eq!(body["region"], "South");
    assert_eq!(body["service_facilities"], 2);
    assert_eq!(body["counseling_units"], 1);
}

#[tokio::test]
async fn unknown_city_details_are_null_not_an_error() {
    let tmp = TempDir::new().unwrap();
    let config = loaded_config(&tmp).await;

    let (status, body) = get(app(config), "/city/ZZ/details").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn gender_trend_returns_only_the_requested_city() {
    let tmp = TempDir::new().unwrap();
    let config = loaded_config(&tmp).await;

    let (status, body) = get(app(config), "/city/A/gender").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["city"], "A");

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 3);
    // Fixture rates are unique per city, so B's 28.9 must not leak in.
    for point in data {
        let rate = point["suicide_rate"].as_f64().unwrap();
        assert!([32.5, 15.1, 30.2].contains(&rate));
    }
    // Ordered by year, then gender.
    assert_eq!(data[0]["year"], 2020);
    assert_eq!(data[0]["gender"], "Female");
    assert_eq!(data[2]["year"], 2021);
}

#[tokio::test]
async fn welfare_trend_returns_only_the_requested_city() {
    let tmp = TempDir::new().unwrap();
    let config = loaded_config(&tmp).await;

    let (status, body) = get(app(config), "/city/A/welfare").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["city"], "A");

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["year"], 2020);
    assert_close(&data[0]["spending"], 812.4);
    assert_eq!(data[1]["year"], 2021);
    assert_close(&data[1]["spending"], 890.1);
}

#[tokio::test]
async fn accessibility_map_counts_all_facility_kinds() {
    let tmp = TempDir::new().unwrap();
    let config = loaded_config(&tmp).await;

    let (status, body) = get(app(config), "/map/accessibility").await;
    assert_eq!(status, StatusCode::OK);

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);

    let riverton = &data[0];
    assert_eq!(riverton["code"], "A");
    // 2 service facilities + 1 remote counseling unit.
    assert_eq!(riverton["total_facilities"], 3);
    // 3 * 100_000 / 120_000, rounded to 2 decimals.
    assert_close(&riverton["facilities_per_100k"], 2.5);
}

#[tokio::test]
async fn resource_priority_joins_latest_happiness_with_average_rate() {
    let tmp = TempDir::new().unwrap();
    let config = loaded_config(&tmp).await;

    let (status, body) = get(app(config), "/chart/resource").await;
    assert_eq!(status, StatusCode::OK);

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);

    // Ordered by ranking: A took rank 1 in its latest year (2021).
    let first = &data[0];
    assert_eq!(first["code"], "A");
    assert_eq!(first["happiness_ranking"], 1);
    assert_close(&first["happiness_score"], 6.8);
    assert_close(&first["avg_suicide_rate"], (32.5 + 15.1 + 30.2) / 3.0);

    let second = &data[1];
    assert_eq!(second["code"], "B");
    assert_close(&second["avg_suicide_rate"], 28.9);
}

#[tokio::test]
async fn age_trend_lists_nationwide_rows_in_order() {
    let tmp = TempDir::new().unwrap();
    let config = loaded_config(&tmp).await;

    let (status, body) = get(app(config), "/chart/age").await;
    assert_eq!(status, StatusCode::OK);

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 3);
    assert_eq!(data[0]["year"], 2020);
    assert_eq!(data[0]["age_group"], "20-29");
    assert_eq!(data[0]["suicide_death_count"], 1471);
    assert_eq!(data[2]["year"], 2021);
}

#[tokio::test]
async fn nationwide_welfare_average_is_per_year() {
    let tmp = TempDir::new().unwrap();
    let config = loaded_config(&tmp).await;

    let (status, body) = get(app(config), "/chart/welfare-average").await;
    assert_eq!(status, StatusCode::OK);

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["year"], 2020);
    assert_close(&data[0]["avg_spending"], 726.2);
    assert_eq!(data[1]["year"], 2021);
    assert_close(&data[1]["avg_spending"], 796.2);
}

#[tokio::test]
async fn rerunning_the_loader_is_idempotent() {
    let tmp = TempDir::new().unwrap();
    let config = loaded_config(&tmp).await;

    let (_, before) = get(app(config.clone()), "/cities").await;
    loader::load_all(&config).await.unwrap();
    let (_, after) = get(app(config.clone()), "/cities").await;
    assert_eq!(before, after);

    let (_, map) = get(app(config), "/map/accessibility").await;
    assert_eq!(map["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn missing_template_is_a_500_and_the_service_keeps_running() {
    let tmp = TempDir::new().unwrap();
    let mut config = loaded_config(&tmp).await;

    // Point the template store at an empty directory.
    let empty_sql = tmp.path().join("empty_sql");
    fs::create_dir_all(&empty_sql).unwrap();
    config.sql_dir = empty_sql;

    let app = app(config);
    let (status, body) = get(app.clone(), "/city/A/gender").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].is_string());

    // The inline city-list query is unaffected.
    let (status, _) = get(app, "/cities").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn health_reports_ok() {
    let tmp = TempDir::new().unwrap();
    let config = loaded_config(&tmp).await;

    let (status, body) = get(app(config), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn index_page_is_served() {
    let tmp = TempDir::new().unwrap();
    let config = loaded_config(&tmp).await;

    let response = app(config)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));
}
