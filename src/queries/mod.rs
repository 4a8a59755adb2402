// src/queries/mod.rs
//
// One function per chart. Each opens its own connection, loads the named
// SQL template (the city list is inline), binds at most one city code, and
// maps rows to the structs in `models`. The connection drops at scope exit.

use anyhow::Result;

use crate::config::AppConfig;
use crate::db;
use crate::models::{
    AccessibilityRow, AgeTrendRow, CityDetails, CityRef, GenderSmrPoint, ResourcePriorityRow,
    WelfareAvgRow, WelfarePoint,
};
use crate::templates;

/// City dropdown. Inline: a simple, universal list query.
pub async fn fetch_cities(config: &AppConfig) -> Result<Vec<CityRef>> {
    let mut conn = db::connect(&config.database_path).await?;
    let rows = sqlx::query_as::<_, CityRef>(
        r#"
        SELECT DISTINCT city_code AS code, city_name AS name
        FROM CityInfo
        ORDER BY city_name
        "#,
    )
    .fetch_all(&mut conn)
    .await?;
    Ok(rows)
}

/// Detail panel for one city; `None` when the code matches nothing.
pub async fn fetch_city_details(config: &AppConfig, city_code: &str) -> Result<Option<CityDetails>> {
    let sql = templates::load(&config.sql_dir, "city_details")?;
    let mut conn = db::connect(&config.database_path).await?;
    let row = sqlx::query_as::<_, CityDetails>(&sql)
        .bind(city_code)
        .fetch_optional(&mut conn)
        .await?;
    Ok(row)
}

pub async fn fetch_gender_smr(config: &AppConfig, city_code: &str) -> Result<Vec<GenderSmrPoint>> {
    let sql = templates::load(&config.sql_dir, "gender_smr_trend")?;
    let mut conn = db::connect(&config.database_path).await?;
    let rows = sqlx::query_as::<_, GenderSmrPoint>(&sql)
        .bind(city_code)
        .fetch_all(&mut conn)
        .await?;
    Ok(rows)
}

pub async fn fetch_welfare_spending(
    config: &AppConfig,
    city_code: &str,
) -> Result<Vec<WelfarePoint>> {
    let sql = templates::load(&config.sql_dir, "welfare_spending")?;
    let mut conn = db::connect(&config.database_path).await?;
    let rows = sqlx::query_as::<_, WelfarePoint>(&sql)
        .bind(city_code)
        .fetch_all(&mut conn)
        .await?;
    Ok(rows)
}

pub async fn fetch_service_accessibility(config: &AppConfig) -> Result<Vec<AccessibilityRow>> {
    let sql = templates::load(&config.sql_dir, "service_accessibility")?;
    let mut conn = db::connect(&config.database_path).await?;
    let rows = sqlx::query_as::<_, AccessibilityRow>(&sql)
        .fetch_all(&mut conn)
        .await?;
    Ok(rows)
}

pub async fn fetch_resource_priority(config: &AppConfig) -> Result<Vec<ResourcePriorityRow>> {
    let sql = templates::load(&config.sql_dir, "resource_priority_map")?;
    let mut conn = db::connect(&config.database_path).await?;
    let rows = sqlx::query_as::<_, ResourcePriorityRow>(&sql)
        .fetch_all(&mut conn)
        .await?;
    Ok(rows)
}

pub async fn fetch_age_trend(config: &AppConfig) -> Result<Vec<AgeTrendRow>> {
    let sql = templates::load(&config.sql_dir, "age_trend_analysis")?;
    let mut conn = db::connect(&config.database_path).await?;
    let rows = sqlx::query_as::<_, AgeTrendRow>(&sql)
        .fetch_all(&mut conn)
        .await?;
    Ok(rows)
}

pub async fn fetch_nationwide_welfare_avg(config: &AppConfig) -> Result<Vec<WelfareAvgRow>> {
    let sql = templates::load(&config.sql_dir, "nationwide_welfare_avg")?;
    let mut conn = db::connect(&config.database_path).await?;
    let rows = sqlx::query_as::<_, WelfareAvgRow>(&sql)
        .fetch_all(&mut conn)
        .await?;
    Ok(rows)
}
