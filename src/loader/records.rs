// src/loader/records.rs

use serde::Deserialize;

use super::{Dataset, InsertQuery};

// One record struct per source CSV. Field names double as the header-name
// projection; columns absent here are dropped at deserialization.

#[derive(Debug, Deserialize)]
pub struct CityInfoRecord {
    pub city_code: String,
    pub city_name: String,
    pub population: i64,
    pub area: f64,
    pub region: String,
    pub latitude: f64,
    pub longitude: f64,
    pub special_municipality: String,
}

impl Dataset for CityInfoRecord {
    const TABLE: &'static str = "CityInfo";
    const SOURCE_FILE: &'static str = "city_info.csv";
    const CREATE: &'static str = r#"
        CREATE TABLE CityInfo (
            city_code            TEXT,
            city_name            TEXT,
            population           INTEGER,
            area                 REAL,
            region               TEXT,
            latitude             REAL,
            longitude            REAL,
            special_municipality TEXT
        )
    "#;
    const INSERT: &'static str = r#"
        INSERT INTO CityInfo
            (city_code, city_name, population, area, region, latitude, longitude, special_municipality)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
    "#;

    fn bind<'q>(&self, query: InsertQuery<'q>) -> InsertQuery<'q> {
        query
            .bind(self.city_code.clone())
            .bind(self.city_name.clone())
            .bind(self.population)
            .bind(self.area)
            .bind(self.region.clone())
            .bind(self.latitude)
            .bind(self.longitude)
            .bind(self.special_municipality.clone())
    }
}

#[derive(Debug, Deserialize)]
pub struct HappinessRecord {
    pub city_code: String,
    pub year: i64,
    pub special_municipality: String,
    pub happiness_ranking: i64,
    pub happiness_score: f64,
}

impl Dataset for HappinessRecord {
    const TABLE: &'static str = "HappinessIndex";
    const SOURCE_FILE: &'static str = "happiness_index.csv";
    const CREATE: &'static str = r#"
        CREATE TABLE HappinessIndex (
            city_code            TEXT,
            year                 INTEGER,
            special_municipality TEXT,
            happiness_ranking    INTEGER,
            happiness_score      REAL
        )
    "#;
    const INSERT: &'static str = r#"
        INSERT INTO HappinessIndex
            (city_code, year, special_municipality, happiness_ranking, happiness_score)
        VALUES (?1, ?2, ?3, ?4, ?5)
    "#;

    fn bind<'q>(&self, query: InsertQuery<'q>) -> InsertQuery<'q> {
        query
            .bind(self.city_code.clone())
            .bind(self.year)
            .bind(self.special_municipality.clone())
            .bind(self.happiness_ranking)
            .bind(self.happiness_score)
    }
}

#[derive(Debug, Deserialize)]
pub struct CitySuicideRecord {
    pub city_code: String,
    pub gender: String,
    pub year: i64,
    pub suicide_rate: f64,
}

impl Dataset for CitySuicideRecord {
    const TABLE: &'static str = "CitySuicideRate";
    const SOURCE_FILE: &'static str = "city_suicide_rate.csv";
    const CREATE: &'static str = r#"
        CREATE TABLE CitySuicideRate (
            city_code    TEXT,
            gender       TEXT,
            year         INTEGER,
            suicide_rate REAL
        )
    "#;
    const INSERT: &'static str = r#"
        INSERT INTO CitySuicideRate (city_code, gender, year, suicide_rate)
        VALUES (?1, ?2, ?3, ?4)
    "#;

    fn bind<'q>(&self, query: InsertQuery<'q>) -> InsertQuery<'q> {
        query
            .bind(self.city_code.clone())
            .bind(self.gender.clone())
            .bind(self.year)
            .bind(self.suicide_rate)
    }
}

#[derive(Debug, Deserialize)]
pub struct NationSuicideRecord {
    pub year: i64,
    pub age_group: String,
    pub suicide_death_count: i64,
    pub crude_suicide_rate: f64,
}

impl Dataset for NationSuicideRecord {
    const TABLE: &'static str = "NationSuicideRate";
    const SOURCE_FILE: &'static str = "nation_suicide_rate.csv";
    const CREATE: &'static str = r#"
        CREATE TABLE NationSuicideRate (
            year                INTEGER,
            age_group           TEXT,
            suicide_death_count INTEGER,
            crude_suicide_rate  REAL
        )
    "#;
    const INSERT: &'static str = r#"
        INSERT INTO NationSuicideRate (year, age_group, suicide_death_count, crude_suicide_rate)
        VALUES (?1, ?2, ?3, ?4)
    "#;

    fn bind<'q>(&self, query: InsertQuery<'q>) -> InsertQuery<'q> {
        query
            .bind(self.year)
            .bind(self.age_group.clone())
            .bind(self.suicide_death_count)
            .bind(self.crude_suicide_rate)
    }
}

#[derive(Debug, Deserialize)]
pub struct ServiceFacilityRecord {
    pub city_code: String,
    pub service_facility: String,
}

impl Dataset for ServiceFacilityRecord {
    const TABLE: &'static str = "ServiceFacility";
    const SOURCE_FILE: &'static str = "service_facility.csv";
    const CREATE: &'static str = r#"
        CREATE TABLE ServiceFacility (
            city_code        TEXT,
            service_facility TEXT
        )
    "#;
    const INSERT: &'static str = r#"
        INSERT INTO ServiceFacility (city_code, service_facility) VALUES (?1, ?2)
    "#;

    fn bind<'q>(&self, query: InsertQuery<'q>) -> InsertQuery<'q> {
        query
            .bind(self.city_code.clone())
            .bind(self.service_facility.clone())
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoteFacilityRecord {
    pub city_code: String,
    pub counseling_unit: String,
}

impl Dataset for RemoteFacilityRecord {
    const TABLE: &'static str = "RemoteFacility";
    const SOURCE_FILE: &'static str = "remote_facility.csv";
    const CREATE: &'static str = r#"
        CREATE TABLE RemoteFacility (
            city_code       TEXT,
            counseling_unit TEXT
        )
    "#;
    const INSERT: &'static str = r#"
        INSERT INTO RemoteFacility (city_code, counseling_unit) VALUES (?1, ?2)
    "#;

    fn bind<'q>(&self, query: InsertQuery<'q>) -> InsertQuery<'q> {
        query
            .bind(self.city_code.clone())
            .bind(self.counseling_unit.clone())
    }
}

#[derive(Debug, Deserialize)]
pub struct WelfareSpendingRecord {
    pub city_code: String,
    pub year: i64,
    pub spending: f64,
}

impl Dataset for WelfareSpendingRecord {
    const TABLE: &'static str = "SocialWelfareSpending";
    const SOURCE_FILE: &'static str = "social_welfare_spending.csv";
    const CREATE: &'static str = r#"
        CREATE TABLE SocialWelfareSpending (
            city_code TEXT,
            year      INTEGER,
            spending  REAL
        )
    "#;
    const INSERT: &'static str = r#"
        INSERT INTO SocialWelfareSpending (city_code, year, spending) VALUES (?1, ?2, ?3)
    "#;

    fn bind<'q>(&self, query: InsertQuery<'q>) -> InsertQuery<'q> {
        query
            .bind(self.city_code.clone())
            .bind(self.year)
            .bind(self.spending)
    }
}
