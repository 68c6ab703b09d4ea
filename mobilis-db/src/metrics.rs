use std::{
    error::Error,
    fmt,
    hash::{Hash, Hasher},
};

use async_trait::async_trait;
use chrono::DateTime;
use log::debug;
use rustc_hash::FxHasher;
use sqlx::Row;

use mobilis_model::assessment::Assessment;
use mobilis_model::goal::{GoalEntry, GoalRecommendation};
use mobilis_model::metrics::{
    BmiResult, BodyFatResult, CalorieRecommendation, MacroRange, NutritionRecord,
    HEALTHY_BMI_RANGE,
};
use mobilis_model::profile::Measurement;

use crate::connection::Connection;

#[derive(Debug)]
pub enum RepositoryError {
    Database(sqlx::Error),
    Corrupt(String),
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for RepositoryError {}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        RepositoryError::Database(err)
    }
}

/// Stable reference tying a metrics row to its measurement row, derived by
/// hashing the intake time and the raw inputs.
fn measurement_ref(recorded_at: i64, measurement: &Measurement) -> Vec<u8> {
    let mut hasher = FxHasher::default();
    recorded_at.hash(&mut hasher);
    measurement.height.to_bits().hash(&mut hasher);
    measurement.weight.to_bits().hash(&mut hasher);
    measurement.age.hash(&mut hasher);
    measurement.gender.hash(&mut hasher);
    measurement.activity_level.hash(&mut hasher);
    measurement.neck.to_bits().hash(&mut hasher);
    measurement.waist.to_bits().hash(&mut hasher);
    measurement.hip.map(f64::to_bits).hash(&mut hasher);
    hasher.finish().to_le_bytes().to_vec()
}

#[mockall::automock]
#[async_trait]
pub trait MetricsRepository: Send + Sync {
    async fn store_assessment(&self, assessment: &Assessment) -> Result<(), RepositoryError>;
    async fn fetch_assessments(&self) -> Result<Vec<Assessment>, RepositoryError>;
    async fn fetch_goal_entries(&self) -> Result<Vec<GoalEntry>, RepositoryError>;
    async fn fetch_nutrition_records(&self) -> Result<Vec<NutritionRecord>, RepositoryError>;
}

#[derive(Clone)]
pub struct MetricsRepositoryImpl {
    connection: Connection,
}

impl MetricsRepositoryImpl {
    pub fn new(connection: Connection) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl MetricsRepository for MetricsRepositoryImpl {
    async fn store_assessment(&self, assessment: &Assessment) -> Result<(), RepositoryError> {
        let recorded_at = assessment.recorded_at.and_utc().timestamp();
        let measurement = &assessment.measurement;
        let reference = measurement_ref(recorded_at, measurement);

        let mut conn = self.connection.lock().await;

        debug!("Storing measurement");
        sqlx::query(
            "INSERT OR REPLACE INTO measurements
             (measurement_ref, recorded_at, height, weight, age, gender, activity_level, neck, waist, hip)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&reference)
        .bind(recorded_at)
        .bind(measurement.height)
        .bind(measurement.weight)
        .bind(i64::from(measurement.age))
        .bind(measurement.gender.to_string())
        .bind(measurement.activity_level.to_string())
        .bind(measurement.neck)
        .bind(measurement.waist)
        .bind(measurement.hip)
        .execute(&mut *conn)
        .await?;

        debug!("Storing computed metrics");
        sqlx::query(
            "INSERT OR REPLACE INTO metrics
             (measurement_ref, bmi, health, body_fat, body_fat_mass, lean_body_mass,
              goal, goal_name, bmi_category, body_fat_category, reasoning,
              bmr, tdee, protein_min, protein_max, carbs_min, carbs_max, fats_min, fats_max)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&reference)
        .bind(assessment.bmi.bmi)
        .bind(&assessment.bmi.health)
        .bind(assessment.body_fat.body_fat)
        .bind(assessment.body_fat.body_fat_mass)
        .bind(assessment.body_fat.lean_body_mass)
        .bind(assessment.goal.goal.to_string())
        .bind(&assessment.goal.goal_name)
        .bind(assessment.goal.bmi_category.to_string())
        .bind(assessment.goal.body_fat_category.to_string())
        .bind(&assessment.goal.reasoning)
        .bind(assessment.calories.bmr)
        .bind(assessment.calories.tdee)
        .bind(assessment.calories.protein.min)
        .bind(assessment.calories.protein.max)
        .bind(assessment.calories.carbs.min)
        .bind(assessment.calories.carbs.max)
        .bind(assessment.calories.fats.min)
        .bind(assessment.calories.fats.max)
        .execute(&mut *conn)
        .await?;

        Ok(())
    }

    async fn fetch_assessments(&self) -> Result<Vec<Assessment>, RepositoryError> {
        let mut conn = self.connection.lock().await;

        let rows = sqlx::query(
            "SELECT m.recorded_at, m.height, m.weight, m.age, m.gender, m.activity_level,
                    m.neck, m.waist, m.hip,
                    x.bmi, x.health, x.body_fat, x.body_fat_mass, x.lean_body_mass,
                    x.goal, x.goal_name, x.bmi_category, x.body_fat_category, x.reasoning,
                    x.bmr, x.tdee, x.protein_min, x.protein_max, x.carbs_min, x.carbs_max,
                    x.fats_min, x.fats_max
             FROM measurements m
             JOIN metrics x ON m.measurement_ref = x.measurement_ref
             ORDER BY m.recorded_at",
        )
        .fetch_all(&mut *conn)
        .await?;

        rows.iter()
            .map(|row| {
                let recorded_at = DateTime::from_timestamp(row.try_get("recorded_at")?, 0)
                    .ok_or_else(|| RepositoryError::Corrupt("Invalid timestamp".to_string()))?
                    .naive_utc();

                let measurement = Measurement {
                    height: row.try_get("height")?,
                    weight: row.try_get("weight")?,
                    age: row.try_get::<i64, _>("age")? as u32,
                    gender: parse_token(row.try_get("gender")?)?,
                    activity_level: parse_token(row.try_get("activity_level")?)?,
                    neck: row.try_get("neck")?,
                    waist: row.try_get("waist")?,
                    hip: row.try_get("hip")?,
                };

                let bmi = BmiResult {
                    bmi: row.try_get("bmi")?,
                    health: row.try_get("health")?,
                    healthy_bmi_range: HEALTHY_BMI_RANGE.to_string(),
                };

                let body_fat = BodyFatResult {
                    body_fat: row.try_get("body_fat")?,
                    body_fat_mass: row.try_get("body_fat_mass")?,
                    lean_body_mass: row.try_get("lean_body_mass")?,
                };

                let goal = GoalRecommendation {
                    goal: parse_token(row.try_get("goal")?)?,
                    goal_name: row.try_get("goal_name")?,
                    bmi: bmi.bmi,
                    bmi_category: parse_token(row.try_get("bmi_category")?)?,
                    body_fat_percentage: body_fat.body_fat,
                    body_fat_category: parse_token(row.try_get("body_fat_category")?)?,
                    reasoning: row.try_get("reasoning")?,
                };

                let calories = CalorieRecommendation {
                    bmr: row.try_get("bmr")?,
                    tdee: row.try_get("tdee")?,
                    protein: MacroRange {
                        min: row.try_get("protein_min")?,
                        max: row.try_get("protein_max")?,
                    },
                    carbs: MacroRange {
                        min: row.try_get("carbs_min")?,
                        max: row.try_get("carbs_max")?,
                    },
                    fats: MacroRange {
                        min: row.try_get("fats_min")?,
                        max: row.try_get("fats_max")?,
                    },
                };

                Ok(Assessment {
                    recorded_at,
                    measurement,
                    bmi,
                    body_fat,
                    goal,
                    calories,
                })
            })
            .collect()
    }

    async fn fetch_goal_entries(&self) -> Result<Vec<GoalEntry>, RepositoryError> {
        let mut conn = self.connection.lock().await;

        let rows = sqlx::query("SELECT goal, goal_name FROM metrics ORDER BY rowid")
            .fetch_all(&mut *conn)
            .await?;

        rows.iter()
            .map(|row| {
                Ok(GoalEntry {
                    goal: parse_token(row.try_get("goal")?)?,
                    goal_name: row.try_get("goal_name")?,
                })
            })
            .collect()
    }

    async fn fetch_nutrition_records(&self) -> Result<Vec<NutritionRecord>, RepositoryError> {
        let mut conn = self.connection.lock().await;

        let rows = sqlx::query(
            "SELECT tdee, protein_min, protein_max, carbs_min, carbs_max, fats_min, fats_max
             FROM metrics",
        )
        .fetch_all(&mut *conn)
        .await?;

        // Macros are stored as gram ranges; a record contributes the range
        // midpoint, with the maintenance TDEE standing in for calories.
        rows.iter()
            .map(|row| {
                let midpoint = |min: &str, max: &str| -> Result<f64, RepositoryError> {
                    let min: i64 = row.try_get(min)?;
                    let max: i64 = row.try_get(max)?;
                    Ok((min + max) as f64 / 2.0)
                };

                Ok(NutritionRecord {
                    calories: row.try_get::<i64, _>("tdee")? as f64,
                    protein: midpoint("protein_min", "protein_max")?,
                    fats: midpoint("fats_min", "fats_max")?,
                    carbs: midpoint("carbs_min", "carbs_max")?,
                })
            })
            .collect()
    }
}

fn parse_token<T: std::str::FromStr>(token: String) -> Result<T, RepositoryError> {
    token
        .parse()
        .map_err(|_| RepositoryError::Corrupt(format!("Unknown stored token \"{}\"", token)))
}
