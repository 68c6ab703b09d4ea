use std::str::FromStr;

use actix_web::{get, post, web, Responder};
use chrono::Utc;
use log::info;
use serde::{Deserialize, Serialize};

use mobilis_db::metrics::{MetricsRepository, MetricsRepositoryImpl};
use mobilis_engine::error::Error as CalculationError;
use mobilis_engine::{aggregate, body_metrics, energy, goal};
use mobilis_model::assessment::Assessment;
use mobilis_model::goal::FitnessGoal;
use mobilis_model::metrics::BmiResult;
use mobilis_model::profile::{ActivityLevel, Gender, Measurement};

use crate::error::ApiError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(bmi)
        .service(body_fat)
        .service(calculate_nutrients)
        .service(recommended_goal)
        .service(most_recommended_goal)
        .service(save_measurements)
        .service(metrics)
        .service(average_nutritional_profile);
}

#[derive(Debug, Deserialize)]
pub struct BmiRequest {
    pub height: f64,
    pub weight: f64,
}

/// BMI is presented as a 2-decimal string; the engine keeps it numeric.
#[derive(Debug, Serialize)]
pub struct BmiResponse {
    pub bmi: String,
    pub health: String,
    pub healthy_bmi_range: String,
}

impl From<BmiResult> for BmiResponse {
    fn from(result: BmiResult) -> Self {
        Self {
            bmi: format!("{:.2}", result.bmi),
            health: result.health,
            healthy_bmi_range: result.healthy_bmi_range,
        }
    }
}

#[post("/api/health/bmi")]
async fn bmi(request: web::Json<BmiRequest>) -> impl Responder {
    let result = body_metrics::calculate_bmi(request.height, request.weight);
    web::Json(BmiResponse::from(result))
}

#[derive(Debug, Deserialize)]
pub struct BodyFatRequest {
    pub height: f64,
    pub gender: String,
    pub weight: f64,
    pub neck: f64,
    pub waist: f64,
    pub hip: Option<f64>,
}

#[post("/api/health/body-fat")]
async fn body_fat(request: web::Json<BodyFatRequest>) -> Result<impl Responder, ApiError> {
    let result = body_metrics::calculate_body_fat(
        request.height,
        &request.gender,
        request.weight,
        request.neck,
        request.waist,
        request.hip,
    )?;
    Ok(web::Json(result))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientsRequest {
    pub weight: f64,
    pub height: f64,
    pub age: u32,
    pub gender: String,
    pub activity_level: String,
    pub goal: Option<FitnessGoal>,
}

#[post("/api/calculate-nutrients")]
async fn calculate_nutrients(
    request: web::Json<NutrientsRequest>,
) -> Result<impl Responder, ApiError> {
    let recommendation = energy::calculate_calorie_recommendation(
        request.weight,
        request.height,
        request.age,
        &request.gender,
        &request.activity_level,
        request.goal,
    )?;
    Ok(web::Json(recommendation))
}

#[derive(Debug, Deserialize)]
pub struct GoalRequest {
    pub height: f64,
    pub weight: f64,
    pub gender: String,
    pub neck: f64,
    pub waist: f64,
    pub hip: Option<f64>,
}

#[post("/api/recommended-goal")]
async fn recommended_goal(request: web::Json<GoalRequest>) -> Result<impl Responder, ApiError> {
    let recommendation = goal::get_recommended_goal(
        request.height,
        request.weight,
        &request.gender,
        request.neck,
        request.waist,
        request.hip,
    )?;
    Ok(web::Json(recommendation))
}

#[get("/api/recommended-goal/most")]
async fn most_recommended_goal(
    repository: web::Data<MetricsRepositoryImpl>,
) -> Result<impl Responder, ApiError> {
    let entries = repository.fetch_goal_entries().await?;
    Ok(web::Json(aggregate::most_recommended_goal(&entries)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementRequest {
    pub height: f64,
    pub weight: f64,
    pub age: u32,
    pub gender: String,
    pub activity_level: String,
    pub neck: f64,
    pub waist: f64,
    pub hip: Option<f64>,
}

#[post("/api/measurements")]
async fn save_measurements(
    repository: web::Data<MetricsRepositoryImpl>,
    request: web::Json<MeasurementRequest>,
) -> Result<impl Responder, ApiError> {
    let request = request.into_inner();
    let gender = Gender::from_str(&request.gender)
        .map_err(|_| CalculationError::InvalidGender(request.gender.clone()))?;
    let activity_level = ActivityLevel::from_str(&request.activity_level)
        .map_err(|_| CalculationError::InvalidActivityLevel(request.activity_level.clone()))?;

    let measurement = Measurement {
        height: request.height,
        weight: request.weight,
        age: request.age,
        gender,
        activity_level,
        neck: request.neck,
        waist: request.waist,
        hip: request.hip,
    };

    let bmi_result = body_metrics::calculate_bmi(measurement.height, measurement.weight);
    let body_fat_result = body_metrics::body_composition(
        gender,
        measurement.height,
        measurement.weight,
        measurement.neck,
        measurement.waist,
        measurement.hip,
    )?;
    let goal = goal::recommendation_for(
        gender,
        measurement.height,
        measurement.weight,
        measurement.neck,
        measurement.waist,
        measurement.hip,
    )?;
    let calories = energy::recommendation_for(
        measurement.weight,
        measurement.height,
        measurement.age,
        gender,
        activity_level,
        Some(goal.goal),
    );

    let assessment = Assessment {
        recorded_at: Utc::now().naive_utc(),
        measurement,
        bmi: bmi_result,
        body_fat: body_fat_result,
        goal,
        calories,
    };

    repository.store_assessment(&assessment).await?;
    info!(
        "Stored assessment with goal {} at {}",
        assessment.goal.goal, assessment.recorded_at
    );

    Ok(web::Json(assessment))
}

#[get("/api/metrics")]
async fn metrics(repository: web::Data<MetricsRepositoryImpl>) -> Result<impl Responder, ApiError> {
    Ok(web::Json(repository.fetch_assessments().await?))
}

#[get("/api/nutritional-profile/average")]
async fn average_nutritional_profile(
    repository: web::Data<MetricsRepositoryImpl>,
) -> Result<impl Responder, ApiError> {
    let records = repository.fetch_nutrition_records().await?;
    Ok(web::Json(aggregate::average_nutritional_profile(&records)))
}
