use chrono::NaiveDate;

use mobilis_db::connection::Connection;
use mobilis_db::metrics::{MetricsRepository, MetricsRepositoryImpl};
use mobilis_engine::{body_metrics, energy, goal};
use mobilis_model::assessment::Assessment;
use mobilis_model::goal::FitnessGoal;
use mobilis_model::profile::{ActivityLevel, Gender, Measurement};

fn male_measurement(weight: f64) -> Measurement {
    Measurement {
        height: 180.0,
        weight,
        age: 25,
        gender: Gender::Male,
        activity_level: ActivityLevel::Moderate,
        neck: 38.0,
        waist: 85.0,
        hip: None,
    }
}

fn assessment_for(measurement: Measurement, day: u32) -> Assessment {
    let bmi = body_metrics::calculate_bmi(measurement.height, measurement.weight);
    let body_fat = body_metrics::body_composition(
        measurement.gender,
        measurement.height,
        measurement.weight,
        measurement.neck,
        measurement.waist,
        measurement.hip,
    )
    .unwrap();
    let goal = goal::recommendation_for(
        measurement.gender,
        measurement.height,
        measurement.weight,
        measurement.neck,
        measurement.waist,
        measurement.hip,
    )
    .unwrap();
    let calories = energy::recommendation_for(
        measurement.weight,
        measurement.height,
        measurement.age,
        measurement.gender,
        measurement.activity_level,
        Some(goal.goal),
    );

    Assessment {
        recorded_at: NaiveDate::from_ymd_opt(2024, 5, day)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap(),
        measurement,
        bmi,
        body_fat,
        goal,
        calories,
    }
}

async fn repository() -> MetricsRepositoryImpl {
    let connection = Connection::open("sqlite::memory:").await.unwrap();
    MetricsRepositoryImpl::new(connection)
}

#[tokio::test]
async fn stored_assessments_round_trip() {
    let repository = repository().await;
    let assessment = assessment_for(male_measurement(80.0), 1);

    repository.store_assessment(&assessment).await.unwrap();
    let fetched = repository.fetch_assessments().await.unwrap();

    assert_eq!(fetched, vec![assessment]);
}

#[tokio::test]
async fn storing_the_same_measurement_twice_keeps_one_row() {
    let repository = repository().await;
    let assessment = assessment_for(male_measurement(80.0), 1);

    repository.store_assessment(&assessment).await.unwrap();
    repository.store_assessment(&assessment).await.unwrap();

    assert_eq!(repository.fetch_assessments().await.unwrap().len(), 1);
}

#[tokio::test]
async fn assessments_are_ordered_by_intake_time() {
    let repository = repository().await;
    let later = assessment_for(male_measurement(82.0), 9);
    let earlier = assessment_for(male_measurement(80.0), 2);

    repository.store_assessment(&later).await.unwrap();
    repository.store_assessment(&earlier).await.unwrap();

    let fetched = repository.fetch_assessments().await.unwrap();
    assert_eq!(fetched, vec![earlier, later]);
}

#[tokio::test]
async fn goal_entries_expose_the_stored_pairs() {
    let repository = repository().await;
    // 74 kg at 180 cm with a 90 cm waist reads as recomposition.
    repository
        .store_assessment(&assessment_for(
            Measurement {
                waist: 90.0,
                ..male_measurement(74.0)
            },
            1,
        ))
        .await
        .unwrap();
    repository
        .store_assessment(&assessment_for(male_measurement(80.0), 2))
        .await
        .unwrap();

    let entries = repository.fetch_goal_entries().await.unwrap();

    assert_eq!(entries.len(), 2);
    assert!(entries
        .iter()
        .any(|entry| entry.goal == FitnessGoal::Recomposition));
    for entry in &entries {
        assert_eq!(entry.goal_name, entry.goal.display_name());
    }
}

#[tokio::test]
async fn nutrition_records_use_range_midpoints() {
    let repository = repository().await;
    let assessment = assessment_for(male_measurement(80.0), 1);
    repository.store_assessment(&assessment).await.unwrap();

    let records = repository.fetch_nutrition_records().await.unwrap();

    assert_eq!(records.len(), 1);
    let record = records[0];
    let calories = &assessment.calories;
    assert_eq!(record.calories, f64::from(calories.tdee));
    assert_eq!(
        record.protein,
        f64::from(calories.protein.min + calories.protein.max) / 2.0
    );
    assert_eq!(
        record.fats,
        f64::from(calories.fats.min + calories.fats.max) / 2.0
    );
    assert_eq!(
        record.carbs,
        f64::from(calories.carbs.min + calories.carbs.max) / 2.0
    );
}
