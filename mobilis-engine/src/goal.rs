use std::str::FromStr;

use log::debug;

use mobilis_model::goal::{FitnessGoal, GoalRecommendation};
use mobilis_model::metrics::{BmiCategory, BodyFatCategory};
use mobilis_model::profile::Gender;

use crate::body_metrics;
use crate::error::{Error, Result};

/// Recommends a training goal from raw measurements. The gender token must
/// be exactly "male" or "female"; hip is required for female profiles.
pub fn get_recommended_goal(
    height_cm: f64,
    weight_kg: f64,
    gender: &str,
    neck_cm: f64,
    waist_cm: f64,
    hip_cm: Option<f64>,
) -> Result<GoalRecommendation> {
    let gender = Gender::from_str(gender).map_err(|_| Error::InvalidGender(gender.to_string()))?;
    recommendation_for(gender, height_cm, weight_kg, neck_cm, waist_cm, hip_cm)
}

/// Typed counterpart of [`get_recommended_goal`].
pub fn recommendation_for(
    gender: Gender,
    height_cm: f64,
    weight_kg: f64,
    neck_cm: f64,
    waist_cm: f64,
    hip_cm: Option<f64>,
) -> Result<GoalRecommendation> {
    let bmi = body_metrics::calculate_bmi(height_cm, weight_kg);
    let body_fat =
        body_metrics::body_composition(gender, height_cm, weight_kg, neck_cm, waist_cm, hip_cm)?;

    let recommendation = recommend(bmi.bmi, body_fat.body_fat, gender);
    debug!(
        "Recommended {} for bmi={} body_fat={}",
        recommendation.goal, recommendation.bmi, recommendation.body_fat_percentage
    );
    Ok(recommendation)
}

fn recommend(bmi: f64, body_fat: f64, gender: Gender) -> GoalRecommendation {
    let bmi_cat = body_metrics::bmi_category(bmi);
    let bf_cat = body_metrics::body_fat_category(body_fat, gender);

    use BmiCategory::*;
    use BodyFatCategory::*;

    // First matching row wins; rows are ordered by clinical urgency.
    let (goal, reasoning) = match (bmi_cat, bf_cat) {
        (SevereThin | ModerateThin, _) => (
            FitnessGoal::DirtyBulk,
            "Критично ниско тегло. Препоръчва се качване поради здравословен риск.",
        ),
        (MildThin, _) => (
            FitnessGoal::LeanBulk,
            "Поднормено тегло. Препоръчва се покачване на мускулна маса и увеличаване на тегло.",
        ),
        (_, Critical) => (
            FitnessGoal::DirtyBulk,
            "Опасно ниско ниво на телесни мазнини. Препоръчва се качване на тегло и телесни мазнини.",
        ),
        (Obese3 | Obese2, _) => (
            FitnessGoal::AggressiveCut,
            "Тежко затлъстяване. Препоръчва се агресивно сваляне на тегло и намаляване на телесните мазнини.",
        ),
        (Obese1, _) => (
            FitnessGoal::Cut,
            "Затлъстяване. Препоръчва се сваляне на тегло и намаляване на телесните мазнини.",
        ),
        (Overweight, Fitness | Athletes) => (
            FitnessGoal::Maintenance,
            "Стойността на BMI е висока, но нивото на телесни мазнини е ниско. Препоръчва се поддържане на текущото състояние.",
        ),
        (Overweight, Average) => (
            FitnessGoal::Recomposition,
            "Наднормено тегло с умерено ниво на телесни мазнини. Препоръчва се покачване на мускулна маса и леко намаляване на телесните мазнини.",
        ),
        (Overweight, Obese) => (
            FitnessGoal::Cut,
            "Наднормено тегло с високо ниво на телесни мазнини. Препоръчва се сваляне на тегло и намаляване на телесните мазнини.",
        ),
        (Normal, Obese) => (
            FitnessGoal::Recomposition,
            "Стойността на BMI е нормална, но нивото на телесни мазнини е високо. Препоръчва се едновременното покачване на мускулна маса и намаляването на нивото на телесни мазнини.",
        ),
        (Normal, Average) => (
            FitnessGoal::Recomposition,
            "Нормално ниво на телесни мазнини. Препоръчва се едновременното покачване на мускулна маса и намаляването на нивото на телесни мазнини.",
        ),
        (Normal, Fitness | Athletes) => (
            FitnessGoal::Maintenance,
            "Нормално ниво на телесни мазнини. Препоръчва се поддържане на текущото състояние.",
        ),
        (Normal | Overweight, Essential) => (
            FitnessGoal::Recomposition,
            "Препоръчва се едновременното покачване на мускулна маса и намаляването на нивото на телесни мазнини.",
        ),
    };

    GoalRecommendation {
        goal,
        goal_name: goal.display_name().to_string(),
        bmi,
        bmi_category: bmi_cat,
        body_fat_percentage: body_fat,
        body_fat_category: bf_cat,
        reasoning: reasoning.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bmi_driven_critical_cases() {
        let test_data = [
            (14.0, 8.0, FitnessGoal::DirtyBulk, BmiCategory::SevereThin),
            (16.5, 10.0, FitnessGoal::DirtyBulk, BmiCategory::ModerateThin),
            (42.0, 35.0, FitnessGoal::AggressiveCut, BmiCategory::Obese3),
            (37.0, 33.0, FitnessGoal::AggressiveCut, BmiCategory::Obese2),
            (32.0, 28.0, FitnessGoal::Cut, BmiCategory::Obese1),
            (18.0, 12.0, FitnessGoal::LeanBulk, BmiCategory::MildThin),
        ];

        for (i, (bmi, body_fat, expected_goal, expected_category)) in
            test_data.into_iter().enumerate()
        {
            let result = recommend(bmi, body_fat, Gender::Male);
            assert_eq!(result.goal, expected_goal, "Test case #{}", i);
            assert_eq!(result.bmi_category, expected_category, "Test case #{}", i);
        }
    }

    #[test]
    fn critical_body_fat_overrides_normal_bmi() {
        let male = recommend(22.0, 1.0, Gender::Male);
        assert_eq!(male.goal, FitnessGoal::DirtyBulk);
        assert_eq!(male.body_fat_category, BodyFatCategory::Critical);

        let female = recommend(22.0, 8.0, Gender::Female);
        assert_eq!(female.goal, FitnessGoal::DirtyBulk);
        assert_eq!(female.body_fat_category, BodyFatCategory::Critical);
    }

    #[test]
    fn normal_bmi_combinations() {
        let test_data = [
            (23.0, 26.0, Gender::Male, FitnessGoal::Recomposition, BodyFatCategory::Obese),
            (23.0, 20.0, Gender::Male, FitnessGoal::Recomposition, BodyFatCategory::Average),
            (23.0, 15.0, Gender::Male, FitnessGoal::Maintenance, BodyFatCategory::Fitness),
            (23.0, 10.0, Gender::Male, FitnessGoal::Maintenance, BodyFatCategory::Athletes),
            (23.0, 34.0, Gender::Female, FitnessGoal::Recomposition, BodyFatCategory::Obese),
        ];

        for (i, (bmi, body_fat, gender, expected_goal, expected_category)) in
            test_data.into_iter().enumerate()
        {
            let result = recommend(bmi, body_fat, gender);
            assert_eq!(result.goal, expected_goal, "Test case #{}", i);
            assert_eq!(result.bmi_category, BmiCategory::Normal, "Test case #{}", i);
            assert_eq!(result.body_fat_category, expected_category, "Test case #{}", i);
        }
    }

    #[test]
    fn overweight_bmi_combinations() {
        let test_data = [
            (27.0, 15.0, FitnessGoal::Maintenance, BodyFatCategory::Fitness),
            (27.0, 20.0, FitnessGoal::Recomposition, BodyFatCategory::Average),
            (27.0, 27.0, FitnessGoal::Cut, BodyFatCategory::Obese),
        ];

        for (i, (bmi, body_fat, expected_goal, expected_category)) in
            test_data.into_iter().enumerate()
        {
            let result = recommend(bmi, body_fat, Gender::Male);
            assert_eq!(result.goal, expected_goal, "Test case #{}", i);
            assert_eq!(result.bmi_category, BmiCategory::Overweight, "Test case #{}", i);
            assert_eq!(result.body_fat_category, expected_category, "Test case #{}", i);
        }
    }

    #[test]
    fn essential_body_fat_falls_back_to_recomposition() {
        let result = recommend(23.0, 4.0, Gender::Male);

        assert_eq!(result.goal, FitnessGoal::Recomposition);
        assert_eq!(result.body_fat_category, BodyFatCategory::Essential);
    }

    #[test]
    fn recommendation_carries_the_inputs_through() {
        let result = recommend(22.5, 14.0, Gender::Male);

        assert_eq!(result.bmi, 22.5);
        assert_eq!(result.body_fat_percentage, 14.0);
        assert_eq!(result.goal_name, result.goal.display_name());
        assert!(!result.reasoning.is_empty());
    }

    #[test]
    fn recommends_from_raw_measurements() {
        // 180 cm / 45 kg is severely underweight regardless of composition.
        let result = get_recommended_goal(180.0, 45.0, "male", 35.0, 75.0, None).unwrap();
        assert_eq!(result.goal, FitnessGoal::DirtyBulk);
        assert_eq!(result.bmi_category, BmiCategory::SevereThin);
        assert_eq!(result.bmi, 13.89);

        // 170 cm / 121 kg lands deep in obesity class III.
        let result = get_recommended_goal(170.0, 121.0, "male", 45.0, 120.0, None).unwrap();
        assert_eq!(result.goal, FitnessGoal::AggressiveCut);
        assert_eq!(result.bmi_category, BmiCategory::Obese3);

        // Normal BMI but an obese body-fat reading asks for recomposition.
        let result = get_recommended_goal(180.0, 74.0, "male", 37.0, 90.0, None).unwrap();
        assert_eq!(result.goal, FitnessGoal::Recomposition);
        assert_eq!(result.bmi_category, BmiCategory::Normal);
        assert_eq!(result.body_fat_category, BodyFatCategory::Obese);
    }

    #[test]
    fn propagates_measurement_errors() {
        let error = get_recommended_goal(180.0, 74.0, "OTHER", 37.0, 90.0, None).unwrap_err();
        assert_eq!(error, Error::InvalidGender("OTHER".to_string()));

        let error = get_recommended_goal(165.0, 62.0, "female", 32.0, 75.0, None).unwrap_err();
        assert_eq!(error, Error::MissingHipMeasurement);
    }
}
