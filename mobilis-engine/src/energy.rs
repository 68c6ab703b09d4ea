use std::str::FromStr;

use log::debug;

use mobilis_model::goal::FitnessGoal;
use mobilis_model::metrics::{CalorieRecommendation, MacroRange, MacroTargets};
use mobilis_model::profile::{ActivityLevel, Gender};

use crate::error::{Error, Result};

const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
const KCAL_PER_GRAM_CARBS: f64 = 4.0;
const KCAL_PER_GRAM_FAT: f64 = 9.0;

// Acceptable macronutrient distribution ranges, as shares of daily energy.
const PROTEIN_ENERGY_SHARE: (f64, f64) = (0.10, 0.35);
const FAT_ENERGY_SHARE: (f64, f64) = (0.20, 0.35);
const CARB_ENERGY_SHARE: (f64, f64) = (0.45, 0.65);

// Dietary reference intake: minimum protein in grams per kilogram of body
// weight, enforced as a floor over the energy-share minimum.
const PROTEIN_FLOOR_G_PER_KG: f64 = 0.8;

/// Resting energy expenditure, Mifflin-St Jeor.
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

fn activity_multiplier(activity_level: ActivityLevel) -> f64 {
    match activity_level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Active => 1.725,
        ActivityLevel::VeryActive => 1.9,
    }
}

/// Total daily energy expenditure: BMR scaled by the activity multiplier.
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_multiplier(activity_level)
}

fn energy_share_range(calories: f64, share: (f64, f64), kcal_per_gram: f64) -> MacroRange {
    MacroRange {
        min: (calories * share.0 / kcal_per_gram).round() as i32,
        max: (calories * share.1 / kcal_per_gram).round() as i32,
    }
}

/// Gram ranges for protein, carbs and fats from the daily energy budget.
/// The protein minimum is raised to the reference-intake floor when the
/// energy share alone would undershoot it.
pub fn calculate_macros(tdee: f64, weight_kg: f64) -> MacroTargets {
    let mut protein = energy_share_range(tdee, PROTEIN_ENERGY_SHARE, KCAL_PER_GRAM_PROTEIN);
    protein.min = protein
        .min
        .max((weight_kg * PROTEIN_FLOOR_G_PER_KG).round() as i32);

    MacroTargets {
        protein,
        carbs: energy_share_range(tdee, CARB_ENERGY_SHARE, KCAL_PER_GRAM_CARBS),
        fats: energy_share_range(tdee, FAT_ENERGY_SHARE, KCAL_PER_GRAM_FAT),
    }
}

/// Full calorie recommendation from raw profile tokens. Gender and activity
/// level are validated here, before any table lookup.
pub fn calculate_calorie_recommendation(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: &str,
    activity_level: &str,
    goal: Option<FitnessGoal>,
) -> Result<CalorieRecommendation> {
    let gender = Gender::from_str(gender).map_err(|_| Error::InvalidGender(gender.to_string()))?;
    let activity_level = ActivityLevel::from_str(activity_level)
        .map_err(|_| Error::InvalidActivityLevel(activity_level.to_string()))?;

    Ok(recommendation_for(
        weight_kg,
        height_cm,
        age,
        gender,
        activity_level,
        goal,
    ))
}

/// Typed counterpart of [`calculate_calorie_recommendation`]. The goal does
/// not shift the calorie target; intake always tracks maintenance TDEE.
pub fn recommendation_for(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    activity_level: ActivityLevel,
    goal: Option<FitnessGoal>,
) -> CalorieRecommendation {
    if let Some(goal) = goal {
        debug!("Calorie targets requested for goal {goal}, keeping maintenance intake");
    }

    let bmr = calculate_bmr(weight_kg, height_cm, age, gender);
    let tdee = calculate_tdee(bmr, activity_level).round();
    let macros = calculate_macros(tdee, weight_kg);

    CalorieRecommendation {
        bmr: bmr.round() as i32,
        tdee: tdee as i32,
        protein: macros.protein,
        carbs: macros.carbs,
        fats: macros.fats,
    }
}
