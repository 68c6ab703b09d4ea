use std::str::FromStr;

use mobilis_model::metrics::{BmiCategory, BmiResult, BodyFatCategory, BodyFatResult, HEALTHY_BMI_RANGE};
use mobilis_model::profile::Gender;

use crate::error::{Error, Result};

const MIN_BODY_FAT_PERCENT: f64 = 3.0;
const MAX_BODY_FAT_PERCENT: f64 = 60.0;

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// BMI from height in centimeters and weight in kilograms. The label is
/// taken from the unrounded value, the reported number is rounded to two
/// decimals.
pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> BmiResult {
    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);

    BmiResult {
        bmi: round2(bmi),
        health: bmi_category(bmi).display_name().to_string(),
        healthy_bmi_range: HEALTHY_BMI_RANGE.to_string(),
    }
}

/// WHO/CDC classification: lower bounds inclusive, upper bounds exclusive.
pub fn bmi_category(bmi: f64) -> BmiCategory {
    match bmi {
        b if b < 16.0 => BmiCategory::SevereThin,
        b if b < 17.0 => BmiCategory::ModerateThin,
        b if b < 18.5 => BmiCategory::MildThin,
        b if b < 25.0 => BmiCategory::Normal,
        b if b < 30.0 => BmiCategory::Overweight,
        b if b < 35.0 => BmiCategory::Obese1,
        b if b < 40.0 => BmiCategory::Obese2,
        _ => BmiCategory::Obese3,
    }
}

/// Body-fat estimate from circumference measurements. The gender token must
/// be exactly "male" or "female".
pub fn calculate_body_fat(
    height_cm: f64,
    gender: &str,
    weight_kg: f64,
    neck_cm: f64,
    waist_cm: f64,
    hip_cm: Option<f64>,
) -> Result<BodyFatResult> {
    let gender = Gender::from_str(gender).map_err(|_| Error::InvalidGender(gender.to_string()))?;
    body_composition(gender, height_cm, weight_kg, neck_cm, waist_cm, hip_cm)
}

/// U.S. Navy circumference formulas (Hodgdon & Beckett). The female variant
/// structurally requires the hip circumference.
pub fn body_composition(
    gender: Gender,
    height_cm: f64,
    weight_kg: f64,
    neck_cm: f64,
    waist_cm: f64,
    hip_cm: Option<f64>,
) -> Result<BodyFatResult> {
    let body_fat = match gender {
        Gender::Male => {
            86.01 * (waist_cm - neck_cm).log10() - 70.041 * height_cm.log10() + 36.76
        }
        Gender::Female => {
            let hip_cm = hip_cm.ok_or(Error::MissingHipMeasurement)?;
            163.205 * (waist_cm + hip_cm - neck_cm).log10() - 97.684 * height_cm.log10() - 78.387
        }
    };

    // Cap to the plausible 3-60% range before deriving masses.
    let body_fat = body_fat.clamp(MIN_BODY_FAT_PERCENT, MAX_BODY_FAT_PERCENT);
    let fat_mass = weight_kg * body_fat / 100.0;
    let lean_mass = weight_kg - fat_mass;

    Ok(BodyFatResult {
        body_fat: round2(body_fat),
        body_fat_mass: round2(fat_mass),
        lean_body_mass: round2(lean_mass),
    })
}

/// ACE body-fat bands. Each tuple value is the inclusive lower bound of the
/// band it is named after.
pub fn body_fat_category(body_fat: f64, gender: Gender) -> BodyFatCategory {
    let (essential, athletes, fitness, average, obese) = match gender {
        Gender::Male => (2.0, 6.0, 14.0, 18.0, 25.0),
        Gender::Female => (10.0, 14.0, 21.0, 25.0, 32.0),
    };

    match body_fat {
        f if f < essential => BodyFatCategory::Critical,
        f if f < athletes => BodyFatCategory::Essential,
        f if f < fitness => BodyFatCategory::Athletes,
        f if f < average => BodyFatCategory::Fitness,
        f if f < obese => BodyFatCategory::Average,
        _ => BodyFatCategory::Obese,
    }
}
