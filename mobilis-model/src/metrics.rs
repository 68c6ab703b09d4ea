use strum::{Display, EnumString};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Display form of the WHO healthy BMI interval, fixed by the UI contract.
pub const HEALTHY_BMI_RANGE: &str = "18.5 - 25";

/// WHO/CDC weight classification derived from BMI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum BmiCategory {
    SevereThin,
    ModerateThin,
    MildThin,
    Normal,
    Overweight,
    #[strum(serialize = "obese_1")]
    #[cfg_attr(feature = "serde", serde(rename = "obese_1"))]
    Obese1,
    #[strum(serialize = "obese_2")]
    #[cfg_attr(feature = "serde", serde(rename = "obese_2"))]
    Obese2,
    #[strum(serialize = "obese_3")]
    #[cfg_attr(feature = "serde", serde(rename = "obese_3"))]
    Obese3,
}

impl BmiCategory {
    /// Bulgarian label shown to users alongside the numeric BMI.
    pub fn display_name(self) -> &'static str {
        match self {
            BmiCategory::SevereThin => "Сериозно недохранване",
            BmiCategory::ModerateThin => "Средно недохранване",
            BmiCategory::MildThin => "Леко недохранване",
            BmiCategory::Normal => "Нормално",
            BmiCategory::Overweight => "Наднормено тегло",
            BmiCategory::Obese1 => "Затлъстяване I клас",
            BmiCategory::Obese2 => "Затлъстяване II клас",
            BmiCategory::Obese3 => "Затлъстяване III клас",
        }
    }
}

/// Body-fat band relative to the ACE reference chart, gender-aware.
/// `Critical` sits below the essential-fat minimum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum BodyFatCategory {
    Critical,
    Essential,
    Athletes,
    Fitness,
    Average,
    Obese,
}

/// BMI with its display classification.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BmiResult {
    pub bmi: f64,
    pub health: String,
    pub healthy_bmi_range: String,
}

/// Body-fat percentage with the derived mass split. Masses are kilograms,
/// rounded to 2 decimals; their sum reproduces body weight within rounding.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct BodyFatResult {
    pub body_fat: f64,
    pub body_fat_mass: f64,
    pub lean_body_mass: f64,
}

/// Inclusive gram range for one macronutrient.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MacroRange {
    pub min: i32,
    pub max: i32,
}

/// Gram ranges for the three macronutrients.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MacroTargets {
    pub protein: MacroRange,
    pub carbs: MacroRange,
    pub fats: MacroRange,
}

/// Daily energy budget with macronutrient gram ranges, kcal as integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalorieRecommendation {
    pub bmr: i32,
    pub tdee: i32,
    pub protein: MacroRange,
    pub carbs: MacroRange,
    pub fats: MacroRange,
}

/// One stored nutrition data point contributing to the averages.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NutritionRecord {
    pub calories: f64,
    pub protein: f64,
    pub fats: f64,
    pub carbs: f64,
}

/// Arithmetic mean of all stored nutrition records, zeroed when none exist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AverageNutritionalProfile {
    pub calories: i32,
    pub protein: i32,
    pub fats: i32,
    pub carbs: i32,
}
