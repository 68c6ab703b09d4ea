use strum::{Display, EnumString};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::metrics::{BmiCategory, BodyFatCategory};

/// Training goal a user can follow. The first six are produced by the
/// recommendation table; `Aesthetic` and `Strength` are only ever chosen by
/// the user when browsing plans.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum FitnessGoal {
    DirtyBulk,
    LeanBulk,
    Cut,
    AggressiveCut,
    Recomposition,
    Maintenance,
    Aesthetic,
    Strength,
}

impl FitnessGoal {
    /// Bulgarian display label, fixed per goal.
    pub fn display_name(self) -> &'static str {
        match self {
            FitnessGoal::DirtyBulk => "Бързо качване (Dirty Bulk)",
            FitnessGoal::LeanBulk => "Чисто качване (Lean Bulk)",
            FitnessGoal::Cut => "Изгаряне на мазнини (Cut)",
            FitnessGoal::AggressiveCut => "Агресивно изгаряне (Aggressive Cut)",
            FitnessGoal::Recomposition => "Рекомпозиция (Recomposition)",
            FitnessGoal::Maintenance => "Поддържане (Maintenance)",
            FitnessGoal::Aesthetic => "Естетика (Aesthetic)",
            FitnessGoal::Strength => "Сила (Strength)",
        }
    }
}

/// Goal selected for a profile, together with the classifications that led
/// to it and a human-readable explanation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct GoalRecommendation {
    pub goal: FitnessGoal,
    pub goal_name: String,
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub body_fat_percentage: f64,
    pub body_fat_category: BodyFatCategory,
    pub reasoning: String,
}

/// A stored `(goal, display name)` pair, the unit the aggregate counts.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct GoalEntry {
    pub goal: FitnessGoal,
    pub goal_name: String,
}

/// The most frequently recommended goal and how often it was seen.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct GoalTally {
    pub goal: FitnessGoal,
    pub goal_name: String,
    pub count: usize,
}
