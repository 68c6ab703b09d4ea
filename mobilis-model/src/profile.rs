use strum::{Display, EnumString};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Gender as consumed by the anthropometric formulas. Wire tokens are
/// lowercase and matched exactly; "MALE" or "Male" do not parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn is_female(self) -> bool {
        matches!(self, Gender::Female)
    }
}

/// Self-reported weekly activity, scaling basal expenditure to total
/// expenditure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

/// One intake of raw body measurements. Lengths are centimeters, weight is
/// kilograms. Hip circumference is only collected for female profiles.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    serde_with::skip_serializing_none,
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Measurement {
    pub height: f64,
    pub weight: f64,
    pub age: u32,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub neck: f64,
    pub waist: f64,
    pub hip: Option<f64>,
}
