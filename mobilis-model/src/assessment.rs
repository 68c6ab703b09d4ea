use chrono::NaiveDateTime;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::goal::GoalRecommendation;
use crate::metrics::{BmiResult, BodyFatResult, CalorieRecommendation};
use crate::profile::Measurement;

/// Everything derived from a single measurement intake: the raw inputs plus
/// all four computed results, as stored and as returned to clients.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Assessment {
    pub recorded_at: NaiveDateTime,
    pub measurement: Measurement,
    pub bmi: BmiResult,
    pub body_fat: BodyFatResult,
    pub goal: GoalRecommendation,
    pub calories: CalorieRecommendation,
}
