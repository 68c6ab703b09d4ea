use mobilis_model::goal::{GoalEntry, GoalTally};
use mobilis_model::metrics::{AverageNutritionalProfile, NutritionRecord};

/// Mode of the stored goal recommendations, grouped by the
/// `(goal, display name)` pair. A single left-to-right scan with a strict
/// comparison keeps the earliest-seen group on ties. `None` on no records.
pub fn most_recommended_goal(entries: &[GoalEntry]) -> Option<GoalTally> {
    let mut tallies: Vec<GoalTally> = Vec::new();
    for entry in entries {
        match tallies
            .iter_mut()
            .find(|tally| tally.goal == entry.goal && tally.goal_name == entry.goal_name)
        {
            Some(tally) => tally.count += 1,
            None => tallies.push(GoalTally {
                goal: entry.goal,
                goal_name: entry.goal_name.clone(),
                count: 1,
            }),
        }
    }

    tallies.into_iter().reduce(|best, current| {
        if current.count > best.count {
            current
        } else {
            best
        }
    })
}

/// Per-field arithmetic mean of the stored nutrition records, rounded to
/// whole units. All zeros when there is nothing to average.
pub fn average_nutritional_profile(records: &[NutritionRecord]) -> AverageNutritionalProfile {
    if records.is_empty() {
        return AverageNutritionalProfile::default();
    }

    let count = records.len() as f64;
    let (mut calories, mut protein, mut fats, mut carbs) = (0.0, 0.0, 0.0, 0.0);
    for record in records {
        calories += record.calories;
        protein += record.protein;
        fats += record.fats;
        carbs += record.carbs;
    }

    AverageNutritionalProfile {
        calories: (calories / count).round() as i32,
        protein: (protein / count).round() as i32,
        fats: (fats / count).round() as i32,
        carbs: (carbs / count).round() as i32,
    }
}
