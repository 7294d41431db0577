use serde::Serialize;

use crate::models::{ActivityEntry, Goal, UserProfile};
use crate::nutrients::Nutrient;

/// Expenditure assumed when the profile has no cached value.
pub const DEFAULT_EXPENDITURE: f64 = 2000.0;

/// Protein g/kg when the goal is not recognised.
const DEFAULT_PROTEIN_PER_KG: f64 = 1.5;

/// Activities burning more than this count as exercise for the day.
const EXERCISE_THRESHOLD_KCAL: f64 = 100.0;

const KCAL_PER_G_CARB: f64 = 4.0;
const KCAL_PER_G_FAT: f64 = 9.0;

mod fixed {
    pub const FIBER_G: f64 = 25.0;
    pub const IRON_MG: f64 = 12.0;
    pub const CALCIUM_MG: f64 = 900.0;
    pub const SODIUM_MG: f64 = 2000.0;
    pub const POTASSIUM_MG: f64 = 3500.0;
}

/// Daily nutrient targets for one user on one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Recommendations {
    pub protein: f64,
    pub carbohydrate: f64,
    pub fat: f64,
    /// Upper limit
    pub saturated_fat: f64,
    /// Upper limit
    pub sugar: f64,
    pub fiber: f64,
    pub iron: f64,
    pub calcium: f64,
    pub sodium: f64,
    pub potassium: f64,
    /// Daily expenditure (kcal) the targets were derived from
    pub expenditure: f64,
}

impl Recommendations {
    pub fn target(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Protein => self.protein,
            Nutrient::Carbohydrate => self.carbohydrate,
            Nutrient::Fat => self.fat,
            Nutrient::SaturatedFat => self.saturated_fat,
            Nutrient::Sugar => self.sugar,
            Nutrient::Fiber => self.fiber,
            Nutrient::Iron => self.iron,
            Nutrient::Calcium => self.calcium,
            Nutrient::Sodium => self.sodium,
            Nutrient::Potassium => self.potassium,
        }
    }

    /// Targets accumulated over `days` days, for comparing period totals.
    pub fn over_days(&self, days: u32) -> Self {
        let d = f64::from(days);
        Recommendations {
            protein: self.protein * d,
            carbohydrate: self.carbohydrate * d,
            fat: self.fat * d,
            saturated_fat: self.saturated_fat * d,
            sugar: self.sugar * d,
            fiber: self.fiber * d,
            iron: self.iron * d,
            calcium: self.calcium * d,
            sodium: self.sodium * d,
            potassium: self.potassium * d,
            expenditure: self.expenditure * d,
        }
    }
}

/// Protein grams per kg of body weight for a goal.
pub fn protein_per_kg(goal: Option<Goal>, exercised: bool) -> f64 {
    let Some(goal) = goal else {
        return DEFAULT_PROTEIN_PER_KG;
    };
    let (rest, exercise) = match goal {
        Goal::Maintain => (1.4, 1.6),
        Goal::Lose => (1.6, 2.0),
        Goal::Gain => (1.8, 2.2),
        Goal::Recomposition => (1.8, 2.3),
        Goal::Performance => (2.0, 2.5),
    };
    if exercised {
        exercise
    } else {
        rest
    }
}

/// Whether any of the day's activities burned more than 100 kcal.
pub fn has_exercised(activities: &[ActivityEntry]) -> bool {
    activities
        .iter()
        .any(|a| a.calories > EXERCISE_THRESHOLD_KCAL)
}

/// Compute the day's targets from the profile and that day's activities.
///
/// Carbohydrate, fat, saturated fat and sugar are shares of the cached daily
/// expenditure; the micronutrients are fixed.
pub fn recommend(profile: &UserProfile, day_activities: &[ActivityEntry]) -> Recommendations {
    let expenditure = profile
        .expenditure
        .filter(|g| *g > 0.0)
        .unwrap_or(DEFAULT_EXPENDITURE);
    let per_kg = protein_per_kg(profile.goal, has_exercised(day_activities));

    Recommendations {
        protein: (profile.weight_kg * per_kg).round(),
        carbohydrate: (0.5 * expenditure / KCAL_PER_G_CARB).round(),
        fat: (0.3 * expenditure / KCAL_PER_G_FAT).round(),
        saturated_fat: (0.1 * expenditure / KCAL_PER_G_FAT).round(),
        sugar: (0.1 * expenditure / KCAL_PER_G_CARB).round(),
        fiber: fixed::FIBER_G,
        iron: fixed::IRON_MG,
        calcium: fixed::CALCIUM_MG,
        sodium: fixed::SODIUM_MG,
        potassium: fixed::POTASSIUM_MG,
        expenditure,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityKind;
    use chrono::NaiveDate;

    fn profile(goal: Option<Goal>, get: Option<f64>) -> UserProfile {
        UserProfile {
            sex: None,
            weight_kg: 70.0,
            height_cm: 175.0,
            birth_date: None,
            activity_level: None,
            goal,
            expenditure: get,
        }
    }

    fn activity(calories: f64) -> ActivityEntry {
        ActivityEntry {
            id: None,
            kind: ActivityKind::Running,
            duration_minutes: Some(30.0),
            heart_rate: None,
            pace: None,
            calories,
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        }
    }

    #[test]
    fn rest_day_targets() {
        let r = recommend(&profile(Some(Goal::Maintain), Some(2400.0)), &[]);
        assert_eq!(r.protein, 98.0);
        assert_eq!(r.carbohydrate, 300.0);
        assert_eq!(r.fat, 80.0);
        assert_eq!(r.saturated_fat, 27.0);
        assert_eq!(r.sugar, 60.0);
        assert_eq!(r.fiber, 25.0);
        assert_eq!(r.iron, 12.0);
        assert_eq!(r.calcium, 900.0);
        assert_eq!(r.sodium, 2000.0);
        assert_eq!(r.potassium, 3500.0);
    }

    #[test]
    fn exercise_needs_more_than_100_kcal() {
        let p = profile(Some(Goal::Lose), Some(2000.0));
        assert_eq!(recommend(&p, &[activity(100.0)]).protein, 112.0);
        assert_eq!(recommend(&p, &[activity(100.0), activity(101.0)]).protein, 140.0);
    }

    #[test]
    fn performance_with_exercise() {
        let p = profile(Some(Goal::Performance), Some(3000.0));
        assert_eq!(recommend(&p, &[activity(450.0)]).protein, 175.0);
    }

    #[test]
    fn unknown_goal_and_missing_expenditure() {
        let r = recommend(&profile(None, None), &[]);
        assert_eq!(r.protein, 105.0);
        assert_eq!(r.expenditure, DEFAULT_EXPENDITURE);
        assert_eq!(r.carbohydrate, 250.0);
    }

    #[test]
    fn period_targets_scale_with_days() {
        let r = recommend(&profile(Some(Goal::Maintain), Some(2000.0)), &[]).over_days(3);
        assert_eq!(r.target(Nutrient::Fiber), 75.0);
        assert_eq!(r.target(Nutrient::Sodium), 6000.0);
    }
}
