//! Energy expenditure formulas: basal rate, total daily expenditure and
//! calories burned by a logged activity.

use chrono::{Datelike, NaiveDate};

use crate::models::{ActivityEntry, ActivityKind, ActivityLevel, Sex, UserProfile};

/// Kilocalories attributed to a single step.
pub const KCAL_PER_STEP: f64 = 0.04;

/// Factor used when the profile has no recognised activity level.
const DEFAULT_ACTIVITY_FACTOR: f64 = 1.2;

/// Keytel et al. (2005) heart-rate coefficients, kJ/min.
mod keytel {
    pub const MALE: [f64; 4] = [-55.0969, 0.6309, 0.1988, 0.2017];
    pub const FEMALE: [f64; 4] = [-20.4022, 0.4472, -0.1263, 0.074];
    pub const KJ_PER_KCAL: f64 = 4.184;
}

/// Age in completed years on `today`.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

/// Difference between calendar years, ignoring whether the birthday has
/// passed. Used by the heart-rate formula.
pub fn calendar_age(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    today.year() - birth_date.year()
}

/// Mifflin-St Jeor basal metabolic rate in kcal/day.
///
/// Anything other than [`Sex::Male`] takes the female offset.
pub fn basal_metabolic_rate(weight_kg: f64, height_cm: f64, age: i32, sex: Option<Sex>) -> f64 {
    let offset = if sex == Some(Sex::Male) { 5.0 } else { -161.0 };
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age) + offset
}

/// Estimated total daily energy expenditure (GET) in kcal/day.
///
/// Returns 0 when weight, height or birth date is missing; callers must read
/// 0 as "not yet computable".
pub fn estimated_expenditure(
    weight_kg: f64,
    height_cm: f64,
    birth_date: Option<NaiveDate>,
    sex: Option<Sex>,
    activity_level: Option<ActivityLevel>,
    today: NaiveDate,
) -> u32 {
    let Some(birth_date) = birth_date else {
        return 0;
    };
    if is_missing(weight_kg) || is_missing(height_cm) {
        return 0;
    }

    let factor = activity_level.map_or(DEFAULT_ACTIVITY_FACTOR, ActivityLevel::factor);
    let bmr = basal_metabolic_rate(weight_kg, height_cm, age_on(birth_date, today), sex);
    round_kcal(bmr * factor)
}

impl UserProfile {
    /// Estimated daily expenditure from the profile's current biometrics.
    pub fn estimated_expenditure(&self, today: NaiveDate) -> u32 {
        estimated_expenditure(
            self.weight_kg,
            self.height_cm,
            self.birth_date,
            self.sex,
            self.activity_level,
            today,
        )
    }
}

/// What the user did during an activity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effort {
    /// Total steps of the day
    Steps(u64),
    /// A timed session, optionally with average heart rate
    Session { minutes: f64, heart_rate: Option<f64> },
}

/// Calories burned by `steps` steps.
pub fn steps_calories(steps: u64) -> u32 {
    round_kcal(steps as f64 * KCAL_PER_STEP)
}

/// Step count recovered from a stored step-based activity.
pub fn steps_from_calories(calories: f64) -> u64 {
    (calories / KCAL_PER_STEP).round().max(0.0) as u64
}

/// Estimate calories burned by an activity.
///
/// Steps use a flat per-step rate. Timed sessions use the heart-rate formula
/// when heart rate, sex and birth date are all known, and the MET table
/// otherwise. Returns 0 when weight or duration is unusable.
pub fn estimate_activity_calories(
    kind: ActivityKind,
    effort: Effort,
    profile: &UserProfile,
    today: NaiveDate,
) -> u32 {
    let (minutes, heart_rate) = match effort {
        Effort::Steps(steps) => return steps_calories(steps),
        Effort::Session {
            minutes,
            heart_rate,
        } => (minutes, heart_rate),
    };
    if minutes.is_nan() || profile.weight_kg.is_nan() {
        return 0;
    }

    let weight = profile.weight_kg;
    if let (Some(hr), Some(sex), Some(birth)) = (
        heart_rate.filter(|hr| !hr.is_nan()),
        profile.sex,
        profile.birth_date,
    ) {
        let age = f64::from(calendar_age(birth, today));
        let [a, b, c, d] = match sex {
            Sex::Male => keytel::MALE,
            Sex::Female => keytel::FEMALE,
        };
        let per_minute = (a + b * hr + c * weight + d * age) / keytel::KJ_PER_KCAL;
        return round_kcal(per_minute * minutes);
    }

    match kind.met() {
        Some(met) => round_kcal(met * weight * minutes / 60.0),
        None => 0,
    }
}

impl ActivityEntry {
    /// Build an unsaved entry whose calories are estimated from `effort`.
    pub fn estimated(
        kind: ActivityKind,
        date: NaiveDate,
        effort: Effort,
        pace: Option<String>,
        profile: &UserProfile,
    ) -> Self {
        let calories = estimate_activity_calories(kind, effort, profile, date);
        let (duration_minutes, heart_rate) = match effort {
            Effort::Steps(_) => (None, None),
            Effort::Session {
                minutes,
                heart_rate,
            } => (Some(minutes), heart_rate),
        };
        ActivityEntry {
            id: None,
            kind,
            duration_minutes,
            heart_rate,
            pace,
            calories: f64::from(calories),
            date,
        }
    }
}

fn is_missing(v: f64) -> bool {
    v == 0.0 || v.is_nan()
}

fn round_kcal(kcal: f64) -> u32 {
    // NaN and negatives saturate to 0
    kcal.round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Goal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn profile() -> UserProfile {
        UserProfile {
            sex: Some(Sex::Male),
            weight_kg: 70.0,
            height_cm: 175.0,
            birth_date: Some(date(1995, 1, 1)),
            activity_level: Some(ActivityLevel::Moderate),
            goal: Some(Goal::Maintain),
            expenditure: None,
        }
    }

    #[test]
    fn age_accounts_for_birthday_not_reached() {
        assert_eq!(age_on(date(1995, 6, 15), date(2025, 6, 14)), 29);
        assert_eq!(age_on(date(1995, 6, 15), date(2025, 6, 15)), 30);
        assert_eq!(age_on(date(1995, 6, 15), date(2025, 12, 1)), 30);
    }

    #[test]
    fn reference_expenditure() {
        // basal 1543.75 * 1.55 = 2392.81
        assert_eq!(profile().estimated_expenditure(date(2025, 3, 1)), 2393);
    }

    #[test]
    fn female_offset() {
        let bmr = basal_metabolic_rate(60.0, 165.0, 40, Some(Sex::Female));
        assert!((bmr - 1270.25).abs() < 1e-9);
    }

    #[test]
    fn missing_inputs_yield_zero() {
        let today = date(2025, 3, 1);
        let mut p = profile();
        p.birth_date = None;
        assert_eq!(p.estimated_expenditure(today), 0);

        let mut p = profile();
        p.weight_kg = f64::NAN;
        assert_eq!(p.estimated_expenditure(today), 0);

        let mut p = profile();
        p.height_cm = 0.0;
        assert_eq!(p.estimated_expenditure(today), 0);
    }

    #[test]
    fn unknown_activity_level_uses_sedentary_factor() {
        let mut p = profile();
        p.activity_level = None;
        assert_eq!(p.estimated_expenditure(date(2025, 3, 1)), 1853); // 1543.75 * 1.2 = 1852.5
    }

    #[test]
    fn steps_ignore_met_table() {
        let today = date(2025, 3, 1);
        assert_eq!(
            estimate_activity_calories(ActivityKind::DailySteps, Effort::Steps(8000), &profile(), today),
            320
        );
        assert_eq!(steps_from_calories(320.0), 8000);
    }

    #[test]
    fn met_session_without_heart_rate() {
        let effort = Effort::Session {
            minutes: 60.0,
            heart_rate: None,
        };
        let kcal =
            estimate_activity_calories(ActivityKind::Running, effort, &profile(), date(2025, 3, 1));
        assert_eq!(kcal, 630);
    }

    #[test]
    fn heart_rate_session_uses_keytel() {
        let effort = Effort::Session {
            minutes: 30.0,
            heart_rate: Some(150.0),
        };
        let kcal =
            estimate_activity_calories(ActivityKind::Running, effort, &profile(), date(2025, 3, 1));
        // (-55.0969 + 94.635 + 13.916 + 6.051) / 4.184 * 30
        assert_eq!(kcal, 427);
    }

    #[test]
    fn heart_rate_age_counts_calendar_years() {
        // Birthday not reached yet: 29 completed years, 30 calendar years
        let mut p = profile();
        p.birth_date = Some(date(1995, 6, 15));
        let effort = Effort::Session {
            minutes: 30.0,
            heart_rate: Some(150.0),
        };
        let kcal = estimate_activity_calories(ActivityKind::Running, effort, &p, date(2025, 3, 1));
        assert_eq!(calendar_age(date(1995, 6, 15), date(2025, 3, 1)), 30);
        assert_eq!(kcal, 427);
    }

    #[test]
    fn heart_rate_needs_birth_date() {
        let mut p = profile();
        p.birth_date = None;
        let effort = Effort::Session {
            minutes: 60.0,
            heart_rate: Some(150.0),
        };
        let kcal = estimate_activity_calories(ActivityKind::Strength, effort, &p, date(2025, 3, 1));
        assert_eq!(kcal, 420);
    }

    #[test]
    fn estimated_entry_keeps_effort_fields() {
        let entry = ActivityEntry::estimated(
            ActivityKind::DailySteps,
            date(2025, 3, 1),
            Effort::Steps(10_000),
            None,
            &profile(),
        );
        assert_eq!(entry.calories, 400.0);
        assert_eq!(entry.duration_minutes, None);
    }
}
