use std::fmt;

use serde::{Serialize, Serializer};

use crate::commentary::{self, Sign};
use crate::models::{Goal, Tier};
use crate::nutrients::Nutrient;

/// Largest absolute deviation (%) still rated green.
const GREEN_LIMIT: i64 = 10;
/// Largest absolute deviation (%) still rated amber.
const AMBER_LIMIT: i64 = 30;

/// Accumulated intake of one nutrient over a period, next to its target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntakeInput {
    pub nutrient: Nutrient,
    pub ingested: f64,
    pub recommended: f64,
}

/// Signed percentage difference between intake and target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deviation {
    /// The target was zero
    NotApplicable,
    Percent(i64),
}

impl Deviation {
    pub fn percent(self) -> Option<i64> {
        match self {
            Deviation::NotApplicable => None,
            Deviation::Percent(p) => Some(p),
        }
    }
}

impl fmt::Display for Deviation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Deviation::NotApplicable => f.write_str("N/A"),
            Deviation::Percent(p) if *p >= 0 => write!(f, "+{}%", p),
            Deviation::Percent(p) => write!(f, "{}%", p),
        }
    }
}

impl Serialize for Deviation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IntakeStatus {
    Correct,
    Excess,
    Deficit,
}

/// Result of comparing one nutrient's intake with its recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutrientEvaluation {
    pub nutrient: Nutrient,
    /// Rounded intake
    pub ingested: f64,
    /// Rounded target
    pub recommended: f64,
    pub deviation: Deviation,
    pub status: IntakeStatus,
    pub color: Tier,
    pub unit: &'static str,
    pub comment: &'static str,
}

/// Color tier for an absolute deviation; deficit and excess share thresholds.
pub fn tier_for(abs_deviation: i64) -> Tier {
    if abs_deviation <= GREEN_LIMIT {
        Tier::Green
    } else if abs_deviation <= AMBER_LIMIT {
        Tier::Amber
    } else {
        Tier::Red
    }
}

/// Evaluate one nutrient's intake against its recommended amount.
///
/// A zero target short-circuits to a correct/green result with no deviation.
pub fn evaluate_nutrient(
    nutrient: Nutrient,
    ingested: f64,
    recommended: f64,
    goal: Option<Goal>,
) -> NutrientEvaluation {
    if recommended == 0.0 {
        return NutrientEvaluation {
            nutrient,
            ingested: 0.0,
            recommended: 0.0,
            deviation: Deviation::NotApplicable,
            status: IntakeStatus::Correct,
            color: Tier::Green,
            unit: nutrient.unit(),
            comment: commentary::comment(nutrient, goal, Tier::Green, Sign::Under),
        };
    }

    let percentage = ingested / recommended * 100.0;
    let deviation = round_half_up(percentage - 100.0) as i64;
    let status = match deviation.signum() {
        -1 => IntakeStatus::Deficit,
        1 => IntakeStatus::Excess,
        _ => IntakeStatus::Correct,
    };
    let color = tier_for(deviation.abs());

    NutrientEvaluation {
        nutrient,
        ingested: ingested.round(),
        recommended: recommended.round(),
        deviation: Deviation::Percent(deviation),
        status,
        color,
        unit: nutrient.unit(),
        comment: commentary::comment(nutrient, goal, color, Sign::of(deviation)),
    }
}

/// Evaluate every input in order.
pub fn evaluate_intake(inputs: &[IntakeInput], goal: Option<Goal>) -> Vec<NutrientEvaluation> {
    inputs
        .iter()
        .map(|i| evaluate_nutrient(i.nutrient, i.ingested, i.recommended, goal))
        .collect()
}

/// Rounds .5 towards positive infinity, so -12.5 becomes -12.
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_target_is_safe_default() {
        let e = evaluate_nutrient(Nutrient::Iron, 8.0, 0.0, Some(Goal::Lose));
        assert_eq!(e.deviation, Deviation::NotApplicable);
        assert_eq!(e.deviation.to_string(), "N/A");
        assert_eq!(e.status, IntakeStatus::Correct);
        assert_eq!(e.color, Tier::Green);
        assert_eq!(e.unit, "mg");
        // No deviation to sign, so the below-target comment is used
        assert_eq!(
            e.comment,
            commentary::comment(Nutrient::Iron, Some(Goal::Lose), Tier::Green, Sign::Under)
        );
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(tier_for(0), Tier::Green);
        assert_eq!(tier_for(10), Tier::Green);
        assert_eq!(tier_for(11), Tier::Amber);
        assert_eq!(tier_for(30), Tier::Amber);
        assert_eq!(tier_for(31), Tier::Red);
    }

    #[test]
    fn deficit_and_excess() {
        let low = evaluate_nutrient(Nutrient::Protein, 80.0, 100.0, Some(Goal::Gain));
        assert_eq!(low.deviation, Deviation::Percent(-20));
        assert_eq!(low.deviation.to_string(), "-20%");
        assert_eq!(low.status, IntakeStatus::Deficit);
        assert_eq!(low.color, Tier::Amber);
        assert_eq!(
            low.comment,
            "Estás por debajo. Esto puede ralentizar tu progreso muscular."
        );

        let high = evaluate_nutrient(Nutrient::Sodium, 3000.0, 2000.0, Some(Goal::Maintain));
        assert_eq!(high.deviation.to_string(), "+50%");
        assert_eq!(high.status, IntakeStatus::Excess);
        assert_eq!(high.color, Tier::Red);
    }

    #[test]
    fn exact_target_is_correct_with_plus_sign() {
        let e = evaluate_nutrient(Nutrient::Fiber, 25.0, 25.0, None);
        assert_eq!(e.deviation.to_string(), "+0%");
        assert_eq!(e.status, IntakeStatus::Correct);
        assert_eq!(e.color, Tier::Green);
    }

    #[test]
    fn half_percent_rounds_up() {
        // 87.5% of target
        let e = evaluate_nutrient(Nutrient::Fat, 70.0, 80.0, None);
        assert_eq!(e.deviation, Deviation::Percent(-12));
        assert_eq!(e.color, Tier::Amber);
    }

    #[test]
    fn values_are_rounded_for_display() {
        let e = evaluate_nutrient(Nutrient::Sugar, 49.6, 60.4, None);
        assert_eq!(e.ingested, 50.0);
        assert_eq!(e.recommended, 60.0);
    }

    #[test]
    fn serializes_deviation_as_string() {
        let e = evaluate_nutrient(Nutrient::Calcium, 990.0, 900.0, None);
        let v = serde_json::to_value(&e).unwrap();
        assert_eq!(v["deviation"], "+10%");
        assert_eq!(v["status"], "excess");
        assert_eq!(v["color"], "green");
    }
}
