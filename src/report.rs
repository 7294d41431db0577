//! Period reports: intake totals against accumulated targets, plus the
//! caloric balance for the same days.

use chrono::NaiveDate;
use serde::Serialize;

use crate::balance::{caloric_balance, CaloricBalance};
use crate::food_log::DayLog;
use crate::intake::{evaluate_intake, IntakeInput, NutrientEvaluation};
use crate::models::{ActivityEntry, Goal};
use crate::nutrients::{Nutrient, NutrientBreakdown};
use crate::recommendations::Recommendations;

/// Everything recorded for one day of the period.
#[derive(Debug, Clone)]
pub struct DayData {
    pub log: DayLog,
    pub activities: Vec<ActivityEntry>,
}

impl DayData {
    pub fn date(&self) -> NaiveDate {
        self.log.date
    }

    /// Days without any food logged are left out of every total.
    pub fn has_records(&self) -> bool {
        self.log.items().next().is_some()
    }

    pub fn burned(&self) -> f64 {
        self.activities.iter().fold(0.0, |acc, a| acc + a.calories)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PeriodReport {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub days_with_records: u32,
    pub ingested: NutrientBreakdown,
    pub recommended: Recommendations,
    pub nutrients: Vec<NutrientEvaluation>,
    pub balance: CaloricBalance,
}

/// Build the report for `days`.
///
/// `daily` holds the per-day targets; they and the expenditure are multiplied
/// by the number of days that have food records.
pub fn period_report(days: &[DayData], daily: &Recommendations, goal: Option<Goal>) -> PeriodReport {
    let recorded: Vec<&DayData> = days.iter().filter(|d| d.has_records()).collect();
    let count = recorded.len() as u32;

    let ingested_kcal = recorded.iter().fold(0.0, |acc, d| acc + d.log.total_calories());
    let burned = recorded.iter().fold(0.0, |acc, d| acc + d.burned());
    let ingested: NutrientBreakdown = recorded.iter().map(|d| d.log.nutrient_totals()).sum();
    let recommended = daily.over_days(count);

    let inputs: Vec<IntakeInput> = Nutrient::ALL
        .into_iter()
        .map(|nutrient| IntakeInput {
            nutrient,
            ingested: ingested.get(nutrient),
            recommended: recommended.target(nutrient),
        })
        .collect();

    PeriodReport {
        start: days.iter().map(DayData::date).min(),
        end: days.iter().map(DayData::date).max(),
        days_with_records: count,
        ingested,
        recommended,
        nutrients: evaluate_intake(&inputs, goal),
        balance: caloric_balance(ingested_kcal, burned, recommended.expenditure, goal),
    }
}
