use serde::Serialize;

use crate::models::{Goal, Tier};

/// Share of total expenditure inside which a balance is rated green.
const GREEN_MARGIN: f64 = 0.05;
/// Share of total expenditure inside which a balance is rated amber.
const AMBER_MARGIN: f64 = 0.10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceStatus {
    Surplus,
    Deficit,
    Balanced,
}

/// Ingested versus expended energy over a period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CaloricBalance {
    pub ingested: f64,
    pub burned: f64,
    pub base: f64,
    /// `burned + base`
    pub total_expended: f64,
    /// `ingested - total_expended`
    pub balance: f64,
    pub status: BalanceStatus,
    pub color: Tier,
}

/// Compute and classify the caloric balance.
///
/// `base` is the estimated expenditure (GET) for the period and `burned` the
/// calories of logged activities.
pub fn caloric_balance(ingested: f64, burned: f64, base: f64, goal: Option<Goal>) -> CaloricBalance {
    let total_expended = burned + base;
    let balance = ingested - total_expended;

    let status = if balance > 0.0 {
        BalanceStatus::Surplus
    } else if balance < 0.0 {
        BalanceStatus::Deficit
    } else {
        BalanceStatus::Balanced
    };

    CaloricBalance {
        ingested,
        burned,
        base,
        total_expended,
        balance,
        status,
        color: balance_color(balance, goal, total_expended),
    }
}

/// Rate a balance against the user's goal.
///
/// Losing needs a deficit and gaining a surplus; maintaining and
/// recomposition reward closeness to zero. Performance rates a small surplus
/// green and a small deficit at best amber. An unrecognised goal is red.
pub fn balance_color(balance: f64, goal: Option<Goal>, total_expended: f64) -> Tier {
    let green = total_expended * GREEN_MARGIN;
    let amber = total_expended * AMBER_MARGIN;

    let Some(goal) = goal else {
        return Tier::Red;
    };

    match goal {
        Goal::Lose => {
            if balance <= -amber {
                Tier::Green
            } else if balance <= -green {
                Tier::Amber
            } else {
                Tier::Red
            }
        }
        Goal::Gain => {
            if balance >= amber {
                Tier::Green
            } else if balance >= green {
                Tier::Amber
            } else {
                Tier::Red
            }
        }
        Goal::Maintain | Goal::Recomposition => {
            if balance.abs() <= green {
                Tier::Green
            } else if balance.abs() <= amber {
                Tier::Amber
            } else {
                Tier::Red
            }
        }
        Goal::Performance => {
            if (0.0..=amber).contains(&balance) {
                Tier::Green
            } else if balance < 0.0 && balance.abs() <= amber {
                Tier::Amber
            } else {
                Tier::Red
            }
        }
    }
}
