use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::Error;

/// Biological sex as stored on the profile (`"M"` / `"F"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl FromStr for Sex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "M" | "m" => Ok(Sex::Male),
            "F" | "f" => Ok(Sex::Female),
            other => Err(Error::UnknownSex(other.to_string())),
        }
    }
}

/// Self-reported activity level, in increasing order of daily activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ActivityLevel {
    #[serde(rename = "Sedentario")]
    Sedentary,
    #[serde(rename = "Ligero")]
    Light,
    #[serde(rename = "Moderado")]
    Moderate,
    #[serde(rename = "Intenso")]
    Intense,
    #[serde(rename = "Atleta")]
    Athlete,
}

impl ActivityLevel {
    /// Multiplier applied to the basal rate to estimate total expenditure.
    pub fn factor(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Intense => 1.725,
            ActivityLevel::Athlete => 1.9,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentario",
            ActivityLevel::Light => "Ligero",
            ActivityLevel::Moderate => "Moderado",
            ActivityLevel::Intense => "Intenso",
            ActivityLevel::Athlete => "Atleta",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Sedentario" => Ok(ActivityLevel::Sedentary),
            "Ligero" => Ok(ActivityLevel::Light),
            "Moderado" => Ok(ActivityLevel::Moderate),
            "Intenso" => Ok(ActivityLevel::Intense),
            "Atleta" => Ok(ActivityLevel::Athlete),
            other => Err(Error::UnknownActivityLevel(other.to_string())),
        }
    }
}

/// The user's stated body-composition goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Goal {
    #[serde(rename = "Mantener")]
    Maintain,
    #[serde(rename = "Bajar")]
    Lose,
    #[serde(rename = "Subir")]
    Gain,
    #[serde(rename = "Recomposicion")]
    Recomposition,
    #[serde(rename = "Rendimiento")]
    Performance,
}

impl Goal {
    pub fn as_str(self) -> &'static str {
        match self {
            Goal::Maintain => "Mantener",
            Goal::Lose => "Bajar",
            Goal::Gain => "Subir",
            Goal::Recomposition => "Recomposicion",
            Goal::Performance => "Rendimiento",
        }
    }
}

impl FromStr for Goal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Mantener" => Ok(Goal::Maintain),
            "Bajar" => Ok(Goal::Lose),
            "Subir" => Ok(Goal::Gain),
            "Recomposicion" | "Recomposición" => Ok(Goal::Recomposition),
            "Rendimiento" => Ok(Goal::Performance),
            other => Err(Error::UnknownGoal(other.to_string())),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User profile from the `usuarios/{uid}` document.
///
/// `goal` is `None` only when the stored value is not a recognised goal; a
/// missing or empty value reads as [`Goal::Maintain`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(
        rename = "sexo",
        default,
        deserialize_with = "lenient_enum",
        skip_serializing_if = "Option::is_none"
    )]
    pub sex: Option<Sex>,
    /// Weight in kg. Unparseable input is kept as NaN.
    #[serde(rename = "peso", default = "nan", deserialize_with = "lenient_f64")]
    pub weight_kg: f64,
    /// Height in cm
    #[serde(rename = "altura", default = "nan", deserialize_with = "lenient_f64")]
    pub height_cm: f64,
    #[serde(
        rename = "fechaNacimiento",
        default,
        deserialize_with = "lenient_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub birth_date: Option<NaiveDate>,
    #[serde(
        rename = "actividad",
        default,
        deserialize_with = "lenient_enum",
        skip_serializing_if = "Option::is_none"
    )]
    pub activity_level: Option<ActivityLevel>,
    #[serde(
        rename = "objetivo",
        default = "default_goal",
        deserialize_with = "lenient_goal",
        skip_serializing_if = "Option::is_none"
    )]
    pub goal: Option<Goal>,
    /// Cached estimated daily expenditure (kcal/day), recomputed on every edit.
    #[serde(
        rename = "get",
        default,
        deserialize_with = "lenient_opt_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub expenditure: Option<f64>,
}

/// The eight kinds of physical activity a user can log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityKind {
    #[serde(rename = "correr")]
    Running,
    #[serde(rename = "caminata")]
    Walking,
    #[serde(rename = "bici_btt")]
    MountainBike,
    #[serde(rename = "bici_carretera")]
    RoadCycling,
    #[serde(rename = "fuerza")]
    Strength,
    #[serde(rename = "trail_running")]
    TrailRunning,
    #[serde(rename = "trekking")]
    Trekking,
    #[serde(rename = "pasos_diarios")]
    DailySteps,
}

impl ActivityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityKind::Running => "correr",
            ActivityKind::Walking => "caminata",
            ActivityKind::MountainBike => "bici_btt",
            ActivityKind::RoadCycling => "bici_carretera",
            ActivityKind::Strength => "fuerza",
            ActivityKind::TrailRunning => "trail_running",
            ActivityKind::Trekking => "trekking",
            ActivityKind::DailySteps => "pasos_diarios",
        }
    }

    /// Metabolic equivalent used when no heart rate is available.
    /// Step-based entries have no MET value.
    pub fn met(self) -> Option<f64> {
        match self {
            ActivityKind::Running => Some(9.0),
            ActivityKind::Walking => Some(3.5),
            ActivityKind::MountainBike => Some(8.0),
            ActivityKind::RoadCycling => Some(7.5),
            ActivityKind::Strength => Some(6.0),
            ActivityKind::TrailRunning => Some(9.5),
            ActivityKind::Trekking => Some(7.0),
            ActivityKind::DailySteps => None,
        }
    }
}

impl FromStr for ActivityKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "correr" => Ok(ActivityKind::Running),
            "caminata" => Ok(ActivityKind::Walking),
            "bici_btt" => Ok(ActivityKind::MountainBike),
            "bici_carretera" => Ok(ActivityKind::RoadCycling),
            "fuerza" => Ok(ActivityKind::Strength),
            "trail_running" => Ok(ActivityKind::TrailRunning),
            "trekking" => Ok(ActivityKind::Trekking),
            "pasos_diarios" => Ok(ActivityKind::DailySteps),
            other => Err(Error::UnknownActivityKind(other.to_string())),
        }
    }
}

/// A logged physical activity from `usuarios/{uid}/actividades`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// Document id, present once persisted
    #[serde(rename = "_id", default, skip_serializing)]
    pub id: Option<String>,
    #[serde(rename = "tipo")]
    pub kind: ActivityKind,
    /// Duration in minutes (absent for step-based entries)
    #[serde(
        rename = "duracion",
        default,
        deserialize_with = "lenient_opt_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration_minutes: Option<f64>,
    /// Average heart rate (bpm)
    #[serde(
        rename = "ppm",
        default,
        deserialize_with = "lenient_opt_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub heart_rate: Option<f64>,
    /// Free-text pace, e.g. "5:30"
    #[serde(rename = "ritmo", default, skip_serializing_if = "Option::is_none")]
    pub pace: Option<String>,
    /// Calories (kcal), user-entered or estimated
    #[serde(rename = "calorias", default, deserialize_with = "lenient_f64_or_zero")]
    pub calories: f64,
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
}

/// Named meal slots of a day, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MealMoment {
    #[serde(rename = "Refrigerio (despertar)", alias = "Refrigerio (al despertar)")]
    WakeUpSnack,
    #[serde(rename = "Desayuno")]
    Breakfast,
    #[serde(rename = "Comida")]
    Lunch,
    #[serde(rename = "Refrigerio (tarde)")]
    AfternoonSnack,
    #[serde(rename = "Cena")]
    Dinner,
}

impl MealMoment {
    pub const ALL: [MealMoment; 5] = [
        MealMoment::WakeUpSnack,
        MealMoment::Breakfast,
        MealMoment::Lunch,
        MealMoment::AfternoonSnack,
        MealMoment::Dinner,
    ];

    /// Field name of the moment inside the day document.
    pub fn as_str(self) -> &'static str {
        match self {
            MealMoment::WakeUpSnack => "Refrigerio (despertar)",
            MealMoment::Breakfast => "Desayuno",
            MealMoment::Lunch => "Comida",
            MealMoment::AfternoonSnack => "Refrigerio (tarde)",
            MealMoment::Dinner => "Cena",
        }
    }
}

impl FromStr for MealMoment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            // Spelling used by the daily summary screen
            "Refrigerio (al despertar)" => Ok(MealMoment::WakeUpSnack),
            name => MealMoment::ALL
                .into_iter()
                .find(|m| m.as_str() == name)
                .ok_or_else(|| Error::UnknownMoment(s.to_string())),
        }
    }
}

impl fmt::Display for MealMoment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three-step color scale shared by intake and caloric-balance evaluations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Green,
    Amber,
    Red,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tier::Green => "green",
            Tier::Amber => "amber",
            Tier::Red => "red",
        })
    }
}

fn nan() -> f64 {
    f64::NAN
}

fn default_goal() -> Option<Goal> {
    Some(Goal::Maintain)
}

/// Read a number that may be stored as a JSON number or a numeric string.
pub(crate) fn number_from_value(value: &Value) -> Option<f64> {
    value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(number_from_value).unwrap_or(f64::NAN))
}

pub(crate) fn lenient_f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(number_from_value)
        .filter(|v| !v.is_nan())
        .unwrap_or(0.0))
}

pub(crate) fn lenient_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(number_from_value)
        .filter(|v| !v.is_nan()))
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| {
        // Accept plain dates and full timestamps
        let day = s.get(..10).unwrap_or(&s);
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }))
}

fn lenient_enum<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}

fn lenient_goal<'de, D>(deserializer: D) -> Result<Option<Goal>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(match raw.as_deref().map(str::trim) {
        None | Some("") => Some(Goal::Maintain),
        Some(s) => s.parse().ok(),
    })
}
