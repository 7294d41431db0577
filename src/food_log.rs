use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::Error;
use crate::models::{lenient_f64_or_zero, MealMoment};
use crate::nutrients::{Nutrient, NutrientBreakdown};

/// One consumed portion of a food.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "gramos", default, deserialize_with = "lenient_f64_or_zero")]
    pub grams: f64,
    #[serde(rename = "calorias", default, deserialize_with = "lenient_f64_or_zero")]
    pub calories: f64,
    #[serde(rename = "nutrientes", default)]
    pub nutrients: NutrientBreakdown,
}

impl FoodItem {
    /// The same food at a different weight, with calories and nutrients
    /// rescaled proportionally.
    ///
    /// An item stored with zero grams has no per-gram density, so only the
    /// weight changes.
    pub fn with_grams(&self, grams: f64) -> Self {
        if self.grams <= 0.0 {
            return FoodItem {
                grams,
                ..self.clone()
            };
        }
        let factor = grams / self.grams;
        FoodItem {
            name: self.name.clone(),
            grams,
            calories: self.calories * factor,
            nutrients: self.nutrients.scaled(factor),
        }
    }
}

/// Foods eaten in one moment of a day.
///
/// `total_calories` is kept equal to the sum of item calories by every
/// mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MomentRecord {
    #[serde(rename = "alimentos", default)]
    items: Vec<FoodItem>,
    #[serde(rename = "kcalTotal", default, deserialize_with = "lenient_f64_or_zero")]
    total_calories: f64,
}

impl MomentRecord {
    pub fn new(items: Vec<FoodItem>) -> Self {
        let mut record = MomentRecord {
            items,
            total_calories: 0.0,
        };
        record.recompute();
        record
    }

    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    pub fn total_calories(&self) -> f64 {
        self.total_calories
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn recompute(&mut self) {
        self.total_calories = self.items.iter().fold(0.0, |acc, i| acc + i.calories);
    }
}

/// Everything logged for one calendar day, keyed by moment.
#[derive(Debug, Clone, PartialEq)]
pub struct DayLog {
    pub date: NaiveDate,
    moments: BTreeMap<MealMoment, MomentRecord>,
}

impl DayLog {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            moments: BTreeMap::new(),
        }
    }

    /// Build a day from a parsed day document (moment name to record).
    ///
    /// Keys starting with `_` are metadata. Unknown moments and malformed
    /// records are skipped with a warning. Stored totals are recomputed.
    pub fn from_fields(date: NaiveDate, fields: &Map<String, Value>) -> Self {
        let mut day = DayLog::new(date);
        for (key, value) in fields {
            if key.starts_with('_') {
                continue;
            }
            let moment = match key.parse::<MealMoment>() {
                Ok(m) => m,
                Err(e) => {
                    warn!(%date, error = %e, "skipping unknown moment");
                    continue;
                }
            };
            match serde_json::from_value::<MomentRecord>(value.clone()) {
                Ok(record) => {
                    let record = MomentRecord::new(record.items);
                    if !record.is_empty() {
                        day.moments.insert(moment, record);
                    }
                }
                Err(e) => warn!(%date, %moment, error = %e, "skipping malformed moment"),
            }
        }
        day
    }

    pub fn moment(&self, moment: MealMoment) -> Option<&MomentRecord> {
        self.moments.get(&moment)
    }

    /// Non-empty moments in display order.
    pub fn moments(&self) -> impl Iterator<Item = (MealMoment, &MomentRecord)> {
        self.moments.iter().map(|(m, r)| (*m, r))
    }

    pub fn items(&self) -> impl Iterator<Item = &FoodItem> {
        self.moments.values().flat_map(|r| r.items.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.moments.is_empty()
    }

    /// Append items to a moment, creating it if needed.
    pub fn add_items(&mut self, moment: MealMoment, items: Vec<FoodItem>) -> &MomentRecord {
        let record = self.moments.entry(moment).or_default();
        record.items.extend(items);
        record.recompute();
        record
    }

    /// Change the weight of one item, rescaling its values.
    pub fn edit_grams(
        &mut self,
        moment: MealMoment,
        index: usize,
        grams: f64,
    ) -> Result<&MomentRecord, Error> {
        let record = self
            .moments
            .get_mut(&moment)
            .filter(|r| index < r.items.len())
            .ok_or_else(|| no_such_food(moment, index))?;
        record.items[index] = record.items[index].with_grams(grams);
        record.recompute();
        Ok(record)
    }

    /// Remove one item. The moment itself goes away once it is empty.
    pub fn remove(&mut self, moment: MealMoment, index: usize) -> Result<FoodItem, Error> {
        let record = self
            .moments
            .get_mut(&moment)
            .filter(|r| index < r.items.len())
            .ok_or_else(|| no_such_food(moment, index))?;
        let removed = record.items.remove(index);
        record.recompute();
        if record.is_empty() {
            self.moments.remove(&moment);
        }
        Ok(removed)
    }

    pub fn total_calories(&self) -> f64 {
        self.moments.values().fold(0.0, |acc, r| acc + r.total_calories)
    }

    pub fn nutrient_totals(&self) -> NutrientBreakdown {
        self.items().map(|i| i.nutrients).sum()
    }
}

fn no_such_food(moment: MealMoment, index: usize) -> Error {
    Error::NoSuchFood {
        moment: moment.to_string(),
        index,
    }
}

/// Summed calories of every item over several days.
pub fn period_calories(days: &[DayLog]) -> f64 {
    days.iter().fold(0.0, |acc, d| acc + d.total_calories())
}

/// Summed nutrients of every item over several days.
pub fn period_nutrients(days: &[DayLog]) -> NutrientBreakdown {
    days.iter().map(DayLog::nutrient_totals).sum()
}

/// One food's share of a nutrient.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contribution {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "valor")]
    pub value: f64,
}

/// Items carrying some of `nutrient`, largest first.
pub fn contributors(days: &[DayLog], nutrient: Nutrient) -> Vec<Contribution> {
    let mut out: Vec<Contribution> = days
        .iter()
        .flat_map(DayLog::items)
        .map(|i| Contribution {
            name: i.name.clone(),
            value: i.nutrients.get(nutrient),
        })
        .filter(|c| c.value > 0.0)
        .collect();
    out.sort_by(|a, b| b.value.total_cmp(&a.value));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    fn item(name: &str, grams: f64, calories: f64, protein: f64) -> FoodItem {
        FoodItem {
            name: name.to_string(),
            grams,
            calories,
            nutrients: NutrientBreakdown {
                protein,
                ..Default::default()
            },
        }
    }

    fn assert_totals_consistent(day: &DayLog) {
        for (_, record) in day.moments() {
            let sum: f64 = record.items().iter().map(|i| i.calories).sum();
            assert!((record.total_calories() - sum).abs() < 1e-9);
        }
    }

    #[test]
    fn total_tracks_every_mutation() {
        let mut day = DayLog::new(date());
        day.add_items(
            MealMoment::Breakfast,
            vec![item("Avena", 50.0, 190.0, 6.5), item("Leche", 200.0, 128.0, 6.4)],
        );
        assert_eq!(day.moment(MealMoment::Breakfast).unwrap().total_calories(), 318.0);
        assert_totals_consistent(&day);

        day.edit_grams(MealMoment::Breakfast, 0, 100.0).unwrap();
        let record = day.moment(MealMoment::Breakfast).unwrap();
        assert_eq!(record.items()[0].calories, 380.0);
        assert_eq!(record.items()[0].nutrients.protein, 13.0);
        assert_eq!(record.total_calories(), 508.0);
        assert_totals_consistent(&day);

        let removed = day.remove(MealMoment::Breakfast, 1).unwrap();
        assert_eq!(removed.name, "Leche");
        assert_eq!(day.moment(MealMoment::Breakfast).unwrap().total_calories(), 380.0);
        assert_totals_consistent(&day);
    }

    #[test]
    fn removing_last_item_drops_the_moment() {
        let mut day = DayLog::new(date());
        day.add_items(MealMoment::Dinner, vec![item("Sopa", 300.0, 120.0, 4.0)]);
        day.remove(MealMoment::Dinner, 0).unwrap();
        assert!(day.moment(MealMoment::Dinner).is_none());
        assert!(day.is_empty());
    }

    #[test]
    fn bad_index_is_an_error() {
        let mut day = DayLog::new(date());
        day.add_items(MealMoment::Lunch, vec![item("Arroz", 80.0, 280.0, 5.6)]);
        assert!(matches!(
            day.edit_grams(MealMoment::Lunch, 3, 10.0),
            Err(Error::NoSuchFood { index: 3, .. })
        ));
        assert!(day.remove(MealMoment::Dinner, 0).is_err());
    }

    #[test]
    fn reads_stored_day_document() {
        let doc = json!({
            "_id": "2025-03-01",
            "Desayuno": {
                "alimentos": [
                    {"nombre": "Pan", "gramos": "60", "calorias": 150, "nutrientes": {"proteinas": 5.4}}
                ],
                "kcalTotal": 999
            },
            "Merienda": {"alimentos": [], "kcalTotal": 0}
        });
        let day = DayLog::from_fields(date(), doc.as_object().unwrap());
        let breakfast = day.moment(MealMoment::Breakfast).unwrap();
        assert_eq!(breakfast.items()[0].grams, 60.0);
        assert_eq!(breakfast.total_calories(), 150.0);
        assert_eq!(day.moments().count(), 1);
    }

    #[test]
    fn reads_wake_up_snack_under_its_stored_key() {
        let doc = json!({
            "Refrigerio (despertar)": {
                "alimentos": [
                    {"nombre": "Plátano", "gramos": 120, "calorias": 107, "nutrientes": {"potasio": 430}}
                ],
                "kcalTotal": 107
            }
        });
        let day = DayLog::from_fields(date(), doc.as_object().unwrap());
        let snack = day.moment(MealMoment::WakeUpSnack).unwrap();
        assert_eq!(snack.items().len(), 1);
        assert_eq!(day.total_calories(), 107.0);
        assert_eq!(day.nutrient_totals().potassium, 430.0);
    }

    #[test]
    fn empty_totals_are_positive_zero() {
        let day = DayLog::new(date());
        assert!(day.total_calories().is_sign_positive());
        assert!(period_calories(&[]).is_sign_positive());
        assert!(MomentRecord::new(Vec::new()).total_calories().is_sign_positive());
    }

    #[test]
    fn contributors_are_sorted_and_positive() {
        let mut day = DayLog::new(date());
        day.add_items(
            MealMoment::Lunch,
            vec![
                item("Arroz", 80.0, 280.0, 5.6),
                item("Manzana", 150.0, 78.0, 0.0),
                item("Pollo", 150.0, 240.0, 46.0),
            ],
        );
        let list = contributors(&[day.clone()], Nutrient::Protein);
        let names: Vec<_> = list.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Pollo", "Arroz"]);

        assert_eq!(period_calories(&[day.clone(), day.clone()]), 1196.0);
        assert!((period_nutrients(&[day]).protein - 51.6).abs() < 1e-9);
    }
}
