//! Per-100g traffic-light rating of a single catalog food.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::catalog::FoodCatalogEntry;

const NEGLIGIBLE: &str = "Aporte irrelevante (≈ 0)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Semaphore {
    Green,
    Amber,
    Red,
    /// Negligible amount or informational only
    Gray,
}

/// Rating of one nutrient of a food.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutrientRating {
    #[serde(skip)]
    pub name: &'static str,
    pub value: f64,
    pub status: Semaphore,
    pub comment: &'static str,
    pub unit: &'static str,
}

/// All ratings of one food, in display order.
///
/// Serializes as a map from nutrient name to rating.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodRating(Vec<NutrientRating>);

impl FoodRating {
    pub fn get(&self, name: &str) -> Option<&NutrientRating> {
        self.0.iter().find(|r| r.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NutrientRating> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for FoodRating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for rating in &self.0 {
            map.serialize_entry(rating.name, rating)?;
        }
        map.end()
    }
}

fn calories(v: f64) -> (Semaphore, &'static str) {
    let status = if v < 40.0 {
        Semaphore::Green
    } else if v < 100.0 {
        Semaphore::Amber
    } else {
        Semaphore::Red
    };
    let comment = if v < 40.0 {
        "Muy bajo en calorías."
    } else if v < 100.0 {
        "Bajo en calorías."
    } else if v <= 250.0 {
        "Alto en calorías."
    } else if v <= 400.0 {
        "Muy alto en calorías."
    } else {
        "Extremadamente alto en calorías."
    };
    (status, comment)
}

/// Higher is better; below `amber` the amount is negligible.
fn source_of(
    v: f64,
    green: f64,
    amber: Option<f64>,
    comments: [&'static str; 2],
) -> (Semaphore, &'static str) {
    if v >= green {
        (Semaphore::Green, comments[0])
    } else if amber.is_some_and(|a| v >= a) {
        (Semaphore::Amber, comments[1])
    } else {
        (Semaphore::Gray, NEGLIGIBLE)
    }
}

/// Lower is better.
fn limit_of(
    v: f64,
    green: f64,
    amber: f64,
    comments: [&'static str; 3],
) -> (Semaphore, &'static str) {
    if v <= green {
        (Semaphore::Green, comments[0])
    } else if v <= amber {
        (Semaphore::Amber, comments[1])
    } else {
        (Semaphore::Red, comments[2])
    }
}

fn rate(
    name: &'static str,
    unit: &'static str,
    value: Option<f64>,
    rule: impl Fn(f64) -> (Semaphore, &'static str),
) -> Option<NutrientRating> {
    let value = value?;
    let (status, comment) = rule(value);
    Some(NutrientRating {
        name,
        value,
        status,
        comment,
        unit,
    })
}

fn zero_if_absent(value: Option<f64>) -> Option<f64> {
    Some(value.unwrap_or(0.0))
}

/// Rate a catalog food's per-100g values.
///
/// Missing values rate as 0, except carbohydrates, which are only listed when
/// the entry has them.
pub fn evaluate_food(food: &FoodCatalogEntry) -> FoodRating {
    let ratings = [
        rate("Calorías", "kcal", zero_if_absent(food.calories), calories),
        rate("Proteínas", "g", zero_if_absent(food.protein), |v| {
            source_of(
                v,
                10.0,
                Some(5.0),
                ["Alto en proteínas, buena fuente.", "Fuente moderada de proteínas."],
            )
        }),
        rate("Hidratos de carbono", "g", food.carbohydrate, |_| {
            (
                Semaphore::Gray,
                "Dato informativo: incluye tanto almidones como azúcares. La calidad depende del aporte de fibra y del contenido de azúcares.",
            )
        }),
        rate("Fibra", "g", zero_if_absent(food.fiber), |v| {
            source_of(v, 6.0, Some(3.0), ["Alto contenido en fibra.", "Fuente de fibra."])
        }),
        rate("Grasas", "g", zero_if_absent(food.fat), |v| {
            limit_of(
                v,
                3.0,
                17.0,
                [
                    "Bajo en grasas.",
                    "Contenido moderado en grasas.",
                    "Alto contenido en grasas.",
                ],
            )
        }),
        rate("Grasas saturadas", "g", zero_if_absent(food.saturated_fat), |v| {
            limit_of(
                v,
                1.5,
                5.0,
                [
                    "Bajo en grasas saturadas.",
                    "Moderado en grasas saturadas.",
                    "Alto en grasas saturadas.",
                ],
            )
        }),
        rate("Azúcares", "g", zero_if_absent(food.sugar), |v| {
            limit_of(
                v,
                5.0,
                15.0,
                [
                    "Bajo en azúcares.",
                    "Contenido moderado en azúcares.",
                    "Alto contenido en azúcares.",
                ],
            )
        }),
        rate("Sodio", "mg", zero_if_absent(food.sodium), |v| {
            limit_of(
                v,
                120.0,
                600.0,
                [
                    "Bajo en sodio (sal).",
                    "Contenido moderado en sodio.",
                    "Alto en sodio.",
                ],
            )
        }),
        rate("Calcio", "mg", zero_if_absent(food.calcium), |v| {
            source_of(v, 120.0, None, ["Fuente adecuada de calcio.", ""])
        }),
        rate("Hierro", "mg", zero_if_absent(food.iron), |v| {
            source_of(v, 2.1, None, ["Fuente adecuada de hierro.", ""])
        }),
        rate("Potasio", "mg", zero_if_absent(food.potassium), |v| {
            source_of(v, 300.0, None, ["Fuente adecuada de potasio.", ""])
        }),
    ];

    FoodRating(ratings.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food() -> FoodCatalogEntry {
        FoodCatalogEntry {
            name: "Lentejas cocidas".to_string(),
            group: Some("Legumbres".to_string()),
            calories: Some(116.0),
            protein: Some(9.0),
            carbohydrate: None,
            fiber: Some(7.9),
            fat: Some(0.4),
            saturated_fat: Some(0.1),
            sugar: Some(1.8),
            sodium: Some(120.0),
            calcium: Some(19.0),
            iron: Some(3.3),
            potassium: Some(369.0),
            typical_unit: None,
            grams_per_unit: None,
        }
    }

    #[test]
    fn rates_every_nutrient_but_missing_carbohydrates() {
        let rating = evaluate_food(&food());
        assert_eq!(rating.len(), 10);
        assert!(rating.get("Hidratos de carbono").is_none());

        let kcal = rating.get("Calorías").unwrap();
        assert_eq!(kcal.status, Semaphore::Red);
        assert_eq!(kcal.comment, "Alto en calorías.");
        assert_eq!(kcal.unit, "kcal");

        assert_eq!(rating.get("Proteínas").unwrap().status, Semaphore::Amber);
        assert_eq!(rating.get("Fibra").unwrap().status, Semaphore::Green);
        assert_eq!(rating.get("Sodio").unwrap().status, Semaphore::Green);
        assert_eq!(rating.get("Calcio").unwrap().status, Semaphore::Gray);
        assert_eq!(rating.get("Calcio").unwrap().comment, NEGLIGIBLE);
        assert_eq!(rating.get("Hierro").unwrap().status, Semaphore::Green);
        assert_eq!(rating.get("Potasio").unwrap().status, Semaphore::Green);
    }

    #[test]
    fn missing_values_rate_as_zero() {
        let water = FoodCatalogEntry::from_raw(
            serde_json::json!({"Nombre del alimento": "Agua", "Calorías por 100g": 0})
                .as_object()
                .unwrap()
                .clone(),
        )
        .unwrap();
        let rating = evaluate_food(&water);

        assert_eq!(rating.len(), 10);
        assert!(rating.get("Hidratos de carbono").is_none());
        let fat = rating.get("Grasas").unwrap();
        assert_eq!(fat.value, 0.0);
        assert_eq!(fat.status, Semaphore::Green);
        assert_eq!(fat.comment, "Bajo en grasas.");
        let protein = rating.get("Proteínas").unwrap();
        assert_eq!(protein.status, Semaphore::Gray);
        assert_eq!(protein.comment, NEGLIGIBLE);
        assert_eq!(rating.get("Calorías").unwrap().status, Semaphore::Green);
    }

    #[test]
    fn sodium_breakpoints() {
        let mut f = food();
        for (mg, status) in [
            (120.0, Semaphore::Green),
            (121.0, Semaphore::Amber),
            (600.0, Semaphore::Amber),
            (601.0, Semaphore::Red),
        ] {
            f.sodium = Some(mg);
            assert_eq!(evaluate_food(&f).get("Sodio").unwrap().status, status);
        }
    }

    #[test]
    fn calorie_comment_has_five_steps() {
        let comments: Vec<_> = [10.0, 60.0, 200.0, 300.0, 500.0]
            .into_iter()
            .map(|v| calories(v).1)
            .collect();
        assert_eq!(
            comments,
            [
                "Muy bajo en calorías.",
                "Bajo en calorías.",
                "Alto en calorías.",
                "Muy alto en calorías.",
                "Extremadamente alto en calorías."
            ]
        );
    }

    #[test]
    fn carbohydrates_are_informational() {
        let mut f = food();
        f.carbohydrate = Some(20.0);
        let r = evaluate_food(&f);
        assert_eq!(r.get("Hidratos de carbono").unwrap().status, Semaphore::Gray);
    }

    #[test]
    fn evaluation_is_idempotent() {
        let f = food();
        assert_eq!(evaluate_food(&f), evaluate_food(&f));
    }

    #[test]
    fn serializes_as_named_map() {
        let v = serde_json::to_value(evaluate_food(&food())).unwrap();
        assert_eq!(v["Grasas"]["status"], "green");
        assert_eq!(v["Grasas"]["unit"], "g");
        assert_eq!(v["Grasas"]["comment"], "Bajo en grasas.");
    }
}
