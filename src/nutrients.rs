use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::models::lenient_f64_or_zero;

/// Nutrients tracked against daily recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Nutrient {
    Protein,
    Carbohydrate,
    Fat,
    SaturatedFat,
    Sugar,
    Fiber,
    Iron,
    Calcium,
    Sodium,
    Potassium,
}

impl Nutrient {
    /// Evaluation order used in reports.
    pub const ALL: [Nutrient; 10] = [
        Nutrient::Protein,
        Nutrient::Carbohydrate,
        Nutrient::Fat,
        Nutrient::SaturatedFat,
        Nutrient::Sugar,
        Nutrient::Fiber,
        Nutrient::Iron,
        Nutrient::Calcium,
        Nutrient::Sodium,
        Nutrient::Potassium,
    ];

    /// Short display name used in the evaluation table.
    pub fn label(self) -> &'static str {
        match self {
            Nutrient::Protein => "Proteínas",
            Nutrient::Carbohydrate => "Hidratos.C",
            Nutrient::Fat => "Grasas",
            Nutrient::SaturatedFat => "G. Saturadas",
            Nutrient::Sugar => "Azúcares",
            Nutrient::Fiber => "Fibra",
            Nutrient::Iron => "Hierro",
            Nutrient::Calcium => "Calcio",
            Nutrient::Sodium => "Sodio",
            Nutrient::Potassium => "Potasio",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Nutrient::Iron | Nutrient::Calcium | Nutrient::Sodium | Nutrient::Potassium => "mg",
            _ => "g",
        }
    }
}

impl FromStr for Nutrient {
    type Err = Error;

    /// Accepts the display label or the storage key of a nutrient.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(n) = Nutrient::ALL.into_iter().find(|n| n.label() == s) {
            return Ok(n);
        }
        match s.to_lowercase().as_str() {
            "proteinas" | "proteínas" => Ok(Nutrient::Protein),
            "hidratos" | "hidratos de carbono" | "carbohidratos" => Ok(Nutrient::Carbohydrate),
            "grasas" => Ok(Nutrient::Fat),
            "grasassaturadas" | "grasas saturadas" | "saturadas" => Ok(Nutrient::SaturatedFat),
            "azucares" | "azúcares" => Ok(Nutrient::Sugar),
            "fibra" => Ok(Nutrient::Fiber),
            "hierro" => Ok(Nutrient::Iron),
            "calcio" => Ok(Nutrient::Calcium),
            "sodio" => Ok(Nutrient::Sodium),
            "potasio" => Ok(Nutrient::Potassium),
            _ => Err(Error::UnknownNutrient(s.to_string())),
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Nutrient amounts carried by a consumed food item (the `nutrientes` map).
///
/// Grams for macronutrients and fiber, milligrams for minerals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientBreakdown {
    #[serde(rename = "proteinas", default, deserialize_with = "lenient_f64_or_zero")]
    pub protein: f64,
    #[serde(
        rename = "hidratos",
        alias = "hidratos de carbono",
        alias = "carbohidratos",
        default,
        deserialize_with = "lenient_f64_or_zero"
    )]
    pub carbohydrate: f64,
    #[serde(rename = "grasas", default, deserialize_with = "lenient_f64_or_zero")]
    pub fat: f64,
    #[serde(
        rename = "grasasSaturadas",
        alias = "grasas saturadas",
        alias = "saturadas",
        default,
        deserialize_with = "lenient_f64_or_zero"
    )]
    pub saturated_fat: f64,
    #[serde(
        rename = "azucares",
        alias = "azúcares",
        default,
        deserialize_with = "lenient_f64_or_zero"
    )]
    pub sugar: f64,
    #[serde(rename = "fibra", default, deserialize_with = "lenient_f64_or_zero")]
    pub fiber: f64,
    #[serde(rename = "hierro", default, deserialize_with = "lenient_f64_or_zero")]
    pub iron: f64,
    #[serde(rename = "calcio", default, deserialize_with = "lenient_f64_or_zero")]
    pub calcium: f64,
    #[serde(rename = "sodio", default, deserialize_with = "lenient_f64_or_zero")]
    pub sodium: f64,
    #[serde(rename = "potasio", default, deserialize_with = "lenient_f64_or_zero")]
    pub potassium: f64,
}

impl NutrientBreakdown {
    pub fn get(&self, nutrient: Nutrient) -> f64 {
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

    fn get_mut(&mut self, nutrient: Nutrient) -> &mut f64 {
        match nutrient {
            Nutrient::Protein => &mut self.protein,
            Nutrient::Carbohydrate => &mut self.carbohydrate,
            Nutrient::Fat => &mut self.fat,
            Nutrient::SaturatedFat => &mut self.saturated_fat,
            Nutrient::Sugar => &mut self.sugar,
            Nutrient::Fiber => &mut self.fiber,
            Nutrient::Iron => &mut self.iron,
            Nutrient::Calcium => &mut self.calcium,
            Nutrient::Sodium => &mut self.sodium,
            Nutrient::Potassium => &mut self.potassium,
        }
    }

    /// Every value multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        let mut out = *self;
        for n in Nutrient::ALL {
            *out.get_mut(n) *= factor;
        }
        out
    }

    pub fn accumulate(&mut self, other: &NutrientBreakdown) {
        for n in Nutrient::ALL {
            *self.get_mut(n) += other.get(n);
        }
    }
}

impl std::iter::Sum for NutrientBreakdown {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutrientBreakdown::default(), |mut acc, b| {
            acc.accumulate(&b);
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_labels_and_storage_keys() {
        assert_eq!("G. Saturadas".parse::<Nutrient>().unwrap(), Nutrient::SaturatedFat);
        assert_eq!("grasasSaturadas".parse::<Nutrient>().unwrap(), Nutrient::SaturatedFat);
        assert_eq!("Hidratos de carbono".parse::<Nutrient>().unwrap(), Nutrient::Carbohydrate);
        assert!("Vitamina C".parse::<Nutrient>().is_err());
    }

    #[test]
    fn breakdown_accepts_alternate_keys() {
        let b: NutrientBreakdown = serde_json::from_value(json!({
            "proteinas": 10.5,
            "carbohidratos": "20",
            "saturadas": 1.25,
            "azúcares": 3
        }))
        .unwrap();

        assert_eq!(b.protein, 10.5);
        assert_eq!(b.carbohydrate, 20.0);
        assert_eq!(b.saturated_fat, 1.25);
        assert_eq!(b.sugar, 3.0);
        assert_eq!(b.iron, 0.0);
    }

    #[test]
    fn sum_and_scale() {
        let a = NutrientBreakdown {
            protein: 10.0,
            sodium: 100.0,
            ..Default::default()
        };
        let total: NutrientBreakdown = vec![a, a.scaled(0.5)].into_iter().sum();
        assert_eq!(total.protein, 15.0);
        assert_eq!(total.sodium, 150.0);
    }
}
