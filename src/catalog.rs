use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::Error;
use crate::food_log::FoodItem;
use crate::models::lenient_opt_f64;
use crate::nutrients::NutrientBreakdown;

/// Maximum number of search hits returned.
pub const SEARCH_LIMIT: usize = 8;

/// Alternate spellings found in the catalog, mapped to the canonical key.
const KEY_ALIASES: &[(&str, &str)] = &[
    ("Calorias por 100g", "Calorías por 100g"),
    ("Proteinas (g)", "Proteínas (g)"),
    ("Carbohidratos (g)", "Hidratos de carbono (g)"),
    ("Grasa saturada (g)", "Grasas saturadas (g)"),
    ("Azucares (g)", "Azúcares (g)"),
    ("unidades habitual", "Unidad habitual"),
    ("gramos por unidades", "gramos por unidad"),
];

/// One food of the static reference catalog. Values are per 100 g.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodCatalogEntry {
    #[serde(rename = "Nombre del alimento")]
    pub name: String,
    #[serde(rename = "Grupo", default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(rename = "Calorías por 100g", default, deserialize_with = "lenient_opt_f64")]
    pub calories: Option<f64>,
    #[serde(rename = "Proteínas (g)", default, deserialize_with = "lenient_opt_f64")]
    pub protein: Option<f64>,
    /// Absent for foods that carry no carbohydrate column at all
    #[serde(rename = "Hidratos de carbono (g)", default, deserialize_with = "lenient_opt_f64")]
    pub carbohydrate: Option<f64>,
    #[serde(rename = "Fibra (g)", default, deserialize_with = "lenient_opt_f64")]
    pub fiber: Option<f64>,
    #[serde(rename = "Grasas (g)", default, deserialize_with = "lenient_opt_f64")]
    pub fat: Option<f64>,
    #[serde(rename = "Grasas saturadas (g)", default, deserialize_with = "lenient_opt_f64")]
    pub saturated_fat: Option<f64>,
    #[serde(rename = "Azúcares (g)", default, deserialize_with = "lenient_opt_f64")]
    pub sugar: Option<f64>,
    #[serde(rename = "Sodio (mg)", default, deserialize_with = "lenient_opt_f64")]
    pub sodium: Option<f64>,
    #[serde(rename = "Calcio (mg)", default, deserialize_with = "lenient_opt_f64")]
    pub calcium: Option<f64>,
    #[serde(rename = "Hierro (mg)", default, deserialize_with = "lenient_opt_f64")]
    pub iron: Option<f64>,
    #[serde(rename = "Potasio (mg)", default, deserialize_with = "lenient_opt_f64")]
    pub potassium: Option<f64>,
    /// Typical serving unit, e.g. "rebanada"
    #[serde(rename = "Unidad habitual", default, skip_serializing_if = "Option::is_none")]
    pub typical_unit: Option<String>,
    #[serde(rename = "gramos por unidad", default, deserialize_with = "lenient_opt_f64")]
    pub grams_per_unit: Option<f64>,
}

impl FoodCatalogEntry {
    /// Parse one raw catalog object, folding alternate key spellings first.
    pub fn from_raw(raw: Map<String, Value>) -> Result<Self, Error> {
        serde_json::from_value(Value::Object(normalize_keys(raw)))
            .map_err(|e| Error::InvalidCatalog(e.to_string()))
    }

    /// Per-100g nutrient values, missing ones as zero.
    pub fn per_100g(&self) -> NutrientBreakdown {
        NutrientBreakdown {
            protein: self.protein.unwrap_or(0.0),
            carbohydrate: self.carbohydrate.unwrap_or(0.0),
            fat: self.fat.unwrap_or(0.0),
            saturated_fat: self.saturated_fat.unwrap_or(0.0),
            sugar: self.sugar.unwrap_or(0.0),
            fiber: self.fiber.unwrap_or(0.0),
            iron: self.iron.unwrap_or(0.0),
            calcium: self.calcium.unwrap_or(0.0),
            sodium: self.sodium.unwrap_or(0.0),
            potassium: self.potassium.unwrap_or(0.0),
        }
    }

    /// A consumed portion of `grams` grams of this food.
    pub fn portion(&self, grams: f64) -> FoodItem {
        let factor = grams / 100.0;
        FoodItem {
            name: self.name.clone(),
            grams,
            calories: self.calories.unwrap_or(0.0) * factor,
            nutrients: self.per_100g().scaled(factor),
        }
    }

    /// Grams in `units` typical units, when the food defines one.
    pub fn grams_for_units(&self, units: f64) -> Option<f64> {
        self.typical_unit.as_ref()?;
        self.grams_per_unit.map(|g| g * units)
    }
}

/// Rename alternate spellings to their canonical key.
///
/// When both spellings are present the canonical one wins, unless it is null.
pub fn normalize_keys(mut raw: Map<String, Value>) -> Map<String, Value> {
    for (alias, canonical) in KEY_ALIASES {
        if let Some(value) = raw.remove(*alias) {
            let keep_canonical = raw.get(*canonical).is_some_and(|v| !v.is_null());
            if !keep_canonical {
                raw.insert(canonical.to_string(), value);
            }
        }
    }
    raw
}

/// The static food catalog.
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    entries: Vec<FoodCatalogEntry>,
}

impl FoodCatalog {
    pub fn new(entries: Vec<FoodCatalogEntry>) -> Self {
        Self { entries }
    }

    /// Parse a JSON array of catalog objects.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let raw: Vec<Map<String, Value>> =
            serde_json::from_str(json).map_err(|e| Error::InvalidCatalog(e.to_string()))?;
        let entries = raw
            .into_iter()
            .map(FoodCatalogEntry::from_raw)
            .collect::<Result<Vec<_>, _>>()?;
        debug!(count = entries.len(), "loaded food catalog");
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[FoodCatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case-insensitive name search. Queries shorter than two characters
    /// return nothing.
    pub fn search(&self, query: &str) -> Vec<&FoodCatalogEntry> {
        if query.chars().count() < 2 {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.name.to_lowercase().contains(&needle))
            .take(SEARCH_LIMIT)
            .collect()
    }

    pub fn find(&self, name: &str) -> Option<&FoodCatalogEntry> {
        self.entries.iter().find(|e| e.name == name)
    }
}
