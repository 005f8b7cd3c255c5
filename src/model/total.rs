//! Daily totals and nutrition targets

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Per-day aggregate returned by the API.
///
/// The shape is owned by the backend; the client shows it as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DailyTotal(Value);

impl DailyTotal {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Pretty-printed JSON (2-space indent, backend key order)
    pub fn pretty(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }

    /// Extract macro-nutrient totals when the aggregate carries them
    pub fn nutrients(&self) -> Option<NutrientTotals> {
        let object = self.0.as_object()?;
        let field = |key: &str| object.get(key).and_then(Value::as_f64);

        Some(NutrientTotals {
            kcal: field("kcal")?,
            protein: field("protein")?,
            carbs: field("carbs")?,
            fat: field("fat")?,
        })
    }
}

impl From<Value> for DailyTotal {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Macro-nutrient totals for a day
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NutrientTotals {
    pub kcal: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Daily nutrition goals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyTargets {
    pub kcal: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Default for DailyTargets {
    fn default() -> Self {
        Self {
            kcal: 2650.0,
            protein: 130.0,
            carbs: 350.0,
            fat: 70.0,
        }
    }
}

impl DailyTargets {
    /// Progress towards each goal, in display order
    pub fn progress(&self, totals: &NutrientTotals) -> Vec<TargetProgress> {
        vec![
            TargetProgress::new("熱量", totals.kcal, self.kcal, "kcal"),
            TargetProgress::new("蛋白質", totals.protein, self.protein, "g"),
            TargetProgress::new("碳水", totals.carbs, self.carbs, "g"),
            TargetProgress::new("脂肪", totals.fat, self.fat, "g"),
        ]
    }
}

/// Consumption against one daily goal
#[derive(Debug, Clone, PartialEq)]
pub struct TargetProgress {
    pub label: &'static str,
    pub consumed: f64,
    pub target: f64,
    pub unit: &'static str,
}

impl TargetProgress {
    fn new(label: &'static str, consumed: f64, target: f64, unit: &'static str) -> Self {
        Self {
            label,
            consumed,
            target,
            unit,
        }
    }

    /// consumed / target, 0.0 when there is no target
    pub fn ratio(&self) -> f64 {
        if self.target > 0.0 {
            self.consumed / self.target
        } else {
            0.0
        }
    }

    pub fn is_exceeded(&self) -> bool {
        self.target > 0.0 && self.consumed > self.target
    }

    /// e.g. "熱量 1200 / 2650 kcal"
    pub fn summary(&self) -> String {
        format!(
            "{} {:.0} / {:.0} {}",
            self.label, self.consumed, self.target, self.unit
        )
    }
}
