//! Logged entries and add-food payloads

use serde::{Deserialize, Serialize};
use std::fmt;

/// Amount reported for a logged entry.
///
/// The backend reports either a weight or an energy value, never both in a
/// meaningful way; entries built from the food table carry grams, custom
/// meals carry kcal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Quantity {
    /// Weight in grams
    Grams(f64),
    /// Energy in kilocalories
    Kcal(f64),
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Grams(grams) => write!(f, "{}g", grams),
            Quantity::Kcal(kcal) => write!(f, "{} kcal", kcal),
        }
    }
}

/// A single logged food item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawLogEntry", into = "RawLogEntry")]
pub struct LogEntry {
    /// Meal label (e.g. "午餐")
    pub meal: String,
    /// Food name
    pub food: String,
    /// Reported amount, if the backend sent one
    pub quantity: Option<Quantity>,
    /// Brand of a custom meal
    pub brand: Option<String>,
}

impl LogEntry {
    /// Create an entry measured in grams
    pub fn grams(meal: impl Into<String>, food: impl Into<String>, grams: f64) -> Self {
        Self {
            meal: meal.into(),
            food: food.into(),
            quantity: Some(Quantity::Grams(grams)),
            brand: None,
        }
    }

    /// Create an entry measured in kilocalories
    pub fn kcal(meal: impl Into<String>, food: impl Into<String>, kcal: f64) -> Self {
        Self {
            meal: meal.into(),
            food: food.into(),
            quantity: Some(Quantity::Kcal(kcal)),
            brand: None,
        }
    }

    /// Builder: set brand
    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.quantity {
            Some(quantity) => write!(f, "{} - {} ({})", self.meal, self.food, quantity),
            None => write!(f, "{} - {}", self.meal, self.food),
        }
    }
}

/// Wire shape of a log entry: flat optional `grams` / `kcal` keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawLogEntry {
    #[serde(default)]
    meal: String,
    #[serde(default)]
    food: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    grams: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    kcal: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    brand: Option<String>,
}

impl From<RawLogEntry> for LogEntry {
    fn from(raw: RawLogEntry) -> Self {
        // grams takes precedence when both are present
        let quantity = match (raw.grams, raw.kcal) {
            (Some(grams), _) => Some(Quantity::Grams(grams)),
            (None, Some(kcal)) => Some(Quantity::Kcal(kcal)),
            (None, None) => None,
        };

        Self {
            meal: raw.meal,
            food: raw.food,
            quantity,
            brand: raw.brand,
        }
    }
}

impl From<LogEntry> for RawLogEntry {
    fn from(entry: LogEntry) -> Self {
        let (grams, kcal) = match entry.quantity {
            Some(Quantity::Grams(grams)) => (Some(grams), None),
            Some(Quantity::Kcal(kcal)) => (None, Some(kcal)),
            None => (None, None),
        };

        Self {
            meal: entry.meal,
            food: entry.food,
            grams,
            kcal,
            brand: entry.brand,
        }
    }
}

/// Meal categories offered when adding food
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Meal {
    Breakfast,
    #[default]
    Lunch,
    Dinner,
    Snack,
}

impl Meal {
    /// Get all meals in display order
    pub fn all() -> &'static [Meal] {
        &[Meal::Breakfast, Meal::Lunch, Meal::Dinner, Meal::Snack]
    }

    /// Label sent to the backend
    pub fn label(&self) -> &'static str {
        match self {
            Meal::Breakfast => "早餐",
            Meal::Lunch => "午餐",
            Meal::Dinner => "晚餐",
            Meal::Snack => "點心",
        }
    }

    /// Look up a meal by its label or English name
    pub fn from_name(name: &str) -> Option<Meal> {
        let name = name.trim();
        Meal::all().iter().copied().find(|meal| {
            meal.label() == name
                || match meal {
                    Meal::Breakfast => name.eq_ignore_ascii_case("breakfast"),
                    Meal::Lunch => name.eq_ignore_ascii_case("lunch"),
                    Meal::Dinner => name.eq_ignore_ascii_case("dinner"),
                    Meal::Snack => name.eq_ignore_ascii_case("snack"),
                }
        })
    }

    /// Resolve user input to the label to send.
    ///
    /// Known names map to their label; anything else is passed through, the
    /// backend stores meal as free text.
    pub fn resolve(name: &str) -> String {
        match Meal::from_name(name) {
            Some(meal) => meal.label().to_string(),
            None => name.trim().to_string(),
        }
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Item posted when adding food
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEntry {
    pub meal: String,
    pub food: String,
    pub grams: u32,
}

impl fmt::Display for NewEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({}g)", self.meal, self.food, self.grams)
    }
}

/// Body of `POST /api/add_food`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddFoodRequest {
    pub date: String,
    pub item: NewEntry,
}

impl AddFoodRequest {
    pub fn new(date: impl Into<String>, item: NewEntry) -> Self {
        Self {
            date: date.into(),
            item,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grams_entry_display() {
        let entries: Vec<LogEntry> =
            serde_json::from_str(r#"[{"meal":"午餐","food":"apple","grams":150}]"#).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].to_string(), "午餐 - apple (150g)");
    }

    #[test]
    fn test_kcal_entry_display() {
        let entry: LogEntry = serde_json::from_str(
            r#"{"meal":"晚餐","brand":"Subway","food":"Turkey","kcal":280.5,"protein":18,"carbs":40,"fat":4}"#,
        )
        .unwrap();

        assert_eq!(entry.quantity, Some(Quantity::Kcal(280.5)));
        assert_eq!(entry.brand.as_deref(), Some("Subway"));
        assert_eq!(entry.to_string(), "晚餐 - Turkey (280.5 kcal)");
    }

    #[test]
    fn test_grams_wins_over_kcal() {
        let entry: LogEntry =
            serde_json::from_str(r#"{"meal":"早餐","food":"oats","kcal":389,"grams":50}"#).unwrap();

        assert_eq!(entry.quantity, Some(Quantity::Grams(50.0)));
        assert_eq!(entry.to_string(), "早餐 - oats (50g)");
    }

    #[test]
    fn test_entry_without_quantity() {
        let entry: LogEntry = serde_json::from_str(r#"{"meal":"點心","food":"tea"}"#).unwrap();

        assert_eq!(entry.quantity, None);
        assert_eq!(entry.to_string(), "點心 - tea");
    }

    #[test]
    fn test_entry_serializes_flat() {
        let entry = LogEntry::kcal("午餐", "bento", 650.0).brand("7-11");
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"meal": "午餐", "food": "bento", "kcal": 650.0, "brand": "7-11"})
        );
    }

    #[test]
    fn test_add_food_request_shape() {
        let request = AddFoodRequest::new(
            "2024-01-01",
            NewEntry {
                meal: Meal::default().label().to_string(),
                food: "apple".to_string(),
                grams: 150,
            },
        );

        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"date":"2024-01-01","item":{"meal":"午餐","food":"apple","grams":150}}"#
        );
    }

    #[test]
    fn test_meal_resolve() {
        assert_eq!(Meal::resolve("dinner"), "晚餐");
        assert_eq!(Meal::resolve("BREAKFAST"), "早餐");
        assert_eq!(Meal::resolve("點心"), "點心");
        assert_eq!(Meal::resolve("宵夜"), "宵夜");
        assert_eq!(Meal::default(), Meal::Lunch);
    }
}
