//! Quick-add text parsing
//!
//! Turns the add-food text box ("apple 150") into an entry. Input that does
//! not carry a usable gram amount is rejected before anything is sent.

use std::num::IntErrorKind;

use thiserror::Error;

use crate::model::NewEntry;

/// A parsed "food grams" line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodInput {
    pub food: String,
    pub grams: u32,
}

impl FoodInput {
    /// Build the entry to post under the given meal label
    pub fn into_entry(self, meal: impl Into<String>) -> NewEntry {
        NewEntry {
            meal: meal.into(),
            food: self.food,
            grams: self.grams,
        }
    }
}

/// Errors for rejected add-food input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Enter a food name and an amount in grams, e.g. \"apple 150\"")]
    Empty,

    #[error("Missing amount for \"{food}\": enter grams after the food name")]
    MissingQuantity { food: String },

    #[error("Invalid amount \"{token}\" for \"{food}\": grams must be a whole number")]
    InvalidQuantity { food: String, token: String },

    #[error("Amount \"{token}\" for \"{food}\" is too large: at most {max} grams", max = u32::MAX)]
    QuantityTooLarge { food: String, token: String },

    #[error("Amount for \"{food}\" must be greater than 0 grams")]
    ZeroQuantity { food: String },
}

/// Parse "food grams" text.
///
/// The first whitespace-separated token is the food name, the second the
/// amount in grams (an optional `g` suffix is accepted). Later tokens are
/// ignored.
pub fn parse_food_input(raw: &str) -> Result<FoodInput, InputError> {
    let mut tokens = raw.split_whitespace();

    let food = tokens.next().ok_or(InputError::Empty)?.to_string();

    let token = match tokens.next() {
        Some(token) => token,
        None => return Err(InputError::MissingQuantity { food }),
    };

    let digits = token
        .strip_suffix('g')
        .or_else(|| token.strip_suffix('G'))
        .unwrap_or(token);

    let grams: u32 = match digits.parse() {
        Ok(grams) => grams,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
            return Err(InputError::QuantityTooLarge {
                food,
                token: token.to_string(),
            })
        }
        Err(_) => {
            return Err(InputError::InvalidQuantity {
                food,
                token: token.to_string(),
            })
        }
    };

    if grams == 0 {
        return Err(InputError::ZeroQuantity { food });
    }

    Ok(FoodInput { food, grams })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_food_and_grams() {
        let input = parse_food_input("apple 150").unwrap();
        assert_eq!(
            input,
            FoodInput {
                food: "apple".to_string(),
                grams: 150
            }
        );

        let entry = input.into_entry("午餐");
        assert_eq!(entry.meal, "午餐");
        assert_eq!(entry.food, "apple");
        assert_eq!(entry.grams, 150);
    }

    #[test]
    fn test_parse_tolerates_spacing_and_suffix() {
        assert_eq!(parse_food_input("  雞胸肉\t200g ").unwrap().grams, 200);
        assert_eq!(parse_food_input("rice 180G").unwrap().grams, 180);
        assert_eq!(parse_food_input("banana 120 extra words").unwrap().food, "banana");
    }

    #[test]
    fn test_missing_quantity_is_rejected() {
        assert_eq!(
            parse_food_input("apple"),
            Err(InputError::MissingQuantity {
                food: "apple".to_string()
            })
        );
    }

    #[test]
    fn test_invalid_quantity_is_rejected() {
        assert!(matches!(
            parse_food_input("apple lots"),
            Err(InputError::InvalidQuantity { .. })
        ));
        assert!(matches!(
            parse_food_input("apple -5"),
            Err(InputError::InvalidQuantity { .. })
        ));
        assert!(matches!(
            parse_food_input("apple 1.5"),
            Err(InputError::InvalidQuantity { .. })
        ));
        assert_eq!(
            parse_food_input("apple 0"),
            Err(InputError::ZeroQuantity {
                food: "apple".to_string()
            })
        );
    }

    #[test]
    fn test_oversized_quantity_is_rejected() {
        let err = parse_food_input("apple 99999999999").unwrap_err();

        assert_eq!(
            err,
            InputError::QuantityTooLarge {
                food: "apple".to_string(),
                token: "99999999999".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "Amount \"99999999999\" for \"apple\" is too large: at most 4294967295 grams"
        );
        assert_eq!(parse_food_input("apple 4294967295g").unwrap().grams, u32::MAX);
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert_eq!(parse_food_input(""), Err(InputError::Empty));
        assert_eq!(parse_food_input("   "), Err(InputError::Empty));
    }

    #[test]
    fn test_error_display() {
        let err = InputError::MissingQuantity {
            food: "apple".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Missing amount for \"apple\": enter grams after the food name"
        );
    }
}
