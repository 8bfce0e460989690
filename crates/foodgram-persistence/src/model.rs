//! Domain model types for the persistence abstraction layer
//!
//! These types are used as return values from the persistence traits,
//! decoupled from specific storage backends.

use std::collections::HashSet;

use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

use foodgram_common::{FoodgramError, MAX_INGREDIENT_AMOUNT, MIN_INGREDIENT_AMOUNT};

use crate::entity::{ingredient, recipe, tag};

/// One aggregated line of a user's shopping list
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromQueryResult)]
pub struct ShoppingListRow {
    pub ingredient_name: String,
    /// Sum of the ingredient's amounts over every recipe in the cart
    pub total_amount: i64,
    pub measurement_unit: String,
}

impl ShoppingListRow {
    pub fn new(
        ingredient_name: impl Into<String>,
        total_amount: i64,
        measurement_unit: impl Into<String>,
    ) -> Self {
        Self {
            ingredient_name: ingredient_name.into(),
            total_amount,
            measurement_unit: measurement_unit.into(),
        }
    }
}

/// Ingredient information
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientInfo {
    pub id: i32,
    pub name: String,
    pub measurement_unit: String,
}

impl From<ingredient::Model> for IngredientInfo {
    fn from(value: ingredient::Model) -> Self {
        Self {
            id: value.id,
            name: value.name,
            measurement_unit: value.measurement_unit,
        }
    }
}

/// Tag information
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagInfo {
    pub id: i32,
    pub name: String,
    pub color: Option<String>,
    pub slug: String,
}

impl From<tag::Model> for TagInfo {
    fn from(value: tag::Model) -> Self {
        Self {
            id: value.id,
            name: value.name,
            color: value.color,
            slug: value.slug,
        }
    }
}

/// Short recipe representation returned after cart/favorite changes
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: i32,
    pub name: String,
    pub image: Option<String>,
    pub cooking_time: i32,
}

impl From<recipe::Model> for RecipeSummary {
    fn from(value: recipe::Model) -> Self {
        Self {
            id: value.id,
            name: value.name,
            image: value.image,
            cooking_time: value.cooking_time,
        }
    }
}

/// Ingredient reference with quantity, as written by recipe authoring
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientAmount {
    pub ingredient_id: i32,
    pub amount: i32,
}

impl IngredientAmount {
    pub fn new(ingredient_id: i32, amount: i32) -> Self {
        Self {
            ingredient_id,
            amount,
        }
    }
}

/// Check the write-path preconditions of a recipe's ingredient list.
///
/// Every amount must lie in `MIN_INGREDIENT_AMOUNT..=MAX_INGREDIENT_AMOUNT` and
/// an ingredient may appear at most once.
pub fn validate_recipe_ingredients(items: &[IngredientAmount]) -> Result<(), FoodgramError> {
    if items.is_empty() {
        return Err(FoodgramError::IllegalArgument(
            "recipe must contain at least one ingredient".to_string(),
        ));
    }

    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !(MIN_INGREDIENT_AMOUNT..=MAX_INGREDIENT_AMOUNT).contains(&item.amount) {
            return Err(FoodgramError::IllegalArgument(format!(
                "amount of ingredient {} must be between {} and {}",
                item.ingredient_id, MIN_INGREDIENT_AMOUNT, MAX_INGREDIENT_AMOUNT
            )));
        }
        if !seen.insert(item.ingredient_id) {
            return Err(FoodgramError::IllegalArgument(format!(
                "ingredient {} is already added to the recipe",
                item.ingredient_id
            )));
        }
    }

    Ok(())
}
