//! Foodgram Common - Shared types and constants
//!
//! This crate provides the foundational types used across all Foodgram components:
//! - Error types and error codes
//! - Domain limits shared by the persistence and HTTP layers
//! - Fixed labels of the shopping-list report

pub mod error;

// Re-exports for convenience
pub use error::{ErrorCode, FoodgramError};

/// Smallest ingredient amount a recipe may declare
pub const MIN_INGREDIENT_AMOUNT: i32 = 1;

/// Largest ingredient amount a recipe may declare
pub const MAX_INGREDIENT_AMOUNT: i32 = 5_000_000;

/// Maximum length of names, measurement units and slugs
pub const MAX_LENGTH_FIELD: u32 = 200;

/// Maximum length of a user's email address
pub const MAX_LENGTH_EMAIL: u32 = 254;

/// Maximum length of a username, first name and last name
pub const MAX_LENGTH_NAME_USER: u32 = 150;

/// Length of a `#RRGGBB` tag color
pub const MAX_LENGTH_COLOR: u32 = 7;

/// Title printed above the shopping-list table
pub const SHOPPING_LIST_TITLE: &str = "Список покупок.";

/// Column labels of the shopping-list table header row
pub const SHOPPING_LIST_HEADER: [&str; 3] = ["Ингредиент", "Кол-во", "Ед. измерения"];

/// File name suggested to clients downloading the shopping list
pub const SHOPPING_LIST_FILE_NAME: &str = "shopping_list.pdf";

/// Recipe collections a user can put recipes into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecipeCollection {
    ShoppingCart,
    Favorite,
}

impl RecipeCollection {
    pub fn as_str(self) -> &'static str {
        match self {
            RecipeCollection::ShoppingCart => "shopping_cart",
            RecipeCollection::Favorite => "favorite",
        }
    }

    /// Message returned when the recipe is already in the collection
    pub fn duplicate_message(self) -> &'static str {
        match self {
            RecipeCollection::ShoppingCart => "recipe is already in the shopping cart",
            RecipeCollection::Favorite => "recipe is already in favorites",
        }
    }
}

impl std::fmt::Display for RecipeCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RecipeCollection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shopping_cart" => Ok(RecipeCollection::ShoppingCart),
            "favorite" => Ok(RecipeCollection::Favorite),
            _ => Err(format!("Invalid recipe collection: {}", s)),
        }
    }
}
