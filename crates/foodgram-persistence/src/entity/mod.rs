//! SeaORM entity definitions

pub mod cart;
pub mod favorite;
pub mod ingredient;
pub mod recipe;
pub mod recipe_ingredient;
pub mod tag;
pub mod users;

pub mod prelude {
    pub use super::cart::Entity as Cart;
    pub use super::favorite::Entity as Favorite;
    pub use super::ingredient::Entity as Ingredient;
    pub use super::recipe::Entity as Recipe;
    pub use super::recipe_ingredient::Entity as RecipeIngredient;
    pub use super::tag::Entity as Tag;
    pub use super::users::Entity as Users;
}
