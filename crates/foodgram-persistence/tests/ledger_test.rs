//! Ingredient ledger aggregation tests

mod common;

use foodgram_common::RecipeCollection;
use foodgram_persistence::{
    CollectionPersistence, IngredientAmount, IngredientLedger, RecipePersistence, ShoppingListRow,
};

use common::{insert_ingredient, insert_recipe, insert_user, memory_service};

#[tokio::test]
async fn test_shared_ingredient_is_summed_once() {
    let service = memory_service().await;
    let db = service.db();
    let user = insert_user(db, "alice").await;
    let flour = insert_ingredient(db, "Flour", "g").await;
    let bread = insert_recipe(db, user, "Bread").await;
    let pie = insert_recipe(db, user, "Pie").await;

    service
        .recipe_set_ingredients(bread, &[IngredientAmount::new(flour, 200)])
        .await
        .unwrap();
    service
        .recipe_set_ingredients(pie, &[IngredientAmount::new(flour, 300)])
        .await
        .unwrap();
    for recipe in [bread, pie] {
        service
            .collection_add(RecipeCollection::ShoppingCart, user, recipe)
            .await
            .unwrap();
    }

    let rows = service.sum_ingredients_for_cart(user).await.unwrap();
    assert_eq!(rows, vec![ShoppingListRow::new("Flour", 500, "g")]);
}

#[tokio::test]
async fn test_distinct_ingredients_never_merge() {
    let service = memory_service().await;
    let db = service.db();
    let user = insert_user(db, "bob").await;
    let flour = insert_ingredient(db, "Flour", "g").await;
    let sugar = insert_ingredient(db, "Sugar", "g").await;
    let bread = insert_recipe(db, user, "Bread").await;
    let cake = insert_recipe(db, user, "Cake").await;

    service
        .recipe_set_ingredients(bread, &[IngredientAmount::new(flour, 200)])
        .await
        .unwrap();
    service
        .recipe_set_ingredients(cake, &[IngredientAmount::new(sugar, 100)])
        .await
        .unwrap();
    for recipe in [bread, cake] {
        service
            .collection_add(RecipeCollection::ShoppingCart, user, recipe)
            .await
            .unwrap();
    }

    let rows = service.sum_ingredients_for_cart(user).await.unwrap();
    assert_eq!(
        rows,
        vec![
            ShoppingListRow::new("Flour", 200, "g"),
            ShoppingListRow::new("Sugar", 100, "g"),
        ]
    );
}

#[tokio::test]
async fn test_same_name_different_unit_stays_separate() {
    let service = memory_service().await;
    let db = service.db();
    let user = insert_user(db, "carol").await;
    let milk_ml = insert_ingredient(db, "Milk", "ml").await;
    let milk_cup = insert_ingredient(db, "Milk", "cup").await;
    let recipe = insert_recipe(db, user, "Pancakes").await;

    service
        .recipe_set_ingredients(
            recipe,
            &[
                IngredientAmount::new(milk_ml, 250),
                IngredientAmount::new(milk_cup, 1),
            ],
        )
        .await
        .unwrap();
    service
        .collection_add(RecipeCollection::ShoppingCart, user, recipe)
        .await
        .unwrap();

    let rows = service.sum_ingredients_for_cart(user).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.contains(&ShoppingListRow::new("Milk", 250, "ml")));
    assert!(rows.contains(&ShoppingListRow::new("Milk", 1, "cup")));
}

#[tokio::test]
async fn test_empty_cart_yields_no_rows() {
    let service = memory_service().await;
    let db = service.db();
    let user = insert_user(db, "dave").await;
    let flour = insert_ingredient(db, "Flour", "g").await;
    let bread = insert_recipe(db, user, "Bread").await;
    service
        .recipe_set_ingredients(bread, &[IngredientAmount::new(flour, 200)])
        .await
        .unwrap();

    // Favorites do not feed the shopping list
    service
        .collection_add(RecipeCollection::Favorite, user, bread)
        .await
        .unwrap();

    let rows = service.sum_ingredients_for_cart(user).await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_other_users_carts_are_ignored() {
    let service = memory_service().await;
    let db = service.db();
    let alice = insert_user(db, "alice").await;
    let bob = insert_user(db, "bob").await;
    let flour = insert_ingredient(db, "Flour", "g").await;
    let bread = insert_recipe(db, alice, "Bread").await;
    service
        .recipe_set_ingredients(bread, &[IngredientAmount::new(flour, 200)])
        .await
        .unwrap();
    service
        .collection_add(RecipeCollection::ShoppingCart, bob, bread)
        .await
        .unwrap();

    assert!(service.sum_ingredients_for_cart(alice).await.unwrap().is_empty());
    assert_eq!(
        service.sum_ingredients_for_cart(bob).await.unwrap(),
        vec![ShoppingListRow::new("Flour", 200, "g")]
    );
}

#[tokio::test]
async fn test_sum_exceeding_i32_range() {
    let service = memory_service().await;
    let db = service.db();
    let user = insert_user(db, "erin").await;
    let rice = insert_ingredient(db, "Rice", "g").await;

    let mut recipes = Vec::new();
    for i in 0..500 {
        let recipe = insert_recipe(db, user, &format!("Pilaf {i}")).await;
        service
            .recipe_set_ingredients(recipe, &[IngredientAmount::new(rice, 5_000_000)])
            .await
            .unwrap();
        recipes.push(recipe);
    }
    for recipe in recipes {
        service
            .collection_add(RecipeCollection::ShoppingCart, user, recipe)
            .await
            .unwrap();
    }

    let rows = service.sum_ingredients_for_cart(user).await.unwrap();
    assert_eq!(rows, vec![ShoppingListRow::new("Rice", 2_500_000_000, "g")]);
}

#[tokio::test]
async fn test_repeated_reads_are_identical() {
    let service = memory_service().await;
    let db = service.db();
    let user = insert_user(db, "frank").await;
    let flour = insert_ingredient(db, "Flour", "g").await;
    let eggs = insert_ingredient(db, "Eggs", "pcs").await;
    let bread = insert_recipe(db, user, "Bread").await;
    service
        .recipe_set_ingredients(
            bread,
            &[
                IngredientAmount::new(flour, 500),
                IngredientAmount::new(eggs, 2),
            ],
        )
        .await
        .unwrap();
    service
        .collection_add(RecipeCollection::ShoppingCart, user, bread)
        .await
        .unwrap();

    let first = service.sum_ingredients_for_cart(user).await.unwrap();
    let second = service.sum_ingredients_for_cart(user).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[tokio::test]
async fn test_replacing_ingredients_updates_the_sum() {
    let service = memory_service().await;
    let db = service.db();
    let user = insert_user(db, "grace").await;
    let flour = insert_ingredient(db, "Flour", "g").await;
    let bread = insert_recipe(db, user, "Bread").await;
    service
        .recipe_set_ingredients(bread, &[IngredientAmount::new(flour, 200)])
        .await
        .unwrap();
    service
        .collection_add(RecipeCollection::ShoppingCart, user, bread)
        .await
        .unwrap();

    service
        .recipe_set_ingredients(bread, &[IngredientAmount::new(flour, 750)])
        .await
        .unwrap();

    assert_eq!(
        service.sum_ingredients_for_cart(user).await.unwrap(),
        vec![ShoppingListRow::new("Flour", 750, "g")]
    );
}
