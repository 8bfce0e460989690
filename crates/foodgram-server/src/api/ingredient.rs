//! Public ingredient lookup endpoints

use actix_web::{HttpResponse, get, web};
use serde::Deserialize;

use foodgram_common::FoodgramError;
use foodgram_persistence::IngredientInfo;

use crate::{
    error::AppError,
    model::{AppState, response as common},
};

#[derive(Debug, Deserialize)]
struct ListParam {
    /// Case-insensitive name prefix
    name: Option<String>,
}

#[get("/ingredients")]
async fn list(
    data: web::Data<AppState>,
    params: web::Query<ListParam>,
) -> Result<HttpResponse, AppError> {
    let ingredients = data
        .persistence()
        .ingredient_find_all(params.name.as_deref())
        .await
        .map_err(FoodgramError::database)?;

    Ok(common::Result::<Vec<IngredientInfo>>::http_success(ingredients))
}

#[get("/ingredients/{id}")]
async fn detail(
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let ingredient = data
        .persistence()
        .ingredient_find_by_id(id)
        .await
        .map_err(FoodgramError::database)?
        .ok_or_else(|| FoodgramError::ResourceNotFound(format!("ingredient {}", id)))?;

    Ok(common::Result::<IngredientInfo>::http_success(ingredient))
}
