//! Recipe endpoints: shopping-list download, shopping cart and favorites

use actix_web::{HttpRequest, HttpResponse, delete, get, http::header, post, web};

use foodgram_common::RecipeCollection;
use foodgram_report::ReportDocument;

use crate::{
    error::AppError,
    middleware::authenticated_user,
    model::{AppState, response as common},
    service::{collection, shopping_list},
};

/// Turn a rendered report into a file download response.
fn deliver(document: ReportDocument) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(document.content_type())
        .insert_header((header::CONTENT_DISPOSITION, document.content_disposition()))
        .body(document.into_bytes())
}

#[get("/recipes/download_shopping_cart")]
async fn download_shopping_cart(
    req: HttpRequest,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user_id = authenticated_user(&req)?;

    let document = shopping_list::build_shopping_list_report(
        data.persistence(),
        data.configuration.report_font_path(),
        user_id,
    )
    .await?;

    Ok(deliver(document))
}

async fn add(
    req: &HttpRequest,
    data: &AppState,
    collection: RecipeCollection,
    recipe_id: i32,
) -> Result<HttpResponse, AppError> {
    let user_id = authenticated_user(req)?;

    let recipe = collection::add_recipe(data.persistence(), collection, user_id, recipe_id).await?;

    Ok(common::Result::<()>::http_created(recipe))
}

async fn remove(
    req: &HttpRequest,
    data: &AppState,
    collection: RecipeCollection,
    recipe_id: i32,
) -> Result<HttpResponse, AppError> {
    let user_id = authenticated_user(req)?;

    collection::remove_recipe(data.persistence(), collection, user_id, recipe_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[post("/recipes/{id}/shopping_cart")]
async fn add_to_shopping_cart(
    req: HttpRequest,
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    add(&req, &data, RecipeCollection::ShoppingCart, path.into_inner()).await
}

#[delete("/recipes/{id}/shopping_cart")]
async fn remove_from_shopping_cart(
    req: HttpRequest,
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    remove(&req, &data, RecipeCollection::ShoppingCart, path.into_inner()).await
}

#[post("/recipes/{id}/favorite")]
async fn add_to_favorites(
    req: HttpRequest,
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    add(&req, &data, RecipeCollection::Favorite, path.into_inner()).await
}

#[delete("/recipes/{id}/favorite")]
async fn remove_from_favorites(
    req: HttpRequest,
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    remove(&req, &data, RecipeCollection::Favorite, path.into_inner()).await
}
