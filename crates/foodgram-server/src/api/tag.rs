//! Public tag lookup endpoints

use actix_web::{HttpResponse, get, web};

use foodgram_common::FoodgramError;
use foodgram_persistence::TagInfo;

use crate::{
    error::AppError,
    model::{AppState, response as common},
};

#[get("/tags")]
async fn list(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let tags = data
        .persistence()
        .tag_find_all()
        .await
        .map_err(FoodgramError::database)?;

    Ok(common::Result::<Vec<TagInfo>>::http_success(tags))
}

#[get("/tags/{id}")]
async fn detail(
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let tag = data
        .persistence()
        .tag_find_by_id(id)
        .await
        .map_err(FoodgramError::database)?
        .ok_or_else(|| FoodgramError::ResourceNotFound(format!("tag {}", id)))?;

    Ok(common::Result::<TagInfo>::http_success(tag))
}
