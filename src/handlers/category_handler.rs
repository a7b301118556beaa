use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::message::AppError;
use crate::models::category::CategoryRequest;
use crate::models::{AuthUser, IdResponse};
use crate::state::AppState;

#[get("/all")]
pub async fn list_categories(
    state: web::Data<AppState>,
    auth: AuthUser,
) -> Result<HttpResponse, AppError> {
    let categories = state.categories.list(auth.user.id).await?;

    Ok(HttpResponse::Ok().json(categories))
}

#[post("/create")]
pub async fn create_category(
    state: web::Data<AppState>,
    auth: AuthUser,
    payload: web::Json<CategoryRequest>,
) -> Result<HttpResponse, AppError> {
    let category = state.categories.create(auth.user.id, &payload.name).await?;

    Ok(HttpResponse::Ok().json(category))
}

#[put("/update/{id}")]
pub async fn update_category(
    state: web::Data<AppState>,
    auth: AuthUser,
    id: web::Path<i64>,
    payload: web::Json<CategoryRequest>,
) -> Result<HttpResponse, AppError> {
    let id = state
        .categories
        .update(id.into_inner(), auth.user.id, &payload.name)
        .await?;

    Ok(HttpResponse::Ok().json(IdResponse { id }))
}

#[delete("/delete/{id}")]
pub async fn delete_category(
    state: web::Data<AppState>,
    auth: AuthUser,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    state.categories.delete(id, auth.user.id).await?;

    Ok(HttpResponse::Ok().json(IdResponse { id }))
}
