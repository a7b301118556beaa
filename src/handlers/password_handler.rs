use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::message::AppError;
use crate::models::password::{PasswordEntryRequest, PasswordListQuery};
use crate::models::{AuthUser, IdResponse};
use crate::state::AppState;

#[get("/all")]
pub async fn list_passwords(
    state: web::Data<AppState>,
    auth: AuthUser,
    query: web::Query<PasswordListQuery>,
) -> Result<HttpResponse, AppError> {
    let entries = state
        .passwords
        .list(auth.user.id, query.category_id)
        .await?;

    Ok(HttpResponse::Ok().json(entries))
}

#[post("/create")]
pub async fn create_password(
    state: web::Data<AppState>,
    auth: AuthUser,
    payload: web::Json<PasswordEntryRequest>,
) -> Result<HttpResponse, AppError> {
    let entry = state.passwords.create(auth.user.id, &payload).await?;

    Ok(HttpResponse::Ok().json(entry))
}

#[put("/update/{id}")]
pub async fn update_password(
    state: web::Data<AppState>,
    auth: AuthUser,
    id: web::Path<i64>,
    payload: web::Json<PasswordEntryRequest>,
) -> Result<HttpResponse, AppError> {
    let id = state
        .passwords
        .update(id.into_inner(), auth.user.id, &payload)
        .await?;

    Ok(HttpResponse::Ok().json(IdResponse { id }))
}

#[delete("/delete/{id}")]
pub async fn delete_password(
    state: web::Data<AppState>,
    auth: AuthUser,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    state.passwords.delete(id, auth.user.id).await?;

    Ok(HttpResponse::Ok().json(IdResponse { id }))
}
