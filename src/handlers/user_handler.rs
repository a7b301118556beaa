use actix_web::middleware::from_fn;
use actix_web::{get, post, web, HttpResponse};

use crate::handlers::auth_handler::require_token;
use crate::message::AppError;
use crate::models::user::{LoginRequest, TokenResponse, UserCreateRequest, UserResponse};
use crate::models::AuthUser;
use crate::state::AppState;

#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    payload: web::Json<UserCreateRequest>,
) -> Result<HttpResponse, AppError> {
    let token = state
        .users
        .register(&payload.name, &payload.email, &payload.password)
        .await?;

    Ok(HttpResponse::Ok().json(TokenResponse { token: token.token }))
}

#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let token = state.users.login(&payload.email, &payload.password).await?;

    Ok(HttpResponse::Ok().json(TokenResponse { token: token.token }))
}

#[get("", wrap = "from_fn(require_token)")]
pub async fn get_user(auth: AuthUser) -> HttpResponse {
    HttpResponse::Ok().json(UserResponse::from(&auth.user))
}

#[post("/logout", wrap = "from_fn(require_token)")]
pub async fn logout(
    state: web::Data<AppState>,
    auth: AuthUser,
) -> Result<HttpResponse, AppError> {
    state.users.logout(&auth).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "logged out" })))
}
