use actix_web::middleware::from_fn;
use actix_web::web;

use crate::handlers::auth_handler::require_token;
use crate::handlers::category_handler::{
    create_category, delete_category, list_categories, update_category,
};
use crate::handlers::password_handler::{
    create_password, delete_password, list_passwords, update_password,
};
use crate::handlers::system_handler::{export_metrics, ping};
use crate::handlers::user_handler::{get_user, login, logout, register};
use crate::message::AppError;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .service(ping)
    .service(export_metrics)
    .service(
        web::scope("/user")
            .service(register)
            .service(login)
            .service(logout)
            .service(get_user),
    )
    .service(
        web::scope("/category")
            .wrap(from_fn(require_token))
            .service(list_categories)
            .service(create_category)
            .service(update_category)
            .service(delete_category),
    )
    .service(
        web::scope("/password")
            .wrap(from_fn(require_token))
            .service(list_passwords)
            .service(create_password)
            .service(update_password)
            .service(delete_password),
    );
}
