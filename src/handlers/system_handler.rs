use actix_web::{get, web, HttpResponse};

use crate::message::AppError;
use crate::metrics::Metrics;

#[get("/ping")]
pub async fn ping() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "message": "pong" }))
}

#[get("/metrics")]
pub async fn export_metrics(metrics: web::Data<Metrics>) -> Result<HttpResponse, AppError> {
    let body = metrics
        .render()
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok()
        .content_type(prometheus::TEXT_FORMAT)
        .body(body))
}
