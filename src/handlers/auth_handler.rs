use std::future::{ready, Ready};

use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{Payload, ServiceRequest, ServiceResponse};
use actix_web::http::header::{self, HeaderMap};
use actix_web::middleware::Next;
use actix_web::{web, Error, FromRequest, HttpMessage, HttpRequest};
use actix_web_httpauth::headers::authorization::{Bearer, Scheme};
use tracing::debug;

use crate::message::AppError;
use crate::models::AuthUser;
use crate::state::AppState;

/// Pulls the token out of an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Result<String, AppError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .filter(|value| !value.is_empty())
        .ok_or(AppError::MissingAuthorization)?;

    let bearer = Bearer::parse(value).map_err(|_| AppError::InvalidAuthorizationFormat)?;
    Ok(bearer.token().to_string())
}

/// Gate for protected routes: resolves the bearer token and stores the
/// resulting [`AuthUser`] in the request extensions. Rejections are answered
/// here so outer middleware still sees a response.
pub async fn require_token<B: MessageBody>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, Error> {
    match authenticate(&req).await {
        Ok(auth) => {
            req.extensions_mut().insert(auth);
            Ok(next.call(req).await?.map_into_left_body())
        }
        Err(e) => {
            debug!(path = %req.path(), reason = %e, "rejected request");
            Ok(req.error_response(e).map_into_right_body())
        }
    }
}

async fn authenticate(req: &ServiceRequest) -> Result<AuthUser, AppError> {
    let token = bearer_token(req.headers())?;

    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::Internal("application state is not configured".to_string()))?;

    match state.users.resolve_token(&token).await {
        Err(AppError::NotFound(_)) => Err(AppError::Unauthorized),
        other => other,
    }
}

impl FromRequest for AuthUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<AuthUser>()
                .cloned()
                .ok_or(AppError::Unauthorized),
        )
    }
}
