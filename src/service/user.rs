use std::sync::Arc;

use actix_web::web;
use tracing::{debug, info};

use crate::message::AppError;
use crate::models::{AuthUser, Token};
use crate::service::require_non_blank;
use crate::store::UserRepo;
use crate::utils::password::{hash_password, verify_password};
use crate::utils::token::create_token;

/// Registration, login and bearer-token resolution.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepo>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepo>, bcrypt_cost: u32) -> Self {
        UserService { repo, bcrypt_cost }
    }

    /// Creates a user and issues its first token.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Token, AppError> {
        require_non_blank("email", email)?;
        require_non_blank("password", password)?;

        let plain = password.to_string();
        let cost = self.bcrypt_cost;
        let hash = web::block(move || hash_password(&plain, cost))
            .await
            .map_err(|e| AppError::Internal(e.to_string()))??;

        let user = self.repo.insert_user(name, email, &hash).await?;
        info!(user_id = user.id, "registered user");

        self.issue_token(user.id).await
    }

    /// Verifies credentials and mints an additional token. Earlier tokens stay valid.
    pub async fn login(&self, email: &str, password: &str) -> Result<Token, AppError> {
        let user = self
            .repo
            .find_user_by_email(email)
            .await?
            .ok_or(AppError::NotFound("user"))?;

        let hash = user.password.clone();
        let plain = password.to_string();
        web::block(move || verify_password(&hash, &plain))
            .await
            .map_err(|e| AppError::Internal(e.to_string()))??;

        debug!(user_id = user.id, "login succeeded");
        self.issue_token(user.id).await
    }

    /// Resolves a bearer token to the token row and its owner.
    pub async fn resolve_token(&self, token: &str) -> Result<AuthUser, AppError> {
        let token = self
            .repo
            .find_token(token)
            .await?
            .ok_or(AppError::NotFound("token"))?;

        let user = self
            .repo
            .find_user(token.user_id)
            .await?
            .ok_or(AppError::NotFound("user"))?;

        Ok(AuthUser { token, user })
    }

    /// Revokes the token the caller authenticated with.
    pub async fn logout(&self, auth: &AuthUser) -> Result<(), AppError> {
        self.repo.revoke_token(auth.token.id).await?;
        info!(user_id = auth.user.id, token_id = auth.token.id, "revoked token");
        Ok(())
    }

    async fn issue_token(&self, user_id: i64) -> Result<Token, AppError> {
        let value = create_token()?;
        self.repo.insert_token(user_id, &value).await
    }
}
