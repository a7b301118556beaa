use async_trait::async_trait;
use sqlx::PgPool;

use crate::message::AppError;
use crate::models::{Token, User};

#[async_trait]
pub trait UserRepo: Send + Sync {
    /// Inserts a user. A taken email is reported as `Conflict`.
    async fn insert_user(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, AppError>;

    async fn find_user(&self, id: i64) -> Result<Option<User>, AppError>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    async fn insert_token(&self, user_id: i64, token: &str) -> Result<Token, AppError>;

    /// Exact-match lookup of a live token.
    async fn find_token(&self, token: &str) -> Result<Option<Token>, AppError>;

    async fn revoke_token(&self, token_id: i64) -> Result<(), AppError>;
}

const USER_COLUMNS: &str = "id, name, email, password, pin, created_at, updated_at, deleted_at";
const TOKEN_COLUMNS: &str = "id, user_id, token, created_at, updated_at, deleted_at";

#[derive(Clone)]
pub struct PgUserRepo {
    pool: PgPool,
}

impl PgUserRepo {
    pub fn new(pool: PgPool) -> Self {
        PgUserRepo { pool }
    }
}

#[async_trait]
impl UserRepo for PgUserRepo {
    async fn insert_user(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, AppError> {
        let sql = format!(
            "INSERT INTO users (name, email, password) VALUES ($1, $2, $3) RETURNING {USER_COLUMNS}"
        );

        sqlx::query_as::<_, User>(&sql)
            .bind(name)
            .bind(email)
            .bind(password_hash)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    AppError::Conflict(format!("user with email {email} already exists"))
                }
                other => AppError::Database(other),
            })
    }

    async fn find_user(&self, id: i64) -> Result<Option<User>, AppError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1 AND deleted_at IS NULL");

        let user = sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let sql =
            format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1 AND deleted_at IS NULL");

        let user = sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn insert_token(&self, user_id: i64, token: &str) -> Result<Token, AppError> {
        let sql = format!(
            "INSERT INTO tokens (user_id, token) VALUES ($1, $2) RETURNING {TOKEN_COLUMNS}"
        );

        let token = sqlx::query_as::<_, Token>(&sql)
            .bind(user_id)
            .bind(token)
            .fetch_one(&self.pool)
            .await?;
        Ok(token)
    }

    async fn find_token(&self, token: &str) -> Result<Option<Token>, AppError> {
        let sql =
            format!("SELECT {TOKEN_COLUMNS} FROM tokens WHERE token = $1 AND deleted_at IS NULL");

        let token = sqlx::query_as::<_, Token>(&sql)
            .bind(token)
            .fetch_optional(&self.pool)
            .await?;
        Ok(token)
    }

    async fn revoke_token(&self, token_id: i64) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE tokens SET deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(token_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
