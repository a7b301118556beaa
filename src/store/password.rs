use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::OwnerScope;
use crate::message::AppError;
use crate::models::password::PasswordEntryRequest;
use crate::models::PasswordEntry;

#[async_trait]
pub trait PasswordRepo: Send + Sync {
    /// Lists entries, optionally only those filed under `category_id`.
    async fn list(
        &self,
        scope: OwnerScope,
        category_id: Option<i64>,
    ) -> Result<Vec<PasswordEntry>, AppError>;

    /// Inserts an entry. A `category_id` that is not a live category of the
    /// same user is reported as `NotFound("category")`.
    async fn insert(
        &self,
        scope: OwnerScope,
        entry: &PasswordEntryRequest,
    ) -> Result<PasswordEntry, AppError>;

    /// Replaces an entry's fields. Matches nothing when the target category is
    /// not a live category of the same user.
    async fn update(
        &self,
        scope: OwnerScope,
        id: i64,
        entry: &PasswordEntryRequest,
    ) -> Result<u64, AppError>;

    async fn delete(&self, scope: OwnerScope, id: i64) -> Result<u64, AppError>;
}

const PASSWORD_COLUMNS: &str = "id, user_id, category_id, name, login, password, additional, \
                                created_at, updated_at, deleted_at";

#[derive(Clone)]
pub struct PgPasswordRepo {
    pool: PgPool,
}

impl PgPasswordRepo {
    pub fn new(pool: PgPool) -> Self {
        PgPasswordRepo { pool }
    }
}

#[async_trait]
impl PasswordRepo for PgPasswordRepo {
    async fn list(
        &self,
        scope: OwnerScope,
        category_id: Option<i64>,
    ) -> Result<Vec<PasswordEntry>, AppError> {
        let mut qb =
            QueryBuilder::<Postgres>::new(format!("SELECT {PASSWORD_COLUMNS} FROM passwords"));
        scope.push_where(&mut qb);
        if let Some(category_id) = category_id {
            qb.push(" AND category_id = ").push_bind(category_id);
        }
        qb.push(" ORDER BY id");

        let entries = qb
            .build_query_as::<PasswordEntry>()
            .fetch_all(&self.pool)
            .await?;
        Ok(entries)
    }

    async fn insert(
        &self,
        scope: OwnerScope,
        entry: &PasswordEntryRequest,
    ) -> Result<PasswordEntry, AppError> {
        let mut qb = QueryBuilder::<Postgres>::new(
            "INSERT INTO passwords (user_id, category_id, name, login, password, additional) \
             SELECT ",
        );
        qb.separated(", ")
            .push_bind(scope.user_id())
            .push_bind(entry.category_id)
            .push_bind(entry.name.as_str())
            .push_bind(entry.login.as_str())
            .push_bind(entry.password.as_str())
            .push_bind(entry.additional.as_str());
        if let Some(category_id) = entry.category_id {
            qb.push(" WHERE ");
            scope.push_owned_category(&mut qb, category_id);
        }
        qb.push(format!(" RETURNING {PASSWORD_COLUMNS}"));

        qb.build_query_as::<PasswordEntry>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound("category"))
    }

    async fn update(
        &self,
        scope: OwnerScope,
        id: i64,
        entry: &PasswordEntryRequest,
    ) -> Result<u64, AppError> {
        let mut qb = QueryBuilder::<Postgres>::new("UPDATE passwords SET updated_at = NOW()");
        qb.push(", category_id = ").push_bind(entry.category_id);
        qb.push(", name = ").push_bind(entry.name.as_str());
        qb.push(", login = ").push_bind(entry.login.as_str());
        qb.push(", password = ").push_bind(entry.password.as_str());
        qb.push(", additional = ").push_bind(entry.additional.as_str());
        scope.push_where_id(&mut qb, id);
        if let Some(category_id) = entry.category_id {
            qb.push(" AND ");
            scope.push_owned_category(&mut qb, category_id);
        }

        let result = qb.build().execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, scope: OwnerScope, id: i64) -> Result<u64, AppError> {
        let mut qb = QueryBuilder::<Postgres>::new(
            "UPDATE passwords SET deleted_at = NOW(), updated_at = NOW()",
        );
        scope.push_where_id(&mut qb, id);

        let result = qb.build().execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}
