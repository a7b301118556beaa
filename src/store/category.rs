use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::OwnerScope;
use crate::message::AppError;
use crate::models::Category;

#[async_trait]
pub trait CategoryRepo: Send + Sync {
    async fn list(&self, scope: OwnerScope) -> Result<Vec<Category>, AppError>;

    async fn find(&self, scope: OwnerScope, id: i64) -> Result<Option<Category>, AppError>;

    async fn insert(&self, scope: OwnerScope, name: &str) -> Result<Category, AppError>;

    /// Renames a category, returning the number of rows touched.
    async fn update(&self, scope: OwnerScope, id: i64, name: &str) -> Result<u64, AppError>;

    /// Soft-deletes a category and detaches its password entries, returning
    /// the number of categories removed.
    async fn delete(&self, scope: OwnerScope, id: i64) -> Result<u64, AppError>;
}

const CATEGORY_COLUMNS: &str = "id, user_id, name, created_at, updated_at, deleted_at";

#[derive(Clone)]
pub struct PgCategoryRepo {
    pool: PgPool,
}

impl PgCategoryRepo {
    pub fn new(pool: PgPool) -> Self {
        PgCategoryRepo { pool }
    }
}

#[async_trait]
impl CategoryRepo for PgCategoryRepo {
    async fn list(&self, scope: OwnerScope) -> Result<Vec<Category>, AppError> {
        let mut qb =
            QueryBuilder::<Postgres>::new(format!("SELECT {CATEGORY_COLUMNS} FROM categories"));
        scope.push_where(&mut qb);
        qb.push(" ORDER BY id");

        let categories = qb
            .build_query_as::<Category>()
            .fetch_all(&self.pool)
            .await?;
        Ok(categories)
    }

    async fn find(&self, scope: OwnerScope, id: i64) -> Result<Option<Category>, AppError> {
        let mut qb =
            QueryBuilder::<Postgres>::new(format!("SELECT {CATEGORY_COLUMNS} FROM categories"));
        scope.push_where_id(&mut qb, id);

        let category = qb
            .build_query_as::<Category>()
            .fetch_optional(&self.pool)
            .await?;
        Ok(category)
    }

    async fn insert(&self, scope: OwnerScope, name: &str) -> Result<Category, AppError> {
        let mut qb =
            QueryBuilder::<Postgres>::new("INSERT INTO categories (user_id, name) VALUES (");
        qb.push_bind(scope.user_id())
            .push(", ")
            .push_bind(name)
            .push(format!(") RETURNING {CATEGORY_COLUMNS}"));

        let category = qb
            .build_query_as::<Category>()
            .fetch_one(&self.pool)
            .await?;
        Ok(category)
    }

    async fn update(&self, scope: OwnerScope, id: i64, name: &str) -> Result<u64, AppError> {
        let mut qb =
            QueryBuilder::<Postgres>::new("UPDATE categories SET updated_at = NOW(), name = ");
        qb.push_bind(name);
        scope.push_where_id(&mut qb, id);

        let result = qb.build().execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, scope: OwnerScope, id: i64) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await?;

        let mut qb = QueryBuilder::<Postgres>::new(
            "UPDATE categories SET deleted_at = NOW(), updated_at = NOW()",
        );
        scope.push_where_id(&mut qb, id);
        let deleted = qb.build().execute(&mut *tx).await?.rows_affected();

        if deleted > 0 {
            let mut qb = QueryBuilder::<Postgres>::new(
                "UPDATE passwords SET category_id = NULL, updated_at = NOW()",
            );
            scope.push_where(&mut qb);
            qb.push(" AND category_id = ").push_bind(id);
            qb.build().execute(&mut *tx).await?;
        }

        tx.commit().await?;
        Ok(deleted)
    }
}
