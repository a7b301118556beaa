use sqlx::{Postgres, QueryBuilder};

/// Restricts a query to live rows owned by one user.
///
/// Every category and password-entry query goes through this, so there is a
/// single place where ownership filtering is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnerScope {
    user_id: i64,
}

impl OwnerScope {
    pub fn new(user_id: i64) -> Self {
        OwnerScope { user_id }
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    /// Appends ` WHERE user_id = $n AND deleted_at IS NULL`.
    pub fn push_where(&self, qb: &mut QueryBuilder<'_, Postgres>) {
        qb.push(" WHERE user_id = ")
            .push_bind(self.user_id)
            .push(" AND deleted_at IS NULL");
    }

    /// Same as [`push_where`](Self::push_where) narrowed to a single row id.
    pub fn push_where_id(&self, qb: &mut QueryBuilder<'_, Postgres>, id: i64) {
        self.push_where(qb);
        qb.push(" AND id = ").push_bind(id);
    }

    /// Appends an `EXISTS` test for a live category owned by this user. The
    /// category row is share-locked so a concurrent delete waits for the caller.
    pub fn push_owned_category(&self, qb: &mut QueryBuilder<'_, Postgres>, category_id: i64) {
        qb.push("EXISTS (SELECT 1 FROM categories WHERE id = ")
            .push_bind(category_id)
            .push(" AND user_id = ")
            .push_bind(self.user_id)
            .push(" AND deleted_at IS NULL FOR SHARE)");
    }

    /// For stores that filter in memory rather than in SQL.
    pub fn owns(&self, owner_id: i64) -> bool {
        self.user_id == owner_id
    }
}
