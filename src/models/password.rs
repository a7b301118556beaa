use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored credential. The secret is kept as entered; there is no encryption layer.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PasswordEntry {
    pub id: i64,
    pub user_id: i64,
    pub category_id: Option<i64>,
    pub name: String,
    pub login: String,
    pub password: String,
    pub additional: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PasswordEntryRequest {
    pub category_id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub additional: String,
}

#[derive(Debug, Deserialize)]
pub struct PasswordListQuery {
    pub category_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PasswordEntryResponse {
    pub id: i64,
    pub category_id: Option<i64>,
    pub name: String,
    pub login: String,
    pub password: String,
    pub additional: String,
}

impl From<PasswordEntry> for PasswordEntryResponse {
    fn from(entry: PasswordEntry) -> Self {
        PasswordEntryResponse {
            id: entry.id,
            category_id: entry.category_id,
            name: entry.name,
            login: entry.login,
            password: entry.password,
            additional: entry.additional,
        }
    }
}
