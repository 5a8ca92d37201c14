//! The `users` table row and its projection.

use chrono::{DateTime, Utc};
use domain::models::{Role, UserInfo};
use sqlx::FromRow;
use uuid::Uuid;

/// Full user record from the database. Never sent to the client; the
/// password hash stays server-side.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub mobile: Option<String>,
    pub village: Option<String>,
    pub role: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn role(&self) -> Role {
        self.role.parse().unwrap_or_default()
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Role::Admin
    }

    /// Convert to the client-safe projection.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            mobile: self.mobile.clone(),
            village: self.village.clone(),
            role: self.role(),
            created_at: self.created_at,
        }
    }
}
