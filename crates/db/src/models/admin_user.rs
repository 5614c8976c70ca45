use serde::Serialize;
use sqlx::FromRow;
use tones_core::types::{DbId, Timestamp};

/// A row from the `admin_users` table.
///
/// `password_hash` is never serialized into responses.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AdminUser {
    pub id: DbId,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: Timestamp,
}
