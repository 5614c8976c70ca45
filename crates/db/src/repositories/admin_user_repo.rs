//! Repository for the `admin_users` table.

use sqlx::SqlitePool;
use tones_core::types::DbId;

use crate::models::admin_user::AdminUser;

const COLUMNS: &str = "id, username, password_hash, created_at";

pub struct AdminUserRepo;

impl AdminUserRepo {
    pub async fn find_by_username(
        pool: &SqlitePool,
        username: &str,
    ) -> Result<Option<AdminUser>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM admin_users WHERE username = ?");
        sqlx::query_as::<_, AdminUser>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<AdminUser>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM admin_users WHERE id = ?");
        sqlx::query_as::<_, AdminUser>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(
        pool: &SqlitePool,
        username: &str,
        password_hash: &str,
    ) -> Result<AdminUser, sqlx::Error> {
        let query = format!(
            "INSERT INTO admin_users (username, password_hash) \
             VALUES (?, ?) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdminUser>(&query)
            .bind(username)
            .bind(password_hash)
            .fetch_one(pool)
            .await
    }
}
