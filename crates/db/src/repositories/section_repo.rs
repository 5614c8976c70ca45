//! Repository for the `page_content` table.

use sqlx::SqlitePool;
use tones_core::locale::{Language, PageSlug};
use tones_core::types::DbId;

use crate::models::section::{
    slot_to_storage, CreatePageSection, PageSection, PageSummary, ReorderItem, ResolvedSection,
    UpdatePageSection,
};

/// Column list for the `page_content` table.
const COLUMNS: &str = "id, page_slug, section_type, section_key, \
    content_ko, content_ja, content_zh_cn, content_zh_tw, \
    display_order, is_visible, created_at, updated_at";

/// Error type for the reorder batch, which can fail on an unknown id.
#[derive(Debug, thiserror::Error)]
pub enum ReorderError {
    #[error("Reorder references unknown section id {0}")]
    UnknownId(DbId),

    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

/// Provides CRUD and ordering operations for page sections.
pub struct PageSectionRepo;

impl PageSectionRepo {
    /// List the visible sections of a page, ordered, with content
    /// resolved for the requested language. An unknown page yields an
    /// empty list, never an error.
    pub async fn list_for_page(
        pool: &SqlitePool,
        page_slug: &str,
        lang: Language,
    ) -> Result<Vec<ResolvedSection>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM page_content \
             WHERE page_slug = ? AND is_visible = 1 \
             ORDER BY display_order ASC, id ASC"
        );
        let rows = sqlx::query_as::<_, PageSection>(&query)
            .bind(page_slug)
            .fetch_all(pool)
            .await?;

        Ok(rows.iter().map(|row| row.resolved(lang)).collect())
    }

    /// Find a section by its per-page key, all language slots raw.
    pub async fn find_by_key(
        pool: &SqlitePool,
        page_slug: &str,
        section_key: &str,
    ) -> Result<Option<PageSection>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM page_content WHERE page_slug = ? AND section_key = ?"
        );
        sqlx::query_as::<_, PageSection>(&query)
            .bind(page_slug)
            .bind(section_key)
            .fetch_optional(pool)
            .await
    }

    /// Find a section by id, all language slots raw.
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<PageSection>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM page_content WHERE id = ?");
        sqlx::query_as::<_, PageSection>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new section.
    ///
    /// When `display_order` is not supplied, the section goes one past
    /// the current maximum for its page. Duplicate `(page_slug,
    /// section_key)` pairs surface as a sqlx unique-constraint error.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreatePageSection,
    ) -> Result<PageSection, sqlx::Error> {
        let query = format!(
            "INSERT INTO page_content \
                (page_slug, section_type, section_key, \
                 content_ko, content_ja, content_zh_cn, content_zh_tw, \
                 display_order, is_visible) \
             VALUES (?, ?, ?, ?, ?, ?, ?, \
                COALESCE(?, (SELECT COALESCE(MAX(display_order), 0) + 1 \
                             FROM page_content WHERE page_slug = ?)), \
                COALESCE(?, 1)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PageSection>(&query)
            .bind(&input.page_slug)
            .bind(&input.section_type)
            .bind(&input.section_key)
            .bind(slot_to_storage(&input.content_ko))
            .bind(slot_to_storage(&input.content_ja))
            .bind(slot_to_storage(&input.content_zh_cn))
            .bind(slot_to_storage(&input.content_zh_tw))
            .bind(input.display_order)
            .bind(&input.page_slug)
            .bind(input.is_visible)
            .fetch_one(pool)
            .await
    }

    /// Apply a partial update. Absent fields keep their prior values; a
    /// language slot passed as JSON `null` is cleared. `updated_at` is
    /// refreshed unconditionally. Returns `None` when the id is unknown.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdatePageSection,
    ) -> Result<Option<PageSection>, sqlx::Error> {
        let Some(existing) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        // A slot is only touched when the field is present in the input;
        // present-but-null clears it.
        let content_ko = match &input.content_ko {
            Some(v) => slot_to_storage(&Some(v.clone())),
            None => existing.content_ko.clone(),
        };
        let content_ja = match &input.content_ja {
            Some(v) => slot_to_storage(&Some(v.clone())),
            None => existing.content_ja.clone(),
        };
        let content_zh_cn = match &input.content_zh_cn {
            Some(v) => slot_to_storage(&Some(v.clone())),
            None => existing.content_zh_cn.clone(),
        };
        let content_zh_tw = match &input.content_zh_tw {
            Some(v) => slot_to_storage(&Some(v.clone())),
            None => existing.content_zh_tw.clone(),
        };

        let query = format!(
            "UPDATE page_content SET \
                section_type = ?, \
                content_ko = ?, content_ja = ?, content_zh_cn = ?, content_zh_tw = ?, \
                display_order = ?, is_visible = ?, \
                updated_at = datetime('now') \
             WHERE id = ? \
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, PageSection>(&query)
            .bind(input.section_type.as_ref().unwrap_or(&existing.section_type))
            .bind(content_ko)
            .bind(content_ja)
            .bind(content_zh_cn)
            .bind(content_zh_tw)
            .bind(input.display_order.unwrap_or(existing.display_order))
            .bind(input.is_visible.unwrap_or(existing.is_visible))
            .bind(id)
            .fetch_one(pool)
            .await?;

        Ok(Some(updated))
    }

    /// Permanently delete a section. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM page_content WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Apply a reorder batch as one transaction, all-or-nothing: if any
    /// item references an unknown id the whole batch rolls back and the
    /// page's ordering is left untouched.
    pub async fn reorder(pool: &SqlitePool, items: &[ReorderItem]) -> Result<(), ReorderError> {
        let mut tx = pool.begin().await?;

        for item in items {
            let result = sqlx::query(
                "UPDATE page_content \
                 SET display_order = ?, updated_at = datetime('now') \
                 WHERE id = ?",
            )
            .bind(item.display_order)
            .bind(item.id)
            .execute(&mut *tx)
            .await?;

            if result.rows_affected() == 0 {
                tracing::warn!(id = item.id, "Reorder batch references unknown section id, rolling back");
                tx.rollback().await?;
                return Err(ReorderError::UnknownId(item.id));
            }
        }

        tx.commit().await?;
        Ok(())
    }

    /// The fixed page catalog merged with per-page section counts, for
    /// the admin surface's page listing.
    pub async fn list_pages(pool: &SqlitePool) -> Result<Vec<PageSummary>, sqlx::Error> {
        let counts: Vec<(String, i64)> = sqlx::query_as(
            "SELECT page_slug, COUNT(*) FROM page_content GROUP BY page_slug",
        )
        .fetch_all(pool)
        .await?;

        let count_for = |slug: &str| {
            counts
                .iter()
                .find(|(s, _)| s == slug)
                .map(|(_, n)| *n)
                .unwrap_or(0)
        };

        Ok(PageSlug::ALL
            .into_iter()
            .map(|page| PageSummary {
                slug: page.as_str().to_string(),
                label: page.label().to_string(),
                path: page.path().to_string(),
                section_count: count_for(page.as_str()),
            })
            .collect())
    }
}
