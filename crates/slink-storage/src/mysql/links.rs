use super::{map_sqlx_error, parse_timestamp, unique_violation};
use async_trait::async_trait;
use slink_core::repository::{LinkRepository, Result};
use slink_core::{LinkId, ShortCode, ShortLink, StorageError};
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};

/// MySQL implementation of [`LinkRepository`].
///
/// Uniqueness of `short_code` and `long_url` is enforced by the
/// `uk_short_code` and `uk_long_url_hash` indexes, the latter over a stored
/// SHA-256 of the URL so arbitrarily long URLs can be indexed.
#[derive(Debug, Clone)]
pub struct MySqlLinkRepository {
    pool: MySqlPool,
}

impl MySqlLinkRepository {
    /// Creates a repository from an existing MySQL connection pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

fn row_to_link(row: MySqlRow) -> Result<ShortLink> {
    let id: String = row.try_get("id").map_err(map_sqlx_error)?;
    let code: String = row.try_get("short_code").map_err(map_sqlx_error)?;
    let long_url: String = row.try_get("long_url").map_err(map_sqlx_error)?;
    let created_at: i64 = row.try_get("created_at").map_err(map_sqlx_error)?;

    Ok(ShortLink {
        id: LinkId::from(id),
        code: ShortCode::new_unchecked(code),
        long_url,
        created_at: parse_timestamp("created_at", created_at)?,
    })
}

fn map_write_error(err: sqlx::Error, code: &ShortCode, long_url: &str) -> StorageError {
    match unique_violation(&err) {
        Some(message) if message.contains("uk_short_code") => {
            StorageError::DuplicateCode(code.to_string())
        }
        Some(message) if message.contains("uk_long_url_hash") => {
            StorageError::DuplicateUrl(long_url.to_owned())
        }
        _ => map_sqlx_error(err),
    }
}

#[async_trait]
impl LinkRepository for MySqlLinkRepository {
    async fn insert(&self, link: ShortLink) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO short_links (id, short_code, long_url, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(link.id.as_str())
        .bind(link.code.as_str())
        .bind(&link.long_url)
        .bind(link.created_at.as_second())
        .execute(&self.pool)
        .await
        .map_err(|err| map_write_error(err, &link.code, &link.long_url))?;

        Ok(())
    }

    async fn find_by_code(&self, code: &ShortCode) -> Result<Option<ShortLink>> {
        let row = sqlx::query(
            r#"
            SELECT id, short_code, long_url, created_at
            FROM short_links
            WHERE short_code = ?
            LIMIT 1
            "#,
        )
        .bind(code.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map(row_to_link).transpose()
    }

    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<ShortLink>> {
        let row = sqlx::query(
            r#"
            SELECT id, short_code, long_url, created_at
            FROM short_links
            WHERE long_url_hash = UNHEX(SHA2(?, 256))
            LIMIT 1
            "#,
        )
        .bind(long_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map(row_to_link).transpose()
    }

    async fn update_long_url(&self, id: &LinkId, long_url: &str) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE short_links
            SET long_url = ?
            WHERE id = ?
            "#,
        )
        .bind(long_url)
        .bind(id.as_str())
        .execute(&self.pool)
        .await;

        let result = match result {
            Ok(result) => result,
            Err(err) => {
                return Err(match unique_violation(&err) {
                    Some(_) => StorageError::DuplicateUrl(long_url.to_owned()),
                    None => map_sqlx_error(err),
                })
            }
        };

        if result.rows_affected() > 0 {
            return Ok(true);
        }

        // MySQL reports zero affected rows when the value is unchanged.
        let exists = sqlx::query("SELECT 1 FROM short_links WHERE id = ? LIMIT 1")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .is_some();

        Ok(exists)
    }

    async fn delete(&self, id: &LinkId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM short_links WHERE id = ?")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}
