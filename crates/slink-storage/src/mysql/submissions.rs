use super::{map_sqlx_error, parse_timestamp, unique_violation};
use async_trait::async_trait;
use slink_core::repository::{Result, SubmissionRepository};
use slink_core::{StorageError, SubmissionRecord};
use sqlx::{MySqlPool, Row};

/// MySQL implementation of [`SubmissionRepository`].
#[derive(Debug, Clone)]
pub struct MySqlSubmissionRepository {
    pool: MySqlPool,
}

impl MySqlSubmissionRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionRepository for MySqlSubmissionRepository {
    async fn insert(&self, record: SubmissionRecord) -> Result<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO submissions (token, language_id, source_code, stdin, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.token)
        .bind(&record.language_id)
        .bind(&record.source_code)
        .bind(&record.stdin)
        .bind(record.created_at.as_second())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(err) if unique_violation(&err).is_some() => {
                Err(StorageError::DuplicateToken(record.token))
            }
            Err(err) => Err(map_sqlx_error(err)),
        }
    }

    async fn get(&self, token: &str) -> Result<Option<SubmissionRecord>> {
        let row = sqlx::query(
            r#"
            SELECT token, language_id, source_code, stdin, created_at
            FROM submissions
            WHERE token = ?
            LIMIT 1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let created_at: i64 = row.try_get("created_at").map_err(map_sqlx_error)?;

        Ok(Some(SubmissionRecord {
            token: row.try_get("token").map_err(map_sqlx_error)?,
            language_id: row.try_get("language_id").map_err(map_sqlx_error)?,
            source_code: row.try_get("source_code").map_err(map_sqlx_error)?,
            stdin: row.try_get("stdin").map_err(map_sqlx_error)?,
            created_at: parse_timestamp("created_at", created_at)?,
        }))
    }
}
