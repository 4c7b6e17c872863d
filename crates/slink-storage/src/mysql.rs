mod links;
mod submissions;

pub use links::MySqlLinkRepository;
pub use submissions::MySqlSubmissionRepository;

use jiff::Timestamp;
use slink_core::repository::Result;
use slink_core::StorageError;
use sqlx::MySqlPool;
use tracing::info;

const SHORT_LINKS_DDL: &str = include_str!("../ddl/mysql/short_links.sql");
const SUBMISSIONS_DDL: &str = include_str!("../ddl/mysql/submissions.sql");

/// Opens a new MySQL connection pool.
pub async fn connect(database_url: &str) -> Result<MySqlPool> {
    MySqlPool::connect(database_url)
        .await
        .map_err(map_sqlx_error)
}

/// Creates the tables used by the MySQL repositories if they do not exist yet.
///
/// The statements are idempotent; existing tables are left untouched.
pub async fn ensure_schema(pool: &MySqlPool) -> Result<()> {
    for ddl in [SHORT_LINKS_DDL, SUBMISSIONS_DDL] {
        sqlx::query(ddl)
            .execute(pool)
            .await
            .map_err(map_sqlx_error)?;
    }
    info!("mysql schema is in place");
    Ok(())
}

fn parse_timestamp(column: &str, seconds: i64) -> Result<Timestamp> {
    Timestamp::from_second(seconds).map_err(|e| {
        StorageError::InvalidData(format!("invalid {column} timestamp '{seconds}': {e}"))
    })
}

/// Returns the database message if `err` is a unique-key violation.
fn unique_violation(err: &sqlx::Error) -> Option<String> {
    err.as_database_error()
        .filter(|db_err| db_err.is_unique_violation())
        .map(|db_err| db_err.message().to_owned())
}

fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut => StorageError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StorageError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::RowNotFound => StorageError::InvalidData(message),
        _ => StorageError::Query(message),
    }
}
