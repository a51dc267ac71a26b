use crate::models::{format_timestamp, parse_timestamp, LogEntry};
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::Instrument;

#[derive(sqlx::FromRow)]
struct LogRow {
    name: String,
    timestamp: String,
}

impl TryFrom<LogRow> for LogEntry {
    type Error = sqlx::Error;

    fn try_from(row: LogRow) -> Result<Self, Self::Error> {
        let timestamp =
            parse_timestamp(&row.timestamp).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        Ok(LogEntry::new(row.name, timestamp))
    }
}

pub async fn record(
    pool: &SqlitePool,
    name: &str,
    timestamp: DateTime<Utc>,
) -> Result<(), sqlx::Error> {
    let query_span = tracing::info_span!("Saving log entry into the database", name);
    sqlx::query(r#"INSERT INTO user (name, timestamp) VALUES (?, ?)"#)
        .bind(name)
        .bind(format_timestamp(&timestamp))
        .execute(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to execute query: {:?}", err);
            err
        })?;
    Ok(())
}

pub async fn list_all(pool: &SqlitePool) -> Result<Vec<LogEntry>, sqlx::Error> {
    let query_span = tracing::info_span!("Fetch all log entries.");
    sqlx::query_as::<_, LogRow>(r#"SELECT name, timestamp FROM user ORDER BY timestamp"#)
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch log entries, error: {:?}", err);
            err
        })?
        .into_iter()
        .map(LogEntry::try_from)
        .collect()
}

/// Removes every entry. Returns the number of rows deleted.
pub async fn clear_all(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
    let query_span = tracing::info_span!("Delete all log entries.");
    let result = sqlx::query(r#"DELETE FROM user"#)
        .execute(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to delete log entries, error: {:?}", err);
            err
        })?;
    Ok(result.rows_affected())
}

/// Preformatted listing: a leading blank line, then one tuple per row.
pub fn render_rows(entries: &[LogEntry]) -> String {
    entries.iter().fold(String::from("\n"), |mut text, entry| {
        text.push_str(&entry.as_tuple());
        text.push('\n');
        text
    })
}
