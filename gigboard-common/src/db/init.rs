//! Database initialization
//!
//! Creates the SQLite database on first run and brings the schema up to
//! date on every start. All table creation is idempotent
//! (`CREATE TABLE IF NOT EXISTS`), followed by versioned migrations.

use crate::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use tracing::info;

/// Initialize the database connection and create tables if needed
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    // Create parent directory if it doesn't exist
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // foreign_keys is a per-connection pragma, so it belongs in the
    // connect options where every pooled connection picks it up
    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(options)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    init_schema(&pool).await?;

    Ok(pool)
}

/// Apply pragmas and create the schema on an already-connected pool.
///
/// Split out from [`init_database`] so tests can run against an
/// in-memory pool.
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    // Referential integrity: shows must point at live artists/venues.
    // Redundant for pools built by init_database; covers single-connection
    // test pools opened without connect options.
    sqlx::query("PRAGMA foreign_keys = ON").execute(pool).await?;

    // WAL allows concurrent readers with one writer
    sqlx::query("PRAGMA journal_mode = WAL").execute(pool).await?;

    sqlx::query("PRAGMA busy_timeout = 5000").execute(pool).await?;

    create_schema_version_table(pool).await?;
    create_venues_table(pool).await?;
    create_artists_table(pool).await?;
    create_shows_table(pool).await?;

    // Idempotent - safe to call on every start
    crate::db::migrations::run_migrations(pool).await?;

    Ok(())
}

async fn create_schema_version_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_venues_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS venues (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL DEFAULT '',
            genres TEXT NOT NULL DEFAULT '[]',
            address TEXT NOT NULL DEFAULT '',
            city TEXT NOT NULL DEFAULT '',
            state TEXT NOT NULL DEFAULT '',
            phone TEXT NOT NULL DEFAULT '',
            website TEXT NOT NULL DEFAULT '',
            facebook_link TEXT NOT NULL DEFAULT '',
            image_link TEXT NOT NULL DEFAULT '',
            seeking_talent INTEGER NOT NULL DEFAULT 0,
            seeking_description TEXT NOT NULL DEFAULT ''
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_artists_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS artists (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL DEFAULT '',
            genres TEXT NOT NULL DEFAULT '[]',
            city TEXT NOT NULL DEFAULT '',
            state TEXT NOT NULL DEFAULT '',
            phone TEXT NOT NULL DEFAULT '',
            website TEXT NOT NULL DEFAULT '',
            facebook_link TEXT NOT NULL DEFAULT '',
            image_link TEXT NOT NULL DEFAULT '',
            seeking_venue INTEGER NOT NULL DEFAULT 0,
            seeking_description TEXT NOT NULL DEFAULT ''
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Shows carry a synthetic id; the (artist, venue, start_time) triple is
/// kept unique by a separate constraint rather than serving as the key.
async fn create_shows_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS shows (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            artist_id INTEGER NOT NULL REFERENCES artists(id),
            venue_id INTEGER NOT NULL REFERENCES venues(id),
            start_time TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // One connection keeps every query on the same in-memory database
    async fn memory_pool() -> SqlitePool {
        SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn init_schema_is_idempotent() {
        let pool = memory_pool().await;
        init_schema(&pool).await.unwrap();
        init_schema(&pool).await.unwrap();

        let tables: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table'
             AND name IN ('venues', 'artists', 'shows', 'schema_version')",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(tables, 4);
    }

    #[tokio::test]
    async fn show_foreign_keys_are_enforced() {
        let pool = memory_pool().await;
        init_schema(&pool).await.unwrap();

        let result = sqlx::query(
            "INSERT INTO shows (artist_id, venue_id, start_time) VALUES (99, 98, '2026-01-01 20:00:00')",
        )
        .execute(&pool)
        .await;
        assert!(result.is_err(), "orphan show insert should be rejected");
    }
}
