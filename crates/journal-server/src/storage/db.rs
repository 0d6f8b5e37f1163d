//! SQLite database layer (embedded, no external dependencies)

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use journal_core::ports::{EntryStore, ImageStore, UserStore};
use journal_core::{Entry, EntryPayload, ImageRecord, JournalError, UserCredentials};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn new(database_path: &Path) -> Result<Self> {
        tracing::info!("Opening SQLite database at: {}", database_path.display());

        if let Some(parent) = database_path.parent() {
            tokio::fs::create_dir_all(parent).await.with_context(|| {
                format!("Failed to create database directory: {}", parent.display())
            })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .with_context(|| {
                format!(
                    "Failed to connect to SQLite database at: {}",
                    database_path.display()
                )
            })?;

        tracing::info!("SQLite connection established, creating schema...");

        Self::run_migrations(&pool)
            .await
            .context("Failed to create database schema")?;

        Ok(Self { pool })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                email TEXT UNIQUE NOT NULL,
                password_hash TEXT NOT NULL,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS entries (
                id INTEGER PRIMARY KEY,
                title TEXT NOT NULL,
                content TEXT NOT NULL,
                date DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
                summary TEXT
            )
            "#,
        )
        .execute(pool)
        .await?;

        // No foreign key to entries: images may outlive their entry
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS images (
                id TEXT PRIMARY KEY,
                entry_id INTEGER NOT NULL,
                filename TEXT NOT NULL,
                stored_name TEXT NOT NULL,
                created_at DATETIME NOT NULL,
                UNIQUE (entry_id, filename)
            )
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}

fn db_error(e: sqlx::Error) -> JournalError {
    JournalError::Database(e.to_string())
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}

#[async_trait]
impl EntryStore for Database {
    async fn create_entry(&self, payload: &EntryPayload) -> journal_core::Result<Entry> {
        let row: EntryRow = sqlx::query_as(
            r#"
            INSERT INTO entries (id, title, content, date, summary)
            VALUES (?1, ?2, ?3, COALESCE(?4, CURRENT_TIMESTAMP), ?5)
            RETURNING id, title, content, date, summary
            "#,
        )
        .bind(payload.id)
        .bind(&payload.title)
        .bind(&payload.content)
        .bind(payload.date)
        .bind(&payload.summary)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match payload.id {
            Some(id) if is_unique_violation(&e) => JournalError::EntryExists(id),
            _ => db_error(e),
        })?;

        Ok(row.into())
    }

    async fn get_entry(&self, id: i64) -> journal_core::Result<Entry> {
        let row: Option<EntryRow> = sqlx::query_as(
            r#"
            SELECT id, title, content, date, summary FROM entries WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        row.map(Entry::from).ok_or(JournalError::EntryNotFound(id))
    }

    async fn list_entries(&self) -> journal_core::Result<Vec<Entry>> {
        let rows: Vec<EntryRow> = sqlx::query_as(
            r#"
            SELECT id, title, content, date, summary FROM entries ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn update_entry(&self, id: i64, payload: &EntryPayload) -> journal_core::Result<Entry> {
        let row: Option<EntryRow> = sqlx::query_as(
            r#"
            UPDATE entries SET title = ?1, content = ?2, summary = ?3
            WHERE id = ?4
            RETURNING id, title, content, date, summary
            "#,
        )
        .bind(&payload.title)
        .bind(&payload.content)
        .bind(&payload.summary)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        row.map(Entry::from).ok_or(JournalError::EntryNotFound(id))
    }

    async fn delete_entry(&self, id: i64) -> journal_core::Result<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM entries WHERE id = ?1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(JournalError::EntryNotFound(id));
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for Database {
    async fn create_user(
        &self,
        email: &str,
        password_hash: &str,
    ) -> journal_core::Result<UserCredentials> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO users (email, password_hash)
            VALUES (?1, ?2)
            RETURNING id
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                JournalError::EmailTaken(email.to_string())
            } else {
                db_error(e)
            }
        })?;

        Ok(UserCredentials {
            id,
            email: email.to_string(),
            password_hash: password_hash.to_string(),
        })
    }

    async fn get_user_by_email(&self, email: &str) -> journal_core::Result<Option<UserCredentials>> {
        let row: Option<(i64, String, String)> = sqlx::query_as(
            r#"
            SELECT id, email, password_hash FROM users WHERE email = ?1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(row.map(|(id, email, password_hash)| UserCredentials {
            id,
            email,
            password_hash,
        }))
    }
}

#[async_trait]
impl ImageStore for Database {
    async fn upsert_image(&self, record: &ImageRecord) -> journal_core::Result<ImageRecord> {
        sqlx::query(
            r#"
            INSERT INTO images (id, entry_id, filename, stored_name, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT (entry_id, filename) DO NOTHING
            "#,
        )
        .bind(&record.id)
        .bind(record.entry_id)
        .bind(&record.filename)
        .bind(&record.stored_name)
        .bind(record.created_at)
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        self.get_image(record.entry_id, &record.filename)
            .await?
            .ok_or_else(|| JournalError::Database("image record vanished after insert".into()))
    }

    async fn get_image(
        &self,
        entry_id: i64,
        filename: &str,
    ) -> journal_core::Result<Option<ImageRecord>> {
        let row: Option<ImageRow> = sqlx::query_as(
            r#"
            SELECT id, entry_id, filename, stored_name, created_at
            FROM images WHERE entry_id = ?1 AND filename = ?2
            "#,
        )
        .bind(entry_id)
        .bind(filename)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(row.map(|r| r.into()))
    }

    async fn list_images(&self, entry_id: i64) -> journal_core::Result<Vec<ImageRecord>> {
        let rows: Vec<ImageRow> = sqlx::query_as(
            r#"
            SELECT id, entry_id, filename, stored_name, created_at
            FROM images WHERE entry_id = ?1
            ORDER BY created_at, filename
            "#,
        )
        .bind(entry_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn delete_image(&self, entry_id: i64, filename: &str) -> journal_core::Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM images WHERE entry_id = ?1 AND filename = ?2
            "#,
        )
        .bind(entry_id)
        .bind(filename)
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(result.rows_affected() > 0)
    }
}

// Helper structs for sqlx query_as
#[derive(sqlx::FromRow)]
struct EntryRow {
    id: i64,
    title: String,
    content: String,
    date: DateTime<Utc>,
    summary: Option<String>,
}

impl From<EntryRow> for Entry {
    fn from(r: EntryRow) -> Self {
        Entry {
            id: r.id,
            title: r.title,
            content: r.content,
            date: r.date,
            summary: r.summary,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ImageRow {
    id: String,
    entry_id: i64,
    filename: String,
    stored_name: String,
    created_at: DateTime<Utc>,
}

impl From<ImageRow> for ImageRecord {
    fn from(r: ImageRow) -> Self {
        ImageRecord {
            id: r.id,
            entry_id: r.entry_id,
            filename: r.filename,
            stored_name: r.stored_name,
            created_at: r.created_at,
        }
    }
}
