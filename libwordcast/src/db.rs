//! The usage store: persisted dictionary entries and the selection policy

use std::collections::BTreeMap;
use std::path::Path;

use rand::seq::SliceRandom;
use sqlx::sqlite::SqlitePool;
use sqlx::Row;
use tracing::{debug, info};

use crate::error::{DbError, DictionaryError, Result};
use crate::types::Entry;

#[derive(Clone)]
pub struct UsageStore {
    pool: SqlitePool,
}

impl UsageStore {
    /// Open (creating if necessary) the store at the given path
    pub async fn open(db_path: &str) -> Result<Self> {
        // Expand path and create parent directories
        let expanded_path = shellexpand::tilde(db_path).to_string();
        let path = Path::new(&expanded_path);

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(DbError::IoError)?;
        }

        // Use forward slashes for the SQLite URL and mode=rwc so the database
        // file is created on first run.
        let db_url = format!("sqlite://{}?mode=rwc", expanded_path.replace('\\', "/"));

        let pool = SqlitePool::connect(&db_url)
            .await
            .map_err(DbError::SqlxError)?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(DbError::MigrationError)?;

        Ok(Self { pool })
    }

    /// Whether the store already holds entries
    pub async fn is_initialized(&self) -> Result<bool> {
        Ok(self.total_count().await? > 0)
    }

    /// Populate the store from parsed dictionary entries, each starting unused.
    ///
    /// Idempotent: a store that already holds entries is left untouched.
    pub async fn initialize(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if self.is_initialized().await? {
            debug!("usage store already initialized");
            return Ok(());
        }

        if entries.is_empty() {
            return Err(DictionaryError::NoEntries.into());
        }

        let mut tx = self.pool.begin().await.map_err(DbError::SqlxError)?;

        for (term, definition) in entries {
            sqlx::query("INSERT INTO entries (term, used, definition) VALUES (?, 0, ?)")
                .bind(term)
                .bind(definition)
                .execute(&mut *tx)
                .await
                .map_err(DbError::SqlxError)?;
        }

        tx.commit().await.map_err(DbError::SqlxError)?;

        info!("initialized usage store with {} entries", entries.len());
        Ok(())
    }

    /// Select an unused entry uniformly at random and mark it used.
    ///
    /// When the unused pool is exhausted every flag is reset first, starting a
    /// fresh cycle. The count, reset, pick and update all run inside one
    /// transaction, so the pick can never see a stale empty pool.
    pub async fn select_unused(&self) -> Result<Entry> {
        let mut tx = self.pool.begin().await.map_err(DbError::SqlxError)?;

        let unused: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM entries WHERE used = 0")
            .fetch_one(&mut *tx)
            .await
            .map_err(DbError::SqlxError)?;

        if unused == 0 {
            let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM entries")
                .fetch_one(&mut *tx)
                .await
                .map_err(DbError::SqlxError)?;

            if total == 0 {
                return Err(DbError::Empty.into());
            }

            info!("all {} entries used, starting a fresh cycle", total);
            sqlx::query("UPDATE entries SET used = 0")
                .execute(&mut *tx)
                .await
                .map_err(DbError::SqlxError)?;
        }

        let rows = sqlx::query("SELECT term, definition FROM entries WHERE used = 0")
            .fetch_all(&mut *tx)
            .await
            .map_err(DbError::SqlxError)?;

        let row = rows
            .choose(&mut rand::thread_rng())
            .ok_or(DbError::Empty)?;
        let term: String = row.get("term");
        let definition: String = row.get("definition");

        sqlx::query("UPDATE entries SET used = 1 WHERE term = ?")
            .bind(&term)
            .execute(&mut *tx)
            .await
            .map_err(DbError::SqlxError)?;

        tx.commit().await.map_err(DbError::SqlxError)?;

        debug!("selected entry: {}", term);
        Ok(Entry {
            term,
            definition,
            used: true,
        })
    }

    /// Number of entries still unused in the current cycle
    pub async fn unused_count(&self) -> Result<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM entries WHERE used = 0")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DbError::SqlxError(e).into())
    }

    /// Total number of entries in the store
    pub async fn total_count(&self) -> Result<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM entries")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DbError::SqlxError(e).into())
    }
}
