//! SQLite-backed favorites table with live queries.

use std::path::Path;

use async_trait::async_trait;
use directories::ProjectDirs;
use parking_lot::Mutex;
use rusqlite::Connection;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::domain::entities::FavoriteRecord;
use crate::domain::errors::StorageError;
use crate::domain::live::map_watch;
use crate::domain::ports::FavoriteStorePort;

const SCHEMA_VERSION: i32 = 1;

/// Favorites table backed by SQLite.
///
/// Every mutation republishes the full table snapshot on a watch channel,
/// which backs the port's live queries. Row counts are small (one row per
/// favorited photo), so statements run inline on the caller's task.
pub struct SqliteFavoriteStore {
    conn: Mutex<Connection>,
    snapshot: watch::Sender<Vec<FavoriteRecord>>,
}

impl SqliteFavoriteStore {
    /// Opens the database in the platform data directory.
    ///
    /// # Errors
    /// Returns error if the directory or database cannot be created.
    pub fn open_default() -> Result<Self, StorageError> {
        let dirs = ProjectDirs::from("com", "oxisplash", "oxisplash")
            .ok_or_else(|| StorageError::open("failed to determine data directory"))?;
        Self::open(dirs.data_dir().join("favorites.db"))
    }

    /// Opens (or creates) the database at `path`.
    ///
    /// # Errors
    /// Returns error if the file cannot be opened or the schema set up.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StorageError::open(format!("failed to create data dir: {e}")))?;
        }

        let conn =
            Connection::open(path).map_err(|e| StorageError::open(e.to_string()))?;
        debug!(path = %path.display(), "Favorites database opened");
        Self::with_connection(conn)
    }

    /// Opens an in-memory database. Used by tests.
    ///
    /// # Errors
    /// Returns error if the schema cannot be set up.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(|e| StorageError::open(e.to_string()))?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self, StorageError> {
        Self::init_schema(&conn)?;
        let snapshot = Self::query_all(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
            snapshot: watch::Sender::new(snapshot),
        })
    }

    /// Sets up the table. A version mismatch wipes the table: the schema is
    /// not migrated, matching the destructive policy of version 1.
    fn init_schema(conn: &Connection) -> Result<(), StorageError> {
        let version: i32 = conn
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .map_err(|e| StorageError::open(e.to_string()))?;

        if version != 0 && version != SCHEMA_VERSION {
            warn!(
                found = version,
                expected = SCHEMA_VERSION,
                "Favorites schema version mismatch, wiping table"
            );
            conn.execute_batch("DROP TABLE IF EXISTS favorite_images")
                .map_err(|e| StorageError::open(e.to_string()))?;
        }

        conn.execute(
            "CREATE TABLE IF NOT EXISTS favorite_images (
                id                  TEXT PRIMARY KEY,
                created_at          TEXT,
                width               INTEGER,
                height              INTEGER,
                color               TEXT,
                blur_hash           TEXT,
                description         TEXT,
                raw_url             TEXT NOT NULL,
                full_url            TEXT NOT NULL,
                regular_url         TEXT NOT NULL,
                small_url           TEXT NOT NULL,
                thumb_url           TEXT NOT NULL,
                download_url        TEXT NOT NULL,
                likes               INTEGER,
                author_id           TEXT NOT NULL,
                author_name         TEXT NOT NULL,
                author_username     TEXT NOT NULL,
                author_avatar_url   TEXT NOT NULL
            )",
            [],
        )
        .map_err(|e| StorageError::open(e.to_string()))?;

        conn.pragma_update(None, "user_version", SCHEMA_VERSION)
            .map_err(|e| StorageError::open(e.to_string()))?;

        Ok(())
    }

    fn query_all(conn: &Connection) -> Result<Vec<FavoriteRecord>, StorageError> {
        let mut stmt = conn
            .prepare(
                "SELECT id, created_at, width, height, color, blur_hash, description,
                        raw_url, full_url, regular_url, small_url, thumb_url,
                        download_url, likes, author_id, author_name,
                        author_username, author_avatar_url
                 FROM favorite_images ORDER BY rowid",
            )
            .map_err(|e| StorageError::query(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| {
                Ok(FavoriteRecord {
                    id: row.get(0)?,
                    created_at: row.get(1)?,
                    width: row.get(2)?,
                    height: row.get(3)?,
                    color: row.get(4)?,
                    blur_hash: row.get(5)?,
                    description: row.get(6)?,
                    raw_url: row.get(7)?,
                    full_url: row.get(8)?,
                    regular_url: row.get(9)?,
                    small_url: row.get(10)?,
                    thumb_url: row.get(11)?,
                    download_url: row.get(12)?,
                    likes: row.get(13)?,
                    author_id: row.get(14)?,
                    author_name: row.get(15)?,
                    author_username: row.get(16)?,
                    author_avatar_url: row.get(17)?,
                })
            })
            .map_err(|e| StorageError::query(e.to_string()))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| StorageError::query(e.to_string()))
    }

    fn publish(&self, rows: Vec<FavoriteRecord>) {
        self.snapshot.send_replace(rows);
    }
}

#[async_trait]
impl FavoriteStorePort for SqliteFavoriteStore {
    async fn upsert_favorite(&self, record: FavoriteRecord) -> Result<(), StorageError> {
        let rows = {
            let conn = self.conn.lock();
            conn.execute(
                "INSERT OR REPLACE INTO favorite_images (
                    id, created_at, width, height, color, blur_hash, description,
                    raw_url, full_url, regular_url, small_url, thumb_url,
                    download_url, likes, author_id, author_name,
                    author_username, author_avatar_url
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18)",
                rusqlite::params![
                    record.id,
                    record.created_at,
                    record.width,
                    record.height,
                    record.color,
                    record.blur_hash,
                    record.description,
                    record.raw_url,
                    record.full_url,
                    record.regular_url,
                    record.small_url,
                    record.thumb_url,
                    record.download_url,
                    record.likes,
                    record.author_id,
                    record.author_name,
                    record.author_username,
                    record.author_avatar_url,
                ],
            )
            .map_err(|e| StorageError::write(e.to_string()))?;

            debug!(id = %record.id, "Favorite stored");
            Self::query_all(&conn)?
        };

        self.publish(rows);
        Ok(())
    }

    async fn delete_favorite(&self, id: &str) -> Result<(), StorageError> {
        let rows = {
            let conn = self.conn.lock();
            conn.execute(
                "DELETE FROM favorite_images WHERE id = ?1",
                rusqlite::params![id],
            )
            .map_err(|e| StorageError::write(e.to_string()))?;

            debug!(id, "Favorite deleted");
            Self::query_all(&conn)?
        };

        self.publish(rows);
        Ok(())
    }

    fn all_favorites(&self) -> watch::Receiver<Vec<FavoriteRecord>> {
        self.snapshot.subscribe()
    }

    fn is_favorite(&self, id: &str) -> watch::Receiver<bool> {
        let id = id.to_string();
        map_watch(self.snapshot.subscribe(), move |rows| {
            rows.iter().any(|row| row.id == id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{AuthorSummary, Image, ImageUrls};

    fn sample_record(id: &str) -> FavoriteRecord {
        FavoriteRecord::from_image(
            &Image::new(
                id,
                ImageUrls {
                    raw: format!("https://images.unsplash.com/{id}?raw"),
                    full: format!("https://images.unsplash.com/{id}?full"),
                    regular: format!("https://images.unsplash.com/{id}?regular"),
                    small: format!("https://images.unsplash.com/{id}?small"),
                    thumb: format!("https://images.unsplash.com/{id}?thumb"),
                },
                format!("https://unsplash.com/photos/{id}/download"),
                AuthorSummary {
                    id: "u1".into(),
                    name: "Test Author".into(),
                    username: "tester".into(),
                    avatar_url: "https://example.com/avatar.jpg".into(),
                },
            )
            .with_dimensions(4000, 3000)
            .with_description("A photo")
            .with_likes(42),
        )
    }

    #[tokio::test]
    async fn test_upsert_then_is_favorite_observes_true() {
        let store = SqliteFavoriteStore::open_in_memory().unwrap();
        store.upsert_favorite(sample_record("abc123")).await.unwrap();

        assert!(*store.is_favorite("abc123").borrow());
        assert!(!*store.is_favorite("other").borrow());
    }

    #[tokio::test]
    async fn test_delete_then_is_favorite_observes_false() {
        let store = SqliteFavoriteStore::open_in_memory().unwrap();
        store.upsert_favorite(sample_record("abc123")).await.unwrap();
        store.delete_favorite("abc123").await.unwrap();

        assert!(!*store.is_favorite("abc123").borrow());
    }

    #[tokio::test]
    async fn test_delete_absent_id_is_noop() {
        let store = SqliteFavoriteStore::open_in_memory().unwrap();
        store.delete_favorite("missing").await.unwrap();
        assert!(store.all_favorites().borrow().is_empty());
    }

    #[tokio::test]
    async fn test_repeated_upsert_replaces_rather_than_duplicates() {
        let store = SqliteFavoriteStore::open_in_memory().unwrap();
        store.upsert_favorite(sample_record("abc123")).await.unwrap();

        let mut replaced = sample_record("abc123");
        replaced.description = Some("Replaced".into());
        store.upsert_favorite(replaced).await.unwrap();

        let rows = store.all_favorites().borrow().clone();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].description.as_deref(), Some("Replaced"));
    }

    #[tokio::test]
    async fn test_record_round_trips_through_sql() {
        let store = SqliteFavoriteStore::open_in_memory().unwrap();
        let record = sample_record("abc123");
        store.upsert_favorite(record.clone()).await.unwrap();

        let rows = store.all_favorites().borrow().clone();
        assert_eq!(rows, vec![record]);
    }

    #[tokio::test]
    async fn test_every_subscriber_observes_each_write() {
        let store = SqliteFavoriteStore::open_in_memory().unwrap();
        let mut first = store.all_favorites();
        let mut second = store.all_favorites();

        store.upsert_favorite(sample_record("a")).await.unwrap();

        first.changed().await.unwrap();
        second.changed().await.unwrap();
        assert_eq!(first.borrow().len(), 1);
        assert_eq!(second.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_is_favorite_re_emits_on_mutation_of_that_id() {
        let store = SqliteFavoriteStore::open_in_memory().unwrap();
        let mut flag = store.is_favorite("abc123");
        assert!(!*flag.borrow_and_update());

        store.upsert_favorite(sample_record("abc123")).await.unwrap();
        flag.changed().await.unwrap();
        assert!(*flag.borrow_and_update());

        store.delete_favorite("abc123").await.unwrap();
        flag.changed().await.unwrap();
        assert!(!*flag.borrow_and_update());
    }

    #[tokio::test]
    async fn test_snapshot_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.db");

        {
            let store = SqliteFavoriteStore::open(&path).unwrap();
            store.upsert_favorite(sample_record("abc123")).await.unwrap();
        }

        let store = SqliteFavoriteStore::open(&path).unwrap();
        assert_eq!(store.all_favorites().borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_version_mismatch_wipes_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.db");

        {
            let store = SqliteFavoriteStore::open(&path).unwrap();
            store.upsert_favorite(sample_record("abc123")).await.unwrap();
        }

        // Simulate a database written by a different schema version.
        {
            let conn = Connection::open(&path).unwrap();
            conn.pragma_update(None, "user_version", 99).unwrap();
        }

        let store = SqliteFavoriteStore::open(&path).unwrap();
        assert!(store.all_favorites().borrow().is_empty());

        let conn = Connection::open(&path).unwrap();
        let version: i32 = conn
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .unwrap();
        assert_eq!(version, SCHEMA_VERSION);
    }
}
