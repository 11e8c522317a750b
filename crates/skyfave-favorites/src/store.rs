//! Principal-scoped SQLite storage for favorites.
//!
//! Every operation takes the owning [`Principal`] and filters on its id in
//! the SQL itself; there is no unscoped read or write path. Mutations
//! report affected-row counts rather than rows, and a rejected insert
//! (uniqueness violation) is surfaced as a count of zero, not an error —
//! the service layer decides what a zero means.

use anyhow::{Context, Result};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};
use std::path::Path;

use crate::favorite::{Favorite, Principal};

/// SQLite storage for favorites, scoped per principal.
pub struct FavoriteStore {
    conn: Connection,
}

impl FavoriteStore {
    /// Open or create the database.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).context("Failed to open favorites database")?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS favorites (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL,
                formatted_address TEXT NOT NULL,
                place_id TEXT NOT NULL,
                UNIQUE (user_id, place_id)
            );

            CREATE INDEX IF NOT EXISTS idx_favorites_user ON favorites(user_id);",
            )
            .context("Failed to initialize schema")?;
        Ok(())
    }

    /// List all favorites owned by the principal, oldest first.
    pub fn list_for_user(&self, principal: &Principal) -> Result<Vec<Favorite>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, formatted_address, place_id
             FROM favorites WHERE user_id = ?1 ORDER BY id",
        )?;

        let favorites = stmt
            .query_map([principal.id()], |row| {
                Ok(Favorite {
                    id: row.get(0)?,
                    formatted_address: row.get(1)?,
                    place_id: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(favorites)
    }

    /// Find the principal's favorite with the given database id.
    pub fn find_by_id(&self, principal: &Principal, id: i64) -> Result<Option<Favorite>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, formatted_address, place_id
             FROM favorites WHERE id = ?1 AND user_id = ?2",
        )?;

        let favorite = stmt
            .query_row(params![id, principal.id()], |row| {
                Ok(Favorite {
                    id: row.get(0)?,
                    formatted_address: row.get(1)?,
                    place_id: row.get(2)?,
                })
            })
            .optional()?;

        Ok(favorite)
    }

    /// Find the principal's favorite with the given external place id.
    pub fn find_by_place_id(
        &self,
        principal: &Principal,
        place_id: &str,
    ) -> Result<Option<Favorite>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, formatted_address, place_id
             FROM favorites WHERE user_id = ?1 AND place_id = ?2",
        )?;

        let favorite = stmt
            .query_row(params![principal.id(), place_id], |row| {
                Ok(Favorite {
                    id: row.get(0)?,
                    formatted_address: row.get(1)?,
                    place_id: row.get(2)?,
                })
            })
            .optional()?;

        Ok(favorite)
    }

    /// Insert a favorite owned by the principal. Returns the affected-row
    /// count: 1 on success, 0 when the insert was rejected by a constraint.
    pub fn create_for_user(&self, principal: &Principal, favorite: &Favorite) -> Result<usize> {
        let inserted = self.conn.execute(
            "INSERT INTO favorites (user_id, formatted_address, place_id)
             VALUES (?1, ?2, ?3)",
            params![principal.id(), favorite.formatted_address, favorite.place_id],
        );

        match inserted {
            Ok(count) => Ok(count),
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == ErrorCode::ConstraintViolation =>
            {
                tracing::warn!(
                    user_id = principal.id(),
                    place_id = %favorite.place_id,
                    "Favorite insert rejected by constraint"
                );
                Ok(0)
            }
            Err(e) => Err(e).context("Failed to insert favorite"),
        }
    }

    /// Delete the favorite only if both the id and the owner match. The
    /// double condition is the authorization boundary: an id-only delete
    /// would allow cross-user deletion. Returns the affected-row count.
    pub fn delete_for_user(&self, principal: &Principal, id: i64) -> Result<usize> {
        let deleted = self.conn.execute(
            "DELETE FROM favorites WHERE id = ?1 AND user_id = ?2",
            params![id, principal.id()],
        )?;
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;
    use tempfile::tempdir;

    fn open_store(dir: &tempfile::TempDir) -> FavoriteStore {
        FavoriteStore::open(&dir.path().join("test.db")).unwrap()
    }

    #[test]
    fn test_create_and_list() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);
        let user = Principal::new(1);

        let affected = store
            .create_for_user(&user, &Favorite::new("Seattle, WA, USA", "place-1"))
            .unwrap();
        assert_eq!(affected, 1);

        let favorites = store.list_for_user(&user).unwrap();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].place_id, "place-1");
        assert!(favorites[0].id.is_some());
    }

    #[test]
    fn test_list_is_scoped_to_principal() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);
        let alice = Principal::new(1);
        let bob = Principal::new(2);

        store.create_for_user(&alice, &Favorite::new("Seattle, WA, USA", "place-1")).unwrap();
        store.create_for_user(&alice, &Favorite::new("Portland, OR, USA", "place-2")).unwrap();
        store.create_for_user(&alice, &Favorite::new("Boise, ID, USA", "place-3")).unwrap();
        store.create_for_user(&bob, &Favorite::new("Austin, TX, USA", "place-4")).unwrap();

        let alices = store.list_for_user(&alice).unwrap();
        assert_eq!(alices.len(), 3);
        assert!(alices.iter().all(|f| f.place_id != "place-4"));

        let bobs = store.list_for_user(&bob).unwrap();
        assert_eq!(bobs.len(), 1);
        assert_eq!(bobs[0].place_id, "place-4");
    }

    #[test]
    fn test_find_by_id_requires_ownership() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);
        let alice = Principal::new(1);
        let bob = Principal::new(2);

        store.create_for_user(&alice, &Favorite::new("Seattle, WA, USA", "place-1")).unwrap();
        let id = store.list_for_user(&alice).unwrap()[0].id.unwrap();

        assert!(store.find_by_id(&alice, id).unwrap().is_some());
        assert!(store.find_by_id(&bob, id).unwrap().is_none());
    }

    #[test]
    fn test_find_by_place_id() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);
        let user = Principal::new(1);

        store.create_for_user(&user, &Favorite::new("Seattle, WA, USA", "place-1")).unwrap();

        let found = store.find_by_place_id(&user, "place-1").unwrap().unwrap();
        assert_eq!(found.formatted_address, "Seattle, WA, USA");
        assert!(store.find_by_place_id(&user, "place-9").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_place_id_reports_zero_rows() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);
        let user = Principal::new(1);

        let favorite = Favorite::new("Seattle, WA, USA", "place-1");
        assert_eq!(store.create_for_user(&user, &favorite).unwrap(), 1);
        assert_eq!(store.create_for_user(&user, &favorite).unwrap(), 0);

        // Same place id under another principal is not a conflict.
        let other = Principal::new(2);
        assert_eq!(store.create_for_user(&other, &favorite).unwrap(), 1);
    }

    #[test]
    fn test_delete_requires_ownership() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);
        let alice = Principal::new(1);
        let bob = Principal::new(2);

        store.create_for_user(&alice, &Favorite::new("Seattle, WA, USA", "place-1")).unwrap();
        let id = store.list_for_user(&alice).unwrap()[0].id.unwrap();

        // A non-owning principal deletes nothing and the row stays intact.
        assert_eq!(store.delete_for_user(&bob, id).unwrap(), 0);
        assert_eq!(store.list_for_user(&alice).unwrap().len(), 1);

        assert_eq!(store.delete_for_user(&alice, id).unwrap(), 1);
        assert!(store.list_for_user(&alice).unwrap().is_empty());
    }

    #[test]
    fn test_delete_missing_row_reports_zero() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);
        let user = Principal::new(1);

        assert_eq!(store.delete_for_user(&user, 999).unwrap(), 0);
    }
}
