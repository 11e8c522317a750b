//! Orchestrating service over the scoped favorite store.
//!
//! Wraps the synchronous SQLite store behind an async interface and
//! translates affected-row counts and absent rows into typed errors, so
//! callers never inspect raw counts.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::FavoriteError;
use crate::favorite::{Favorite, Principal};
use crate::store::FavoriteStore;

/// Async facade over [`FavoriteStore`].
#[derive(Clone)]
pub struct FavoriteService {
    store: Arc<Mutex<FavoriteStore>>,
}

impl FavoriteService {
    pub fn new(store: FavoriteStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// List the principal's favorites.
    pub async fn find_all(&self, principal: Principal) -> Result<Vec<Favorite>, FavoriteError> {
        let store = self.store.clone();
        run_blocking(move || Ok(store.lock().list_for_user(&principal)?)).await
    }

    /// Fetch one of the principal's favorites by database id.
    pub async fn find_by_id(
        &self,
        principal: Principal,
        id: i64,
    ) -> Result<Favorite, FavoriteError> {
        let store = self.store.clone();
        run_blocking(move || {
            store
                .lock()
                .find_by_id(&principal, id)?
                .ok_or(FavoriteError::NotFound)
        })
        .await
    }

    /// Save a favorite for the principal.
    ///
    /// The insert path reports only an affected-row count, so on success
    /// the favorite is re-resolved by its place id to recover the generated
    /// database id; the completed entity is returned.
    pub async fn save(
        &self,
        principal: Principal,
        favorite: Favorite,
    ) -> Result<Favorite, FavoriteError> {
        let store = self.store.clone();
        run_blocking(move || {
            let store = store.lock();
            if store.create_for_user(&principal, &favorite)? != 1 {
                return Err(FavoriteError::SaveFailed);
            }
            let created = store
                .find_by_place_id(&principal, &favorite.place_id)?
                .ok_or(FavoriteError::SaveFailed)?;
            tracing::info!(
                user_id = principal.id(),
                place_id = %created.place_id,
                "Saved favorite"
            );
            Ok(created)
        })
        .await
    }

    /// Delete one of the principal's favorites by database id.
    pub async fn delete(&self, principal: Principal, id: i64) -> Result<(), FavoriteError> {
        let store = self.store.clone();
        run_blocking(move || {
            if store.lock().delete_for_user(&principal, id)? < 1 {
                return Err(FavoriteError::DeleteFailed);
            }
            Ok(())
        })
        .await
    }
}

async fn run_blocking<T, F>(f: F) -> Result<T, FavoriteError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, FavoriteError> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| FavoriteError::Storage(anyhow::anyhow!("blocking task failed: {e}")))?
}
