//! Favorite places for Skyfave
//!
//! Persistent, principal-scoped storage of saved places. Every read and
//! write is filtered by the owning user's identity at the data-access
//! boundary; mutations report success through affected-row counts, which
//! the service layer translates into typed errors.

pub mod error;
pub mod favorite;
pub mod service;
pub mod store;

pub use error::FavoriteError;
pub use favorite::{Favorite, Principal};
pub use service::FavoriteService;
pub use store::FavoriteStore;
