//! Favorite entity and the principal identity that scopes access to it.

use serde::{Deserialize, Serialize};

/// The authenticated identity for the current operation. Supplied by the
/// caller's session context; threading it explicitly through every store
/// call keeps the scoping statically visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Principal {
    id: i64,
}

impl Principal {
    pub fn new(id: i64) -> Self {
        Self { id }
    }

    pub fn id(&self) -> i64 {
        self.id
    }
}

/// A place saved by a user. The owning user is not a field here; favorites
/// are only ever reachable through a [`Principal`]-scoped store call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    /// Database identity; `None` until persisted.
    pub id: Option<i64>,
    pub formatted_address: String,
    pub place_id: String,
}

impl Favorite {
    pub fn new(formatted_address: impl Into<String>, place_id: impl Into<String>) -> Self {
        Self {
            id: None,
            formatted_address: formatted_address.into(),
            place_id: place_id.into(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}
