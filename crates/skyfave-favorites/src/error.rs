//! Favorite-specific error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FavoriteError {
    #[error("Favorite not found")]
    NotFound,

    #[error("Failed to save favorite")]
    SaveFailed,

    #[error("Failed to delete favorite")]
    DeleteFailed,

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl FavoriteError {
    /// User-friendly error message for display at the application boundary.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound => "That favorite does not exist".to_string(),
            Self::SaveFailed => "Could not save this place. It may already be a favorite.".to_string(),
            Self::DeleteFailed => "Could not remove this favorite".to_string(),
            Self::Storage(_) => "Storage error. Please try again.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert!(FavoriteError::NotFound.user_message().contains("does not exist"));
        assert!(FavoriteError::SaveFailed.user_message().contains("already"));
    }
}
