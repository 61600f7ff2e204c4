//! Error types for submission, storage and tracker operations.

use std::path::PathBuf;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

/// Rejected player submission; shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Anything other than four non-empty names.
    #[error("Please enter exactly 4 player names")]
    PlayerCount(usize),
    /// Two names collapse to the same normalized form.
    #[error("Please enter 4 different player names. Duplicate names are not allowed.")]
    DuplicateNames,
    /// Game count outside the supported plans.
    #[error("Invalid number of games `{0}`: choose 6 or 12")]
    GameCount(String),
}

/// Failures touching the save slot on disk.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read saved schedule `{}`", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("saved schedule `{}` is not a valid schedule", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("saved schedule `{}` is malformed: {reason}", .path.display())]
    Invalid { path: PathBuf, reason: String },
    #[error("failed to serialize schedule")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write saved schedule `{}`", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to remove saved schedule `{}`", .path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors surfaced by [`crate::tracker::BracketTracker`] operations.
#[derive(Debug, Error)]
pub enum BracketError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("No schedule yet: submit four players first")]
    NoSchedule,
    #[error("Game {0} is not in the displayed schedule")]
    UnknownGame(u32),
}

impl ResponseError for BracketError {
    fn status_code(&self) -> StatusCode {
        match self {
            BracketError::Validation(_) => StatusCode::BAD_REQUEST,
            BracketError::NoSchedule | BracketError::UnknownGame(_) => StatusCode::NOT_FOUND,
            BracketError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "success": false,
            "error": self.to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_are_user_facing() {
        assert_eq!(
            ValidationError::PlayerCount(3).to_string(),
            "Please enter exactly 4 player names"
        );
        assert_eq!(
            BracketError::from(ValidationError::DuplicateNames).to_string(),
            "Please enter 4 different player names. Duplicate names are not allowed."
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            BracketError::Validation(ValidationError::DuplicateNames).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(BracketError::NoSchedule.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(BracketError::UnknownGame(13).status_code(), StatusCode::NOT_FOUND);
    }
}
