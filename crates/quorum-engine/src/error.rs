//! Error types for quorum-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuorumError {
    /// An availability interval that breaks `0 <= start < end <= 24`.
    #[error("Invalid interval [{start}, {end}) on {day} for participant '{participant}'")]
    InvalidInterval {
        participant: String,
        day: String,
        start: u32,
        end: u32,
    },

    #[error("Unknown day label: '{0}' (expected one of Mon, Tue, Wed, Thu, Fri, Sat, Sun)")]
    UnknownDay(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QuorumError>;
