//! @acp:module "Error Types"
//! @acp:summary "Library error taxonomy and Result alias"
//! @acp:domain scoring
//! @acp:layer api

use thiserror::Error;

/// Errors surfaced by the postscore library.
///
/// Scoring itself never fails; errors only arise at the parse boundary
/// (unknown platform or language names) and in config file handling.
#[derive(Debug, Error)]
pub enum PostscoreError {
    /// Platform name outside the supported set
    #[error("unknown platform '{0}' (expected twitter, facebook, instagram, or linkedin)")]
    UnknownPlatform(String),

    /// Language tag outside the supported set
    #[error("unknown language '{0}' (expected en or nl)")]
    UnknownLanguage(String),

    /// Config file could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Library-wide result alias
pub type Result<T> = std::result::Result<T, PostscoreError>;
