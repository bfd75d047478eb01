//! File identifier utilities.
//!
//! Every stored file is named by a [`FileId`]: a random version 4 UUID rendered in a *canonical*
//! form of **32 lowercase hexadecimal characters** (no hyphens).
//!
//! ## Canonical form
//! - Length: 32
//! - Characters: `0-9` and `a-f` only
//! - Example: `550e8400e29b41d4a716446655440000`
//!
//! This is the same value you would get from `Uuid::new_v4().simple().to_string()`.
//! Identifiers arriving from outside (URL path segments, for example) are checked with
//! [`FileId::parse`]; hyphenated, uppercase, truncated or non-hex inputs are rejected rather than
//! normalised, so one file can never be reachable under two spellings.
//!
//! Generation performs no collision check. With 122 random bits per identifier a collision is
//! not a practical concern for an in-memory store.

mod file_id;

pub use file_id::{FileId, Uuid};

/// Error type for identifier operations.
#[derive(Debug, thiserror::Error)]
pub enum UuidError {
    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for identifier operations.
pub type UuidResult<T> = Result<T, UuidError>;
