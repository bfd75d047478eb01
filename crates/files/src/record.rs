//! Stored file records and the metadata derived from them.

use chargedfile_uuid::FileId;
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

/// Hashing algorithm used for [`FileMetadata::hash`].
pub const HASH_ALGORITHM: &str = "sha256";

/// Facts about a stored file, computed once when it is inserted.
///
/// None of these fields are supplied by the client; they are derived from the content and the
/// moment of insertion.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct FileMetadata {
    /// Size of the content in bytes
    pub size_bytes: u64,

    /// Lowercase hexadecimal SHA-256 digest of the content
    pub hash: String,

    /// Detected media type (MIME type), if available
    ///
    /// Best-effort detection from magic bytes. Not authoritative and `None` for content
    /// without a recognisable signature (plain text, for example).
    pub media_type: Option<String>,

    /// UTC timestamp when the file was stored
    pub stored_at: DateTime<Utc>,
}

impl FileMetadata {
    /// Derives metadata for `content` stored at `stored_at`.
    pub fn derive(content: &[u8], stored_at: DateTime<Utc>) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);
        let hash = hex::encode(hasher.finalize());

        let media_type = infer::get(content).map(|kind| kind.mime_type().to_string());

        Self {
            size_bytes: content.len() as u64,
            hash,
            media_type,
            stored_at,
        }
    }
}

/// A stored file: identifier, original name and content bytes.
///
/// Records are immutable. The store hands them out behind `Arc`, so every reader sees the same
/// bytes and none can change them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    id: FileId,
    name: String,
    content: Vec<u8>,
    metadata: FileMetadata,
}

impl FileRecord {
    pub(crate) fn new(id: FileId, name: String, content: Vec<u8>) -> Self {
        let metadata = FileMetadata::derive(&content, Utc::now());
        Self {
            id,
            name,
            content,
            metadata,
        }
    }

    pub fn id(&self) -> FileId {
        self.id
    }

    /// Original filename exactly as uploaded. May be empty.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn metadata(&self) -> &FileMetadata {
        &self.metadata
    }
}
