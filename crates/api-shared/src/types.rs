//! Response payloads.

use chargedfile_files::FileRecord;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Metadata of one stored file, without its content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FileMetadataRes {
    /// Canonical file identifier
    pub id: String,
    /// Original filename as uploaded
    pub name: String,
    pub size_bytes: u64,
    /// Lowercase hex SHA-256 digest of the content
    pub sha256: String,
    /// Best-effort detected media type
    pub media_type: Option<String>,
    /// RFC 3339 UTC timestamp of the upload
    pub stored_at: String,
}

impl From<&FileRecord> for FileMetadataRes {
    fn from(record: &FileRecord) -> Self {
        let metadata = record.metadata();
        Self {
            id: record.id().to_string(),
            name: record.name().to_string(),
            size_bytes: metadata.size_bytes,
            sha256: metadata.hash.clone(),
            media_type: metadata.media_type.clone(),
            stored_at: metadata.stored_at.to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chargedfile_files::FileStore;

    #[test]
    fn test_metadata_res_from_record() {
        let store = FileStore::new();
        let id = store.put("report.txt".into(), b"hello".to_vec());
        let record = store.get(&id.to_string()).unwrap();

        let res = FileMetadataRes::from(record.as_ref());

        assert_eq!(res.id, id.to_string());
        assert_eq!(res.name, "report.txt");
        assert_eq!(res.size_bytes, 5);
        assert_eq!(
            res.sha256,
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
        assert_eq!(res.media_type, None);
    }

    #[test]
    fn test_metadata_res_serializes_expected_fields() {
        let res = FileMetadataRes {
            id: "0123456789abcdef0123456789abcdef".into(),
            name: "a.txt".into(),
            size_bytes: 1,
            sha256: "ca978112ca1bbdcafac231b39a23dc4da786eff8147c4e72b9807785afee48bb".into(),
            media_type: None,
            stored_at: "2024-01-01T00:00:00+00:00".into(),
        };

        let json: serde_json::Value = serde_json::to_value(&res).unwrap();
        assert_eq!(json["name"], "a.txt");
        assert_eq!(json["size_bytes"], 1);
        assert!(json["media_type"].is_null());
    }
}
