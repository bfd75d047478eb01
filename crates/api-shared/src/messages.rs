//! Fixed response bodies.
//!
//! Clients may match on these strings, so they are part of the API surface.

/// Body of a failed upload. Deliberately carries no detail.
pub const UPLOAD_FAILED: &str = "Error uploading file";

/// Body of an upload that has no `file` multipart field.
pub const MISSING_FILE_FIELD: &str = "Missing file field";

/// Body of a successful delete.
pub const FILE_DELETED: &str = "File deleted";

/// Body of a delete or metadata lookup for an unknown identifier.
pub const FILE_NOT_FOUND: &str = "File not found";
