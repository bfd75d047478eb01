//! ChargedFile File Storage
//!
//! This crate owns every stored file for the lifetime of the process. It is a registry mapping a
//! generated [`FileId`] to an immutable [`FileRecord`]; nothing is written to disk and everything
//! is lost when the process exits.
//!
//! ## Design Principles
//!
//! - Records are immutable once stored; readers get shared `Arc` handles, never copies of the map
//! - Identifiers are generated by the store and never reused
//! - Names and content are kept exactly as supplied (no sanitisation, no validation)
//! - Absence is a normal outcome (`Option` / `bool`), not an error
//! - The internal mapping and its lock are never exposed
//!
//! ## Example Usage
//!
//! ```
//! use chargedfile_files::FileStore;
//!
//! let store = FileStore::new();
//! let id = store.put("report.txt".to_string(), b"hello".to_vec());
//!
//! let record = store.get(&id.to_string()).expect("just stored");
//! assert_eq!(record.name(), "report.txt");
//! assert_eq!(record.content(), b"hello");
//!
//! assert!(store.delete(&id.to_string()));
//! assert!(store.get(&id.to_string()).is_none());
//! ```

mod record;
mod store;

pub use chargedfile_uuid::FileId;
pub use record::{FileMetadata, FileRecord, HASH_ALGORITHM};
pub use store::FileStore;
