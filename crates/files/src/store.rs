//! In-memory file store implementation
//!
//! This module provides [`FileStore`], the authoritative registry of stored files.
//!
//! # Concurrency
//!
//! The mapping lives behind an `RwLock` inside an `Arc`. Cloning a `FileStore` is cheap and every
//! clone shares the same mapping, which is how request handlers running on different worker
//! threads see one store.
//!
//! - `put` and `delete` take the write lock
//! - `get`, `list` and `len` take the read lock
//! - No lock is held across an `.await` or handed to callers
//!
//! Only "no corruption" is promised: a `list` running alongside a `put` or `delete` may or may
//! not observe it.
//!
//! A poisoned lock is recovered rather than propagated. Records are fully built before they are
//! inserted, so a panic elsewhere cannot leave the map holding a partial record.

use crate::record::FileRecord;
use chargedfile_uuid::FileId;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Shared, thread-safe registry of file records keyed by [`FileId`].
#[derive(Debug, Clone, Default)]
pub struct FileStore {
    files: Arc<RwLock<HashMap<FileId, Arc<FileRecord>>>>,
}

impl FileStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `content` under a freshly generated identifier and returns that identifier.
    ///
    /// The name and content are kept exactly as given. Identifiers are random and no collision
    /// check is made.
    pub fn put(&self, name: String, content: Vec<u8>) -> FileId {
        let id = FileId::new();
        let record = Arc::new(FileRecord::new(id, name, content));

        self.write().insert(id, record);
        tracing::debug!(file_id = %id, "stored file record");

        id
    }

    /// Looks up a record by its identifier string.
    ///
    /// Returns `None` when no record exists. A string that is not a canonical identifier cannot
    /// name any record, so it is also `None` rather than an error.
    pub fn get(&self, id: &str) -> Option<Arc<FileRecord>> {
        let id = FileId::parse(id).ok()?;
        self.read().get(&id).cloned()
    }

    /// Returns every stored record.
    ///
    /// The order is unspecified and may differ between calls.
    pub fn list(&self) -> Vec<Arc<FileRecord>> {
        self.read().values().cloned().collect()
    }

    /// Removes the record named by `id`.
    ///
    /// Returns `true` if a record was removed, `false` if none existed.
    pub fn delete(&self, id: &str) -> bool {
        let Ok(id) = FileId::parse(id) else {
            return false;
        };

        let removed = self.write().remove(&id).is_some();
        if removed {
            tracing::debug!(file_id = %id, "removed file record");
        }
        removed
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<FileId, Arc<FileRecord>>> {
        self.files.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<FileId, Arc<FileRecord>>> {
        self.files.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn test_put_then_get_returns_record() {
        let store = FileStore::new();
        let id = store.put("report.txt".into(), b"hello".to_vec());

        let record = store.get(&id.to_string()).unwrap();
        assert_eq!(record.id(), id);
        assert_eq!(record.name(), "report.txt");
        assert_eq!(record.content(), b"hello");
    }

    #[test]
    fn test_get_unknown_id_is_absent() {
        let store = FileStore::new();
        store.put("a.txt".into(), b"a".to_vec());

        assert!(store.get(&FileId::new().to_string()).is_none());
    }

    #[test]
    fn test_get_non_canonical_id_is_absent() {
        let store = FileStore::new();
        let id = store.put("a.txt".into(), b"a".to_vec());

        let hyphenated = id.uuid().hyphenated().to_string();
        assert!(store.get(&hyphenated).is_none());
        assert!(store.get(&id.to_string().to_uppercase()).is_none());
        assert!(store.get("").is_none());
        assert!(store.get("not-an-id").is_none());
    }

    #[test]
    fn test_same_name_gets_distinct_ids() {
        let store = FileStore::new();
        let first = store.put("same.txt".into(), b"one".to_vec());
        let second = store.put("same.txt".into(), b"two".to_vec());

        assert_ne!(first, second);
        assert_eq!(store.get(&first.to_string()).unwrap().content(), b"one");
        assert_eq!(store.get(&second.to_string()).unwrap().content(), b"two");
    }

    #[test]
    fn test_identical_content_is_stored_twice() {
        let store = FileStore::new();
        let first = store.put("a.bin".into(), vec![1, 2, 3]);
        let second = store.put("b.bin".into(), vec![1, 2, 3]);

        assert_ne!(first, second);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_delete_removes_record() {
        let store = FileStore::new();
        let id = store.put("gone.txt".into(), b"bye".to_vec()).to_string();

        assert!(store.delete(&id));
        assert!(store.get(&id).is_none());
        assert!(!store.delete(&id));
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_unknown_or_malformed_id_returns_false() {
        let store = FileStore::new();
        store.put("keep.txt".into(), b"keep".to_vec());

        assert!(!store.delete(&FileId::new().to_string()));
        assert!(!store.delete("../../etc/passwd"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_list_empty_store() {
        let store = FileStore::new();

        assert!(store.list().is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_list_returns_every_record() {
        let store = FileStore::new();
        let names = ["a.txt", "b.txt", "c.txt", "a.txt"];
        for name in names {
            store.put(name.to_string(), name.as_bytes().to_vec());
        }

        let mut listed: Vec<String> = store.list().iter().map(|r| r.name().to_string()).collect();
        listed.sort();

        let mut expected: Vec<String> = names.iter().map(|n| n.to_string()).collect();
        expected.sort();

        assert_eq!(listed, expected);
    }

    #[test]
    fn test_list_after_delete() {
        let store = FileStore::new();
        let keep = store.put("keep.txt".into(), vec![]);
        let removed = store.put("drop.txt".into(), vec![]);

        assert!(store.delete(&removed.to_string()));

        let listed = store.list();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id(), keep);
    }

    #[test]
    fn test_clones_share_the_same_mapping() {
        let store = FileStore::new();
        let other = store.clone();

        let id = store.put("shared.txt".into(), b"x".to_vec());

        assert!(other.get(&id.to_string()).is_some());
        assert!(other.delete(&id.to_string()));
        assert!(store.get(&id.to_string()).is_none());
    }

    #[test]
    fn test_records_survive_deletion_for_existing_readers() {
        let store = FileStore::new();
        let id = store.put("held.txt".into(), b"held".to_vec()).to_string();

        let held = store.get(&id).unwrap();
        assert!(store.delete(&id));

        assert_eq!(held.content(), b"held");
    }

    #[test]
    fn test_concurrent_puts_lose_nothing() {
        let store = FileStore::new();
        let threads = 8;
        let per_thread = 200;

        let handles: Vec<_> = (0..threads)
            .map(|t| {
                let store = store.clone();
                thread::spawn(move || {
                    (0..per_thread)
                        .map(|i| {
                            let name = format!("t{}-{}.txt", t, i);
                            let content = name.clone().into_bytes();
                            (store.put(name, content), t, i)
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            for (id, t, i) in handle.join().unwrap() {
                assert!(ids.insert(id), "duplicate id {}", id);

                let record = store.get(&id.to_string()).unwrap();
                let expected = format!("t{}-{}.txt", t, i);
                assert_eq!(record.name(), expected);
                assert_eq!(record.content(), expected.as_bytes());
            }
        }

        assert_eq!(ids.len(), threads * per_thread);
        assert_eq!(store.len(), threads * per_thread);
    }

    #[test]
    fn test_concurrent_reads_and_deletes() {
        let store = FileStore::new();
        let ids: Vec<String> = (0..100)
            .map(|i| store.put(format!("{}.txt", i), vec![i as u8]).to_string())
            .collect();

        let deleter = {
            let store = store.clone();
            let ids = ids.clone();
            thread::spawn(move || ids.iter().filter(|id| store.delete(id)).count())
        };
        let reader = {
            let store = store.clone();
            thread::spawn(move || {
                for _ in 0..50 {
                    for record in store.list() {
                        assert_eq!(record.content().len(), 1);
                    }
                }
            })
        };

        assert_eq!(deleter.join().unwrap(), 100);
        reader.join().unwrap();
        assert!(store.is_empty());
    }
}
