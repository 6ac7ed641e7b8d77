// ═══════════════════════════════════════════════════════════════════
// Storage Tests: MemoryStore, FileStore, StorageManager, keys
// ═══════════════════════════════════════════════════════════════════

use std::collections::BTreeMap;

use proofolio_core::errors::CoreError;
use proofolio_core::storage::backend::StoreBackend;
use proofolio_core::storage::file::FileStore;
use proofolio_core::storage::keys::StorageKeys;
use proofolio_core::storage::manager::StorageManager;
use proofolio_core::storage::memory::MemoryStore;
use proofolio_core::storage::traits::KeyValueStore;

// ═══════════════════════════════════════════════════════════════════
// MemoryStore
// ═══════════════════════════════════════════════════════════════════

mod memory_store {
    use super::*;

    #[test]
    fn absent_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("likes").unwrap(), None);
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn set_then_get() {
        let store = MemoryStore::new();
        store.set("likes", r#"{"1":3}"#).unwrap();
        assert_eq!(store.get("likes").unwrap().as_deref(), Some(r#"{"1":3}"#));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn set_replaces_value() {
        let store = MemoryStore::new();
        store.set("k", "1").unwrap();
        store.set("k", "2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn clones_share_entries() {
        let a = MemoryStore::new();
        let b = a.clone();
        a.set("portfolios", "[]").unwrap();
        assert_eq!(b.get("portfolios").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn remove_absent_key_is_ok() {
        let store = MemoryStore::new();
        store.remove("nothing").unwrap();
        store.set("k", "v").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }
}

// ═══════════════════════════════════════════════════════════════════
// FileStore
// ═══════════════════════════════════════════════════════════════════

mod file_store {
    use super::*;

    #[test]
    fn creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("data");
        let store = FileStore::open(&dir).unwrap();
        assert!(dir.is_dir());
        assert_eq!(store.dir(), dir.as_path());
    }

    #[test]
    fn missing_file_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::open(tmp.path()).unwrap();
        assert_eq!(store.get("boardPosts").unwrap(), None);
    }

    #[test]
    fn writes_one_json_file_per_key() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::open(tmp.path()).unwrap();
        store.set("boardLikes", r#"{"1":15}"#).unwrap();
        let on_disk = std::fs::read_to_string(tmp.path().join("boardLikes.json")).unwrap();
        assert_eq!(on_disk, r#"{"1":15}"#);
        assert_eq!(store.get("boardLikes").unwrap().as_deref(), Some(r#"{"1":15}"#));
    }

    #[test]
    fn remove_deletes_file() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::open(tmp.path()).unwrap();
        store.set("likes", "{}").unwrap();
        store.remove("likes").unwrap();
        assert!(!tmp.path().join("likes.json").exists());
        store.remove("likes").unwrap();
    }

    #[test]
    fn rejects_path_like_keys() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::open(tmp.path()).unwrap();
        assert!(matches!(store.set("../escape", "x"), Err(CoreError::StorageIO(_))));
        assert!(matches!(store.get(""), Err(CoreError::StorageIO(_))));
    }
}

// ═══════════════════════════════════════════════════════════════════
// StorageManager
// ═══════════════════════════════════════════════════════════════════

mod manager {
    use super::*;

    #[test]
    fn load_absent_is_none() {
        let manager = StorageManager::new(MemoryStore::new());
        let loaded: Option<Vec<String>> = manager.load("portfolios").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn save_then_load() {
        let manager = StorageManager::new(MemoryStore::new());
        let mut likes = BTreeMap::new();
        likes.insert("1".to_string(), 42u64);
        manager.save("likes", &likes).unwrap();
        let loaded: BTreeMap<String, u64> = manager.load("likes").unwrap().unwrap();
        assert_eq!(loaded, likes);
    }

    #[test]
    fn malformed_value_is_deserialization_error() {
        let store = MemoryStore::new();
        store.set("likes", "{oops").unwrap();
        let manager = StorageManager::new(store);
        let err = manager.load::<BTreeMap<String, u64>>("likes").unwrap_err();
        match err {
            CoreError::Deserialization(msg) => assert!(msg.contains("'likes'")),
            other => panic!("expected Deserialization, got {other:?}"),
        }
    }

    #[test]
    fn wrong_shape_is_deserialization_error() {
        let store = MemoryStore::new();
        store.set("likes", r#"{"1":-3}"#).unwrap();
        let manager = StorageManager::new(store);
        assert!(matches!(
            manager.load::<BTreeMap<String, u64>>("likes"),
            Err(CoreError::Deserialization(_))
        ));
    }

    #[test]
    fn load_or_seed_writes_seed_once() {
        let store = MemoryStore::new();
        let manager = StorageManager::new(store.clone());
        let first: Vec<u32> = manager.load_or_seed("items", || vec![1, 2, 3]).unwrap();
        assert_eq!(first, vec![1, 2, 3]);
        assert_eq!(store.get("items").unwrap().as_deref(), Some("[1,2,3]"));

        let second: Vec<u32> = manager.load_or_seed("items", || vec![9]).unwrap();
        assert_eq!(second, vec![1, 2, 3]);
    }

    #[test]
    fn clear_removes_listed_keys_only() {
        let store = MemoryStore::new();
        store.set("likes", "{}").unwrap();
        store.set("dislikes", "{}").unwrap();
        store.set("other", "{}").unwrap();
        let manager = StorageManager::new(store.clone());
        manager.clear(&["likes", "dislikes"]).unwrap();
        assert_eq!(store.get("likes").unwrap(), None);
        assert_eq!(store.get("dislikes").unwrap(), None);
        assert!(store.get("other").unwrap().is_some());
    }

    #[test]
    fn works_over_file_backend() {
        let tmp = tempfile::tempdir().unwrap();
        let backend = StoreBackend::File(FileStore::open(tmp.path()).unwrap());
        assert_eq!(backend.name(), "file");
        let manager = StorageManager::new(backend);
        manager.save("comments", &vec!["a", "b"]).unwrap();
        let loaded: Vec<String> = manager.load("comments").unwrap().unwrap();
        assert_eq!(loaded, vec!["a", "b"]);
    }
}

// ═══════════════════════════════════════════════════════════════════
// StorageKeys
// ═══════════════════════════════════════════════════════════════════

mod keys {
    use super::*;

    #[test]
    fn portfolio_keys() {
        assert_eq!(
            StorageKeys::PORTFOLIO.all(),
            ["portfolios", "comments", "likes", "dislikes"]
        );
    }

    #[test]
    fn board_keys() {
        assert_eq!(
            StorageKeys::BOARD.all(),
            ["boardPosts", "boardComments", "boardLikes", "boardDislikes"]
        );
    }

    #[test]
    fn domains_do_not_overlap() {
        for key in StorageKeys::PORTFOLIO.all() {
            assert!(!StorageKeys::BOARD.all().contains(&key));
        }
    }
}
